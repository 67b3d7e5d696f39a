use ordtree::{AvlSet, BstSet};

fn main() {
    let mut avl = AvlSet::new();
    for key in [10, 20, 30, 40, 50, 25] {
        avl.insert(key);
    }
    println!("AVL {avl}, height {}", avl.height());
    print!("{}", avl.dump());

    avl.remove(&30);
    println!("After removing 30: {avl}");
    println!("Pre-order: {:?}", avl.pre_order().collect::<Vec<_>>());
    println!("Post-order: {:?}", avl.post_order().collect::<Vec<_>>());
    println!("floor(33) = {:?}, higher(50) = {:?}", avl.floor(&33), avl.higher(&50));

    let bst: BstSet<i32> = (1..=6).collect();
    println!("BST {bst}, height {}", bst.height());
    match bst.range(&2, &4) {
        Ok(keys) => println!("range(2, 4) = {keys:?}"),
        Err(err) => println!("range failed: {err}"),
    }
    if let Err(err) = bst.get(10) {
        println!("get(10) failed: {err}");
    }
}
