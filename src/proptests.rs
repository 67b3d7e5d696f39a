use super::{AvlSet, BstSet, Error};

use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Remove(i16),
    Contains(i16),
    Bounds(i16),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // Narrow key space so removes and duplicate inserts actually hit.
    let key = -300i16..300;
    let op = prop_oneof![
        45 => key.clone().prop_map(Op::Insert),
        30 => key.clone().prop_map(Op::Remove),
        15 => key.clone().prop_map(Op::Contains),
        10 => key.prop_map(Op::Bounds),
    ];
    prop::collection::vec(op, 0..=500)
}

fn oracle_bounds(m: &BTreeSet<i16>, key: i16) -> [Option<i16>; 4] {
    use std::ops::Bound::{Excluded, Unbounded};
    [
        m.range(..=key).next_back().copied(),
        m.range(key..).next().copied(),
        m.range(..key).next_back().copied(),
        m.range((Excluded(key), Unbounded)).next().copied(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_avl_matches_btreeset(ops in ops_strategy()) {
        let mut t: AvlSet<i16> = AvlSet::new();
        let mut m: BTreeSet<i16> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    prop_assert_eq!(t.insert(key), m.insert(key));
                    t.check_consistency();
                }
                Op::Remove(key) => {
                    prop_assert_eq!(t.remove(&key), m.remove(&key));
                    prop_assert!(!t.contains(&key));
                    t.check_consistency();
                }
                Op::Contains(key) => {
                    prop_assert_eq!(t.contains(&key), m.contains(&key));
                }
                Op::Bounds(key) => {
                    let got = [
                        t.floor(&key).copied(),
                        t.ceiling(&key).copied(),
                        t.lower(&key).copied(),
                        t.higher(&key).copied(),
                    ];
                    prop_assert_eq!(got, oracle_bounds(&m, key));
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        let got: Vec<i16> = t.iter().copied().collect();
        let expected: Vec<i16> = m.iter().copied().collect();
        prop_assert_eq!(&got, &expected);
        for (rank, key) in expected.iter().enumerate() {
            prop_assert_eq!(t.get(rank), Ok(key));
        }
        prop_assert_eq!(t.to_vec().len(), t.len());
    }

    #[test]
    fn prop_bst_matches_btreeset(ops in ops_strategy()) {
        let mut t: BstSet<i16> = BstSet::new();
        let mut m: BTreeSet<i16> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    prop_assert_eq!(t.insert(key), m.insert(key));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(t.remove(&key), m.remove(&key));
                    prop_assert!(!t.contains(&key));
                }
                Op::Contains(key) => {
                    prop_assert_eq!(t.contains(&key), m.contains(&key));
                }
                Op::Bounds(key) => {
                    let got = [
                        t.floor(&key).copied(),
                        t.ceiling(&key).copied(),
                        t.lower(&key).copied(),
                        t.higher(&key).copied(),
                    ];
                    prop_assert_eq!(got, oracle_bounds(&m, key));
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        t.check_consistency();
        let got: Vec<i16> = t.iter().copied().collect();
        let expected: Vec<i16> = m.iter().copied().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_range_matches_btreeset(
        keys in prop::collection::vec(any::<i16>(), 0..=200),
        a in any::<i16>(),
        b in any::<i16>(),
    ) {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let t: BstSet<i16> = keys.iter().copied().collect();
        let m: BTreeSet<i16> = keys.iter().copied().collect();

        let got: Vec<i16> = t.range(&from, &to).unwrap().into_iter().copied().collect();
        let expected: Vec<i16> = m.range(from..=to).copied().collect();
        prop_assert_eq!(got, expected);
        if from != to {
            prop_assert_eq!(t.range(&to, &from), Err(Error::InvalidRange));
        }
    }

    #[test]
    fn prop_avl_stays_shallow(keys in prop::collection::vec(any::<i32>(), 1..=300)) {
        let t: AvlSet<i32> = keys.iter().copied().collect();
        t.check_consistency();
        // AVL height bound: h < 1.4405 * log2(n + 2)
        let bound = 1.4405 * ((t.len() + 2) as f64).log2();
        prop_assert!((t.height() as f64) < bound);

        let other: AvlSet<i32> = keys.iter().rev().copied().collect();
        prop_assert_eq!(&t, &other);
    }
}
