// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use multiway::{
    search_iterative,
    search_iterative_by,
    search_recursive,
    search_recursive_by,
    Planner,
};
use multiway::random::Random;

type Search = fn(&[i64], &i64) -> Option<usize>;

const SEARCHES: [(&str, Search); 2] = [
    ("recursive", search_recursive::<i64>),
    ("iterative", search_iterative::<i64>),
];


mod scenarios {
    use super::*;

    fn check(n: i64, target: i64, expected: Option<usize>) {
        let arr: Vec<i64> = (0..n).collect();
        for (name, f) in SEARCHES {
            assert_eq!(f(&arr, &target), expected, "{name}: n={n} target={target}");
        }
    }

    #[test]
    fn small() { check(10, 5, Some(5)); }

    #[test]
    fn medium() { check(100, 42, Some(42)); }

    #[test]
    fn large() { check(1000, 777, Some(777)); }

    #[test]
    fn very_large() { check(10000, 9876, Some(9876)); }

    #[test]
    fn not_found() { check(100, 100, None); }
}


mod boundary {
    use super::*;

    #[test]
    fn empty() {
        let arr: Vec<i64> = vec![];
        for (_, f) in SEARCHES {
            assert_eq!(f(&arr, &0), None);
            assert_eq!(f(&arr, &i64::MIN), None);
        }
    }

    #[test]
    fn single() {
        let arr = vec![7i64];
        for (_, f) in SEARCHES {
            assert_eq!(f(&arr, &7), Some(0));
            assert_eq!(f(&arr, &6), None);
            assert_eq!(f(&arr, &8), None);
        }
    }

    #[test]
    fn first_and_last() {
        for n in 1..2000i64 {
            let arr: Vec<i64> = (0..n).collect();
            for (name, f) in SEARCHES {
                assert_eq!(f(&arr, &0), Some(0), "{name}: n={n}");
                assert_eq!(f(&arr, &(n - 1)), Some(n as usize - 1), "{name}: n={n}");
                assert_eq!(f(&arr, &-1), None, "{name}: n={n}");
                assert_eq!(f(&arr, &n), None, "{name}: n={n}");
            }
        }
    }

    #[test]
    fn extreme_values() {
        let arr = vec![i64::MIN, -1, 0, 1, i64::MAX];
        for (_, f) in SEARCHES {
            for (i, x) in arr.iter().enumerate() {
                assert_eq!(f(&arr, x), Some(i));
            }
        }
    }
}


mod exhaustive {
    use super::*;

    #[test]
    fn every_element_of_evens() {
        for n in 0..600i64 {
            let arr: Vec<i64> = (0..n).map(|x| 2 * x).collect();
            for (name, f) in SEARCHES {
                for i in 0..n {
                    assert_eq!(f(&arr, &(2 * i)), Some(i as usize), "{name}: n={n}");
                    assert_eq!(f(&arr, &(2 * i + 1)), None, "{name}: n={n}");
                }
            }
        }
    }

    #[test]
    fn random_sorted_sequences() {
        let rng = Random::new(42);
        for round in 0..20u64 {
            let r = rng.fork(round);
            let n = (r.rand() % 50_000) as usize;
            let arr: Vec<i64> = r.sorted_sequence(n, 1 + round % 7);
            let targets = r.next().queries(&arr, 2000);
            for t in targets.iter() {
                let expected = arr.binary_search(t).ok();
                for (name, f) in SEARCHES {
                    assert_eq!(f(&arr, t), expected, "{name}: n={n} target={t}");
                }
            }
        }
    }

    #[test]
    fn forms_agree() {
        let rng = Random::new(7);
        let arr: Vec<i64> = rng.sorted_sequence(100_000, 3);
        for t in -5..(arr[arr.len() - 1] + 5) {
            assert_eq!(search_recursive(&arr, &t), search_iterative(&arr, &t));
        }
    }
}


mod duplicates {
    use super::*;

    #[test]
    fn some_matching_index() {
        let mut arr: Vec<i64> = vec![];
        for v in 0..300i64 { for _ in 0..(v % 5) { arr.push(v); } }

        for (name, f) in SEARCHES {
            for v in 0..300i64 {
                match f(&arr, &v) {
                    Some(i) => assert_eq!(arr[i], v, "{name}"),
                    None => assert_eq!(v % 5, 0, "{name}: missed {v}"),
                }
            }
        }
    }

    #[test]
    fn all_equal() {
        let arr = vec![3i64; 1000];
        for (_, f) in SEARCHES {
            assert!(f(&arr, &3).is_some());
            assert_eq!(f(&arr, &2), None);
            assert_eq!(f(&arr, &4), None);
        }
    }
}


mod planners {
    use super::*;

    #[test]
    fn any_planner_finds_everything() {
        let planners = [
            Planner::new(0, 2),
            Planner::new(0, 3),
            Planner::new(1, 64),
            Planner::new(100, 8),
            Planner::new(10, 1000),
        ];
        let arr: Vec<i64> = (0..3000).map(|x| 3 * x).collect();
        let less = |a: &i64, b: &i64| a < b;
        for p in planners.iter() {
            for t in -2..9000 {
                let expected = if t % 3 == 0 && t >= 0 { Some(t as usize / 3) } else { None };
                assert_eq!(search_recursive_by(&arr, &t, p, less), expected, "{p:?}");
                assert_eq!(search_iterative_by(&arr, &t, p, less), expected, "{p:?}");
            }
        }
    }

    #[test]
    fn descending_order() {
        let arr: Vec<i64> = (0..1000).rev().collect();
        let greater = |a: &i64, b: &i64| a > b;
        let p = Planner::default();
        for t in 0..1000 {
            let expected = Some(999 - t as usize);
            assert_eq!(search_recursive_by(&arr, &t, &p, greater), expected);
            assert_eq!(search_iterative_by(&arr, &t, &p, greater), expected);
        }
        assert_eq!(search_iterative_by(&arr, &1000, &p, greater), None);
    }
}


mod generic {
    use super::*;

    #[test]
    fn strings() {
        let mut words: Vec<String> = ["pear", "apple", "fig", "kiwi", "lime", "plum",
            "date", "yuzu", "grape", "mango", "melon", "peach", "cherry"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        words.sort();

        for (i, w) in words.iter().enumerate() {
            assert_eq!(search_recursive(&words, w), Some(i));
            assert_eq!(search_iterative(&words, w), Some(i));
        }
        let missing = "banana".to_string();
        assert_eq!(search_recursive(&words, &missing), None);
        assert_eq!(search_iterative(&words, &missing), None);
    }

    #[test]
    fn key_order() {
        let pairs: Vec<(u32, u32)> = (0..500).map(|k| (k * 2, 500 - k)).collect();
        let by_key = |a: &(u32, u32), b: &(u32, u32)| a.0 < b.0;
        let p = Planner::default();
        assert_eq!(search_iterative_by(&pairs, &(84, 0), &p, by_key), Some(42));
        assert_eq!(search_recursive_by(&pairs, &(84, 0), &p, by_key), Some(42));
        assert_eq!(search_recursive_by(&pairs, &(85, 0), &p, by_key), None);
    }
}
