//! Letter overlap between two words
//!
//! Both measures are symmetric, accept words of any length and return 0 for
//! empty input.

use std::collections::HashMap;

use crate::types::{OverlapMetric, OverlapScore};

/// Multiset intersection size: for each distinct letter,
/// `min(count_in_w1, count_in_w2)`.
pub fn overlap_total(w1: &str, w2: &str) -> usize {
    let mut remaining: HashMap<char, usize> = HashMap::new();
    for c in w1.chars() {
        *remaining.entry(c).or_default() += 1;
    }

    let mut total = 0;
    for c in w2.chars() {
        if let Some(n) = remaining.get_mut(&c) {
            if *n > 0 {
                *n -= 1;
                total += 1;
            }
        }
    }
    total
}

/// Count of indices below the shorter length where both words carry the
/// same letter.
pub fn overlap_same_position(w1: &str, w2: &str) -> usize {
    w1.chars().zip(w2.chars()).filter(|(a, b)| a == b).count()
}

pub fn overlap_score(w1: &str, w2: &str) -> OverlapScore {
    OverlapScore {
        total: overlap_total(w1, w2),
        same_position: overlap_same_position(w1, w2),
    }
}

pub fn overlap(w1: &str, w2: &str, metric: OverlapMetric) -> usize {
    match metric {
        OverlapMetric::Total => overlap_total(w1, w2),
        OverlapMetric::SamePosition => overlap_same_position(w1, w2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_total_counts_repeated_letters_once_per_pair() {
        assert_eq!(overlap_total("face", "beef"), 2);
        assert_eq!(overlap_total("aab", "abb"), 2);
        assert_eq!(overlap_total("abc", "xyz"), 0);
    }

    #[test]
    fn test_same_position_truncates_to_shorter() {
        assert_eq!(overlap_same_position("abc", "xbc"), 2);
        assert_eq!(overlap_same_position("cut", "cath"), 2);
        assert_eq!(overlap_same_position("hello", "hole"), 2);
    }

    #[test]
    fn test_empty_strings_score_zero() {
        assert_eq!(overlap_score("", ""), OverlapScore::default());
        assert_eq!(overlap_score("abc", ""), OverlapScore::default());
    }

    #[test]
    fn test_overlap_dispatches_on_metric() {
        assert_eq!(overlap("face", "beef", OverlapMetric::Total), 2);
        assert_eq!(overlap("face", "beef", OverlapMetric::SamePosition), 0);
    }

    proptest! {
        #[test]
        fn test_total_with_self_is_length(w in "[a-z]{1,12}") {
            prop_assert_eq!(overlap_total(&w, &w), w.len());
            prop_assert_eq!(overlap_same_position(&w, &w), w.len());
        }

        #[test]
        fn test_both_measures_symmetric(a in "[a-e]{0,8}", b in "[a-e]{0,8}") {
            prop_assert_eq!(overlap_total(&a, &b), overlap_total(&b, &a));
            prop_assert_eq!(overlap_same_position(&a, &b), overlap_same_position(&b, &a));
        }

        #[test]
        fn test_score_bounds_hold(a in "[a-d]{0,8}", b in "[a-d]{0,8}") {
            let s = overlap_score(&a, &b);
            prop_assert!(s.same_position <= s.total);
            prop_assert!(s.total <= a.len().min(b.len()));
        }
    }
}
