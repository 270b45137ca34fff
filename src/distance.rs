//! String distance metrics: Hamming and Levenshtein.
//!
//! Hamming is defined only for equal-length strings and fails fast through
//! the crate error type on a length mismatch; a mismatch here means the
//! driver wired its lengths wrong. Levenshtein is total: any two strings,
//! including empty ones.

use crate::{Error, Result};

/// Hamming distance: number of positions where the strings differ.
///
/// Both arguments must have the same length.
pub fn hamming(a: &str, b: &str) -> Result<usize> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch { left: a.len(), right: b.len() });
    }
    Ok(a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count())
}

/// Levenshtein distance: minimum number of single-character insertions,
/// deletions, and substitutions transforming `a` into `b`. All edits cost 1.
///
/// Standard dynamic program with base cases `dp[i][0] = i`, `dp[0][j] = j`
/// and `dp[i][j] = dp[i-1][j-1]` on match, else `1 + min(delete, insert,
/// substitute)`. Only two rows are kept live; the values are those of the
/// full table.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // prev is row i-1, curr is row i; column 0 of row i holds i deletions.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j + 1].min(curr[j]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hamming_reference_values() {
        assert_eq!(hamming("1010", "1001").unwrap(), 2);
        assert_eq!(hamming("", "").unwrap(), 0);
        assert_eq!(hamming("0110", "0110").unwrap(), 0);
    }

    #[test]
    fn test_hamming_rejects_unequal_lengths() {
        let err = hamming("101", "10").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::LengthMismatch { left: 3, right: 2 }
        ));
    }

    #[test]
    fn test_levenshtein_reference_values() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("", "101"), 3);
        assert_eq!(levenshtein("101", ""), 3);
        assert_eq!(levenshtein("0110", "0110"), 0);
        assert_eq!(levenshtein("1010", "1001"), 2);
    }

    #[test]
    fn test_metrics_diverge_on_shifted_strings() {
        // Rotating a string is cheap for Levenshtein (delete one end,
        // insert the other) but can flip every Hamming position.
        assert_eq!(hamming("01010", "10101").unwrap(), 5);
        assert_eq!(levenshtein("01010", "10101"), 2);
        // Two mismatched positions where the shift gains nothing.
        assert_eq!(hamming("0111", "1110").unwrap(), 2);
        assert_eq!(levenshtein("0111", "1110"), 2);
    }

    proptest! {
        #[test]
        fn prop_hamming_symmetry_and_identity(
            s in "[01]{0,12}",
            t in "[01]{0,12}",
        ) {
            prop_assert_eq!(hamming(&s, &s).unwrap(), 0);
            if s.len() == t.len() {
                prop_assert_eq!(
                    hamming(&s, &t).unwrap(),
                    hamming(&t, &s).unwrap()
                );
            } else {
                prop_assert!(hamming(&s, &t).is_err());
            }
        }

        #[test]
        fn prop_levenshtein_metric_axioms(
            s in "[01]{0,10}",
            t in "[01]{0,10}",
            u in "[01]{0,10}",
        ) {
            prop_assert_eq!(levenshtein(&s, &s), 0);
            prop_assert_eq!(levenshtein(&s, &t), levenshtein(&t, &s));
            prop_assert!(
                levenshtein(&s, &u) <= levenshtein(&s, &t) + levenshtein(&t, &u)
            );
            prop_assert!(levenshtein(&s, &t) >= s.len().abs_diff(t.len()));
        }

        #[test]
        fn prop_hamming_bounds_levenshtein(
            pairs in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..=12),
        ) {
            // On equal lengths, substitutions alone realize Hamming, so
            // Levenshtein can never exceed it.
            let bit = |b: bool| if b { '1' } else { '0' };
            let s: String = pairs.iter().map(|&(a, _)| bit(a)).collect();
            let t: String = pairs.iter().map(|&(_, b)| bit(b)).collect();
            prop_assert!(levenshtein(&s, &t) <= hamming(&s, &t).unwrap());
        }
    }
}
