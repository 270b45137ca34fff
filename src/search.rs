//! The search driver.
//!
//! Orchestrates the four pipeline stages: enumerate compositions and both
//! string batches up front, then for each (composition, long string) pair
//! build the embedded family over every short string and verify that
//! Levenshtein and Hamming distance agree on every unordered pair. The first
//! long string that verifies becomes the composition's witness and the
//! driver moves on to the next composition; compositions with no witness
//! produce nothing.
//!
//! Reporting the *first* witness per composition is policy, not accident:
//! the enumerators' orders are fixed, so the output is deterministic, and
//! continuing to scan after a hit would change the observable output.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::compose::{Composition, CompositionSpec};
use crate::distance::{hamming, levenshtein};
use crate::embed::interleave;
use crate::strings::enumerate_bitstrings;
use crate::{Error, Result};

// ============================================================================
// SearchParams
// ============================================================================

/// Parameters of one search run.
///
/// The string lengths are derived, never stated: the short string carries
/// one bit per composition slot plus the trailing bit, and the long string
/// is exactly as long as every composition's sum. That keeps the
/// interleaver's `sum(A) == y.len()` contract and Hamming's equal-length
/// precondition true for every combination the driver can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Composition length (K).
    pub composition_len: usize,
    /// Composition target sum (T).
    pub target_sum: u32,
    /// Per-slot upper bound (U).
    pub max_value: u8,
}

/// Reference run: K=9, T=12, U=8.
impl Default for SearchParams {
    fn default() -> Self {
        Self { composition_len: 9, target_sum: 12, max_value: 8 }
    }
}

impl SearchParams {
    /// Short-string length: one bit per slot plus the trailing bit.
    pub fn x_len(&self) -> usize {
        self.composition_len + 1
    }

    /// Long-string length: every composition sums to exactly this.
    pub fn y_len(&self) -> usize {
        self.target_sum as usize
    }

    fn composition_spec(&self) -> CompositionSpec {
        CompositionSpec {
            len: self.composition_len,
            target_sum: self.target_sum,
            max_value: self.max_value,
        }
    }
}

// ============================================================================
// Witness
// ============================================================================

/// A composition and the first long string whose embedded family has
/// Hamming and Levenshtein distance agreeing on every pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    pub composition: Composition,
    pub y: String,
}

impl std::fmt::Display for Witness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Valid embedding with y = {} and A = {}",
            self.y, self.composition
        )
    }
}

// ============================================================================
// Search
// ============================================================================

/// A validated, ready-to-run search.
pub struct Search {
    params: SearchParams,
}

impl Search {
    /// Validate parameters and build a search.
    ///
    /// An unreachable target sum is not an error: it yields an empty
    /// composition set and therefore an empty (but successful) run.
    pub fn new(params: SearchParams) -> Result<Self> {
        if params.composition_len == 0 {
            return Err(Error::InvalidParams(
                "composition_len must be at least 1".into(),
            ));
        }
        // Both string batches are materialized; past 2^24 the all-pairs
        // check is unreachable anyway.
        if params.x_len() > 24 || params.y_len() > 24 {
            return Err(Error::InvalidParams(format!(
                "string lengths {} / {} exceed enumerable range",
                params.x_len(),
                params.y_len(),
            )));
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Run the search, returning one witness per composition that has one,
    /// in composition-enumeration order.
    pub fn run(&self) -> Result<Vec<Witness>> {
        self.run_with(|_| {})
    }

    /// Like [`run`](Self::run), but also invokes `on_witness` the moment
    /// each witness is found, before the search continues.
    pub fn run_with<F>(&self, mut on_witness: F) -> Result<Vec<Witness>>
    where
        F: FnMut(&Witness),
    {
        let compositions = self.params.composition_spec().enumerate();
        let xs = enumerate_bitstrings(self.params.x_len());
        let ys = enumerate_bitstrings(self.params.y_len());
        debug!(
            compositions = compositions.len(),
            short_strings = xs.len(),
            long_strings = ys.len(),
            "search space enumerated"
        );

        let mut witnesses = Vec::new();
        for a in &compositions {
            let mut found = false;
            for y in &ys {
                let family: Vec<String> =
                    xs.iter().map(|x| interleave(x, y, a)).collect();
                if is_isometric_family(&family)? {
                    let witness = Witness { composition: a.clone(), y: y.clone() };
                    info!(composition = %witness.composition, y = %witness.y, "witness found");
                    on_witness(&witness);
                    witnesses.push(witness);
                    found = true;
                    break;
                }
            }
            if !found {
                debug!(composition = %a, "no witness");
            }
        }
        Ok(witnesses)
    }
}

/// Does Levenshtein agree with Hamming on every unordered pair?
///
/// Short-circuits on the first disagreeing pair. All members must share one
/// length; the driver guarantees that, and a mismatch surfaces as
/// [`Error::LengthMismatch`] rather than a wrong answer.
pub fn is_isometric_family(family: &[String]) -> Result<bool> {
    for i in 0..family.len() {
        for j in (i + 1)..family.len() {
            if levenshtein(&family[i], &family[j]) != hamming(&family[i], &family[j])? {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_params_are_reference_run() {
        let params = SearchParams::default();
        assert_eq!(params.composition_len, 9);
        assert_eq!(params.target_sum, 12);
        assert_eq!(params.max_value, 8);
        assert_eq!(params.x_len(), 10);
        assert_eq!(params.y_len(), 12);
    }

    #[test]
    fn test_new_rejects_degenerate_params() {
        let zero_len = SearchParams { composition_len: 0, target_sum: 1, max_value: 8 };
        assert!(Search::new(zero_len).is_err());

        let huge = SearchParams { composition_len: 30, target_sum: 12, max_value: 8 };
        assert!(Search::new(huge).is_err());
    }

    #[test]
    fn test_witness_line_format() {
        let witness = Witness {
            composition: Composition::from(&[0, 2, 4][..]),
            y: "110100".into(),
        };
        assert_eq!(
            witness.to_string(),
            "Valid embedding with y = 110100 and A = [0, 2, 4]",
        );
    }

    #[test]
    fn test_isometric_family_short_circuit_cases() {
        // Hand-checked family from the K=1 run: pairwise ham == lev.
        let good: Vec<String> =
            ["000", "001", "100", "101"].iter().map(|s| s.to_string()).collect();
        assert!(is_isometric_family(&good).unwrap());

        // "01010" vs "10101": lev 2, ham 5.
        let bad: Vec<String> =
            ["01010", "10101"].iter().map(|s| s.to_string()).collect();
        assert!(!is_isometric_family(&bad).unwrap());

        // Singleton and empty families are vacuously isometric.
        assert!(is_isometric_family(&["0".to_string()]).unwrap());
        assert!(is_isometric_family(&[]).unwrap());
    }

    #[test]
    fn test_mismatched_family_lengths_error() {
        let family: Vec<String> = vec!["01".into(), "010".into()];
        assert!(is_isometric_family(&family).is_err());
    }
}
