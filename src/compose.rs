//! Composition enumeration — the embedding parameter space.
//!
//! A composition is a fixed-length sequence of small non-negative integers
//! with a fixed total, telling the interleaver how many long-string bits to
//! lay down after each short-string bit. Runs of interleaved bits shorter
//! than two break the distance correspondence, which is what the adjacency
//! filter encodes: a slot holding 0 or 1 may only be followed by a slot
//! holding 1 or more-than-1 respectively.
//!
//! Enumeration is a depth-first search with a running-sum cutoff. Output
//! order (lexicographic, ascending per slot) is part of the contract: the
//! search driver reports the first witness per composition, so reordering
//! the enumeration changes observable output.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// Composition
// ============================================================================

/// A composition vector: slot values in `[0, max_value]` summing to a fixed
/// target. Inline storage covers every practical search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Composition(SmallVec<[u8; 16]>);

impl Composition {
    /// Slot values in order.
    pub fn values(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total of all slots; equals the long-string length it consumes.
    pub fn sum(&self) -> usize {
        self.0.iter().map(|&v| v as usize).sum()
    }
}

impl From<&[u8]> for Composition {
    fn from(values: &[u8]) -> Self {
        Self(SmallVec::from_slice(values))
    }
}

/// Renders as `[a0, a1, ..., aK-1]` — the exact form the witness line uses.
impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// CompositionSpec
// ============================================================================

/// Parameters of one composition enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionSpec {
    /// Number of slots (K).
    pub len: usize,
    /// Required total over all slots (T).
    pub target_sum: u32,
    /// Inclusive per-slot upper bound (U).
    pub max_value: u8,
}

/// Reference configuration: K=9, T=12, U=8.
impl Default for CompositionSpec {
    fn default() -> Self {
        Self { len: 9, target_sum: 12, max_value: 8 }
    }
}

impl CompositionSpec {
    /// Enumerate every composition satisfying the spec, in DFS value order.
    ///
    /// Candidate values are tried ascending at each slot, so the cutoff once
    /// the running sum would exceed `target_sum` is a true early termination
    /// rather than a skip. A spec no sequence satisfies yields an empty vec.
    pub fn enumerate(&self) -> Vec<Composition> {
        let mut result = Vec::new();
        let mut current: SmallVec<[u8; 16]> = SmallVec::from_elem(0, self.len);
        self.descend(0, 0, &mut current, &mut result);
        result
    }

    fn descend(
        &self,
        pos: usize,
        sum: u32,
        current: &mut SmallVec<[u8; 16]>,
        out: &mut Vec<Composition>,
    ) {
        if pos == self.len {
            if sum == self.target_sum && adjacency_ok(current) {
                out.push(Composition(current.clone()));
            }
            return;
        }
        for val in 0..=self.max_value {
            if sum + u32::from(val) > self.target_sum {
                break;
            }
            current[pos] = val;
            self.descend(pos + 1, sum + u32::from(val), current, out);
        }
    }
}

/// Adjacency filter: no slot pair may be (0,0), (0,1), or (1,0).
fn adjacency_ok(values: &[u8]) -> bool {
    values
        .windows(2)
        .all(|w| !matches!((w[0], w[1]), (0, 0) | (0, 1) | (1, 0)))
}
