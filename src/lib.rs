//! # isometry-rs — Hamming ↔ Levenshtein embedding search
//!
//! An exhaustive combinatorial search for interleaving embeddings of binary
//! codes under which Hamming distance and Levenshtein (edit) distance agree
//! on every pair of the embedded family.
//!
//! ## Design Principles
//!
//! 1. **Values, not objects**: bit strings, compositions, and witnesses are
//!    plain immutable values built per iteration and dropped after use
//! 2. **Enumeration order is contract**: both enumerators emit in a fixed,
//!    documented order, and the driver's "first witness per composition"
//!    policy depends on it
//! 3. **Lengths are derived, never repeated**: the driver computes the short
//!    and long string lengths from the composition parameters, so the
//!    embedding and Hamming preconditions hold by construction
//! 4. **Pure pipeline stages**: enumerate → interleave → verify are free
//!    functions over immutable inputs; the driver owns all orchestration
//!
//! ## Quick Start
//!
//! ```rust
//! use isometry_rs::{Search, SearchParams};
//!
//! # fn example() -> isometry_rs::Result<()> {
//! // Tiny parameter set: compositions of length 1 summing to 1.
//! let search = Search::new(SearchParams {
//!     composition_len: 1,
//!     target_sum: 1,
//!     max_value: 8,
//! })?;
//!
//! for witness in search.run()? {
//!     println!("{witness}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Enumerate strings | [`strings`] | all 2^L bit strings of length L, index order |
//! | Enumerate compositions | [`compose`] | DFS with sum cutoff + adjacency filter |
//! | Interleave | [`embed`] | fold a short string into a long one under a composition |
//! | Verify | [`distance`] + [`search`] | all-pairs Hamming == Levenshtein check |

// ============================================================================
// Modules
// ============================================================================

pub mod compose;
pub mod distance;
pub mod embed;
pub mod search;
pub mod strings;

// ============================================================================
// Re-exports: Enumeration
// ============================================================================

pub use compose::{Composition, CompositionSpec};
pub use strings::enumerate_bitstrings;

// ============================================================================
// Re-exports: Pipeline
// ============================================================================

pub use distance::{hamming, levenshtein};
pub use embed::interleave;

// ============================================================================
// Re-exports: Driver
// ============================================================================

pub use search::{is_isometric_family, Search, SearchParams, Witness};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("invalid search parameters: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, Error>;
