//! The interleaving transform.
//!
//! Folds a short string into a long one under a composition: one short-string
//! bit, then a run of long-string bits whose length the composition dictates,
//! repeated across every slot, with the short string's final bit closing the
//! output. Long-string bits are consumed in order, each at most once; when
//! the composition's sum equals the long string's length (the driver always
//! arranges this), each exactly once.

use crate::compose::Composition;

/// Interleave `x` into `y` under composition `a`.
///
/// For each slot `i`, appends `x[i]` followed by the next `a[i]` bytes of
/// `y`; after the last slot, appends the final byte of `x`. Output length is
/// `x.len() + y.len()` when `x.len() == a.len() + 1`.
///
/// Caller contract, not validated here: `a.sum() == y.len()`. A longer `y`
/// has the tail past the composition's sum silently ignored, and a
/// shorter one panics on the out-of-range slice. `x.len()` is normally
/// `a.len() + 1`; with `x.len() == a.len()` the final byte repeats the last
/// slotted one. Both strings ASCII. The driver upholds all of this by
/// deriving every length from the composition parameters.
pub fn interleave(x: &str, y: &str, a: &Composition) -> String {
    debug_assert!(x.len() >= a.len(), "x must fill every slot");
    debug_assert!(!x.is_empty(), "x must supply a trailing byte");

    let x_bytes = x.as_bytes();
    let mut result = String::with_capacity(x.len() + y.len());
    let mut cursor = 0;
    for (i, &run) in a.values().iter().enumerate() {
        result.push(x_bytes[i] as char);
        let run = run as usize;
        result.push_str(&y[cursor..cursor + run]);
        cursor += run;
    }
    result.push(x_bytes[x.len() - 1] as char);
    result
}
