//! Binary string enumeration.
//!
//! Produces every bit string of a fixed length in index order: the i-th
//! string (0-indexed) is the MSB-first binary representation of i. Both the
//! embedding stage and the all-pairs verification consume these batches as
//! immutable values, so the whole batch is materialized once up front.

/// Enumerate all `2^len` binary strings of length `len`, in index order.
///
/// The i-th entry spells out i in binary, most-significant bit first, padded
/// to `len` characters of `'0'`/`'1'`. `len = 0` yields the single empty
/// string. Lengths beyond ~20 are impractical (the batch is materialized);
/// that is a caller-side concern, not defended against here.
pub fn enumerate_bitstrings(len: usize) -> Vec<String> {
    let total = 1usize << len;
    let mut result = Vec::with_capacity(total);
    for i in 0..total {
        let mut s = String::with_capacity(len);
        // MSB first: walk the bit positions from high to low.
        for j in (0..len).rev() {
            s.push(if (i >> j) & 1 == 1 { '1' } else { '0' });
        }
        result.push(s);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_length_two_batch() {
        assert_eq!(enumerate_bitstrings(2), vec!["00", "01", "10", "11"]);
    }

    #[test]
    fn test_zero_length_yields_empty_string() {
        assert_eq!(enumerate_bitstrings(0), vec![String::new()]);
    }

    #[test]
    fn test_batch_is_index_order() {
        for len in 1..=6 {
            let batch = enumerate_bitstrings(len);
            assert_eq!(batch.len(), 1 << len);
            for (i, s) in batch.iter().enumerate() {
                assert_eq!(s, &format!("{i:0len$b}"), "index {i} at len {len}");
            }
        }
    }

    #[test]
    fn test_batch_is_distinct() {
        let batch = enumerate_bitstrings(5);
        let set: hashbrown::HashSet<&String> = batch.iter().collect();
        assert_eq!(set.len(), batch.len());
    }
}
