//! Folding of byte buffers down to one accumulator word.

use traits::WORD_BYTES;

/// Fold `data` into one word.
///
/// Consecutive 4-byte chunks are read as little-endian words and summed with
/// wraparound. A trailing partial chunk is zero-padded first, so `[0xFF]`
/// contributes `0x0000_00FF`. An empty buffer folds to 0.
///
/// ```rust
/// use hashes::fast::fold;
///
/// assert_eq!(fold(&[]), 0);
/// assert_eq!(fold(&[0x01, 0x00, 0x00, 0x00, 0xFF]), 0x100);
/// ```
#[inline]
#[must_use]
pub fn fold(data: &[u8]) -> u32 {
  let (words, tail) = data.as_chunks::<WORD_BYTES>();
  let acc = words
    .iter()
    .fold(0u32, |acc, word| acc.wrapping_add(u32::from_le_bytes(*word)));

  if tail.is_empty() {
    return acc;
  }
  let mut last = [0u8; WORD_BYTES];
  for (dst, src) in last.iter_mut().zip(tail) {
    *dst = *src;
  }
  acc.wrapping_add(u32::from_le_bytes(last))
}
