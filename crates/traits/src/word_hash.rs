//! Keyed word hashing capability.

use core::fmt::Debug;

/// A parameterized hash over 32-bit words.
///
/// Each concrete family stores its own parameters and decides how byte
/// buffers are folded down to the word domain. Callers that only need
/// "some hash with a fixed digest width" can stay generic over this trait and
/// swap families without touching call sites.
///
/// # Implementor Requirements
///
/// - `hash_word` and `hash_bytes` must be pure functions of the instance
///   parameters and their input.
/// - `Digest` must be exactly [`DIGEST_LEN`](Self::DIGEST_LEN) bytes long.
pub trait WordHash {
  /// Digest length in bytes.
  const DIGEST_LEN: usize;

  /// Digest type, typically `[u8; DIGEST_LEN]`.
  type Digest: Copy + Eq + Debug + AsRef<[u8]>;

  /// Hash a single word.
  #[must_use]
  fn hash_word(&self, word: u32) -> u32;

  /// Hash a byte buffer of any length.
  #[must_use]
  fn hash_bytes(&self, data: &[u8]) -> Self::Digest;

  /// Digest length in bytes, for callers holding a trait object-like value.
  #[inline]
  #[must_use]
  fn digest_len(&self) -> usize {
    Self::DIGEST_LEN
  }
}
