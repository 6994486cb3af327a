//! AcHash31: `h(x) = (a·x + b) mod p` over 32-bit words (**NOT CRYPTO**).
//!
//! A member of the family is chosen by two coefficients `(a, b)`. The modulus
//! [`MODULUS`] is shared by every member and must not be re-derived: other
//! implementations of this family only agree with this one when they use the
//! same constant.
//!
//! # Wire contract
//!
//! - Product and sum wrap modulo 2^32 *before* the reduction by [`MODULUS`].
//! - Byte buffers fold to one word by summing consecutive 4-byte little-endian
//!   words with wraparound. A trailing partial word is zero-padded.
//! - Keyed hashing folds key and message independently, adds the two
//!   accumulators with wraparound, and hashes once.
//! - Digests are the 4-byte little-endian encoding of the hashed word.
//!
//! # Example
//!
//! ```rust
//! use hashes::fast::AcHash31;
//!
//! let h = AcHash31::new(0x9E37_79B9, 0x7F4A_7C15);
//! assert_eq!(h.compute(0), 0x7F4A_7C15 % hashes::fast::MODULUS);
//!
//! // 1 + 0xFF after zero-padding the trailing byte.
//! let digest = h.compute_bytes(&[0x01, 0x00, 0x00, 0x00, 0xFF]);
//! assert_eq!(u32::from_le_bytes(digest), h.compute(0x100));
//! ```

use traits::{FastHash, VerificationError, WordHash};

#[cfg(feature = "std")]
mod config;
#[cfg(feature = "std")]
mod file;
mod fold;

#[cfg(all(test, feature = "std"))]
mod proptests;

#[cfg(feature = "std")]
pub use config::{FileConfig, TailPolicy};
pub use fold::fold;

/// Family modulus, shared by every instance.
pub const MODULUS: u32 = 0x2FFF_FFFF;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 4;

/// Affine modular hash with fixed coefficients.
///
/// Immutable after construction, so one instance can be shared by reference
/// across threads without synchronization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AcHash31 {
  a: u32,
  b: u32,
}

impl AcHash31 {
  /// Create the family member with multiplier `a` and addend `b`.
  #[inline]
  #[must_use]
  pub const fn new(a: u32, b: u32) -> Self {
    Self { a, b }
  }

  /// Draw `(a, b)` uniformly at random.
  #[cfg(feature = "rand")]
  #[inline]
  #[must_use]
  pub fn from_rng<R: rand::RngCore + ?Sized>(rng: &mut R) -> Self {
    Self::new(rng.next_u32(), rng.next_u32())
  }

  /// Multiplier coefficient.
  #[inline]
  #[must_use]
  pub const fn a(&self) -> u32 {
    self.a
  }

  /// Additive coefficient.
  #[inline]
  #[must_use]
  pub const fn b(&self) -> u32 {
    self.b
  }

  /// The affine transform for arbitrary coefficients.
  #[inline(always)]
  #[must_use]
  pub const fn transform(key: u32, a: u32, b: u32) -> u32 {
    a.wrapping_mul(key).wrapping_add(b) % MODULUS
  }

  /// Hash one word with this instance's coefficients.
  #[inline]
  #[must_use]
  pub const fn compute(&self, key: u32) -> u32 {
    Self::transform(key, self.a, self.b)
  }

  /// Hash one word with caller-supplied coefficients.
  ///
  /// The instance is left untouched, so one value can stand in for many
  /// independent family members (e.g. the k hashes of a bloom filter).
  #[inline]
  #[must_use]
  pub const fn compute_with(&self, key: u32, a: u32, b: u32) -> u32 {
    Self::transform(key, a, b)
  }

  /// Hash a byte buffer of any length.
  ///
  /// An empty buffer folds to 0, giving the digest of `b % MODULUS`.
  #[inline]
  #[must_use]
  pub fn compute_bytes(&self, data: &[u8]) -> [u8; DIGEST_LEN] {
    self.digest_of(fold(data))
  }

  /// Hash an already produced sequence of words.
  ///
  /// The words are summed with wraparound and the sum is hashed. This is the
  /// contract file hashing builds on.
  #[inline]
  #[must_use]
  pub fn compute_words<I>(&self, words: I) -> [u8; DIGEST_LEN]
  where
    I: IntoIterator<Item = u32>,
  {
    let acc = words.into_iter().fold(0u32, u32::wrapping_add);
    self.digest_of(acc)
  }

  /// Keyed hash of `msg` under the secret `key`.
  ///
  /// Key and message are folded independently and their accumulators added
  /// with wraparound before the single affine transform. Only as strong as the
  /// secrecy of `(a, b)` and `key` together.
  #[inline]
  #[must_use]
  pub fn compute_keyed(&self, key: &[u8], msg: &[u8]) -> [u8; DIGEST_LEN] {
    self.digest_of(fold(key).wrapping_add(fold(msg)))
  }

  /// Recompute the keyed digest of `msg` and compare it against `tag`.
  ///
  /// The comparison does not short-circuit on the first differing byte.
  pub fn verify_keyed(&self, key: &[u8], msg: &[u8], tag: &[u8; DIGEST_LEN]) -> Result<(), VerificationError> {
    let computed = self.compute_keyed(key, msg);
    let diff = computed.iter().zip(tag).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    if diff == 0 {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }

  #[inline(always)]
  fn digest_of(&self, acc: u32) -> [u8; DIGEST_LEN] {
    self.compute(acc).to_le_bytes()
  }
}

/// Decode a digest back to the word it encodes.
#[inline]
#[must_use]
pub const fn digest_word(digest: [u8; DIGEST_LEN]) -> u32 {
  u32::from_le_bytes(digest)
}

impl WordHash for AcHash31 {
  const DIGEST_LEN: usize = DIGEST_LEN;
  type Digest = [u8; DIGEST_LEN];

  #[inline]
  fn hash_word(&self, word: u32) -> u32 {
    self.compute(word)
  }

  #[inline]
  fn hash_bytes(&self, data: &[u8]) -> Self::Digest {
    self.compute_bytes(data)
  }
}

impl FastHash for AcHash31 {
  const OUTPUT_SIZE: usize = DIGEST_LEN;
  type Output = u32;
  /// `[a, b]`.
  type Seed = [u32; 2];

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    let [a, b] = seed;
    Self::transform(fold(data), a, b)
  }
}
