use std::{io::Cursor, vec::Vec};

use proptest::prelude::*;

use super::*;

/// Byte-at-a-time reference fold: place each byte at its little-endian lane.
fn fold_reference(data: &[u8]) -> u32 {
  data.iter().enumerate().fold(0u32, |acc, (i, &b)| {
    let shift = 8 * (i % 4) as u32;
    acc.wrapping_add(u32::from(b) << shift)
  })
}

/// Affine transform computed in 64 bits, truncated where the family wraps.
fn transform_reference(key: u32, a: u32, b: u32) -> u32 {
  let product = (u64::from(a) * u64::from(key)) as u32;
  let sum = (u64::from(product) + u64::from(b)) as u32;
  sum % MODULUS
}

proptest! {
  #[test]
  fn compute_is_deterministic(a in any::<u32>(), b in any::<u32>(), key in any::<u32>()) {
    let h = AcHash31::new(a, b);
    prop_assert_eq!(h.compute(key), h.compute(key));
    prop_assert!(h.compute(key) < MODULUS);
  }

  #[test]
  fn compute_matches_reference(a in any::<u32>(), b in any::<u32>(), key in any::<u32>()) {
    prop_assert_eq!(AcHash31::new(a, b).compute(key), transform_reference(key, a, b));
  }

  #[test]
  fn override_leaves_instance_parameters(
    a in any::<u32>(), b in any::<u32>(), a2 in any::<u32>(), b2 in any::<u32>(), key in any::<u32>()
  ) {
    let h = AcHash31::new(a, b);
    let original = h.compute(key);
    prop_assert_eq!(h.compute_with(key, a2, b2), AcHash31::new(a2, b2).compute(key));
    prop_assert_eq!(h.compute(key), original);
    prop_assert_eq!((h.a(), h.b()), (a, b));
  }

  #[test]
  fn fold_matches_bytewise_reference(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    prop_assert_eq!(fold(&data), fold_reference(&data));
  }

  #[test]
  fn fold_is_additive_over_word_aligned_splits(
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    split_words in 0usize..=256,
  ) {
    let split = (split_words * 4).min(data.len() / 4 * 4);
    let (left, right) = data.split_at(split);
    prop_assert_eq!(fold(&data), fold(left).wrapping_add(fold(right)));
  }

  #[test]
  fn bytes_digest_is_transform_of_fold(
    a in any::<u32>(), b in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 0..=1024)
  ) {
    let h = AcHash31::new(a, b);
    prop_assert_eq!(h.compute_bytes(&data), h.compute(fold(&data)).to_le_bytes());
  }

  #[test]
  fn keyed_is_transform_of_summed_folds(
    a in any::<u32>(),
    b in any::<u32>(),
    key in proptest::collection::vec(any::<u8>(), 0..=64),
    msg in proptest::collection::vec(any::<u8>(), 0..=1024),
  ) {
    let h = AcHash31::new(a, b);
    let expected = h.compute(fold(&key).wrapping_add(fold(&msg)));
    prop_assert_eq!(digest_word(h.compute_keyed(&key, &msg)), expected);
    prop_assert!(h.verify_keyed(&key, &msg, &h.compute_keyed(&key, &msg)).is_ok());
  }

  #[test]
  fn words_digest_matches_bytes_digest(a in any::<u32>(), b in any::<u32>(), words in proptest::collection::vec(any::<u32>(), 0..=256)) {
    let h = AcHash31::new(a, b);
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    prop_assert_eq!(h.compute_words(words.iter().copied()), h.compute_bytes(&bytes));
  }

  #[test]
  fn reader_matches_bytes_for_any_buffer(
    a in any::<u32>(),
    b in any::<u32>(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    capacity in 0usize..=64,
  ) {
    let h = AcHash31::new(a, b);
    let cfg = FileConfig::default().with_buffer_capacity(capacity);
    let digest = h.compute_reader(Cursor::new(&data), &cfg).unwrap();
    prop_assert_eq!(digest, h.compute_bytes(&data));
  }

  #[test]
  fn fast_hash_agrees_with_instance(a in any::<u32>(), b in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 0..=512)) {
    let ours = AcHash31::hash_with_seed([a, b], &data);
    prop_assert_eq!(ours, digest_word(AcHash31::new(a, b).compute_bytes(&data)));
  }
}
