#![no_main]

use std::io::Cursor;

use arbitrary::Arbitrary;
use hashes::{
  fast::{AcHash31, MODULUS, digest_word},
  io::{FileConfig, TailPolicy},
};
use libfuzzer_sys::fuzz_target;
use traits::FastHash as _;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
  a: u32,
  b: u32,
  capacity: u8,
  key: &'a [u8],
  msg: &'a [u8],
}

fn fold_reference(data: &[u8]) -> u32 {
  data.iter().enumerate().fold(0u32, |acc, (i, &b)| {
    acc.wrapping_add(u32::from(b) << (8 * (i % 4)))
  })
}

fuzz_target!(|input: Input<'_>| {
  let h = AcHash31::new(input.a, input.b);
  let reference = |acc: u32| ((u64::from(input.a) * u64::from(acc)) as u32).wrapping_add(input.b) % MODULUS;

  let msg_acc = fold_reference(input.msg);
  let digest = h.compute_bytes(input.msg);
  assert_eq!(digest_word(digest), reference(msg_acc));
  assert!(digest_word(digest) < MODULUS);
  assert_eq!(AcHash31::hash_with_seed([input.a, input.b], input.msg), digest_word(digest));

  let keyed = h.compute_keyed(input.key, input.msg);
  assert_eq!(digest_word(keyed), reference(fold_reference(input.key).wrapping_add(msg_acc)));
  assert!(h.verify_keyed(input.key, input.msg, &keyed).is_ok());

  let cfg = FileConfig::default()
    .with_buffer_capacity(usize::from(input.capacity))
    .with_tail(TailPolicy::ZeroPad);
  let streamed = h.compute_reader(Cursor::new(input.msg), &cfg).unwrap();
  assert_eq!(streamed, digest);
});
