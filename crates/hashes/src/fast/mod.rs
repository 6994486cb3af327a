//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! Do not use these hashes for signatures, key derivation, or anything that
//! must withstand an adversary choosing inputs after seeing outputs. The keyed
//! variants resist casual tampering only while the parameters stay secret.

pub mod achash31;

pub use achash31::{AcHash31, DIGEST_LEN, MODULUS, digest_word, fold};
