//! Keyed affine modular hashing.
//!
//! `achash` provides the AcHash31 family `h(x) = (a·x + b) mod p`, a building
//! block for hash tables, bloom filters, and load-balancing buckets. It is
//! **not** a cryptographic hash and makes no collision-resistance claim
//! against adversaries.
//!
//! # Quick Start
//!
//! ```
//! use achash::{AcHash31, WordHash};
//!
//! let h = AcHash31::new(0x9E37_79B9, 0x7F4A_7C15);
//!
//! // One word
//! assert_eq!(h.compute(1), 0x1D81_F5CE);
//!
//! // Any byte buffer, folded to one word first
//! let digest = h.compute_bytes(b"abc");
//! assert_eq!(digest.len(), h.digest_len());
//!
//! // Keyed tag
//! let tag = h.compute_keyed(b"secret", b"message");
//! assert!(h.verify_keyed(b"secret", b"message", &tag).is_ok());
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | File and reader hashing, error types for I/O |
//! | `rand` | No | `AcHash31::from_rng` for random family members |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! achash = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use hashes::fast::{AcHash31, DIGEST_LEN, MODULUS, digest_word, fold};
#[cfg(feature = "std")]
pub use hashes::io::{FileConfig, TailPolicy, WordReader};
pub use traits::{FastHash, VerificationError, WordHash};
#[cfg(feature = "std")]
pub use traits::{FileHashError, WordReadError};
