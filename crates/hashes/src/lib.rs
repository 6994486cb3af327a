//! Keyed affine modular hash families.
//!
//! This crate is `no_std` compatible. The `std` feature adds file hashing,
//! the `rand` feature adds random parameter selection. Dev-only dependencies
//! are used for property testing and benchmarking.
//!
//! # Modules
//!
//! - [`fast`] - Non-cryptographic keyed hashes (**NOT CRYPTO**).
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod fast;
#[cfg(feature = "std")]
pub mod io;

pub use traits::{FastHash, VerificationError, WordHash};
#[cfg(feature = "std")]
pub use traits::{FileHashError, WordReadError};
