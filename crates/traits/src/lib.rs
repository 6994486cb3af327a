//! Capability traits shared by achash hash families.
//!
//! This crate defines the interfaces that every concrete family implements and
//! the word-stream reader that feeds file-sourced integers into them. It is
//! `no_std` compatible; the I/O adapters and their error types require `std`.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`WordHash`] | Keyed per-instance hashing of words and byte buffers | `AcHash31` |
//! | [`FastHash`] | One-shot seeded hashing of byte buffers (**NOT CRYPTO**) | `AcHash31` |
//!
//! # Error Types
//!
//! - [`VerificationError`] - Opaque error for keyed tag verification
//! - [`WordReadError`] - Failure while reading a word stream (`std`)
//! - [`FileHashError`] - Failure while hashing a file (`std`)
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;
#[cfg(feature = "std")]
pub mod io;
mod word_hash;

#[cfg(feature = "std")]
pub use error::{FileHashError, WordReadError};
pub use error::VerificationError;
pub use fast_hash::FastHash;
pub use word_hash::WordHash;

/// Width in bytes of one folded word and of one file record.
pub const WORD_BYTES: usize = 4;
