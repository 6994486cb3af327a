//! Word-stream input for file hashing.
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use hashes::{fast::AcHash31, io::FileConfig};
//!
//! let h = AcHash31::new(3, 7);
//! let bytes = [1u8, 0, 0, 0, 0xFF];
//! let digest = h.compute_reader(Cursor::new(bytes), &FileConfig::default())?;
//! assert_eq!(digest, h.compute_bytes(&bytes));
//! # Ok::<(), hashes::WordReadError>(())
//! ```

pub use traits::io::{TailPolicy, WordReader};

pub use crate::fast::achash31::FileConfig;
