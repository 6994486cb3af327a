//! Error types for hashing operations.
//!
//! In-memory hashing is total and never fails. The only failure domains are
//! keyed tag verification and reading word streams from external sources.

use core::fmt;

/// Verification failed.
///
/// Returned when a recomputed keyed tag does not match the expected one.
/// Intentionally opaque so callers cannot learn which bytes differed.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: &[u8; 4], expected: &[u8; 4]) -> Result<(), VerificationError> {
///   if computed == expected {
///     Ok(())
///   } else {
///     Err(VerificationError::new())
///   }
/// }
///
/// assert!(verify(&[0; 4], &[1; 4]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("verification failed")
  }
}

impl core::error::Error for VerificationError {}

/// Failure while reading fixed-width words from a byte stream.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
pub enum WordReadError {
  /// The underlying reader failed.
  #[error("word stream read failed: {0}")]
  Io(#[from] std::io::Error),

  /// The stream ended inside a record and the tail policy rejects partial records.
  #[error("word stream ended with {trailing} trailing byte(s), not a whole {}-byte record", crate::WORD_BYTES)]
  TruncatedRecord {
    /// Bytes left over after the last whole record.
    trailing: usize,
  },
}

/// Failure while hashing a file of words.
///
/// Never substituted by a default digest: a caller that receives this knows
/// nothing was hashed.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
pub enum FileHashError {
  /// The file could not be opened.
  #[error("failed to open {}: {source}", .path.display())]
  Open {
    path: std::path::PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The file was opened but its contents could not be read as words.
  #[error("failed to read words from {}: {source}", .path.display())]
  Read {
    path: std::path::PathBuf,
    #[source]
    source: WordReadError,
  },
}

#[cfg(feature = "std")]
impl FileHashError {
  /// Path of the file that failed.
  #[must_use]
  pub fn path(&self) -> &std::path::Path {
    match self {
      Self::Open { path, .. } | Self::Read { path, .. } => path,
    }
  }
}
