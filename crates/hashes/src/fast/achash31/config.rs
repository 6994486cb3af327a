//! File hashing configuration.
//!
//! Programmatic only; nothing is read from the environment.

use traits::WORD_BYTES;

pub use traits::io::TailPolicy;

/// Default read buffer for file hashing.
const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;

/// Settings for [`AcHash31::compute_file_with`](super::AcHash31::compute_file_with).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileConfig {
  /// Read buffer size in bytes. Clamped to at least one record.
  pub buffer_capacity: usize,
  /// Handling of a trailing partial record.
  pub tail: TailPolicy,
}

impl Default for FileConfig {
  fn default() -> Self {
    Self {
      buffer_capacity: DEFAULT_BUFFER_CAPACITY,
      tail: TailPolicy::ZeroPad,
    }
  }
}

impl FileConfig {
  #[must_use]
  pub const fn with_buffer_capacity(mut self, bytes: usize) -> Self {
    self.buffer_capacity = bytes;
    self
  }

  #[must_use]
  pub const fn with_tail(mut self, tail: TailPolicy) -> Self {
    self.tail = tail;
    self
  }

  /// Buffer size actually used.
  #[inline]
  #[must_use]
  pub const fn effective_buffer_capacity(&self) -> usize {
    if self.buffer_capacity < WORD_BYTES {
      WORD_BYTES
    } else {
      self.buffer_capacity
    }
  }
}
