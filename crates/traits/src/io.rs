//! Word-stream input for file-sourced hashing.
//!
//! [`WordReader`] wraps any [`std::io::Read`] and yields its contents as a
//! sequence of fixed-width little-endian `u32` records. Hash families consume
//! that sequence without knowing where the bytes came from.
//!
//! - Short reads are stitched together: a record may arrive over several `read` calls
//! - `Interrupted` reads are retried, every other error ends the stream
//! - End of stream ends the sequence; a trailing partial record follows [`TailPolicy`]
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use traits::io::{TailPolicy, WordReader};
//!
//! let bytes = [1u8, 0, 0, 0, 0xFF];
//! let words: Result<Vec<u32>, _> = WordReader::new(Cursor::new(bytes), TailPolicy::ZeroPad).collect();
//! assert_eq!(words?, vec![1, 0xFF]);
//! # Ok::<(), traits::WordReadError>(())
//! ```

use std::io::{ErrorKind, Read};

use crate::{WORD_BYTES, error::WordReadError};

/// What to do with bytes left over after the last whole record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TailPolicy {
  /// Zero-pad the leftover bytes into one final word.
  ///
  /// Matches how in-memory buffers are folded, so a file and a buffer with the
  /// same bytes produce the same word sequence.
  #[default]
  ZeroPad,
  /// Fail with [`WordReadError::TruncatedRecord`].
  Reject,
}

impl TailPolicy {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::ZeroPad => "zero-pad",
      Self::Reject => "reject",
    }
  }
}

/// Iterator over the little-endian `u32` records of a reader.
///
/// Yields `Ok(word)` per record and stops after the first `Err`.
#[derive(Debug)]
pub struct WordReader<R> {
  inner: R,
  record: [u8; WORD_BYTES],
  filled: usize,
  tail: TailPolicy,
  words: u64,
  padded: bool,
  finished: bool,
}

impl<R: Read> WordReader<R> {
  /// Wrap `inner`, handling a trailing partial record per `tail`.
  #[inline]
  #[must_use]
  pub fn new(inner: R, tail: TailPolicy) -> Self {
    Self {
      inner,
      record: [0; WORD_BYTES],
      filled: 0,
      tail,
      words: 0,
      padded: false,
      finished: false,
    }
  }

  /// Number of words produced so far, including a zero-padded tail.
  #[inline]
  #[must_use]
  pub fn words_read(&self) -> u64 {
    self.words
  }

  /// Whether the last word produced was a zero-padded partial record.
  #[inline]
  #[must_use]
  pub fn tail_padded(&self) -> bool {
    self.padded
  }

  /// Unwrap this `WordReader`, returning the inner reader.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Read until the record buffer is full or the stream ends.
  fn fill_record(&mut self) -> std::io::Result<usize> {
    while self.filled < WORD_BYTES {
      let Some(dst) = self.record.get_mut(self.filled..) else {
        break;
      };
      match self.inner.read(dst) {
        Ok(0) => break,
        Ok(n) => self.filled += n,
        Err(e) if e.kind() == ErrorKind::Interrupted => continue,
        Err(e) => return Err(e),
      }
    }
    Ok(self.filled)
  }

  #[inline]
  fn take_word(&mut self) -> u32 {
    self.filled = 0;
    self.words += 1;
    u32::from_le_bytes(self.record)
  }
}

impl<R: Read> Iterator for WordReader<R> {
  type Item = Result<u32, WordReadError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.finished {
      return None;
    }

    match self.fill_record() {
      Err(e) => {
        self.finished = true;
        Some(Err(WordReadError::Io(e)))
      }
      Ok(0) => {
        self.finished = true;
        None
      }
      Ok(WORD_BYTES) => Some(Ok(self.take_word())),
      Ok(trailing) => {
        self.finished = true;
        match self.tail {
          TailPolicy::ZeroPad => {
            for b in self.record.iter_mut().skip(trailing) {
              *b = 0;
            }
            self.padded = true;
            Some(Ok(self.take_word()))
          }
          TailPolicy::Reject => Some(Err(WordReadError::TruncatedRecord { trailing })),
        }
      }
    }
  }
}

impl<R: Read> core::iter::FusedIterator for WordReader<R> {}
