//! Hashing of word streams read from files and other readers.

use std::{
  fs::File,
  io::{BufReader, Read},
  path::Path,
};

use traits::{FileHashError, WordReadError, io::WordReader};

use super::{AcHash31, DIGEST_LEN, FileConfig};

impl AcHash31 {
  /// Hash a file of little-endian `u32` records with the default [`FileConfig`].
  ///
  /// The records are summed with wraparound and the sum is hashed. An empty
  /// file hashes like an empty buffer. Failing to open or read the file is an
  /// error, never a default digest.
  pub fn compute_file(&self, path: impl AsRef<Path>) -> Result<[u8; DIGEST_LEN], FileHashError> {
    self.compute_file_with(path, &FileConfig::default())
  }

  /// Hash a file of little-endian `u32` records.
  pub fn compute_file_with(
    &self,
    path: impl AsRef<Path>,
    config: &FileConfig,
  ) -> Result<[u8; DIGEST_LEN], FileHashError> {
    let path = path.as_ref();
    log::debug!(
      "achash31: hashing {} (buffer={}B tail={})",
      path.display(),
      config.effective_buffer_capacity(),
      config.tail.as_str()
    );

    let file = File::open(path).map_err(|source| {
      log::debug!("achash31: open {} failed: {source}", path.display());
      FileHashError::Open {
        path: path.to_path_buf(),
        source,
      }
    })?;

    self.compute_reader(file, config).map_err(|source| {
      log::debug!("achash31: reading {} failed: {source}", path.display());
      FileHashError::Read {
        path: path.to_path_buf(),
        source,
      }
    })
  }

  /// Hash the little-endian `u32` records produced by `reader`.
  ///
  /// `reader` is buffered internally with `config.buffer_capacity`.
  pub fn compute_reader<R: Read>(&self, reader: R, config: &FileConfig) -> Result<[u8; DIGEST_LEN], WordReadError> {
    let buffered = BufReader::with_capacity(config.effective_buffer_capacity(), reader);
    let mut words = WordReader::new(buffered, config.tail);

    let mut acc = 0u32;
    for word in words.by_ref() {
      acc = acc.wrapping_add(word?);
    }

    if words.tail_padded() {
      log::warn!(
        "achash31: word stream ended inside a record, zero-padded the last of {} words",
        words.words_read()
      );
    }
    log::debug!("achash31: folded {} words", words.words_read());

    Ok(self.digest_of(acc))
  }
}
