//! crates/checksums/src/checksum.rs
//!
//! Streaming CRC engine.

use std::io::{self, Read, Write};

use crate::stream::StreamTransform;
use crate::{CrcAlgorithm, CrcDigest};

/// Streaming CRC computation over arbitrarily chunked input.
///
/// Chunks are folded into the running register with
/// [`consume`](Self::consume); nothing is emitted until
/// [`finish`](Self::finish) consumes the engine and returns the digest. How the
/// input was split never affects the result.
///
/// # Examples
///
/// ```
/// use checksums::{CrcAlgorithm, CrcChecksum};
///
/// let mut crc = CrcChecksum::new(CrcAlgorithm::Crc32);
/// crc.consume(b"Hello ");
/// crc.consume(b"world.");
/// assert_eq!(crc.finish().to_hex(), "8b3a0404");
///
/// // No input at all yields an all-zero digest of the algorithm's width.
/// let empty = CrcChecksum::new(CrcAlgorithm::Crc24).finish();
/// assert_eq!(empty.as_bytes(), &[0, 0, 0]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CrcChecksum {
    algorithm: CrcAlgorithm,
    value: Option<u32>,
    len: u64,
}

impl CrcChecksum {
    /// Default buffer length used by [`update_reader`](Self::update_reader).
    pub const DEFAULT_READER_BUFFER_LEN: usize = 32 * 1024;

    /// Creates an engine that has not seen any input.
    #[must_use]
    pub const fn new(algorithm: CrcAlgorithm) -> Self {
        Self {
            algorithm,
            value: None,
            len: 0,
        }
    }

    /// Computes the digest of `data` in one shot.
    #[must_use]
    pub fn checksum(algorithm: CrcAlgorithm, data: &[u8]) -> CrcDigest {
        let mut crc = Self::new(algorithm);
        crc.consume(data);
        crc.finish()
    }

    /// Algorithm selected at construction.
    #[must_use]
    pub const fn algorithm(&self) -> CrcAlgorithm {
        self.algorithm
    }

    /// Running register, or `None` while no input has been consumed.
    #[must_use]
    pub const fn value(&self) -> Option<u32> {
        self.value
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if no bytes have been consumed yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Folds `chunk` into the running register.
    ///
    /// Empty chunks leave the engine untouched, so they can never turn the
    /// "no input" state into an accumulated one.
    pub fn consume(&mut self, chunk: &[u8]) {
        if chunk.is_empty() {
            return;
        }

        self.value = Some(self.algorithm.accumulate(chunk, self.value));
        self.len += chunk.len() as u64;
        logging::trace_hash!(
            "{} consumed {} bytes ({} total)",
            self.algorithm,
            chunk.len(),
            self.len
        );
    }

    /// Width-truncated, big-endian digest of everything consumed so far.
    ///
    /// A register that never saw input finalizes as zero.
    #[must_use]
    pub fn digest(&self) -> CrcDigest {
        CrcDigest::new(self.algorithm, self.value.unwrap_or(0))
    }

    /// Ends the input and returns the digest.
    #[must_use]
    pub fn finish(self) -> CrcDigest {
        let digest = self.digest();
        logging::trace_hash!(
            "{} finished after {} bytes: {digest}",
            self.algorithm,
            self.len
        );
        digest
    }

    /// Consumes every byte produced by `reader` using an internal buffer.
    ///
    /// Returns the number of bytes read.
    pub fn update_reader<R: Read>(&mut self, reader: &mut R) -> io::Result<u64> {
        let mut buffer = vec![0u8; Self::DEFAULT_READER_BUFFER_LEN];
        self.update_reader_with_buffer(reader, &mut buffer)
    }

    /// Consumes every byte produced by `reader`, staging reads in `buffer`.
    ///
    /// Interrupted reads are retried. An empty `buffer` is rejected with
    /// [`io::ErrorKind::InvalidInput`] because no progress could be made.
    pub fn update_reader_with_buffer<R: Read>(
        &mut self,
        reader: &mut R,
        buffer: &mut [u8],
    ) -> io::Result<u64> {
        if buffer.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "checksum reader buffer must not be empty",
            ));
        }

        let mut total = 0u64;
        loop {
            match reader.read(buffer) {
                Ok(0) => break,
                Ok(read) => {
                    self.consume(&buffer[..read]);
                    total += read as u64;
                }
                Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
                Err(error) => return Err(error),
            }
        }

        logging::trace_io!("{} read {total} bytes from reader", self.algorithm);
        Ok(total)
    }
}

impl StreamTransform for CrcChecksum {
    type Output = CrcDigest;

    fn consume(&mut self, chunk: &[u8]) {
        Self::consume(self, chunk);
    }

    fn finish(self) -> Self::Output {
        Self::finish(self)
    }
}

impl Write for CrcChecksum {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.consume(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
