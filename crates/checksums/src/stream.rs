//! crates/checksums/src/stream.rs
//!
//! Stream plumbing around checksum engines.
//!
//! [`StreamTransform`] is the seam between an engine and the I/O layer: an
//! ordered sequence of input chunks goes in, and exactly one output chunk comes
//! out once the input is declared complete. [`ChecksumWriter`] adapts any
//! transform to [`io::Write`] and writes the encoded output chunk to an inner
//! writer when the stream ends.

use std::io::{self, Write};

use crate::digest::{DigestEncoding, DigestOutput};
use crate::CrcDigest;

/// One-way transform from a sequence of chunks to a single output chunk.
///
/// Intermediate chunks never produce output; the output only exists once
/// [`finish`](Self::finish) has seen the whole input.
pub trait StreamTransform {
    /// Output chunk produced at end of input.
    type Output: AsRef<[u8]>;

    /// Feeds one input chunk. Empty chunks are allowed.
    fn consume(&mut self, chunk: &[u8]);

    /// Ends the input and produces the output chunk.
    fn finish(self) -> Self::Output;
}

/// [`io::Write`] adapter that feeds a [`StreamTransform`] and emits its
/// encoded output into `W` when finished.
///
/// # Examples
///
/// ```
/// use std::io::Write;
///
/// use checksums::{ChecksumWriter, CrcAlgorithm, CrcChecksum, DigestEncoding};
///
/// let mut writer = ChecksumWriter::new(
///     CrcChecksum::new(CrcAlgorithm::Crc32),
///     Vec::new(),
///     DigestEncoding::Hex,
/// );
/// writer.write_all(b"Hello world.")?;
/// let output = writer.finish()?;
/// assert_eq!(output, b"8b3a0404");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct ChecksumWriter<T, W> {
    transform: T,
    output: W,
    encoding: DigestEncoding,
}

impl<T, W> ChecksumWriter<T, W>
where
    T: StreamTransform<Output = CrcDigest>,
    W: Write,
{
    /// Wraps `transform`, writing its output to `output` in `encoding`.
    pub const fn new(transform: T, output: W, encoding: DigestEncoding) -> Self {
        Self {
            transform,
            output,
            encoding,
        }
    }

    /// Shared access to the wrapped transform.
    pub const fn transform(&self) -> &T {
        &self.transform
    }

    /// Output encoding applied by [`finish`](Self::finish).
    pub const fn encoding(&self) -> DigestEncoding {
        self.encoding
    }

    /// Ends the input, writes the encoded output chunk and returns the inner
    /// writer.
    pub fn finish(self) -> io::Result<W> {
        let Self {
            transform,
            mut output,
            encoding,
        } = self;

        let digest = transform.finish();
        match digest.encode(encoding) {
            DigestOutput::Text(text) => output.write_all(text.as_bytes())?,
            DigestOutput::Raw(digest) => output.write_all(digest.as_bytes())?,
        }
        output.flush()?;
        logging::trace_io!("wrote {encoding:?} digest {digest}");
        Ok(output)
    }
}

impl<T, W> Write for ChecksumWriter<T, W>
where
    T: StreamTransform,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.transform.consume(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Feeds every chunk of `chunks` through a fresh `transform` and returns its
/// output.
pub fn transform_chunks<T, I, C>(mut transform: T, chunks: I) -> T::Output
where
    T: StreamTransform,
    I: IntoIterator<Item = C>,
    C: AsRef<[u8]>,
{
    for chunk in chunks {
        transform.consume(chunk.as_ref());
    }
    transform.finish()
}
