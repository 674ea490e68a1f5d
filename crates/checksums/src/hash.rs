//! crates/checksums/src/hash.rs
//!
//! Hash-object interface: `update` any number of times, then `digest` once.
//!
//! Finalization is a one-way gate tracked by an explicit [`HashState`] tag.
//! Once the digest has been produced, `update` fails with
//! [`HashError::UseAfterFinalize`] and a second `digest` fails with
//! [`HashError::NotInitialized`]. Both stem from the same state; the distinct
//! errors keep the messages callers already match on.

use std::io::{self, Write};

use crate::digest::{DigestEncoding, DigestOutput, TextEncoding};
use crate::{CrcAlgorithm, CrcChecksum, CrcDigest, HashError};

/// Input accepted by [`CrcHash::update`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HashInput<'a> {
    /// Raw bytes, fed as-is.
    Bytes(&'a [u8]),
    /// Text, converted with the [`TextEncoding`] passed alongside it.
    Text(&'a str),
    /// No data at all; rejected with [`HashError::InvalidInput`].
    Absent,
}

impl<'a> From<&'a [u8]> for HashInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for HashInput<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for HashInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for HashInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for HashInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a, T> From<Option<T>> for HashInput<'a>
where
    T: Into<HashInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Lifecycle of a [`CrcHash`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HashState {
    /// Accepting input.
    #[default]
    Ready,
    /// The digest has been produced; terminal.
    Finalized,
}

/// CRC hash object with the conventional `update`/`digest` contract.
///
/// # Examples
///
/// ```
/// use checksums::{HashError, create_hash};
///
/// let mut hash = create_hash(Some("crc32"))?;
/// hash.update("Hello ", None)?.update(b"world.", None)?;
/// let digest = hash.digest(Some("hex"))?;
/// assert_eq!(digest.as_text(), Some("8b3a0404"));
///
/// assert_eq!(hash.update("more", None).unwrap_err(), HashError::UseAfterFinalize);
/// assert_eq!(hash.digest(None).unwrap_err(), HashError::NotInitialized);
/// # Ok::<(), HashError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CrcHash {
    checksum: CrcChecksum,
    state: HashState,
}

impl CrcHash {
    /// Creates a hash object in the [`HashState::Ready`] state.
    #[must_use]
    pub const fn new(algorithm: CrcAlgorithm) -> Self {
        Self {
            checksum: CrcChecksum::new(algorithm),
            state: HashState::Ready,
        }
    }

    /// Algorithm selected at construction.
    #[must_use]
    pub const fn algorithm(&self) -> CrcAlgorithm {
        self.checksum.algorithm()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> HashState {
        self.state
    }

    /// Returns `true` once the digest has been produced.
    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        matches!(self.state, HashState::Finalized)
    }

    /// Feeds `data` into the checksum.
    ///
    /// Text is converted with `encoding` when it names a recognised
    /// [`TextEncoding`] and byte-per-character otherwise; bytes ignore
    /// `encoding`. Returns `self` so calls can be chained.
    pub fn update<'a>(
        &mut self,
        data: impl Into<HashInput<'a>>,
        encoding: Option<&str>,
    ) -> Result<&mut Self, HashError> {
        if self.is_finalized() {
            return Err(HashError::UseAfterFinalize);
        }

        match data.into() {
            HashInput::Bytes(bytes) => self.checksum.consume(bytes),
            HashInput::Text(text) => {
                let bytes = TextEncoding::from_label(encoding).encode(text);
                self.checksum.consume(&bytes);
            }
            HashInput::Absent => return Err(HashError::InvalidInput),
        }
        Ok(self)
    }

    /// Produces the digest and finalizes the object.
    ///
    /// `hex`, `binary` and `base64` return text; any other encoding, or none,
    /// returns the raw digest.
    pub fn digest(&mut self, encoding: Option<&str>) -> Result<DigestOutput, HashError> {
        self.finish()
            .map(|digest| digest.encode(DigestEncoding::from_label(encoding)))
    }

    /// Produces the raw digest and finalizes the object.
    ///
    /// Shares the finalization gate with [`digest`](Self::digest).
    pub fn finish(&mut self) -> Result<CrcDigest, HashError> {
        if self.is_finalized() {
            return Err(HashError::NotInitialized);
        }

        self.state = HashState::Finalized;
        let digest = self.checksum.digest();
        logging::trace_hash!("{} digest finalized: {digest}", self.algorithm());
        Ok(digest)
    }
}

/// Writes feed the checksum as raw bytes and fail once the object has been
/// finalized.
impl Write for CrcHash {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf, None)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Creates a hash object for the algorithm named `algorithm`.
///
/// # Errors
///
/// [`HashError::MissingAlgorithm`] when `algorithm` is `None` or empty and
/// [`HashError::UnsupportedAlgorithm`] when it names no supported algorithm.
pub fn create_hash(algorithm: Option<&str>) -> Result<CrcHash, HashError> {
    CrcAlgorithm::resolve(algorithm).map(CrcHash::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_returns_same_object() {
        let mut hash = CrcHash::new(CrcAlgorithm::Crc32);
        let address: *const CrcHash = &hash;
        let returned: *const CrcHash = hash.update("", None).expect("update");
        assert_eq!(address, returned);
    }

    #[test]
    fn absent_input_is_rejected_without_state_change() {
        let mut hash = CrcHash::new(CrcAlgorithm::Crc16);
        hash.update("Hello", None).expect("update");
        let before = hash.clone();

        assert_eq!(
            hash.update(None::<&str>, None).unwrap_err(),
            HashError::InvalidInput
        );
        assert_eq!(hash, before);
        assert_eq!(hash.state(), HashState::Ready);
    }

    #[test]
    fn present_option_input_is_accepted() {
        let mut hash = CrcHash::new(CrcAlgorithm::Crc32);
        hash.update(Some("Hello world."), None).expect("update");
        assert_eq!(
            hash.digest(Some("hex")).expect("digest").as_text(),
            Some("8b3a0404")
        );
    }

    #[test]
    fn digest_without_update_is_zero() {
        for algorithm in CrcAlgorithm::ALL {
            let mut hash = CrcHash::new(algorithm);
            let digest = hash.finish().expect("first finish");
            assert_eq!(digest.as_bytes(), vec![0; algorithm.width()]);
        }
    }

    #[test]
    fn update_after_digest_fails() {
        let mut hash = CrcHash::new(CrcAlgorithm::Crc32);
        hash.digest(None).expect("first digest");
        assert!(hash.is_finalized());
        let before = hash.clone();

        assert_eq!(
            hash.update("", None).unwrap_err(),
            HashError::UseAfterFinalize
        );
        assert_eq!(hash, before);
    }

    #[test]
    fn second_digest_fails() {
        let mut hash = CrcHash::new(CrcAlgorithm::Crc32);
        hash.digest(None).expect("first digest");
        assert_eq!(hash.digest(None).unwrap_err(), HashError::NotInitialized);
        assert_eq!(hash.finish().unwrap_err(), HashError::NotInitialized);
        assert_eq!(
            hash.update(b"x", None).unwrap_err(),
            HashError::UseAfterFinalize
        );
    }

    #[test]
    fn write_after_digest_surfaces_lockout() {
        let mut hash = CrcHash::new(CrcAlgorithm::Crc24);
        hash.write_all(b"Hello world.").expect("write before digest");
        assert_eq!(
            hash.digest(Some("hex")).expect("digest").as_text(),
            Some("8d7f80")
        );

        let error = hash.write(b"late").expect_err("write after digest");
        assert_eq!(error.kind(), io::ErrorKind::Other);
        assert_eq!(error.to_string(), "HashUpdate fail");
    }

    #[test]
    fn text_encoding_only_applies_to_text() {
        let mut utf8 = CrcHash::new(CrcAlgorithm::Crc32);
        utf8.update("é", Some("utf8")).expect("update");
        let mut bytes = CrcHash::new(CrcAlgorithm::Crc32);
        bytes
            .update(&[0xc3_u8, 0xa9], Some("binary"))
            .expect("update");
        assert_eq!(utf8.finish(), bytes.finish());

        let mut binary = CrcHash::new(CrcAlgorithm::Crc32);
        binary.update("é", Some("typo")).expect("update");
        let mut latin1 = CrcHash::new(CrcAlgorithm::Crc32);
        latin1.update(&[0xe9_u8], None).expect("update");
        assert_eq!(binary.finish(), latin1.finish());
    }

    #[test]
    fn create_hash_validates_name() {
        assert_eq!(create_hash(None).unwrap_err(), HashError::MissingAlgorithm);
        assert!(matches!(
            create_hash(Some("md5")),
            Err(HashError::UnsupportedAlgorithm { .. })
        ));
        let hash = create_hash(Some("crc16modbus")).expect("supported");
        assert_eq!(hash.algorithm(), CrcAlgorithm::Crc16Modbus);
        assert_eq!(hash.state(), HashState::Ready);
    }
}
