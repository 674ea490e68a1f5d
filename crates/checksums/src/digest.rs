//! crates/checksums/src/digest.rs
//!
//! Finalized digests and the text encodings understood by the hash-object
//! interface.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::CrcAlgorithm;

/// Finalized checksum: the big-endian bytes of the CRC value, exactly as wide
/// as the algorithm's register.
///
/// # Examples
///
/// ```
/// use checksums::{CrcAlgorithm, CrcDigest};
///
/// let digest = CrcDigest::new(CrcAlgorithm::Crc24, 0x8d_7f80);
/// assert_eq!(digest.as_bytes(), &[0x8d, 0x7f, 0x80]);
/// assert_eq!(digest.to_hex(), "8d7f80");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CrcDigest {
    bytes: [u8; CrcAlgorithm::MAX_WIDTH],
    len: usize,
}

impl CrcDigest {
    /// Encodes `value` as a four-byte big-endian integer and keeps the
    /// low-order `algorithm.width()` bytes.
    #[must_use]
    pub fn new(algorithm: CrcAlgorithm, value: u32) -> Self {
        let len = algorithm.width();
        let mut bytes = [0u8; CrcAlgorithm::MAX_WIDTH];
        bytes[..len].copy_from_slice(&value.to_be_bytes()[CrcAlgorithm::MAX_WIDTH - len..]);
        Self { bytes, len }
    }

    /// Digest bytes, most significant first.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of digest bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; every algorithm produces at least one byte.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Digest as an unsigned integer.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.as_bytes()
            .iter()
            .fold(0, |value, &byte| (value << 8) | u32::from(byte))
    }

    /// Lowercase hexadecimal rendering.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Standard, padded base64 rendering.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.as_bytes())
    }

    /// One character per byte, each in U+0000..=U+00FF.
    #[must_use]
    pub fn to_binary_string(&self) -> String {
        self.as_bytes().iter().copied().map(char::from).collect()
    }

    /// Renders the digest in `encoding`.
    #[must_use]
    pub fn encode(self, encoding: DigestEncoding) -> DigestOutput {
        match encoding {
            DigestEncoding::Hex => DigestOutput::Text(self.to_hex()),
            DigestEncoding::Binary => DigestOutput::Text(self.to_binary_string()),
            DigestEncoding::Base64 => DigestOutput::Text(self.to_base64()),
            DigestEncoding::Raw => DigestOutput::Raw(self),
        }
    }
}

impl AsRef<[u8]> for CrcDigest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for CrcDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Output encodings for a finalized digest.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DigestEncoding {
    /// Lowercase hexadecimal text.
    Hex,
    /// Text with one character per digest byte.
    Binary,
    /// Padded standard base64 text.
    Base64,
    /// The digest bytes themselves.
    #[default]
    Raw,
}

impl DigestEncoding {
    /// Maps an encoding label to an encoding.
    ///
    /// Only `hex`, `binary` and `base64` are recognised; every other label,
    /// and no label at all, selects [`DigestEncoding::Raw`].
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("hex") => Self::Hex,
            Some("binary") => Self::Binary,
            Some("base64") => Self::Base64,
            _ => Self::Raw,
        }
    }
}

/// Result of [`CrcHash::digest`](crate::CrcHash::digest).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DigestOutput {
    /// Digest rendered as text.
    Text(String),
    /// Raw digest bytes.
    Raw(CrcDigest),
}

impl DigestOutput {
    /// Text rendering, if a text encoding was requested.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Raw(_) => None,
        }
    }

    /// Raw digest, if no text encoding was requested.
    #[must_use]
    pub const fn as_raw(&self) -> Option<&CrcDigest> {
        match self {
            Self::Text(_) => None,
            Self::Raw(digest) => Some(digest),
        }
    }

    /// Bytes of the output: the UTF-8 text or the raw digest.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Raw(digest) => digest.as_bytes(),
        }
    }
}

/// Text-to-bytes conversions accepted by [`CrcHash::update`](crate::CrcHash::update).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextEncoding {
    /// UTF-8 bytes of the text.
    Utf8,
    /// Seven-bit text; converted exactly like [`TextEncoding::Binary`].
    Ascii,
    /// One byte per UTF-16 code unit, keeping the low eight bits.
    #[default]
    Binary,
}

impl TextEncoding {
    /// Maps an encoding label to an encoding.
    ///
    /// Unrecognised labels, including typos, fall back to
    /// [`TextEncoding::Binary`] without error.
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("utf8") => Self::Utf8,
            Some("ascii") => Self::Ascii,
            _ => Self::Binary,
        }
    }

    /// Converts `text` to the bytes fed to the checksum.
    #[must_use]
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Ascii | Self::Binary => text.encode_utf16().map(|unit| unit as u8).collect(),
        }
    }
}
