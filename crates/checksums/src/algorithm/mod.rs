//! Registry of the supported CRC algorithms.
//!
//! The set of algorithms is closed: [`CrcAlgorithm`] enumerates every variant
//! and carries its accumulation kernel and digest width, so dispatch is an
//! exhaustive `match` rather than a lookup that can fail at runtime. Name
//! resolution is the only fallible step and happens once, when a hash object
//! is constructed.
//!
//! # Example
//!
//! ```
//! use checksums::{CrcAlgorithm, HashError};
//!
//! let algorithm: CrcAlgorithm = "crc24".parse()?;
//! assert_eq!(algorithm.width(), 3);
//!
//! assert!(matches!(
//!     "CRC32".parse::<CrcAlgorithm>(),
//!     Err(HashError::UnsupportedAlgorithm { .. })
//! ));
//! # Ok::<(), HashError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::HashError;

mod kernels;

/// Supported CRC variants.
///
/// Names are matched exactly and case-sensitively by [`CrcAlgorithm::resolve`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CrcAlgorithm {
    /// `crc1`: eight-bit byte sum.
    Crc1,
    /// `crc8`: CRC-8/SMBUS (poly 0x07).
    Crc8,
    /// `crc81wire`: CRC-8/MAXIM-DOW, the Dallas 1-Wire CRC.
    Crc81Wire,
    /// `crc16`: CRC-16/ARC.
    Crc16,
    /// `crc16ccitt`: CRC-16/IBM-3740, commonly called CCITT-FALSE.
    Crc16Ccitt,
    /// `crc16modbus`: CRC-16/MODBUS.
    Crc16Modbus,
    /// `crc24`: CRC-24/OPENPGP (RFC 4880).
    Crc24,
    /// `crc32`: CRC-32/ISO-HDLC as used by zip, gzip and PNG.
    Crc32,
}

impl CrcAlgorithm {
    /// Every supported algorithm, in registry order.
    pub const ALL: [Self; 8] = [
        Self::Crc1,
        Self::Crc8,
        Self::Crc81Wire,
        Self::Crc16,
        Self::Crc16Ccitt,
        Self::Crc16Modbus,
        Self::Crc24,
        Self::Crc32,
    ];

    /// Widest digest produced by any supported algorithm, in bytes.
    pub const MAX_WIDTH: usize = 4;

    /// Identifier accepted by [`resolve`](Self::resolve).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Crc1 => "crc1",
            Self::Crc8 => "crc8",
            Self::Crc81Wire => "crc81wire",
            Self::Crc16 => "crc16",
            Self::Crc16Ccitt => "crc16ccitt",
            Self::Crc16Modbus => "crc16modbus",
            Self::Crc24 => "crc24",
            Self::Crc32 => "crc32",
        }
    }

    /// Digest width in bytes.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Crc1 | Self::Crc8 | Self::Crc81Wire => 1,
            Self::Crc16 | Self::Crc16Ccitt | Self::Crc16Modbus => 2,
            Self::Crc24 => 3,
            Self::Crc32 => 4,
        }
    }

    /// Folds `chunk` into `prior` and returns the new value.
    ///
    /// `prior` is `None` before any input has been seen. The function is pure:
    /// splitting an input at any point and chaining the calls produces the
    /// same value as a single call over the whole input.
    ///
    /// ```
    /// use checksums::CrcAlgorithm;
    ///
    /// let crc = CrcAlgorithm::Crc32;
    /// let whole = crc.accumulate(b"Hello world.", None);
    /// let split = crc.accumulate(b"world.", Some(crc.accumulate(b"Hello ", None)));
    /// assert_eq!(whole, 0x8b3a_0404);
    /// assert_eq!(split, whole);
    /// ```
    #[must_use]
    pub fn accumulate(self, chunk: &[u8], prior: Option<u32>) -> u32 {
        match self {
            Self::Crc1 => kernels::crc1(chunk, prior),
            Self::Crc8 => kernels::crc8(chunk, prior),
            Self::Crc81Wire => kernels::crc8_1wire(chunk, prior),
            Self::Crc16 => kernels::crc16(chunk, prior),
            Self::Crc16Ccitt => kernels::crc16_ccitt(chunk, prior),
            Self::Crc16Modbus => kernels::crc16_modbus(chunk, prior),
            Self::Crc24 => kernels::crc24(chunk, prior),
            Self::Crc32 => kernels::crc32(chunk, prior),
        }
    }

    /// Resolves an algorithm by name.
    ///
    /// `None` and the empty string report [`HashError::MissingAlgorithm`];
    /// anything that is not an exact, case-sensitive match reports
    /// [`HashError::UnsupportedAlgorithm`].
    pub fn resolve(name: Option<&str>) -> Result<Self, HashError> {
        let name = match name {
            None | Some("") => {
                logging::trace_registry!("no algorithm name supplied");
                return Err(HashError::MissingAlgorithm);
            }
            Some(name) => name,
        };

        match Self::ALL.into_iter().find(|algorithm| algorithm.name() == name) {
            Some(algorithm) => {
                logging::trace_registry!(
                    "resolved {name} ({} byte digest)",
                    algorithm.width()
                );
                Ok(algorithm)
            }
            None => {
                logging::trace_registry!("rejected unsupported algorithm {name:?}");
                Err(HashError::UnsupportedAlgorithm {
                    name: name.to_owned(),
                })
            }
        }
    }
}

impl FromStr for CrcAlgorithm {
    type Err = HashError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::resolve(Some(name))
    }
}

impl fmt::Display for CrcAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names of every supported algorithm, in registry order.
pub fn algorithms() -> impl Iterator<Item = &'static str> {
    CrcAlgorithm::ALL.into_iter().map(CrcAlgorithm::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_registered_name() {
        for algorithm in CrcAlgorithm::ALL {
            assert_eq!(CrcAlgorithm::resolve(Some(algorithm.name())), Ok(algorithm));
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
    }

    #[test]
    fn widths_match_registry() {
        let widths: Vec<_> = CrcAlgorithm::ALL
            .into_iter()
            .map(|algorithm| (algorithm.name(), algorithm.width()))
            .collect();
        assert_eq!(
            widths,
            [
                ("crc1", 1),
                ("crc8", 1),
                ("crc81wire", 1),
                ("crc16", 2),
                ("crc16ccitt", 2),
                ("crc16modbus", 2),
                ("crc24", 3),
                ("crc32", 4),
            ]
        );
        assert!(
            CrcAlgorithm::ALL
                .into_iter()
                .all(|algorithm| algorithm.width() <= CrcAlgorithm::MAX_WIDTH)
        );
    }

    #[test]
    fn missing_name_is_reported() {
        assert_eq!(CrcAlgorithm::resolve(None), Err(HashError::MissingAlgorithm));
        assert_eq!(
            CrcAlgorithm::resolve(Some("")),
            Err(HashError::MissingAlgorithm)
        );
    }

    #[test]
    fn unknown_and_miscased_names_are_unsupported() {
        for name in ["md5", "CRC32", "Crc32", "crc32 ", "crc-32", "crc64"] {
            assert_eq!(
                name.parse::<CrcAlgorithm>(),
                Err(HashError::UnsupportedAlgorithm {
                    name: name.to_owned()
                }),
                "{name:?}"
            );
        }
    }

    #[test]
    fn algorithms_lists_names_in_order() {
        let names: Vec<_> = algorithms().collect();
        assert_eq!(
            names,
            [
                "crc1",
                "crc8",
                "crc81wire",
                "crc16",
                "crc16ccitt",
                "crc16modbus",
                "crc24",
                "crc32"
            ]
        );
    }

    #[test]
    fn hello_world_vectors() {
        let expected = [
            (CrcAlgorithm::Crc1, 0x6a),
            (CrcAlgorithm::Crc8, 0x0a),
            (CrcAlgorithm::Crc81Wire, 0x69),
            (CrcAlgorithm::Crc16, 0x33f9),
            (CrcAlgorithm::Crc16Ccitt, 0x4ccd),
            (CrcAlgorithm::Crc16Modbus, 0x319d),
            (CrcAlgorithm::Crc24, 0x8d_7f80),
            (CrcAlgorithm::Crc32, 0x8b3a_0404),
        ];
        for (algorithm, value) in expected {
            assert_eq!(algorithm.accumulate(b"Hello world.", None), value, "{algorithm}");
        }
    }
}
