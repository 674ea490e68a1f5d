#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod algorithm;
mod checksum;
pub mod digest;
mod error;
mod hash;
pub mod stream;

pub use algorithm::{CrcAlgorithm, algorithms};
pub use checksum::CrcChecksum;
pub use digest::{CrcDigest, DigestEncoding, DigestOutput, TextEncoding};
pub use error::HashError;
pub use hash::{CrcHash, HashInput, HashState, create_hash};
pub use stream::{ChecksumWriter, StreamTransform, transform_chunks};
