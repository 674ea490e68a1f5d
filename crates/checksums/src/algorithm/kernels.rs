//! crates/checksums/src/algorithm/kernels.rs
//!
//! Accumulation kernels for every supported algorithm.
//!
//! Each kernel has the shape `fn(chunk, prior) -> value`. With `prior` set to
//! `None` the kernel computes the checksum of `chunk` from the algorithm's
//! initial register. With `Some(value)` it continues from a previously
//! finalized value, so feeding `a` and then `b` yields the checksum of `a`
//! followed by `b`.
//!
//! The table-driven CRCs come from the `crc` crate's catalog. Continuation
//! goes through [`Crc::digest_with_initial`], which expects the *initial*
//! value in the algorithm's external (unreflected) form, so a finalized value
//! has its output XOR undone and, for reflected algorithms, is mirrored back
//! into the register's bit order.

use crc::{
    CRC_8_MAXIM_DOW, CRC_8_SMBUS, CRC_16_ARC, CRC_16_IBM_3740, CRC_16_MODBUS, CRC_24_OPENPGP,
    CRC_32_ISO_HDLC, Crc,
};

static CRC8: Crc<u8> = Crc::<u8>::new(&CRC_8_SMBUS);
static CRC8_1WIRE: Crc<u8> = Crc::<u8>::new(&CRC_8_MAXIM_DOW);
static CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_ARC);
static CRC16_CCITT: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);
static CRC16_MODBUS: Crc<u16> = Crc::<u16>::new(&CRC_16_MODBUS);
static CRC24: Crc<u32> = Crc::<u32>::new(&CRC_24_OPENPGP);
static CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Converts a finalized value back into the initial value that resumes the
/// register it was produced from.
macro_rules! resume_initial {
    ($register:ty, $algorithm:expr, $value:expr) => {{
        let algorithm = $algorithm;
        let register = ($value as $register) ^ algorithm.xorout;
        if algorithm.refin {
            (register << (<$register>::BITS - u32::from(algorithm.width))).reverse_bits()
        } else {
            register
        }
    }};
}

macro_rules! catalog_kernel {
    ($name:ident, $register:ty, $engine:ident) => {
        pub(super) fn $name(chunk: &[u8], prior: Option<u32>) -> u32 {
            let mut digest = match prior {
                None => $engine.digest(),
                Some(value) => {
                    $engine.digest_with_initial(resume_initial!($register, $engine.algorithm, value))
                }
            };
            digest.update(chunk);
            u32::from(digest.finalize())
        }
    };
}

catalog_kernel!(crc8, u8, CRC8);
catalog_kernel!(crc8_1wire, u8, CRC8_1WIRE);
catalog_kernel!(crc16, u16, CRC16);
catalog_kernel!(crc16_ccitt, u16, CRC16_CCITT);
catalog_kernel!(crc16_modbus, u16, CRC16_MODBUS);
catalog_kernel!(crc24, u32, CRC24);
catalog_kernel!(crc32, u32, CRC32);

/// CRC-1: the parity-style byte sum, truncated to eight bits.
pub(super) fn crc1(chunk: &[u8], prior: Option<u32>) -> u32 {
    let seed = prior.unwrap_or(0) as u8;
    u32::from(chunk.iter().fold(seed, |sum, &byte| sum.wrapping_add(byte)))
}
