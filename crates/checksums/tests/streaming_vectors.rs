//! Known-answer tests for the streaming engine.
//!
//! Every vector is checked three ways: the whole string in one chunk, one
//! chunk per character, and a single byte buffer. All three must agree.

use std::io::Write;

use checksums::{
    ChecksumWriter, CrcAlgorithm, CrcChecksum, DigestEncoding, transform_chunks,
};

const HELLO: &str = "Hello world.";

fn hex_via_writer(algorithm: CrcAlgorithm, feed: impl FnOnce(&mut dyn Write)) -> String {
    let mut writer = ChecksumWriter::new(
        CrcChecksum::new(algorithm),
        Vec::new(),
        DigestEncoding::Hex,
    );
    feed(&mut writer);
    String::from_utf8(writer.finish().expect("finish writer")).expect("hex output is ASCII")
}

fn string_input(text: &str) -> impl FnOnce(&mut dyn Write) + '_ {
    move |sink: &mut dyn Write| sink.write_all(text.as_bytes()).expect("write string")
}

fn character_input(text: &str) -> impl FnOnce(&mut dyn Write) + '_ {
    move |sink: &mut dyn Write| {
        for character in text.chars() {
            let mut buffer = [0u8; 4];
            sink.write_all(character.encode_utf8(&mut buffer).as_bytes())
                .expect("write character");
        }
    }
}

fn buffer_input(text: &str) -> impl FnOnce(&mut dyn Write) + '_ {
    let buffer = text.as_bytes().to_vec();
    move |sink: &mut dyn Write| sink.write_all(&buffer).expect("write buffer")
}

fn assert_all_inputs(algorithm: CrcAlgorithm, text: &str, expected: &str) {
    assert_eq!(
        hex_via_writer(algorithm, string_input(text)),
        expected,
        "{algorithm} string"
    );
    assert_eq!(
        hex_via_writer(algorithm, character_input(text)),
        expected,
        "{algorithm} characters"
    );
    assert_eq!(
        hex_via_writer(algorithm, buffer_input(text)),
        expected,
        "{algorithm} buffer"
    );
}

// ============================================================================
// Empty input
// ============================================================================

#[test]
fn no_input_yields_zero_digest_of_algorithm_width() {
    for algorithm in CrcAlgorithm::ALL {
        let hex = hex_via_writer(algorithm, |_| {});
        assert_eq!(hex, "00".repeat(algorithm.width()), "{algorithm}");
    }
}

#[test]
fn crc32_no_input() {
    assert_eq!(hex_via_writer(CrcAlgorithm::Crc32, |_| {}), "00000000");
}

#[test]
fn empty_string_matches_no_input() {
    for algorithm in CrcAlgorithm::ALL {
        assert_eq!(
            hex_via_writer(algorithm, string_input("")),
            hex_via_writer(algorithm, |_| {}),
            "{algorithm}"
        );
    }
}

// ============================================================================
// Reference vectors
// ============================================================================

#[test]
fn crc32_hello_world() {
    assert_all_inputs(CrcAlgorithm::Crc32, HELLO, "8b3a0404");
}

#[test]
fn crc24_hello_world() {
    assert_all_inputs(CrcAlgorithm::Crc24, HELLO, "8d7f80");
}

#[test]
fn crc16modbus_hello_world() {
    assert_all_inputs(CrcAlgorithm::Crc16Modbus, HELLO, "319d");
}

#[test]
fn crc16ccitt_hello_world() {
    assert_all_inputs(CrcAlgorithm::Crc16Ccitt, HELLO, "4ccd");
}

#[test]
fn crc16_hello_world() {
    assert_all_inputs(CrcAlgorithm::Crc16, HELLO, "33f9");
}

#[test]
fn crc81wire_hello_world() {
    assert_all_inputs(CrcAlgorithm::Crc81Wire, HELLO, "69");
}

#[test]
fn crc8_hello_world() {
    assert_all_inputs(CrcAlgorithm::Crc8, HELLO, "0a");
}

#[test]
fn crc1_hello_world() {
    assert_all_inputs(CrcAlgorithm::Crc1, HELLO, "6a");
}

#[test]
fn crc1_digits() {
    assert_all_inputs(CrcAlgorithm::Crc1, "1234567890", "0d");
}

#[test]
fn catalog_check_strings() {
    let expected = [
        (CrcAlgorithm::Crc8, "f4"),
        (CrcAlgorithm::Crc81Wire, "a1"),
        (CrcAlgorithm::Crc16, "bb3d"),
        (CrcAlgorithm::Crc16Ccitt, "29b1"),
        (CrcAlgorithm::Crc16Modbus, "4b37"),
        (CrcAlgorithm::Crc24, "21cf02"),
        (CrcAlgorithm::Crc32, "cbf43926"),
    ];
    for (algorithm, hex) in expected {
        assert_all_inputs(algorithm, "123456789", hex);
    }
}

#[test]
fn multi_byte_characters_are_fed_as_utf8() {
    let text = "naïve café ☕";
    for algorithm in CrcAlgorithm::ALL {
        let expected = CrcChecksum::checksum(algorithm, text.as_bytes()).to_hex();
        assert_all_inputs(algorithm, text, &expected);
    }
}

#[test]
fn chunk_boundaries_never_change_the_digest() {
    let data: Vec<u8> = (0..2048u32).map(|i| (i * 31 + 7) as u8).collect();

    for algorithm in CrcAlgorithm::ALL {
        let whole = CrcChecksum::checksum(algorithm, &data);
        for step in [1, 3, 7, 64, 999] {
            let chunked = transform_chunks(CrcChecksum::new(algorithm), data.chunks(step));
            assert_eq!(chunked, whole, "{algorithm} with {step}-byte chunks");
        }
    }
}
