//! Line-level S-record decoding.
//!
//! A record line has the shape
//!
//! ```text
//! S<type><count><address><data...><checksum>
//! ```
//!
//! where every field after the type digit is hex encoded and `count` is the
//! number of bytes that follow it. The checksum byte is kept on the record
//! but never verified.

use std::io::Read;

use crate::error::{DecodeError, ReadError, RecordError};
use crate::record::{Record, RecordKind};

/// Bytes in the count and checksum fields combined.
const FRAMING_BYTES: usize = 2;

/// Decodes a single S-record line.
///
/// Surrounding whitespace (including a trailing `\r`) is ignored. Hex digits
/// may be upper or lower case.
///
/// # Errors
///
/// Returns a [`RecordError`] if the line does not follow the record grammar.
pub fn parse_record(line: &str) -> Result<Record, RecordError> {
    let trimmed = line.trim_start();
    let lead = line.len() - trimmed.len();
    let trimmed = trimmed.trim_end();

    let raw = trimmed.as_bytes();
    if raw.first() != Some(&b'S') {
        return Err(RecordError::MissingStartCode);
    }

    let type_char = trimmed[1..]
        .chars()
        .next()
        .ok_or(RecordError::MissingType)?;
    let kind = u8::try_from(type_char)
        .ok()
        .and_then(RecordKind::from_digit)
        .ok_or(RecordError::UnsupportedType(type_char))?;

    let bytes = decode_hex(&trimmed[2..], lead + 3)?;

    let width = kind.address_width();
    let needed = FRAMING_BYTES + width;
    if bytes.len() < needed {
        return Err(RecordError::TooShort {
            kind,
            needed,
            found: bytes.len(),
        });
    }

    let declared = bytes[0];
    let actual = bytes.len() - 1;
    if usize::from(declared) != actual {
        return Err(RecordError::ByteCountMismatch { declared, actual });
    }

    let address = bytes[1..=width]
        .iter()
        .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
    let checksum = bytes[bytes.len() - 1];
    let data = bytes[1 + width..bytes.len() - 1].to_vec();

    Ok(Record {
        kind,
        address,
        data,
        checksum,
    })
}

/// Decodes hex pairs into bytes. `first_column` is the 1-indexed column of
/// the first character in `text`, used for error positions.
fn decode_hex(text: &str, first_column: usize) -> Result<Vec<u8>, RecordError> {
    let mut bytes = Vec::with_capacity(text.len() / 2);
    let mut high: Option<u8> = None;

    for (idx, c) in text.chars().enumerate() {
        let nibble = c
            .to_digit(16)
            .and_then(|d| u8::try_from(d).ok())
            .ok_or(RecordError::InvalidHexDigit {
                column: first_column + idx,
                found: c,
            })?;

        match high.take() {
            Some(h) => bytes.push((h << 4) | nibble),
            None => high = Some(nibble),
        }
    }

    if high.is_some() {
        return Err(RecordError::OddHexLength);
    }

    Ok(bytes)
}

/// Decodes every record in `text`, in input order.
///
/// Blank lines are skipped. Decoding stops at the first malformed line.
///
/// # Errors
///
/// Returns a [`DecodeError`] carrying the 1-indexed line number of the first
/// line that fails to decode.
pub fn decode_str(text: &str) -> Result<Vec<Record>, DecodeError> {
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_record(line).map_err(|kind| DecodeError::new(idx + 1, kind))?;
        records.push(record);
    }

    Ok(records)
}

/// Reads `reader` to the end, then decodes the whole input.
///
/// # Errors
///
/// Returns [`ReadError::Io`] if reading fails (including non-UTF-8 input) and
/// [`ReadError::Decode`] for the first malformed line.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<Vec<Record>, ReadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(decode_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::{decode_reader, decode_str, parse_record};
    use crate::error::{ReadError, RecordError};
    use crate::record::{Record, RecordKind};
    use rstest::rstest;

    #[test]
    fn parses_s1_data_record() {
        let record = parse_record("S1130000285F245F2212226A000424290008237C2A").unwrap();
        assert_eq!(record.kind, RecordKind::S1);
        assert_eq!(record.address, 0x0000);
        assert_eq!(
            record.data,
            vec![
                0x28, 0x5F, 0x24, 0x5F, 0x22, 0x12, 0x22, 0x6A, 0x00, 0x04, 0x24, 0x29, 0x00,
                0x08, 0x23, 0x7C
            ]
        );
        assert_eq!(record.checksum, 0x2A);
    }

    #[rstest]
    #[case("S00600004844521B", RecordKind::S0, 0x0000, b"HDR".to_vec())]
    #[case("S2070100000102033E", RecordKind::S2, 0x01_0000, vec![1, 2, 3])]
    #[case("S30980000000DEADBEEFB9", RecordKind::S3, 0x8000_0000, vec![0xDE, 0xAD, 0xBE, 0xEF])]
    #[case("S5030003F9", RecordKind::S5, 0x0003, vec![])]
    #[case("S705000000FAFF", RecordKind::S7, 0x0000_00FA, vec![])]
    #[case("S804000000FB", RecordKind::S8, 0x00_0000, vec![])]
    #[case("S9030000FC", RecordKind::S9, 0x0000, vec![])]
    fn parses_each_kind(
        #[case] line: &str,
        #[case] kind: RecordKind,
        #[case] address: u32,
        #[case] data: Vec<u8>,
    ) {
        let record = parse_record(line).unwrap();
        assert_eq!(record.kind, kind);
        assert_eq!(record.address, address);
        assert_eq!(record.data, data);
    }

    #[test]
    fn accepts_lowercase_hex_and_surrounding_whitespace() {
        let record = parse_record("  S1050010abcd00\r\n").unwrap();
        assert_eq!(record.address, 0x0010);
        assert_eq!(record.data, vec![0xAB, 0xCD]);
    }

    #[test]
    fn accepts_empty_data_record() {
        let record = parse_record("S1030020DC").unwrap();
        assert_eq!(record.address, 0x0020);
        assert!(record.data.is_empty());
    }

    #[rstest]
    #[case("", RecordError::MissingStartCode)]
    #[case(":10010000", RecordError::MissingStartCode)]
    #[case("S", RecordError::MissingType)]
    #[case("S4030000FC", RecordError::UnsupportedType('4'))]
    #[case("SX030000FC", RecordError::UnsupportedType('X'))]
    #[case("S1030000F", RecordError::OddHexLength)]
    #[case("S103000GFC", RecordError::InvalidHexDigit { column: 8, found: 'G' })]
    #[case("S10300", RecordError::TooShort { kind: RecordKind::S1, needed: 4, found: 2 })]
    #[case("S3050000FC", RecordError::TooShort { kind: RecordKind::S3, needed: 6, found: 4 })]
    #[case("S1050000FC", RecordError::ByteCountMismatch { declared: 5, actual: 3 })]
    fn rejects_malformed_lines(#[case] line: &str, #[case] expected: RecordError) {
        assert_eq!(parse_record(line), Err(expected));
    }

    #[test]
    fn invalid_digit_column_counts_leading_whitespace() {
        assert_eq!(
            parse_record("  S1030Z00FC"),
            Err(RecordError::InvalidHexDigit {
                column: 8,
                found: 'Z'
            })
        );
    }

    #[test]
    fn non_ascii_type_is_unsupported_not_a_panic() {
        assert_eq!(
            parse_record("Sé030000FC"),
            Err(RecordError::UnsupportedType('é'))
        );
    }

    #[test]
    fn decode_str_skips_blank_lines_and_keeps_order() {
        let text = "S00600004844521B\n\nS1050010AABB00\n   \nS9030000FC\n";
        let records = decode_str(text).unwrap();
        let kinds: Vec<_> = records.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RecordKind::S0, RecordKind::S1, RecordKind::S9]);
        assert_eq!(
            records[1],
            Record {
                kind: RecordKind::S1,
                address: 0x0010,
                data: vec![0xAA, 0xBB],
                checksum: 0x00,
            }
        );
    }

    #[test]
    fn decode_str_reports_first_bad_line_number() {
        let text = "S1050010AABB00\n\nS1050010AA\nnot a record\n";
        let err = decode_str(text).unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(
            err.kind,
            RecordError::ByteCountMismatch {
                declared: 5,
                actual: 3
            }
        );
    }

    #[test]
    fn decode_reader_reads_whole_input() {
        let input: &[u8] = b"S1050010AABB00\r\nS9030000FC\r\n";
        let records = decode_reader(input).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn decode_reader_rejects_non_utf8_as_io() {
        let input: &[u8] = &[b'S', b'1', 0xFF, 0xFE];
        let err = decode_reader(input).unwrap_err();
        assert!(matches!(err, ReadError::Io(_)));
    }
}
