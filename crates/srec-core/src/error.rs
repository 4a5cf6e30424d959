//! Decode error taxonomy.
//!
//! [`RecordError`] describes why a single line was rejected, [`DecodeError`]
//! pins it to an input line, and [`ReadError`] adds the I/O failures that can
//! happen while the input is being read.

use thiserror::Error;

use crate::record::RecordKind;

/// Reasons a single S-record line fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The line does not begin with `S`.
    #[error("record does not start with 'S'")]
    MissingStartCode,
    /// The line ends right after the start code.
    #[error("record is missing its type digit")]
    MissingType,
    /// The type digit is reserved (`S4`) or not a digit.
    #[error("unsupported record type 'S{0}'")]
    UnsupportedType(char),
    /// A character in the hex body is not a hex digit.
    #[error("invalid hex digit '{found}' at column {column}")]
    InvalidHexDigit {
        /// 1-indexed column within the input line.
        column: usize,
        /// The offending character.
        found: char,
    },
    /// The hex body has an odd number of digits.
    #[error("record has an odd number of hex digits")]
    OddHexLength,
    /// Not enough bytes for the count, address, and checksum fields.
    #[error("{kind} record too short: need at least {needed} bytes, found {found}")]
    TooShort {
        /// Declared record kind.
        kind: RecordKind,
        /// Minimum byte count for this kind (count + address + checksum).
        needed: usize,
        /// Bytes actually present after the type digit.
        found: usize,
    },
    /// The count byte disagrees with the number of bytes that follow it.
    #[error("byte count {declared} does not match {actual} bytes in record")]
    ByteCountMismatch {
        /// Value of the count field.
        declared: u8,
        /// Bytes actually following the count field.
        actual: usize,
    },
}

/// A record error located at a specific input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct DecodeError {
    /// 1-indexed input line number.
    pub line: usize,
    /// What went wrong on that line.
    #[source]
    pub kind: RecordError,
}

impl DecodeError {
    /// Creates a decode error for the given line.
    #[must_use]
    pub const fn new(line: usize, kind: RecordError) -> Self {
        Self { line, kind }
    }
}

/// Failure while reading and decoding a whole input stream.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A line failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
