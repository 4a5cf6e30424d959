//! Typed S-record kinds and decoded records.

use std::fmt;

/// S-record type tags.
///
/// `S4` is reserved by the format and has no variant; the decoder rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Header record (vendor text, 16-bit address field).
    S0,
    /// Data record with a 16-bit load address.
    S1,
    /// Data record with a 24-bit load address.
    S2,
    /// Data record with a 32-bit load address.
    S3,
    /// Record count, 16-bit.
    S5,
    /// Record count, 24-bit.
    S6,
    /// Termination record with a 32-bit start address.
    S7,
    /// Termination record with a 24-bit start address.
    S8,
    /// Termination record with a 16-bit start address.
    S9,
}

impl RecordKind {
    /// Converts the type digit following `S` into a record kind.
    ///
    /// Returns `None` for `S4` and anything that is not a digit.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            b'0' => Some(Self::S0),
            b'1' => Some(Self::S1),
            b'2' => Some(Self::S2),
            b'3' => Some(Self::S3),
            b'5' => Some(Self::S5),
            b'6' => Some(Self::S6),
            b'7' => Some(Self::S7),
            b'8' => Some(Self::S8),
            b'9' => Some(Self::S9),
            _ => None,
        }
    }

    /// Returns the ASCII type digit for this kind.
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::S0 => b'0',
            Self::S1 => b'1',
            Self::S2 => b'2',
            Self::S3 => b'3',
            Self::S5 => b'5',
            Self::S6 => b'6',
            Self::S7 => b'7',
            Self::S8 => b'8',
            Self::S9 => b'9',
        }
    }

    /// Width of the address field in bytes.
    #[must_use]
    pub const fn address_width(self) -> usize {
        match self {
            Self::S0 | Self::S1 | Self::S5 | Self::S9 => 2,
            Self::S2 | Self::S6 | Self::S8 => 3,
            Self::S3 | Self::S7 => 4,
        }
    }

    /// Returns true for the kinds whose payload is destined for memory.
    #[must_use]
    pub const fn carries_data(self) -> bool {
        match self {
            Self::S1 | Self::S2 | Self::S3 => true,
            Self::S0 | Self::S5 | Self::S6 | Self::S7 | Self::S8 | Self::S9 => false,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", char::from(self.digit()))
    }
}

/// One decoded S-record line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Declared record type.
    pub kind: RecordKind,
    /// Address field. For data kinds this is where `data` begins.
    pub address: u32,
    /// Payload bytes, possibly empty.
    pub data: Vec<u8>,
    /// Checksum byte as written in the input. Not verified.
    pub checksum: u8,
}

impl Record {
    /// Creates a record with a zero checksum byte.
    #[must_use]
    pub const fn new(kind: RecordKind, address: u32, data: Vec<u8>) -> Self {
        Self {
            kind,
            address,
            data,
            checksum: 0,
        }
    }

    /// Returns true if this record carries data for memory placement.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        self.kind.carries_data()
    }
}
