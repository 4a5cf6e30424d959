//! Motorola S-record decoding.
//!
//! Turns the ASCII-hex record text produced by ROM tools into typed
//! [`Record`] values, validating the line grammar and byte counts.

/// Typed record kinds and decoded records.
pub mod record;
pub use record::{Record, RecordKind};

/// Line-level and whole-input decoding.
pub mod decoder;
pub use decoder::{decode_reader, decode_str, parse_record};

/// Decode error taxonomy.
pub mod error;
pub use error::{DecodeError, ReadError, RecordError};

#[cfg(test)]
use proptest as _;
