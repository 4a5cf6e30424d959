//! Emitter configuration and address literal parsing.

use std::num::IntErrorKind;

use thiserror::Error;

/// How the placement directive for the start address is rendered.
///
/// Placement directives emitted for address discontinuities are always
/// zero-padded to four digits. Existing output leaves the start-address
/// directive unpadded, so that is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitialOrgStyle {
    /// `.org $8000`, `.org $c0`: bare hex, no fixed width.
    #[default]
    Unpadded,
    /// Same four-digit zero-padded form as every later directive.
    Padded,
}

/// Settings for one emitter run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Address of the first emitted byte. Zero means no initial directive.
    pub start_address: u32,
    /// Rendering of the initial placement directive.
    pub initial_org: InitialOrgStyle,
}

impl EmitterConfig {
    /// Creates a configuration with the given start address and default
    /// formatting.
    #[must_use]
    pub const fn with_start(start_address: u32) -> Self {
        Self {
            start_address,
            initial_org: InitialOrgStyle::Unpadded,
        }
    }
}

/// Rejected address literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// No digits were given.
    #[error("empty address")]
    Empty,
    /// The literal is not a number in any accepted base.
    #[error("invalid address: {0}")]
    Invalid(String),
    /// The value does not fit in 32 bits.
    #[error("address out of range: {0}")]
    OutOfRange(String),
}

/// Parses an unsigned 32-bit address literal.
///
/// Accepted forms: decimal (`32768`), hex (`0x8000`, `$8000`), octal
/// (`0o100000` or a leading zero, `0100000`), and binary (`0b1000`).
///
/// # Errors
///
/// Returns an [`AddressError`] if the literal is empty, malformed, or larger
/// than `u32::MAX`.
pub fn parse_address(text: &str) -> Result<u32, AddressError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(AddressError::Empty);
    }

    let (digits, radix) = split_radix(s);
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(AddressError::Invalid(s.to_string()));
    }

    u32::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => AddressError::OutOfRange(s.to_string()),
        _ => AddressError::Invalid(s.to_string()),
    })
}

fn split_radix(s: &str) -> (&str, u32) {
    if let Some(hex) = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('$'))
    {
        return (hex, 16);
    }
    if let Some(oct) = s.strip_prefix("0o").or_else(|| s.strip_prefix("0O")) {
        return (oct, 8);
    }
    if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        return (bin, 2);
    }
    if s.len() > 1 {
        if let Some(oct) = s.strip_prefix('0') {
            return (oct, 8);
        }
    }
    (s, 10)
}
