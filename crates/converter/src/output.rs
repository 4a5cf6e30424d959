//! ca65 output lines and their text rendering.

use std::fmt;
use std::io::{self, Write};

/// Segment all emitted bytes are placed in.
pub const SEGMENT_NAME: &str = "PROGRAM";
/// Label at the top of the segment, exported at the end.
pub const PROGRAM_LABEL: &str = "program";

/// Width of a placement directive's hex address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgWidth {
    /// Bare hex with no fixed width.
    Natural,
    /// At least four digits, zero-padded.
    Padded,
}

/// One line of generated assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    /// `.segment "PROGRAM"`
    Segment,
    /// `program:`
    Label,
    /// `\t.org $<hex>`
    Org {
        /// Placement address.
        address: u32,
        /// Digit width of the rendered address.
        width: OrgWidth,
    },
    /// `\t.byte $xx, $xx, ...` with every byte on one line.
    Bytes(Vec<u8>),
    /// Empty separator line.
    Blank,
    /// `.export program`
    Export,
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Segment => write!(f, ".segment \"{SEGMENT_NAME}\""),
            Self::Label => write!(f, "{PROGRAM_LABEL}:"),
            Self::Org {
                address,
                width: OrgWidth::Natural,
            } => write!(f, "\t.org ${address:x}"),
            Self::Org {
                address,
                width: OrgWidth::Padded,
            } => write!(f, "\t.org ${address:04x}"),
            Self::Bytes(bytes) => {
                f.write_str("\t.byte ")?;
                for (i, b) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "${b:02x}")?;
                }
                Ok(())
            }
            Self::Blank => Ok(()),
            Self::Export => write!(f, ".export {PROGRAM_LABEL}"),
        }
    }
}

/// Writes each line followed by a newline.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_lines<W: Write>(out: &mut W, lines: &[OutputLine]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Renders lines to a single newline-terminated string.
#[must_use]
pub fn render(lines: &[OutputLine]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
