//! S-record to ca65 conversion.
//!
//! Decoded records from [`srec_core`] are walked in file order by the
//! [`Emitter`], which tracks the next expected load address and produces
//! ca65 source that places every data byte at its original address.

/// Emitter settings and address literal parsing.
pub mod config;
pub use config::{parse_address, AddressError, EmitterConfig, InitialOrgStyle};

/// Address-tracking emission engine.
pub mod emitter;
pub use emitter::{disposition, emit, Disposition, Emitter, EmitterState};

/// Output line model and rendering.
pub mod output;
pub use output::{render, write_lines, OrgWidth, OutputLine, PROGRAM_LABEL, SEGMENT_NAME};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use tempfile as _;
