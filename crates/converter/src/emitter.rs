//! Address-tracking emission of ca65 source from decoded records.
//!
//! The emitter keeps a single cursor: the address the next byte lands at if
//! no placement directive intervenes. A data record whose address differs
//! from the cursor gets a `.org` before its bytes; a record that continues
//! exactly where the previous one stopped does not.

use srec_core::{Record, RecordKind};

use crate::config::{EmitterConfig, InitialOrgStyle};
use crate::output::{OrgWidth, OutputLine};

/// What the emitter does with a record of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Payload is placed in memory.
    Retain,
    /// Record is ignored; no output and no cursor movement.
    Skip,
}

/// Maps every record kind to its disposition.
#[must_use]
pub const fn disposition(kind: RecordKind) -> Disposition {
    match kind {
        RecordKind::S1 | RecordKind::S2 | RecordKind::S3 => Disposition::Retain,
        RecordKind::S0
        | RecordKind::S5
        | RecordKind::S6
        | RecordKind::S7
        | RecordKind::S8
        | RecordKind::S9 => Disposition::Skip,
    }
}

/// Mutable state for one emission run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitterState {
    /// Address the next emitted byte is expected at.
    pub cursor: u32,
    /// Whether the start address produced an initial placement directive.
    pub did_emit_initial_org: bool,
}

/// Streaming emitter. Feed records in file order, then call
/// [`Emitter::finish`].
#[derive(Debug, Clone)]
pub struct Emitter {
    state: EmitterState,
    lines: Vec<OutputLine>,
}

impl Emitter {
    /// Starts a run, emitting the segment header and the initial placement
    /// directive if the start address is non-zero.
    #[must_use]
    pub fn new(config: &EmitterConfig) -> Self {
        let mut lines = vec![OutputLine::Segment, OutputLine::Label];

        let did_emit_initial_org = config.start_address != 0;
        if did_emit_initial_org {
            let width = match config.initial_org {
                InitialOrgStyle::Unpadded => OrgWidth::Natural,
                InitialOrgStyle::Padded => OrgWidth::Padded,
            };
            lines.push(OutputLine::Org {
                address: config.start_address,
                width,
            });
        }

        Self {
            state: EmitterState {
                cursor: config.start_address,
                did_emit_initial_org,
            },
            lines,
        }
    }

    /// Processes one record and reports whether it was retained.
    #[allow(clippy::cast_possible_truncation)]
    pub fn push(&mut self, record: &Record) -> Disposition {
        let disposition = disposition(record.kind);
        if disposition == Disposition::Skip {
            return disposition;
        }

        if record.address != self.state.cursor {
            self.state.cursor = record.address;
            self.lines.push(OutputLine::Org {
                address: record.address,
                width: OrgWidth::Padded,
            });
        }

        if !record.data.is_empty() {
            self.lines.push(OutputLine::Bytes(record.data.clone()));
        }

        // Addresses are 32-bit; advancing past the top wraps.
        self.state.cursor = self.state.cursor.wrapping_add(record.data.len() as u32);
        disposition
    }

    /// Current cursor and initial-directive flag.
    #[must_use]
    pub const fn state(&self) -> EmitterState {
        self.state
    }

    /// Appends the trailer and returns every emitted line.
    #[must_use]
    pub fn finish(mut self) -> Vec<OutputLine> {
        self.lines.push(OutputLine::Blank);
        self.lines.push(OutputLine::Export);
        self.lines
    }
}

/// Runs a complete emission over `records`.
#[must_use]
pub fn emit<'a, I>(records: I, config: &EmitterConfig) -> Vec<OutputLine>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut emitter = Emitter::new(config);
    for record in records {
        emitter.push(record);
    }
    emitter.finish()
}
