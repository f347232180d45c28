//! Disassembler Module
//!
//! Walks a byte stream once from a start address, emitting one listing line
//! per decoded unit. Block overrides are consulted first, then the CPU's
//! instruction table.
//!
//! # Examples
//!
//! ```
//! use retrodis::{disassemble, DisassemblyOptions};
//!
//! let options = DisassemblyOptions {
//!     start_address: 0x1000,
//!     ..DisassemblyOptions::default()
//! };
//! let listing = disassemble("6502", &[0xA9, 0x42, 0xEA], options).unwrap();
//! assert!(listing.contains("1000  A9 42       lda      #$42"));
//! assert!(listing.ends_with("1003              end\n"));
//! ```

pub mod decoder;
pub mod formatter;

use std::io::{Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::addressing::AddressModeFormatter;
use crate::blocks::{BlockOverrideTable, Fetch};
use crate::cpus::{self, CpuDefinition};
use crate::error::DisasmError;
use crate::labels::LabelResolver;
use crate::opcodes::{Collision, InstructionTable};
use crate::stream::ByteStream;

use decoder::{Cursor, Decoded, Decoder};
use formatter::Layout;

/// Text part of a listing line.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// A decoded instruction. `operand` is empty for implied modes.
    Instruction {
        mnemonic: &'static str,
        operand: String,
    },

    /// A data pseudo-op such as `.byte` or `.string`.
    Directive { name: &'static str, value: String },
}

/// One decoded unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Cursor value before the unit's bytes were consumed
    pub address: u16,

    /// Every byte the unit consumed
    pub bytes: Vec<u8>,

    pub body: Body,
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy)]
pub struct DisassemblyOptions {
    /// Address of the first input byte
    pub start_address: u16,

    /// Show the address and byte columns
    pub listing: bool,

    /// Decode undocumented opcodes instead of treating them as invalid
    pub undocumented: bool,

    /// Show invalid opcodes as `???` instead of `.byte` data
    pub show_invalid: bool,
}

impl Default for DisassemblyOptions {
    fn default() -> Self {
        Self {
            start_address: 0x0000,
            listing: true,
            undocumented: false,
            show_invalid: false,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input ended on a unit boundary; the `end` trailer was written.
    End,
    /// Input ended inside an instruction or data unit.
    Truncated,
    /// The interrupt flag was raised.
    Interrupted,
}

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub outcome: Outcome,

    /// Cursor after the last complete unit
    pub final_address: u16,

    /// Number of units written, not counting labels and framing lines
    pub lines: usize,
}

/// A configured disassembler for one CPU.
///
/// Tables are built once in [`Disassembler::new`] and never change; a single
/// instance can run any number of inputs.
#[derive(Debug)]
pub struct Disassembler {
    cpu: &'static CpuDefinition,
    instructions: InstructionTable,
    modes: AddressModeFormatter,
    labels: Option<LabelResolver>,
    blocks: BlockOverrideTable,
    options: DisassemblyOptions,
    interrupt: Option<&'static AtomicBool>,
}

impl Disassembler {
    pub fn new(cpu: &'static CpuDefinition) -> Self {
        Self {
            cpu,
            instructions: InstructionTable::build(cpu.opcodes),
            modes: AddressModeFormatter::new(cpu.modes),
            labels: None,
            blocks: BlockOverrideTable::new(),
            options: DisassemblyOptions::default(),
            interrupt: None,
        }
    }

    /// Look up a registered CPU by identifier.
    pub fn for_cpu(id: &str) -> Result<Self, DisasmError> {
        cpus::find(id)
            .map(Self::new)
            .ok_or_else(|| DisasmError::unknown_cpu(id))
    }

    pub fn with_options(mut self, options: DisassemblyOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable label lines and operand substitution.
    pub fn with_labels(mut self, labels: LabelResolver) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_blocks(mut self, blocks: BlockOverrideTable) -> Self {
        self.blocks = blocks;
        self
    }

    /// Stop before the next unit once `flag` is set.
    pub fn with_interrupt(mut self, flag: &'static AtomicBool) -> Self {
        self.interrupt = Some(flag);
        self
    }

    pub fn cpu(&self) -> &'static CpuDefinition {
        self.cpu
    }

    /// Opcode keys defined more than once in the CPU's table.
    pub fn collisions(&self) -> &[Collision] {
        self.instructions.collisions()
    }

    /// Disassemble `input` into `out`.
    ///
    /// Running out of input is not an error; see [`Summary::outcome`].
    pub fn run<R: Read, W: Write>(&self, input: R, out: &mut W) -> Result<Summary, DisasmError> {
        let layout = Layout::new(self.options.listing, self.cpu.max_length);
        let decoder = Decoder {
            instructions: &self.instructions,
            modes: &self.modes,
            leadins: self.cpu.leadins,
            labels: self.labels.as_ref(),
            options: &self.options,
        };
        let mut stream = ByteStream::new(input);
        let mut cursor = Cursor::new(self.options.start_address);
        let mut lines = 0;

        writeln!(out, "{}", layout.origin(cursor.address))?;
        writeln!(out)?;

        let outcome = loop {
            if self.is_interrupted() {
                break Outcome::Interrupted;
            }

            if let Some(name) = self.labels.as_ref().and_then(|l| l.label_at(cursor.address)) {
                writeln!(out, "{}", layout.label(name))?;
            }

            let line = match self.blocks.region_at(cursor.address) {
                Some(region) => match region.read_unit(cursor.address, &mut stream)? {
                    Fetch::Unit(line) => line,
                    Fetch::Truncated(partial) => {
                        if let Some(line) = partial {
                            writeln!(out, "{}", layout.line(&line))?;
                            lines += 1;
                        }
                        break Outcome::Truncated;
                    }
                },
                None => match decoder.decode(cursor.address, &mut stream)? {
                    Decoded::Line(line) => line,
                    Decoded::EndOfData => break Outcome::End,
                    Decoded::Truncated => break Outcome::Truncated,
                },
            };

            writeln!(out, "{}", layout.line(&line))?;
            lines += 1;
            cursor.advance(line.bytes.len());
        };

        if outcome == Outcome::End {
            writeln!(out)?;
            writeln!(out, "{}", layout.trailer(cursor.address))?;
        }
        out.flush()?;

        Ok(Summary {
            outcome,
            final_address: cursor.address,
            lines,
        })
    }

    fn is_interrupted(&self) -> bool {
        self.interrupt
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }
}

/// Disassemble an in-memory buffer into listing text.
pub fn disassemble(
    cpu_id: &str,
    bytes: &[u8],
    options: DisassemblyOptions,
) -> Result<String, DisasmError> {
    let disassembler = Disassembler::for_cpu(cpu_id)?.with_options(options);
    let mut out = Vec::new();
    disassembler.run(bytes, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(disassembler: &Disassembler, bytes: &[u8]) -> (Summary, Vec<String>) {
        let mut out = Vec::new();
        let summary = disassembler.run(bytes, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        (summary, text.lines().map(str::to_string).collect())
    }

    #[test]
    fn test_empty_input() {
        let disassembler = Disassembler::for_cpu("6502").unwrap();
        let (summary, lines) = run(&disassembler, &[]);
        assert_eq!(summary.outcome, Outcome::End);
        assert_eq!(summary.lines, 0);
        assert_eq!(
            lines,
            vec![
                "0000              .org     $0000",
                "",
                "",
                "0000              end"
            ]
        );
    }

    #[test]
    fn test_unknown_cpu() {
        let err = Disassembler::for_cpu("8086").unwrap_err();
        assert_eq!(
            err.to_string(),
            "CPU '8086' is not supported. The following CPUs are supported: 6502 65c02 6809 z80"
        );
    }

    #[test]
    fn test_interrupt_stops_before_first_unit() {
        static FLAG: AtomicBool = AtomicBool::new(true);
        let disassembler = Disassembler::for_cpu("6502").unwrap().with_interrupt(&FLAG);
        let (summary, lines) = run(&disassembler, &[0xEA, 0xEA]);
        assert_eq!(summary.outcome, Outcome::Interrupted);
        assert_eq!(summary.lines, 0);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_truncation_has_no_trailer() {
        let disassembler = Disassembler::for_cpu("6502").unwrap();
        let (summary, lines) = run(&disassembler, &[0xEA, 0xAD, 0x00]);
        assert_eq!(summary.outcome, Outcome::Truncated);
        assert_eq!(summary.final_address, 0x0001);
        assert_eq!(lines.last().unwrap(), "0000  EA          nop");
    }

    #[test]
    fn test_label_before_trailer() {
        let mut labels = LabelResolver::new();
        labels.add("DONE", 0x0001);
        let disassembler = Disassembler::for_cpu("6502").unwrap().with_labels(labels);
        let (_, lines) = run(&disassembler, &[0xEA]);
        assert_eq!(
            &lines[2..],
            &["0000  EA          nop", "DONE:", "", "0001              end"]
        );
    }
}
