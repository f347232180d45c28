//! # retrodis
//!
//! A table-driven disassembler for 8-bit processors.
//!
//! Each supported CPU is described by static data: the leadin bytes that
//! start two-byte opcodes, an addressing-mode map and an opcode list. The
//! decode loop walks a byte stream once, turning every instruction (or every
//! unit of a user-declared data block) into one listing line.
//!
//! ## Quick Start
//!
//! ```rust
//! use retrodis::{Disassembler, DisassemblyOptions, LabelResolver};
//!
//! let mut labels = LabelResolver::new();
//! labels.add("START", 0x2000);
//!
//! let disassembler = Disassembler::for_cpu("6502")
//!     .unwrap()
//!     .with_options(DisassemblyOptions {
//!         start_address: 0x2000,
//!         ..DisassemblyOptions::default()
//!     })
//!     .with_labels(labels);
//!
//! let mut out = Vec::new();
//! // jmp $2000
//! disassembler.run(&[0x4C, 0x00, 0x20][..], &mut out).unwrap();
//!
//! let listing = String::from_utf8(out).unwrap();
//! assert!(listing.contains("START:\n2000  4C 00 20    jmp      START\n"));
//! ```
//!
//! ## Modules
//!
//! - `cpus` - Registered CPU definitions
//! - `opcodes` - Instruction table built from a CPU's opcode list
//! - `addressing` - Operand formats and the addressing-mode map
//! - `labels` - Label file parsing and lookup
//! - `blocks` - Data block overrides
//! - `disassembler` - Decode loop and listing layout
//! - `stream` - Byte-at-a-time input

pub mod addressing;
pub mod blocks;
pub mod cpus;
pub mod disassembler;
pub mod error;
pub mod labels;
pub mod opcodes;
pub mod stream;

// WebAssembly bindings (feature-gated)
pub mod wasm;

// Re-export public API
pub use addressing::{AddressModeFormatter, Endian, OperandFormat};
pub use blocks::{BlockKind, BlockOverrideTable, Region};
pub use cpus::CpuDefinition;
pub use disassembler::{
    disassemble, Body, Disassembler, DisassemblyOptions, Line, Outcome, Summary,
};
pub use error::DisasmError;
pub use labels::{Label, LabelResolver};
pub use opcodes::{Descriptor, InstructionTable, OpcodeEntry};
