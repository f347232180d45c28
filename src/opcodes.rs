//! # Opcode Tables
//!
//! CPU definitions list their instructions as [`OpcodeEntry`] values. At
//! startup those lists are folded into an [`InstructionTable`], a map from the
//! logical opcode to its [`Descriptor`].
//!
//! A logical opcode is the opcode byte itself, or `(leadin << 8) | byte` when
//! the first byte is one of the CPU's leadin bytes, or a three-byte key for
//! instructions flagged [`Flags::extended`] whose real opcode trails the
//! operand (Z80 `DD CB d op`).

use std::collections::HashMap;

/// Mnemonic used for opcodes with no table entry.
pub const INVALID_MNEMONIC: &str = "???";

/// Per-instruction flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// The last operand is a displacement from the following instruction.
    pub pc_relative: bool,

    /// Unofficial opcode, hidden unless undocumented opcodes are enabled.
    pub undocumented: bool,

    /// The final operand byte is really the opcode; look up again with a
    /// three-byte key.
    pub extended: bool,
}

impl Flags {
    pub const NONE: Flags = Flags {
        pc_relative: false,
        undocumented: false,
        extended: false,
    };
}

/// One line of a CPU's opcode list, as written in the CPU definition.
///
/// # Examples
///
/// ```
/// use retrodis::opcodes::OpcodeEntry;
///
/// let bne = OpcodeEntry::new(0xD0, 2, "bne", "relative").pcr();
/// assert_eq!(bne.length, 2);
/// assert!(bne.flags.pc_relative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Logical opcode (1-3 bytes).
    pub opcode: u32,

    /// Total instruction size in bytes, including leadin and opcode bytes.
    pub length: u8,

    /// Assembler mnemonic.
    pub mnemonic: &'static str,

    /// Key into the CPU's addressing-mode map.
    pub mode: &'static str,

    pub flags: Flags,
}

impl OpcodeEntry {
    pub const fn new(opcode: u32, length: u8, mnemonic: &'static str, mode: &'static str) -> Self {
        Self {
            opcode,
            length,
            mnemonic,
            mode,
            flags: Flags::NONE,
        }
    }

    /// Mark the entry as PC-relative.
    pub const fn pcr(mut self) -> Self {
        self.flags.pc_relative = true;
        self
    }

    /// Mark the entry as undocumented.
    pub const fn und(mut self) -> Self {
        self.flags.undocumented = true;
        self
    }

    /// Mark the entry as carrying its real opcode in the last operand byte.
    pub const fn ext(mut self) -> Self {
        self.flags.extended = true;
        self
    }
}

/// Decoding metadata for one logical opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub length: u8,
    pub mnemonic: &'static str,
    pub mode: &'static str,
    pub flags: Flags,
}

impl From<&OpcodeEntry> for Descriptor {
    fn from(entry: &OpcodeEntry) -> Self {
        Self {
            length: entry.length,
            mnemonic: entry.mnemonic,
            mode: entry.mode,
            flags: entry.flags,
        }
    }
}

/// A key defined more than once while building a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    pub opcode: u32,
    /// The definition that was replaced.
    pub replaced: Descriptor,
    /// The definition now in the table.
    pub kept: Descriptor,
}

/// Immutable map from logical opcode to descriptor.
#[derive(Debug, Clone, Default)]
pub struct InstructionTable {
    entries: HashMap<u32, Descriptor>,
    collisions: Vec<Collision>,
}

impl InstructionTable {
    /// Build a table from layers of entries.
    ///
    /// Layers are applied in order and later definitions of a key replace
    /// earlier ones. Every replacement is recorded in [`collisions`](Self::collisions),
    /// including an overlay layer deliberately redefining a base opcode.
    pub fn build(layers: &[&[OpcodeEntry]]) -> Self {
        let mut table = InstructionTable::default();
        for entry in layers.iter().flat_map(|layer| layer.iter()) {
            let descriptor = Descriptor::from(entry);
            if let Some(replaced) = table.entries.insert(entry.opcode, descriptor) {
                table.collisions.push(Collision {
                    opcode: entry.opcode,
                    replaced,
                    kept: descriptor,
                });
            }
        }
        table
    }

    /// Look up a logical opcode.
    pub fn get(&self, opcode: u32) -> Option<&Descriptor> {
        self.entries.get(&opcode)
    }

    /// Keys that were defined more than once, in build order.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Number of distinct opcodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all opcodes and their descriptors in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Descriptor)> {
        self.entries.iter().map(|(&opcode, descriptor)| (opcode, descriptor))
    }
}
