//! # CPU Definitions
//!
//! Static registry of the processors the disassembler knows. Each definition
//! bundles the leadin bytes that introduce two-byte opcodes, the longest
//! instruction (used to size the byte column), the addressing-mode map and
//! the opcode list.
//!
//! Definitions are plain `const` data. Their shape is checked while the crate
//! compiles: an entry longer than the CPU's maximum, or one naming a mode the
//! CPU does not define, fails the build.

mod mc6809;
mod mos6502;
mod wdc65c02;
mod z80;

use crate::addressing::{Affix, Endian, OperandFormat};
use crate::opcodes::OpcodeEntry;

/// Longest instruction any CPU definition may declare.
pub const MAX_INSTRUCTION_LENGTH: u8 = 7;

/// Everything the decode loop needs to know about one processor.
#[derive(Debug)]
pub struct CpuDefinition {
    /// Identifier selected with `--cpu`.
    pub id: &'static str,

    /// One-line human description.
    pub description: &'static str,

    /// First bytes of two-byte opcodes.
    pub leadins: &'static [u8],

    /// Longest instruction in bytes (1-7).
    pub max_length: u8,

    /// Addressing-mode key to operand format.
    pub modes: &'static [(&'static str, OperandFormat)],

    /// Opcode lists, applied in order; later entries replace earlier ones.
    pub opcodes: &'static [&'static [OpcodeEntry]],
}

/// All registered CPUs, in the order they are listed to the user.
pub static CPUS: &[&CpuDefinition] = &[
    &mos6502::CPU,
    &wdc65c02::CPU,
    &mc6809::CPU,
    &z80::CPU,
];

/// Find a CPU by identifier.
pub fn find(id: &str) -> Option<&'static CpuDefinition> {
    CPUS.iter().copied().find(|cpu| cpu.id.eq_ignore_ascii_case(id))
}

/// Identifiers of all registered CPUs.
pub fn supported() -> impl Iterator<Item = &'static str> {
    CPUS.iter().map(|cpu| cpu.id)
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn has_mode(cpu: &CpuDefinition, mode: &str) -> bool {
    let mut i = 0;
    while i < cpu.modes.len() {
        if str_eq(cpu.modes[i].0, mode) {
            return true;
        }
        i += 1;
    }
    false
}

/// Compile-time shape check for a CPU definition.
const fn is_well_formed(cpu: &CpuDefinition) -> bool {
    if cpu.max_length == 0 || cpu.max_length > MAX_INSTRUCTION_LENGTH {
        return false;
    }
    let mut layer = 0;
    while layer < cpu.opcodes.len() {
        let entries = cpu.opcodes[layer];
        let mut i = 0;
        while i < entries.len() {
            let entry = &entries[i];
            if entry.length == 0 || entry.length > cpu.max_length {
                return false;
            }
            if !has_mode(cpu, entry.mode) {
                return false;
            }
            i += 1;
        }
        layer += 1;
    }
    true
}

const _: () = assert!(is_well_formed(&mos6502::CPU), "malformed 6502 table");
const _: () = assert!(is_well_formed(&wdc65c02::CPU), "malformed 65c02 table");
const _: () = assert!(is_well_formed(&mc6809::CPU), "malformed 6809 table");
const _: () = assert!(is_well_formed(&z80::CPU), "malformed z80 table");

// Shorthands used by the table modules.

const fn op(opcode: u32, length: u8, mnemonic: &'static str, mode: &'static str) -> OpcodeEntry {
    OpcodeEntry::new(opcode, length, mnemonic, mode)
}

const fn byte(prefix: &'static str, suffix: &'static str) -> OperandFormat {
    OperandFormat::Byte(Affix::new(prefix, suffix))
}

/// 16-bit data, never replaced by a label.
const fn word(order: Endian, prefix: &'static str, suffix: &'static str) -> OperandFormat {
    OperandFormat::Word {
        order,
        affix: Affix::new(prefix, suffix),
        label: false,
    }
}

/// 16-bit address, replaced by a label when one is defined there.
const fn address(order: Endian, prefix: &'static str, suffix: &'static str) -> OperandFormat {
    OperandFormat::Word {
        order,
        affix: Affix::new(prefix, suffix),
        label: true,
    }
}

const fn rel8(prefix: &'static str, suffix: &'static str) -> OperandFormat {
    OperandFormat::Relative8(Affix::new(prefix, suffix))
}

const fn rel16(order: Endian, prefix: &'static str, suffix: &'static str) -> OperandFormat {
    OperandFormat::Relative16 {
        order,
        affix: Affix::new(prefix, suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("6502").unwrap().id, "6502");
        assert_eq!(find("Z80").unwrap().id, "z80");
        assert_eq!(find("65C02").unwrap().id, "65c02");
        assert!(find("8086").is_none());
    }

    #[test]
    fn test_supported_lists_every_cpu() {
        let ids: Vec<&str> = supported().collect();
        assert_eq!(ids, vec!["6502", "65c02", "6809", "z80"]);
    }

    #[test]
    fn test_well_formed_rejects_bad_shapes() {
        const ENTRIES: [OpcodeEntry; 1] = [OpcodeEntry::new(0x00, 4, "brk", "implied")];
        const BAD_LENGTH: CpuDefinition = CpuDefinition {
            id: "bad",
            description: "",
            leadins: &[],
            max_length: 3,
            modes: &[("implied", OperandFormat::Implied)],
            opcodes: &[&ENTRIES],
        };
        assert!(!is_well_formed(&BAD_LENGTH));

        const BAD_MODE: CpuDefinition = CpuDefinition {
            max_length: 4,
            modes: &[("inherent", OperandFormat::Implied)],
            ..BAD_LENGTH
        };
        assert!(!is_well_formed(&BAD_MODE));

        const GOOD: CpuDefinition = CpuDefinition {
            max_length: 4,
            ..BAD_LENGTH
        };
        assert!(is_well_formed(&GOOD));
    }
}
