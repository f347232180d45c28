//! Opcode table validation tests
//!
//! Verifies that every registered CPU table is consistent and that each
//! opcode decodes as declared.

use retrodis::cpus::{self, CPUS};
use retrodis::{
    AddressModeFormatter, Disassembler, DisassemblyOptions, InstructionTable, Outcome,
};

/// Shortest byte sequence that selects `opcode`, padded with zero operands.
fn minimal_encoding(opcode: u32, length: u8) -> Vec<u8> {
    let mut bytes = if opcode > 0xFFFF {
        // Indexed bit operations: prefix, leadin, displacement, opcode
        vec![(opcode >> 16) as u8, (opcode >> 8) as u8, 0x00, opcode as u8]
    } else if opcode > 0xFF {
        vec![(opcode >> 8) as u8, opcode as u8]
    } else {
        vec![opcode as u8]
    };
    bytes.resize(usize::from(length).max(bytes.len()), 0x00);
    bytes
}

#[test]
fn test_registry_contents() {
    let ids: Vec<&str> = CPUS.iter().map(|cpu| cpu.id).collect();
    assert_eq!(ids, vec!["6502", "65c02", "6809", "z80"]);

    for cpu in CPUS {
        assert!(!cpu.description.is_empty(), "{} has no description", cpu.id);
        assert!(cpus::find(cpu.id).is_some());
    }
}

#[test]
fn test_table_sizes() {
    let sizes: Vec<usize> = CPUS
        .iter()
        .map(|cpu| InstructionTable::build(cpu.opcodes).len())
        .collect();
    assert_eq!(sizes, vec![256, 212, 268, 730]);
}

#[test]
fn test_tables_have_no_collisions() {
    for cpu in CPUS {
        let table = InstructionTable::build(cpu.opcodes);
        assert!(
            table.collisions().is_empty(),
            "{} redefines opcodes: {:?}",
            cpu.id,
            table.collisions()
        );
    }
}

#[test]
fn test_two_byte_opcodes_start_with_leadin() {
    for cpu in CPUS {
        let table = InstructionTable::build(cpu.opcodes);
        for (opcode, descriptor) in table.iter() {
            if opcode > 0xFFFF {
                let prefix = opcode >> 8;
                let parent = table.get(prefix);
                assert!(
                    parent.map(|d| d.flags.extended).unwrap_or(false),
                    "{} ${:06X} has no extended parent",
                    cpu.id,
                    opcode
                );
            } else if opcode > 0xFF {
                assert!(
                    cpu.leadins.contains(&((opcode >> 8) as u8)),
                    "{} ${:04X} ({}) does not start with a leadin",
                    cpu.id,
                    opcode,
                    descriptor.mnemonic
                );
            } else {
                assert!(
                    !cpu.leadins.contains(&(opcode as u8)),
                    "{} leadin ${:02X} is also a one-byte opcode",
                    cpu.id,
                    opcode
                );
            }
        }
    }
}

#[test]
fn test_operand_formats_fit_lengths() {
    for cpu in CPUS {
        let table = InstructionTable::build(cpu.opcodes);
        let modes = AddressModeFormatter::new(cpu.modes);
        for (opcode, descriptor) in table.iter() {
            let format = modes
                .get(descriptor.mode)
                .unwrap_or_else(|| panic!("{} ${:X}: unknown mode", cpu.id, opcode));
            let available = if opcode > 0xFFFF {
                1
            } else if opcode > 0xFF {
                usize::from(descriptor.length) - 2
            } else {
                usize::from(descriptor.length) - 1
            };
            assert!(
                format.operand_bytes() <= available,
                "{} ${:X} ({} {}) needs {} operand bytes, has {}",
                cpu.id,
                opcode,
                descriptor.mnemonic,
                descriptor.mode,
                format.operand_bytes(),
                available
            );
            if descriptor.flags.pc_relative {
                assert!(
                    format.is_label_aware(),
                    "{} ${:X}: relative opcode with non-address operand",
                    cpu.id,
                    opcode
                );
            }
        }
    }
}

#[test]
fn test_every_opcode_decodes_to_declared_length() {
    let options = DisassemblyOptions {
        undocumented: true,
        show_invalid: true,
        ..DisassemblyOptions::default()
    };

    for cpu in CPUS {
        let disassembler = Disassembler::new(*cpu).with_options(options);
        let table = InstructionTable::build(cpu.opcodes);

        for (opcode, descriptor) in table.iter() {
            if descriptor.flags.extended {
                continue;
            }
            let bytes = minimal_encoding(opcode, descriptor.length);
            let mut out = Vec::new();
            let summary = disassembler.run(&bytes[..], &mut out).unwrap();
            let listing = String::from_utf8(out).unwrap();

            assert_eq!(summary.outcome, Outcome::End, "{} ${:X}", cpu.id, opcode);
            assert_eq!(summary.lines, 1, "{} ${:X}:\n{}", cpu.id, opcode, listing);
            assert_eq!(
                usize::from(summary.final_address),
                bytes.len(),
                "{} ${:X} ({})",
                cpu.id,
                opcode,
                descriptor.mnemonic
            );
            let line = listing.lines().nth(2).unwrap_or_default();
            assert!(
                line.contains(descriptor.mnemonic),
                "{} ${:X}: expected {} in {:?}",
                cpu.id,
                opcode,
                descriptor.mnemonic,
                line
            );
        }
    }
}

#[test]
fn test_undocumented_flags() {
    let nmos = InstructionTable::build(cpus::find("6502").unwrap().opcodes);
    let undocumented = nmos.iter().filter(|(_, d)| d.flags.undocumented).count();
    assert_eq!(undocumented, 105);

    let cmos = InstructionTable::build(cpus::find("65c02").unwrap().opcodes);
    assert!(cmos.iter().all(|(_, d)| !d.flags.undocumented));
}
