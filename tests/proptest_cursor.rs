//! Property-based tests for cursor arithmetic.
//!
//! These tests verify that the cursor always advances by exactly the bytes
//! each unit consumed, wrapping at 64K, whatever the input.

use proptest::prelude::*;
use retrodis::disassembler::decoder::relative_target;
use retrodis::{BlockKind, BlockOverrideTable, Disassembler, DisassemblyOptions, Outcome};

const CPU_IDS: [&str; 4] = ["6502", "65c02", "6809", "z80"];

fn options(start_address: u16, undocumented: bool, show_invalid: bool) -> DisassemblyOptions {
    DisassemblyOptions {
        start_address,
        listing: true,
        undocumented,
        show_invalid,
    }
}

proptest! {
    /// Property: a run of one-byte instructions advances one address each
    #[test]
    fn prop_nop_run_advances_by_count(start in any::<u16>(), count in 0usize..300) {
        let disassembler = Disassembler::for_cpu("6502")
            .unwrap()
            .with_options(options(start, false, false));
        let bytes = vec![0xEA; count];
        let mut out = Vec::new();
        let summary = disassembler.run(&bytes[..], &mut out).unwrap();

        prop_assert_eq!(summary.outcome, Outcome::End);
        prop_assert_eq!(summary.lines, count);
        prop_assert_eq!(summary.final_address, start.wrapping_add(count as u16));
    }

    /// Property: a clean end leaves the cursor at start + input length
    #[test]
    fn prop_final_cursor_matches_consumed_bytes(
        cpu in 0usize..4,
        start in any::<u16>(),
        undocumented in any::<bool>(),
        show_invalid in any::<bool>(),
        bytes in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let disassembler = Disassembler::for_cpu(CPU_IDS[cpu])
            .unwrap()
            .with_options(options(start, undocumented, show_invalid));
        let mut out = Vec::new();
        let summary = disassembler.run(&bytes[..], &mut out).unwrap();
        let consumed = usize::from(summary.final_address.wrapping_sub(start));

        match summary.outcome {
            Outcome::End => prop_assert_eq!(consumed, bytes.len()),
            Outcome::Truncated => prop_assert!(consumed < bytes.len()),
            Outcome::Interrupted => prop_assert!(false, "no interrupt was raised"),
        }
        prop_assert!(summary.lines <= bytes.len());
    }

    /// Property: one-byte data blocks emit one line per input byte
    #[test]
    fn prop_byte_block_line_per_byte(
        start in any::<u16>(),
        bytes in prop::collection::vec(any::<u8>(), 1..128),
    ) {
        let mut blocks = BlockOverrideTable::new();
        let end = start.saturating_add(bytes.len() as u16 - 1);
        blocks.add(start, end, BlockKind::Byte);
        let disassembler = Disassembler::for_cpu("z80")
            .unwrap()
            .with_options(options(start, false, false))
            .with_blocks(blocks);
        let mut out = Vec::new();
        let summary = disassembler.run(&bytes[..], &mut out).unwrap();
        let covered = usize::from(end - start) + 1;

        prop_assert!(summary.lines >= covered);
        let listing = String::from_utf8(out).unwrap();
        prop_assert!(listing.matches(".byte    $").count() >= covered);
    }

    /// Property: 8-bit displacements are signed and count from the next instruction
    #[test]
    fn prop_relative_target_is_signed(address in any::<u16>(), displacement in any::<u8>()) {
        let expected = address
            .wrapping_add(2)
            .wrapping_add(displacement as i8 as i16 as u16);
        prop_assert_eq!(relative_target(address, displacement, 2), expected);
    }
}
