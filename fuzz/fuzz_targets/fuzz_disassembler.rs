//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences, CPUs, options and block
//! regions to the decode loop to find edge cases in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use retrodis::cpus::CPUS;
use retrodis::{BlockKind, BlockOverrideTable, Disassembler, DisassemblyOptions, Outcome};

/// Disassembly options for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzOptions {
    cpu: u8,
    start_address: u16,
    listing: bool,
    undocumented: bool,
    show_invalid: bool,
}

/// A block region; `kind` picks the kind code
#[derive(Debug, Arbitrary)]
struct FuzzRegion {
    start: u16,
    end: u16,
    kind: u8,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    options: FuzzOptions,
    regions: Vec<FuzzRegion>,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let cpu = CPUS[usize::from(input.options.cpu) % CPUS.len()];
    let options = DisassemblyOptions {
        start_address: input.options.start_address,
        listing: input.options.listing,
        undocumented: input.options.undocumented,
        show_invalid: input.options.show_invalid,
    };

    let mut blocks = BlockOverrideTable::new();
    for region in input.regions.iter().take(8) {
        let code = ['a', 'b', 'W', 'w', 's'][usize::from(region.kind) % 5];
        blocks.add(region.start, region.end, BlockKind::from_code(Some(code)));
    }

    let disassembler = Disassembler::new(cpu)
        .with_options(options)
        .with_blocks(blocks);

    let mut out = Vec::new();
    let summary = disassembler
        .run(&input.bytes[..], &mut out)
        .expect("registered tables never fail");

    // Cursor advances by exactly the bytes consumed
    let consumed = summary.final_address.wrapping_sub(input.options.start_address);
    match summary.outcome {
        Outcome::End => assert_eq!(usize::from(consumed), input.bytes.len() % 0x10000),
        Outcome::Truncated => assert!(summary.lines <= input.bytes.len()),
        Outcome::Interrupted => panic!("no interrupt flag installed"),
    }
});
