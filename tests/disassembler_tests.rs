//! Integration tests for the decode loop

use retrodis::{
    disassemble, BlockKind, BlockOverrideTable, Disassembler, DisassemblyOptions,
    LabelResolver, Outcome, Summary,
};

fn at(start_address: u16) -> DisassemblyOptions {
    DisassemblyOptions {
        start_address,
        ..DisassemblyOptions::default()
    }
}

fn lines(cpu: &str, bytes: &[u8], options: DisassemblyOptions) -> Vec<String> {
    disassemble(cpu, bytes, options)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn run(disassembler: &Disassembler, bytes: &[u8]) -> (Summary, Vec<String>) {
    let mut out = Vec::new();
    let summary = disassembler.run(bytes, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    (summary, text.lines().map(str::to_string).collect())
}

#[test]
fn test_single_instruction_disassembly() {
    assert_eq!(
        lines("6502", &[0xA9, 0x42], at(0x0000)),
        vec![
            "0000              .org     $0000",
            "",
            "0000  A9 42       lda      #$42",
            "",
            "0002              end",
        ]
    );
}

#[test]
fn test_multi_instruction_disassembly() {
    let bytes = &[
        0xA9, 0x42, // LDA #$42
        0x8D, 0x00, 0x80, // STA $8000
        0xEA, // NOP
    ];
    assert_eq!(
        lines("6502", bytes, at(0x1000)),
        vec![
            "1000              .org     $1000",
            "",
            "1000  A9 42       lda      #$42",
            "1002  8D 00 80    sta      $8000",
            "1005  EA          nop",
            "",
            "1006              end",
        ]
    );
}

#[test]
fn test_operand_only_mode() {
    let options = DisassemblyOptions {
        listing: false,
        ..at(0x1000)
    };
    assert_eq!(
        lines("6502", &[0xA9, 0x42, 0xEA], options),
        vec!["   .org     $1000", "", "   lda      #$42", "   nop", "", "   end"]
    );
}

#[test]
fn test_relative_branch_targets() {
    let forward = lines("6502", &[0xD0, 0x02], at(0x1000));
    assert_eq!(forward[2], "1000  D0 02       bne      $1004");

    let backward = lines("6502", &[0xD0, 0xFE], at(0x1000));
    assert_eq!(backward[2], "1000  D0 FE       bne      $1000");
}

#[test]
fn test_label_substitution() {
    let mut labels = LabelResolver::new();
    labels.add("START", 0x2000);
    let disassembler = Disassembler::for_cpu("6502")
        .unwrap()
        .with_options(at(0x1000))
        .with_labels(labels);

    let (_, with_labels) = run(&disassembler, &[0x4C, 0x00, 0x20]);
    assert_eq!(with_labels[2], "1000  4C 00 20    jmp      START");

    let without = lines("6502", &[0x4C, 0x00, 0x20], at(0x1000));
    assert_eq!(without[2], "1000  4C 00 20    jmp      $2000");
}

#[test]
fn test_labels_ignore_data_operands() {
    let mut labels = LabelResolver::new();
    labels.add("ZP", 0x0042);
    labels.add("TABLE", 0x1234);
    let disassembler = Disassembler::for_cpu("6809")
        .unwrap()
        .with_labels(labels);

    // lda #$42 ; ldx #$1234
    let (_, listing) = run(&disassembler, &[0x86, 0x42, 0x8E, 0x12, 0x34]);
    assert_eq!(listing[2], "0000  86 42          lda      #$42");
    assert_eq!(listing[3], "0002  8E 12 34       ldx      #$1234");
}

#[test]
fn test_label_lines_use_first_definition() {
    let labels = LabelResolver::parse("LOOP,1000\nAGAIN,1000\nNEXT,1002\n").unwrap();
    let disassembler = Disassembler::for_cpu("6502")
        .unwrap()
        .with_options(at(0x1000))
        .with_labels(labels);

    // bne LOOP ; nop
    let (_, listing) = run(&disassembler, &[0xD0, 0xFE, 0xEA]);
    assert_eq!(
        listing,
        vec![
            "1000              .org     $1000",
            "",
            "LOOP:",
            "1000  D0 FE       bne      LOOP",
            "NEXT:",
            "1002  EA          nop",
            "",
            "1003              end",
        ]
    );
}

#[test]
fn test_string_block_resumes_after_region() {
    let mut blocks = BlockOverrideTable::new();
    blocks.add(0x3000, 0x3003, BlockKind::String);
    let disassembler = Disassembler::for_cpu("6502")
        .unwrap()
        .with_options(at(0x3000))
        .with_blocks(blocks);

    let (summary, listing) = run(&disassembler, &[0x48, 0x49, 0x00, 0x21, 0xEA]);
    assert_eq!(
        &listing[2..],
        &[
            "3000  48 49 00    .string  'HI\\x00!'",
            "3004  EA          nop",
            "",
            "3005              end",
        ]
    );
    assert_eq!(summary.outcome, Outcome::End);
    assert_eq!(summary.final_address, 0x3005);
}

#[test]
fn test_string_block_past_end_of_input() {
    let mut blocks = BlockOverrideTable::new();
    blocks.add(0x3000, 0x3004, BlockKind::String);
    let disassembler = Disassembler::for_cpu("6502")
        .unwrap()
        .with_options(at(0x3000))
        .with_blocks(blocks);

    let (summary, listing) = run(&disassembler, &[0x48, 0x49, 0x00, 0x21]);
    assert_eq!(listing.len(), 3);
    assert_eq!(listing[2], "3000  48 49 00    .string  'HI\\x00!'");
    assert_eq!(summary.outcome, Outcome::Truncated);
    assert_eq!(summary.lines, 1);
}

#[test]
fn test_data_blocks() {
    let blocks = BlockOverrideTable::parse("4000,4001,W\n4002,4003,w\n4004,4004,a\n4005,4005\n")
        .unwrap();
    let mut labels = LabelResolver::new();
    labels.add("TEXT", 0x4004);
    let disassembler = Disassembler::for_cpu("6502")
        .unwrap()
        .with_options(at(0x4000))
        .with_blocks(blocks)
        .with_labels(labels);

    let (summary, listing) = run(
        &disassembler,
        &[0x12, 0x34, 0x12, 0x34, 0x41, 0x07, 0xEA],
    );
    assert_eq!(
        &listing[2..],
        &[
            "4000  12 34       .dw      $1234",
            "4002  12 34       .word    $3412",
            "TEXT:",
            "4004  41          .ascii   A",
            "4005  07          .byte    $07",
            "4006  EA          nop",
            "",
            "4007              end",
        ]
    );
    assert_eq!(summary.lines, 5);
}

#[test]
fn test_block_word_truncated() {
    let mut blocks = BlockOverrideTable::new();
    blocks.add(0x0000, 0x00FF, BlockKind::WordLittleEndian);
    let disassembler = Disassembler::for_cpu("6502").unwrap().with_blocks(blocks);

    let (summary, listing) = run(&disassembler, &[0x00, 0x10, 0x20]);
    assert_eq!(listing.len(), 3);
    assert_eq!(listing[2], "0000  00 10       .word    $1000");
    assert_eq!(summary.outcome, Outcome::Truncated);
    assert_eq!(summary.final_address, 0x0002);
}

#[test]
fn test_leadin_then_end_of_data() {
    let disassembler = Disassembler::for_cpu("6809").unwrap();
    let (summary, listing) = run(&disassembler, &[0x10]);
    assert_eq!(listing, vec!["0000                 .org     $0000", ""]);
    assert_eq!(summary.outcome, Outcome::Truncated);
    assert_eq!(summary.lines, 0);
}

#[test]
fn test_leadin_then_unmapped_byte() {
    let listing = lines("6809", &[0x10, 0x01], at(0x1000));
    assert_eq!(
        &listing[2..],
        &["1000  10 01          .byte    $10,$01", "", "1002                 end"]
    );
}

#[test]
fn test_invalid_opcodes() {
    // $42 is printable, $02 is not
    let data = lines("6502", &[0x42, 0x02], at(0));
    assert_eq!(data[2], "0000  42          .byte    'B'");
    assert_eq!(data[3], "0001  02          .byte    $02");

    let shown = DisassemblyOptions {
        show_invalid: true,
        ..at(0)
    };
    assert_eq!(lines("6502", &[0x02], shown)[2], "0000  02          ???");
}

#[test]
fn test_undocumented_opcodes() {
    let hidden = lines("6502", &[0xA7, 0xEA], at(0));
    assert_eq!(hidden[2], "0000  A7          .byte    $A7");
    assert_eq!(hidden[3], "0001  EA          nop");

    let enabled = DisassemblyOptions {
        undocumented: true,
        ..at(0)
    };
    let shown = lines("6502", &[0xA7, 0xEA], enabled);
    assert_eq!(shown[2], "0000  A7 EA       lax      $EA");
}

#[test]
fn test_cursor_wraps_at_64k() {
    let disassembler = Disassembler::for_cpu("6502")
        .unwrap()
        .with_options(at(0xFFFF));
    let (summary, listing) = run(&disassembler, &[0xA9, 0x42]);
    assert_eq!(listing[2], "FFFF  A9 42       lda      #$42");
    assert_eq!(listing[4], "0001              end");
    assert_eq!(summary.final_address, 0x0001);
}

#[test]
fn test_65c02_bit_branch() {
    let listing = lines("65c02", &[0x0F, 0x12, 0x03], at(0x0200));
    assert_eq!(listing[2], "0200  0F 12 03    bbr0     $12,$0206");

    // Not a 65C02 instruction on the NMOS part
    let nmos = lines("6502", &[0x0F, 0x12, 0x03], at(0x0200));
    assert_eq!(nmos[2], "0200  0F          .byte    $0F");
}

#[test]
fn test_6809_program() {
    let mut labels = LabelResolver::new();
    labels.add("START", 0x2000);
    let disassembler = Disassembler::for_cpu("6809")
        .unwrap()
        .with_options(at(0x2000))
        .with_labels(labels);

    let bytes = &[
        0x10, 0x26, 0xFF, 0xFC, // LBNE START
        0x1F, 0x89, // TFR A,B
        0x8E, 0x12, 0x34, // LDX #$1234
        0xBD, 0x20, 0x00, // JSR START
    ];
    let (summary, listing) = run(&disassembler, bytes);
    assert_eq!(
        &listing[2..],
        &[
            "START:",
            "2000  10 26 FF FC    lbne     START",
            "2004  1F 89          tfr      a,b",
            "2006  8E 12 34       ldx      #$1234",
            "2009  BD 20 00       jsr      START",
            "",
            "200C                 end",
        ]
    );
    assert_eq!(summary.lines, 4);
}

#[test]
fn test_z80_program() {
    let bytes = &[
        0x18, 0xFE, // JR $0100
        0x3E, 0x42, // LD A,$42
        0xED, 0xB0, // LDIR
        0xDD, 0x36, 0x05, 0x42, // LD (IX+5),$42
        0xDD, 0xCB, 0x05, 0x06, // RLC (IX+5)
    ];
    let listing = lines("z80", bytes, at(0x0100));
    assert_eq!(
        &listing[2..],
        &[
            "0100  18 FE          jr       $0100",
            "0102  3E 42          ld       a,$42",
            "0104  ED B0          ldir",
            "0106  DD 36 05 42    ld       (ix+$05),$42",
            "010A  DD CB 05 06    rlc      (ix+$05)",
            "",
            "010E                 end",
        ]
    );
}

#[test]
fn test_z80_unknown_indexed_bit_operation() {
    let listing = lines("z80", &[0xDD, 0xCB, 0x05, 0x07], at(0));
    assert_eq!(listing[2], "0000  DD CB 05 07    .byte    $DD,$CB,$05,$07");
}

#[test]
fn test_unknown_cpu_lists_supported() {
    let err = disassemble("8080", &[0x00], DisassemblyOptions::default()).unwrap_err();
    assert!(err
        .to_string()
        .contains("The following CPUs are supported: 6502 65c02 6809 z80"));
}
