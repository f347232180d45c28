//! MOS 6502 (NMOS).
//!
//! The 151 documented opcodes plus the 105 undocumented ones, which are
//! marked so they decode only when undocumented opcodes are enabled.

use super::{address, byte, op, rel8, CpuDefinition};
use crate::addressing::{Endian::Little, OperandFormat, Piece};
use crate::opcodes::OpcodeEntry;

pub(super) const MODES: &[(&str, OperandFormat)] = &[
    ("implied", OperandFormat::Implied),
    ("accumulator", OperandFormat::Fixed("a")),
    ("immediate", byte("#", "")),
    ("zeropage", byte("", "")),
    ("zeropage,x", byte("", ",x")),
    ("zeropage,y", byte("", ",y")),
    ("relative", rel8("", "")),
    ("absolute", address(Little, "", "")),
    ("absolute,x", address(Little, "", ",x")),
    ("absolute,y", address(Little, "", ",y")),
    ("indirect", address(Little, "(", ")")),
    ("(indirect,x)", byte("(", ",x)")),
    ("(indirect),y", byte("(", "),y")),
    // 65C02 additions
    ("(zeropage)", byte("(", ")")),
    ("(absolute,x)", address(Little, "(", ",x)")),
    (
        "zeropage,relative",
        OperandFormat::Pieces(&[Piece::Byte(0), Piece::Text(","), Piece::Target]),
    ),
];

pub(super) const DOCUMENTED: &[OpcodeEntry] = &[
    op(0x00, 1, "brk", "implied"),
    op(0x01, 2, "ora", "(indirect,x)"),
    op(0x05, 2, "ora", "zeropage"),
    op(0x06, 2, "asl", "zeropage"),
    op(0x08, 1, "php", "implied"),
    op(0x09, 2, "ora", "immediate"),
    op(0x0A, 1, "asl", "accumulator"),
    op(0x0D, 3, "ora", "absolute"),
    op(0x0E, 3, "asl", "absolute"),
    op(0x10, 2, "bpl", "relative").pcr(),
    op(0x11, 2, "ora", "(indirect),y"),
    op(0x15, 2, "ora", "zeropage,x"),
    op(0x16, 2, "asl", "zeropage,x"),
    op(0x18, 1, "clc", "implied"),
    op(0x19, 3, "ora", "absolute,y"),
    op(0x1D, 3, "ora", "absolute,x"),
    op(0x1E, 3, "asl", "absolute,x"),
    op(0x20, 3, "jsr", "absolute"),
    op(0x21, 2, "and", "(indirect,x)"),
    op(0x24, 2, "bit", "zeropage"),
    op(0x25, 2, "and", "zeropage"),
    op(0x26, 2, "rol", "zeropage"),
    op(0x28, 1, "plp", "implied"),
    op(0x29, 2, "and", "immediate"),
    op(0x2A, 1, "rol", "accumulator"),
    op(0x2C, 3, "bit", "absolute"),
    op(0x2D, 3, "and", "absolute"),
    op(0x2E, 3, "rol", "absolute"),
    op(0x30, 2, "bmi", "relative").pcr(),
    op(0x31, 2, "and", "(indirect),y"),
    op(0x35, 2, "and", "zeropage,x"),
    op(0x36, 2, "rol", "zeropage,x"),
    op(0x38, 1, "sec", "implied"),
    op(0x39, 3, "and", "absolute,y"),
    op(0x3D, 3, "and", "absolute,x"),
    op(0x3E, 3, "rol", "absolute,x"),
    op(0x40, 1, "rti", "implied"),
    op(0x41, 2, "eor", "(indirect,x)"),
    op(0x45, 2, "eor", "zeropage"),
    op(0x46, 2, "lsr", "zeropage"),
    op(0x48, 1, "pha", "implied"),
    op(0x49, 2, "eor", "immediate"),
    op(0x4A, 1, "lsr", "accumulator"),
    op(0x4C, 3, "jmp", "absolute"),
    op(0x4D, 3, "eor", "absolute"),
    op(0x4E, 3, "lsr", "absolute"),
    op(0x50, 2, "bvc", "relative").pcr(),
    op(0x51, 2, "eor", "(indirect),y"),
    op(0x55, 2, "eor", "zeropage,x"),
    op(0x56, 2, "lsr", "zeropage,x"),
    op(0x58, 1, "cli", "implied"),
    op(0x59, 3, "eor", "absolute,y"),
    op(0x5D, 3, "eor", "absolute,x"),
    op(0x5E, 3, "lsr", "absolute,x"),
    op(0x60, 1, "rts", "implied"),
    op(0x61, 2, "adc", "(indirect,x)"),
    op(0x65, 2, "adc", "zeropage"),
    op(0x66, 2, "ror", "zeropage"),
    op(0x68, 1, "pla", "implied"),
    op(0x69, 2, "adc", "immediate"),
    op(0x6A, 1, "ror", "accumulator"),
    op(0x6C, 3, "jmp", "indirect"),
    op(0x6D, 3, "adc", "absolute"),
    op(0x6E, 3, "ror", "absolute"),
    op(0x70, 2, "bvs", "relative").pcr(),
    op(0x71, 2, "adc", "(indirect),y"),
    op(0x75, 2, "adc", "zeropage,x"),
    op(0x76, 2, "ror", "zeropage,x"),
    op(0x78, 1, "sei", "implied"),
    op(0x79, 3, "adc", "absolute,y"),
    op(0x7D, 3, "adc", "absolute,x"),
    op(0x7E, 3, "ror", "absolute,x"),
    op(0x81, 2, "sta", "(indirect,x)"),
    op(0x84, 2, "sty", "zeropage"),
    op(0x85, 2, "sta", "zeropage"),
    op(0x86, 2, "stx", "zeropage"),
    op(0x88, 1, "dey", "implied"),
    op(0x8A, 1, "txa", "implied"),
    op(0x8C, 3, "sty", "absolute"),
    op(0x8D, 3, "sta", "absolute"),
    op(0x8E, 3, "stx", "absolute"),
    op(0x90, 2, "bcc", "relative").pcr(),
    op(0x91, 2, "sta", "(indirect),y"),
    op(0x94, 2, "sty", "zeropage,x"),
    op(0x95, 2, "sta", "zeropage,x"),
    op(0x96, 2, "stx", "zeropage,y"),
    op(0x98, 1, "tya", "implied"),
    op(0x99, 3, "sta", "absolute,y"),
    op(0x9A, 1, "txs", "implied"),
    op(0x9D, 3, "sta", "absolute,x"),
    op(0xA0, 2, "ldy", "immediate"),
    op(0xA1, 2, "lda", "(indirect,x)"),
    op(0xA2, 2, "ldx", "immediate"),
    op(0xA4, 2, "ldy", "zeropage"),
    op(0xA5, 2, "lda", "zeropage"),
    op(0xA6, 2, "ldx", "zeropage"),
    op(0xA8, 1, "tay", "implied"),
    op(0xA9, 2, "lda", "immediate"),
    op(0xAA, 1, "tax", "implied"),
    op(0xAC, 3, "ldy", "absolute"),
    op(0xAD, 3, "lda", "absolute"),
    op(0xAE, 3, "ldx", "absolute"),
    op(0xB0, 2, "bcs", "relative").pcr(),
    op(0xB1, 2, "lda", "(indirect),y"),
    op(0xB4, 2, "ldy", "zeropage,x"),
    op(0xB5, 2, "lda", "zeropage,x"),
    op(0xB6, 2, "ldx", "zeropage,y"),
    op(0xB8, 1, "clv", "implied"),
    op(0xB9, 3, "lda", "absolute,y"),
    op(0xBA, 1, "tsx", "implied"),
    op(0xBC, 3, "ldy", "absolute,x"),
    op(0xBD, 3, "lda", "absolute,x"),
    op(0xBE, 3, "ldx", "absolute,y"),
    op(0xC0, 2, "cpy", "immediate"),
    op(0xC1, 2, "cmp", "(indirect,x)"),
    op(0xC4, 2, "cpy", "zeropage"),
    op(0xC5, 2, "cmp", "zeropage"),
    op(0xC6, 2, "dec", "zeropage"),
    op(0xC8, 1, "iny", "implied"),
    op(0xC9, 2, "cmp", "immediate"),
    op(0xCA, 1, "dex", "implied"),
    op(0xCC, 3, "cpy", "absolute"),
    op(0xCD, 3, "cmp", "absolute"),
    op(0xCE, 3, "dec", "absolute"),
    op(0xD0, 2, "bne", "relative").pcr(),
    op(0xD1, 2, "cmp", "(indirect),y"),
    op(0xD5, 2, "cmp", "zeropage,x"),
    op(0xD6, 2, "dec", "zeropage,x"),
    op(0xD8, 1, "cld", "implied"),
    op(0xD9, 3, "cmp", "absolute,y"),
    op(0xDD, 3, "cmp", "absolute,x"),
    op(0xDE, 3, "dec", "absolute,x"),
    op(0xE0, 2, "cpx", "immediate"),
    op(0xE1, 2, "sbc", "(indirect,x)"),
    op(0xE4, 2, "cpx", "zeropage"),
    op(0xE5, 2, "sbc", "zeropage"),
    op(0xE6, 2, "inc", "zeropage"),
    op(0xE8, 1, "inx", "implied"),
    op(0xE9, 2, "sbc", "immediate"),
    op(0xEA, 1, "nop", "implied"),
    op(0xEC, 3, "cpx", "absolute"),
    op(0xED, 3, "sbc", "absolute"),
    op(0xEE, 3, "inc", "absolute"),
    op(0xF0, 2, "beq", "relative").pcr(),
    op(0xF1, 2, "sbc", "(indirect),y"),
    op(0xF5, 2, "sbc", "zeropage,x"),
    op(0xF6, 2, "inc", "zeropage,x"),
    op(0xF8, 1, "sed", "implied"),
    op(0xF9, 3, "sbc", "absolute,y"),
    op(0xFD, 3, "sbc", "absolute,x"),
    op(0xFE, 3, "inc", "absolute,x"),
];

pub(super) const UNDOCUMENTED: &[OpcodeEntry] = &[
    op(0x02, 1, "jam", "implied").und(),
    op(0x03, 2, "slo", "(indirect,x)").und(),
    op(0x04, 2, "nop", "zeropage").und(),
    op(0x07, 2, "slo", "zeropage").und(),
    op(0x0B, 2, "anc", "immediate").und(),
    op(0x0C, 3, "nop", "absolute").und(),
    op(0x0F, 3, "slo", "absolute").und(),
    op(0x12, 1, "jam", "implied").und(),
    op(0x13, 2, "slo", "(indirect),y").und(),
    op(0x14, 2, "nop", "zeropage,x").und(),
    op(0x17, 2, "slo", "zeropage,x").und(),
    op(0x1A, 1, "nop", "implied").und(),
    op(0x1B, 3, "slo", "absolute,y").und(),
    op(0x1C, 3, "nop", "absolute,x").und(),
    op(0x1F, 3, "slo", "absolute,x").und(),
    op(0x22, 1, "jam", "implied").und(),
    op(0x23, 2, "rla", "(indirect,x)").und(),
    op(0x27, 2, "rla", "zeropage").und(),
    op(0x2B, 2, "anc", "immediate").und(),
    op(0x2F, 3, "rla", "absolute").und(),
    op(0x32, 1, "jam", "implied").und(),
    op(0x33, 2, "rla", "(indirect),y").und(),
    op(0x34, 2, "nop", "zeropage,x").und(),
    op(0x37, 2, "rla", "zeropage,x").und(),
    op(0x3A, 1, "nop", "implied").und(),
    op(0x3B, 3, "rla", "absolute,y").und(),
    op(0x3C, 3, "nop", "absolute,x").und(),
    op(0x3F, 3, "rla", "absolute,x").und(),
    op(0x42, 1, "jam", "implied").und(),
    op(0x43, 2, "sre", "(indirect,x)").und(),
    op(0x44, 2, "nop", "zeropage").und(),
    op(0x47, 2, "sre", "zeropage").und(),
    op(0x4B, 2, "alr", "immediate").und(),
    op(0x4F, 3, "sre", "absolute").und(),
    op(0x52, 1, "jam", "implied").und(),
    op(0x53, 2, "sre", "(indirect),y").und(),
    op(0x54, 2, "nop", "zeropage,x").und(),
    op(0x57, 2, "sre", "zeropage,x").und(),
    op(0x5A, 1, "nop", "implied").und(),
    op(0x5B, 3, "sre", "absolute,y").und(),
    op(0x5C, 3, "nop", "absolute,x").und(),
    op(0x5F, 3, "sre", "absolute,x").und(),
    op(0x62, 1, "jam", "implied").und(),
    op(0x63, 2, "rra", "(indirect,x)").und(),
    op(0x64, 2, "nop", "zeropage").und(),
    op(0x67, 2, "rra", "zeropage").und(),
    op(0x6B, 2, "arr", "immediate").und(),
    op(0x6F, 3, "rra", "absolute").und(),
    op(0x72, 1, "jam", "implied").und(),
    op(0x73, 2, "rra", "(indirect),y").und(),
    op(0x74, 2, "nop", "zeropage,x").und(),
    op(0x77, 2, "rra", "zeropage,x").und(),
    op(0x7A, 1, "nop", "implied").und(),
    op(0x7B, 3, "rra", "absolute,y").und(),
    op(0x7C, 3, "nop", "absolute,x").und(),
    op(0x7F, 3, "rra", "absolute,x").und(),
    op(0x80, 2, "nop", "immediate").und(),
    op(0x82, 2, "nop", "immediate").und(),
    op(0x83, 2, "sax", "(indirect,x)").und(),
    op(0x87, 2, "sax", "zeropage").und(),
    op(0x89, 2, "nop", "immediate").und(),
    op(0x8B, 2, "ane", "immediate").und(),
    op(0x8F, 3, "sax", "absolute").und(),
    op(0x92, 1, "jam", "implied").und(),
    op(0x93, 2, "sha", "(indirect),y").und(),
    op(0x97, 2, "sax", "zeropage,y").und(),
    op(0x9B, 3, "tas", "absolute,y").und(),
    op(0x9C, 3, "shy", "absolute,x").und(),
    op(0x9E, 3, "shx", "absolute,y").und(),
    op(0x9F, 3, "sha", "absolute,y").und(),
    op(0xA3, 2, "lax", "(indirect,x)").und(),
    op(0xA7, 2, "lax", "zeropage").und(),
    op(0xAB, 2, "lxa", "immediate").und(),
    op(0xAF, 3, "lax", "absolute").und(),
    op(0xB2, 1, "jam", "implied").und(),
    op(0xB3, 2, "lax", "(indirect),y").und(),
    op(0xB7, 2, "lax", "zeropage,y").und(),
    op(0xBB, 3, "las", "absolute,y").und(),
    op(0xBF, 3, "lax", "absolute,y").und(),
    op(0xC2, 2, "nop", "immediate").und(),
    op(0xC3, 2, "dcp", "(indirect,x)").und(),
    op(0xC7, 2, "dcp", "zeropage").und(),
    op(0xCB, 2, "sbx", "immediate").und(),
    op(0xCF, 3, "dcp", "absolute").und(),
    op(0xD2, 1, "jam", "implied").und(),
    op(0xD3, 2, "dcp", "(indirect),y").und(),
    op(0xD4, 2, "nop", "zeropage,x").und(),
    op(0xD7, 2, "dcp", "zeropage,x").und(),
    op(0xDA, 1, "nop", "implied").und(),
    op(0xDB, 3, "dcp", "absolute,y").und(),
    op(0xDC, 3, "nop", "absolute,x").und(),
    op(0xDF, 3, "dcp", "absolute,x").und(),
    op(0xE2, 2, "nop", "immediate").und(),
    op(0xE3, 2, "isc", "(indirect,x)").und(),
    op(0xE7, 2, "isc", "zeropage").und(),
    op(0xEB, 2, "sbc", "immediate").und(),
    op(0xEF, 3, "isc", "absolute").und(),
    op(0xF2, 1, "jam", "implied").und(),
    op(0xF3, 2, "isc", "(indirect),y").und(),
    op(0xF4, 2, "nop", "zeropage,x").und(),
    op(0xF7, 2, "isc", "zeropage,x").und(),
    op(0xFA, 1, "nop", "implied").und(),
    op(0xFB, 3, "isc", "absolute,y").und(),
    op(0xFC, 3, "nop", "absolute,x").und(),
    op(0xFF, 3, "isc", "absolute,x").und(),
];

pub(super) const CPU: CpuDefinition = CpuDefinition {
    id: "6502",
    description: "MOS Technology 6502 8-bit microprocessor",
    leadins: &[],
    max_length: 3,
    modes: MODES,
    opcodes: &[DOCUMENTED, UNDOCUMENTED],
};
