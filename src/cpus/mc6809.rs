//! Motorola 6809.
//!
//! Opcodes on pages 2 and 3 start with the leadin bytes `$10` and `$11`.
//! Indexed addressing is shown as the raw post-byte followed by `,x`; the
//! post-byte forms that add extra offset bytes are not decoded, and neither
//! are the register lists of the push/pull instructions.

use super::{address, byte, op, rel16, rel8, word, CpuDefinition};
use crate::addressing::{Endian::Big, OperandFormat};
use crate::opcodes::OpcodeEntry;

/// Register numbering of the EXG/TFR post-byte.
const REGISTERS: [&str; 16] = [
    "d", "x", "y", "u", "s", "pc", "?", "?", "a", "b", "cc", "dp", "?", "?", "?", "?",
];

const MODES: &[(&str, OperandFormat)] = &[
    ("inherent", OperandFormat::Implied),
    ("imm8", byte("#", "")),
    ("imm16", word(Big, "#", "")),
    ("direct", byte("", "")),
    ("indexed", byte("", ",x")),
    ("extended", address(Big, "", "")),
    ("rel8", rel8("", "")),
    ("rel16", rel16(Big, "", "")),
    ("r1,r2", OperandFormat::RegisterPair(&REGISTERS)),
    ("registers", byte("#", "")),
];

const PAGE1: &[OpcodeEntry] = &[
    op(0x00, 2, "neg", "direct"),
    op(0x03, 2, "com", "direct"),
    op(0x04, 2, "lsr", "direct"),
    op(0x06, 2, "ror", "direct"),
    op(0x07, 2, "asr", "direct"),
    op(0x08, 2, "asl", "direct"),
    op(0x09, 2, "rol", "direct"),
    op(0x0A, 2, "dec", "direct"),
    op(0x0C, 2, "inc", "direct"),
    op(0x0D, 2, "tst", "direct"),
    op(0x0E, 2, "jmp", "direct"),
    op(0x0F, 2, "clr", "direct"),
    op(0x12, 1, "nop", "inherent"),
    op(0x13, 1, "sync", "inherent"),
    op(0x16, 3, "lbra", "rel16").pcr(),
    op(0x17, 3, "lbsr", "rel16").pcr(),
    op(0x19, 1, "daa", "inherent"),
    op(0x1A, 2, "orcc", "imm8"),
    op(0x1C, 2, "andcc", "imm8"),
    op(0x1D, 1, "sex", "inherent"),
    op(0x1E, 2, "exg", "r1,r2"),
    op(0x1F, 2, "tfr", "r1,r2"),
    op(0x20, 2, "bra", "rel8").pcr(),
    op(0x21, 2, "brn", "rel8").pcr(),
    op(0x22, 2, "bhi", "rel8").pcr(),
    op(0x23, 2, "bls", "rel8").pcr(),
    op(0x24, 2, "bcc", "rel8").pcr(),
    op(0x25, 2, "bcs", "rel8").pcr(),
    op(0x26, 2, "bne", "rel8").pcr(),
    op(0x27, 2, "beq", "rel8").pcr(),
    op(0x28, 2, "bvc", "rel8").pcr(),
    op(0x29, 2, "bvs", "rel8").pcr(),
    op(0x2A, 2, "bpl", "rel8").pcr(),
    op(0x2B, 2, "bmi", "rel8").pcr(),
    op(0x2C, 2, "bge", "rel8").pcr(),
    op(0x2D, 2, "blt", "rel8").pcr(),
    op(0x2E, 2, "bgt", "rel8").pcr(),
    op(0x2F, 2, "ble", "rel8").pcr(),
    op(0x30, 2, "leax", "indexed"),
    op(0x31, 2, "leay", "indexed"),
    op(0x32, 2, "leas", "indexed"),
    op(0x33, 2, "leau", "indexed"),
    op(0x34, 2, "pshs", "registers"),
    op(0x35, 2, "puls", "registers"),
    op(0x36, 2, "pshu", "registers"),
    op(0x37, 2, "pulu", "registers"),
    op(0x39, 1, "rts", "inherent"),
    op(0x3A, 1, "abx", "inherent"),
    op(0x3B, 1, "rti", "inherent"),
    op(0x3C, 2, "cwai", "imm8"),
    op(0x3D, 1, "mul", "inherent"),
    op(0x3F, 1, "swi", "inherent"),
    op(0x40, 1, "nega", "inherent"),
    op(0x43, 1, "coma", "inherent"),
    op(0x44, 1, "lsra", "inherent"),
    op(0x46, 1, "rora", "inherent"),
    op(0x47, 1, "asra", "inherent"),
    op(0x48, 1, "asla", "inherent"),
    op(0x49, 1, "rola", "inherent"),
    op(0x4A, 1, "deca", "inherent"),
    op(0x4C, 1, "inca", "inherent"),
    op(0x4D, 1, "tsta", "inherent"),
    op(0x4F, 1, "clra", "inherent"),
    op(0x50, 1, "negb", "inherent"),
    op(0x53, 1, "comb", "inherent"),
    op(0x54, 1, "lsrb", "inherent"),
    op(0x56, 1, "rorb", "inherent"),
    op(0x57, 1, "asrb", "inherent"),
    op(0x58, 1, "aslb", "inherent"),
    op(0x59, 1, "rolb", "inherent"),
    op(0x5A, 1, "decb", "inherent"),
    op(0x5C, 1, "incb", "inherent"),
    op(0x5D, 1, "tstb", "inherent"),
    op(0x5F, 1, "clrb", "inherent"),
    op(0x60, 2, "neg", "indexed"),
    op(0x63, 2, "com", "indexed"),
    op(0x64, 2, "lsr", "indexed"),
    op(0x66, 2, "ror", "indexed"),
    op(0x67, 2, "asr", "indexed"),
    op(0x68, 2, "asl", "indexed"),
    op(0x69, 2, "rol", "indexed"),
    op(0x6A, 2, "dec", "indexed"),
    op(0x6C, 2, "inc", "indexed"),
    op(0x6D, 2, "tst", "indexed"),
    op(0x6E, 2, "jmp", "indexed"),
    op(0x6F, 2, "clr", "indexed"),
    op(0x70, 3, "neg", "extended"),
    op(0x73, 3, "com", "extended"),
    op(0x74, 3, "lsr", "extended"),
    op(0x76, 3, "ror", "extended"),
    op(0x77, 3, "asr", "extended"),
    op(0x78, 3, "asl", "extended"),
    op(0x79, 3, "rol", "extended"),
    op(0x7A, 3, "dec", "extended"),
    op(0x7C, 3, "inc", "extended"),
    op(0x7D, 3, "tst", "extended"),
    op(0x7E, 3, "jmp", "extended"),
    op(0x7F, 3, "clr", "extended"),
    op(0x80, 2, "suba", "imm8"),
    op(0x81, 2, "cmpa", "imm8"),
    op(0x82, 2, "sbca", "imm8"),
    op(0x83, 3, "subd", "imm16"),
    op(0x84, 2, "anda", "imm8"),
    op(0x85, 2, "bita", "imm8"),
    op(0x86, 2, "lda", "imm8"),
    op(0x88, 2, "eora", "imm8"),
    op(0x89, 2, "adca", "imm8"),
    op(0x8A, 2, "ora", "imm8"),
    op(0x8B, 2, "adda", "imm8"),
    op(0x8C, 3, "cmpx", "imm16"),
    op(0x8D, 2, "bsr", "rel8").pcr(),
    op(0x8E, 3, "ldx", "imm16"),
    op(0x90, 2, "suba", "direct"),
    op(0x91, 2, "cmpa", "direct"),
    op(0x92, 2, "sbca", "direct"),
    op(0x93, 2, "subd", "direct"),
    op(0x94, 2, "anda", "direct"),
    op(0x95, 2, "bita", "direct"),
    op(0x96, 2, "lda", "direct"),
    op(0x97, 2, "sta", "direct"),
    op(0x98, 2, "eora", "direct"),
    op(0x99, 2, "adca", "direct"),
    op(0x9A, 2, "ora", "direct"),
    op(0x9B, 2, "adda", "direct"),
    op(0x9C, 2, "cmpx", "direct"),
    op(0x9D, 2, "jsr", "direct"),
    op(0x9E, 2, "ldx", "direct"),
    op(0x9F, 2, "stx", "direct"),
    op(0xA0, 2, "suba", "indexed"),
    op(0xA1, 2, "cmpa", "indexed"),
    op(0xA2, 2, "sbca", "indexed"),
    op(0xA3, 2, "subd", "indexed"),
    op(0xA4, 2, "anda", "indexed"),
    op(0xA5, 2, "bita", "indexed"),
    op(0xA6, 2, "lda", "indexed"),
    op(0xA7, 2, "sta", "indexed"),
    op(0xA8, 2, "eora", "indexed"),
    op(0xA9, 2, "adca", "indexed"),
    op(0xAA, 2, "ora", "indexed"),
    op(0xAB, 2, "adda", "indexed"),
    op(0xAC, 2, "cmpx", "indexed"),
    op(0xAD, 2, "jsr", "indexed"),
    op(0xAE, 2, "ldx", "indexed"),
    op(0xAF, 2, "stx", "indexed"),
    op(0xB0, 3, "suba", "extended"),
    op(0xB1, 3, "cmpa", "extended"),
    op(0xB2, 3, "sbca", "extended"),
    op(0xB3, 3, "subd", "extended"),
    op(0xB4, 3, "anda", "extended"),
    op(0xB5, 3, "bita", "extended"),
    op(0xB6, 3, "lda", "extended"),
    op(0xB7, 3, "sta", "extended"),
    op(0xB8, 3, "eora", "extended"),
    op(0xB9, 3, "adca", "extended"),
    op(0xBA, 3, "ora", "extended"),
    op(0xBB, 3, "adda", "extended"),
    op(0xBC, 3, "cmpx", "extended"),
    op(0xBD, 3, "jsr", "extended"),
    op(0xBE, 3, "ldx", "extended"),
    op(0xBF, 3, "stx", "extended"),
    op(0xC0, 2, "subb", "imm8"),
    op(0xC1, 2, "cmpb", "imm8"),
    op(0xC2, 2, "sbcb", "imm8"),
    op(0xC3, 3, "addd", "imm16"),
    op(0xC4, 2, "andb", "imm8"),
    op(0xC5, 2, "bitb", "imm8"),
    op(0xC6, 2, "ldb", "imm8"),
    op(0xC8, 2, "eorb", "imm8"),
    op(0xC9, 2, "adcb", "imm8"),
    op(0xCA, 2, "orb", "imm8"),
    op(0xCB, 2, "addb", "imm8"),
    op(0xCC, 3, "ldd", "imm16"),
    op(0xCE, 3, "ldu", "imm16"),
    op(0xD0, 2, "subb", "direct"),
    op(0xD1, 2, "cmpb", "direct"),
    op(0xD2, 2, "sbcb", "direct"),
    op(0xD3, 2, "addd", "direct"),
    op(0xD4, 2, "andb", "direct"),
    op(0xD5, 2, "bitb", "direct"),
    op(0xD6, 2, "ldb", "direct"),
    op(0xD7, 2, "stb", "direct"),
    op(0xD8, 2, "eorb", "direct"),
    op(0xD9, 2, "adcb", "direct"),
    op(0xDA, 2, "orb", "direct"),
    op(0xDB, 2, "addb", "direct"),
    op(0xDC, 2, "ldd", "direct"),
    op(0xDD, 2, "std", "direct"),
    op(0xDE, 2, "ldu", "direct"),
    op(0xDF, 2, "stu", "direct"),
    op(0xE0, 2, "subb", "indexed"),
    op(0xE1, 2, "cmpb", "indexed"),
    op(0xE2, 2, "sbcb", "indexed"),
    op(0xE3, 2, "addd", "indexed"),
    op(0xE4, 2, "andb", "indexed"),
    op(0xE5, 2, "bitb", "indexed"),
    op(0xE6, 2, "ldb", "indexed"),
    op(0xE7, 2, "stb", "indexed"),
    op(0xE8, 2, "eorb", "indexed"),
    op(0xE9, 2, "adcb", "indexed"),
    op(0xEA, 2, "orb", "indexed"),
    op(0xEB, 2, "addb", "indexed"),
    op(0xEC, 2, "ldd", "indexed"),
    op(0xED, 2, "std", "indexed"),
    op(0xEE, 2, "ldu", "indexed"),
    op(0xEF, 2, "stu", "indexed"),
    op(0xF0, 3, "subb", "extended"),
    op(0xF1, 3, "cmpb", "extended"),
    op(0xF2, 3, "sbcb", "extended"),
    op(0xF3, 3, "addd", "extended"),
    op(0xF4, 3, "andb", "extended"),
    op(0xF5, 3, "bitb", "extended"),
    op(0xF6, 3, "ldb", "extended"),
    op(0xF7, 3, "stb", "extended"),
    op(0xF8, 3, "eorb", "extended"),
    op(0xF9, 3, "adcb", "extended"),
    op(0xFA, 3, "orb", "extended"),
    op(0xFB, 3, "addb", "extended"),
    op(0xFC, 3, "ldd", "extended"),
    op(0xFD, 3, "std", "extended"),
    op(0xFE, 3, "ldu", "extended"),
    op(0xFF, 3, "stu", "extended"),
];

const PAGE2_3: &[OpcodeEntry] = &[
    op(0x1021, 4, "lbrn", "rel16").pcr(),
    op(0x1022, 4, "lbhi", "rel16").pcr(),
    op(0x1023, 4, "lbls", "rel16").pcr(),
    op(0x1024, 4, "lbcc", "rel16").pcr(),
    op(0x1025, 4, "lbcs", "rel16").pcr(),
    op(0x1026, 4, "lbne", "rel16").pcr(),
    op(0x1027, 4, "lbeq", "rel16").pcr(),
    op(0x1028, 4, "lbvc", "rel16").pcr(),
    op(0x1029, 4, "lbvs", "rel16").pcr(),
    op(0x102A, 4, "lbpl", "rel16").pcr(),
    op(0x102B, 4, "lbmi", "rel16").pcr(),
    op(0x102C, 4, "lbge", "rel16").pcr(),
    op(0x102D, 4, "lblt", "rel16").pcr(),
    op(0x102E, 4, "lbgt", "rel16").pcr(),
    op(0x102F, 4, "lble", "rel16").pcr(),
    op(0x103F, 2, "swi2", "inherent"),
    op(0x1083, 4, "cmpd", "imm16"),
    op(0x108C, 4, "cmpy", "imm16"),
    op(0x108E, 4, "ldy", "imm16"),
    op(0x1093, 3, "cmpd", "direct"),
    op(0x109C, 3, "cmpy", "direct"),
    op(0x109E, 3, "ldy", "direct"),
    op(0x109F, 3, "sty", "direct"),
    op(0x10A3, 3, "cmpd", "indexed"),
    op(0x10AC, 3, "cmpy", "indexed"),
    op(0x10AE, 3, "ldy", "indexed"),
    op(0x10AF, 3, "sty", "indexed"),
    op(0x10B3, 4, "cmpd", "extended"),
    op(0x10BC, 4, "cmpy", "extended"),
    op(0x10BE, 4, "ldy", "extended"),
    op(0x10BF, 4, "sty", "extended"),
    op(0x10CE, 4, "lds", "imm16"),
    op(0x10DE, 3, "lds", "direct"),
    op(0x10DF, 3, "sts", "direct"),
    op(0x10EE, 3, "lds", "indexed"),
    op(0x10EF, 3, "sts", "indexed"),
    op(0x10FE, 4, "lds", "extended"),
    op(0x10FF, 4, "sts", "extended"),
    op(0x113F, 2, "swi3", "inherent"),
    op(0x1183, 4, "cmpu", "imm16"),
    op(0x118C, 4, "cmps", "imm16"),
    op(0x1193, 3, "cmpu", "direct"),
    op(0x119C, 3, "cmps", "direct"),
    op(0x11A3, 3, "cmpu", "indexed"),
    op(0x11AC, 3, "cmps", "indexed"),
    op(0x11B3, 4, "cmpu", "extended"),
    op(0x11BC, 4, "cmps", "extended"),
];

pub(super) const CPU: CpuDefinition = CpuDefinition {
    id: "6809",
    description: "Motorola 6809 8-bit microprocessor",
    leadins: &[0x10, 0x11],
    max_length: 4,
    modes: MODES,
    opcodes: &[PAGE1, PAGE2_3],
};
