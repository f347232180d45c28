//! WDC 65C02.
//!
//! The documented NMOS set plus the CMOS additions, including the Rockwell
//! bit instructions. The NMOS undocumented opcodes do not exist here.

use super::{mos6502, op, CpuDefinition};
use crate::opcodes::OpcodeEntry;

const CMOS: &[OpcodeEntry] = &[
    op(0x04, 2, "tsb", "zeropage"),
    op(0x0C, 3, "tsb", "absolute"),
    op(0x12, 2, "ora", "(zeropage)"),
    op(0x14, 2, "trb", "zeropage"),
    op(0x1A, 1, "inc", "accumulator"),
    op(0x1C, 3, "trb", "absolute"),
    op(0x32, 2, "and", "(zeropage)"),
    op(0x34, 2, "bit", "zeropage,x"),
    op(0x3A, 1, "dec", "accumulator"),
    op(0x3C, 3, "bit", "absolute,x"),
    op(0x52, 2, "eor", "(zeropage)"),
    op(0x5A, 1, "phy", "implied"),
    op(0x64, 2, "stz", "zeropage"),
    op(0x72, 2, "adc", "(zeropage)"),
    op(0x74, 2, "stz", "zeropage,x"),
    op(0x7A, 1, "ply", "implied"),
    op(0x7C, 3, "jmp", "(absolute,x)"),
    op(0x89, 2, "bit", "immediate"),
    op(0x92, 2, "sta", "(zeropage)"),
    op(0x9C, 3, "stz", "absolute"),
    op(0x9E, 3, "stz", "absolute,x"),
    op(0xB2, 2, "lda", "(zeropage)"),
    op(0xCB, 1, "wai", "implied"),
    op(0xD2, 2, "cmp", "(zeropage)"),
    op(0xDA, 1, "phx", "implied"),
    op(0xDB, 1, "stp", "implied"),
    op(0xF2, 2, "sbc", "(zeropage)"),
    op(0xFA, 1, "plx", "implied"),
    op(0x80, 2, "bra", "relative").pcr(),
    op(0x07, 2, "rmb0", "zeropage"),
    op(0x17, 2, "rmb1", "zeropage"),
    op(0x27, 2, "rmb2", "zeropage"),
    op(0x37, 2, "rmb3", "zeropage"),
    op(0x47, 2, "rmb4", "zeropage"),
    op(0x57, 2, "rmb5", "zeropage"),
    op(0x67, 2, "rmb6", "zeropage"),
    op(0x77, 2, "rmb7", "zeropage"),
    op(0x87, 2, "smb0", "zeropage"),
    op(0x97, 2, "smb1", "zeropage"),
    op(0xA7, 2, "smb2", "zeropage"),
    op(0xB7, 2, "smb3", "zeropage"),
    op(0xC7, 2, "smb4", "zeropage"),
    op(0xD7, 2, "smb5", "zeropage"),
    op(0xE7, 2, "smb6", "zeropage"),
    op(0xF7, 2, "smb7", "zeropage"),
    op(0x0F, 3, "bbr0", "zeropage,relative").pcr(),
    op(0x1F, 3, "bbr1", "zeropage,relative").pcr(),
    op(0x2F, 3, "bbr2", "zeropage,relative").pcr(),
    op(0x3F, 3, "bbr3", "zeropage,relative").pcr(),
    op(0x4F, 3, "bbr4", "zeropage,relative").pcr(),
    op(0x5F, 3, "bbr5", "zeropage,relative").pcr(),
    op(0x6F, 3, "bbr6", "zeropage,relative").pcr(),
    op(0x7F, 3, "bbr7", "zeropage,relative").pcr(),
    op(0x8F, 3, "bbs0", "zeropage,relative").pcr(),
    op(0x9F, 3, "bbs1", "zeropage,relative").pcr(),
    op(0xAF, 3, "bbs2", "zeropage,relative").pcr(),
    op(0xBF, 3, "bbs3", "zeropage,relative").pcr(),
    op(0xCF, 3, "bbs4", "zeropage,relative").pcr(),
    op(0xDF, 3, "bbs5", "zeropage,relative").pcr(),
    op(0xEF, 3, "bbs6", "zeropage,relative").pcr(),
    op(0xFF, 3, "bbs7", "zeropage,relative").pcr(),
];

pub(super) const CPU: CpuDefinition = CpuDefinition {
    id: "65c02",
    description: "Western Design Center 65C02 8-bit microprocessor",
    leadins: &[],
    max_length: 3,
    modes: mos6502::MODES,
    opcodes: &[mos6502::DOCUMENTED, CMOS],
};
