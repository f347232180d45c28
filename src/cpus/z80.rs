//! Zilog Z80.
//!
//! `$CB`, `$DD`, `$ED` and `$FD` are leadin bytes. The indexed bit
//! instructions (`DD CB d op`, `FD CB d op`) are listed twice: once under
//! their two-byte prefix, flagged as extended, and once under the full
//! three-byte key that names the real operation.

use super::{address, byte, op, rel8, word, CpuDefinition};
use crate::addressing::{Endian::Little, OperandFormat, Piece};
use crate::opcodes::OpcodeEntry;

const MODES: &[(&str, OperandFormat)] = &[
    ("implied", OperandFormat::Implied),
    ("$00", OperandFormat::Fixed("$00")),
    ("$08", OperandFormat::Fixed("$08")),
    ("$10", OperandFormat::Fixed("$10")),
    ("$18", OperandFormat::Fixed("$18")),
    ("$20", OperandFormat::Fixed("$20")),
    ("$28", OperandFormat::Fixed("$28")),
    ("$30", OperandFormat::Fixed("$30")),
    ("$38", OperandFormat::Fixed("$38")),
    ("(N),a", byte("(", "),a")),
    ("(NN),a", address(Little, "(", "),a")),
    ("(NN),bc", address(Little, "(", "),bc")),
    ("(NN),de", address(Little, "(", "),de")),
    ("(NN),hl", address(Little, "(", "),hl")),
    ("(NN),ix", address(Little, "(", "),ix")),
    ("(NN),iy", address(Little, "(", "),iy")),
    ("(NN),sp", address(Little, "(", "),sp")),
    ("(bc),a", OperandFormat::Fixed("(bc),a")),
    ("(c),a", OperandFormat::Fixed("(c),a")),
    ("(c),b", OperandFormat::Fixed("(c),b")),
    ("(c),c", OperandFormat::Fixed("(c),c")),
    ("(c),d", OperandFormat::Fixed("(c),d")),
    ("(c),e", OperandFormat::Fixed("(c),e")),
    ("(c),h", OperandFormat::Fixed("(c),h")),
    ("(c),l", OperandFormat::Fixed("(c),l")),
    ("(de),a", OperandFormat::Fixed("(de),a")),
    ("(hl)", OperandFormat::Fixed("(hl)")),
    ("(hl),N", byte("(hl),", "")),
    ("(hl),a", OperandFormat::Fixed("(hl),a")),
    ("(hl),b", OperandFormat::Fixed("(hl),b")),
    ("(hl),c", OperandFormat::Fixed("(hl),c")),
    ("(hl),d", OperandFormat::Fixed("(hl),d")),
    ("(hl),e", OperandFormat::Fixed("(hl),e")),
    ("(hl),h", OperandFormat::Fixed("(hl),h")),
    ("(hl),l", OperandFormat::Fixed("(hl),l")),
    ("(ix)", OperandFormat::Fixed("(ix)")),
    ("(ix+D)", byte("(ix+", ")")),
    ("(ix+D),N", OperandFormat::Pieces(&[Piece::Text("(ix+"), Piece::Byte(0), Piece::Text("),"), Piece::Byte(1)])),
    ("(ix+D),a", byte("(ix+", "),a")),
    ("(ix+D),b", byte("(ix+", "),b")),
    ("(ix+D),c", byte("(ix+", "),c")),
    ("(ix+D),d", byte("(ix+", "),d")),
    ("(ix+D),e", byte("(ix+", "),e")),
    ("(ix+D),h", byte("(ix+", "),h")),
    ("(ix+D),l", byte("(ix+", "),l")),
    ("(iy)", OperandFormat::Fixed("(iy)")),
    ("(iy+D)", byte("(iy+", ")")),
    ("(iy+D),N", OperandFormat::Pieces(&[Piece::Text("(iy+"), Piece::Byte(0), Piece::Text("),"), Piece::Byte(1)])),
    ("(iy+D),a", byte("(iy+", "),a")),
    ("(iy+D),b", byte("(iy+", "),b")),
    ("(iy+D),c", byte("(iy+", "),c")),
    ("(iy+D),d", byte("(iy+", "),d")),
    ("(iy+D),e", byte("(iy+", "),e")),
    ("(iy+D),h", byte("(iy+", "),h")),
    ("(iy+D),l", byte("(iy+", "),l")),
    ("(sp),hl", OperandFormat::Fixed("(sp),hl")),
    ("(sp),ix", OperandFormat::Fixed("(sp),ix")),
    ("(sp),iy", OperandFormat::Fixed("(sp),iy")),
    ("0", OperandFormat::Fixed("0")),
    ("0,(hl)", OperandFormat::Fixed("0,(hl)")),
    ("0,(ix+D)", byte("0,(ix+", ")")),
    ("0,(iy+D)", byte("0,(iy+", ")")),
    ("0,a", OperandFormat::Fixed("0,a")),
    ("0,b", OperandFormat::Fixed("0,b")),
    ("0,c", OperandFormat::Fixed("0,c")),
    ("0,d", OperandFormat::Fixed("0,d")),
    ("0,e", OperandFormat::Fixed("0,e")),
    ("0,h", OperandFormat::Fixed("0,h")),
    ("0,l", OperandFormat::Fixed("0,l")),
    ("1", OperandFormat::Fixed("1")),
    ("1,(hl)", OperandFormat::Fixed("1,(hl)")),
    ("1,(ix+D)", byte("1,(ix+", ")")),
    ("1,(iy+D)", byte("1,(iy+", ")")),
    ("1,a", OperandFormat::Fixed("1,a")),
    ("1,b", OperandFormat::Fixed("1,b")),
    ("1,c", OperandFormat::Fixed("1,c")),
    ("1,d", OperandFormat::Fixed("1,d")),
    ("1,e", OperandFormat::Fixed("1,e")),
    ("1,h", OperandFormat::Fixed("1,h")),
    ("1,l", OperandFormat::Fixed("1,l")),
    ("2", OperandFormat::Fixed("2")),
    ("2,(hl)", OperandFormat::Fixed("2,(hl)")),
    ("2,(ix+D)", byte("2,(ix+", ")")),
    ("2,(iy+D)", byte("2,(iy+", ")")),
    ("2,a", OperandFormat::Fixed("2,a")),
    ("2,b", OperandFormat::Fixed("2,b")),
    ("2,c", OperandFormat::Fixed("2,c")),
    ("2,d", OperandFormat::Fixed("2,d")),
    ("2,e", OperandFormat::Fixed("2,e")),
    ("2,h", OperandFormat::Fixed("2,h")),
    ("2,l", OperandFormat::Fixed("2,l")),
    ("3,(hl)", OperandFormat::Fixed("3,(hl)")),
    ("3,(ix+D)", byte("3,(ix+", ")")),
    ("3,(iy+D)", byte("3,(iy+", ")")),
    ("3,a", OperandFormat::Fixed("3,a")),
    ("3,b", OperandFormat::Fixed("3,b")),
    ("3,c", OperandFormat::Fixed("3,c")),
    ("3,d", OperandFormat::Fixed("3,d")),
    ("3,e", OperandFormat::Fixed("3,e")),
    ("3,h", OperandFormat::Fixed("3,h")),
    ("3,l", OperandFormat::Fixed("3,l")),
    ("4,(hl)", OperandFormat::Fixed("4,(hl)")),
    ("4,(ix+D)", byte("4,(ix+", ")")),
    ("4,(iy+D)", byte("4,(iy+", ")")),
    ("4,a", OperandFormat::Fixed("4,a")),
    ("4,b", OperandFormat::Fixed("4,b")),
    ("4,c", OperandFormat::Fixed("4,c")),
    ("4,d", OperandFormat::Fixed("4,d")),
    ("4,e", OperandFormat::Fixed("4,e")),
    ("4,h", OperandFormat::Fixed("4,h")),
    ("4,l", OperandFormat::Fixed("4,l")),
    ("5,(hl)", OperandFormat::Fixed("5,(hl)")),
    ("5,(ix+D)", byte("5,(ix+", ")")),
    ("5,(iy+D)", byte("5,(iy+", ")")),
    ("5,a", OperandFormat::Fixed("5,a")),
    ("5,b", OperandFormat::Fixed("5,b")),
    ("5,c", OperandFormat::Fixed("5,c")),
    ("5,d", OperandFormat::Fixed("5,d")),
    ("5,e", OperandFormat::Fixed("5,e")),
    ("5,h", OperandFormat::Fixed("5,h")),
    ("5,l", OperandFormat::Fixed("5,l")),
    ("6,(hl)", OperandFormat::Fixed("6,(hl)")),
    ("6,(ix+D)", byte("6,(ix+", ")")),
    ("6,(iy+D)", byte("6,(iy+", ")")),
    ("6,a", OperandFormat::Fixed("6,a")),
    ("6,b", OperandFormat::Fixed("6,b")),
    ("6,c", OperandFormat::Fixed("6,c")),
    ("6,d", OperandFormat::Fixed("6,d")),
    ("6,e", OperandFormat::Fixed("6,e")),
    ("6,h", OperandFormat::Fixed("6,h")),
    ("6,l", OperandFormat::Fixed("6,l")),
    ("7,(hl)", OperandFormat::Fixed("7,(hl)")),
    ("7,(ix+D)", byte("7,(ix+", ")")),
    ("7,(iy+D)", byte("7,(iy+", ")")),
    ("7,a", OperandFormat::Fixed("7,a")),
    ("7,b", OperandFormat::Fixed("7,b")),
    ("7,c", OperandFormat::Fixed("7,c")),
    ("7,d", OperandFormat::Fixed("7,d")),
    ("7,e", OperandFormat::Fixed("7,e")),
    ("7,h", OperandFormat::Fixed("7,h")),
    ("7,l", OperandFormat::Fixed("7,l")),
    ("E", rel8("", "")),
    ("N", byte("", "")),
    ("NN", address(Little, "", "")),
    ("a", OperandFormat::Fixed("a")),
    ("a,(N)", byte("a,(", ")")),
    ("a,(NN)", address(Little, "a,(", ")")),
    ("a,(bc)", OperandFormat::Fixed("a,(bc)")),
    ("a,(c)", OperandFormat::Fixed("a,(c)")),
    ("a,(de)", OperandFormat::Fixed("a,(de)")),
    ("a,(hl)", OperandFormat::Fixed("a,(hl)")),
    ("a,(ix+D)", byte("a,(ix+", ")")),
    ("a,(iy+D)", byte("a,(iy+", ")")),
    ("a,N", byte("a,", "")),
    ("a,a", OperandFormat::Fixed("a,a")),
    ("a,b", OperandFormat::Fixed("a,b")),
    ("a,c", OperandFormat::Fixed("a,c")),
    ("a,d", OperandFormat::Fixed("a,d")),
    ("a,e", OperandFormat::Fixed("a,e")),
    ("a,h", OperandFormat::Fixed("a,h")),
    ("a,i", OperandFormat::Fixed("a,i")),
    ("a,ixh", OperandFormat::Fixed("a,ixh")),
    ("a,ixl", OperandFormat::Fixed("a,ixl")),
    ("a,iyh", OperandFormat::Fixed("a,iyh")),
    ("a,iyl", OperandFormat::Fixed("a,iyl")),
    ("a,l", OperandFormat::Fixed("a,l")),
    ("a,r", OperandFormat::Fixed("a,r")),
    ("af", OperandFormat::Fixed("af")),
    ("af,af'", OperandFormat::Fixed("af,af'")),
    ("b", OperandFormat::Fixed("b")),
    ("b,(c)", OperandFormat::Fixed("b,(c)")),
    ("b,(hl)", OperandFormat::Fixed("b,(hl)")),
    ("b,(ix+D)", byte("b,(ix+", ")")),
    ("b,(iy+D)", byte("b,(iy+", ")")),
    ("b,N", byte("b,", "")),
    ("b,a", OperandFormat::Fixed("b,a")),
    ("b,b", OperandFormat::Fixed("b,b")),
    ("b,c", OperandFormat::Fixed("b,c")),
    ("b,d", OperandFormat::Fixed("b,d")),
    ("b,e", OperandFormat::Fixed("b,e")),
    ("b,h", OperandFormat::Fixed("b,h")),
    ("b,l", OperandFormat::Fixed("b,l")),
    ("bc", OperandFormat::Fixed("bc")),
    ("bc,(NN)", address(Little, "bc,(", ")")),
    ("bc,NN", word(Little, "bc,", "")),
    ("c", OperandFormat::Fixed("c")),
    ("c,(c)", OperandFormat::Fixed("c,(c)")),
    ("c,(hl)", OperandFormat::Fixed("c,(hl)")),
    ("c,(ix+D)", byte("c,(ix+", ")")),
    ("c,(iy+D)", byte("c,(iy+", ")")),
    ("c,E", rel8("c,", "")),
    ("c,N", byte("c,", "")),
    ("c,NN", address(Little, "c,", "")),
    ("c,a", OperandFormat::Fixed("c,a")),
    ("c,b", OperandFormat::Fixed("c,b")),
    ("c,c", OperandFormat::Fixed("c,c")),
    ("c,d", OperandFormat::Fixed("c,d")),
    ("c,e", OperandFormat::Fixed("c,e")),
    ("c,h", OperandFormat::Fixed("c,h")),
    ("c,l", OperandFormat::Fixed("c,l")),
    ("d", OperandFormat::Fixed("d")),
    ("d,(c)", OperandFormat::Fixed("d,(c)")),
    ("d,(hl)", OperandFormat::Fixed("d,(hl)")),
    ("d,(ix+D)", byte("d,(ix+", ")")),
    ("d,(iy+D)", byte("d,(iy+", ")")),
    ("d,N", byte("d,", "")),
    ("d,a", OperandFormat::Fixed("d,a")),
    ("d,b", OperandFormat::Fixed("d,b")),
    ("d,c", OperandFormat::Fixed("d,c")),
    ("d,d", OperandFormat::Fixed("d,d")),
    ("d,e", OperandFormat::Fixed("d,e")),
    ("d,h", OperandFormat::Fixed("d,h")),
    ("d,l", OperandFormat::Fixed("d,l")),
    ("de", OperandFormat::Fixed("de")),
    ("de,(NN)", address(Little, "de,(", ")")),
    ("de,NN", word(Little, "de,", "")),
    ("de,hl", OperandFormat::Fixed("de,hl")),
    ("e", OperandFormat::Fixed("e")),
    ("e,(c)", OperandFormat::Fixed("e,(c)")),
    ("e,(hl)", OperandFormat::Fixed("e,(hl)")),
    ("e,(ix+D)", byte("e,(ix+", ")")),
    ("e,(iy+D)", byte("e,(iy+", ")")),
    ("e,N", byte("e,", "")),
    ("e,a", OperandFormat::Fixed("e,a")),
    ("e,b", OperandFormat::Fixed("e,b")),
    ("e,c", OperandFormat::Fixed("e,c")),
    ("e,d", OperandFormat::Fixed("e,d")),
    ("e,e", OperandFormat::Fixed("e,e")),
    ("e,h", OperandFormat::Fixed("e,h")),
    ("e,l", OperandFormat::Fixed("e,l")),
    ("h", OperandFormat::Fixed("h")),
    ("h,(c)", OperandFormat::Fixed("h,(c)")),
    ("h,(hl)", OperandFormat::Fixed("h,(hl)")),
    ("h,(ix+D)", byte("h,(ix+", ")")),
    ("h,(iy+D)", byte("h,(iy+", ")")),
    ("h,N", byte("h,", "")),
    ("h,a", OperandFormat::Fixed("h,a")),
    ("h,b", OperandFormat::Fixed("h,b")),
    ("h,c", OperandFormat::Fixed("h,c")),
    ("h,d", OperandFormat::Fixed("h,d")),
    ("h,e", OperandFormat::Fixed("h,e")),
    ("h,h", OperandFormat::Fixed("h,h")),
    ("h,l", OperandFormat::Fixed("h,l")),
    ("hl", OperandFormat::Fixed("hl")),
    ("hl,(NN)", address(Little, "hl,(", ")")),
    ("hl,NN", word(Little, "hl,", "")),
    ("hl,bc", OperandFormat::Fixed("hl,bc")),
    ("hl,de", OperandFormat::Fixed("hl,de")),
    ("hl,hl", OperandFormat::Fixed("hl,hl")),
    ("hl,sp", OperandFormat::Fixed("hl,sp")),
    ("i,a", OperandFormat::Fixed("i,a")),
    ("ix", OperandFormat::Fixed("ix")),
    ("ix,(NN)", address(Little, "ix,(", ")")),
    ("ix,NN", word(Little, "ix,", "")),
    ("ix,bc", OperandFormat::Fixed("ix,bc")),
    ("ix,de", OperandFormat::Fixed("ix,de")),
    ("ix,ix", OperandFormat::Fixed("ix,ix")),
    ("ix,sp", OperandFormat::Fixed("ix,sp")),
    ("ixh", OperandFormat::Fixed("ixh")),
    ("ixh,N", byte("ixh,", "")),
    ("ixl", OperandFormat::Fixed("ixl")),
    ("ixl,N", byte("ixl,", "")),
    ("iy", OperandFormat::Fixed("iy")),
    ("iy,(NN)", address(Little, "iy,(", ")")),
    ("iy,NN", word(Little, "iy,", "")),
    ("iy,bc", OperandFormat::Fixed("iy,bc")),
    ("iy,de", OperandFormat::Fixed("iy,de")),
    ("iy,iy", OperandFormat::Fixed("iy,iy")),
    ("iy,sp", OperandFormat::Fixed("iy,sp")),
    ("iyh", OperandFormat::Fixed("iyh")),
    ("iyh,N", byte("iyh,", "")),
    ("iyl", OperandFormat::Fixed("iyl")),
    ("iyl,N", byte("iyl,", "")),
    ("l", OperandFormat::Fixed("l")),
    ("l,(c)", OperandFormat::Fixed("l,(c)")),
    ("l,(hl)", OperandFormat::Fixed("l,(hl)")),
    ("l,(ix+D)", byte("l,(ix+", ")")),
    ("l,(iy+D)", byte("l,(iy+", ")")),
    ("l,N", byte("l,", "")),
    ("l,a", OperandFormat::Fixed("l,a")),
    ("l,b", OperandFormat::Fixed("l,b")),
    ("l,c", OperandFormat::Fixed("l,c")),
    ("l,d", OperandFormat::Fixed("l,d")),
    ("l,e", OperandFormat::Fixed("l,e")),
    ("l,h", OperandFormat::Fixed("l,h")),
    ("l,l", OperandFormat::Fixed("l,l")),
    ("m", OperandFormat::Fixed("m")),
    ("m,NN", address(Little, "m,", "")),
    ("nc", OperandFormat::Fixed("nc")),
    ("nc,E", rel8("nc,", "")),
    ("nc,NN", address(Little, "nc,", "")),
    ("nz", OperandFormat::Fixed("nz")),
    ("nz,E", rel8("nz,", "")),
    ("nz,NN", address(Little, "nz,", "")),
    ("p", OperandFormat::Fixed("p")),
    ("p,NN", address(Little, "p,", "")),
    ("pe", OperandFormat::Fixed("pe")),
    ("pe,NN", address(Little, "pe,", "")),
    ("po", OperandFormat::Fixed("po")),
    ("po,NN", address(Little, "po,", "")),
    ("r,a", OperandFormat::Fixed("r,a")),
    ("sp", OperandFormat::Fixed("sp")),
    ("sp,(NN)", address(Little, "sp,(", ")")),
    ("sp,NN", word(Little, "sp,", "")),
    ("sp,hl", OperandFormat::Fixed("sp,hl")),
    ("sp,ix", OperandFormat::Fixed("sp,ix")),
    ("sp,iy", OperandFormat::Fixed("sp,iy")),
    ("z", OperandFormat::Fixed("z")),
    ("z,E", rel8("z,", "")),
    ("z,NN", address(Little, "z,", "")),
];

/// Unprefixed opcodes.
const MAIN: &[OpcodeEntry] = &[
    op(0x00, 1, "nop", "implied"),
    op(0x01, 3, "ld", "bc,NN"),
    op(0x02, 1, "ld", "(bc),a"),
    op(0x03, 1, "inc", "bc"),
    op(0x04, 1, "inc", "b"),
    op(0x05, 1, "dec", "b"),
    op(0x06, 2, "ld", "b,N"),
    op(0x07, 1, "rlca", "implied"),
    op(0x08, 1, "ex", "af,af'"),
    op(0x09, 1, "add", "hl,bc"),
    op(0x0A, 1, "ld", "a,(bc)"),
    op(0x0B, 1, "dec", "bc"),
    op(0x0C, 1, "inc", "c"),
    op(0x0D, 1, "dec", "c"),
    op(0x0E, 2, "ld", "c,N"),
    op(0x0F, 1, "rrca", "implied"),
    op(0x10, 2, "djnz", "E").pcr(),
    op(0x11, 3, "ld", "de,NN"),
    op(0x12, 1, "ld", "(de),a"),
    op(0x13, 1, "inc", "de"),
    op(0x14, 1, "inc", "d"),
    op(0x15, 1, "dec", "d"),
    op(0x16, 2, "ld", "d,N"),
    op(0x17, 1, "rla", "implied"),
    op(0x18, 2, "jr", "E").pcr(),
    op(0x19, 1, "add", "hl,de"),
    op(0x1A, 1, "ld", "a,(de)"),
    op(0x1B, 1, "dec", "de"),
    op(0x1C, 1, "inc", "e"),
    op(0x1D, 1, "dec", "e"),
    op(0x1E, 2, "ld", "e,N"),
    op(0x1F, 1, "rra", "implied"),
    op(0x20, 2, "jr", "nz,E").pcr(),
    op(0x21, 3, "ld", "hl,NN"),
    op(0x22, 3, "ld", "(NN),hl"),
    op(0x23, 1, "inc", "hl"),
    op(0x24, 1, "inc", "h"),
    op(0x25, 1, "dec", "h"),
    op(0x26, 2, "ld", "h,N"),
    op(0x27, 1, "daa", "implied"),
    op(0x28, 2, "jr", "z,E").pcr(),
    op(0x29, 1, "add", "hl,hl"),
    op(0x2A, 3, "ld", "hl,(NN)"),
    op(0x2B, 1, "dec", "hl"),
    op(0x2C, 1, "inc", "l"),
    op(0x2D, 1, "dec", "l"),
    op(0x2E, 2, "ld", "l,N"),
    op(0x2F, 1, "cpl", "implied"),
    op(0x30, 2, "jr", "nc,E").pcr(),
    op(0x31, 3, "ld", "sp,NN"),
    op(0x32, 3, "ld", "(NN),a"),
    op(0x33, 1, "inc", "sp"),
    op(0x34, 1, "inc", "(hl)"),
    op(0x35, 1, "dec", "(hl)"),
    op(0x36, 2, "ld", "(hl),N"),
    op(0x37, 1, "scf", "implied"),
    op(0x38, 2, "jr", "c,E").pcr(),
    op(0x39, 1, "add", "hl,sp"),
    op(0x3A, 3, "ld", "a,(NN)"),
    op(0x3B, 1, "dec", "sp"),
    op(0x3C, 1, "inc", "a"),
    op(0x3D, 1, "dec", "a"),
    op(0x3E, 2, "ld", "a,N"),
    op(0x3F, 1, "ccf", "implied"),
    op(0x40, 1, "ld", "b,b"),
    op(0x41, 1, "ld", "b,c"),
    op(0x42, 1, "ld", "b,d"),
    op(0x43, 1, "ld", "b,e"),
    op(0x44, 1, "ld", "b,h"),
    op(0x45, 1, "ld", "b,l"),
    op(0x46, 1, "ld", "b,(hl)"),
    op(0x47, 1, "ld", "b,a"),
    op(0x48, 1, "ld", "c,b"),
    op(0x49, 1, "ld", "c,c"),
    op(0x4A, 1, "ld", "c,d"),
    op(0x4B, 1, "ld", "c,e"),
    op(0x4C, 1, "ld", "c,h"),
    op(0x4D, 1, "ld", "c,l"),
    op(0x4E, 1, "ld", "c,(hl)"),
    op(0x4F, 1, "ld", "c,a"),
    op(0x50, 1, "ld", "d,b"),
    op(0x51, 1, "ld", "d,c"),
    op(0x52, 1, "ld", "d,d"),
    op(0x53, 1, "ld", "d,e"),
    op(0x54, 1, "ld", "d,h"),
    op(0x55, 1, "ld", "d,l"),
    op(0x56, 1, "ld", "d,(hl)"),
    op(0x57, 1, "ld", "d,a"),
    op(0x58, 1, "ld", "e,b"),
    op(0x59, 1, "ld", "e,c"),
    op(0x5A, 1, "ld", "e,d"),
    op(0x5B, 1, "ld", "e,e"),
    op(0x5C, 1, "ld", "e,h"),
    op(0x5D, 1, "ld", "e,l"),
    op(0x5E, 1, "ld", "e,(hl)"),
    op(0x5F, 1, "ld", "e,a"),
    op(0x60, 1, "ld", "h,b"),
    op(0x61, 1, "ld", "h,c"),
    op(0x62, 1, "ld", "h,d"),
    op(0x63, 1, "ld", "h,e"),
    op(0x64, 1, "ld", "h,h"),
    op(0x65, 1, "ld", "h,l"),
    op(0x66, 1, "ld", "h,(hl)"),
    op(0x67, 1, "ld", "h,a"),
    op(0x68, 1, "ld", "l,b"),
    op(0x69, 1, "ld", "l,c"),
    op(0x6A, 1, "ld", "l,d"),
    op(0x6B, 1, "ld", "l,e"),
    op(0x6C, 1, "ld", "l,h"),
    op(0x6D, 1, "ld", "l,l"),
    op(0x6E, 1, "ld", "l,(hl)"),
    op(0x6F, 1, "ld", "l,a"),
    op(0x70, 1, "ld", "(hl),b"),
    op(0x71, 1, "ld", "(hl),c"),
    op(0x72, 1, "ld", "(hl),d"),
    op(0x73, 1, "ld", "(hl),e"),
    op(0x74, 1, "ld", "(hl),h"),
    op(0x75, 1, "ld", "(hl),l"),
    op(0x76, 1, "halt", "implied"),
    op(0x77, 1, "ld", "(hl),a"),
    op(0x78, 1, "ld", "a,b"),
    op(0x79, 1, "ld", "a,c"),
    op(0x7A, 1, "ld", "a,d"),
    op(0x7B, 1, "ld", "a,e"),
    op(0x7C, 1, "ld", "a,h"),
    op(0x7D, 1, "ld", "a,l"),
    op(0x7E, 1, "ld", "a,(hl)"),
    op(0x7F, 1, "ld", "a,a"),
    op(0x80, 1, "add", "a,b"),
    op(0x81, 1, "add", "a,c"),
    op(0x82, 1, "add", "a,d"),
    op(0x83, 1, "add", "a,e"),
    op(0x84, 1, "add", "a,h"),
    op(0x85, 1, "add", "a,l"),
    op(0x86, 1, "add", "a,(hl)"),
    op(0x87, 1, "add", "a,a"),
    op(0x88, 1, "adc", "a,b"),
    op(0x89, 1, "adc", "a,c"),
    op(0x8A, 1, "adc", "a,d"),
    op(0x8B, 1, "adc", "a,e"),
    op(0x8C, 1, "adc", "a,h"),
    op(0x8D, 1, "adc", "a,l"),
    op(0x8E, 1, "adc", "a,(hl)"),
    op(0x8F, 1, "adc", "a,a"),
    op(0x90, 1, "sub", "b"),
    op(0x91, 1, "sub", "c"),
    op(0x92, 1, "sub", "d"),
    op(0x93, 1, "sub", "e"),
    op(0x94, 1, "sub", "h"),
    op(0x95, 1, "sub", "l"),
    op(0x96, 1, "sub", "(hl)"),
    op(0x97, 1, "sub", "a"),
    op(0x98, 1, "sbc", "a,b"),
    op(0x99, 1, "sbc", "a,c"),
    op(0x9A, 1, "sbc", "a,d"),
    op(0x9B, 1, "sbc", "a,e"),
    op(0x9C, 1, "sbc", "a,h"),
    op(0x9D, 1, "sbc", "a,l"),
    op(0x9E, 1, "sbc", "a,(hl)"),
    op(0x9F, 1, "sbc", "a,a"),
    op(0xA0, 1, "and", "b"),
    op(0xA1, 1, "and", "c"),
    op(0xA2, 1, "and", "d"),
    op(0xA3, 1, "and", "e"),
    op(0xA4, 1, "and", "h"),
    op(0xA5, 1, "and", "l"),
    op(0xA6, 1, "and", "(hl)"),
    op(0xA7, 1, "and", "a"),
    op(0xA8, 1, "xor", "b"),
    op(0xA9, 1, "xor", "c"),
    op(0xAA, 1, "xor", "d"),
    op(0xAB, 1, "xor", "e"),
    op(0xAC, 1, "xor", "h"),
    op(0xAD, 1, "xor", "l"),
    op(0xAE, 1, "xor", "(hl)"),
    op(0xAF, 1, "xor", "a"),
    op(0xB0, 1, "or", "b"),
    op(0xB1, 1, "or", "c"),
    op(0xB2, 1, "or", "d"),
    op(0xB3, 1, "or", "e"),
    op(0xB4, 1, "or", "h"),
    op(0xB5, 1, "or", "l"),
    op(0xB6, 1, "or", "(hl)"),
    op(0xB7, 1, "or", "a"),
    op(0xB8, 1, "cp", "b"),
    op(0xB9, 1, "cp", "c"),
    op(0xBA, 1, "cp", "d"),
    op(0xBB, 1, "cp", "e"),
    op(0xBC, 1, "cp", "h"),
    op(0xBD, 1, "cp", "l"),
    op(0xBE, 1, "cp", "(hl)"),
    op(0xBF, 1, "cp", "a"),
    op(0xC0, 1, "ret", "nz"),
    op(0xC1, 1, "pop", "bc"),
    op(0xC2, 3, "jp", "nz,NN"),
    op(0xC3, 3, "jp", "NN"),
    op(0xC4, 3, "call", "nz,NN"),
    op(0xC5, 1, "push", "bc"),
    op(0xC6, 2, "add", "a,N"),
    op(0xC7, 1, "rst", "$00"),
    op(0xC8, 1, "ret", "z"),
    op(0xC9, 1, "ret", "implied"),
    op(0xCA, 3, "jp", "z,NN"),
    op(0xCC, 3, "call", "z,NN"),
    op(0xCD, 3, "call", "NN"),
    op(0xCE, 2, "adc", "a,N"),
    op(0xCF, 1, "rst", "$08"),
    op(0xD0, 1, "ret", "nc"),
    op(0xD1, 1, "pop", "de"),
    op(0xD2, 3, "jp", "nc,NN"),
    op(0xD3, 2, "out", "(N),a"),
    op(0xD4, 3, "call", "nc,NN"),
    op(0xD5, 1, "push", "de"),
    op(0xD6, 2, "sub", "N"),
    op(0xD7, 1, "rst", "$10"),
    op(0xD8, 1, "ret", "c"),
    op(0xD9, 1, "exx", "implied"),
    op(0xDA, 3, "jp", "c,NN"),
    op(0xDB, 2, "in", "a,(N)"),
    op(0xDC, 3, "call", "c,NN"),
    op(0xDE, 2, "sbc", "a,N"),
    op(0xDF, 1, "rst", "$18"),
    op(0xE0, 1, "ret", "po"),
    op(0xE1, 1, "pop", "hl"),
    op(0xE2, 3, "jp", "po,NN"),
    op(0xE3, 1, "ex", "(sp),hl"),
    op(0xE4, 3, "call", "po,NN"),
    op(0xE5, 1, "push", "hl"),
    op(0xE6, 2, "and", "N"),
    op(0xE7, 1, "rst", "$20"),
    op(0xE8, 1, "ret", "pe"),
    op(0xE9, 1, "jp", "(hl)"),
    op(0xEA, 3, "jp", "pe,NN"),
    op(0xEB, 1, "ex", "de,hl"),
    op(0xEC, 3, "call", "pe,NN"),
    op(0xEE, 2, "xor", "N"),
    op(0xEF, 1, "rst", "$28"),
    op(0xF0, 1, "ret", "p"),
    op(0xF1, 1, "pop", "af"),
    op(0xF2, 3, "jp", "p,NN"),
    op(0xF3, 1, "di", "implied"),
    op(0xF4, 3, "call", "p,NN"),
    op(0xF5, 1, "push", "af"),
    op(0xF6, 2, "or", "N"),
    op(0xF7, 1, "rst", "$30"),
    op(0xF8, 1, "ret", "m"),
    op(0xF9, 1, "ld", "sp,hl"),
    op(0xFA, 3, "jp", "m,NN"),
    op(0xFB, 1, "ei", "implied"),
    op(0xFC, 3, "call", "m,NN"),
    op(0xFE, 2, "cp", "N"),
    op(0xFF, 1, "rst", "$38"),
];

/// `$CB` prefix: rotates, shifts and bit operations.
const CB: &[OpcodeEntry] = &[
    op(0xCB00, 2, "rlc", "b"),
    op(0xCB01, 2, "rlc", "c"),
    op(0xCB02, 2, "rlc", "d"),
    op(0xCB03, 2, "rlc", "e"),
    op(0xCB04, 2, "rlc", "h"),
    op(0xCB05, 2, "rlc", "l"),
    op(0xCB06, 2, "rlc", "(hl)"),
    op(0xCB07, 2, "rlc", "a"),
    op(0xCB08, 2, "rrc", "b"),
    op(0xCB09, 2, "rrc", "c"),
    op(0xCB0A, 2, "rrc", "d"),
    op(0xCB0B, 2, "rrc", "e"),
    op(0xCB0C, 2, "rrc", "h"),
    op(0xCB0D, 2, "rrc", "l"),
    op(0xCB0E, 2, "rrc", "(hl)"),
    op(0xCB0F, 2, "rrc", "a"),
    op(0xCB10, 2, "rl", "b"),
    op(0xCB11, 2, "rl", "c"),
    op(0xCB12, 2, "rl", "d"),
    op(0xCB13, 2, "rl", "e"),
    op(0xCB14, 2, "rl", "h"),
    op(0xCB15, 2, "rl", "l"),
    op(0xCB16, 2, "rl", "(hl)"),
    op(0xCB17, 2, "rl", "a"),
    op(0xCB18, 2, "rr", "b"),
    op(0xCB19, 2, "rr", "c"),
    op(0xCB1A, 2, "rr", "d"),
    op(0xCB1B, 2, "rr", "e"),
    op(0xCB1C, 2, "rr", "h"),
    op(0xCB1D, 2, "rr", "l"),
    op(0xCB1E, 2, "rr", "(hl)"),
    op(0xCB1F, 2, "rr", "a"),
    op(0xCB20, 2, "sla", "b"),
    op(0xCB21, 2, "sla", "c"),
    op(0xCB22, 2, "sla", "d"),
    op(0xCB23, 2, "sla", "e"),
    op(0xCB24, 2, "sla", "h"),
    op(0xCB25, 2, "sla", "l"),
    op(0xCB26, 2, "sla", "(hl)"),
    op(0xCB27, 2, "sla", "a"),
    op(0xCB28, 2, "sra", "b"),
    op(0xCB29, 2, "sra", "c"),
    op(0xCB2A, 2, "sra", "d"),
    op(0xCB2B, 2, "sra", "e"),
    op(0xCB2C, 2, "sra", "h"),
    op(0xCB2D, 2, "sra", "l"),
    op(0xCB2E, 2, "sra", "(hl)"),
    op(0xCB2F, 2, "sra", "a"),
    op(0xCB30, 2, "sll", "b").und(),
    op(0xCB31, 2, "sll", "c").und(),
    op(0xCB32, 2, "sll", "d").und(),
    op(0xCB33, 2, "sll", "e").und(),
    op(0xCB34, 2, "sll", "h").und(),
    op(0xCB35, 2, "sll", "l").und(),
    op(0xCB36, 2, "sll", "(hl)").und(),
    op(0xCB37, 2, "sll", "a").und(),
    op(0xCB38, 2, "srl", "b"),
    op(0xCB39, 2, "srl", "c"),
    op(0xCB3A, 2, "srl", "d"),
    op(0xCB3B, 2, "srl", "e"),
    op(0xCB3C, 2, "srl", "h"),
    op(0xCB3D, 2, "srl", "l"),
    op(0xCB3E, 2, "srl", "(hl)"),
    op(0xCB3F, 2, "srl", "a"),
    op(0xCB40, 2, "bit", "0,b"),
    op(0xCB41, 2, "bit", "0,c"),
    op(0xCB42, 2, "bit", "0,d"),
    op(0xCB43, 2, "bit", "0,e"),
    op(0xCB44, 2, "bit", "0,h"),
    op(0xCB45, 2, "bit", "0,l"),
    op(0xCB46, 2, "bit", "0,(hl)"),
    op(0xCB47, 2, "bit", "0,a"),
    op(0xCB48, 2, "bit", "1,b"),
    op(0xCB49, 2, "bit", "1,c"),
    op(0xCB4A, 2, "bit", "1,d"),
    op(0xCB4B, 2, "bit", "1,e"),
    op(0xCB4C, 2, "bit", "1,h"),
    op(0xCB4D, 2, "bit", "1,l"),
    op(0xCB4E, 2, "bit", "1,(hl)"),
    op(0xCB4F, 2, "bit", "1,a"),
    op(0xCB50, 2, "bit", "2,b"),
    op(0xCB51, 2, "bit", "2,c"),
    op(0xCB52, 2, "bit", "2,d"),
    op(0xCB53, 2, "bit", "2,e"),
    op(0xCB54, 2, "bit", "2,h"),
    op(0xCB55, 2, "bit", "2,l"),
    op(0xCB56, 2, "bit", "2,(hl)"),
    op(0xCB57, 2, "bit", "2,a"),
    op(0xCB58, 2, "bit", "3,b"),
    op(0xCB59, 2, "bit", "3,c"),
    op(0xCB5A, 2, "bit", "3,d"),
    op(0xCB5B, 2, "bit", "3,e"),
    op(0xCB5C, 2, "bit", "3,h"),
    op(0xCB5D, 2, "bit", "3,l"),
    op(0xCB5E, 2, "bit", "3,(hl)"),
    op(0xCB5F, 2, "bit", "3,a"),
    op(0xCB60, 2, "bit", "4,b"),
    op(0xCB61, 2, "bit", "4,c"),
    op(0xCB62, 2, "bit", "4,d"),
    op(0xCB63, 2, "bit", "4,e"),
    op(0xCB64, 2, "bit", "4,h"),
    op(0xCB65, 2, "bit", "4,l"),
    op(0xCB66, 2, "bit", "4,(hl)"),
    op(0xCB67, 2, "bit", "4,a"),
    op(0xCB68, 2, "bit", "5,b"),
    op(0xCB69, 2, "bit", "5,c"),
    op(0xCB6A, 2, "bit", "5,d"),
    op(0xCB6B, 2, "bit", "5,e"),
    op(0xCB6C, 2, "bit", "5,h"),
    op(0xCB6D, 2, "bit", "5,l"),
    op(0xCB6E, 2, "bit", "5,(hl)"),
    op(0xCB6F, 2, "bit", "5,a"),
    op(0xCB70, 2, "bit", "6,b"),
    op(0xCB71, 2, "bit", "6,c"),
    op(0xCB72, 2, "bit", "6,d"),
    op(0xCB73, 2, "bit", "6,e"),
    op(0xCB74, 2, "bit", "6,h"),
    op(0xCB75, 2, "bit", "6,l"),
    op(0xCB76, 2, "bit", "6,(hl)"),
    op(0xCB77, 2, "bit", "6,a"),
    op(0xCB78, 2, "bit", "7,b"),
    op(0xCB79, 2, "bit", "7,c"),
    op(0xCB7A, 2, "bit", "7,d"),
    op(0xCB7B, 2, "bit", "7,e"),
    op(0xCB7C, 2, "bit", "7,h"),
    op(0xCB7D, 2, "bit", "7,l"),
    op(0xCB7E, 2, "bit", "7,(hl)"),
    op(0xCB7F, 2, "bit", "7,a"),
    op(0xCB80, 2, "res", "0,b"),
    op(0xCB81, 2, "res", "0,c"),
    op(0xCB82, 2, "res", "0,d"),
    op(0xCB83, 2, "res", "0,e"),
    op(0xCB84, 2, "res", "0,h"),
    op(0xCB85, 2, "res", "0,l"),
    op(0xCB86, 2, "res", "0,(hl)"),
    op(0xCB87, 2, "res", "0,a"),
    op(0xCB88, 2, "res", "1,b"),
    op(0xCB89, 2, "res", "1,c"),
    op(0xCB8A, 2, "res", "1,d"),
    op(0xCB8B, 2, "res", "1,e"),
    op(0xCB8C, 2, "res", "1,h"),
    op(0xCB8D, 2, "res", "1,l"),
    op(0xCB8E, 2, "res", "1,(hl)"),
    op(0xCB8F, 2, "res", "1,a"),
    op(0xCB90, 2, "res", "2,b"),
    op(0xCB91, 2, "res", "2,c"),
    op(0xCB92, 2, "res", "2,d"),
    op(0xCB93, 2, "res", "2,e"),
    op(0xCB94, 2, "res", "2,h"),
    op(0xCB95, 2, "res", "2,l"),
    op(0xCB96, 2, "res", "2,(hl)"),
    op(0xCB97, 2, "res", "2,a"),
    op(0xCB98, 2, "res", "3,b"),
    op(0xCB99, 2, "res", "3,c"),
    op(0xCB9A, 2, "res", "3,d"),
    op(0xCB9B, 2, "res", "3,e"),
    op(0xCB9C, 2, "res", "3,h"),
    op(0xCB9D, 2, "res", "3,l"),
    op(0xCB9E, 2, "res", "3,(hl)"),
    op(0xCB9F, 2, "res", "3,a"),
    op(0xCBA0, 2, "res", "4,b"),
    op(0xCBA1, 2, "res", "4,c"),
    op(0xCBA2, 2, "res", "4,d"),
    op(0xCBA3, 2, "res", "4,e"),
    op(0xCBA4, 2, "res", "4,h"),
    op(0xCBA5, 2, "res", "4,l"),
    op(0xCBA6, 2, "res", "4,(hl)"),
    op(0xCBA7, 2, "res", "4,a"),
    op(0xCBA8, 2, "res", "5,b"),
    op(0xCBA9, 2, "res", "5,c"),
    op(0xCBAA, 2, "res", "5,d"),
    op(0xCBAB, 2, "res", "5,e"),
    op(0xCBAC, 2, "res", "5,h"),
    op(0xCBAD, 2, "res", "5,l"),
    op(0xCBAE, 2, "res", "5,(hl)"),
    op(0xCBAF, 2, "res", "5,a"),
    op(0xCBB0, 2, "res", "6,b"),
    op(0xCBB1, 2, "res", "6,c"),
    op(0xCBB2, 2, "res", "6,d"),
    op(0xCBB3, 2, "res", "6,e"),
    op(0xCBB4, 2, "res", "6,h"),
    op(0xCBB5, 2, "res", "6,l"),
    op(0xCBB6, 2, "res", "6,(hl)"),
    op(0xCBB7, 2, "res", "6,a"),
    op(0xCBB8, 2, "res", "7,b"),
    op(0xCBB9, 2, "res", "7,c"),
    op(0xCBBA, 2, "res", "7,d"),
    op(0xCBBB, 2, "res", "7,e"),
    op(0xCBBC, 2, "res", "7,h"),
    op(0xCBBD, 2, "res", "7,l"),
    op(0xCBBE, 2, "res", "7,(hl)"),
    op(0xCBBF, 2, "res", "7,a"),
    op(0xCBC0, 2, "set", "0,b"),
    op(0xCBC1, 2, "set", "0,c"),
    op(0xCBC2, 2, "set", "0,d"),
    op(0xCBC3, 2, "set", "0,e"),
    op(0xCBC4, 2, "set", "0,h"),
    op(0xCBC5, 2, "set", "0,l"),
    op(0xCBC6, 2, "set", "0,(hl)"),
    op(0xCBC7, 2, "set", "0,a"),
    op(0xCBC8, 2, "set", "1,b"),
    op(0xCBC9, 2, "set", "1,c"),
    op(0xCBCA, 2, "set", "1,d"),
    op(0xCBCB, 2, "set", "1,e"),
    op(0xCBCC, 2, "set", "1,h"),
    op(0xCBCD, 2, "set", "1,l"),
    op(0xCBCE, 2, "set", "1,(hl)"),
    op(0xCBCF, 2, "set", "1,a"),
    op(0xCBD0, 2, "set", "2,b"),
    op(0xCBD1, 2, "set", "2,c"),
    op(0xCBD2, 2, "set", "2,d"),
    op(0xCBD3, 2, "set", "2,e"),
    op(0xCBD4, 2, "set", "2,h"),
    op(0xCBD5, 2, "set", "2,l"),
    op(0xCBD6, 2, "set", "2,(hl)"),
    op(0xCBD7, 2, "set", "2,a"),
    op(0xCBD8, 2, "set", "3,b"),
    op(0xCBD9, 2, "set", "3,c"),
    op(0xCBDA, 2, "set", "3,d"),
    op(0xCBDB, 2, "set", "3,e"),
    op(0xCBDC, 2, "set", "3,h"),
    op(0xCBDD, 2, "set", "3,l"),
    op(0xCBDE, 2, "set", "3,(hl)"),
    op(0xCBDF, 2, "set", "3,a"),
    op(0xCBE0, 2, "set", "4,b"),
    op(0xCBE1, 2, "set", "4,c"),
    op(0xCBE2, 2, "set", "4,d"),
    op(0xCBE3, 2, "set", "4,e"),
    op(0xCBE4, 2, "set", "4,h"),
    op(0xCBE5, 2, "set", "4,l"),
    op(0xCBE6, 2, "set", "4,(hl)"),
    op(0xCBE7, 2, "set", "4,a"),
    op(0xCBE8, 2, "set", "5,b"),
    op(0xCBE9, 2, "set", "5,c"),
    op(0xCBEA, 2, "set", "5,d"),
    op(0xCBEB, 2, "set", "5,e"),
    op(0xCBEC, 2, "set", "5,h"),
    op(0xCBED, 2, "set", "5,l"),
    op(0xCBEE, 2, "set", "5,(hl)"),
    op(0xCBEF, 2, "set", "5,a"),
    op(0xCBF0, 2, "set", "6,b"),
    op(0xCBF1, 2, "set", "6,c"),
    op(0xCBF2, 2, "set", "6,d"),
    op(0xCBF3, 2, "set", "6,e"),
    op(0xCBF4, 2, "set", "6,h"),
    op(0xCBF5, 2, "set", "6,l"),
    op(0xCBF6, 2, "set", "6,(hl)"),
    op(0xCBF7, 2, "set", "6,a"),
    op(0xCBF8, 2, "set", "7,b"),
    op(0xCBF9, 2, "set", "7,c"),
    op(0xCBFA, 2, "set", "7,d"),
    op(0xCBFB, 2, "set", "7,e"),
    op(0xCBFC, 2, "set", "7,h"),
    op(0xCBFD, 2, "set", "7,l"),
    op(0xCBFE, 2, "set", "7,(hl)"),
    op(0xCBFF, 2, "set", "7,a"),
];

/// `$ED` prefix.
const ED: &[OpcodeEntry] = &[
    op(0xED40, 2, "in", "b,(c)"),
    op(0xED41, 2, "out", "(c),b"),
    op(0xED42, 2, "sbc", "hl,bc"),
    op(0xED43, 4, "ld", "(NN),bc"),
    op(0xED44, 2, "neg", "implied"),
    op(0xED45, 2, "retn", "implied"),
    op(0xED46, 2, "im", "0"),
    op(0xED47, 2, "ld", "i,a"),
    op(0xED48, 2, "in", "c,(c)"),
    op(0xED49, 2, "out", "(c),c"),
    op(0xED4A, 2, "adc", "hl,bc"),
    op(0xED4B, 4, "ld", "bc,(NN)"),
    op(0xED4D, 2, "reti", "implied"),
    op(0xED4F, 2, "ld", "r,a"),
    op(0xED50, 2, "in", "d,(c)"),
    op(0xED51, 2, "out", "(c),d"),
    op(0xED52, 2, "sbc", "hl,de"),
    op(0xED53, 4, "ld", "(NN),de"),
    op(0xED56, 2, "im", "1"),
    op(0xED57, 2, "ld", "a,i"),
    op(0xED58, 2, "in", "e,(c)"),
    op(0xED59, 2, "out", "(c),e"),
    op(0xED5A, 2, "adc", "hl,de"),
    op(0xED5B, 4, "ld", "de,(NN)"),
    op(0xED5E, 2, "im", "2"),
    op(0xED5F, 2, "ld", "a,r"),
    op(0xED60, 2, "in", "h,(c)"),
    op(0xED61, 2, "out", "(c),h"),
    op(0xED62, 2, "sbc", "hl,hl"),
    op(0xED63, 4, "ld", "(NN),hl"),
    op(0xED67, 2, "rrd", "implied"),
    op(0xED68, 2, "in", "l,(c)"),
    op(0xED69, 2, "out", "(c),l"),
    op(0xED6A, 2, "adc", "hl,hl"),
    op(0xED6B, 4, "ld", "hl,(NN)"),
    op(0xED6F, 2, "rld", "implied"),
    op(0xED72, 2, "sbc", "hl,sp"),
    op(0xED73, 4, "ld", "(NN),sp"),
    op(0xED78, 2, "in", "a,(c)"),
    op(0xED79, 2, "out", "(c),a"),
    op(0xED7A, 2, "adc", "hl,sp"),
    op(0xED7B, 4, "ld", "sp,(NN)"),
    op(0xEDA0, 2, "ldi", "implied"),
    op(0xEDA1, 2, "cpi", "implied"),
    op(0xEDA2, 2, "ini", "implied"),
    op(0xEDA3, 2, "outi", "implied"),
    op(0xEDA8, 2, "ldd", "implied"),
    op(0xEDA9, 2, "cpd", "implied"),
    op(0xEDAA, 2, "ind", "implied"),
    op(0xEDAB, 2, "outd", "implied"),
    op(0xEDB0, 2, "ldir", "implied"),
    op(0xEDB1, 2, "cpir", "implied"),
    op(0xEDB2, 2, "inir", "implied"),
    op(0xEDB3, 2, "otir", "implied"),
    op(0xEDB8, 2, "lddr", "implied"),
    op(0xEDB9, 2, "cpdr", "implied"),
    op(0xEDBA, 2, "indr", "implied"),
    op(0xEDBB, 2, "otdr", "implied"),
];

/// `$DD` prefix: IX forms. `DD CB d op` carries its opcode after the displacement.
const IX: &[OpcodeEntry] = &[
    op(0xDD09, 2, "add", "ix,bc"),
    op(0xDD19, 2, "add", "ix,de"),
    op(0xDD21, 4, "ld", "ix,NN"),
    op(0xDD22, 4, "ld", "(NN),ix"),
    op(0xDD23, 2, "inc", "ix"),
    op(0xDD24, 2, "inc", "ixh").und(),
    op(0xDD25, 2, "dec", "ixh").und(),
    op(0xDD26, 3, "ld", "ixh,N").und(),
    op(0xDD29, 2, "add", "ix,ix"),
    op(0xDD2A, 4, "ld", "ix,(NN)"),
    op(0xDD2B, 2, "dec", "ix"),
    op(0xDD2C, 2, "inc", "ixl").und(),
    op(0xDD2D, 2, "dec", "ixl").und(),
    op(0xDD2E, 3, "ld", "ixl,N").und(),
    op(0xDD34, 3, "inc", "(ix+D)"),
    op(0xDD35, 3, "dec", "(ix+D)"),
    op(0xDD36, 4, "ld", "(ix+D),N"),
    op(0xDD39, 2, "add", "ix,sp"),
    op(0xDD46, 3, "ld", "b,(ix+D)"),
    op(0xDD4E, 3, "ld", "c,(ix+D)"),
    op(0xDD56, 3, "ld", "d,(ix+D)"),
    op(0xDD5E, 3, "ld", "e,(ix+D)"),
    op(0xDD66, 3, "ld", "h,(ix+D)"),
    op(0xDD6E, 3, "ld", "l,(ix+D)"),
    op(0xDD70, 3, "ld", "(ix+D),b"),
    op(0xDD71, 3, "ld", "(ix+D),c"),
    op(0xDD72, 3, "ld", "(ix+D),d"),
    op(0xDD73, 3, "ld", "(ix+D),e"),
    op(0xDD74, 3, "ld", "(ix+D),h"),
    op(0xDD75, 3, "ld", "(ix+D),l"),
    op(0xDD77, 3, "ld", "(ix+D),a"),
    op(0xDD7C, 2, "ld", "a,ixh").und(),
    op(0xDD7D, 2, "ld", "a,ixl").und(),
    op(0xDD7E, 3, "ld", "a,(ix+D)"),
    op(0xDD84, 2, "add", "a,ixh").und(),
    op(0xDD85, 2, "add", "a,ixl").und(),
    op(0xDD86, 3, "add", "a,(ix+D)"),
    op(0xDD8E, 3, "adc", "a,(ix+D)"),
    op(0xDD96, 3, "sub", "(ix+D)"),
    op(0xDD9E, 3, "sbc", "a,(ix+D)"),
    op(0xDDA6, 3, "and", "(ix+D)"),
    op(0xDDAE, 3, "xor", "(ix+D)"),
    op(0xDDB6, 3, "or", "(ix+D)"),
    op(0xDDBE, 3, "cp", "(ix+D)"),
    op(0xDDCB, 4, "???", "(ix+D)").ext(),
    op(0xDDE1, 2, "pop", "ix"),
    op(0xDDE3, 2, "ex", "(sp),ix"),
    op(0xDDE5, 2, "push", "ix"),
    op(0xDDE9, 2, "jp", "(ix)"),
    op(0xDDF9, 2, "ld", "sp,ix"),
    op(0xDDCB06, 4, "rlc", "(ix+D)"),
    op(0xDDCB0E, 4, "rrc", "(ix+D)"),
    op(0xDDCB16, 4, "rl", "(ix+D)"),
    op(0xDDCB1E, 4, "rr", "(ix+D)"),
    op(0xDDCB26, 4, "sla", "(ix+D)"),
    op(0xDDCB2E, 4, "sra", "(ix+D)"),
    op(0xDDCB36, 4, "sll", "(ix+D)").und(),
    op(0xDDCB3E, 4, "srl", "(ix+D)"),
    op(0xDDCB46, 4, "bit", "0,(ix+D)"),
    op(0xDDCB4E, 4, "bit", "1,(ix+D)"),
    op(0xDDCB56, 4, "bit", "2,(ix+D)"),
    op(0xDDCB5E, 4, "bit", "3,(ix+D)"),
    op(0xDDCB66, 4, "bit", "4,(ix+D)"),
    op(0xDDCB6E, 4, "bit", "5,(ix+D)"),
    op(0xDDCB76, 4, "bit", "6,(ix+D)"),
    op(0xDDCB7E, 4, "bit", "7,(ix+D)"),
    op(0xDDCB86, 4, "res", "0,(ix+D)"),
    op(0xDDCB8E, 4, "res", "1,(ix+D)"),
    op(0xDDCB96, 4, "res", "2,(ix+D)"),
    op(0xDDCB9E, 4, "res", "3,(ix+D)"),
    op(0xDDCBA6, 4, "res", "4,(ix+D)"),
    op(0xDDCBAE, 4, "res", "5,(ix+D)"),
    op(0xDDCBB6, 4, "res", "6,(ix+D)"),
    op(0xDDCBBE, 4, "res", "7,(ix+D)"),
    op(0xDDCBC6, 4, "set", "0,(ix+D)"),
    op(0xDDCBCE, 4, "set", "1,(ix+D)"),
    op(0xDDCBD6, 4, "set", "2,(ix+D)"),
    op(0xDDCBDE, 4, "set", "3,(ix+D)"),
    op(0xDDCBE6, 4, "set", "4,(ix+D)"),
    op(0xDDCBEE, 4, "set", "5,(ix+D)"),
    op(0xDDCBF6, 4, "set", "6,(ix+D)"),
    op(0xDDCBFE, 4, "set", "7,(ix+D)"),
];

/// `$FD` prefix: IY forms.
const IY: &[OpcodeEntry] = &[
    op(0xFD09, 2, "add", "iy,bc"),
    op(0xFD19, 2, "add", "iy,de"),
    op(0xFD21, 4, "ld", "iy,NN"),
    op(0xFD22, 4, "ld", "(NN),iy"),
    op(0xFD23, 2, "inc", "iy"),
    op(0xFD24, 2, "inc", "iyh").und(),
    op(0xFD25, 2, "dec", "iyh").und(),
    op(0xFD26, 3, "ld", "iyh,N").und(),
    op(0xFD29, 2, "add", "iy,iy"),
    op(0xFD2A, 4, "ld", "iy,(NN)"),
    op(0xFD2B, 2, "dec", "iy"),
    op(0xFD2C, 2, "inc", "iyl").und(),
    op(0xFD2D, 2, "dec", "iyl").und(),
    op(0xFD2E, 3, "ld", "iyl,N").und(),
    op(0xFD34, 3, "inc", "(iy+D)"),
    op(0xFD35, 3, "dec", "(iy+D)"),
    op(0xFD36, 4, "ld", "(iy+D),N"),
    op(0xFD39, 2, "add", "iy,sp"),
    op(0xFD46, 3, "ld", "b,(iy+D)"),
    op(0xFD4E, 3, "ld", "c,(iy+D)"),
    op(0xFD56, 3, "ld", "d,(iy+D)"),
    op(0xFD5E, 3, "ld", "e,(iy+D)"),
    op(0xFD66, 3, "ld", "h,(iy+D)"),
    op(0xFD6E, 3, "ld", "l,(iy+D)"),
    op(0xFD70, 3, "ld", "(iy+D),b"),
    op(0xFD71, 3, "ld", "(iy+D),c"),
    op(0xFD72, 3, "ld", "(iy+D),d"),
    op(0xFD73, 3, "ld", "(iy+D),e"),
    op(0xFD74, 3, "ld", "(iy+D),h"),
    op(0xFD75, 3, "ld", "(iy+D),l"),
    op(0xFD77, 3, "ld", "(iy+D),a"),
    op(0xFD7C, 2, "ld", "a,iyh").und(),
    op(0xFD7D, 2, "ld", "a,iyl").und(),
    op(0xFD7E, 3, "ld", "a,(iy+D)"),
    op(0xFD84, 2, "add", "a,iyh").und(),
    op(0xFD85, 2, "add", "a,iyl").und(),
    op(0xFD86, 3, "add", "a,(iy+D)"),
    op(0xFD8E, 3, "adc", "a,(iy+D)"),
    op(0xFD96, 3, "sub", "(iy+D)"),
    op(0xFD9E, 3, "sbc", "a,(iy+D)"),
    op(0xFDA6, 3, "and", "(iy+D)"),
    op(0xFDAE, 3, "xor", "(iy+D)"),
    op(0xFDB6, 3, "or", "(iy+D)"),
    op(0xFDBE, 3, "cp", "(iy+D)"),
    op(0xFDCB, 4, "???", "(iy+D)").ext(),
    op(0xFDE1, 2, "pop", "iy"),
    op(0xFDE3, 2, "ex", "(sp),iy"),
    op(0xFDE5, 2, "push", "iy"),
    op(0xFDE9, 2, "jp", "(iy)"),
    op(0xFDF9, 2, "ld", "sp,iy"),
    op(0xFDCB06, 4, "rlc", "(iy+D)"),
    op(0xFDCB0E, 4, "rrc", "(iy+D)"),
    op(0xFDCB16, 4, "rl", "(iy+D)"),
    op(0xFDCB1E, 4, "rr", "(iy+D)"),
    op(0xFDCB26, 4, "sla", "(iy+D)"),
    op(0xFDCB2E, 4, "sra", "(iy+D)"),
    op(0xFDCB36, 4, "sll", "(iy+D)").und(),
    op(0xFDCB3E, 4, "srl", "(iy+D)"),
    op(0xFDCB46, 4, "bit", "0,(iy+D)"),
    op(0xFDCB4E, 4, "bit", "1,(iy+D)"),
    op(0xFDCB56, 4, "bit", "2,(iy+D)"),
    op(0xFDCB5E, 4, "bit", "3,(iy+D)"),
    op(0xFDCB66, 4, "bit", "4,(iy+D)"),
    op(0xFDCB6E, 4, "bit", "5,(iy+D)"),
    op(0xFDCB76, 4, "bit", "6,(iy+D)"),
    op(0xFDCB7E, 4, "bit", "7,(iy+D)"),
    op(0xFDCB86, 4, "res", "0,(iy+D)"),
    op(0xFDCB8E, 4, "res", "1,(iy+D)"),
    op(0xFDCB96, 4, "res", "2,(iy+D)"),
    op(0xFDCB9E, 4, "res", "3,(iy+D)"),
    op(0xFDCBA6, 4, "res", "4,(iy+D)"),
    op(0xFDCBAE, 4, "res", "5,(iy+D)"),
    op(0xFDCBB6, 4, "res", "6,(iy+D)"),
    op(0xFDCBBE, 4, "res", "7,(iy+D)"),
    op(0xFDCBC6, 4, "set", "0,(iy+D)"),
    op(0xFDCBCE, 4, "set", "1,(iy+D)"),
    op(0xFDCBD6, 4, "set", "2,(iy+D)"),
    op(0xFDCBDE, 4, "set", "3,(iy+D)"),
    op(0xFDCBE6, 4, "set", "4,(iy+D)"),
    op(0xFDCBEE, 4, "set", "5,(iy+D)"),
    op(0xFDCBF6, 4, "set", "6,(iy+D)"),
    op(0xFDCBFE, 4, "set", "7,(iy+D)"),
];

pub(super) const CPU: CpuDefinition = CpuDefinition {
    id: "z80",
    description: "Zilog Z80 8-bit microprocessor",
    leadins: &[0xCB, 0xDD, 0xED, 0xFD],
    max_length: 4,
    modes: MODES,
    opcodes: &[MAIN, CB, ED, IX, IY],
};
