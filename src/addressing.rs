//! # Addressing Modes
//!
//! Every CPU definition maps its addressing-mode keys (`"imm8"`, `"absolute"`,
//! `"(ix+d)"`, ...) to one [`OperandFormat`]. A format is a closed set of
//! rendering shapes, so label substitution can be decided per variant instead
//! of by inspecting template text.
//!
//! Numbers are always rendered as `$` followed by upper-case hex digits. Each
//! variant carries literal text placed before and after the number, which is
//! how `#$42`, `($1234),y` or `(ix+$05)` are produced.

use std::collections::HashMap;

use crate::labels::LabelResolver;

/// Byte order of a 16-bit operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Low byte first (6502, Z80).
    Little,
    /// High byte first (6800 family).
    Big,
}

impl Endian {
    /// Combine two bytes in stream order.
    pub fn word(self, first: u8, second: u8) -> u16 {
        match self {
            Endian::Little => u16::from_le_bytes([first, second]),
            Endian::Big => u16::from_be_bytes([first, second]),
        }
    }
}

/// Literal text around a rendered operand value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affix {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl Affix {
    /// No surrounding text.
    pub const BARE: Affix = Affix::new("", "");

    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    fn wrap(&self, value: &str) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

/// One element of a [`OperandFormat::Pieces`] sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    /// Literal text.
    Text(&'static str),
    /// Operand byte at the given index as `$XX`.
    Byte(usize),
    /// Two operand bytes starting at the given index as `$XXXX`.
    Word(usize, Endian),
    /// The resolved PC-relative target, label-aware.
    Target,
}

/// How the operand bytes of an instruction are rendered.
///
/// # Operand Sizes
///
/// - **0 bytes**: `Implied`, `Fixed`
/// - **1 byte**: `Byte`, `Relative8`, `RegisterPair`
/// - **2 bytes**: `Word`, `Relative16`
/// - **any**: `Pieces`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandFormat {
    /// No operand text at all.
    ///
    /// Examples: NOP, RTS, ABX
    Implied,

    /// Operand text that does not depend on any byte.
    ///
    /// Example: `a` in `LSR A`, `hl,de` in `EX DE,HL`
    Fixed(&'static str),

    /// A single byte: immediate data, zero/direct page, index offset.
    ///
    /// Example: `#$10`, `$80,x`, `(ix+$05)`
    Byte(Affix),

    /// A 16-bit value. Label-aware formats treat it as an address and replace
    /// it with a symbol name when one is defined there.
    ///
    /// Example: `$1234`, `#$ABCD`, `($FFFC)`
    Word {
        order: Endian,
        affix: Affix,
        label: bool,
    },

    /// A signed 8-bit PC-relative displacement. Always label-aware.
    ///
    /// Example: `BNE $1004`
    Relative8(Affix),

    /// A signed 16-bit PC-relative displacement. Always label-aware.
    ///
    /// Example: `LBNE $2000`
    Relative16 { order: Endian, affix: Affix },

    /// A post-byte naming a source and destination register in its high and
    /// low nibble.
    ///
    /// Example: `TFR X,Y`
    RegisterPair(&'static [&'static str; 16]),

    /// Arbitrary text interleaved with operand bytes, for shapes the other
    /// variants do not cover.
    ///
    /// Example: `(ix+$05),$FF`
    Pieces(&'static [Piece]),
}

/// Values an operand is rendered from.
#[derive(Debug, Clone, Copy)]
pub struct OperandContext<'a> {
    /// Operand bytes following the opcode (and any leadin byte).
    pub bytes: &'a [u8],
    /// Resolved target for PC-relative instructions.
    pub target: Option<u16>,
    /// Active label table, if any.
    pub labels: Option<&'a LabelResolver>,
}

impl OperandFormat {
    /// Number of operand bytes this format consumes, for table validation.
    pub fn operand_bytes(&self) -> usize {
        match self {
            OperandFormat::Implied | OperandFormat::Fixed(_) => 0,
            OperandFormat::Byte(_) | OperandFormat::Relative8(_) | OperandFormat::RegisterPair(_) => 1,
            OperandFormat::Word { .. } | OperandFormat::Relative16 { .. } => 2,
            OperandFormat::Pieces(pieces) => pieces
                .iter()
                .map(|piece| match piece {
                    Piece::Text(_) | Piece::Target => 0,
                    Piece::Byte(index) => index + 1,
                    Piece::Word(index, _) => index + 2,
                })
                .max()
                .unwrap_or(0),
        }
    }

    /// Whether a defined label may replace the rendered value.
    pub fn is_label_aware(&self) -> bool {
        match self {
            OperandFormat::Word { label, .. } => *label,
            OperandFormat::Relative8(_) | OperandFormat::Relative16 { .. } => true,
            OperandFormat::Pieces(pieces) => pieces.contains(&Piece::Target),
            _ => false,
        }
    }

    /// Render the operand text.
    ///
    /// Missing operand bytes are shown as `??` rather than guessed.
    pub fn render(&self, ctx: &OperandContext<'_>) -> String {
        let bytes = ctx.bytes;
        match *self {
            OperandFormat::Implied => String::new(),
            OperandFormat::Fixed(text) => text.to_string(),
            OperandFormat::Byte(affix) => affix.wrap(&hex_byte(bytes.first().copied())),
            OperandFormat::Word {
                order,
                affix,
                label,
            } => {
                let value = word_at(bytes, 0, order);
                if label {
                    affix.wrap(&address_or_label(value, ctx.labels))
                } else {
                    affix.wrap(&hex_word(value))
                }
            }
            OperandFormat::Relative8(affix) => {
                let value = ctx
                    .target
                    .or_else(|| bytes.last().map(|&b| u16::from(b)));
                affix.wrap(&address_or_label(value, ctx.labels))
            }
            OperandFormat::Relative16 { order, affix } => {
                let value = ctx.target.or_else(|| {
                    let start = bytes.len().checked_sub(2)?;
                    word_at(bytes, start, order)
                });
                affix.wrap(&address_or_label(value, ctx.labels))
            }
            OperandFormat::RegisterPair(names) => match bytes.first() {
                Some(&post) => format!(
                    "{},{}",
                    names[usize::from(post >> 4)],
                    names[usize::from(post & 0x0F)]
                ),
                None => "??,??".to_string(),
            },
            OperandFormat::Pieces(pieces) => pieces
                .iter()
                .map(|piece| match *piece {
                    Piece::Text(text) => text.to_string(),
                    Piece::Byte(index) => hex_byte(bytes.get(index).copied()),
                    Piece::Word(index, order) => hex_word(word_at(bytes, index, order)),
                    Piece::Target => address_or_label(
                        ctx.target.or_else(|| bytes.last().map(|&b| u16::from(b))),
                        ctx.labels,
                    ),
                })
                .collect(),
        }
    }
}

fn word_at(bytes: &[u8], index: usize, order: Endian) -> Option<u16> {
    match (bytes.get(index), bytes.get(index + 1)) {
        (Some(&first), Some(&second)) => Some(order.word(first, second)),
        _ => None,
    }
}

fn hex_byte(value: Option<u8>) -> String {
    match value {
        Some(b) => format!("${:02X}", b),
        None => "$??".to_string(),
    }
}

fn hex_word(value: Option<u16>) -> String {
    match value {
        Some(w) => format!("${:04X}", w),
        None => "$????".to_string(),
    }
}

fn address_or_label(value: Option<u16>, labels: Option<&LabelResolver>) -> String {
    match (value, labels) {
        (Some(address), Some(labels)) => match labels.substitute(address) {
            Some(name) => name.to_string(),
            None => hex_word(value),
        },
        _ => hex_word(value),
    }
}

/// Immutable map from addressing-mode key to operand format.
#[derive(Debug, Clone)]
pub struct AddressModeFormatter {
    modes: HashMap<&'static str, OperandFormat>,
}

impl AddressModeFormatter {
    /// Build the map from a CPU definition's mode list.
    pub fn new(modes: &[(&'static str, OperandFormat)]) -> Self {
        Self {
            modes: modes.iter().copied().collect(),
        }
    }

    /// Look up the format for a mode key.
    pub fn get(&self, mode: &str) -> Option<&OperandFormat> {
        self.modes.get(mode)
    }

    /// Number of registered modes.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(bytes: &[u8]) -> OperandContext<'_> {
        OperandContext {
            bytes,
            target: None,
            labels: None,
        }
    }

    #[test]
    fn test_render_byte_with_affix() {
        let format = OperandFormat::Byte(Affix::new("#", ""));
        assert_eq!(format.render(&ctx(&[0x42])), "#$42");

        let format = OperandFormat::Byte(Affix::new("(", "),y"));
        assert_eq!(format.render(&ctx(&[0x40])), "($40),y");
    }

    #[test]
    fn test_render_word_byte_order() {
        let le = OperandFormat::Word {
            order: Endian::Little,
            affix: Affix::BARE,
            label: true,
        };
        let be = OperandFormat::Word {
            order: Endian::Big,
            affix: Affix::BARE,
            label: true,
        };
        assert_eq!(le.render(&ctx(&[0x00, 0x80])), "$8000");
        assert_eq!(be.render(&ctx(&[0x00, 0x80])), "$0080");
    }

    #[test]
    fn test_render_missing_bytes() {
        let format = OperandFormat::Word {
            order: Endian::Little,
            affix: Affix::new("(", ")"),
            label: false,
        };
        assert_eq!(format.render(&ctx(&[0x12])), "($????)");
        assert_eq!(OperandFormat::Byte(Affix::BARE).render(&ctx(&[])), "$??");
    }

    #[test]
    fn test_render_relative_prefers_target() {
        let format = OperandFormat::Relative8(Affix::BARE);
        let context = OperandContext {
            bytes: &[0x02],
            target: Some(0x1004),
            labels: None,
        };
        assert_eq!(format.render(&context), "$1004");
    }

    #[test]
    fn test_render_register_pair() {
        const NAMES: [&str; 16] = [
            "d", "x", "y", "u", "s", "pc", "?", "?", "a", "b", "cc", "dp", "?", "?", "?", "?",
        ];
        let format = OperandFormat::RegisterPair(&NAMES);
        assert_eq!(format.render(&ctx(&[0x12])), "x,y");
        assert_eq!(format.render(&ctx(&[0x8B])), "a,dp");
    }

    #[test]
    fn test_render_pieces() {
        const PIECES: [Piece; 4] = [
            Piece::Text("(ix+"),
            Piece::Byte(0),
            Piece::Text("),"),
            Piece::Byte(1),
        ];
        let format = OperandFormat::Pieces(&PIECES);
        assert_eq!(format.render(&ctx(&[0x05, 0xFF])), "(ix+$05),$FF");
        assert_eq!(format.operand_bytes(), 2);
    }

    #[test]
    fn test_label_awareness() {
        assert!(OperandFormat::Relative8(Affix::BARE).is_label_aware());
        assert!(!OperandFormat::Byte(Affix::BARE).is_label_aware());
        assert!(!OperandFormat::Word {
            order: Endian::Little,
            affix: Affix::new("#", ""),
            label: false,
        }
        .is_label_aware());
    }

    #[test]
    fn test_formatter_lookup() {
        let formatter = AddressModeFormatter::new(&[
            ("inherent", OperandFormat::Implied),
            ("imm8", OperandFormat::Byte(Affix::new("#", ""))),
        ]);
        assert_eq!(formatter.len(), 2);
        assert_eq!(formatter.get("inherent"), Some(&OperandFormat::Implied));
        assert!(formatter.get("extended").is_none());
    }
}
