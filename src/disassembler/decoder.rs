//! Instruction decoder: turns the bytes at the cursor into one listing line.

use std::io::Read;

use crate::addressing::{AddressModeFormatter, OperandContext, OperandFormat};
use crate::blocks::is_printable;
use crate::disassembler::{Body, DisassemblyOptions, Line};
use crate::error::DisasmError;
use crate::labels::LabelResolver;
use crate::opcodes::{Descriptor, InstructionTable, INVALID_MNEMONIC};
use crate::stream::ByteStream;

/// Current decode address. Wraps at 64K.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub address: u16,
}

impl Cursor {
    pub fn new(address: u16) -> Self {
        Self { address }
    }

    /// Move past `length` consumed bytes.
    pub fn advance(&mut self, length: usize) {
        // Truncation is fine: only the low 16 bits of the sum matter.
        self.address = self.address.wrapping_add(length as u16);
    }
}

/// Result of decoding at one address.
#[derive(Debug)]
pub enum Decoded {
    Line(Line),
    /// The input ended exactly at an instruction boundary.
    EndOfData,
    /// The input ended inside an instruction.
    Truncated,
}

/// Target of an 8-bit PC-relative displacement.
///
/// The displacement counts from the address following the instruction.
pub fn relative_target(address: u16, displacement: u8, length: usize) -> u16 {
    let next = address.wrapping_add(length as u16);
    if displacement < 0x80 {
        next.wrapping_add(u16::from(displacement))
    } else {
        next.wrapping_sub(0x100 - u16::from(displacement))
    }
}

/// Target of a 16-bit PC-relative displacement.
pub fn relative16_target(address: u16, displacement: u16, length: usize) -> u16 {
    address
        .wrapping_add(length as u16)
        .wrapping_add(displacement)
}

/// Borrowed view of everything needed to decode one instruction.
pub struct Decoder<'a> {
    pub instructions: &'a InstructionTable,
    pub modes: &'a AddressModeFormatter,
    pub leadins: &'a [u8],
    pub labels: Option<&'a LabelResolver>,
    pub options: &'a DisassemblyOptions,
}

impl<'a> Decoder<'a> {
    /// Decode the instruction at `address`, reading its bytes from `stream`.
    pub fn decode<R: Read>(
        &self,
        address: u16,
        stream: &mut ByteStream<R>,
    ) -> Result<Decoded, DisasmError> {
        let first = match stream.next_byte()? {
            Some(b) => b,
            None => return Ok(Decoded::EndOfData),
        };
        let mut raw = vec![first];
        let mut opcode = u32::from(first);

        if self.leadins.contains(&first) {
            match stream.next_byte()? {
                Some(b) => {
                    raw.push(b);
                    opcode = (opcode << 8) | u32::from(b);
                }
                None => return Ok(Decoded::Truncated),
            }
        }

        let descriptor = match self.lookup(opcode) {
            Some(descriptor) => descriptor,
            None => return Ok(Decoded::Line(self.invalid(address, raw))),
        };
        let format = self.format_for(descriptor, opcode)?;

        let prefix = raw.len();
        let length = usize::from(descriptor.length).max(prefix);
        if !stream.read_into(&mut raw, length - prefix)? {
            return Ok(Decoded::Truncated);
        }

        if descriptor.flags.extended {
            return self.decode_extended(address, opcode, raw, prefix);
        }

        let operand = self.render(format, descriptor, address, &raw[prefix..], length);
        Ok(Decoded::Line(self.finish(
            address,
            raw,
            descriptor.mnemonic,
            operand,
        )))
    }

    /// Instructions whose real opcode follows the displacement byte.
    fn decode_extended(
        &self,
        address: u16,
        opcode: u32,
        raw: Vec<u8>,
        prefix: usize,
    ) -> Result<Decoded, DisasmError> {
        let operands = &raw[prefix..];
        let last = match operands.last() {
            Some(&b) => b,
            None => return Ok(Decoded::Line(self.invalid(address, raw))),
        };
        let key = (opcode << 8) | u32::from(last);
        let descriptor = match self.lookup(key) {
            Some(descriptor) => descriptor,
            None => return Ok(Decoded::Line(self.invalid(address, raw))),
        };
        let format = self.format_for(descriptor, key)?;
        let operand = self.render(format, descriptor, address, &operands[..1], raw.len());
        Ok(Decoded::Line(self.finish(
            address,
            raw,
            descriptor.mnemonic,
            operand,
        )))
    }

    fn lookup(&self, opcode: u32) -> Option<&'a Descriptor> {
        self.instructions
            .get(opcode)
            .filter(|d| self.options.undocumented || !d.flags.undocumented)
    }

    fn format_for(
        &self,
        descriptor: &Descriptor,
        opcode: u32,
    ) -> Result<&'a OperandFormat, DisasmError> {
        self.modes
            .get(descriptor.mode)
            .ok_or(DisasmError::UnknownMode {
                mode: descriptor.mode,
                opcode,
            })
    }

    fn render(
        &self,
        format: &OperandFormat,
        descriptor: &Descriptor,
        address: u16,
        operands: &[u8],
        length: usize,
    ) -> String {
        let target = if descriptor.flags.pc_relative {
            match *format {
                OperandFormat::Relative16 { order, .. } => operands
                    .len()
                    .checked_sub(2)
                    .map(|start| order.word(operands[start], operands[start + 1]))
                    .map(|displacement| relative16_target(address, displacement, length)),
                _ => operands
                    .last()
                    .map(|&displacement| relative_target(address, displacement, length)),
            }
        } else {
            None
        };

        format.render(&OperandContext {
            bytes: operands,
            target,
            labels: self.labels,
        })
    }

    fn invalid(&self, address: u16, raw: Vec<u8>) -> Line {
        self.finish(address, raw, INVALID_MNEMONIC, String::new())
    }

    /// Build the line, turning invalid opcodes into `.byte` data unless
    /// they are to be shown as `???`.
    fn finish(
        &self,
        address: u16,
        raw: Vec<u8>,
        mnemonic: &'static str,
        operand: String,
    ) -> Line {
        let body = if mnemonic == INVALID_MNEMONIC && !self.options.show_invalid {
            Body::Directive {
                name: ".byte",
                value: data_bytes(&raw),
            }
        } else {
            Body::Instruction { mnemonic, operand }
        };
        Line {
            address,
            bytes: raw,
            body,
        }
    }
}

fn data_bytes(raw: &[u8]) -> String {
    match raw {
        [b] if is_printable(*b) => format!("'{}'", char::from(*b)),
        _ => raw
            .iter()
            .map(|b| format!("${:02X}", b))
            .collect::<Vec<_>>()
            .join(","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::{Affix, Endian};
    use crate::opcodes::OpcodeEntry;

    const ENTRIES: [OpcodeEntry; 6] = [
        OpcodeEntry::new(0xA9, 2, "lda", "immediate"),
        OpcodeEntry::new(0xD0, 2, "bne", "relative").pcr(),
        OpcodeEntry::new(0xEA, 1, "nop", "implied"),
        OpcodeEntry::new(0x1026, 4, "lbne", "rel16").pcr(),
        OpcodeEntry::new(0x07, 2, "slo", "immediate").und(),
        OpcodeEntry::new(0x3A, 1, "abx", "missing"),
    ];

    struct Fixture {
        instructions: InstructionTable,
        modes: AddressModeFormatter,
        options: DisassemblyOptions,
    }

    impl Fixture {
        fn new(options: DisassemblyOptions) -> Self {
            Self {
                instructions: InstructionTable::build(&[&ENTRIES]),
                modes: AddressModeFormatter::new(&[
                    ("implied", OperandFormat::Implied),
                    ("immediate", OperandFormat::Byte(Affix::new("#", ""))),
                    ("relative", OperandFormat::Relative8(Affix::BARE)),
                    (
                        "rel16",
                        OperandFormat::Relative16 {
                            order: Endian::Big,
                            affix: Affix::BARE,
                        },
                    ),
                ]),
                options,
            }
        }

        fn decode(&self, address: u16, bytes: &[u8]) -> Result<Decoded, DisasmError> {
            let decoder = Decoder {
                instructions: &self.instructions,
                modes: &self.modes,
                leadins: &[0x10],
                labels: None,
                options: &self.options,
            };
            decoder.decode(address, &mut ByteStream::new(bytes))
        }
    }

    fn body(decoded: Decoded) -> Body {
        match decoded {
            Decoded::Line(line) => line.body,
            other => panic!("expected a line, got {:?}", other),
        }
    }

    fn instruction(mnemonic: &'static str, operand: &str) -> Body {
        Body::Instruction {
            mnemonic,
            operand: operand.to_string(),
        }
    }

    #[test]
    fn test_relative_target_arithmetic() {
        assert_eq!(relative_target(0x1000, 0x02, 2), 0x1004);
        assert_eq!(relative_target(0x1000, 0xFE, 2), 0x1000);
        assert_eq!(relative_target(0x0000, 0x80, 2), 0xFF82);
        assert_eq!(relative_target(0xFFFE, 0x7F, 2), 0x007F);
        assert_eq!(relative16_target(0x2000, 0xFFFC, 4), 0x2000);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut cursor = Cursor::new(0xFFFF);
        cursor.advance(2);
        assert_eq!(cursor.address, 0x0001);
    }

    #[test]
    fn test_decode_immediate() {
        let fixture = Fixture::new(DisassemblyOptions::default());
        match fixture.decode(0x8000, &[0xA9, 0x42]).unwrap() {
            Decoded::Line(line) => {
                assert_eq!(line.address, 0x8000);
                assert_eq!(line.bytes, vec![0xA9, 0x42]);
                assert_eq!(line.body, instruction("lda", "#$42"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_decode_branch_targets() {
        let fixture = Fixture::new(DisassemblyOptions::default());
        assert_eq!(
            body(fixture.decode(0x1000, &[0xD0, 0x02]).unwrap()),
            instruction("bne", "$1004")
        );
        assert_eq!(
            body(fixture.decode(0x1000, &[0xD0, 0xFE]).unwrap()),
            instruction("bne", "$1000")
        );
        assert_eq!(
            body(fixture.decode(0x2000, &[0x10, 0x26, 0xFF, 0xFC]).unwrap()),
            instruction("lbne", "$2000")
        );
    }

    #[test]
    fn test_decode_end_and_truncation() {
        let fixture = Fixture::new(DisassemblyOptions::default());
        assert!(matches!(fixture.decode(0, &[]).unwrap(), Decoded::EndOfData));
        assert!(matches!(fixture.decode(0, &[0x10]).unwrap(), Decoded::Truncated));
        assert!(matches!(fixture.decode(0, &[0xA9]).unwrap(), Decoded::Truncated));
        assert!(matches!(
            fixture.decode(0, &[0x10, 0x26, 0x00]).unwrap(),
            Decoded::Truncated
        ));
    }

    #[test]
    fn test_decode_invalid_as_data() {
        let fixture = Fixture::new(DisassemblyOptions::default());
        assert_eq!(
            body(fixture.decode(0, &[0xFF]).unwrap()),
            Body::Directive {
                name: ".byte",
                value: "$FF".to_string()
            }
        );
        assert_eq!(
            body(fixture.decode(0, &[b'A']).unwrap()),
            Body::Directive {
                name: ".byte",
                value: "'A'".to_string()
            }
        );
        match fixture.decode(0, &[0x10, 0x99]).unwrap() {
            Decoded::Line(line) => {
                assert_eq!(line.bytes.len(), 2);
                assert_eq!(
                    line.body,
                    Body::Directive {
                        name: ".byte",
                        value: "$10,$99".to_string()
                    }
                );
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_decode_invalid_shown() {
        let fixture = Fixture::new(DisassemblyOptions {
            show_invalid: true,
            ..DisassemblyOptions::default()
        });
        assert_eq!(
            body(fixture.decode(0, &[0xFF]).unwrap()),
            instruction("???", "")
        );
    }

    #[test]
    fn test_undocumented_gated() {
        let hidden = Fixture::new(DisassemblyOptions::default());
        match hidden.decode(0, &[0x07, 0x10]).unwrap() {
            Decoded::Line(line) => {
                assert_eq!(line.bytes, vec![0x07]);
                assert!(matches!(line.body, Body::Directive { name: ".byte", .. }));
            }
            other => panic!("unexpected {:?}", other),
        }

        let shown = Fixture::new(DisassemblyOptions {
            undocumented: true,
            ..DisassemblyOptions::default()
        });
        assert_eq!(
            body(shown.decode(0, &[0x07, 0x10]).unwrap()),
            instruction("slo", "#$10")
        );
    }

    #[test]
    fn test_unknown_mode_is_fatal() {
        let fixture = Fixture::new(DisassemblyOptions::default());
        let err = fixture.decode(0, &[0x3A]).unwrap_err();
        assert!(matches!(
            err,
            DisasmError::UnknownMode {
                mode: "missing",
                opcode: 0x3A
            }
        ));
    }
}
