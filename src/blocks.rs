//! Block overrides: address ranges shown as data instead of instructions.
//!
//! A block file has one `start-hex,end-hex,kind` line per region. The kind is
//! a single character:
//!
//! | code | kind | unit | directive |
//! |------|------|------|-----------|
//! | `a` | ASCII characters | 1 byte | `.ascii` |
//! | `b` | bytes (default) | 1 byte | `.byte` |
//! | `W` | big-endian words | 2 bytes | `.dw` |
//! | `w` | little-endian words | 2 bytes | `.word` |
//! | `s` | one string up to the region end | rest of region | `.string` |

use std::io::{self, Read};

use crate::disassembler::{Body, Line};
use crate::error::{parse_hex_address, DisasmError};
use crate::stream::ByteStream;

/// How the bytes of a region are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Ascii,
    Byte,
    WordBigEndian,
    WordLittleEndian,
    String,
}

impl BlockKind {
    /// Map a kind character; anything unrecognised is `Byte`.
    pub fn from_code(code: Option<char>) -> Self {
        match code {
            Some('a') => BlockKind::Ascii,
            Some('W') => BlockKind::WordBigEndian,
            Some('w') => BlockKind::WordLittleEndian,
            Some('s') => BlockKind::String,
            _ => BlockKind::Byte,
        }
    }
}

/// An inclusive address range with its data kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: u16,
    pub end: u16,
    pub kind: BlockKind,
}

/// Result of reading one data unit from a region.
#[derive(Debug)]
pub(crate) enum Fetch {
    /// A complete unit.
    Unit(Line),
    /// The input ended inside the unit. String runs still report what they
    /// collected.
    Truncated(Option<Line>),
}

impl Region {
    pub fn contains(&self, address: u16) -> bool {
        self.start <= address && address <= self.end
    }

    /// Read and render the unit starting at `address`, which must lie inside
    /// the region.
    pub(crate) fn read_unit<R: Read>(
        &self,
        address: u16,
        stream: &mut ByteStream<R>,
    ) -> io::Result<Fetch> {
        let unit = match self.kind {
            BlockKind::Ascii | BlockKind::Byte => 1,
            BlockKind::WordBigEndian | BlockKind::WordLittleEndian => 2,
            BlockKind::String => usize::from(self.end - address) + 1,
        };
        let mut bytes = Vec::with_capacity(unit);
        let complete = stream.read_into(&mut bytes, unit)?;

        if !complete {
            let partial = match self.kind {
                BlockKind::String if !bytes.is_empty() => Some(string_line(address, bytes)),
                _ => None,
            };
            return Ok(Fetch::Truncated(partial));
        }

        let (name, value) = match self.kind {
            BlockKind::Ascii => {
                let b = bytes[0];
                let value = if is_printable(b) {
                    char::from(b).to_string()
                } else {
                    format!("${:02X}", b)
                };
                (".ascii", value)
            }
            BlockKind::Byte => (".byte", format!("${:02X}", bytes[0])),
            BlockKind::WordBigEndian => (
                ".dw",
                format!("${:04X}", u16::from_be_bytes([bytes[0], bytes[1]])),
            ),
            BlockKind::WordLittleEndian => (
                ".word",
                format!("${:04X}", u16::from_le_bytes([bytes[0], bytes[1]])),
            ),
            BlockKind::String => return Ok(Fetch::Unit(string_line(address, bytes))),
        };
        Ok(Fetch::Unit(Line {
            address,
            bytes,
            body: Body::Directive { name, value },
        }))
    }
}

fn string_line(address: u16, bytes: Vec<u8>) -> Line {
    let mut text = String::with_capacity(bytes.len());
    for &b in &bytes {
        if is_printable(b) {
            text.push(char::from(b));
        } else {
            text.push_str(&format!("\\x{:02x}", b));
        }
    }
    Line {
        address,
        bytes,
        body: Body::Directive {
            name: ".string",
            value: format!("'{}'", text),
        },
    }
}

/// Printable ASCII, space through tilde.
pub(crate) fn is_printable(b: u8) -> bool {
    (0x20..=0x7E).contains(&b)
}

/// Ordered list of block regions.
#[derive(Debug, Clone, Default)]
pub struct BlockOverrideTable {
    regions: Vec<Region>,
}

impl BlockOverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region. Overlaps are not checked.
    pub fn add(&mut self, start: u16, end: u16, kind: BlockKind) {
        self.regions.push(Region { start, end, kind });
    }

    /// Parse block definitions, skipping blank lines.
    pub fn parse(text: &str) -> Result<Self, DisasmError> {
        let mut table = BlockOverrideTable::new();
        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split(',');
            let start = fields.next().unwrap_or_default();
            let end = fields
                .next()
                .ok_or_else(|| DisasmError::invalid_block(line_no, "missing end address"))?;
            let start =
                parse_hex_address(start).map_err(|e| DisasmError::invalid_block(line_no, e))?;
            let end = parse_hex_address(end).map_err(|e| DisasmError::invalid_block(line_no, e))?;
            let kind = BlockKind::from_code(fields.next().and_then(|f| f.trim().chars().next()));
            table.add(start, end, kind);
        }
        Ok(table)
    }

    /// First region, in declaration order, containing `address`.
    pub fn region_at(&self, address: u16) -> Option<&Region> {
        self.regions.iter().find(|region| region.contains(address))
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
