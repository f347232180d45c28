//! Text layout of listing lines.
//!
//! Listing mode:
//!
//! ```text
//! 1000              .org     $1000
//!
//! 1000  A9 42       lda      #$42
//! 1002  8D 00 80    sta      $8000
//!
//! 1005              end
//! ```
//!
//! Operand-only mode drops the address and byte columns and indents every
//! line by three spaces, which most cross assemblers accept as-is.

use crate::disassembler::{Body, Line};

/// Column layout for one CPU and display mode.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    listing: bool,
    max_length: usize,
}

impl Layout {
    /// `max_length` sizes the byte column; it is the CPU's longest
    /// instruction.
    pub fn new(listing: bool, max_length: u8) -> Self {
        Self {
            listing,
            max_length: usize::from(max_length.max(1)),
        }
    }

    /// The `.org` directive opening the listing.
    pub fn origin(&self, address: u16) -> String {
        let mut text = self.prefix(address, &[]);
        text.push_str(&format_body(&Body::Directive {
            name: ".org",
            value: format!("${:04X}", address),
        }));
        text
    }

    /// The `end` trailer written after a clean end of input.
    pub fn trailer(&self, address: u16) -> String {
        let mut text = self.prefix(address, &[]);
        text.push_str("end");
        text
    }

    /// A standalone label line.
    pub fn label(&self, name: &str) -> String {
        format!("{}:", name)
    }

    /// An instruction or data line.
    pub fn line(&self, line: &Line) -> String {
        let mut text = self.prefix(line.address, &line.bytes);
        text.push_str(&format_body(&line.body));
        text
    }

    fn prefix(&self, address: u16, bytes: &[u8]) -> String {
        if !self.listing {
            return "   ".to_string();
        }
        // Long string blocks only show as many bytes as the longest instruction.
        let shown: Vec<String> = bytes
            .iter()
            .take(self.max_length)
            .map(|b| format!("{:02X}", b))
            .collect();
        format!(
            "{:04X}  {:<width$}    ",
            address,
            shown.join(" "),
            width = self.max_length * 3 - 1
        )
    }
}

/// Format the mnemonic/directive part of a line.
pub fn format_body(body: &Body) -> String {
    match body {
        Body::Instruction { mnemonic, operand } if operand.is_empty() => mnemonic.to_string(),
        Body::Instruction { mnemonic, operand } => format!("{:<5}    {}", mnemonic, operand),
        Body::Directive { name, value } => format!("{:<8} {}", name, value),
    }
}
