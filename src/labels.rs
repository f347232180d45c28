//! Label definitions for symbolic output.
//!
//! A label file has one `name,hex-address` pair per line. Labels are printed
//! as `NAME:` lines where the listing reaches their address and replace
//! matching addresses in label-aware operands.

use std::collections::HashMap;

use crate::error::{parse_hex_address, DisasmError};

/// File suffix appended to the input file's stem to find its labels.
pub const LABEL_FILE_EXTENSION: &str = "lbl";

/// A named address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub address: u16,
}

/// Exact-address label lookup.
///
/// Several labels may share an address; the first one declared is the one
/// used for both queries.
#[derive(Debug, Clone, Default)]
pub struct LabelResolver {
    labels: Vec<Label>,
    first_at: HashMap<u16, usize>,
}

impl LabelResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label. Later labels at an already-labelled address are kept but
    /// never matched.
    pub fn add(&mut self, name: impl Into<String>, address: u16) {
        let index = self.labels.len();
        self.labels.push(Label {
            name: name.into(),
            address,
        });
        self.first_at.entry(address).or_insert(index);
    }

    /// Parse label definitions, skipping blank lines.
    pub fn parse(text: &str) -> Result<Self, DisasmError> {
        let mut resolver = LabelResolver::new();
        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split(',');
            let name = fields.next().unwrap_or_default().trim();
            let address = fields
                .next()
                .ok_or_else(|| DisasmError::invalid_label(line_no, "missing address field"))?;
            if name.is_empty() {
                return Err(DisasmError::invalid_label(line_no, "empty label name"));
            }
            let address =
                parse_hex_address(address).map_err(|e| DisasmError::invalid_label(line_no, e))?;
            resolver.add(name, address);
        }
        Ok(resolver)
    }

    /// Label to print on its own line when the cursor reaches `address`.
    pub fn label_at(&self, address: u16) -> Option<&str> {
        self.first_at
            .get(&address)
            .map(|&index| self.labels[index].name.as_str())
    }

    /// Symbol to print instead of the resolved operand `value`.
    pub fn substitute(&self, value: u16) -> Option<&str> {
        self.label_at(value)
    }

    /// All labels in declaration order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
