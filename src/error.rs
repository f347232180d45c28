//! Error types for table loading and disassembly.

use thiserror::Error;

/// Errors that abort a disassembly run.
///
/// Running out of input is never an error: a clean end of data produces the
/// `end` trailer and a short read mid-instruction quietly truncates the
/// listing. See [`Outcome`](crate::disassembler::Outcome).
#[derive(Error, Debug)]
pub enum DisasmError {
    /// No CPU definition is registered under the requested identifier.
    #[error("CPU '{name}' is not supported. The following CPUs are supported: {}", .supported.join(" "))]
    UnknownCpu {
        name: String,
        supported: Vec<&'static str>,
    },

    /// An opcode entry names an addressing mode the CPU's mode map lacks.
    #[error("mode '{mode}' of opcode ${opcode:02X} not found in address mode table")]
    UnknownMode { mode: &'static str, opcode: u32 },

    /// A line of a label file could not be parsed.
    #[error("invalid label definition on line {line}: {reason}")]
    InvalidLabel { line: usize, reason: String },

    /// A line of a block override file could not be parsed.
    #[error("invalid block definition on line {line}: {reason}")]
    InvalidBlock { line: usize, reason: String },

    /// Reading the input or writing the listing failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DisasmError {
    /// Creates a new UnknownCpu error listing every registered identifier.
    pub fn unknown_cpu(name: impl Into<String>) -> Self {
        Self::UnknownCpu {
            name: name.into(),
            supported: crate::cpus::supported().collect(),
        }
    }

    /// Creates a new InvalidLabel error.
    pub fn invalid_label(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidLabel {
            line,
            reason: reason.into(),
        }
    }

    /// Creates a new InvalidBlock error.
    pub fn invalid_block(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidBlock {
            line,
            reason: reason.into(),
        }
    }
}

/// Parse a hexadecimal address field, accepting an optional `0x` or `$` prefix.
pub(crate) fn parse_hex_address(field: &str) -> Result<u16, String> {
    let field = field.trim();
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .or_else(|| field.strip_prefix('$'))
        .unwrap_or(field);
    let value = u32::from_str_radix(digits, 16)
        .map_err(|e| format!("'{}' is not a hex address: {}", field, e))?;
    u16::try_from(value).map_err(|_| format!("address ${:X} is outside $0000-$FFFF", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_address_prefixes() {
        assert_eq!(parse_hex_address("2000"), Ok(0x2000));
        assert_eq!(parse_hex_address(" 0xC000 "), Ok(0xC000));
        assert_eq!(parse_hex_address("$ff"), Ok(0x00FF));
    }

    #[test]
    fn test_parse_hex_address_rejects_out_of_range() {
        assert!(parse_hex_address("10000").is_err());
        assert!(parse_hex_address("zz").is_err());
        assert!(parse_hex_address("").is_err());
    }

    #[test]
    fn test_unknown_cpu_lists_supported() {
        let err = DisasmError::unknown_cpu("8086");
        let message = err.to_string();
        assert!(message.contains("'8086'"));
        assert!(message.contains("6502"));
        assert!(message.contains("z80"));
    }
}
