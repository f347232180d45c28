//! WASM API for the disassembler.
//!
//! Provides JavaScript-callable interfaces for producing listings from byte
//! buffers.

use crate::{cpus, Disassembler, DisassemblyOptions, LabelResolver, Outcome};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<crate::DisasmError> for JsError {
    fn from(err: crate::DisasmError) -> Self {
        JsError {
            message: err.to_string(),
        }
    }
}

/// Result of one disassembly run
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct Listing {
    text: String,
    final_address: u16,
    truncated: bool,
}

#[wasm_bindgen]
impl Listing {
    /// Full listing text, one line per `\n`
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    /// Listing lines as a JavaScript array of strings
    pub fn lines(&self) -> js_sys::Array {
        self.text.lines().map(JsValue::from).collect()
    }

    #[wasm_bindgen(getter)]
    pub fn final_address(&self) -> u16 {
        self.final_address
    }

    /// True if the input ended in the middle of an instruction
    #[wasm_bindgen(getter)]
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

/// Disassembler handle for JavaScript callers
#[wasm_bindgen]
pub struct WasmDisassembler {
    disassembler: Disassembler,
}

#[wasm_bindgen]
impl WasmDisassembler {
    /// Create a disassembler for the given CPU identifier
    #[wasm_bindgen(constructor)]
    pub fn new(
        cpu: &str,
        start_address: u16,
        listing: bool,
        undocumented: bool,
        show_invalid: bool,
    ) -> Result<WasmDisassembler, JsError> {
        let options = DisassemblyOptions {
            start_address,
            listing,
            undocumented,
            show_invalid,
        };
        Ok(WasmDisassembler {
            disassembler: Disassembler::for_cpu(cpu)?.with_options(options),
        })
    }

    /// Load labels from the text of a label file
    pub fn set_labels(mut self, text: &str) -> Result<WasmDisassembler, JsError> {
        let labels = LabelResolver::parse(text)?;
        self.disassembler = self.disassembler.with_labels(labels);
        Ok(self)
    }

    /// Load block overrides from the text of a block file
    pub fn set_blocks(mut self, text: &str) -> Result<WasmDisassembler, JsError> {
        let blocks = crate::BlockOverrideTable::parse(text)?;
        self.disassembler = self.disassembler.with_blocks(blocks);
        Ok(self)
    }

    /// Disassemble a byte buffer
    pub fn disassemble(&self, bytes: &[u8]) -> Result<Listing, JsError> {
        let mut out = Vec::new();
        let summary = self.disassembler.run(bytes, &mut out)?;
        Ok(Listing {
            text: String::from_utf8_lossy(&out).into_owned(),
            final_address: summary.final_address,
            truncated: summary.outcome == Outcome::Truncated,
        })
    }

    /// Identifiers of every supported CPU
    pub fn supported_cpus() -> js_sys::Array {
        cpus::supported().map(JsValue::from).collect()
    }
}
