//! WebAssembly bindings for retrodis.
//!
//! This module exposes the disassembler to JavaScript so listings can be
//! produced in the browser from an uploaded byte buffer.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::WasmDisassembler;
