//! Configuration for the MIPS32 simulator.
//!
//! This module defines the [`Config`] structure used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** The conventional MIPS memory layout (text base, initial
//!    stack pointer, flat memory size).
//! 2. **Deserialization:** Construction from JSON via the CLI `--config`
//!    flag, with every field optional.

use serde::Deserialize;

/// Default configuration constants.
///
/// These reproduce the memory layout the original flat-model simulator
/// assumed: text at `0x0040_0000`, data at `0x1001_0000`, stack growing down
/// from just under the 2 GiB line.
pub mod defaults {
    /// Total size of the flat memory image (2 GiB).
    ///
    /// Large enough that the text, data, and stack regions of the
    /// conventional layout are all in range. The buffer is zero-filled on
    /// allocation, so untouched pages cost nothing on hosts with lazy
    /// zero pages.
    pub const MEMORY_SIZE: usize = 0x8000_0000;

    /// Entry point: base of the text region.
    pub const ENTRY_PC: u32 = 0x0040_0000;

    /// Initial value of `$sp`, the top of the downward-growing stack.
    pub const INITIAL_SP: u32 = 0x7FFF_EFFC;
}

/// Simulation run parameters.
///
/// All fields have defaults matching the conventional layout; deserialize
/// from JSON to override any subset of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Capacity of the flat memory image in bytes.
    pub memory_size: usize,
    /// Program counter at the start of execution.
    pub entry_pc: u32,
    /// Value placed in `$sp` before execution begins.
    pub initial_sp: u32,
    /// Emit a per-instruction trace event for each executed instruction.
    pub trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memory_size: defaults::MEMORY_SIZE,
            entry_pc: defaults::ENTRY_PC,
            initial_sp: defaults::INITIAL_SP,
            trace: false,
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
