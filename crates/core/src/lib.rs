//! MIPS32 instruction-set simulator library.
//!
//! This crate implements a sequential interpreter for the classic R3000-style
//! integer subset of MIPS32. It provides:
//! 1. **ISA:** Field extraction, decoding into a tagged instruction form, and
//!    disassembly for trace output.
//! 2. **Core:** The register file, program counter, and per-instruction
//!    execution step.
//! 3. **Memory:** A flat, byte-addressable, bounds-checked memory image.
//! 4. **Syscalls:** A minimal OS ABI (print, read, exit) over injectable
//!    console streams.
//! 5. **Simulation:** Raw-image loader, fetch-decode-execute loop, and the
//!    final register dump.

/// Error taxonomy and shared constants.
pub mod common;
/// Simulator configuration (memory size, entry point, initial stack pointer).
pub mod config;
/// CPU core (register file, architectural state, execution step).
pub mod core;
/// Instruction set (opcodes, decode, ABI names, disassembly).
pub mod isa;
/// Flat memory image.
pub mod mem;
/// Raw-image loader and the top-level simulator loop.
pub mod sim;
/// Syscall layer and console I/O.
pub mod sys;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Error type shared across loader, memory, decode, execute, and syscalls.
pub use crate::common::SimError;
/// CPU architectural state (registers, PC, HI/LO, halt flag).
pub use crate::core::Cpu;
/// Top-level simulator; owns CPU, memory, and console.
pub use crate::sim::Simulator;
