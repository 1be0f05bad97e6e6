//! Simulator error definitions.
//!
//! Every failure the engine can surface is a [`SimError`]. There is no
//! partial-state recovery: the run loop propagates the first error to the
//! caller and the machine state is abandoned. The only non-error way out of
//! the loop is the `exit` syscall.

use thiserror::Error;

/// Errors surfaced by the loader, memory image, decoder, executor, and
/// syscall layer.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program image could not be read from disk.
    #[error("cannot read program image '{path}': {source}")]
    Image {
        /// Path that was passed to the loader.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The program image does not fit in the memory image at the load base.
    #[error("program image ({size} bytes at {base:#010x}) does not fit in {mem_size}-byte memory")]
    ImageBounds {
        /// Image size in bytes.
        size: usize,
        /// Address the image was to be placed at.
        base: u32,
        /// Capacity of the memory image.
        mem_size: usize,
    },

    /// A load, store, or fetch touched an address outside the memory image.
    #[error("{len}-byte {kind} out of range at address {addr:#010x}")]
    AccessOutOfRange {
        /// Access kind: `"fetch"`, `"load"`, or `"store"`.
        kind: &'static str,
        /// Faulting address.
        addr: u32,
        /// Access width in bytes.
        len: usize,
    },

    /// The fetched word does not encode any modeled instruction.
    ///
    /// Covers both an unknown top-level opcode and an unknown function code
    /// inside the SPECIAL/SPECIAL2 categories; both are fatal by policy.
    #[error("unknown instruction {word:#010x}")]
    UnknownInstruction {
        /// The raw instruction word.
        word: u32,
    },

    /// `syscall` was executed with an unrecognized service code in `$v0`.
    #[error("unknown syscall code {code} in $v0")]
    UnknownSyscall {
        /// The service code found in `$v0`.
        code: u32,
    },

    /// A console read or write failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
