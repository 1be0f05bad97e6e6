//! MIPS32 integer instruction subset.
//!
//! Defines the modeled slice of the R3000-style integer ISA.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (bits 31-26).
//! - `funct`: Function codes for the SPECIAL and SPECIAL2 categories.
//! - `instruction`: Field extraction and the decoded [`Instruction`] form.
//! - `decode`: Raw word to [`Instruction`] translation.
//! - `abi`: Architectural register indices and ABI names.
//! - `disasm`: Mnemonic rendering for trace output.

/// Architectural register indices and ABI names.
pub mod abi;

/// Instruction word to decoded-form translation.
pub mod decode;

/// Mnemonic rendering for decoded instructions.
pub mod disasm;

/// Function codes for the SPECIAL and SPECIAL2 opcode categories.
pub mod funct;

/// Field extraction and the decoded instruction representation.
pub mod instruction;

/// Major opcode definitions.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Instruction, InstructionBits};
