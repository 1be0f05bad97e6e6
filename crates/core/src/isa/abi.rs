//! MIPS O32 ABI register indices and names.
//!
//! Defines the register-number conventions the syscall layer and the
//! startup sequence rely on, plus display names for the disassembler.

/// Register $0 (`$zero` by convention; not hardwired in this model).
pub const REG_ZERO: usize = 0;
/// Register $2 (`$v0`): syscall selector and `read_int` result.
pub const REG_V0: usize = 2;
/// Register $4 (`$a0`): first syscall argument.
pub const REG_A0: usize = 4;
/// Register $29 (`$sp`): stack pointer.
pub const REG_SP: usize = 29;
/// Register $31 (`$ra`): return address, written by `jal`.
pub const REG_RA: usize = 31;

/// ABI names for registers $0-$31.
pub const REG_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Returns the ABI name for a register index.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}
