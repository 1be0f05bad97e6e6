//! MIPS32 major opcodes (bits 31-26).

/// R-format instructions; the operation is selected by the function code.
pub const OP_SPECIAL: u32 = 0x00;

/// Unconditional jump within the current 256 MiB region.
pub const OP_J: u32 = 0x02;

/// Jump and link: saves the return address in `$ra`.
pub const OP_JAL: u32 = 0x03;

/// Branch if equal.
pub const OP_BEQ: u32 = 0x04;

/// Branch if not equal.
pub const OP_BNE: u32 = 0x05;

/// Add immediate (sign-extended; overflow is not trapped in this subset).
pub const OP_ADDI: u32 = 0x08;

/// Add immediate unsigned (sign-extended immediate, wraparound arithmetic).
pub const OP_ADDIU: u32 = 0x09;

/// Set on less than immediate (signed comparison).
pub const OP_SLTI: u32 = 0x0A;

/// Bitwise OR with zero-extended immediate.
pub const OP_ORI: u32 = 0x0D;

/// Load upper immediate.
pub const OP_LUI: u32 = 0x0F;

/// SPECIAL2 category; the operation is selected by the function code.
pub const OP_SPECIAL2: u32 = 0x1C;

/// Load word.
pub const OP_LW: u32 = 0x23;

/// Store word.
pub const OP_SW: u32 = 0x2B;
