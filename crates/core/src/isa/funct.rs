//! Function codes (bits 5-0) for the SPECIAL and SPECIAL2 categories.

/// Shift left logical (SPECIAL).
pub const FUNCT_SLL: u32 = 0x00;

/// Jump register (SPECIAL).
pub const FUNCT_JR: u32 = 0x08;

/// System call (SPECIAL).
pub const FUNCT_SYSCALL: u32 = 0x0C;

/// Add, overflow-trapping form (SPECIAL). This subset never traps, so it
/// behaves identically to [`FUNCT_ADDU`].
pub const FUNCT_ADD: u32 = 0x20;

/// Add unsigned (SPECIAL).
pub const FUNCT_ADDU: u32 = 0x21;

/// Subtract (SPECIAL).
pub const FUNCT_SUB: u32 = 0x22;

/// Bitwise OR (SPECIAL).
pub const FUNCT_OR: u32 = 0x25;

/// Set on less than, signed (SPECIAL).
pub const FUNCT_SLT: u32 = 0x2A;

/// Multiply to GPR, low 32 bits only (SPECIAL2).
///
/// Unlike architectural `mult`, the product goes straight to `rd` and HI/LO
/// are left untouched.
pub const FUNCT2_MUL: u32 = 0x02;
