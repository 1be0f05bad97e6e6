//! Instruction encoding utilities and the decoded instruction form.
//!
//! Provides bit extraction for the three MIPS instruction formats and the
//! tagged [`Instruction`] representation produced by the decoder.

/// Bit mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the 6-bit function code field (bits 5-0).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field (bits 15-0).
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target field (bits 25-0).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;
/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Bit position of the `rs` field.
pub const RS_SHIFT: u32 = 21;
/// Bit position of the `rt` field.
pub const RT_SHIFT: u32 = 16;
/// Bit position of the `rd` field.
pub const RD_SHIFT: u32 = 11;
/// Bit position of the shift-amount field.
pub const SHAMT_SHIFT: u32 = 6;

/// Trait for extracting instruction fields from an encoded word.
///
/// Field layout by format:
///
/// | Format | Fields |
/// |---|---|
/// | R | opcode, rs, rt, rd, shamt, funct |
/// | I | opcode, rs, rt, imm |
/// | J | opcode, target |
pub trait InstructionBits {
    /// Extracts the major opcode (bits 31-26).
    fn opcode(&self) -> u32;
    /// Extracts the `rs` source register index (bits 25-21).
    fn rs(&self) -> usize;
    /// Extracts the `rt` source/destination register index (bits 20-16).
    fn rt(&self) -> usize;
    /// Extracts the `rd` destination register index (bits 15-11).
    fn rd(&self) -> usize;
    /// Extracts the shift amount (bits 10-6).
    fn shamt(&self) -> u32;
    /// Extracts the function code (bits 5-0).
    fn funct(&self) -> u32;
    /// Extracts the 16-bit immediate (bits 15-0), uninterpreted.
    ///
    /// Sign- or zero-extension is per instruction and happens at decode.
    fn imm(&self) -> u16;
    /// Extracts the 26-bit jump target field (bits 25-0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self >> OPCODE_SHIFT
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// A decoded instruction.
///
/// Register operands are architectural indices (0-31). Immediates carry the
/// extension the instruction applies: `i16` where the ISA sign-extends,
/// `u16` where it zero-extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// The all-zero word. Equivalent to `sll $0, $0, 0`; kept as a distinct
    /// fast path with identical (absent) effects.
    Nop,
    /// `rd = rs + rt`, wraparound (the trapping form is not modeled).
    Add {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// `rd = rs + rt`, wraparound.
    Addu {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// `rd = rs - rt`, wraparound.
    Sub {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// `rd = rt << shamt`.
    Sll {
        /// Destination register.
        rd: usize,
        /// Operand register.
        rt: usize,
        /// Shift amount (0-31).
        shamt: u32,
    },
    /// `rd = rs | rt`.
    Or {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// `rd = 1` if `rs < rt` as signed values, else `0`.
    Slt {
        /// Destination register.
        rd: usize,
        /// Left comparand register.
        rs: usize,
        /// Right comparand register.
        rt: usize,
    },
    /// `pc = rs`; takes effect before the next fetch (no delay slot).
    Jr {
        /// Register holding the jump target.
        rs: usize,
    },
    /// System call; the service code is taken from `$v0`.
    Syscall,
    /// `rd = rs * rt` as signed 32-bit values, low 32 bits only.
    ///
    /// HI/LO are deliberately not written; this models the SPECIAL2 `mul`,
    /// not the architectural widening `mult`.
    Mul {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// `rt = rs + sext(imm)`, wraparound (the trapping form is not modeled).
    Addi {
        /// Destination register.
        rt: usize,
        /// Operand register.
        rs: usize,
        /// Sign-extended immediate.
        imm: i16,
    },
    /// `rt = rs + sext(imm)`, wraparound.
    Addiu {
        /// Destination register.
        rt: usize,
        /// Operand register.
        rs: usize,
        /// Sign-extended immediate.
        imm: i16,
    },
    /// `rt = rs | zext(imm)`.
    Ori {
        /// Destination register.
        rt: usize,
        /// Operand register.
        rs: usize,
        /// Zero-extended immediate.
        imm: u16,
    },
    /// `rt = imm << 16`.
    Lui {
        /// Destination register.
        rt: usize,
        /// Upper-half immediate.
        imm: u16,
    },
    /// `rt = 1` if `rs < sext(imm)` as signed values, else `0`.
    ///
    /// The write is suppressed when `rt` is register 0; no other
    /// instruction special-cases register 0 this way. Preserved as-is.
    Slti {
        /// Destination register.
        rt: usize,
        /// Left comparand register.
        rs: usize,
        /// Sign-extended right comparand.
        imm: i16,
    },
    /// `rt = mem[rs + sext(imm)]` (word).
    Lw {
        /// Destination register.
        rt: usize,
        /// Base address register.
        rs: usize,
        /// Sign-extended byte offset.
        imm: i16,
    },
    /// `mem[rs + sext(imm)] = rt` (word).
    Sw {
        /// Source register.
        rt: usize,
        /// Base address register.
        rs: usize,
        /// Sign-extended byte offset.
        imm: i16,
    },
    /// If `rs == rt`, `pc = pc + 4 + (sext(imm) << 2)`, effective
    /// immediately (no delay slot).
    Beq {
        /// First comparand register.
        rs: usize,
        /// Second comparand register.
        rt: usize,
        /// Sign-extended word offset.
        imm: i16,
    },
    /// If `rs != rt`, `pc = pc + 4 + (sext(imm) << 2)`.
    Bne {
        /// First comparand register.
        rs: usize,
        /// Second comparand register.
        rt: usize,
        /// Sign-extended word offset.
        imm: i16,
    },
    /// `pc = ((pc + 4) & 0xF000_0000) | (target << 2)`.
    J {
        /// 26-bit word-aligned target field.
        target: u32,
    },
    /// `$ra = pc + 4`, then jump as [`Instruction::J`].
    Jal {
        /// 26-bit word-aligned target field.
        target: u32,
    },
}
