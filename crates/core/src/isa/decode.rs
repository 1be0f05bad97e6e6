//! MIPS32 instruction decoder.
//!
//! Translates a raw 32-bit instruction word into the tagged [`Instruction`]
//! form. Decoding replaces the two-level opcode/function-code dispatch with
//! a single total function: every word either maps to a modeled instruction
//! or fails with [`SimError::UnknownInstruction`].
//!
//! Unknown function codes inside SPECIAL and SPECIAL2 are rejected exactly
//! like unknown top-level opcodes. The silent no-op fallthrough the nested
//! switch dispatch used to exhibit for them is an explicit non-behavior
//! here: one fatal policy for every unrecognized encoding.

use crate::common::SimError;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::{funct, opcodes};

/// Decodes a raw instruction word.
///
/// The all-zero word short-circuits to [`Instruction::Nop`]. This is sound
/// because its full decode is `sll $0, $0, 0`, whose execution has no
/// architectural effect either.
///
/// # Errors
///
/// [`SimError::UnknownInstruction`] for any encoding outside the modeled
/// subset, carrying the raw word for diagnostics.
pub fn decode(word: u32) -> Result<Instruction, SimError> {
    if word == 0 {
        return Ok(Instruction::Nop);
    }

    let rs = word.rs();
    let rt = word.rt();
    let rd = word.rd();

    let inst = match word.opcode() {
        opcodes::OP_SPECIAL => match word.funct() {
            funct::FUNCT_SLL => Instruction::Sll {
                rd,
                rt,
                shamt: word.shamt(),
            },
            funct::FUNCT_JR => Instruction::Jr { rs },
            funct::FUNCT_SYSCALL => Instruction::Syscall,
            funct::FUNCT_ADD => Instruction::Add { rd, rs, rt },
            funct::FUNCT_ADDU => Instruction::Addu { rd, rs, rt },
            funct::FUNCT_SUB => Instruction::Sub { rd, rs, rt },
            funct::FUNCT_OR => Instruction::Or { rd, rs, rt },
            funct::FUNCT_SLT => Instruction::Slt { rd, rs, rt },
            _ => return Err(SimError::UnknownInstruction { word }),
        },
        opcodes::OP_SPECIAL2 => match word.funct() {
            funct::FUNCT2_MUL => Instruction::Mul { rd, rs, rt },
            _ => return Err(SimError::UnknownInstruction { word }),
        },
        opcodes::OP_ADDI => Instruction::Addi {
            rt,
            rs,
            imm: word.imm() as i16,
        },
        opcodes::OP_ADDIU => Instruction::Addiu {
            rt,
            rs,
            imm: word.imm() as i16,
        },
        opcodes::OP_SLTI => Instruction::Slti {
            rt,
            rs,
            imm: word.imm() as i16,
        },
        opcodes::OP_ORI => Instruction::Ori {
            rt,
            rs,
            imm: word.imm(),
        },
        opcodes::OP_LUI => Instruction::Lui {
            rt,
            imm: word.imm(),
        },
        opcodes::OP_LW => Instruction::Lw {
            rt,
            rs,
            imm: word.imm() as i16,
        },
        opcodes::OP_SW => Instruction::Sw {
            rt,
            rs,
            imm: word.imm() as i16,
        },
        opcodes::OP_BEQ => Instruction::Beq {
            rs,
            rt,
            imm: word.imm() as i16,
        },
        opcodes::OP_BNE => Instruction::Bne {
            rs,
            rt,
            imm: word.imm() as i16,
        },
        opcodes::OP_J => Instruction::J {
            target: word.target(),
        },
        opcodes::OP_JAL => Instruction::Jal {
            target: word.target(),
        },
        _ => return Err(SimError::UnknownInstruction { word }),
    };

    Ok(inst)
}
