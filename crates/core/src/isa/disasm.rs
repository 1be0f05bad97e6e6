//! Disassembler for the modeled MIPS32 subset.
//!
//! Converts a decoded instruction into a human-readable mnemonic string for
//! trace events and test diagnostics.

use crate::isa::abi::reg_name;
use crate::isa::instruction::Instruction;

/// Renders a decoded instruction as an assembler-style mnemonic.
///
/// Jump targets are shown as the word-aligned partial address the target
/// field encodes; the final address also depends on the PC at execution
/// time and is only known to the engine.
pub fn disassemble(inst: &Instruction) -> String {
    match *inst {
        Instruction::Nop => "nop".to_string(),
        Instruction::Add { rd, rs, rt } => {
            format!("add {}, {}, {}", reg_name(rd), reg_name(rs), reg_name(rt))
        }
        Instruction::Addu { rd, rs, rt } => {
            format!("addu {}, {}, {}", reg_name(rd), reg_name(rs), reg_name(rt))
        }
        Instruction::Sub { rd, rs, rt } => {
            format!("sub {}, {}, {}", reg_name(rd), reg_name(rs), reg_name(rt))
        }
        Instruction::Sll { rd, rt, shamt } => {
            format!("sll {}, {}, {}", reg_name(rd), reg_name(rt), shamt)
        }
        Instruction::Or { rd, rs, rt } => {
            format!("or {}, {}, {}", reg_name(rd), reg_name(rs), reg_name(rt))
        }
        Instruction::Slt { rd, rs, rt } => {
            format!("slt {}, {}, {}", reg_name(rd), reg_name(rs), reg_name(rt))
        }
        Instruction::Jr { rs } => format!("jr {}", reg_name(rs)),
        Instruction::Syscall => "syscall".to_string(),
        Instruction::Mul { rd, rs, rt } => {
            format!("mul {}, {}, {}", reg_name(rd), reg_name(rs), reg_name(rt))
        }
        Instruction::Addi { rt, rs, imm } => {
            format!("addi {}, {}, {}", reg_name(rt), reg_name(rs), imm)
        }
        Instruction::Addiu { rt, rs, imm } => {
            format!("addiu {}, {}, {}", reg_name(rt), reg_name(rs), imm)
        }
        Instruction::Ori { rt, rs, imm } => {
            format!("ori {}, {}, {:#x}", reg_name(rt), reg_name(rs), imm)
        }
        Instruction::Lui { rt, imm } => format!("lui {}, {:#x}", reg_name(rt), imm),
        Instruction::Slti { rt, rs, imm } => {
            format!("slti {}, {}, {}", reg_name(rt), reg_name(rs), imm)
        }
        Instruction::Lw { rt, rs, imm } => {
            format!("lw {}, {}({})", reg_name(rt), imm, reg_name(rs))
        }
        Instruction::Sw { rt, rs, imm } => {
            format!("sw {}, {}({})", reg_name(rt), imm, reg_name(rs))
        }
        Instruction::Beq { rs, rt, imm } => {
            format!("beq {}, {}, {}", reg_name(rs), reg_name(rt), imm)
        }
        Instruction::Bne { rs, rt, imm } => {
            format!("bne {}, {}, {}", reg_name(rs), reg_name(rt), imm)
        }
        Instruction::J { target } => format!("j {:#010x}", target << 2),
        Instruction::Jal { target } => format!("jal {:#010x}", target << 2),
    }
}
