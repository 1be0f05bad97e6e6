//! Per-instruction execution.
//!
//! One decoded instruction in, one architectural state transition out.
//! Control-transfer instructions (`jr`, taken branches, `j`, `jal`) replace
//! the next-fetch PC directly and skip the uniform +4 increment; everything
//! else falls through to it. No branch-delay slot is modeled: a transfer
//! takes effect before the next fetch.
//!
//! All register values are unsigned 32-bit storage; signed operations
//! reinterpret them as two's complement. Arithmetic wraps; the trapping
//! `add`/`addi` forms behave identically to their unsigned siblings.

use std::io::{BufRead, Write};

use crate::common::SimError;
use crate::core::cpu::Cpu;
use crate::isa::abi;
use crate::isa::instruction::Instruction;
use crate::mem::Memory;
use crate::sys::console::Console;
use crate::sys::syscall;

impl Cpu {
    /// Executes one decoded instruction, mutating registers, memory, and
    /// the PC.
    ///
    /// # Errors
    ///
    /// - [`SimError::AccessOutOfRange`] from `lw`/`sw` (and `print_string`).
    /// - [`SimError::UnknownSyscall`] for an unrecognized `$v0` code.
    /// - [`SimError::Io`] if a console stream fails.
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        inst: Instruction,
        mem: &mut Memory,
        console: &mut Console<R, W>,
    ) -> Result<(), SimError> {
        let next_pc = self.next_pc();

        match inst {
            Instruction::Nop => {}

            Instruction::Add { rd, rs, rt } | Instruction::Addu { rd, rs, rt } => {
                let val = self.regs.read(rs).wrapping_add(self.regs.read(rt));
                self.regs.write(rd, val);
            }
            Instruction::Sub { rd, rs, rt } => {
                let val = self.regs.read(rs).wrapping_sub(self.regs.read(rt));
                self.regs.write(rd, val);
            }
            Instruction::Sll { rd, rt, shamt } => {
                self.regs.write(rd, self.regs.read(rt) << shamt);
            }
            Instruction::Or { rd, rs, rt } => {
                self.regs.write(rd, self.regs.read(rs) | self.regs.read(rt));
            }
            Instruction::Slt { rd, rs, rt } => {
                let lt = (self.regs.read(rs) as i32) < (self.regs.read(rt) as i32);
                self.regs.write(rd, u32::from(lt));
            }
            Instruction::Mul { rd, rs, rt } => {
                // Low 32 bits only; HI/LO stay untouched (see isa docs).
                let val = (self.regs.read(rs) as i32).wrapping_mul(self.regs.read(rt) as i32);
                self.regs.write(rd, val as u32);
            }

            Instruction::Addi { rt, rs, imm } | Instruction::Addiu { rt, rs, imm } => {
                let val = self.regs.read(rs).wrapping_add(imm as i32 as u32);
                self.regs.write(rt, val);
            }
            Instruction::Ori { rt, rs, imm } => {
                self.regs.write(rt, self.regs.read(rs) | u32::from(imm));
            }
            Instruction::Lui { rt, imm } => {
                self.regs.write(rt, u32::from(imm) << 16);
            }
            Instruction::Slti { rt, rs, imm } => {
                // The one write that is suppressed for register 0. Every
                // other instruction writes $zero like any other register.
                if rt != abi::REG_ZERO {
                    let lt = (self.regs.read(rs) as i32) < i32::from(imm);
                    self.regs.write(rt, u32::from(lt));
                }
            }

            Instruction::Lw { rt, rs, imm } => {
                let addr = self.regs.read(rs).wrapping_add(imm as i32 as u32);
                let val = mem.read_word(addr)?;
                self.regs.write(rt, val);
            }
            Instruction::Sw { rt, rs, imm } => {
                let addr = self.regs.read(rs).wrapping_add(imm as i32 as u32);
                mem.write_word(addr, self.regs.read(rt))?;
            }

            Instruction::Jr { rs } => {
                self.pc = self.regs.read(rs);
                return Ok(());
            }
            Instruction::Beq { rs, rt, imm } => {
                if self.regs.read(rs) == self.regs.read(rt) {
                    self.pc = Self::branch_target(next_pc, imm);
                    return Ok(());
                }
            }
            Instruction::Bne { rs, rt, imm } => {
                if self.regs.read(rs) != self.regs.read(rt) {
                    self.pc = Self::branch_target(next_pc, imm);
                    return Ok(());
                }
            }
            Instruction::J { target } => {
                self.pc = Self::jump_target(next_pc, target);
                return Ok(());
            }
            Instruction::Jal { target } => {
                self.regs.write(abi::REG_RA, next_pc);
                self.pc = Self::jump_target(next_pc, target);
                return Ok(());
            }

            Instruction::Syscall => {
                syscall::dispatch(self, mem, console)?;
            }
        }

        self.pc = next_pc;
        Ok(())
    }

    /// `pc_at_fetch + 4 + (sign_extend(imm) << 2)`.
    #[inline]
    fn branch_target(next_pc: u32, imm: i16) -> u32 {
        next_pc.wrapping_add((i32::from(imm) << 2) as u32)
    }

    /// `((pc_at_fetch + 4) & 0xF000_0000) | (target << 2)`.
    #[inline]
    fn jump_target(next_pc: u32, target: u32) -> u32 {
        (next_pc & 0xF000_0000) | (target << 2)
    }
}
