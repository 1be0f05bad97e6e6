//! Syscall dispatch.
//!
//! `syscall` selects a service via `$v0` and takes its argument from `$a0`:
//!
//! | Code | Name | Behavior |
//! |---|---|---|
//! | 1 | `print_int` | signed decimal of `$a0` to output |
//! | 4 | `print_string` | NUL-terminated bytes at address `$a0` to output |
//! | 5 | `read_int` | blocking decimal read into `$v0` |
//! | 10 | `exit` | sets the halt flag |
//! | 11 | `print_character` | low 8 bits of `$a0` as one character |
//!
//! Any other code is fatal.

use std::io::{BufRead, Write};

use crate::common::SimError;
use crate::core::cpu::Cpu;
use crate::isa::abi;
use crate::mem::Memory;
use crate::sys::console::Console;

/// `print_int` service code.
pub const SYS_PRINT_INT: u32 = 1;
/// `print_string` service code.
pub const SYS_PRINT_STRING: u32 = 4;
/// `read_int` service code.
pub const SYS_READ_INT: u32 = 5;
/// `exit` service code.
pub const SYS_EXIT: u32 = 10;
/// `print_character` service code.
pub const SYS_PRINT_CHAR: u32 = 11;

/// Executes the service selected by `$v0`.
///
/// # Errors
///
/// - [`SimError::UnknownSyscall`] for an unrecognized code.
/// - [`SimError::AccessOutOfRange`] if `print_string` walks past the end of
///   memory without finding a terminator.
/// - [`SimError::Io`] if a console stream fails.
pub fn dispatch<R: BufRead, W: Write>(
    cpu: &mut Cpu,
    mem: &Memory,
    console: &mut Console<R, W>,
) -> Result<(), SimError> {
    let code = cpu.regs.read(abi::REG_V0);
    match code {
        SYS_PRINT_INT => console.print_int(cpu.regs.read(abi::REG_A0))?,
        SYS_PRINT_STRING => {
            let bytes = read_cstring(mem, cpu.regs.read(abi::REG_A0))?;
            console.print_bytes(&bytes)?;
        }
        SYS_READ_INT => {
            let val = console.read_int()?;
            cpu.regs.write(abi::REG_V0, val);
        }
        SYS_EXIT => cpu.halted = true,
        SYS_PRINT_CHAR => console.print_char(cpu.regs.read(abi::REG_A0) as u8)?,
        _ => return Err(SimError::UnknownSyscall { code }),
    }
    Ok(())
}

/// Collects the bytes of a NUL-terminated string, terminator excluded.
fn read_cstring(mem: &Memory, addr: u32) -> Result<Vec<u8>, SimError> {
    let mut bytes = Vec::new();
    let mut at = addr;
    loop {
        let byte = mem.read_byte(at)?;
        if byte == 0 {
            return Ok(bytes);
        }
        bytes.push(byte);
        at = at.wrapping_add(1);
    }
}
