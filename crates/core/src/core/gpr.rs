//! General-purpose register file.
//!
//! Maintains the 32 architectural registers and the final-dump formatting.
//!
//! Register 0 is *not* hardwired to zero: a write to index 0 takes effect
//! like any other write, reproducing the original flat-array register file.
//! (`$zero` stays zero in practice only because well-formed programs never
//! name it as a destination; the lone exception, `slti`, suppresses the
//! write in the executor instead.)

use std::io::{self, Write};

use crate::common::NUM_GPRS;

/// The 32-entry general-purpose register file.
#[derive(Debug, Clone)]
pub struct Gpr {
    regs: [u32; NUM_GPRS],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a register file with every register zeroed.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_GPRS],
        }
    }

    /// Reads register `idx`.
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes register `idx`. Index 0 is not special-cased.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val;
    }

    /// Writes the register dump: one line per register, index right-aligned
    /// to width 2, value as eight uppercase hex digits.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the sink.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, val) in self.regs.iter().enumerate() {
            writeln!(out, "${i:>2} : {val:08X}")?;
        }
        Ok(())
    }
}
