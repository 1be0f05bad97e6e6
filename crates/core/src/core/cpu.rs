//! CPU architectural state.

use crate::common::constants::WORD_SIZE;
use crate::config::Config;
use crate::core::gpr::Gpr;
use crate::isa::abi;

/// Architectural state of the simulated processor.
///
/// Constructed once per simulation run and owned exclusively by the
/// [`Simulator`](crate::sim::Simulator); there is no global state, so
/// multiple isolated instances can coexist in tests.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Program counter: address of the next instruction to fetch.
    pub pc: u32,
    /// Multiply/divide high result register. Declared for architectural
    /// completeness; no modeled instruction writes it (`mul` targets a GPR).
    pub hi: u32,
    /// Multiply/divide low result register. Unused, as with `hi`.
    pub lo: u32,
    /// Set by the `exit` syscall; the run loop stops after the current
    /// cycle without further fetches.
    pub halted: bool,
}

impl Cpu {
    /// Creates the startup state: registers zeroed, `$sp` and the PC taken
    /// from the configuration.
    pub fn new(config: &Config) -> Self {
        let mut regs = Gpr::new();
        regs.write(abi::REG_SP, config.initial_sp);
        Self {
            regs,
            pc: config.entry_pc,
            hi: 0,
            lo: 0,
            halted: false,
        }
    }

    /// The PC of the instruction slot after the one at `pc`.
    #[inline]
    pub fn next_pc(&self) -> u32 {
        self.pc.wrapping_add(WORD_SIZE)
    }
}
