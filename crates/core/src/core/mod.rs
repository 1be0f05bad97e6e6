//! CPU core.
//!
//! The architectural state of the simulated machine and the per-instruction
//! execution step:
//! 1. **Register File:** 32 general-purpose registers.
//! 2. **State:** Program counter, HI/LO, and the halt flag.
//! 3. **Execution:** Semantic action for each decoded instruction.

/// CPU architectural state container.
pub mod cpu;

/// Per-instruction execution step.
pub mod execution;

/// General-purpose register file.
pub mod gpr;

pub use cpu::Cpu;
pub use gpr::Gpr;
