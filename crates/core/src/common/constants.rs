//! Global system constants.

/// Size of one machine word (and one instruction) in bytes.
pub const WORD_SIZE: u32 = 4;

/// Number of general-purpose registers in the architectural register file.
pub const NUM_GPRS: usize = 32;
