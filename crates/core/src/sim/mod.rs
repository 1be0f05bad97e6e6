//! Program loading and the top-level simulation loop.

/// Raw program-image loader.
pub mod loader;

/// Fetch-decode-execute loop and final diagnostics.
pub mod simulator;

pub use loader::load_image;
pub use simulator::Simulator;
