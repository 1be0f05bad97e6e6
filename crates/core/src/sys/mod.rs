//! Syscall layer and console I/O.
//!
//! Emulates the minimal OS ABI (print, read, exit) over injectable host
//! streams:
//! 1. **Console:** Blocking byte-stream I/O behind generic `BufRead`/`Write`
//!    so tests can substitute deterministic in-memory streams.
//! 2. **Syscalls:** Dispatch on the `$v0` service code with `$a0` as the
//!    argument register.

/// Injectable console streams and the decimal integer parser.
pub mod console;

/// Syscall codes and dispatch.
pub mod syscall;

pub use console::Console;
