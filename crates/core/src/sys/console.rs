//! Console I/O for the syscall layer.
//!
//! The simulated machine's only I/O device: a blocking input stream and an
//! output stream. The engine is generic over both so the CLI can hand in
//! locked standard streams while tests use `Cursor`/`Vec` pairs and assert
//! on the exact bytes.

use std::io::{self, BufRead, Write};

/// Paired input/output streams for the syscall layer.
pub struct Console<R, W> {
    /// Blocking input stream (`read_int`).
    pub input: R,
    /// Program output stream (`print_int`, `print_string`,
    /// `print_character`, and the final register dump).
    pub output: W,
}

impl<R, W> std::fmt::Debug for Console<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Console { .. }")
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads a non-negative decimal integer from the input stream.
    ///
    /// Accumulates contiguous leading ASCII digits into a wrapping unsigned
    /// accumulator; there is no sign handling and no overflow guard. The
    /// first non-digit is left in the stream, then the remainder of the
    /// line, up to and including the newline (or end-of-input), is
    /// discarded. Returns 0 when the input starts with a non-digit.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying stream.
    pub fn read_int(&mut self) -> io::Result<u32> {
        let mut value: u32 = 0;

        loop {
            // fill_buf/consume gives one-byte lookahead without taking the
            // terminating non-digit out of the stream.
            let buf = self.input.fill_buf()?;
            match buf.first() {
                Some(&c) if c.is_ascii_digit() => {
                    value = value.wrapping_mul(10).wrapping_add(u32::from(c - b'0'));
                    self.input.consume(1);
                }
                _ => break,
            }
        }

        // Line flush: drop everything up to and including the newline.
        let mut rest = Vec::new();
        let _ = self.input.read_until(b'\n', &mut rest)?;

        Ok(value)
    }

    /// Writes the signed decimal representation of `val`.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying stream.
    pub fn print_int(&mut self, val: u32) -> io::Result<()> {
        write!(self.output, "{}", val as i32)?;
        self.output.flush()
    }

    /// Writes `byte` as a single character.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying stream.
    pub fn print_char(&mut self, byte: u8) -> io::Result<()> {
        self.output.write_all(&[byte])?;
        self.output.flush()
    }

    /// Writes a raw byte string.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying stream.
    pub fn print_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.output.write_all(bytes)?;
        self.output.flush()
    }
}
