//! Flat memory image.
//!
//! A single zero-initialized byte buffer addressed by 32-bit values. The
//! original flat model performed no checks at all; here every access is
//! bounds-checked and fails fast with [`SimError::AccessOutOfRange`].
//! Alignment is still not enforced: a misaligned word access reads the
//! bytes it names.
//!
//! Words are stored little-endian, matching the byte order of the raw
//! program images the loader consumes.

use crate::common::SimError;

/// Flat, byte-addressable memory with word and byte accessors.
pub struct Memory {
    bytes: Vec<u8>,
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl Memory {
    /// Creates a zero-filled memory image of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Capacity of the image in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-capacity image.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    fn range(&self, addr: u32, len: usize, kind: &'static str) -> Result<usize, SimError> {
        let start = addr as usize;
        match start.checked_add(len) {
            Some(end) if end <= self.bytes.len() => Ok(start),
            _ => Err(SimError::AccessOutOfRange { kind, addr, len }),
        }
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// [`SimError::AccessOutOfRange`] if `addr` is outside the image.
    pub fn read_byte(&self, addr: u32) -> Result<u8, SimError> {
        let start = self.range(addr, 1, "load")?;
        Ok(self.bytes[start])
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// [`SimError::AccessOutOfRange`] if `addr` is outside the image.
    pub fn write_byte(&mut self, addr: u32, val: u8) -> Result<(), SimError> {
        let start = self.range(addr, 1, "store")?;
        self.bytes[start] = val;
        Ok(())
    }

    /// Reads a little-endian word.
    ///
    /// # Errors
    ///
    /// [`SimError::AccessOutOfRange`] if any of the four bytes falls outside
    /// the image.
    pub fn read_word(&self, addr: u32) -> Result<u32, SimError> {
        let start = self.range(addr, 4, "load")?;
        let b: [u8; 4] = self.bytes[start..start + 4]
            .try_into()
            .map_err(|_| SimError::AccessOutOfRange {
                kind: "load",
                addr,
                len: 4,
            })?;
        Ok(u32::from_le_bytes(b))
    }

    /// Writes a little-endian word.
    ///
    /// # Errors
    ///
    /// [`SimError::AccessOutOfRange`] if any of the four bytes falls outside
    /// the image.
    pub fn write_word(&mut self, addr: u32, val: u32) -> Result<(), SimError> {
        let start = self.range(addr, 4, "store")?;
        self.bytes[start..start + 4].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Fetches the instruction word at `addr`.
    ///
    /// Identical to [`Memory::read_word`] except that a fault is reported as
    /// a fetch, which distinguishes a runaway PC from a bad data address.
    pub fn fetch_word(&self, addr: u32) -> Result<u32, SimError> {
        let start = self.range(addr, 4, "fetch")?;
        let b: [u8; 4] = self.bytes[start..start + 4]
            .try_into()
            .map_err(|_| SimError::AccessOutOfRange {
                kind: "fetch",
                addr,
                len: 4,
            })?;
        Ok(u32::from_le_bytes(b))
    }

    /// Copies `data` into the image starting at `base`.
    ///
    /// Used by the loader to place the text/data image and by tests to seed
    /// program words.
    ///
    /// # Errors
    ///
    /// [`SimError::ImageBounds`] if the data does not fit.
    pub fn load_at(&mut self, base: u32, data: &[u8]) -> Result<(), SimError> {
        let start = base as usize;
        let end = start
            .checked_add(data.len())
            .filter(|&end| end <= self.bytes.len())
            .ok_or(SimError::ImageBounds {
                size: data.len(),
                base,
                mem_size: self.bytes.len(),
            })?;
        self.bytes[start..end].copy_from_slice(data);
        Ok(())
    }
}
