//! Byte-addressable memory regions.
//!
//! The VM owns three contiguous, independently sized regions (code,
//! data, rodata) rather than one flat address space. Each is a small
//! `Region` type with bounds-checked, little-endian `read`/`write` of
//! 1/2/4/8-byte values.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    #[error("address {addr:#x} (width {width}) is out of bounds for a region of length {len:#x}")]
    OutOfBounds { addr: u64, width: u8, len: usize },
    #[error("address {0:#x} is not within the read-only data region and cannot be written")]
    ReadOnly(u64),
}

/// A single owned byte buffer addressed by offset, not host pointer.
#[derive(Debug, Clone)]
pub struct Region {
    bytes: Vec<u8>,
    writable: bool,
}

impl Region {
    pub fn new_writable(len: usize) -> Self {
        Self {
            bytes: vec![0u8; len],
            writable: true,
        }
    }

    pub fn new_readonly(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            writable: false,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Loads `data` starting at offset 0, growing the region if needed.
    pub fn load(&mut self, data: &[u8]) {
        if data.len() > self.bytes.len() {
            self.bytes.resize(data.len(), 0);
        }
        self.bytes[..data.len()].copy_from_slice(data);
    }

    fn bounds_check(&self, addr: u64, width: u8) -> Result<usize, MemoryError> {
        let start = usize::try_from(addr).map_err(|_| MemoryError::OutOfBounds {
            addr,
            width,
            len: self.bytes.len(),
        })?;
        let end = start
            .checked_add(width as usize)
            .ok_or(MemoryError::OutOfBounds {
                addr,
                width,
                len: self.bytes.len(),
            })?;
        if end > self.bytes.len() {
            return Err(MemoryError::OutOfBounds {
                addr,
                width,
                len: self.bytes.len(),
            });
        }
        Ok(start)
    }

    pub fn read(&self, addr: u64, width: u8) -> Result<u64, MemoryError> {
        let start = self.bounds_check(addr, width)?;
        let mut buf = [0u8; 8];
        buf[..width as usize].copy_from_slice(&self.bytes[start..start + width as usize]);
        Ok(u64::from_le_bytes(buf))
    }

    pub fn write(&mut self, addr: u64, width: u8, value: u64) -> Result<(), MemoryError> {
        if !self.writable {
            return Err(MemoryError::ReadOnly(addr));
        }
        let start = self.bounds_check(addr, width)?;
        let bytes = value.to_le_bytes();
        self.bytes[start..start + width as usize].copy_from_slice(&bytes[..width as usize]);
        Ok(())
    }
}
