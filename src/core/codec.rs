// UID64 codecs - 8-byte little-endian binary form and 16-digit hex string form

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{Read, Write};
use std::ops::Range;

use crate::core::uid64::Uid64;
use crate::error::{AppError, AppResult};

/// Size of the binary form in bytes
pub const ENCODED_LEN: usize = 8;

/// Length of the string form of any nonzero identifier
pub const HEX_LEN: usize = 16;

static HEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{16}$").expect("hex pattern is a valid regex"));

fn window(len: usize, offset: usize) -> AppResult<Range<usize>> {
    offset
        .checked_add(ENCODED_LEN)
        .filter(|end| *end <= len)
        .map(|end| offset..end)
        .ok_or(AppError::OutOfRange {
            offset,
            len,
            needed: ENCODED_LEN,
        })
}

impl Uid64 {
    pub fn to_bytes(self) -> [u8; ENCODED_LEN] {
        self.value().to_le_bytes()
    }

    pub fn from_bytes(bytes: [u8; ENCODED_LEN]) -> Self {
        Self::from_i64(i64::from_le_bytes(bytes))
    }

    /// Write the binary form into `buf` starting at `offset`
    pub fn write_to_slice(self, buf: &mut [u8], offset: usize) -> AppResult<()> {
        let range = window(buf.len(), offset)?;
        buf[range].copy_from_slice(&self.to_bytes());
        Ok(())
    }

    /// Read the binary form from `buf` starting at `offset`
    pub fn read_from_slice(buf: &[u8], offset: usize) -> AppResult<Self> {
        let range = window(buf.len(), offset)?;
        let mut bytes = [0u8; ENCODED_LEN];
        bytes.copy_from_slice(&buf[range]);
        Ok(Self::from_bytes(bytes))
    }

    pub fn write_to<W: Write>(self, writer: &mut W) -> AppResult<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    pub fn read_from<R: Read>(reader: &mut R) -> AppResult<Self> {
        let mut bytes = [0u8; ENCODED_LEN];
        reader.read_exact(&mut bytes)?;
        Ok(Self::from_bytes(bytes))
    }

    /// Uppercase hex of the two's-complement bit pattern.
    ///
    /// `EMPTY` is rendered as `"0"`; every other value is zero-padded to
    /// [`HEX_LEN`] digits so that it can be read back by
    /// [`Uid64::load_from_string`].
    pub fn to_hex_string(self) -> String {
        if self.is_empty() {
            return "0".to_string();
        }
        format!("{:016X}", self.value() as u64)
    }

    /// Parse the string form. Never fails: anything other than exactly
    /// 16 hex digits yields `EMPTY`.
    pub fn load_from_string(s: &str) -> Self {
        if s.is_empty() || s == "0" || s.len() != HEX_LEN || !HEX_PATTERN.is_match(s) {
            return Self::EMPTY;
        }
        u64::from_str_radix(s, 16)
            .map(|bits| Self::from_i64(bits as i64))
            .unwrap_or(Self::EMPTY)
    }

    /// Like [`Uid64::load_from_string`], with a missing string yielding `EMPTY`
    pub fn load_from_opt(s: Option<&str>) -> Self {
        s.map_or(Self::EMPTY, Self::load_from_string)
    }
}
