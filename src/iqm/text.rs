use crate::iqm::bytes::Cursor;
use crate::iqm::{IqmError, Result};

/// Zero-terminated string blob addressed by byte offset.
#[derive(Debug, Clone, Default)]
pub struct TextPool {
	bytes: Vec<u8>,
}

impl TextPool {
	/// Copy `len` bytes at `offset` out of the file; offset zero is an empty pool.
	pub fn load(file: &[u8], offset: u32, len: u32) -> Result<Self> {
		if offset == 0 {
			return Ok(Self::default());
		}

		let mut cursor = Cursor::at(file, "text", offset as usize)?;
		let bytes = cursor.read_exact(len as usize).map_err(|_| IqmError::OffsetOutOfRange {
			section: "text",
			offset: offset as usize + len as usize,
			len: file.len(),
		})?;
		Ok(Self::from_bytes(bytes.to_vec()))
	}

	/// Wrap an already-extracted blob.
	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self { bytes }
	}

	/// Pool size in bytes.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Whether the pool holds no bytes.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Resolve the string starting at `offset`, replacing invalid UTF-8.
	pub fn resolve(&self, offset: u32) -> Result<String> {
		let start = offset as usize;
		let rest = self.bytes.get(start..).filter(|rest| !rest.is_empty()).ok_or(IqmError::OffsetOutOfRange {
			section: "text",
			offset: start,
			len: self.bytes.len(),
		})?;
		let end = rest.iter().position(|byte| *byte == 0).ok_or(IqmError::UnterminatedString { offset: start })?;
		Ok(String::from_utf8_lossy(&rest[..end]).into_owned())
	}
}
