use std::fs;
use std::path::Path;

use crate::iqm::bytes::Cursor;
use crate::iqm::compression::decode_bytes;
use crate::iqm::{Compression, IqmError, IqmHeader, Result, TextPool};

/// Opened IQM container with decoded bytes and parsed header.
pub struct IqmFile {
	/// Parsed file header.
	pub header: IqmHeader,
	/// Compression mode detected for source bytes.
	pub compression: Compression,
	bytes: Vec<u8>,
}

impl IqmFile {
	/// Read, decode, and parse an IQM file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		tracing::debug!(path = %path.display(), "opening iqm file");
		Self::from_bytes(fs::read(path)?)
	}

	/// Parse an in-memory container, inflating it first when zstd-compressed.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		let header = IqmHeader::parse(&bytes)?;
		if header.filesize as usize != bytes.len() {
			tracing::debug!(declared = header.filesize, actual = bytes.len(), "header filesize differs from data length");
		}

		Ok(Self { header, compression, bytes })
	}

	/// Return decoded raw bytes backing this file.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Load the string pool.
	pub fn text(&self) -> Result<TextPool> {
		TextPool::load(&self.bytes, self.header.ofs_text, self.header.num_text)
	}

	/// Comment blob up to its first zero byte, if the file carries one.
	pub fn comment(&self) -> Result<Option<String>> {
		if self.header.ofs_comment == 0 || self.header.num_comment == 0 {
			return Ok(None);
		}

		let offset = self.header.ofs_comment as usize;
		let len = self.header.num_comment as usize;
		let mut cursor = Cursor::at(&self.bytes, "comment", offset)?;
		let raw = cursor.read_exact(len).map_err(|_| IqmError::OffsetOutOfRange {
			section: "comment",
			offset: offset + len,
			len: self.bytes.len(),
		})?;
		let end = raw.iter().position(|byte| *byte == 0).unwrap_or(raw.len());
		Ok(Some(String::from_utf8_lossy(&raw[..end]).into_owned()))
	}
}
