use crate::iqm::{IqmError, Result};

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Create a cursor positioned at an absolute section offset.
	pub fn at(bytes: &'a [u8], section: &'static str, offset: usize) -> Result<Self> {
		let mut cursor = Self::new(bytes);
		cursor.seek(section, offset)?;
		Ok(cursor)
	}

	/// Move to an absolute offset.
	pub fn seek(&mut self, section: &'static str, offset: usize) -> Result<()> {
		if offset > self.bytes.len() {
			return Err(IqmError::OffsetOutOfRange {
				section,
				offset,
				len: self.bytes.len(),
			});
		}
		self.pos = offset;
		Ok(())
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(IqmError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a sixteen-byte signature.
	pub fn read_code16(&mut self) -> Result<[u8; 16]> {
		let raw = self.read_exact(16)?;
		let mut out = [0_u8; 16];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Result<u16> {
		Ok(u16::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `f32`.
	pub fn read_f32_le(&mut self) -> Result<f32> {
		Ok(f32::from_le_bytes(self.read_array()?))
	}

	/// Read `N` consecutive little-endian `f32` values.
	pub fn read_f32s_le<const N: usize>(&mut self) -> Result<[f32; N]> {
		let mut out = [0.0_f32; N];
		for item in &mut out {
			*item = self.read_f32_le()?;
		}
		Ok(out)
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut buf = [0_u8; N];
		buf.copy_from_slice(raw);
		Ok(buf)
	}
}

/// Decode `count` fixed-size records starting at `offset`, attaching table context to EOF errors.
///
/// An offset of zero marks an absent section and yields an empty table.
pub(crate) fn read_records<'a, T>(
	bytes: &'a [u8],
	section: &'static str,
	offset: u32,
	count: u32,
	record_size: usize,
	mut parse: impl FnMut(&mut Cursor<'a>) -> Result<T>,
) -> Result<Vec<T>> {
	if offset == 0 || count == 0 {
		return Ok(Vec::new());
	}

	let mut cursor = Cursor::at(bytes, section, offset as usize)?;
	let count = count as usize;
	let mut out = Vec::with_capacity(count.min(cursor.remaining() / record_size.max(1)));
	for index in 0..count {
		let item = parse(&mut cursor).map_err(|err| with_section(err, section, index))?;
		out.push(item);
	}

	tracing::debug!(section, count, offset, "decoded table");
	Ok(out)
}

/// Attach table name and record index to a raw cursor EOF.
pub(crate) fn with_section(err: IqmError, section: &'static str, index: usize) -> IqmError {
	match err {
		IqmError::UnexpectedEof { at, need, rem } => IqmError::TruncatedSection {
			section,
			index,
			at,
			need,
			rem,
		},
		other => other,
	}
}
