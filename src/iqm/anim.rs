use std::ops::Range;

use crate::iqm::bytes::read_records;
use crate::iqm::{IqmError, IqmHeader, Result, TextPool};

/// Named animation clip over a contiguous run of frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Anim {
	/// Resolved clip name.
	pub name: String,
	/// Index of the first frame.
	pub first_frame: u32,
	/// Number of frames.
	pub num_frames: u32,
	/// Playback rate in frames per second.
	pub framerate: f32,
	/// Raw flags word.
	pub flags: u32,
}

impl Anim {
	/// On-disk record size.
	pub const RECORD_SIZE: usize = 20;

	/// Whether the clip loops.
	pub fn is_loop(&self) -> bool {
		self.flags != 0
	}

	/// Global frame indices covered by this clip.
	pub fn frames(&self) -> Range<usize> {
		let first = self.first_frame as usize;
		first..first + self.num_frames as usize
	}
}

/// Decode the animation table, rejecting clips that run past the frame table.
pub fn read_anims(bytes: &[u8], header: &IqmHeader, text: &TextPool, num_frames: usize) -> Result<Vec<Anim>> {
	let anims = read_records(bytes, "anims", header.ofs_anims, header.num_anims, Anim::RECORD_SIZE, |cursor| {
		let name = cursor.read_u32_le()?;
		Ok(Anim {
			name: text.resolve(name)?,
			first_frame: cursor.read_u32_le()?,
			num_frames: cursor.read_u32_le()?,
			framerate: cursor.read_f32_le()?,
			flags: cursor.read_u32_le()?,
		})
	})?;

	for (index, anim) in anims.iter().enumerate() {
		let end = u64::from(anim.first_frame) + u64::from(anim.num_frames);
		if end > num_frames as u64 {
			return Err(IqmError::AnimFrameRangeOutOfRange {
				index,
				first: anim.first_frame,
				count: anim.num_frames,
				num_frames,
			});
		}
	}

	Ok(anims)
}

#[cfg(test)]
mod tests;
