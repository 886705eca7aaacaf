use crate::iqm::bytes::read_records;
use crate::iqm::{IqmHeader, Result, Transform};

/// Per-joint animation channel descriptor.
///
/// Channel `i` is animated when bit `i` of `mask` is set; otherwise it stays at `offset[i]` for every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
	/// Parent joint index; negative means root.
	pub parent: i32,
	/// Channel mask, one bit per scalar channel.
	pub mask: u32,
	/// Base value per channel.
	pub offset: [f32; Transform::CHANNELS],
	/// Quantization step per channel.
	pub scale: [f32; Transform::CHANNELS],
}

impl Pose {
	/// On-disk record size.
	pub const RECORD_SIZE: usize = 88;

	/// Whether channel `channel` is read from the frame stream.
	pub fn is_animated(&self, channel: usize) -> bool {
		self.mask & (1 << channel) != 0
	}

	/// Number of frame values this pose consumes per frame.
	pub fn animated_channels(&self) -> usize {
		(0..Transform::CHANNELS).filter(|channel| self.is_animated(*channel)).count()
	}
}

/// Decode the pose table in file order; pose `i` drives joint `i`.
pub fn read_poses(bytes: &[u8], header: &IqmHeader) -> Result<Vec<Pose>> {
	read_records(bytes, "poses", header.ofs_poses, header.num_poses, Pose::RECORD_SIZE, |cursor| {
		Ok(Pose {
			parent: cursor.read_i32_le()?,
			mask: cursor.read_u32_le()?,
			offset: cursor.read_f32s_le()?,
			scale: cursor.read_f32s_le()?,
		})
	})
}

#[cfg(test)]
mod tests;
