use crate::iqm::bytes::{Cursor, with_section};
use crate::iqm::{IqmError, IqmHeader, Pose, Result, Transform};

/// All animation frames, each a row of `channels` quantized values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frames {
	channels: usize,
	count: usize,
	data: Vec<u16>,
}

impl Frames {
	/// Build from a flat row-major value buffer.
	pub fn new(channels: usize, count: usize, data: Vec<u16>) -> Self {
		debug_assert_eq!(data.len(), channels * count);
		Self { channels, count, data }
	}

	/// Values per frame.
	pub fn channels(&self) -> usize {
		self.channels
	}

	/// Number of frames.
	pub fn len(&self) -> usize {
		self.count
	}

	/// Whether no frames are stored.
	pub fn is_empty(&self) -> bool {
		self.count == 0
	}

	/// Quantized values of frame `index`.
	pub fn get(&self, index: usize) -> Option<&[u16]> {
		if index >= self.count {
			return None;
		}
		let start = index * self.channels;
		self.data.get(start..start + self.channels)
	}
}

/// Load `num_frames` rows of `num_framechannels` little-endian `u16` values.
///
/// Frames without channels need no bytes, so they exist even when the frame offset is zero.
pub fn read_frames(bytes: &[u8], header: &IqmHeader) -> Result<Frames> {
	let channels = header.num_framechannels as usize;
	let count = header.num_frames as usize;
	if channels == 0 {
		return Ok(Frames::new(0, count, Vec::new()));
	}
	if header.ofs_frames == 0 || count == 0 {
		return Ok(Frames::default());
	}

	let mut cursor = Cursor::at(bytes, "frames", header.ofs_frames as usize)?;
	let mut data = Vec::with_capacity((channels * count).min(cursor.remaining() / 2));
	for index in 0..count {
		for _ in 0..channels {
			data.push(cursor.read_u16_le().map_err(|err| with_section(err, "frames", index))?);
		}
	}

	tracing::debug!(count, channels, offset = header.ofs_frames, "decoded frames");
	Ok(Frames::new(channels, count, data))
}

/// Sum of animated channels over all poses: the frame row length the masks imply.
pub fn channel_count(poses: &[Pose]) -> usize {
	poses.iter().map(Pose::animated_channels).sum()
}

/// Reconstruct every pose's transform for one frame.
///
/// Values are packed pose after pose, so one read cursor runs across the whole frame: a pose only
/// consumes as many values as it has animated channels.
pub fn reconstruct_frame(poses: &[Pose], frame: &[u16]) -> Result<Vec<Transform>> {
	let mut p = 0;
	let mut out = Vec::with_capacity(poses.len());

	for (pose_index, pose) in poses.iter().enumerate() {
		let mut channels = pose.offset.map(f64::from);
		for (channel, value) in channels.iter_mut().enumerate() {
			if !pose.is_animated(channel) {
				continue;
			}
			let raw = *frame.get(p).ok_or(IqmError::FrameUnderrun {
				pose: pose_index,
				channel,
				len: frame.len(),
			})?;
			*value += f64::from(pose.scale[channel]) * f64::from(raw);
			p += 1;
		}
		out.push(Transform::from_channels(channels));
	}

	Ok(out)
}
