/// Reconstructed local transform: the 10 scalar channels of one joint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
	/// Channels 0..3.
	pub translate: [f64; 3],
	/// Channels 3..7, quaternion `x y z w`.
	pub rotate: [f64; 4],
	/// Channels 7..10.
	pub scale: [f64; 3],
}

impl Transform {
	/// Number of scalar channels.
	pub const CHANNELS: usize = 10;
	/// Tolerance under which a scale component counts as exactly one.
	pub const SCALE_EPSILON: f64 = 0.0001;

	/// Split a flat channel array into position, rotation and scale.
	pub fn from_channels(channels: [f64; Self::CHANNELS]) -> Self {
		Self {
			translate: [channels[0], channels[1], channels[2]],
			rotate: [channels[3], channels[4], channels[5], channels[6]],
			scale: [channels[7], channels[8], channels[9]],
		}
	}

	/// Widen single-precision file channels.
	pub fn from_f32_channels(channels: [f32; Self::CHANNELS]) -> Self {
		Self::from_channels(channels.map(f64::from))
	}

	/// Scale triple, or `None` when it is within [`Self::SCALE_EPSILON`] of `(1, 1, 1)`.
	///
	/// Absent scale is implicitly unit scale.
	pub fn explicit_scale(&self) -> Option<[f64; 3]> {
		if self.scale.iter().any(|value| (value - 1.0).abs() > Self::SCALE_EPSILON) {
			Some(self.scale)
		} else {
			None
		}
	}
}
