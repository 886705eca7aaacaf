use crate::iqm::bytes::read_records;
use crate::iqm::{IqmHeader, Result};

/// Per-frame bounding volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
	/// Box minimum corner.
	pub bbmin: [f32; 3],
	/// Box maximum corner.
	pub bbmax: [f32; 3],
	/// Radius in the XY plane.
	pub xyradius: f32,
	/// Bounding sphere radius.
	pub radius: f32,
}

/// Decode one bounds record per frame.
pub fn read_bounds(bytes: &[u8], header: &IqmHeader) -> Result<Vec<Bounds>> {
	read_records(bytes, "bounds", header.ofs_bounds, header.num_frames, 32, |cursor| {
		Ok(Bounds {
			bbmin: cursor.read_f32s_le()?,
			bbmax: cursor.read_f32s_le()?,
			xyradius: cursor.read_f32_le()?,
			radius: cursor.read_f32_le()?,
		})
	})
}
