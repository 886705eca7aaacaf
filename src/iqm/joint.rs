use crate::iqm::bytes::read_records;
use crate::iqm::{IqmHeader, Result, TextPool, Transform};

/// One skeleton joint with its bind-pose local transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
	/// Resolved joint name.
	pub name: String,
	/// Parent joint index; negative means root.
	pub parent: i32,
	/// Raw position, rotation and scale channels.
	pub channels: [f32; 10],
}

impl Joint {
	/// On-disk record size.
	pub const RECORD_SIZE: usize = 48;

	/// Parent index when it addresses one of `joint_count` joints.
	///
	/// Parents are not validated at decode time; dangling or negative values yield `None`.
	pub fn parent_index(&self, joint_count: usize) -> Option<usize> {
		usize::try_from(self.parent).ok().filter(|index| *index < joint_count)
	}

	/// Bind-pose transform.
	pub fn bind_pose(&self) -> Transform {
		Transform::from_f32_channels(self.channels)
	}
}

/// Decode the joint table in file order.
pub fn read_joints(bytes: &[u8], header: &IqmHeader, text: &TextPool) -> Result<Vec<Joint>> {
	read_records(bytes, "joints", header.ofs_joints, header.num_joints, Joint::RECORD_SIZE, |cursor| {
		let name = cursor.read_u32_le()?;
		let parent = cursor.read_i32_le()?;
		let channels = cursor.read_f32s_le::<10>()?;
		Ok(Joint {
			name: text.resolve(name)?,
			parent,
			channels,
		})
	})
}
