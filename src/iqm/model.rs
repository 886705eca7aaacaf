use crate::iqm::{
	Adjacency, Anim, Bounds, Frames, IqmError, IqmFile, Joint, Mesh, Pose, Result, Transform, Triangle, VertexArrays, channel_count, read_adjacency,
	read_anims, read_bounds, read_frames, read_joints, read_meshes, read_poses, read_triangles, read_vertex_arrays, reconstruct_frame,
};

/// Consistency checks applied on top of the structural ones.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
	/// Reject files whose frame channel count disagrees with the pose masks, or whose pose and joint
	/// counts differ. When off, mismatches are only logged.
	pub check_channels: bool,
}

impl Default for ReadOptions {
	fn default() -> Self {
		Self { check_channels: true }
	}
}

impl ReadOptions {
	/// Log consistency mismatches instead of failing.
	pub fn lenient() -> Self {
		Self { check_channels: false }
	}
}

/// Every decoded entity of one IQM file.
#[derive(Debug, Clone)]
pub struct IqmModel {
	/// Skeleton in file order; `None` when the joint section is absent.
	pub joints: Option<Vec<Joint>>,
	/// Vertex arrays; `None` when the vertex array section is absent.
	pub vertex_arrays: Option<VertexArrays>,
	/// Global triangle table.
	pub triangles: Vec<Triangle>,
	/// Submeshes.
	pub meshes: Vec<Mesh>,
	/// Pose channel descriptors.
	pub poses: Vec<Pose>,
	/// Raw frames.
	pub frames: Frames,
	/// Animation clips.
	pub anims: Vec<Anim>,
}

impl IqmModel {
	/// Decode all sections in dependency order.
	pub fn read(file: &IqmFile, options: &ReadOptions) -> Result<Self> {
		let header = &file.header;
		let bytes = file.bytes();
		let text = file.text()?;

		let joints = if header.ofs_joints != 0 { Some(read_joints(bytes, header, &text)?) } else { None };
		let vertex_arrays = if header.ofs_vertexarrays != 0 {
			Some(read_vertex_arrays(bytes, header, &text)?)
		} else {
			None
		};
		let triangles = read_triangles(bytes, header)?;
		let meshes = read_meshes(bytes, header, &text, triangles.len())?;
		let poses = read_poses(bytes, header)?;
		let frames = read_frames(bytes, header)?;
		check_consistency(options, &poses, joints.as_deref().unwrap_or_default(), header.num_framechannels, frames.len())?;
		let anims = read_anims(bytes, header, &text, frames.len())?;

		Ok(Self {
			joints,
			vertex_arrays,
			triangles,
			meshes,
			poses,
			frames,
			anims,
		})
	}

	/// Reconstruct every pose transform of global frame `index`.
	pub fn frame_transforms(&self, index: usize) -> Result<Vec<Transform>> {
		let frame = self.frames.get(index).ok_or(IqmError::FrameIndexOutOfRange {
			index,
			num_frames: self.frames.len(),
		})?;
		reconstruct_frame(&self.poses, frame)
	}
}

/// Per-file auxiliary sections that the text export does not carry.
#[derive(Debug, Clone)]
pub struct IqmExtras {
	/// Per-frame bounds.
	pub bounds: Vec<Bounds>,
	/// Triangle adjacency.
	pub adjacency: Vec<Adjacency>,
	/// Comment text.
	pub comment: Option<String>,
}

impl IqmExtras {
	/// Decode bounds, adjacency and comment.
	pub fn read(file: &IqmFile) -> Result<Self> {
		Ok(Self {
			bounds: read_bounds(file.bytes(), &file.header)?,
			adjacency: read_adjacency(file.bytes(), &file.header)?,
			comment: file.comment()?,
		})
	}
}

fn check_consistency(options: &ReadOptions, poses: &[Pose], joints: &[Joint], declared: u32, num_frames: usize) -> Result<()> {
	let expected = channel_count(poses);
	if num_frames > 0 && expected != declared as usize {
		if options.check_channels {
			return Err(IqmError::FrameChannelMismatch { declared, expected });
		}
		tracing::warn!(declared, expected, "frame channel count does not match pose masks");
	}

	if !poses.is_empty() && !joints.is_empty() && poses.len() != joints.len() {
		if options.check_channels {
			return Err(IqmError::PoseJointMismatch {
				poses: poses.len(),
				joints: joints.len(),
			});
		}
		tracing::warn!(poses = poses.len(), joints = joints.len(), "pose count does not match joint count");
	}

	Ok(())
}

#[cfg(test)]
mod tests;
