use crate::iqm::bytes::Cursor;
use crate::iqm::{IqmError, Result};

/// Parsed IQM v2 file header and section table.
///
/// Offsets are absolute file positions; zero marks an absent section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IqmHeader {
	/// Container version.
	pub version: u32,
	/// Declared file size in bytes.
	pub filesize: u32,
	/// Header flags word.
	pub flags: u32,
	/// Text pool size in bytes.
	pub num_text: u32,
	/// Text pool offset.
	pub ofs_text: u32,
	/// Mesh record count.
	pub num_meshes: u32,
	/// Mesh table offset.
	pub ofs_meshes: u32,
	/// Vertex array descriptor count.
	pub num_vertexarrays: u32,
	/// Vertices per vertex array.
	pub num_vertexes: u32,
	/// Vertex array descriptor table offset.
	pub ofs_vertexarrays: u32,
	/// Triangle count.
	pub num_triangles: u32,
	/// Triangle table offset.
	pub ofs_triangles: u32,
	/// Triangle adjacency table offset.
	pub ofs_adjacency: u32,
	/// Joint count.
	pub num_joints: u32,
	/// Joint table offset.
	pub ofs_joints: u32,
	/// Pose count.
	pub num_poses: u32,
	/// Pose table offset.
	pub ofs_poses: u32,
	/// Animation count.
	pub num_anims: u32,
	/// Animation table offset.
	pub ofs_anims: u32,
	/// Frame count.
	pub num_frames: u32,
	/// Quantized values per frame.
	pub num_framechannels: u32,
	/// Frame data offset.
	pub ofs_frames: u32,
	/// Per-frame bounds offset.
	pub ofs_bounds: u32,
	/// Comment blob size in bytes.
	pub num_comment: u32,
	/// Comment blob offset.
	pub ofs_comment: u32,
	/// Extension count.
	pub num_extensions: u32,
	/// First extension offset.
	pub ofs_extensions: u32,
}

impl IqmHeader {
	/// Fixed header size in bytes.
	pub const SIZE: usize = 124;
	/// Required leading signature.
	pub const MAGIC: [u8; 16] = *b"INTERQUAKEMODEL\0";
	/// The only supported container version.
	pub const VERSION: u32 = 2;

	/// Parse and validate the header at the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::new(bytes);
		if bytes.len() < 16 {
			return Err(IqmError::BadSignature { magic: first16(bytes) });
		}

		let magic = cursor.read_code16()?;
		if magic != Self::MAGIC {
			return Err(IqmError::BadSignature { magic });
		}

		let version = cursor.read_u32_le()?;
		if version != Self::VERSION {
			return Err(IqmError::UnsupportedVersion { version });
		}

		let mut next = || cursor.read_u32_le();
		Ok(Self {
			version,
			filesize: next()?,
			flags: next()?,
			num_text: next()?,
			ofs_text: next()?,
			num_meshes: next()?,
			ofs_meshes: next()?,
			num_vertexarrays: next()?,
			num_vertexes: next()?,
			ofs_vertexarrays: next()?,
			num_triangles: next()?,
			ofs_triangles: next()?,
			ofs_adjacency: next()?,
			num_joints: next()?,
			ofs_joints: next()?,
			num_poses: next()?,
			ofs_poses: next()?,
			num_anims: next()?,
			ofs_anims: next()?,
			num_frames: next()?,
			num_framechannels: next()?,
			ofs_frames: next()?,
			ofs_bounds: next()?,
			num_comment: next()?,
			ofs_comment: next()?,
			num_extensions: next()?,
			ofs_extensions: next()?,
		})
	}
}

fn first16(bytes: &[u8]) -> [u8; 16] {
	let mut magic = [0_u8; 16];
	let take = bytes.len().min(16);
	magic[..take].copy_from_slice(&bytes[..take]);
	magic
}
