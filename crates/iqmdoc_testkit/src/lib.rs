//! Shared test helpers: a synthetic IQM v2 container writer and fixture paths.

use std::fs;
use std::path::{Path, PathBuf};

/// Identity transform: zero position, identity quaternion, unit scale.
pub const IDENTITY: [f32; 10] = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];

/// Vertex array element format ids.
pub mod format {
	/// Signed byte.
	pub const BYTE: u32 = 0;
	/// Unsigned byte.
	pub const UBYTE: u32 = 1;
	/// Signed short.
	pub const SHORT: u32 = 2;
	/// 32-bit float.
	pub const FLOAT: u32 = 7;
}

/// Standard vertex array type ids.
pub mod semantic {
	/// Vertex position.
	pub const POSITION: u32 = 0;
	/// Texture coordinate.
	pub const TEXCOORD: u32 = 1;
	/// Vertex normal.
	pub const NORMAL: u32 = 2;
	/// Tangent.
	pub const TANGENT: u32 = 3;
	/// Joint indices.
	pub const BLENDINDEXES: u32 = 4;
	/// Joint weights.
	pub const BLENDWEIGHTS: u32 = 5;
	/// Vertex color.
	pub const COLOR: u32 = 6;
}

struct PendingArray {
	kind: u32,
	format: u32,
	size: u32,
	data: Vec<u8>,
}

/// Builder for in-memory IQM v2 containers.
pub struct IqmBuilder {
	magic: [u8; 16],
	version: u32,
	text: Vec<u8>,
	comment: Vec<u8>,
	joints: Vec<[u8; 48]>,
	poses: Vec<u8>,
	num_poses: u32,
	pose_channels: u32,
	anims: Vec<u8>,
	num_anims: u32,
	frames: Vec<Vec<u16>>,
	framechannels: Option<u32>,
	vertex_arrays: Vec<PendingArray>,
	num_vertexes: u32,
	triangles: Vec<[u32; 3]>,
	adjacency: Vec<[u32; 3]>,
	meshes: Vec<[u32; 6]>,
	bounds: Vec<[f32; 8]>,
}

impl Default for IqmBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl IqmBuilder {
	/// Start an empty container whose text pool begins with the empty string.
	pub fn new() -> Self {
		Self {
			magic: *b"INTERQUAKEMODEL\0",
			version: 2,
			text: vec![0],
			comment: Vec::new(),
			joints: Vec::new(),
			poses: Vec::new(),
			num_poses: 0,
			pose_channels: 0,
			anims: Vec::new(),
			num_anims: 0,
			frames: Vec::new(),
			framechannels: None,
			vertex_arrays: Vec::new(),
			num_vertexes: 0,
			triangles: Vec::new(),
			adjacency: Vec::new(),
			meshes: Vec::new(),
			bounds: Vec::new(),
		}
	}

	/// Override the leading signature.
	pub fn magic(&mut self, magic: [u8; 16]) -> &mut Self {
		self.magic = magic;
		self
	}

	/// Override the container version.
	pub fn version(&mut self, version: u32) -> &mut Self {
		self.version = version;
		self
	}

	/// Append a string to the text pool and return its offset.
	pub fn text(&mut self, value: &str) -> u32 {
		let offset = self.text.len() as u32;
		self.text.extend_from_slice(value.as_bytes());
		self.text.push(0);
		offset
	}

	/// Append a joint record.
	pub fn joint(&mut self, name: &str, parent: i32, transform: [f32; 10]) -> &mut Self {
		let name = self.text(name);
		let mut record = Vec::with_capacity(48);
		record.extend_from_slice(&name.to_le_bytes());
		record.extend_from_slice(&parent.to_le_bytes());
		for value in transform {
			record.extend_from_slice(&value.to_le_bytes());
		}
		let mut out = [0_u8; 48];
		out.copy_from_slice(&record);
		self.joints.push(out);
		self
	}

	/// Append a pose channel descriptor.
	pub fn pose(&mut self, parent: i32, mask: u32, offsets: [f32; 10], scales: [f32; 10]) -> &mut Self {
		self.poses.extend_from_slice(&parent.to_le_bytes());
		self.poses.extend_from_slice(&mask.to_le_bytes());
		for value in offsets.into_iter().chain(scales) {
			self.poses.extend_from_slice(&value.to_le_bytes());
		}
		self.num_poses += 1;
		self.pose_channels += (mask & 0x3FF).count_ones();
		self
	}

	/// Append an animation clip record.
	pub fn anim(&mut self, name: &str, first_frame: u32, num_frames: u32, framerate: f32, flags: u32) -> &mut Self {
		let name = self.text(name);
		for word in [name, first_frame, num_frames] {
			self.anims.extend_from_slice(&word.to_le_bytes());
		}
		self.anims.extend_from_slice(&framerate.to_le_bytes());
		self.anims.extend_from_slice(&flags.to_le_bytes());
		self.num_anims += 1;
		self
	}

	/// Append one frame of quantized channel values.
	pub fn frame(&mut self, values: Vec<u16>) -> &mut Self {
		self.frames.push(values);
		self
	}

	/// Override the declared channel count per frame.
	pub fn framechannels(&mut self, count: u32) -> &mut Self {
		self.framechannels = Some(count);
		self
	}

	/// Set the number of vertices each vertex array holds.
	pub fn vertexes(&mut self, count: u32) -> &mut Self {
		self.num_vertexes = count;
		self
	}

	/// Append a float vertex array.
	pub fn float_array(&mut self, kind: u32, size: u32, values: &[f32]) -> &mut Self {
		let data = values.iter().flat_map(|value| value.to_le_bytes()).collect();
		self.raw_array(kind, format::FLOAT, size, data)
	}

	/// Append an unsigned byte vertex array.
	pub fn ubyte_array(&mut self, kind: u32, size: u32, values: &[u8]) -> &mut Self {
		self.raw_array(kind, format::UBYTE, size, values.to_vec())
	}

	/// Append a custom float vertex array named through the text pool.
	pub fn custom_float_array(&mut self, name: &str, size: u32, values: &[f32]) -> &mut Self {
		let kind = 16 + self.text(name);
		self.float_array(kind, size, values)
	}

	/// Append a custom unsigned byte vertex array named through the text pool.
	pub fn custom_ubyte_array(&mut self, name: &str, size: u32, values: &[u8]) -> &mut Self {
		let kind = 16 + self.text(name);
		self.ubyte_array(kind, size, values)
	}

	/// Append a vertex array with arbitrary format id and payload bytes.
	pub fn raw_array(&mut self, kind: u32, format: u32, size: u32, data: Vec<u8>) -> &mut Self {
		self.vertex_arrays.push(PendingArray { kind, format, size, data });
		self
	}

	/// Append a triangle of global vertex indices.
	pub fn triangle(&mut self, indices: [u32; 3]) -> &mut Self {
		self.triangles.push(indices);
		self
	}

	/// Append a triangle adjacency record.
	pub fn adjacency(&mut self, neighbours: [u32; 3]) -> &mut Self {
		self.adjacency.push(neighbours);
		self
	}

	/// Append a mesh record.
	pub fn mesh(&mut self, name: &str, material: &str, first_vertex: u32, num_vertexes: u32, first_triangle: u32, num_triangles: u32) -> &mut Self {
		let name = self.text(name);
		let material = self.text(material);
		self.meshes.push([name, material, first_vertex, num_vertexes, first_triangle, num_triangles]);
		self
	}

	/// Append a per-frame bounds record (`bbmin`, `bbmax`, `xyradius`, `radius`).
	pub fn bounds(&mut self, record: [f32; 8]) -> &mut Self {
		self.bounds.push(record);
		self
	}

	/// Set the comment blob.
	pub fn comment(&mut self, value: &str) -> &mut Self {
		self.comment = value.as_bytes().to_vec();
		self.comment.push(0);
		self
	}

	/// Serialize the container.
	pub fn build(&self) -> Vec<u8> {
		let mut body = Vec::new();
		let base = 124_u32;
		let place = |body: &mut Vec<u8>, bytes: &[u8]| -> u32 {
			if bytes.is_empty() {
				return 0;
			}
			let offset = base + body.len() as u32;
			body.extend_from_slice(bytes);
			offset
		};

		let ofs_text = place(&mut body, &self.text);

		let mesh_bytes: Vec<u8> = self.meshes.iter().flatten().flat_map(|word| word.to_le_bytes()).collect();
		let ofs_meshes = place(&mut body, &mesh_bytes);

		let mut data_offsets = Vec::with_capacity(self.vertex_arrays.len());
		for array in &self.vertex_arrays {
			data_offsets.push(place(&mut body, &array.data));
		}
		let descriptor_bytes: Vec<u8> = self
			.vertex_arrays
			.iter()
			.zip(&data_offsets)
			.flat_map(|(array, offset)| [array.kind, 0, array.format, array.size, *offset])
			.flat_map(|word| word.to_le_bytes())
			.collect();
		let ofs_vertexarrays = place(&mut body, &descriptor_bytes);

		let triangle_bytes: Vec<u8> = self.triangles.iter().flatten().flat_map(|word| word.to_le_bytes()).collect();
		let ofs_triangles = place(&mut body, &triangle_bytes);
		let adjacency_bytes: Vec<u8> = self.adjacency.iter().flatten().flat_map(|word| word.to_le_bytes()).collect();
		let ofs_adjacency = place(&mut body, &adjacency_bytes);

		let joint_bytes: Vec<u8> = self.joints.iter().flatten().copied().collect();
		let ofs_joints = place(&mut body, &joint_bytes);
		let ofs_poses = place(&mut body, &self.poses);
		let ofs_anims = place(&mut body, &self.anims);

		let frame_bytes: Vec<u8> = self.frames.iter().flatten().flat_map(|value| value.to_le_bytes()).collect();
		let ofs_frames = place(&mut body, &frame_bytes);
		let bounds_bytes: Vec<u8> = self.bounds.iter().flatten().flat_map(|value| value.to_le_bytes()).collect();
		let ofs_bounds = place(&mut body, &bounds_bytes);
		let ofs_comment = place(&mut body, &self.comment);

		let framechannels = self
			.framechannels
			.unwrap_or_else(|| self.frames.first().map_or(self.pose_channels, |frame| frame.len() as u32));

		let fields = [
			self.version,
			base + body.len() as u32,
			0,
			self.text.len() as u32,
			ofs_text,
			self.meshes.len() as u32,
			ofs_meshes,
			self.vertex_arrays.len() as u32,
			self.num_vertexes,
			ofs_vertexarrays,
			self.triangles.len() as u32,
			ofs_triangles,
			ofs_adjacency,
			self.joints.len() as u32,
			ofs_joints,
			self.num_poses,
			ofs_poses,
			self.num_anims,
			ofs_anims,
			self.frames.len() as u32,
			framechannels,
			ofs_frames,
			ofs_bounds,
			self.comment.len() as u32,
			ofs_comment,
			0,
			0,
		];

		let mut out = Vec::with_capacity(124 + body.len());
		out.extend_from_slice(&self.magic);
		for word in fields {
			out.extend_from_slice(&word.to_le_bytes());
		}
		out.extend_from_slice(&body);
		out
	}
}

/// Write `bytes` to `<dir>/<name>` and return the path.
pub fn write_fixture(dir: impl AsRef<Path>, name: &str, bytes: &[u8]) -> PathBuf {
	let dir = dir.as_ref();
	fs::create_dir_all(dir).expect("fixture directory is creatable");
	let path = dir.join(name);
	fs::write(&path, bytes).expect("fixture is writable");
	path
}
