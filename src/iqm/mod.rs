mod anim;
mod bounds;
mod bytes;
mod compression;
mod error;
mod file;
mod frame;
mod header;
mod iqe;
mod joint;
mod mesh;
mod model;
mod pose;
mod text;
mod transform;
mod vertex;

/// Animation clip records.
pub use anim::{Anim, read_anims};
/// Per-frame bounds records.
pub use bounds::{Bounds, read_bounds};
/// Compression detection result.
pub use compression::Compression;
/// Error and result aliases.
pub use error::{IqmError, Result};
/// File abstraction.
pub use file::IqmFile;
/// Frame storage and per-frame transform reconstruction.
pub use frame::{Frames, channel_count, read_frames, reconstruct_frame};
/// File header representation.
pub use header::IqmHeader;
/// IQE text export.
pub use iqe::{fmt_g, write_iqe};
/// Skeleton joint records.
pub use joint::{Joint, read_joints};
/// Triangle, adjacency and mesh records.
pub use mesh::{Adjacency, Mesh, MeshView, Triangle, read_adjacency, read_meshes, read_triangles};
/// Whole-file decode entry points.
pub use model::{IqmExtras, IqmModel, ReadOptions};
/// Pose channel descriptors.
pub use pose::{Pose, read_poses};
/// String pool.
pub use text::TextPool;
/// Reconstructed joint transform.
pub use transform::Transform;
/// Vertex array semantics, formats and storage.
pub use vertex::{
	ElementFormat, StandardSemantic, VertexArray, VertexArrayDesc, VertexArrays, VertexData, VertexSemantic, VertexValues, read_vertex_array_descs,
	read_vertex_arrays,
};
