use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, IqmError>;

/// Errors produced while reading and decoding `.iqm` data.
#[derive(Debug, Error)]
pub enum IqmError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Text output could not be written.
	#[error("format: {0}")]
	Fmt(#[from] std::fmt::Error),
	/// Leading 16-byte signature is not `INTERQUAKEMODEL\0`.
	#[error("not an IQM file (magic={magic:?})")]
	BadSignature {
		/// First up-to-16 bytes of the stream.
		magic: [u8; 16],
	},
	/// Container version other than the supported one.
	#[error("unsupported IQM version {version} (expected 2)")]
	UnsupportedVersion {
		/// Parsed version field.
		version: u32,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// A section offset points past the end of its backing data.
	#[error("{section} offset {offset} out of range (len={len})")]
	OffsetOutOfRange {
		/// Section being dereferenced.
		section: &'static str,
		/// Offending offset.
		offset: usize,
		/// Length of the addressed data.
		len: usize,
	},
	/// A table record ran past the end of the file.
	#[error("{section}[{index}] truncated at offset {at}, need {need} bytes, remaining {rem}")]
	TruncatedSection {
		/// Table being decoded.
		section: &'static str,
		/// Record index within the table.
		index: usize,
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Text pool string has no terminating zero byte.
	#[error("unterminated string at text offset {offset}")]
	UnterminatedString {
		/// Text pool offset of the string start.
		offset: usize,
	},
	/// Vertex array element format the decoder cannot load.
	#[error("can only handle ubyte and float arrays (vertexarray {index} has format {format} {label})")]
	UnsupportedElementFormat {
		/// Descriptor index.
		index: usize,
		/// Raw format id.
		format: u32,
		/// Format name, or `unknown`.
		label: &'static str,
	},
	/// More custom vertex arrays than available custom slots.
	#[error("too many custom vertex arrays (max {max})")]
	TooManyCustomArrays {
		/// Number of custom slots.
		max: usize,
	},
	/// Mesh vertex or triangle range exceeds the loaded data.
	#[error("mesh {index} {kind} range {first}+{count} exceeds {available}")]
	MeshRangeOutOfRange {
		/// Mesh record index.
		index: usize,
		/// `vertex` or `triangle`.
		kind: &'static str,
		/// First element of the range.
		first: u32,
		/// Element count of the range.
		count: u32,
		/// Number of elements actually loaded.
		available: usize,
	},
	/// Animation frame range exceeds the frame table.
	#[error("animation {index} frame range {first}+{count} exceeds {num_frames} frames")]
	AnimFrameRangeOutOfRange {
		/// Animation record index.
		index: usize,
		/// First frame.
		first: u32,
		/// Frame count.
		count: u32,
		/// Frames in the file.
		num_frames: usize,
	},
	/// Requested frame does not exist.
	#[error("frame {index} out of range ({num_frames} frames)")]
	FrameIndexOutOfRange {
		/// Requested frame.
		index: usize,
		/// Frames in the file.
		num_frames: usize,
	},
	/// Frame stream ended before every masked channel was read.
	#[error("frame underrun at pose {pose} channel {channel}: frame has {len} values")]
	FrameUnderrun {
		/// Pose index being reconstructed.
		pose: usize,
		/// Channel index being reconstructed.
		channel: usize,
		/// Values available in the frame.
		len: usize,
	},
	/// Declared frame channel count disagrees with the pose masks.
	#[error("frame channel count {declared} does not match pose masks ({expected})")]
	FrameChannelMismatch {
		/// `num_framechannels` from the header.
		declared: u32,
		/// Sum of set mask bits over all poses.
		expected: usize,
	},
	/// Pose table length disagrees with the joint table length.
	#[error("pose count {poses} does not match joint count {joints}")]
	PoseJointMismatch {
		/// Number of poses.
		poses: usize,
		/// Number of joints.
		joints: usize,
	},
}
