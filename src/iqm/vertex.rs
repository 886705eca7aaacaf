use crate::iqm::bytes::{Cursor, read_records, with_section};
use crate::iqm::{IqmError, IqmHeader, Result, TextPool};

/// Built-in vertex attribute kinds (type ids below 16).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardSemantic {
	/// Vertex position.
	Position,
	/// Texture coordinate.
	TexCoord,
	/// Vertex normal.
	Normal,
	/// Tangent with handedness.
	Tangent,
	/// Joint indices for skinning.
	BlendIndexes,
	/// Joint weights for skinning.
	BlendWeights,
	/// Vertex color.
	Color,
	/// Unassigned type id in `7..16`.
	Reserved(u32),
}

impl StandardSemantic {
	/// Map a type id below 16.
	pub fn from_id(id: u32) -> Option<Self> {
		Some(match id {
			0 => Self::Position,
			1 => Self::TexCoord,
			2 => Self::Normal,
			3 => Self::Tangent,
			4 => Self::BlendIndexes,
			5 => Self::BlendWeights,
			6 => Self::Color,
			7..16 => Self::Reserved(id),
			_ => return None,
		})
	}

	/// Type id, which is also the storage slot.
	pub fn id(self) -> u32 {
		match self {
			Self::Position => 0,
			Self::TexCoord => 1,
			Self::Normal => 2,
			Self::Tangent => 3,
			Self::BlendIndexes => 4,
			Self::BlendWeights => 5,
			Self::Color => 6,
			Self::Reserved(id) => id,
		}
	}

	/// IQE label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Position => "position",
			Self::TexCoord => "texcoord",
			Self::Normal => "normal",
			Self::Tangent => "tangent",
			Self::BlendIndexes => "blendindexes",
			Self::BlendWeights => "blendweights",
			Self::Color => "color",
			Self::Reserved(_) => "reserved",
		}
	}
}

/// Resolved meaning of one vertex array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VertexSemantic {
	/// Built-in attribute.
	Standard(StandardSemantic),
	/// Application attribute named through the text pool.
	Custom {
		/// Attribute name.
		name: String,
		/// Synthetic slot, assigned from 16 in descriptor order.
		slot: u32,
	},
}

impl VertexSemantic {
	/// Storage slot in `0..VertexArrays::SLOTS`.
	pub fn slot(&self) -> usize {
		match self {
			Self::Standard(item) => item.id() as usize,
			Self::Custom { slot, .. } => *slot as usize,
		}
	}

	/// IQE label, `customN` for custom slots.
	pub fn label(&self) -> String {
		match self {
			Self::Standard(item) => item.as_str().to_owned(),
			Self::Custom { slot, .. } => format!("custom{}", slot - VertexArrays::CUSTOM_BASE),
		}
	}

	/// Custom attribute name, if any.
	pub fn custom_name(&self) -> Option<&str> {
		match self {
			Self::Standard(_) => None,
			Self::Custom { name, .. } => Some(name),
		}
	}
}

/// Element storage formats the container can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementFormat {
	/// `i8`.
	Byte,
	/// `u8`.
	UByte,
	/// `i16`.
	Short,
	/// `u16`.
	UShort,
	/// `i32`.
	Int,
	/// `u32`.
	UInt,
	/// IEEE half float.
	Half,
	/// `f32`.
	Float,
	/// `f64`.
	Double,
}

impl ElementFormat {
	/// Map a format id.
	pub fn from_id(id: u32) -> Option<Self> {
		Some(match id {
			0 => Self::Byte,
			1 => Self::UByte,
			2 => Self::Short,
			3 => Self::UShort,
			4 => Self::Int,
			5 => Self::UInt,
			6 => Self::Half,
			7 => Self::Float,
			8 => Self::Double,
			_ => return None,
		})
	}

	/// IQE label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Byte => "byte",
			Self::UByte => "ubyte",
			Self::Short => "short",
			Self::UShort => "ushort",
			Self::Int => "int",
			Self::UInt => "uint",
			Self::Half => "half",
			Self::Float => "float",
			Self::Double => "double",
		}
	}
}

/// Loaded element storage; only the decodable formats exist here.
#[derive(Debug, Clone, PartialEq)]
pub enum VertexData {
	/// Unsigned bytes.
	UByte(Vec<u8>),
	/// Single-precision floats.
	Float(Vec<f32>),
}

impl VertexData {
	/// Declared storage format.
	pub fn format(&self) -> ElementFormat {
		match self {
			Self::UByte(_) => ElementFormat::UByte,
			Self::Float(_) => ElementFormat::Float,
		}
	}
}

/// Components of one vertex, borrowed from its array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexValues<'a> {
	/// Unsigned byte components.
	UByte(&'a [u8]),
	/// Float components.
	Float(&'a [f32]),
}

impl VertexValues<'_> {
	/// Number of components.
	pub fn len(&self) -> usize {
		match self {
			Self::UByte(items) => items.len(),
			Self::Float(items) => items.len(),
		}
	}

	/// Whether there are no components.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Component `index` widened to `f64`.
	pub fn get(&self, index: usize) -> Option<f64> {
		match self {
			Self::UByte(items) => items.get(index).map(|value| f64::from(*value)),
			Self::Float(items) => items.get(index).map(|value| f64::from(*value)),
		}
	}
}

/// One decoded vertex attribute array.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexArray {
	/// Resolved attribute meaning.
	pub semantic: VertexSemantic,
	/// Raw descriptor flags.
	pub flags: u32,
	/// Components per vertex.
	pub size: usize,
	/// Loaded elements, `num_vertexes * size` long.
	pub data: VertexData,
}

impl VertexArray {
	/// Storage format.
	pub fn format(&self) -> ElementFormat {
		self.data.format()
	}

	/// Components of vertex `index`.
	pub fn vertex(&self, index: usize) -> Option<VertexValues<'_>> {
		let start = index.checked_mul(self.size)?;
		let end = start.checked_add(self.size)?;
		match &self.data {
			VertexData::UByte(items) => items.get(start..end).map(VertexValues::UByte),
			VertexData::Float(items) => items.get(start..end).map(VertexValues::Float),
		}
	}
}

/// Raw vertex array descriptor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexArrayDesc {
	/// Type id; 16 and above encode `16 + name offset`.
	pub kind: u32,
	/// Flags word.
	pub flags: u32,
	/// Element format id.
	pub format: u32,
	/// Components per vertex.
	pub size: u32,
	/// Absolute offset of the element data.
	pub offset: u32,
}

impl VertexArrayDesc {
	/// On-disk record size.
	pub const RECORD_SIZE: usize = 20;
}

const SLOT_COUNT: usize = 26;

/// All vertex arrays of a file, addressable by semantic slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexArrays {
	/// Vertices per array.
	pub num_vertexes: usize,
	arrays: Vec<VertexArray>,
	slots: [Option<usize>; SLOT_COUNT],
}

impl VertexArrays {
	/// First custom slot.
	pub const CUSTOM_BASE: u32 = 16;
	/// Number of custom slots.
	pub const MAX_CUSTOM: usize = SLOT_COUNT - Self::CUSTOM_BASE as usize;
	/// Total addressable slots.
	pub const SLOTS: usize = SLOT_COUNT;

	/// Arrays in descriptor order.
	pub fn arrays(&self) -> &[VertexArray] {
		&self.arrays
	}

	/// Array stored in `slot`, if any.
	pub fn slot(&self, slot: usize) -> Option<&VertexArray> {
		self.slots.get(slot).copied().flatten().map(|index| &self.arrays[index])
	}

	/// Array for a built-in semantic.
	pub fn standard(&self, semantic: StandardSemantic) -> Option<&VertexArray> {
		self.slot(semantic.id() as usize)
	}

	/// Occupied custom slots in slot order.
	pub fn custom(&self) -> impl Iterator<Item = &VertexArray> + '_ {
		(Self::CUSTOM_BASE as usize..Self::SLOTS).filter_map(|slot| self.slot(slot))
	}

	fn insert(&mut self, array: VertexArray) {
		let slot = array.semantic.slot();
		if let Some(previous) = self.slots[slot] {
			tracing::warn!(slot, previous, replacement = self.arrays.len(), "vertex array slot declared twice, keeping the later one");
		}
		self.slots[slot] = Some(self.arrays.len());
		self.arrays.push(array);
	}
}

/// Decode the descriptor table without touching element data.
pub fn read_vertex_array_descs(bytes: &[u8], header: &IqmHeader) -> Result<Vec<VertexArrayDesc>> {
	read_records(bytes, "vertexarrays", header.ofs_vertexarrays, header.num_vertexarrays, VertexArrayDesc::RECORD_SIZE, |cursor| {
		Ok(VertexArrayDesc {
			kind: cursor.read_u32_le()?,
			flags: cursor.read_u32_le()?,
			format: cursor.read_u32_le()?,
			size: cursor.read_u32_le()?,
			offset: cursor.read_u32_le()?,
		})
	})
}

/// Decode descriptors and load every array in descriptor order.
///
/// Only ubyte and float arrays are loadable; any other format fails before its data is read.
pub fn read_vertex_arrays(bytes: &[u8], header: &IqmHeader, text: &TextPool) -> Result<VertexArrays> {
	let descs = read_vertex_array_descs(bytes, header)?;
	let mut out = VertexArrays {
		num_vertexes: header.num_vertexes as usize,
		..VertexArrays::default()
	};

	let mut next_custom = VertexArrays::CUSTOM_BASE;
	for (index, desc) in descs.iter().enumerate() {
		let semantic = match StandardSemantic::from_id(desc.kind) {
			Some(item) => VertexSemantic::Standard(item),
			None => {
				if next_custom as usize >= VertexArrays::SLOTS {
					return Err(IqmError::TooManyCustomArrays { max: VertexArrays::MAX_CUSTOM });
				}
				let name = text.resolve(desc.kind - VertexArrays::CUSTOM_BASE)?;
				let slot = next_custom;
				next_custom += 1;
				VertexSemantic::Custom { name, slot }
			}
		};

		let format = ElementFormat::from_id(desc.format);
		let data = match format {
			Some(format @ (ElementFormat::UByte | ElementFormat::Float)) => load_elements(bytes, index, desc, format, out.num_vertexes)?,
			_ => {
				return Err(IqmError::UnsupportedElementFormat {
					index,
					format: desc.format,
					label: format.map_or("unknown", ElementFormat::as_str),
				});
			}
		};

		tracing::debug!(index, semantic = %semantic.label(), format = desc.format, size = desc.size, "loaded vertex array");
		out.insert(VertexArray {
			semantic,
			flags: desc.flags,
			size: desc.size as usize,
			data,
		});
	}

	Ok(out)
}

fn load_elements(bytes: &[u8], index: usize, desc: &VertexArrayDesc, format: ElementFormat, num_vertexes: usize) -> Result<VertexData> {
	let count = num_vertexes.saturating_mul(desc.size as usize);
	let mut cursor = Cursor::at(bytes, "vertexarray", desc.offset as usize)?;
	let wrap = |err: IqmError| with_section(err, "vertexarray", index);

	if format == ElementFormat::UByte {
		let raw = cursor.read_exact(count).map_err(wrap)?;
		return Ok(VertexData::UByte(raw.to_vec()));
	}

	let mut values = Vec::with_capacity(count.min(cursor.remaining() / 4));
	for _ in 0..count {
		values.push(cursor.read_f32_le().map_err(wrap)?);
	}
	Ok(VertexData::Float(values))
}
