use std::ops::Range;

use crate::iqm::bytes::read_records;
use crate::iqm::{IqmError, IqmHeader, Result, TextPool};

/// Triangle of global vertex indices.
pub type Triangle = [u32; 3];

/// Neighbouring triangle per edge; `u32::MAX` marks an open edge.
pub type Adjacency = [u32; 3];

/// Named submesh over a vertex range and a triangle range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mesh {
	/// Resolved mesh name.
	pub name: String,
	/// Resolved material name.
	pub material: String,
	/// First vertex.
	pub first_vertex: u32,
	/// Vertex count.
	pub num_vertexes: u32,
	/// First triangle.
	pub first_triangle: u32,
	/// Triangle count.
	pub num_triangles: u32,
}

impl Mesh {
	/// On-disk record size.
	pub const RECORD_SIZE: usize = 24;

	/// Global vertex indices owned by this mesh.
	pub fn vertices(&self) -> Range<usize> {
		let first = self.first_vertex as usize;
		first..first + self.num_vertexes as usize
	}

	/// Global triangle indices owned by this mesh.
	pub fn triangles(&self) -> Range<usize> {
		let first = self.first_triangle as usize;
		first..first + self.num_triangles as usize
	}

	/// Borrow this mesh's triangles with indices re-based to the mesh's first vertex.
	pub fn view<'a>(&'a self, triangles: &'a [Triangle]) -> MeshView<'a> {
		MeshView {
			mesh: self,
			triangles: triangles.get(self.triangles()).unwrap_or(&[]),
		}
	}
}

/// A mesh paired with its slice of the global triangle table.
#[derive(Debug, Clone, Copy)]
pub struct MeshView<'a> {
	/// Mesh record.
	pub mesh: &'a Mesh,
	triangles: &'a [Triangle],
}

impl<'a> MeshView<'a> {
	/// Triangles with mesh-relative indices.
	///
	/// Indices below the mesh's first vertex come out negative rather than wrapping.
	pub fn local_triangles(&self) -> impl Iterator<Item = [i64; 3]> + 'a {
		let base = i64::from(self.mesh.first_vertex);
		self.triangles.iter().map(move |triangle| triangle.map(|index| i64::from(index) - base))
	}
}

/// Decode the triangle table.
pub fn read_triangles(bytes: &[u8], header: &IqmHeader) -> Result<Vec<Triangle>> {
	read_records(bytes, "triangles", header.ofs_triangles, header.num_triangles, 12, |cursor| {
		Ok([cursor.read_u32_le()?, cursor.read_u32_le()?, cursor.read_u32_le()?])
	})
}

/// Decode the triangle adjacency table, one record per triangle.
pub fn read_adjacency(bytes: &[u8], header: &IqmHeader) -> Result<Vec<Adjacency>> {
	read_records(bytes, "adjacency", header.ofs_adjacency, header.num_triangles, 12, |cursor| {
		Ok([cursor.read_u32_le()?, cursor.read_u32_le()?, cursor.read_u32_le()?])
	})
}

/// Decode mesh records and check their ranges against the loaded vertex and triangle counts.
pub fn read_meshes(bytes: &[u8], header: &IqmHeader, text: &TextPool, num_triangles: usize) -> Result<Vec<Mesh>> {
	let meshes = read_records(bytes, "meshes", header.ofs_meshes, header.num_meshes, Mesh::RECORD_SIZE, |cursor| {
		let name = cursor.read_u32_le()?;
		let material = cursor.read_u32_le()?;
		Ok(Mesh {
			name: text.resolve(name)?,
			material: text.resolve(material)?,
			first_vertex: cursor.read_u32_le()?,
			num_vertexes: cursor.read_u32_le()?,
			first_triangle: cursor.read_u32_le()?,
			num_triangles: cursor.read_u32_le()?,
		})
	})?;

	for (index, mesh) in meshes.iter().enumerate() {
		check_range(index, "vertex", mesh.first_vertex, mesh.num_vertexes, header.num_vertexes as usize)?;
		check_range(index, "triangle", mesh.first_triangle, mesh.num_triangles, num_triangles)?;
	}

	Ok(meshes)
}

fn check_range(index: usize, kind: &'static str, first: u32, count: u32, available: usize) -> Result<()> {
	if u64::from(first) + u64::from(count) > available as u64 {
		return Err(IqmError::MeshRangeOutOfRange {
			index,
			kind,
			first,
			count,
			available,
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests;
