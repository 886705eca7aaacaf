use iqmdoc_testkit::IqmBuilder;

use super::{Mesh, read_adjacency, read_meshes, read_triangles};
use crate::iqm::{IqmError, IqmHeader, TextPool};

fn two_quads() -> IqmBuilder {
	let mut builder = IqmBuilder::new();
	builder
		.vertexes(8)
		.triangle([0, 1, 2])
		.triangle([0, 2, 3])
		.triangle([4, 5, 6])
		.triangle([4, 6, 7])
		.mesh("left", "stone", 0, 4, 0, 2)
		.mesh("right", "moss", 4, 4, 2, 2);
	builder
}

#[test]
fn meshes_rebase_triangles_to_first_vertex() {
	let bytes = two_quads().build();
	let header = IqmHeader::parse(&bytes).expect("header parses");
	let text = TextPool::load(&bytes, header.ofs_text, header.num_text).expect("text loads");
	let triangles = read_triangles(&bytes, &header).expect("triangles decode");
	let meshes = read_meshes(&bytes, &header, &text, triangles.len()).expect("meshes decode");

	assert_eq!(meshes.len(), 2);
	assert_eq!(meshes[1].name, "right");
	assert_eq!(meshes[1].material, "moss");
	assert_eq!(meshes[1].vertices(), 4..8);

	let local: Vec<_> = meshes[1].view(&triangles).local_triangles().collect();
	assert_eq!(local, vec![[0, 1, 2], [0, 2, 3]]);
}

#[test]
fn index_below_mesh_start_goes_negative() {
	let mesh = Mesh {
		name: "m".to_owned(),
		material: "x".to_owned(),
		first_vertex: 3,
		num_vertexes: 3,
		first_triangle: 0,
		num_triangles: 1,
	};
	let triangles = [[1, 3, 5]];

	let local: Vec<_> = mesh.view(&triangles).local_triangles().collect();
	assert_eq!(local, vec![[-2, 0, 2]]);
}

#[test]
fn mesh_past_vertex_count_is_rejected() {
	let mut builder = two_quads();
	builder.mesh("overflow", "none", 6, 4, 0, 1);
	let bytes = builder.build();
	let header = IqmHeader::parse(&bytes).expect("header parses");
	let text = TextPool::load(&bytes, header.ofs_text, header.num_text).expect("text loads");

	let err = read_meshes(&bytes, &header, &text, 4).expect_err("6+4 > 8 vertices");
	assert!(matches!(
		err,
		IqmError::MeshRangeOutOfRange {
			index: 2,
			kind: "vertex",
			first: 6,
			count: 4,
			available: 8
		}
	));
}

#[test]
fn adjacency_is_read_per_triangle() {
	let mut builder = two_quads();
	for record in [[u32::MAX, 1, u32::MAX], [0, u32::MAX, u32::MAX], [u32::MAX, 3, u32::MAX], [2, u32::MAX, u32::MAX]] {
		builder.adjacency(record);
	}
	let bytes = builder.build();
	let header = IqmHeader::parse(&bytes).expect("header parses");

	let adjacency = read_adjacency(&bytes, &header).expect("adjacency decodes");
	assert_eq!(adjacency.len(), 4);
	assert_eq!(adjacency[1], [0, u32::MAX, u32::MAX]);
}
