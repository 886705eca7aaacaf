use std::path::{Path, PathBuf};

use iqmdoc::iqm::{IqmExtras, IqmFile, IqmHeader, IqmModel, Result, channel_count};

use crate::cmd::util::{emit_json, read_options};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	/// Log frame channel and pose count mismatches instead of failing.
	#[arg(long)]
	pub lenient: bool,
}

/// Print header, section table and decoded content summary.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, lenient } = args;

	let file = IqmFile::open(&path)?;
	let model = IqmModel::read(&file, &read_options(lenient))?;
	let extras = IqmExtras::read(&file)?;
	let info = summarize(&path, &file, &model, &extras);

	if json {
		return emit_json(&info);
	}

	println!("path: {}", info.path);
	println!("compression: {}", info.compression);
	println!("version: {}", info.version);
	println!("filesize: {}", info.filesize);
	println!("flags: {:#x}", info.flags);

	println!("sections:");
	for section in &info.sections {
		println!("  {}: count={} offset={}", section.name, section.count, section.offset);
	}

	println!("num_vertexes: {}", info.num_vertexes);
	println!("num_framechannels: {}", info.num_framechannels);
	println!("pose_channels: {}", info.pose_channels);
	println!("channels_consistent: {}", info.channels_consistent);

	println!("joints:");
	for joint in &info.joints {
		println!("  {} parent={}", joint.name, joint.parent);
	}

	println!("vertex_arrays:");
	for array in &info.vertex_arrays {
		match &array.custom_name {
			Some(name) => println!("  {} {} {} ({name})", array.semantic, array.format, array.size),
			None => println!("  {} {} {}", array.semantic, array.format, array.size),
		}
	}

	println!("meshes:");
	for mesh in &info.meshes {
		println!("  {} material={} vertexes={} triangles={}", mesh.name, mesh.material, mesh.vertexes, mesh.triangles);
	}

	println!("anims:");
	for anim in &info.anims {
		println!(
			"  {} frames={}+{} framerate={} loop={}",
			anim.name, anim.first_frame, anim.num_frames, anim.framerate, anim.looped
		);
	}

	println!("bounds: {}", info.bounds);
	println!("adjacency: {}", info.adjacency);
	println!("comment: {}", info.comment.as_deref().unwrap_or("-"));

	Ok(())
}

fn summarize(path: &Path, file: &IqmFile, model: &IqmModel, extras: &IqmExtras) -> InfoJson {
	let header = &file.header;
	let pose_channels = channel_count(&model.poses);

	InfoJson {
		path: path.display().to_string(),
		compression: file.compression.as_str().to_owned(),
		version: header.version,
		filesize: header.filesize,
		flags: header.flags,
		sections: section_table(header),
		num_vertexes: header.num_vertexes,
		num_framechannels: header.num_framechannels,
		pose_channels,
		channels_consistent: pose_channels == header.num_framechannels as usize,
		joints: model
			.joints
			.iter()
			.flatten()
			.map(|joint| JointJson {
				name: joint.name.clone(),
				parent: joint.parent,
			})
			.collect(),
		vertex_arrays: model
			.vertex_arrays
			.iter()
			.flat_map(|arrays| arrays.arrays())
			.map(|array| VertexArrayJson {
				semantic: array.semantic.label(),
				format: array.format().as_str(),
				size: array.size,
				custom_name: array.semantic.custom_name().map(str::to_owned),
			})
			.collect(),
		meshes: model
			.meshes
			.iter()
			.map(|mesh| MeshJson {
				name: mesh.name.clone(),
				material: mesh.material.clone(),
				vertexes: mesh.num_vertexes,
				triangles: mesh.num_triangles,
			})
			.collect(),
		anims: model
			.anims
			.iter()
			.map(|anim| AnimJson {
				name: anim.name.clone(),
				first_frame: anim.first_frame,
				num_frames: anim.num_frames,
				framerate: anim.framerate,
				looped: anim.is_loop(),
			})
			.collect(),
		bounds: extras.bounds.len(),
		adjacency: extras.adjacency.len(),
		comment: extras.comment.clone(),
	}
}

fn section_table(header: &IqmHeader) -> Vec<SectionJson> {
	[
		("text", header.num_text, header.ofs_text),
		("meshes", header.num_meshes, header.ofs_meshes),
		("vertexarrays", header.num_vertexarrays, header.ofs_vertexarrays),
		("triangles", header.num_triangles, header.ofs_triangles),
		("adjacency", header.num_triangles, header.ofs_adjacency),
		("joints", header.num_joints, header.ofs_joints),
		("poses", header.num_poses, header.ofs_poses),
		("anims", header.num_anims, header.ofs_anims),
		("frames", header.num_frames, header.ofs_frames),
		("bounds", header.num_frames, header.ofs_bounds),
		("comment", header.num_comment, header.ofs_comment),
		("extensions", header.num_extensions, header.ofs_extensions),
	]
	.into_iter()
	.map(|(name, count, offset)| SectionJson { name, count, offset })
	.collect()
}

#[derive(Debug, serde::Serialize)]
struct SectionJson {
	name: &'static str,
	count: u32,
	offset: u32,
}

#[derive(Debug, serde::Serialize)]
struct JointJson {
	name: String,
	parent: i32,
}

#[derive(Debug, serde::Serialize)]
struct VertexArrayJson {
	semantic: String,
	format: &'static str,
	size: usize,
	custom_name: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct MeshJson {
	name: String,
	material: String,
	vertexes: u32,
	triangles: u32,
}

#[derive(Debug, serde::Serialize)]
struct AnimJson {
	name: String,
	first_frame: u32,
	num_frames: u32,
	framerate: f32,
	#[serde(rename = "loop")]
	looped: bool,
}

#[derive(Debug, serde::Serialize)]
struct InfoJson {
	path: String,
	compression: String,
	version: u32,
	filesize: u32,
	flags: u32,
	sections: Vec<SectionJson>,
	num_vertexes: u32,
	num_framechannels: u32,
	pose_channels: usize,
	channels_consistent: bool,
	joints: Vec<JointJson>,
	vertex_arrays: Vec<VertexArrayJson>,
	meshes: Vec<MeshJson>,
	anims: Vec<AnimJson>,
	bounds: usize,
	adjacency: usize,
	comment: Option<String>,
}

#[cfg(test)]
mod tests;
