use std::fmt::Write;

use crate::iqm::{Anim, ElementFormat, IqmModel, Joint, Mesh, Result, StandardSemantic, Transform, VertexArray, VertexArrays, VertexValues};

/// Significant digits for IQE numbers; enough to round-trip an `f32`.
const DIGITS: usize = 9;

/// Render a decoded model as Inter-Quake Export text.
///
/// Blocks are emitted in a fixed order: joints with their bind pose, vertex array declarations,
/// meshes, then animations frame by frame.
pub fn write_iqe(model: &IqmModel, out: &mut impl Write) -> Result<()> {
	writeln!(out, "# Inter-Quake Export")?;

	if let Some(joints) = &model.joints {
		write_joints(joints, out)?;
	}

	if let Some(arrays) = &model.vertex_arrays {
		writeln!(out)?;
		for array in arrays.arrays() {
			write!(out, "vertexarray {} {} {}", array.semantic.label(), array.format().as_str(), array.size)?;
			if let Some(name) = array.semantic.custom_name() {
				write!(out, " {name}")?;
			}
			writeln!(out)?;
		}
	}

	for mesh in &model.meshes {
		write_mesh(model, mesh, out)?;
	}

	for anim in &model.anims {
		write_anim(model, anim, out)?;
	}

	Ok(())
}

/// Format like C's `%.{precision}g`.
pub fn fmt_g(value: f64, precision: usize) -> String {
	if value.is_nan() {
		return "nan".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
	}
	if value == 0.0 {
		return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
	}

	let precision = precision.max(1);
	let sci = format!("{:.*e}", precision - 1, value);
	let Some((mantissa, exp)) = sci.split_once('e') else {
		return sci;
	};
	let Ok(exp) = exp.parse::<i32>() else {
		return sci;
	};

	if exp < -4 || exp >= precision as i32 {
		let sign = if exp < 0 { '-' } else { '+' };
		return format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.unsigned_abs());
	}

	let decimals = (precision as i32 - 1 - exp) as usize;
	trim_fraction(&format!("{value:.decimals$}")).to_owned()
}

fn trim_fraction(text: &str) -> &str {
	if text.contains('.') { text.trim_end_matches('0').trim_end_matches('.') } else { text }
}

fn write_joints(joints: &[Joint], out: &mut impl Write) -> Result<()> {
	writeln!(out)?;
	for joint in joints {
		writeln!(out, "joint {} {}", joint.name, joint.parent)?;
	}

	writeln!(out)?;
	for joint in joints {
		write_pq(&joint.bind_pose(), out)?;
	}
	Ok(())
}

fn write_pq(transform: &Transform, out: &mut impl Write) -> Result<()> {
	out.write_str("pq")?;
	let scale = transform.explicit_scale();
	let values = transform.translate.iter().chain(&transform.rotate).chain(scale.iter().flatten());
	for value in values {
		write!(out, " {}", fmt_g(*value, DIGITS))?;
	}
	writeln!(out)?;
	Ok(())
}

fn write_mesh(model: &IqmModel, mesh: &Mesh, out: &mut impl Write) -> Result<()> {
	writeln!(out)?;
	writeln!(out, "mesh {}", mesh.name)?;
	writeln!(out, "material {}", mesh.material)?;

	if let Some(arrays) = &model.vertex_arrays {
		for vertex in mesh.vertices() {
			write_vertex(arrays, vertex, out)?;
		}
	}

	let view = mesh.view(&model.triangles);
	for [a, b, c] in view.local_triangles() {
		writeln!(out, "fm {a} {b} {c}")?;
	}
	Ok(())
}

fn write_vertex(arrays: &VertexArrays, vertex: usize, out: &mut impl Write) -> Result<()> {
	let raw = [
		("vp", StandardSemantic::Position),
		("vn", StandardSemantic::Normal),
		("vx", StandardSemantic::Tangent),
		("vt", StandardSemantic::TexCoord),
	];
	for (directive, semantic) in raw {
		if let Some(values) = arrays.standard(semantic).and_then(|array| array.vertex(vertex)) {
			write_values(directive, values, false, out)?;
		}
	}

	if let Some(array) = arrays.standard(StandardSemantic::Color) {
		if let Some(values) = array.vertex(vertex) {
			write_values("vc", values, true, out)?;
		}
	}

	let blend = arrays.standard(StandardSemantic::BlendIndexes).zip(arrays.standard(StandardSemantic::BlendWeights));
	if let Some((indexes, weights)) = blend {
		write_blend(indexes, weights, vertex, out)?;
	}

	for array in arrays.custom() {
		if let Some(values) = array.vertex(vertex) {
			let directive = format!("v{}", array.semantic.slot() - VertexArrays::CUSTOM_BASE as usize);
			write_values(&directive, values, is_ubyte(array), out)?;
		}
	}
	Ok(())
}

fn write_blend(indexes: &VertexArray, weights: &VertexArray, vertex: usize, out: &mut impl Write) -> Result<()> {
	let (Some(index_values), Some(weight_values)) = (indexes.vertex(vertex), weights.vertex(vertex)) else {
		return Ok(());
	};
	out.write_str("vb")?;
	for slot in 0..index_values.len().min(weight_values.len()) {
		let (Some(index), Some(weight)) = (index_values.get(slot), weight_values.get(slot)) else {
			continue;
		};
		if weight > 0.0 {
			write!(out, " {} {}", index as i64, fmt_g(weight / 255.0, DIGITS))?;
		}
	}
	writeln!(out)?;
	Ok(())
}

fn write_values(directive: &str, values: VertexValues<'_>, normalize: bool, out: &mut impl Write) -> Result<()> {
	out.write_str(directive)?;
	for slot in 0..values.len() {
		let Some(value) = values.get(slot) else {
			continue;
		};
		let value = if normalize { value / 255.0 } else { value };
		write!(out, " {}", fmt_g(value, DIGITS))?;
	}
	writeln!(out)?;
	Ok(())
}

fn is_ubyte(array: &VertexArray) -> bool {
	array.format() == ElementFormat::UByte
}

fn write_anim(model: &IqmModel, anim: &Anim, out: &mut impl Write) -> Result<()> {
	writeln!(out)?;
	writeln!(out, "animation {}", anim.name)?;
	writeln!(out, "framerate {}", fmt_g(f64::from(anim.framerate), 6))?;
	if anim.is_loop() {
		writeln!(out, "loop")?;
	}

	for frame in anim.frames() {
		writeln!(out)?;
		writeln!(out, "frame")?;
		for transform in model.frame_transforms(frame)? {
			write_pq(&transform, out)?;
		}
	}
	Ok(())
}
