use iqmdoc_testkit::{IDENTITY, IqmBuilder, semantic};

use super::{IqmExtras, IqmModel, ReadOptions};
use crate::iqm::{Bounds, IqmError, IqmFile, Result};

fn read(bytes: Vec<u8>, options: ReadOptions) -> Result<IqmModel> {
	let file = IqmFile::from_bytes(bytes)?;
	IqmModel::read(&file, &options)
}

fn skinned() -> IqmBuilder {
	let mut builder = IqmBuilder::new();
	builder
		.joint("root", -1, IDENTITY)
		.joint("arm", 0, IDENTITY)
		.pose(-1, 0, IDENTITY, [1.0; 10])
		.pose(0, 0b11, IDENTITY, [1.0; 10])
		.vertexes(3)
		.float_array(semantic::POSITION, 3, &[0.0; 9])
		.triangle([0, 1, 2])
		.mesh("body", "skin", 0, 3, 0, 1)
		.anim("wave", 0, 2, 24.0, 1)
		.frame(vec![1, 2])
		.frame(vec![3, 4]);
	builder
}

#[test]
fn decodes_every_section() {
	let model = read(skinned().build(), ReadOptions::default()).expect("model decodes");

	let joints = model.joints.as_deref().expect("joint section present");
	assert_eq!(joints.iter().map(|joint| joint.name.as_str()).collect::<Vec<_>>(), ["root", "arm"]);
	assert_eq!(model.vertex_arrays.as_ref().map(|arrays| arrays.num_vertexes), Some(3));
	assert_eq!(model.triangles, vec![[0, 1, 2]]);
	assert_eq!(model.meshes.len(), 1);
	assert_eq!(model.poses.len(), 2);
	assert_eq!(model.frames.len(), 2);
	assert_eq!(model.frames.channels(), 2);
	assert_eq!(model.anims[0].frames(), 0..2);

	let second = model.frame_transforms(1).expect("frame 1 exists");
	assert_eq!(second[0].translate, [0.0, 0.0, 0.0]);
	assert_eq!(second[1].translate, [3.0, 4.0, 0.0]);
}

#[test]
fn absent_sections_stay_none() {
	let model = read(IqmBuilder::new().build(), ReadOptions::default()).expect("empty container decodes");
	assert!(model.joints.is_none());
	assert!(model.vertex_arrays.is_none());
	assert!(model.meshes.is_empty());
	assert!(model.anims.is_empty());
	assert!(model.frames.is_empty());
}

#[test]
fn missing_frame_is_reported() {
	let model = read(skinned().build(), ReadOptions::default()).expect("model decodes");
	let err = model.frame_transforms(2).expect_err("only two frames");
	assert!(matches!(err, IqmError::FrameIndexOutOfRange { index: 2, num_frames: 2 }));
}

#[test]
fn channel_mismatch_is_strict_by_default() {
	let bytes = skinned().framechannels(1).build();

	let err = read(bytes, ReadOptions::default()).expect_err("masks imply two channels");
	assert!(matches!(err, IqmError::FrameChannelMismatch { declared: 1, expected: 2 }));
}

#[test]
fn lenient_read_tolerates_channel_mismatch() {
	let bytes = IqmBuilder::new()
		.joint("root", -1, IDENTITY)
		.pose(-1, 0b1, IDENTITY, [1.0; 10])
		.framechannels(2)
		.frame(vec![9, 100])
		.build();

	let model = read(bytes, ReadOptions::lenient()).expect("lenient read accepts the file");
	let transforms = model.frame_transforms(0).expect("frame decodes");
	assert_eq!(transforms[0].translate, [9.0, 0.0, 0.0]);
}

#[test]
fn pose_joint_count_mismatch() {
	let mut builder = IqmBuilder::new();
	builder.joint("root", -1, IDENTITY).joint("spare", 0, IDENTITY).pose(-1, 0, IDENTITY, [1.0; 10]);
	let bytes = builder.build();

	let err = read(bytes.clone(), ReadOptions::default()).expect_err("two joints, one pose");
	assert!(matches!(err, IqmError::PoseJointMismatch { poses: 1, joints: 2 }));
	assert!(read(bytes, ReadOptions::lenient()).is_ok());
}

#[test]
fn anim_past_frame_table_is_rejected() {
	let bytes = skinned().anim("overrun", 1, 5, 24.0, 0).build();

	let err = read(bytes, ReadOptions::lenient()).expect_err("clip needs frames 1..6");
	assert!(matches!(err, IqmError::AnimFrameRangeOutOfRange { index: 1, num_frames: 2, .. }));
}

#[test]
fn extras_carry_bounds_adjacency_and_comment() {
	let bytes = skinned()
		.adjacency([u32::MAX, u32::MAX, u32::MAX])
		.bounds([-1.0, -1.0, 0.0, 1.0, 1.0, 2.0, 1.5, 2.5])
		.bounds([-2.0, -2.0, 0.0, 2.0, 2.0, 2.0, 2.5, 3.5])
		.comment("exported for tests")
		.build();
	let file = IqmFile::from_bytes(bytes).expect("container parses");

	let extras = IqmExtras::read(&file).expect("extras decode");
	assert_eq!(extras.adjacency, vec![[u32::MAX; 3]]);
	assert_eq!(extras.bounds.len(), 2);
	assert_eq!(
		extras.bounds[1],
		Bounds {
			bbmin: [-2.0, -2.0, 0.0],
			bbmax: [2.0, 2.0, 2.0],
			xyradius: 2.5,
			radius: 3.5,
		}
	);
	assert_eq!(extras.comment.as_deref(), Some("exported for tests"));
}

#[test]
fn extras_are_empty_when_sections_are_absent() {
	let file = IqmFile::from_bytes(skinned().build()).expect("container parses");
	let extras = IqmExtras::read(&file).expect("extras decode");
	assert!(extras.bounds.is_empty());
	assert!(extras.adjacency.is_empty());
	assert_eq!(extras.comment, None);
}
