use iqmdoc_testkit::IqmBuilder;

use super::read_anims;
use crate::iqm::{IqmError, IqmHeader, TextPool};

fn decode(builder: &IqmBuilder, num_frames: usize) -> crate::iqm::Result<Vec<super::Anim>> {
	let bytes = builder.build();
	let header = IqmHeader::parse(&bytes).expect("header parses");
	let text = TextPool::load(&bytes, header.ofs_text, header.num_text).expect("text loads");
	read_anims(&bytes, &header, &text, num_frames)
}

#[test]
fn clips_decode_with_loop_flag() {
	let mut builder = IqmBuilder::new();
	builder.anim("idle", 0, 2, 30.0, 1).anim("run", 2, 3, 24.5, 0);

	let anims = decode(&builder, 5).expect("anims decode");
	assert_eq!(anims.len(), 2);
	assert_eq!(anims[0].name, "idle");
	assert!(anims[0].is_loop());
	assert_eq!(anims[0].frames(), 0..2);
	assert_eq!(anims[1].name, "run");
	assert_eq!(anims[1].framerate, 24.5);
	assert!(!anims[1].is_loop());
	assert_eq!(anims[1].frames(), 2..5);
}

#[test]
fn clip_past_frame_table_is_rejected() {
	let mut builder = IqmBuilder::new();
	builder.anim("walk", 3, 4, 30.0, 0);

	let err = decode(&builder, 6).expect_err("3+4 > 6");
	assert!(matches!(
		err,
		IqmError::AnimFrameRangeOutOfRange {
			index: 0,
			first: 3,
			count: 4,
			num_frames: 6
		}
	));
}
