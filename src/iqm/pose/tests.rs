use iqmdoc_testkit::IqmBuilder;

use super::{Pose, read_poses};
use crate::iqm::IqmHeader;

#[test]
fn poses_decode_offsets_then_scales() {
	let offsets = [1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];
	let scales = [0.5; 10];
	let bytes = IqmBuilder::new().pose(-1, 0b101, offsets, scales).pose(0, 0, offsets, [0.0; 10]).build();
	let header = IqmHeader::parse(&bytes).expect("header parses");

	let poses = read_poses(&bytes, &header).expect("poses decode");
	assert_eq!(poses.len(), 2);
	assert_eq!(poses[0].parent, -1);
	assert_eq!(poses[0].mask, 0b101);
	assert_eq!(poses[0].offset, offsets);
	assert_eq!(poses[0].scale, scales);
	assert_eq!(poses[1].parent, 0);
}

#[test]
fn animated_channel_count_ignores_bits_above_ten() {
	let pose = Pose {
		parent: -1,
		mask: 0b11 | (0x3FF << 10),
		offset: [0.0; 10],
		scale: [0.0; 10],
	};
	assert!(pose.is_animated(0));
	assert!(pose.is_animated(1));
	assert!(!pose.is_animated(2));
	assert_eq!(pose.animated_channels(), 2);
}
