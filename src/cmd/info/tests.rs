use std::path::Path;

use iqmdoc::iqm::{IqmExtras, IqmFile, IqmModel, ReadOptions};
use iqmdoc_testkit::{IDENTITY, IqmBuilder, semantic};

use super::summarize;

fn summary_of(bytes: Vec<u8>) -> serde_json::Value {
	let file = IqmFile::from_bytes(bytes).expect("container parses");
	let model = IqmModel::read(&file, &ReadOptions::lenient()).expect("model decodes");
	let extras = IqmExtras::read(&file).expect("extras decode");
	serde_json::to_value(summarize(Path::new("mem.iqm"), &file, &model, &extras)).expect("summary serializes")
}

#[test]
fn summary_lists_decoded_entities() {
	let bytes = IqmBuilder::new()
		.joint("root", -1, IDENTITY)
		.pose(-1, 0b111, IDENTITY, [1.0; 10])
		.vertexes(3)
		.float_array(semantic::POSITION, 3, &[0.0; 9])
		.custom_ubyte_array("wetness", 1, &[0, 128, 255])
		.triangle([0, 1, 2])
		.mesh("body", "skin", 0, 3, 0, 1)
		.anim("idle", 0, 1, 30.0, 1)
		.frame(vec![0, 0, 0])
		.comment("hello")
		.build();

	let json = summary_of(bytes);
	assert_eq!(json["path"], "mem.iqm");
	assert_eq!(json["compression"], "none");
	assert_eq!(json["version"], 2);
	assert_eq!(json["pose_channels"], 3);
	assert_eq!(json["channels_consistent"], true);
	assert_eq!(json["joints"][0]["name"], "root");
	assert_eq!(json["vertex_arrays"][1]["semantic"], "custom0");
	assert_eq!(json["vertex_arrays"][1]["custom_name"], "wetness");
	assert_eq!(json["meshes"][0]["triangles"], 1);
	assert_eq!(json["anims"][0]["loop"], true);
	assert_eq!(json["adjacency"], 0);
	assert_eq!(json["comment"], "hello");

	let sections = json["sections"].as_array().expect("section table");
	assert_eq!(sections.len(), 12);
	assert_eq!(sections[0]["name"], "text");
	assert_eq!(sections[0]["offset"], 124);
}

#[test]
fn summary_flags_channel_mismatch_in_lenient_mode() {
	let bytes = IqmBuilder::new()
		.joint("root", -1, IDENTITY)
		.pose(-1, 0b1, IDENTITY, [1.0; 10])
		.framechannels(2)
		.frame(vec![1, 2])
		.build();

	let json = summary_of(bytes);
	assert_eq!(json["num_framechannels"], 2);
	assert_eq!(json["pose_channels"], 1);
	assert_eq!(json["channels_consistent"], false);
}
