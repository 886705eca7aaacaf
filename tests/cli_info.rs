#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::Command;

use iqmdoc_testkit::{IDENTITY, IqmBuilder, write_fixture};
use serde_json::Value;

fn fixture(name: &str, bytes: &[u8]) -> PathBuf {
	write_fixture(PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("cli_info"), name, bytes)
}

fn run_info(args: &[&str], path: &Path) -> std::process::Output {
	Command::new(env!("CARGO_BIN_EXE_iqmdoc"))
		.arg("info")
		.arg(path)
		.args(args)
		.output()
		.expect("iqmdoc executes")
}

fn rigged() -> Vec<u8> {
	IqmBuilder::new()
		.joint("root", -1, IDENTITY)
		.joint("tail", 0, IDENTITY)
		.pose(-1, 0, IDENTITY, [1.0; 10])
		.pose(0, 0b1000000, IDENTITY, [1.0; 10])
		.anim("wag", 0, 2, 12.0, 1)
		.frame(vec![0])
		.frame(vec![1])
		.bounds([0.0; 8])
		.bounds([0.0; 8])
		.comment("rigged by hand")
		.build()
}

#[test]
fn info_json_describes_sections() {
	let path = fixture("rigged.iqm", &rigged());
	let output = run_info(&["--json"], &path);
	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json["version"], 2);
	assert_eq!(json["compression"], "none");
	assert_eq!(json["num_framechannels"], 1);
	assert_eq!(json["channels_consistent"], true);
	assert_eq!(json["joints"].as_array().map(Vec::len), Some(2));
	assert_eq!(json["joints"][1]["parent"], 0);
	assert_eq!(json["anims"][0]["name"], "wag");
	assert_eq!(json["anims"][0]["num_frames"], 2);
	assert_eq!(json["bounds"], 2);
	assert_eq!(json["comment"], "rigged by hand");

	let sections = json["sections"].as_array().expect("sections array");
	let frames = sections.iter().find(|item| item["name"] == "frames").expect("frames section listed");
	assert_eq!(frames["count"], 2);
	assert!(frames["offset"].as_u64().is_some_and(|offset| offset >= 124));
}

#[test]
fn info_text_lists_entities() {
	let path = fixture("rigged-text.iqm", &rigged());
	let output = run_info(&[], &path);
	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

	let text = String::from_utf8_lossy(&output.stdout);
	assert!(text.contains("version: 2\n"));
	assert!(text.contains("  tail parent=0\n"));
	assert!(text.contains("  wag frames=0+2 framerate=12 loop=true\n"));
	assert!(text.contains("comment: rigged by hand\n"));
}

#[test]
fn info_rejects_truncated_header() {
	let mut bytes = rigged();
	bytes.truncate(60);
	let path = fixture("truncated.iqm", &bytes);
	let output = run_info(&["--json"], &path);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: unexpected eof"));
}
