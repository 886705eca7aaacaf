use std::path::PathBuf;

use iqmdoc::iqm::{IqmError, ReadOptions};
use iqmdoc_testkit::{IDENTITY, IqmBuilder, format, semantic, write_fixture};

use super::convert;

fn fixture_dir() -> PathBuf {
	std::env::temp_dir().join(format!("iqmdoc-cmd-iqe-{}", std::process::id()))
}

#[test]
fn convert_returns_full_text() {
	let bytes = IqmBuilder::new().joint("root", -1, IDENTITY).build();
	let path = write_fixture(fixture_dir(), "root.iqm", &bytes);

	let text = convert(&path, &ReadOptions::default()).expect("file converts");
	assert_eq!(text, "# Inter-Quake Export\n\njoint root -1\n\npq 0 0 0 0 0 0 1\n");
}

#[test]
fn convert_propagates_decode_errors() {
	let bytes = IqmBuilder::new().vertexes(1).raw_array(semantic::NORMAL, format::BYTE, 3, vec![0; 3]).build();
	let path = write_fixture(fixture_dir(), "byte-normals.iqm", &bytes);

	let err = convert(&path, &ReadOptions::default()).expect_err("byte arrays are not decodable");
	assert!(matches!(err, IqmError::UnsupportedElementFormat { label: "byte", .. }));
}

#[test]
fn convert_reports_missing_file() {
	let err = convert(&fixture_dir().join("absent.iqm"), &ReadOptions::default()).expect_err("file does not exist");
	assert!(matches!(err, IqmError::Io(_)));
}
