use std::io::{self, Write};

use iqmdoc::iqm::{ReadOptions, Result};

/// Map the `--lenient` flag onto read options.
pub(crate) fn read_options(lenient: bool) -> ReadOptions {
	if lenient { ReadOptions::lenient() } else { ReadOptions::default() }
}

/// Pretty-print a serializable payload on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let mut out = io::stdout().lock();
	serde_json::to_writer_pretty(&mut out, payload).map_err(io::Error::from)?;
	writeln!(out)?;
	Ok(())
}
