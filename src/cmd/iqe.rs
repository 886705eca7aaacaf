use std::io::{self, Write};
use std::path::{Path, PathBuf};

use iqmdoc::iqm::{IqmFile, IqmModel, ReadOptions, Result, write_iqe};

use crate::cmd::util::read_options;

#[derive(clap::Args)]
pub struct Args {
	#[arg(required = true)]
	pub paths: Vec<PathBuf>,
	/// Log frame channel and pose count mismatches instead of failing.
	#[arg(long)]
	pub lenient: bool,
}

/// Convert every input in order, stopping at the first file that fails to decode.
pub fn run(args: Args) -> Result<()> {
	let Args { paths, lenient } = args;
	let options = read_options(lenient);

	let mut out = io::stdout().lock();
	for path in &paths {
		let text = convert(path, &options)?;
		out.write_all(text.as_bytes())?;
	}
	out.flush()?;
	Ok(())
}

/// Decode one file fully before any of its text is released.
pub(crate) fn convert(path: &Path, options: &ReadOptions) -> Result<String> {
	let file = IqmFile::open(path)?;
	let model = IqmModel::read(&file, options)?;

	let mut text = String::new();
	write_iqe(&model, &mut text)?;
	tracing::debug!(path = %path.display(), bytes = text.len(), "converted");
	Ok(text)
}

#[cfg(test)]
mod tests;
