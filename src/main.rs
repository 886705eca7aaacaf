#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "iqmdoc", about = "Inter-Quake Model inspection and IQE export")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Convert IQM files to IQE text on stdout.
	Iqe(cmd::iqe::Args),
	/// Summarize the sections of one IQM file.
	Info(cmd::info::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> iqmdoc::iqm::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Iqe(args) => cmd::iqe::run(args),
		Commands::Info(args) => cmd::info::run(args),
	}
}
