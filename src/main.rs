mod cli;
mod distribution;
mod recipient;
mod units;

// std
use std::io;
// crates.io
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
	color_eyre::install().map_err(|e| anyhow::anyhow!("{e}"))?;
	// Stdout is reserved for the summary.
	tracing_subscriber::fmt().with_writer(io::stderr).init();
	cli::Cli::parse().run()?;

	Ok(())
}
