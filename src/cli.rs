// crates.io
use anyhow::Result;
use clap::Parser;
// adg
use crate::{distribution, recipient};

#[derive(Debug, Parser)]
#[command(
	version = concat!(
		env!("CARGO_PKG_VERSION"),
		"-",
		env!("VERGEN_GIT_SHA"),
		"-",
		env!("VERGEN_CARGO_TARGET_TRIPLE"),
	),
	about,
	rename_all = "kebab",
)]
pub struct Cli {
	/// Defaults to `generate` with the built-in recipient list.
	#[command(subcommand)]
	pub subcmd: Option<SubCmd>,
}
impl Cli {
	pub fn run(&self) -> Result<()> {
		match self.subcmd() {
			SubCmd::Generate { recipients, output } => generate(recipients.as_deref(), &output)?,
			SubCmd::Verify { path } => println!("{}", distribution::verify(path)?),
		}

		Ok(())
	}

	fn subcmd(&self) -> SubCmd {
		self.subcmd.clone().unwrap_or_else(|| SubCmd::Generate {
			recipients: None,
			output: distribution::DEFAULT_OUTPUT.into(),
		})
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Parser)]
pub enum SubCmd {
	/// Write the airdrop distribution CSV with amounts in base units.
	Generate {
		/// CSV file with `address,amount` rows; amounts in whole tokens.
		#[arg(long, value_name = "PATH")]
		recipients: Option<String>,
		/// Where to write the distribution.
		#[arg(long, value_name = "PATH", default_value = distribution::DEFAULT_OUTPUT)]
		output: String,
	},
	/// Re-read a generated distribution and print its recipient count and total.
	Verify {
		/// Path to the distribution CSV.
		#[arg(value_name = "PATH", default_value = distribution::DEFAULT_OUTPUT)]
		path: String,
	},
}

fn generate(recipients: Option<&str>, output: &str) -> Result<()> {
	let recipients = match recipients {
		Some(path) => recipient::load(path)?,
		None => recipient::default_recipients(),
	};

	println!("{}", distribution::generate(&recipients, output)?);

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_no_subcommand_generates_default_output() {
		let cli = Cli::try_parse_from(["adg"]).unwrap();

		assert_eq!(
			cli.subcmd(),
			SubCmd::Generate { recipients: None, output: distribution::DEFAULT_OUTPUT.into() }
		);
	}

	#[test]
	fn test_generate_then_verify() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("recipients.csv");
		let output = dir.path().join("out.csv");

		fs::write(&input, "address,amount\n0xaa,1000\n0xbb,500\n").unwrap();

		let input = input.to_str().unwrap();
		let output = output.to_str().unwrap();
		let cli =
			Cli::try_parse_from(["adg", "generate", "--recipients", input, "--output", output])
				.unwrap();

		assert_eq!(
			cli.subcmd(),
			SubCmd::Generate { recipients: Some(input.into()), output: output.into() }
		);

		cli.run().unwrap();

		assert_eq!(
			fs::read_to_string(output).unwrap(),
			"address,amount\n0xaa,1000000000000000000000\n0xbb,500000000000000000000\n"
		);

		let cli = Cli::try_parse_from(["adg", "verify", output]).unwrap();

		assert_eq!(cli.subcmd(), SubCmd::Verify { path: output.into() });

		cli.run().unwrap();
	}

	#[test]
	fn test_generate_without_recipients_uses_built_in_list() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("out.csv");
		let output = output.to_str().unwrap();

		Cli::try_parse_from(["adg", "generate", "--output", output]).unwrap().run().unwrap();

		assert_eq!(distribution::verify(output).unwrap().recipients, 5);
	}

	#[test]
	fn test_verify_defaults_to_default_output() {
		let cli = Cli::try_parse_from(["adg", "verify"]).unwrap();

		assert_eq!(cli.subcmd(), SubCmd::Verify { path: distribution::DEFAULT_OUTPUT.into() });
	}

	#[test]
	fn test_unknown_flag_is_rejected() {
		assert!(Cli::try_parse_from(["adg", "generate", "--decimals", "6"]).is_err());
	}
}
