// std
use std::{fmt, path::Path};
// crates.io
use anyhow::{bail, Context, Result};
use csv::{Reader, Writer};
use rust_decimal::Decimal;
// adg
use crate::{
	recipient::Recipient,
	units::{self, DECIMALS},
};

pub const DEFAULT_OUTPUT: &str = "airdrop_distribution.csv";

const HEADER: [&str; 2] = ["address", "amount"];

#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
	pub file: String,
	pub recipients: usize,
	pub total_base_units: u128,
}
impl fmt::Display for Summary {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "Generated {} with {} recipients", self.file, self.recipients)?;
		writeln!(
			f,
			"Total tokens to distribute: {}",
			units::format_base_units(self.total_base_units, DECIMALS)
		)?;
		write!(f, "Total wei amount: {}", self.total_base_units)
	}
}

/// Write the distribution CSV to `path`, replacing whatever was there.
///
/// Every amount is converted before the file is touched, so a bad recipient leaves any previous
/// distribution in place.
pub fn generate<P>(recipients: &[Recipient], path: P) -> Result<Summary>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	let mut rows = Vec::with_capacity(recipients.len());
	let mut total_tokens = Decimal::ZERO;
	let mut rows_total = 0_u128;

	for r in recipients {
		let amount = units::to_base_units(r.amount, DECIMALS)
			.with_context(|| format!("failed to convert the amount for {}", r.address))?;

		tracing::debug!("{} -> {amount}", r.address);

		rows.push((r.address.as_str(), amount));

		total_tokens = total_tokens
			.checked_add(r.amount)
			.context("total token amount overflows a decimal")?;
		rows_total = rows_total.checked_add(amount).context("total base units overflow u128")?;
	}

	let converted_total = units::to_base_units(total_tokens, DECIMALS)?;

	// Truncated rows, or a token sum past 28 significant digits, make the two totals drift apart.
	if converted_total != rows_total {
		tracing::warn!(
			"converted total {converted_total} differs from the row sum {rows_total}, reporting the row sum"
		);
	}

	let mut wtr =
		Writer::from_path(path).with_context(|| format!("failed to create {}", path.display()))?;

	wtr.write_record(HEADER)?;

	for (address, amount) in rows {
		wtr.write_record([address, &amount.to_string()])?;
	}

	wtr.flush()?;

	Ok(Summary {
		file: path.display().to_string(),
		recipients: recipients.len(),
		total_base_units: rows_total,
	})
}

#[derive(Debug, PartialEq, Eq)]
pub struct VerifyReport {
	pub recipients: usize,
	pub total_base_units: u128,
}
impl fmt::Display for VerifyReport {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "Recipients: {}", self.recipients)?;
		write!(f, "Total wei amount: {}", self.total_base_units)
	}
}

/// Read a generated distribution back and total it.
pub fn verify<P>(path: P) -> Result<VerifyReport>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	let mut rdr =
		Reader::from_path(path).with_context(|| format!("failed to open {}", path.display()))?;

	let headers = rdr.headers()?;

	if headers.iter().ne(HEADER) {
		bail!("unexpected header {headers:?}, expected `address,amount`");
	}

	let mut report = VerifyReport { recipients: 0, total_base_units: 0 };

	for result in rdr.records() {
		let record = result?;
		let amount = record[1]
			.parse::<u128>()
			.with_context(|| format!("invalid amount `{}` for {}", &record[1], &record[0]))?;

		report.recipients += 1;
		report.total_base_units =
			report.total_base_units.checked_add(amount).context("total overflows u128")?;
	}

	Ok(report)
}
