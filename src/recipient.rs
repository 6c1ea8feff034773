// std
use std::{path::Path, str::FromStr};
// crates.io
use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One airdrop beneficiary and their allocation in whole tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipient {
	pub address: String,
	pub amount: Decimal,
}
impl Recipient {
	pub fn new(address: impl Into<String>, amount: Decimal) -> Self {
		Self { address: address.into(), amount }
	}
}

// Amounts stay as text until parsed, so `0.1` never goes through a float.
#[derive(Debug, Deserialize)]
struct CsvRow {
	address: String,
	amount: String,
}
impl TryFrom<CsvRow> for Recipient {
	type Error = anyhow::Error;

	fn try_from(row: CsvRow) -> Result<Self> {
		let amount = Decimal::from_str(&row.amount)
			.with_context(|| format!("invalid amount `{}` for {}", row.amount, row.address))?;

		Ok(Self { address: row.address, amount })
	}
}

/// The distribution used when no recipient file is given.
pub fn default_recipients() -> Vec<Recipient> {
	[
		("0x742e8D0aED6e21E2F8daBF7c8D9b3D96aF61f5a4", 1000),
		("0x1234567890123456789012345678901234567890", 500),
		("0xabcdefabcdefabcdefabcdefabcdefabcdefabcd", 750),
		("0x9876543210987654321098765432109876543210", 250),
		("0xfedcba0987654321fedcba0987654321fedcba09", 300),
	]
	.into_iter()
	.map(|(address, amount)| Recipient::new(address, Decimal::from(amount)))
	.collect()
}

/// Read recipients from a CSV file with an `address,amount` header.
pub fn load<P>(path: P) -> Result<Vec<Recipient>>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	let mut rdr = ReaderBuilder::new()
		.trim(Trim::All)
		.from_path(path)
		.with_context(|| format!("failed to open {}", path.display()))?;
	let mut recipients = <Vec<Recipient>>::new();

	for (i, result) in rdr.deserialize().enumerate() {
		let row: CsvRow = result.with_context(|| format!("malformed row {}", i + 1))?;

		recipients.push(Recipient::try_from(row).with_context(|| format!("row {}", i + 1))?);
	}

	tracing::info!("loaded {} recipients from {}", recipients.len(), path.display());

	Ok(recipients)
}
