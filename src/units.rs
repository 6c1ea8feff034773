// crates.io
use anyhow::{bail, Result};
use rust_decimal::Decimal;

/// Base units per token, as a power of ten.
pub const DECIMALS: u32 = 18;

/// Scale a human-readable token amount into base units.
///
/// Works on the decimal's mantissa and scale directly, so integer and exact-decimal inputs are
/// converted without loss. Digits finer than one base unit are truncated.
pub fn to_base_units(amount: Decimal, decimals: u32) -> Result<u128> {
	if amount.is_sign_negative() && !amount.is_zero() {
		bail!("negative token amount {amount}");
	}

	let amount = amount.normalize();
	let mantissa = amount.mantissa().unsigned_abs();
	let scale = amount.scale();

	if decimals >= scale {
		let Some(factor) = 10_u128.checked_pow(decimals - scale) else {
			bail!("10^{} does not fit in u128", decimals - scale);
		};
		let Some(units) = mantissa.checked_mul(factor) else {
			bail!("{amount} x 10^{decimals} overflows u128");
		};

		Ok(units)
	} else {
		// Scale is at most 28, so this power always fits.
		Ok(mantissa / 10_u128.pow(scale - decimals))
	}
}

/// Render a base-unit amount in whole tokens, with `,` between every three integer digits.
///
/// Works from the integer, so totals too wide for a `Decimal` still print every digit.
pub fn format_base_units(units: u128, decimals: u32) -> String {
	let (int, frac) = match 10_u128.checked_pow(decimals) {
		Some(one) => (units / one, units % one),
		None => (0, units),
	};
	let int = int.to_string();
	let frac = format!("{frac:0width$}", width = decimals as usize);
	let frac = frac.trim_end_matches('0');
	let mut grouped = String::with_capacity(int.len() + int.len() / 3);

	for (i, c) in int.chars().enumerate() {
		if i > 0 && (int.len() - i) % 3 == 0 {
			grouped.push(',');
		}

		grouped.push(c);
	}

	if frac.is_empty() {
		grouped
	} else {
		format!("{grouped}.{frac}")
	}
}
