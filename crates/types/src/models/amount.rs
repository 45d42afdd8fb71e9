//! Token amounts carried as decimal strings on the wire
//!
//! Remote quoters and callers exchange amounts as base-10 strings so that
//! values above `u64::MAX` survive JSON. Internally every amount is a
//! [`U256`]; the helpers here convert at the serde boundary.

use alloy_primitives::U256;
use std::str::FromStr;

/// Parse a base-10 amount string
///
/// Only ASCII digits are accepted. `U256::from_str` would also take `0x`
/// prefixed input, which no counterparty sends for amounts.
pub fn parse_amount(value: &str) -> Result<U256, String> {
	if value.is_empty() {
		return Err("amount cannot be empty".to_string());
	}

	if !value.chars().all(|c| c.is_ascii_digit()) {
		return Err(format!("amount '{}' must contain only digits", value));
	}

	U256::from_str(value).map_err(|e| format!("amount '{}' out of range: {}", value, e))
}

/// `#[serde(with = "u256_string")]` for required amounts
pub mod u256_string {
	use alloy_primitives::U256;
	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&value.to_string())
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		super::parse_amount(&value).map_err(serde::de::Error::custom)
	}

	/// Same as the parent module for `Option<U256>`
	pub mod option {
		use alloy_primitives::U256;
		use serde::{Deserialize, Deserializer, Serializer};

		pub fn serialize<S>(value: &Option<U256>, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			match value {
				Some(value) => serializer.serialize_some(&value.to_string()),
				None => serializer.serialize_none(),
			}
		}

		pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<U256>, D::Error>
		where
			D: Deserializer<'de>,
		{
			Option::<String>::deserialize(deserializer)?
				.map(|value| super::super::parse_amount(&value).map_err(serde::de::Error::custom))
				.transpose()
		}
	}
}
