//! Native asset detection and the per-chain wrapped-native table

use alloy_primitives::{address, Address, U256};
use std::collections::HashMap;

/// Sentinel address a caller uses to ask for the chain's native asset
pub const NATIVE_ADDRESS: Address = Address::ZERO;

/// One whole unit of an 18-decimal wrapped-native token
pub const WRAPPED_NATIVE_UNIT: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Whether `token` is the native-asset sentinel
pub fn is_native(token: &Address) -> bool {
	*token == NATIVE_ADDRESS
}

/// Lookup from chain id to the canonical wrapped-native token address
///
/// This is static configuration: the built-in entries cover the chains the
/// quoters serve and config files may add or replace entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedNativeTable {
	entries: HashMap<u64, Address>,
}

impl WrappedNativeTable {
	/// Table with no entries
	pub fn empty() -> Self {
		Self {
			entries: HashMap::new(),
		}
	}

	/// Table populated with the canonical wrapped-native tokens
	pub fn with_defaults() -> Self {
		let entries = [
			// WETH
			(1, address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2")),
			(5, address!("b4fbf271143f4fbf7b91a5ded31805e42b2208d6")),
			(10, address!("4200000000000000000000000000000000000006")),
			// WBNB
			(56, address!("bb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c")),
			// WMATIC
			(137, address!("0d500b1d8e8ef31e21c99d1db9a6444d3adf1270")),
			(8453, address!("4200000000000000000000000000000000000006")),
			(42161, address!("82af49447d8a07e3bd95bd0d56f35241523fbab1")),
			(11155111, address!("fff9976782d46cc05630d1f6ebab18b2324d6b14")),
		];

		Self {
			entries: entries.into_iter().collect(),
		}
	}

	/// Add or replace the entry for a chain, returning the previous address
	pub fn insert(&mut self, chain_id: u64, wrapped: Address) -> Option<Address> {
		self.entries.insert(chain_id, wrapped)
	}

	/// Builder form of [`WrappedNativeTable::insert`]
	pub fn with_override(mut self, chain_id: u64, wrapped: Address) -> Self {
		self.insert(chain_id, wrapped);
		self
	}

	pub fn get(&self, chain_id: u64) -> Option<Address> {
		self.entries.get(&chain_id).copied()
	}

	/// Whether `token` is the wrapped-native token of `chain_id`
	pub fn is_wrapped_native(&self, chain_id: u64, token: &Address) -> bool {
		self.get(chain_id).is_some_and(|wrapped| wrapped == *token)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Default for WrappedNativeTable {
	fn default() -> Self {
		Self::with_defaults()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_native_sentinel() {
		assert!(is_native(&Address::ZERO));
		assert!(!is_native(&address!(
			"c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"
		)));
	}

	#[test]
	fn test_wrapped_native_unit_is_one_ether() {
		assert_eq!(
			WRAPPED_NATIVE_UNIT,
			U256::from(10u64).pow(U256::from(18u64))
		);
	}

	#[test]
	fn test_default_table_lookup() {
		let table = WrappedNativeTable::default();
		let weth = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");

		assert_eq!(table.get(1), Some(weth));
		assert!(table.is_wrapped_native(1, &weth));
		assert!(!table.is_wrapped_native(137, &weth));
		assert_eq!(table.get(999_999), None);
	}

	#[test]
	fn test_override_replaces_entry() {
		let custom = address!("1111111111111111111111111111111111111111");
		let table = WrappedNativeTable::empty()
			.with_override(31337, custom)
			.with_override(1, custom);

		assert_eq!(table.len(), 2);
		assert_eq!(table.get(31337), Some(custom));
		assert_eq!(table.get(1), Some(custom));
	}
}
