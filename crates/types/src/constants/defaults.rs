//! Defaults used when a caller or config file leaves a value out

use crate::requests::Protocol;

/// Slippage applied to auction end amounts when the caller gives none (0.5%)
pub const DEFAULT_SLIPPAGE_BPS: u32 = 50;

/// Default exclusivity override for auction orders
pub const DEFAULT_EXCLUSIVITY_OVERRIDE_BPS: u32 = 12;

/// Default auction decay period
pub const DEFAULT_AUCTION_PERIOD_SECS: u64 = 60;

/// Default buffer between the end of decay and the order deadline
pub const DEFAULT_DEADLINE_BUFFER_SECS: u64 = 12;

/// Default timeout for a single quoter call in milliseconds
pub const DEFAULT_QUOTER_TIMEOUT_MS: u64 = 2_000; // 2s

/// Protocols a classic request routes through unless told otherwise
pub const DEFAULT_PROTOCOLS: [Protocol; 3] = [Protocol::Mixed, Protocol::V2, Protocol::V3];
