//! Bounds applied to caller input and runtime configuration

/// Denominator for basis-point values
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Minimum allowed timeout for a single quoter call in milliseconds
pub const MIN_QUOTER_TIMEOUT_MS: u64 = 100; // 100ms

/// Maximum allowed timeout for a single quoter call in milliseconds
pub const MAX_QUOTER_TIMEOUT_MS: u64 = 30_000; // 30s

/// Longest auction a caller may request
pub const MAX_AUCTION_PERIOD_SECS: u64 = 3_600;

/// Longest deadline buffer a caller may request
pub const MAX_DEADLINE_BUFFER_SECS: u64 = 3_600;
