//! Error types for quote comparison

use thiserror::Error;

use crate::requests::TradeType;

/// Errors raised when quotes cannot be ranked against each other
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
	#[error("Cannot compare a {left} quote with a {right} quote")]
	TradeTypeMismatch { left: TradeType, right: TradeType },
}
