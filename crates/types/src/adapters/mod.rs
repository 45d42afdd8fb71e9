//! Quoting adapter contract

pub mod errors;
pub mod traits;

pub use errors::AdapterError;
pub use traits::QuoteAdapter;

/// Result type for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;
