//! Shared domain models

pub mod amount;
pub mod native;
pub mod secret_string;

pub use amount::{parse_amount, u256_string};
pub use native::{is_native, WrappedNativeTable, NATIVE_ADDRESS, WRAPPED_NATIVE_UNIT};
pub use secret_string::SecretString;
