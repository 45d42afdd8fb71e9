//! API key handling
//!
//! Quoter credentials are held in a `SecretString`, which zeroizes its
//! buffer on drop and never prints or serializes the underlying value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string that is redacted everywhere except [`SecretString::expose_secret`]
///
/// ```rust
/// use routing_types::SecretString;
///
/// let api_key = SecretString::from("rfq-api-key");
/// assert_eq!(api_key.expose_secret(), "rfq-api-key");
/// assert_eq!(api_key.to_string(), "[REDACTED]");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
	inner: String,
}

impl SecretString {
	pub fn new(secret: String) -> Self {
		Self { inner: secret }
	}

	/// Access the secret value, e.g. to build a request header
	pub fn expose_secret(&self) -> &str {
		&self.inner
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SecretString")
			.field("inner", &"[REDACTED]")
			.finish()
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[REDACTED]")
	}
}

impl From<String> for SecretString {
	fn from(secret: String) -> Self {
		Self::new(secret)
	}
}

impl From<&str> for SecretString {
	fn from(secret: &str) -> Self {
		Self::new(secret.to_string())
	}
}

// Serializing a secret (for example while logging settings) must not leak it
impl Serialize for SecretString {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str("[REDACTED]")
	}
}

impl<'de> Deserialize<'de> for SecretString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer).map(SecretString::new)
	}
}

impl PartialEq for SecretString {
	fn eq(&self, other: &Self) -> bool {
		constant_time_eq(self.inner.as_bytes(), other.inner.as_bytes())
	}
}

impl Eq for SecretString {}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
	if a.len() != b.len() {
		return false;
	}

	a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_secret_is_redacted() {
		let secret = SecretString::from("rfq-key");
		assert!(!format!("{:?}", secret).contains("rfq-key"));
		assert_eq!(secret.to_string(), "[REDACTED]");
		assert_eq!(serde_json::to_string(&secret).unwrap(), "\"[REDACTED]\"");
	}

	#[test]
	fn test_secret_deserializes_plain_value() {
		let secret: SecretString = serde_json::from_str("\"rfq-key\"").unwrap();
		assert_eq!(secret.expose_secret(), "rfq-key");
		assert!(!secret.is_empty());
	}

	#[test]
	fn test_secret_equality() {
		assert_eq!(SecretString::from("a"), SecretString::from("a"));
		assert_ne!(SecretString::from("a"), SecretString::from("b"));
		assert_ne!(SecretString::from("a"), SecretString::from("ab"));
	}
}
