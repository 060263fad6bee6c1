//! Error type shared across the Kerbero crates

pub type KrbResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Encoding a value into its textual form failed
	SerializationError(String),
	/// Broken invariant in host code
	Internal(String),
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::SerializationError(msg) => write!(f, "serialization error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		tracing::warn!("serde_json error: {}", err);
		Self::SerializationError(err.to_string())
	}
}


// vim: ts=4
