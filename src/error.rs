//! Fetcher-level error types shared by adapters, stores, and the payload codec.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed error used to carry backend-specific causes.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical error surfaced by [`Fetcher::fetch`](crate::fetcher::Fetcher::fetch) and adapters.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The secret store could not return the payload for the key.
	#[error("Unable to fetch token from store `{key}`.")]
	StoreFetch {
		/// Lookup key of the secret.
		key: String,
		/// Store-specific failure.
		#[source]
		source: BoxError,
	},
	/// The secret store returned a payload that is not a valid token record.
	#[error("Unable to parse token from store `{key}`.")]
	StoreParse {
		/// Lookup key of the secret.
		key: String,
		/// Structured parsing failure, including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// A token could not be encoded into the secret payload format.
	#[error("Unable to encode token payload.")]
	Encode(#[from] serde_json::Error),
	/// A secret payload could not be decoded into a token.
	#[error("Unable to decode token payload.")]
	Decode(#[from] serde_path_to_error::Error<serde_json::Error>),
	/// Failure raised by a custom [`TokenAdapter`](crate::adapter::TokenAdapter).
	#[error("Token adapter failed.")]
	Adapter {
		/// Adapter-specific failure.
		#[source]
		source: BoxError,
	},
}
impl Error {
	/// Wraps a custom adapter failure, keeping it reachable through [`StdError::source`].
	pub fn adapter(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Adapter { source: Box::new(src) }
	}

	/// Wraps a secret store failure for the provided key.
	pub fn store_fetch(key: impl Into<String>, src: impl 'static + Send + Sync + StdError) -> Self {
		Self::StoreFetch { key: key.into(), source: Box::new(src) }
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::io::{Error as IoError, ErrorKind};
	// self
	use super::*;

	#[test]
	fn store_fetch_keeps_the_original_error_as_source() {
		let error = Error::store_fetch("svc/token", IoError::other("store offline"));

		assert_eq!(error.to_string(), "Unable to fetch token from store `svc/token`.");

		let source =
			StdError::source(&error).expect("Store fetch errors should expose their cause.");

		assert_eq!(source.to_string(), "store offline");
		assert!(source.downcast_ref::<IoError>().is_some());
	}

	#[test]
	fn adapter_errors_are_unwrappable() {
		let error = Error::adapter(IoError::new(ErrorKind::TimedOut, "deadline exceeded"));

		assert!(matches!(error, Error::Adapter { .. }));

		let source = StdError::source(&error).expect("Adapter errors should expose their cause.");

		assert_eq!(
			source.downcast_ref::<IoError>().map(IoError::kind),
			Some(ErrorKind::TimedOut)
		);
	}
}
