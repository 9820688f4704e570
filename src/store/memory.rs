//! Thread-safe in-memory [`SecretStoreClient`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	store::{SecretFuture, SecretStoreClient},
	token::Token,
};

type SecretMap = Arc<RwLock<HashMap<String, String>>>;

/// Failures produced by [`MemorySecretStore`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum MemorySecretStoreError {
	/// No secret is stored under the key.
	#[error("Secret `{key}` does not exist.")]
	NotFound {
		/// Missing lookup key.
		key: String,
	},
}

/// Secret store that keeps values in-process; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemorySecretStore(SecretMap);
impl MemorySecretStore {
	/// Stores `value` under `key`, returning the previous value.
	pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.0.write().insert(key.into(), value.into())
	}

	/// Encodes `token` into the secret payload format and stores it under `key`.
	pub fn insert_token(&self, key: impl Into<String>, token: &Token) -> Result<()> {
		let payload = token.to_payload()?;

		self.insert(key, payload);

		Ok(())
	}

	/// Removes the secret stored under `key`.
	pub fn remove(&self, key: &str) -> Option<String> {
		self.0.write().remove(key)
	}

	fn get_now(map: SecretMap, key: &str) -> Result<String, MemorySecretStoreError> {
		map.read()
			.get(key)
			.cloned()
			.ok_or_else(|| MemorySecretStoreError::NotFound { key: key.to_owned() })
	}
}
impl SecretStoreClient for MemorySecretStore {
	type Error = MemorySecretStoreError;

	fn get_secret_string<'a>(&'a self, key: &'a str) -> SecretFuture<'a, String, Self::Error> {
		let map = self.0.clone();

		Box::pin(async move { Self::get_now(map, key) })
	}
}
