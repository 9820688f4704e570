//! Secret store contracts and the adapter that decodes stored token payloads.

#[cfg(feature = "aws")] pub mod aws;
pub mod memory;

#[cfg(feature = "aws")] pub use aws::AwsSecretStoreError;
pub use memory::{MemorySecretStore, MemorySecretStoreError};

// self
use crate::{
	_prelude::*,
	adapter::{AdapterFuture, TokenAdapter},
	token::{self, Token},
};

/// Boxed future returned by [`SecretStoreClient::get_secret_string`].
pub type SecretFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + 'a + Send>>;

/// Read-only client for a secret store that keeps values as strings.
pub trait SecretStoreClient
where
	Self: Send + Sync,
{
	/// Concrete error emitted by the store.
	type Error: 'static + Send + Sync + StdError;

	/// Returns the current string value of the secret identified by `key`.
	fn get_secret_string<'a>(&'a self, key: &'a str) -> SecretFuture<'a, String, Self::Error>;
}
impl<C> SecretStoreClient for Arc<C>
where
	C: ?Sized + SecretStoreClient,
{
	type Error = C::Error;

	fn get_secret_string<'a>(&'a self, key: &'a str) -> SecretFuture<'a, String, Self::Error> {
		(**self).get_secret_string(key)
	}
}

/// [`TokenAdapter`] that reads a JSON token payload from a secret store.
pub struct SecretsStoreAdapter<C> {
	client: C,
	key: String,
}
impl<C> SecretsStoreAdapter<C> {
	/// Creates an adapter reading the secret stored under `key`.
	pub fn new(client: C, key: impl Into<String>) -> Self {
		Self { client, key: key.into() }
	}

	/// Returns the lookup key of the secret.
	pub fn key(&self) -> &str {
		&self.key
	}
}
impl<C> TokenAdapter for SecretsStoreAdapter<C>
where
	C: SecretStoreClient,
{
	fn fetch(&self) -> AdapterFuture<'_> {
		Box::pin(async move {
			let raw = self
				.client
				.get_secret_string(&self.key)
				.await
				.map_err(|err| Error::store_fetch(&self.key, err))?;

			token::decode(&raw)
				.map_err(|source| Error::StoreParse { key: self.key.clone(), source })
		})
	}
}
impl<C> Debug for SecretsStoreAdapter<C> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SecretsStoreAdapter").field("key", &self.key).finish_non_exhaustive()
	}
}
