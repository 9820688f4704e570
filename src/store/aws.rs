//! [`SecretStoreClient`] backed by AWS Secrets Manager (`aws` feature).

// crates.io
use aws_sdk_secretsmanager::{
	Client, error::SdkError, operation::get_secret_value::GetSecretValueError,
};
// self
use crate::{
	_prelude::*,
	store::{SecretFuture, SecretStoreClient},
};

/// Failures produced when reading a token secret from AWS Secrets Manager.
#[derive(Debug, ThisError)]
pub enum AwsSecretStoreError {
	/// The `GetSecretValue` call failed.
	#[error("Secrets Manager rejected the GetSecretValue request.")]
	Request(#[from] SdkError<GetSecretValueError>),
	/// The secret only holds binary data.
	#[error("Secret `{key}` has no string value.")]
	MissingSecretString {
		/// Lookup key of the secret.
		key: String,
	},
}

impl SecretStoreClient for Client {
	type Error = AwsSecretStoreError;

	fn get_secret_string<'a>(&'a self, key: &'a str) -> SecretFuture<'a, String, Self::Error> {
		Box::pin(async move {
			let output = self.get_secret_value().secret_id(key).send().await?;

			output
				.secret_string()
				.map(ToOwned::to_owned)
				.ok_or_else(|| AwsSecretStoreError::MissingSecretString { key: key.to_owned() })
		})
	}
}
