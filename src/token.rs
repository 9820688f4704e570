//! Bearer token model, refresh predicate, and the JSON secret payload codec.

pub mod secret;

pub use secret::TokenSecret;

// self
use crate::_prelude::*;

/// Bearer credential served by the [`Fetcher`](crate::fetcher::Fetcher).
///
/// The field names double as the secret payload schema:
///
/// ```json
/// {
///   "access_token": "token-123",
///   "token_type": "bearer",
///   "refresh_token": "refresh-123",
///   "expiry": "2030-01-02T00:00:00Z",
///   "created_at": "2025-01-02T00:00:00Z"
/// }
/// ```
///
/// Only `access_token` is required. Empty optional fields are omitted on encode and decode back
/// to their empty/`None` values.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
	/// Access token secret; empty means no token has been issued.
	pub access_token: TokenSecret,
	/// Token type reported by the issuer (for example `bearer`).
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub token_type: String,
	/// Refresh token secret, empty when the issuer did not provide one.
	#[serde(default, skip_serializing_if = "TokenSecret::is_empty")]
	pub refresh_token: TokenSecret,
	/// Expiry instant; `None` means the token never expires.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "instant")]
	pub expiry: Option<OffsetDateTime>,
	/// Issued-at instant. Informational only.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "instant")]
	pub created_at: Option<OffsetDateTime>,
}
impl Token {
	/// Creates a token carrying only an access token.
	pub fn new(access_token: impl Into<String>) -> Self {
		Self { access_token: TokenSecret::new(access_token), ..Default::default() }
	}

	/// Sets the token type.
	pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
		self.token_type = token_type.into();

		self
	}

	/// Sets the refresh token.
	pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
		self.refresh_token = TokenSecret::new(refresh_token);

		self
	}

	/// Sets the expiry instant.
	pub fn with_expiry(mut self, instant: OffsetDateTime) -> Self {
		self.expiry = Some(instant);

		self
	}

	/// Sets the issued-at instant.
	pub fn with_created_at(mut self, instant: OffsetDateTime) -> Self {
		self.created_at = Some(instant);

		self
	}

	/// Returns `true` when the token carries no access token.
	pub fn is_empty(&self) -> bool {
		self.access_token.is_empty()
	}

	/// Determines whether the token must be replaced before it can be served at `now`.
	///
	/// Empty tokens always need a refresh. Tokens without an expiry never do. Otherwise the
	/// token is stale once its expiry falls strictly before `now + buffer`.
	pub fn needs_refresh(&self, now: OffsetDateTime, buffer: Duration) -> bool {
		if self.is_empty() {
			return true;
		}

		match (self.expiry, now.checked_add(buffer)) {
			(None, _) => false,
			(Some(expiry), Some(deadline)) => expiry < deadline,
			// `now + buffer` lies past the representable range, so every expiry precedes it.
			(Some(_), None) => true,
		}
	}

	/// Encodes the token into the JSON secret payload format.
	pub fn to_payload(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Decodes a JSON secret payload into a token.
	pub fn from_payload(raw: &str) -> Result<Self> {
		Ok(decode(raw)?)
	}
}
impl Debug for Token {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Token")
			.field("access_token", &(!self.access_token.is_empty()).then_some("<redacted>"))
			.field("token_type", &self.token_type)
			.field("refresh_token", &(!self.refresh_token.is_empty()).then_some("<redacted>"))
			.field("expiry", &self.expiry)
			.field("created_at", &self.created_at)
			.finish()
	}
}

/// Decodes a payload while keeping the path of the offending field on failure.
pub(crate) fn decode(raw: &str) -> Result<Token, serde_path_to_error::Error<serde_json::Error>> {
	let deserializer = &mut serde_json::Deserializer::from_str(raw);

	serde_path_to_error::deserialize(deserializer)
}

/// RFC 3339 codec for optional instants.
///
/// Producers that cannot omit empty timestamps write the zero instant
/// `0001-01-01T00:00:00Z`; it decodes to `None` like a missing field or `null`.
mod instant {
	// crates.io
	use serde::{Deserializer, Serializer};
	use time::{OffsetDateTime, macros, serde::rfc3339};

	const ZERO: OffsetDateTime = macros::datetime!(0001-01-01 00:00 UTC);

	pub fn serialize<S>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		rfc3339::option::serialize(value, serializer)
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(rfc3339::option::deserialize(deserializer)?.filter(|instant| *instant != ZERO))
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	const NOW: OffsetDateTime = macros::datetime!(2030-01-02 00:00 UTC);

	#[test]
	fn empty_token_always_needs_refresh() {
		let far_future = macros::datetime!(2099-01-01 00:00 UTC);

		assert!(Token::default().needs_refresh(NOW, Duration::minutes(1)));
		assert!(Token::default().needs_refresh(NOW, Duration::ZERO));
		assert!(Token::default().with_expiry(far_future).needs_refresh(NOW, Duration::ZERO));
	}

	#[test]
	fn token_without_expiry_never_needs_refresh() {
		let token = Token::new("token-123");

		assert!(!token.needs_refresh(NOW, Duration::minutes(1)));
		assert!(!token.needs_refresh(NOW, Duration::days(365)));
	}

	#[test]
	fn expiry_is_compared_strictly_against_the_buffered_deadline() {
		let past = Token::new("token-123").with_expiry(macros::datetime!(2030-01-01 00:00 UTC));
		let future = Token::new("token-123").with_expiry(macros::datetime!(2030-01-02 01:00 UTC));
		let at_now = Token::new("token-123").with_expiry(NOW);

		assert!(past.needs_refresh(NOW, Duration::minutes(1)));
		assert!(!future.needs_refresh(NOW, Duration::minutes(1)));
		assert!(at_now.needs_refresh(NOW, Duration::minutes(1)));
		assert!(!at_now.needs_refresh(NOW, Duration::ZERO));
	}

	#[test]
	fn expiry_exactly_at_the_buffered_deadline_is_still_fresh() {
		let token = Token::new("token-123").with_expiry(NOW + Duration::minutes(1));

		assert!(!token.needs_refresh(NOW, Duration::minutes(1)));
		assert!(token.needs_refresh(NOW, Duration::minutes(1) + Duration::SECOND));
	}

	#[test]
	fn full_payload_decodes_field_for_field() {
		let token = Token::from_payload(
			r#"{"access_token":"token-123","token_type":"bearer","refresh_token":"refresh-123","expiry":"2030-01-02T00:00:00Z","created_at":"2025-01-02T00:00:00Z"}"#,
		)
		.expect("Full payload should decode.");

		assert_eq!(
			token,
			Token::new("token-123")
				.with_token_type("bearer")
				.with_refresh_token("refresh-123")
				.with_expiry(macros::datetime!(2030-01-02 00:00 UTC))
				.with_created_at(macros::datetime!(2025-01-02 00:00 UTC))
		);
	}

	#[test]
	fn minimal_payload_leaves_optional_fields_empty() {
		let token = Token::from_payload(r#"{"access_token":"token-123","expiry":null}"#)
			.expect("Minimal payload should decode.");

		assert_eq!(token, Token::new("token-123"));
	}

	#[test]
	fn zero_instant_decodes_as_absent() {
		let token = Token::from_payload(
			r#"{"access_token":"token-123","expiry":"0001-01-01T00:00:00Z","created_at":"0001-01-01T00:00:00Z"}"#,
		)
		.expect("Zero instants should decode.");

		assert_eq!(token.expiry, None);
		assert_eq!(token.created_at, None);
	}

	#[test]
	fn encoding_omits_empty_fields_and_round_trips() {
		let bare = Token::new("token-123");

		assert_eq!(
			bare.to_payload().expect("Bare token should encode."),
			r#"{"access_token":"token-123"}"#
		);

		let full = Token::new("token-123")
			.with_token_type("bearer")
			.with_expiry(macros::datetime!(2030-01-02 00:00 UTC));
		let payload = full.to_payload().expect("Token should encode.");

		assert_eq!(
			payload,
			r#"{"access_token":"token-123","token_type":"bearer","expiry":"2030-01-02T00:00:00Z"}"#
		);
		assert_eq!(Token::from_payload(&payload).expect("Encoded payload should decode."), full);
	}

	#[test]
	fn decode_errors_report_the_failing_field() {
		let err = decode(r#"{"access_token":"token-123","expiry":"tomorrow"}"#)
			.expect_err("Malformed expiry should fail to decode.");

		assert_eq!(err.path().to_string(), "expiry");
		assert!(matches!(Token::from_payload("{invalid-json]"), Err(Error::Decode(_))));
	}

	#[test]
	fn debug_output_redacts_secrets() {
		let rendered = format!("{:?}", Token::new("token-123").with_refresh_token("refresh-123"));

		assert!(!rendered.contains("token-123"));
		assert!(!rendered.contains("refresh-123"));
		assert!(rendered.contains("<redacted>"));
	}
}
