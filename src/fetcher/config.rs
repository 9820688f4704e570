// self
use crate::_prelude::*;

/// Tunables applied to a [`Fetcher`](crate::fetcher::Fetcher) at construction.
///
/// Serializes as `{ "expiry_buffer_secs": 60 }` so embedders can keep it in their own config
/// files; missing fields fall back to the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
	#[serde(rename = "expiry_buffer_secs", with = "whole_seconds")]
	expiry_buffer: Duration,
}
impl FetcherConfig {
	/// Lead time applied when no buffer is configured.
	pub const DEFAULT_EXPIRY_BUFFER: Duration = Duration::minutes(1);

	/// Overrides the lead time before expiry at which a token counts as stale.
	///
	/// Negative durations are clamped to zero.
	pub fn with_expiry_buffer(mut self, buffer: Duration) -> Self {
		self.expiry_buffer = if buffer.is_negative() { Duration::ZERO } else { buffer };

		self
	}

	/// Returns the configured expiry buffer.
	pub fn expiry_buffer(&self) -> Duration {
		self.expiry_buffer
	}
}
impl Default for FetcherConfig {
	fn default() -> Self {
		Self { expiry_buffer: Self::DEFAULT_EXPIRY_BUFFER }
	}
}

mod whole_seconds {
	// crates.io
	use serde::{Deserialize, Deserializer, Serializer};
	use time::Duration;

	pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_i64(value.whole_seconds())
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
	where
		D: Deserializer<'de>,
	{
		let secs = i64::deserialize(deserializer)?;

		Ok(Duration::seconds(secs.max(0)))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_to_one_minute() {
		assert_eq!(FetcherConfig::default().expiry_buffer(), Duration::minutes(1));
	}

	#[test]
	fn negative_buffers_clamp_to_zero() {
		let config = FetcherConfig::default().with_expiry_buffer(Duration::seconds(-30));

		assert_eq!(config.expiry_buffer(), Duration::ZERO);
	}

	#[test]
	fn config_round_trips_through_json() {
		let config = FetcherConfig::default().with_expiry_buffer(Duration::seconds(90));
		let payload = serde_json::to_string(&config).expect("Config should serialize.");

		assert_eq!(payload, r#"{"expiry_buffer_secs":90}"#);

		let decoded: FetcherConfig =
			serde_json::from_str(&payload).expect("Serialized config should deserialize.");

		assert_eq!(decoded, config);

		let defaulted: FetcherConfig =
			serde_json::from_str("{}").expect("Empty config should take defaults.");

		assert_eq!(defaulted, FetcherConfig::default());
	}
}
