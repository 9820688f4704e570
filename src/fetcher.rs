//! Cache/refresh orchestration in front of a [`TokenAdapter`].
//!
//! A [`Fetcher`] owns exactly one cached [`Token`]. [`Fetcher::fetch`] serves that token while it
//! is fresh and otherwise performs a single adapter round-trip, replacing the cache only when the
//! adapter succeeds. A failed or cancelled refresh leaves the previous token in place, so the next
//! call retries immediately. There is no internal retry, backoff, or timeout; deadlines belong to
//! the caller, who cancels a fetch by dropping its future.
//!
//! `Fetcher::fetch` takes `&mut self`, so one owner drives it. Wrap it in a [`SharedFetcher`] when
//! several tasks need tokens from the same cache.

mod config;
mod metrics;
mod shared;

pub use config::FetcherConfig;
pub use metrics::FetchMetrics;
pub use shared::SharedFetcher;

// self
use crate::{
	_prelude::*,
	adapter::TokenAdapter,
	clock::{Clock, SystemClock},
	obs::{self, FetchOutcome, FetchSpan, FetchStage},
	store::{SecretStoreClient, SecretsStoreAdapter},
	token::Token,
};

/// Lazily-refreshing single-token cache.
pub struct Fetcher {
	config: FetcherConfig,
	clock: Arc<dyn Clock>,
	adapter: Arc<dyn TokenAdapter>,
	token: Token,
	metrics: Arc<FetchMetrics>,
}
impl Fetcher {
	/// Creates a fetcher with the default config and the system clock.
	pub fn new(adapter: impl 'static + TokenAdapter) -> Self {
		Self::from_shared(Arc::new(adapter))
	}

	/// Creates a fetcher around an adapter that is already shared elsewhere.
	pub fn from_shared(adapter: Arc<dyn TokenAdapter>) -> Self {
		Self {
			config: FetcherConfig::default(),
			clock: Arc::new(SystemClock),
			adapter,
			token: Token::default(),
			metrics: Default::default(),
		}
	}

	/// Creates a fetcher that reads the token stored under `key` through `client`.
	pub fn secrets_store<C>(client: C, key: impl Into<String>) -> Self
	where
		C: 'static + SecretStoreClient,
	{
		Self::new(SecretsStoreAdapter::new(client, key))
	}

	/// Replaces the configuration.
	pub fn with_config(mut self, config: FetcherConfig) -> Self {
		self.config = config;

		self
	}

	/// Replaces the time source used for freshness checks.
	pub fn with_clock(mut self, clock: impl 'static + Clock) -> Self {
		self.clock = Arc::new(clock);

		self
	}

	/// Moves the fetcher behind a lock so it can be shared across tasks.
	pub fn into_shared(self) -> SharedFetcher {
		SharedFetcher::new(self)
	}

	/// Returns a usable token, refreshing through the adapter when the cache is empty or stale.
	///
	/// Adapter errors are returned unchanged and leave the cache as it was before the call.
	pub async fn fetch(&mut self) -> Result<Token> {
		if !self.refresh_required() {
			self.metrics.record_cache_hit();
			obs::observe_fetch_outcome(FetchOutcome::CacheHit);

			return Ok(self.token.clone());
		}

		let span = FetchSpan::new(FetchStage::Fetch);

		span.instrument(self.refresh()).await
	}

	/// Returns `true` when the next [`fetch`](Self::fetch) will call the adapter.
	pub fn refresh_required(&self) -> bool {
		self.token.needs_refresh(self.clock.now(), self.config.expiry_buffer())
	}

	/// Returns the cached token without checking its freshness.
	pub fn cached(&self) -> &Token {
		&self.token
	}

	/// Returns the active configuration.
	pub fn config(&self) -> &FetcherConfig {
		&self.config
	}

	/// Returns the fetch counters.
	pub fn metrics(&self) -> &FetchMetrics {
		&self.metrics
	}

	pub(crate) fn shared_metrics(&self) -> Arc<FetchMetrics> {
		self.metrics.clone()
	}

	async fn refresh(&mut self) -> Result<Token> {
		let span = FetchSpan::new(FetchStage::Refresh);
		let adapter = self.adapter.clone();

		match span.instrument(adapter.fetch()).await {
			Ok(token) => {
				self.token = token.clone();
				self.metrics.record_refresh();
				obs::observe_fetch_outcome(FetchOutcome::Refreshed);

				Ok(token)
			},
			Err(err) => {
				self.metrics.record_failure();
				obs::observe_fetch_outcome(FetchOutcome::Failure);

				Err(err)
			},
		}
	}
}
impl Debug for Fetcher {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Fetcher")
			.field("config", &self.config)
			.field("token", &self.token)
			.field("metrics", &self.metrics)
			.finish_non_exhaustive()
	}
}
