//! Optional observability helpers for token fetches.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `token_fetcher.fetch` with a `stage` field
//!   (`fetch` or `refresh`), plus one event per fetch outcome.
//! - Enable `metrics` to increment the `token_fetcher_fetch_total` counter for every fetch,
//!   labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Call sites instrumented by the fetcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchStage {
	/// Entry to [`Fetcher::fetch`](crate::fetcher::Fetcher::fetch).
	Fetch,
	/// Adapter round-trip performed on a stale or empty cache.
	Refresh,
}
impl FetchStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FetchStage::Fetch => "fetch",
			FetchStage::Refresh => "refresh",
		}
	}
}
impl Display for FetchStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchOutcome {
	/// The cached token was served without touching the adapter.
	CacheHit,
	/// The adapter produced a new token that replaced the cache.
	Refreshed,
	/// The adapter failed; the error was propagated back to the caller.
	Failure,
}
impl FetchOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FetchOutcome::CacheHit => "cache_hit",
			FetchOutcome::Refreshed => "refreshed",
			FetchOutcome::Failure => "failure",
		}
	}
}
impl Display for FetchOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records an outcome through every enabled observability backend.
pub fn observe_fetch_outcome(outcome: FetchOutcome) {
	record_fetch_outcome(outcome);
	emit_fetch_outcome(outcome);
}
