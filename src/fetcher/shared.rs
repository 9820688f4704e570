// self
use crate::{
	_prelude::*,
	fetcher::{FetchMetrics, Fetcher},
	token::Token,
};

/// Cloneable handle that lets many tasks share one [`Fetcher`].
///
/// Callers are served one at a time, so when the cache is stale the first caller refreshes and
/// everyone queued behind it receives the refreshed token without another adapter call.
#[derive(Clone)]
pub struct SharedFetcher {
	inner: Arc<AsyncMutex<Fetcher>>,
	metrics: Arc<FetchMetrics>,
}
impl SharedFetcher {
	/// Wraps `fetcher` for shared use.
	pub fn new(fetcher: Fetcher) -> Self {
		let metrics = fetcher.shared_metrics();

		Self { inner: Arc::new(AsyncMutex::new(fetcher)), metrics }
	}

	/// Returns a usable token; see [`Fetcher::fetch`].
	pub async fn fetch(&self) -> Result<Token> {
		let mut fetcher = self.inner.lock().await;

		fetcher.fetch().await
	}

	/// Returns a copy of the cached token without checking its freshness.
	pub async fn cached(&self) -> Token {
		self.inner.lock().await.cached().clone()
	}

	/// Returns the fetch counters of the wrapped fetcher.
	pub fn metrics(&self) -> &FetchMetrics {
		&self.metrics
	}
}
impl Debug for SharedFetcher {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SharedFetcher").field("metrics", &self.metrics).finish_non_exhaustive()
	}
}
