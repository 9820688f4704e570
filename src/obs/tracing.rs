// self
use crate::{
	_prelude::*,
	obs::{FetchOutcome, FetchStage},
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFetch<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFetch<F> = F;

/// A span builder used by the fetcher.
#[derive(Clone, Debug)]
pub struct FetchSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FetchSpan {
	/// Creates a new span tagged with the provided stage.
	pub fn new(stage: FetchStage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("token_fetcher.fetch", stage = stage.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFetch<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a tracing event describing the outcome (when enabled).
pub fn emit_fetch_outcome(outcome: FetchOutcome) {
	#[cfg(feature = "tracing")]
	{
		let label = outcome.as_str();

		match outcome {
			FetchOutcome::CacheHit => tracing::debug!(outcome = label, "served cached token"),
			FetchOutcome::Refreshed => tracing::debug!(outcome = label, "refreshed token"),
			FetchOutcome::Failure => tracing::warn!(outcome = label, "token refresh failed"),
		}
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = outcome;
	}
}
