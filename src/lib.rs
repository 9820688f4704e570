//! Lazily-refreshing access token cache that sits in front of pluggable credential sources and
//! only reaches for the backing store when the cached token is missing or about to expire.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod adapter;
pub mod clock;
pub mod error;
pub mod fetcher;
pub mod obs;
pub mod store;
pub mod token;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// std
	use std::{
		collections::VecDeque,
		sync::atomic::{AtomicUsize, Ordering},
	};
	// self
	use crate::{
		adapter::{AdapterFuture, TokenAdapter},
		token::Token,
	};

	/// Failures produced by [`MockAdapter`].
	#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
	pub enum MockAdapterError {
		/// A scripted failure pushed via [`MockAdapter::push_error`].
		#[error("{0}")]
		Scripted(String),
		/// The adapter was called more often than it was scripted for.
		#[error("Mock adapter has no scripted response left.")]
		Exhausted,
	}

	#[derive(Clone, Debug)]
	enum MockResponse {
		Token(Token),
		Error(String),
		Pending,
	}

	/// Scripted [`TokenAdapter`] that replays queued responses in order and counts calls.
	///
	/// Clones share the script and the call counter, so tests can hand one clone to a
	/// [`Fetcher`](crate::fetcher::Fetcher) and keep another for assertions.
	#[derive(Clone, Debug, Default)]
	pub struct MockAdapter {
		script: Arc<Mutex<VecDeque<MockResponse>>>,
		calls: Arc<AtomicUsize>,
	}
	impl MockAdapter {
		/// Queues a successful response.
		pub fn push_token(&self, token: Token) -> &Self {
			self.script.lock().push_back(MockResponse::Token(token));

			self
		}

		/// Queues a failure carrying the provided message.
		pub fn push_error(&self, message: impl Into<String>) -> &Self {
			self.script.lock().push_back(MockResponse::Error(message.into()));

			self
		}

		/// Queues a response that never resolves, for cancellation tests.
		pub fn push_pending(&self) -> &Self {
			self.script.lock().push_back(MockResponse::Pending);

			self
		}

		/// Returns how many times [`TokenAdapter::fetch`] has been invoked.
		pub fn calls(&self) -> usize {
			self.calls.load(Ordering::SeqCst)
		}
	}
	impl TokenAdapter for MockAdapter {
		fn fetch(&self) -> AdapterFuture<'_> {
			self.calls.fetch_add(1, Ordering::SeqCst);

			let next = self.script.lock().pop_front();

			Box::pin(async move {
				match next {
					Some(MockResponse::Token(token)) => Ok(token),
					Some(MockResponse::Error(message)) =>
						Err(Error::adapter(MockAdapterError::Scripted(message))),
					Some(MockResponse::Pending) => std::future::pending().await,
					None => Err(Error::adapter(MockAdapterError::Exhausted)),
				}
			})
		}
	}
}

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::{Mutex, RwLock};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};

	pub use crate::error::{Error, Result};
}

#[cfg(test)] use color_eyre as _;
