//! Retrieval contract the fetcher delegates to whenever its cached token is stale.

// self
use crate::{_prelude::*, token::Token};

/// Boxed future returned by [`TokenAdapter::fetch`].
pub type AdapterFuture<'a> = Pin<Box<dyn Future<Output = Result<Token>> + 'a + Send>>;

/// Backend capable of producing one fresh [`Token`].
///
/// Implementations perform whatever I/O is needed, decode the result into a [`Token`], and fail
/// with a descriptive [`Error`] that keeps the underlying cause instead of returning a partially
/// populated token. They are not required to reject empty access tokens; the fetcher treats an
/// empty token as stale on its next call.
///
/// Cancellation follows the caller: dropping the returned future abandons the request.
pub trait TokenAdapter
where
	Self: Send + Sync,
{
	/// Retrieves a fresh token from the backing source.
	fn fetch(&self) -> AdapterFuture<'_>;
}
impl<A> TokenAdapter for Arc<A>
where
	A: ?Sized + TokenAdapter,
{
	fn fetch(&self) -> AdapterFuture<'_> {
		(**self).fetch()
	}
}
impl<A> TokenAdapter for Box<A>
where
	A: ?Sized + TokenAdapter,
{
	fn fetch(&self) -> AdapterFuture<'_> {
		(**self).fetch()
	}
}
