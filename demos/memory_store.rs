//! Demonstrates serving a cached token from an in-memory secret store and picking up a rotated
//! secret once the cached token enters its expiry buffer.

// crates.io
use color_eyre::Result;
use time::{Duration, OffsetDateTime};
// self
use token_fetcher::{
	clock::ManualClock,
	fetcher::{Fetcher, FetcherConfig},
	store::MemorySecretStore,
	token::Token,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let now = OffsetDateTime::now_utc();
	let clock = ManualClock::new(now);
	let store = MemorySecretStore::default();

	store.insert_token(
		"svc/api-token",
		&Token::new("demo-access-1").with_expiry(now + Duration::minutes(15)),
	)?;

	let mut fetcher = Fetcher::secrets_store(store.clone(), "svc/api-token")
		.with_config(FetcherConfig::default().with_expiry_buffer(Duration::minutes(5)))
		.with_clock(clock.clone());
	let first = fetcher.fetch().await?;

	println!("Fetched access token: {}.", first.access_token.expose());

	store.insert_token(
		"svc/api-token",
		&Token::new("demo-access-2").with_expiry(now + Duration::hours(1)),
	)?;
	clock.advance(Duration::minutes(5));

	println!("Still cached: {}.", fetcher.fetch().await?.access_token.expose());

	clock.advance(Duration::minutes(6));

	println!("Rotated access token: {}.", fetcher.fetch().await?.access_token.expose());
	println!(
		"Cache hits: {}, refreshes: {}.",
		fetcher.metrics().cache_hits(),
		fetcher.metrics().refreshes()
	);

	Ok(())
}
