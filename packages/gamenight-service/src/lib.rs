pub mod resolve;
pub mod search;
pub mod sequence;

use std::{future::Future, pin::Pin, sync::Arc};

use gamenight_config::{Catalog, Config};
use gamenight_domain::types::{DetailRecord, SearchCandidate};

pub use sequence::{ResolutionSequence, ResolutionTicket};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Outbound access to the board-game catalog. The default implementation
/// talks to the real endpoints; tests inject fakes through [`Providers`].
pub trait CatalogProvider
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		cfg: &'a Catalog,
		query: &'a str,
	) -> BoxFuture<'a, gamenight_catalog::Result<Vec<SearchCandidate>>>;

	fn details<'a>(
		&'a self,
		cfg: &'a Catalog,
		ids: &'a [String],
	) -> BoxFuture<'a, gamenight_catalog::Result<Vec<DetailRecord>>>;
}

#[derive(Clone)]
pub struct Providers {
	pub catalog: Arc<dyn CatalogProvider>,
}

struct DefaultProviders;

impl CatalogProvider for DefaultProviders {
	fn search<'a>(
		&'a self,
		cfg: &'a Catalog,
		query: &'a str,
	) -> BoxFuture<'a, gamenight_catalog::Result<Vec<SearchCandidate>>> {
		Box::pin(gamenight_catalog::search::search(cfg, query))
	}

	fn details<'a>(
		&'a self,
		cfg: &'a Catalog,
		ids: &'a [String],
	) -> BoxFuture<'a, gamenight_catalog::Result<Vec<DetailRecord>>> {
		Box::pin(gamenight_catalog::detail::fetch_details(cfg, ids))
	}
}

impl Providers {
	pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
		Self { catalog }
	}
}

impl Default for Providers {
	fn default() -> Self {
		Self { catalog: Arc::new(DefaultProviders) }
	}
}

/// The metadata resolution engine. Holds no state beyond configuration and
/// the injected catalog handle; every resolution call is independent.
pub struct ResolverService {
	pub cfg: Config,
	pub providers: Providers,
}

impl ResolverService {
	pub fn new(cfg: Config) -> Self {
		Self { cfg, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, providers: Providers) -> Self {
		Self { cfg, providers }
	}
}
