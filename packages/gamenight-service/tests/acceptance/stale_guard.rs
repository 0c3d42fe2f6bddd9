use std::sync::Arc;

use gamenight_domain::types::{DetailRecord, SearchCandidate};
use gamenight_service::{
	BoxFuture, CatalogProvider, Providers, ResolutionSequence, ResolverService,
};

use super::{candidate, ranked_record};

/// Simulates the user retyping the title mid-flight: the moment the search
/// goes out, a newer resolution attempt begins on the same sequence.
struct RacingCatalog {
	sequence: Arc<ResolutionSequence>,
	candidates: Vec<SearchCandidate>,
	records: Vec<DetailRecord>,
}

impl CatalogProvider for RacingCatalog {
	fn search<'a>(
		&'a self,
		_cfg: &'a gamenight_config::Catalog,
		_query: &'a str,
	) -> BoxFuture<'a, gamenight_catalog::Result<Vec<SearchCandidate>>> {
		self.sequence.begin();

		let candidates = self.candidates.clone();

		Box::pin(async move { Ok(candidates) })
	}

	fn details<'a>(
		&'a self,
		_cfg: &'a gamenight_config::Catalog,
		_ids: &'a [String],
	) -> BoxFuture<'a, gamenight_catalog::Result<Vec<DetailRecord>>> {
		let records = self.records.clone();

		Box::pin(async move { Ok(records) })
	}
}

#[tokio::test]
async fn stale_response_is_discarded() {
	let sequence = Arc::new(ResolutionSequence::new());
	let catalog = RacingCatalog {
		sequence: sequence.clone(),
		candidates: vec![candidate("1", "Catan")],
		records: vec![ranked_record("1", Some(5), "https://cf.example/catan.jpg")],
	};
	let service =
		ResolverService::with_providers(super::test_config(), Providers::new(Arc::new(catalog)));

	assert_eq!(service.resolve_game_metadata_latest(&sequence, "catan").await, None);
}

#[tokio::test]
async fn current_response_is_kept() {
	let sequence = ResolutionSequence::new();
	let catalog = super::StubCatalog {
		candidates: vec![candidate("1", "Catan")],
		records: vec![ranked_record("1", Some(5), "https://cf.example/catan.jpg")],
	};
	let service =
		ResolverService::with_providers(super::test_config(), Providers::new(Arc::new(catalog)));
	let resolved = service
		.resolve_game_metadata_latest(&sequence, "catan")
		.await
		.expect("An undisturbed resolution must keep its response.");

	assert_eq!(resolved.image.as_deref(), Some("https://cf.example/catan.jpg"));
}
