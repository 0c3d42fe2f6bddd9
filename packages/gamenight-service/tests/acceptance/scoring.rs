use std::sync::Arc;

use gamenight_service::{Providers, ResolverService};

use super::{StubCatalog, candidate};

fn service_with_candidates(
	candidates: Vec<gamenight_domain::types::SearchCandidate>,
) -> ResolverService {
	let catalog = StubCatalog { candidates, records: Vec::new() };

	ResolverService::with_providers(super::test_config(), Providers::new(Arc::new(catalog)))
}

#[tokio::test]
async fn scores_are_case_insensitive_edit_distances() {
	let service = service_with_candidates(vec![candidate("1", "Catan")]);
	let ranked = service.search_candidates("catan").await;

	assert_eq!(ranked[0].score, 0);

	let ranked = service.search_candidates("Catann").await;

	assert_eq!(ranked[0].score, 1);
}

#[tokio::test]
async fn equal_scores_retain_endpoint_order() {
	let service = service_with_candidates(vec![
		candidate("10", "Root"),
		candidate("20", "Riot"),
		candidate("30", "Roots"),
	]);
	let ranked = service.search_candidates("rot").await;

	assert_eq!(ranked.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["10", "20", "30"]);
}

#[tokio::test]
async fn returns_at_most_five_candidates() {
	let candidates = (0..9).map(|i| candidate(&i.to_string(), "Azul")).collect();
	let service = service_with_candidates(candidates);

	assert_eq!(service.search_candidates("azul").await.len(), 5);
}
