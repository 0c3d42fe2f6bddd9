use tracing::warn;

use gamenight_domain::{
	metadata,
	types::{ResolvedMetadata, ScoredCandidate},
};

use crate::ResolverService;

impl ResolverService {
	/// Resolves a free-text title to the normalized metadata of the best
	/// catalog match, or `None` when no usable entry exists. This is the
	/// entire surface the event form consumes.
	pub async fn resolve_game_metadata(&self, title: &str) -> Option<ResolvedMetadata> {
		let candidates = self.search_candidates(title).await;

		self.resolve_candidates(&candidates).await
	}

	/// Fetches detail records for all candidates in one batched call, then
	/// picks the entry with the best overall catalog rank. Text similarity
	/// alone never decides: a candidate without a parseable overall rank is
	/// skipped, and if none has one the resolution yields `None`.
	pub async fn resolve_candidates(
		&self,
		candidates: &[ScoredCandidate],
	) -> Option<ResolvedMetadata> {
		if candidates.is_empty() {
			return None;
		}

		let ids = candidates.iter().map(|candidate| candidate.id.clone()).collect::<Vec<_>>();
		let records = match self.providers.catalog.details(&self.cfg.catalog, &ids).await {
			Ok(records) => records,
			Err(err) => {
				warn!(error = %err, "Catalog detail fetch failed.");

				return None;
			},
		};

		metadata::select_best(&records).map(metadata::project)
	}
}
