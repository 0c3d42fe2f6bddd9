use tracing::warn;

use gamenight_domain::{matching, types::ScoredCandidate};

use crate::ResolverService;

impl ResolverService {
	/// Searches the catalog for `query` and returns the closest-matching
	/// candidates, best first, truncated to the batch limit.
	///
	/// A blank query short-circuits without touching the network. Transport
	/// and parse failures degrade to an empty list; the caller treats "no
	/// candidates" and "search failed" the same way.
	pub async fn search_candidates(&self, query: &str) -> Vec<ScoredCandidate> {
		if query.trim().is_empty() {
			return Vec::new();
		}

		let raw = match self.providers.catalog.search(&self.cfg.catalog, query).await {
			Ok(raw) => raw,
			Err(err) => {
				warn!(error = %err, "Catalog search failed.");

				return Vec::new();
			},
		};

		matching::rank_candidates(raw, query)
	}
}
