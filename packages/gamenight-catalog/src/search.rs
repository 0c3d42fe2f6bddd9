use gamenight_config::Catalog;
use gamenight_domain::types::SearchCandidate;

use crate::{Result, wire};

/// Type filter sent with every search; the engine only resolves board games.
const SEARCH_TYPE: &str = "boardgame";

/// Queries the catalog search endpoint for entries loosely matching `query`.
/// One request, no retries; the response carries ids and display names only.
pub async fn search(cfg: &Catalog, query: &str) -> Result<Vec<SearchCandidate>> {
	let client = crate::http_client(cfg)?;
	let url = format!("{}{}", cfg.api_base, cfg.search_path);
	let res = client
		.get(url)
		.query(&[("query", query), ("type", SEARCH_TYPE)])
		.send()
		.await?;
	let body = res.error_for_status()?.text().await?;

	wire::parse_search_response(&body)
}
