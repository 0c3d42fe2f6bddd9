use gamenight_config::Catalog;
use gamenight_domain::types::DetailRecord;

use crate::{Result, wire};

/// Fetches the full detail documents for all `ids` in one batched request.
/// Batching is deliberate: detail payloads are large and the upstream service
/// is rate-sensitive, so a resolution costs exactly one round trip here.
pub async fn fetch_details(cfg: &Catalog, ids: &[String]) -> Result<Vec<DetailRecord>> {
	let client = crate::http_client(cfg)?;
	let url = format!("{}{}", cfg.api_base, cfg.thing_path);
	let joined = ids.join(",");
	let res = client
		.get(url)
		.query(&[("id", joined.as_str()), ("stats", "1")])
		.send()
		.await?;
	let body = res.error_for_status()?.text().await?;

	wire::parse_detail_response(&body)
}
