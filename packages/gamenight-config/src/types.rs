use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub catalog: Catalog,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
	/// Base URL of the catalog API, without a trailing slash.
	pub api_base: String,
	pub search_path: String,
	pub thing_path: String,
	/// Applied to every outbound request. The upstream service is third-party
	/// and unbounded latency would hang the caller.
	pub timeout_ms: u64,
	/// Optional. Sent as-is when present; the catalog asks integrators to
	/// identify themselves.
	pub user_agent: Option<String>,
}
