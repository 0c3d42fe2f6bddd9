pub mod detail;
pub mod search;
pub mod wire;

mod error;

pub use error::{Error, Result};

use std::time::Duration;

use reqwest::Client;

use gamenight_config::Catalog;

pub(crate) fn http_client(cfg: &Catalog) -> Result<Client> {
	let mut builder = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms));

	if let Some(agent) = cfg.user_agent.as_deref() {
		builder = builder.user_agent(agent);
	}

	Ok(builder.build()?)
}
