mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Catalog, Config, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.catalog.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "catalog.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.catalog.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "catalog.timeout_ms must be greater than zero.".to_string(),
		});
	}

	for (label, path) in [
		("catalog.search_path", &cfg.catalog.search_path),
		("catalog.thing_path", &cfg.catalog.thing_path),
	] {
		if !path.starts_with('/') {
			return Err(Error::Validation {
				message: format!("{label} must start with a slash."),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	while cfg.catalog.api_base.ends_with('/') {
		cfg.catalog.api_base.pop();
	}
	if cfg.catalog.user_agent.as_deref().map(|agent| agent.trim().is_empty()).unwrap_or(false) {
		cfg.catalog.user_agent = None;
	}
}
