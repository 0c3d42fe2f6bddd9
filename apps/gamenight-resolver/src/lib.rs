use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gamenight_service::ResolverService;

#[derive(Debug, Parser)]
#[command(
	version = gamenight_cli::VERSION,
	rename_all = "kebab",
	styles = gamenight_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Free-text game title to resolve against the catalog.
	#[arg(value_name = "TITLE")]
	pub title: String,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = gamenight_config::load(&args.config)?;

	init_tracing(&config);
	tracing::info!(title = %args.title, "Resolving game title.");

	let service = ResolverService::new(config);

	match service.resolve_game_metadata(&args.title).await {
		Some(metadata) => println!("{}", serde_json::to_string_pretty(&metadata)?),
		None => println!("No catalog match found."),
	}

	Ok(())
}

fn init_tracing(config: &gamenight_config::Config) {
	let filter = EnvFilter::try_new(&config.service.log_level)
		.unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
