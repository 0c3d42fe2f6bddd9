use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = gamenight_resolver::Args::parse();

	gamenight_resolver::run(args).await
}
