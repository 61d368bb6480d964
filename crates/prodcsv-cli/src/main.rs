mod export;
mod pipeline;
mod render;

use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use prodcsv_core::Lang;
use prodcsv_scraper::CatalogClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "prodcsv")]
#[command(about = "Fetch product data and parse it into CSV.")]
struct Cli {
    /// Select the language for the product information
    #[arg(long, default_value_t = Lang::EsCr, value_parser = lang_parser())]
    lang: Lang,

    /// Destination CSV file (created or overwritten)
    #[arg(long, default_value = "output-product.csv", value_name = "FILE")]
    output: PathBuf,
}

/// Offers the locale tags as possible values and converts through
/// [`Lang`]'s `FromStr`.
fn lang_parser() -> impl TypedValueParser<Value = Lang> {
    PossibleValuesParser::new(Lang::ALL.map(Lang::as_key)).try_map(|tag| tag.parse::<Lang>())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = prodcsv_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let lang = cli.lang;
    tracing::debug!(?config, %lang, output = %cli.output.display(), "starting export");

    let client = CatalogClient::new(config.request_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))?;

    let rows = pipeline::run_export(&client, pipeline::CATALOG_URL, lang, &cli.output).await?;
    tracing::info!(rows, "export complete");

    println!("Data saved in {} in language: {lang}", cli.output.display());

    Ok(())
}
