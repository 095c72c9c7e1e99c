use catalog_crawler::plants::PlantShop;
use catalog_crawler::{run_crawler, Config, HttpFetcher, OutputFormat};
use clap::Parser;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

/// Crawl a paginated plant collection one request at a time and print the
/// title of every plant found.
#[derive(Parser, Debug)]
#[command(name = "catalog-crawler", version)]
struct Cli {
    /// Shop root, e.g. https://shop.example.com
    #[arg(long)]
    base_url: String,

    /// Collection name, as in /collections/<catalog>
    #[arg(long, default_value = "indoor-plants")]
    catalog: String,

    /// Pages 1 up to (but excluding) this number may be crawled
    #[arg(long, default_value_t = 10)]
    page_limit: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let cli = Cli::parse();
    let config = Config::new(&cli.base_url, cli.page_limit, &cli.catalog)?;

    let shop = PlantShop::new(&config);
    let fetcher = HttpFetcher::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run_crawler(&shop, &fetcher, &config, cli.format, &mut out).await?;

    Ok(())
}
