use std::path::PathBuf;
use std::process;

use chrono::Utc;
use clap::Parser;
use digest_core::{Credentials, DigestConfig, Result};
use digest_feeds::FeedCollector;
use digest_inference::{create_model, InsightFetcher};
use digest_site::Publisher;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory the dated digest pages and the archive index are written to
    #[arg(long, default_value = "marketing-digest")]
    digest_dir: PathBuf,
    /// Top-level page carrying the digest marker block
    #[arg(long, default_value = "index.html")]
    main_index: PathBuf,
    /// Recency window for feed entries, in days
    #[arg(long, default_value_t = 7)]
    days: i64,
    #[arg(
        long,
        default_value = "claude",
        help = "Narrative model to use. Available models: claude (default), dummy"
    )]
    model: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the full pipeline: collect feeds, fetch insights, generate, publish
    Generate,
    /// Rebuild the archive index and the main-index block from the files on disk
    Rebuild,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = DigestConfig {
        recency_days: cli.days,
        digest_dir: cli.digest_dir,
        main_index: cli.main_index,
        ..DigestConfig::default()
    };

    let outcome = match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => generate(&config, &cli.model).await,
        Commands::Rebuild => rebuild(&config),
    };

    if let Err(e) = outcome {
        error!("💥 Digest run failed: {}", e);
        process::exit(1);
    }
}

async fn generate(config: &DigestConfig, model_name: &str) -> Result<()> {
    let today = Utc::now().date_naive();
    info!("📅 Generating digest for {}", today);

    let credentials = Credentials::from_env();

    // Phase 1: feeds. Per-source failures are absorbed by the collector.
    let collector = FeedCollector::new(config)?;
    let articles = collector.collect().await;

    // Phase 2: insights. Never fatal.
    let fetcher = InsightFetcher::new(
        credentials.perplexity_api_key.clone(),
        config.insight_timeout,
    )?;
    let insights = match fetcher.fetch().await {
        Ok(text) => {
            info!("🔎 Insights fetched");
            text
        }
        Err(e) => {
            warn!(error = %e, "Insights unavailable, continuing without them");
            String::new()
        }
    };

    // Phase 3: generation. A missing key or a failed call aborts the run
    // before anything is written.
    let model = create_model(
        model_name,
        credentials.anthropic_api_key.clone(),
        config.article_cap,
    )?;
    info!("🧠 Narrative model ready ({})", model.name());
    let body = model.generate(&articles, &insights).await?;

    // Phase 4: publish.
    let publisher = Publisher::new(config);
    publisher.write_digest_page(today, &body)?;
    let entries = publisher.rebuild_archive()?;
    publisher.patch_main_index(&entries)?;

    info!("✅ Digest {} published ({} in archive)", today, entries.len());
    Ok(())
}

fn rebuild(config: &DigestConfig) -> Result<()> {
    let publisher = Publisher::new(config);
    let entries = publisher.rebuild_archive()?;
    publisher.patch_main_index(&entries)?;
    info!("✅ Archive rebuilt ({} digests)", entries.len());
    Ok(())
}
