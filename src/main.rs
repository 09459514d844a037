//! listsift main entry point
//!
//! Command-line interface for the keyword-filtering listing scraper.

use clap::Parser;
use listsift::config::load_config;
use listsift::crawler::run_scan;
use listsift::fetch::HttpFetcher;
use listsift::output::{write_results, TsvSink};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// listsift: a keyword-filtering scraper for paginated listing sites
///
/// listsift walks the index pages of a document listing site, fetches
/// every discovered entry's detail page, keeps the entries whose content
/// matches a configured keyword, and writes the matches as a TSV table.
#[derive(Parser, Debug)]
#[command(name = "listsift")]
#[command(version)]
#[command(about = "Keyword-filtering scraper for paginated listing sites", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Write the result table to this path instead of the configured one
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Validate config and show what would be scanned without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.result_path));

    handle_scan(config, &output_path).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("listsift=info,warn"),
            1 => EnvFilter::new("listsift=debug,info"),
            2 => EnvFilter::new("listsift=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the scan plan
fn handle_dry_run(config: &listsift::Config) {
    println!("=== listsift Dry Run ===\n");

    println!("Scan:");
    println!("  Index template: {}", config.scan.index_url_template);
    println!("  Detail base: {}", config.scan.detail_url_base);
    println!(
        "  Items: {} at {} per page => {} pages",
        config.scan.total_item_count,
        config.scan.page_size,
        config.scan.page_count()
    );
    println!("  First page URL: {}", config.scan.index_url(1));

    if config.scan.keywords.is_empty() {
        println!("  Keywords: none (passthrough mode, every entry is kept)");
    } else {
        println!("  Keywords ({}):", config.scan.keywords.len());
        for keyword in &config.scan.keywords {
            println!("    - {}", keyword);
        }
        println!("  Summary limit: {} chars", config.scan.summary_limit);
    }

    println!("\nFetcher:");
    println!(
        "  Concurrent detail fetches: {}",
        config.fetcher.max_concurrent_details
    );
    println!("  Request timeout: {}s", config.fetcher.request_timeout_secs);
    let agents = if config.fetcher.user_agents.is_empty() {
        "built-in pool".to_string()
    } else {
        format!("{} from config", config.fetcher.user_agents.len())
    };
    println!("  User agents: {}", agents);

    println!("\nOutput:");
    println!("  Result table: {}", config.output.result_path);

    println!("\n✓ Configuration is valid");
}

/// Runs the scan and writes the result table
async fn handle_scan(
    config: listsift::Config,
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if config.scan.keywords.is_empty() {
        tracing::info!("No keywords configured, every discovered entry will be kept");
    } else {
        tracing::info!("Scanning for keywords: {:?}", config.scan.keywords);
    }

    let started = std::time::Instant::now();

    let fetcher = HttpFetcher::new(&config.fetcher)?;

    let results = match run_scan(&config, &fetcher).await {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("Scan failed: {}", e);
            return Err(e.into());
        }
    };

    let match_count = results.len();
    write_results(&TsvSink::new(), output_path, results)?;

    tracing::info!(
        "Done: {} matching rows written to {} in {:.1}s",
        match_count,
        output_path.display(),
        started.elapsed().as_secs_f64()
    );

    Ok(())
}
