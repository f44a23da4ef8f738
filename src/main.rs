//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `product_crawl_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Rendering the report as text or JSON, optionally saving the JSON to a file
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use product_crawl_check::initialization::init_logger_with;
use product_crawl_check::{run_crawl, Cli, CrawlReport, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.config();
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let source = cli.url_source();
    match run_crawl(&config, &source).await {
        Ok(report) => {
            println!("{}", render(&report, &cli.format)?);
            if let Some(path) = &cli.output {
                let json = render(&report, &OutputFormat::Json)?;
                tokio::fs::write(path, json)
                    .await
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                log::info!("Report saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("product_crawl_check error: {:#}", e);
            process::exit(1);
        }
    }
}

fn render(report: &CrawlReport, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => report
            .to_json_pretty()
            .context("Failed to serialize report"),
    }
}
