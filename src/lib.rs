//! product_crawl_check library: concurrent product page validation
//!
//! This library fetches a list of product page URLs, extracts Open Graph tags
//! and the page's JSON-LD block, and decides for every page whether it carries
//! the signals a product listing needs. The result is a report with one
//! outcome per URL, in input order, plus the overall success rate.
//!
//! # Example
//!
//! ```no_run
//! use product_crawl_check::{run_crawl, Config, UrlSource};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     max_concurrency: 5,
//!     ..Default::default()
//! };
//! let source = UrlSource::List(vec![
//!     "https://shop.example/products/linen-shirt".to_string(),
//!     "https://shop.example/products/mug".to_string(),
//! ]);
//!
//! let report = run_crawl(&config, &source).await?;
//! println!("{:.2}% of products crawled successfully", report.success_rate);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
mod crawl;
pub mod error_handling;
mod fetch;
pub mod initialization;
pub mod parse;
mod report;
pub mod source;
mod utils;
pub mod validate;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel, OutputFormat};
pub use crawl::Crawler;
pub use error_handling::{FetchError, InitializationError};
pub use fetch::{HttpFetcher, PageFetcher, RawPage};
pub use report::{success_rate, CrawlReport, SignalTrace, ValidationOutcome};
pub use run::run_crawl;
pub use source::UrlSource;

mod run {
    use anyhow::{Context, Result};
    use log::warn;

    use crate::config::Config;
    use crate::crawl::Crawler;
    use crate::error_handling::print_statistics;
    use crate::report::CrawlReport;
    use crate::source::UrlSource;

    /// Loads the URLs from `source`, crawls them and returns the report.
    ///
    /// This is the main entry point for the library. If the source cannot be
    /// read the crawl does not start and an empty report (success rate 0) is
    /// returned instead of an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use product_crawl_check::{run_crawl, Config, UrlSource};
    /// use std::path::PathBuf;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let source = UrlSource::File(PathBuf::from("urls.txt"));
    /// let report = run_crawl(&Config::default(), &source).await?;
    /// println!("Checked {} pages", report.total());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_crawl(config: &Config, source: &UrlSource) -> Result<CrawlReport> {
        let crawler: Crawler =
            Crawler::from_config(config).context("Failed to initialize HTTP client")?;

        let urls = match source.load().await {
            Ok(urls) => urls,
            Err(e) => {
                warn!("Failed to load URLs: {e:#}");
                return Ok(CrawlReport::empty());
            }
        };

        let report = crawler.crawl(&urls).await;
        print_statistics(crawler.stats());

        Ok(report)
    }
}
