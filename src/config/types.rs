//! Configuration types and CLI options.
//!
//! `Config` is what the library consumes; `Cli` is the command-line surface
//! of the binary and maps onto a `Config` plus a URL source.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::source::UrlSource;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the binary prints the finished report.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Success rate followed by one line per product URL
    Text,
    /// The report as pretty-printed JSON
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use product_crawl_check::Config;
///
/// let config = Config {
///     max_concurrency: 4,
///     include_trace: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Maximum number of pages fetched concurrently
    pub max_concurrency: usize,

    /// Per-request timeout in seconds; 0 is treated as 1
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Attach the extracted signal flags to every outcome
    pub include_trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            include_trace: false,
        }
    }
}

/// Command-line options for the `product_crawl_check` binary.
///
/// URLs come from exactly one place: positional arguments, `--urls <file>`
/// (`-` for stdin), or a shop domain plus a file of product handles. With no
/// source given, URLs are read from stdin.
#[derive(Debug, Parser)]
#[command(
    name = "product_crawl_check",
    version,
    about = "Checks product pages for Open Graph and JSON-LD Product metadata"
)]
pub struct Cli {
    /// Product page URLs to check
    #[arg(conflicts_with_all = ["urls_file", "shop"])]
    pub urls: Vec<String>,

    /// File with one URL per line (`-` for stdin)
    #[arg(long = "urls", value_name = "FILE", conflicts_with = "shop")]
    pub urls_file: Option<PathBuf>,

    /// Storefront domain used to build `https://<shop>/products/<handle>` URLs
    #[arg(long, requires = "handles")]
    pub shop: Option<String>,

    /// File with one product handle per line (`-` for stdin)
    #[arg(long, value_name = "FILE", requires = "shop")]
    pub handles: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain or json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Maximum concurrent page fetches
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds (at least 1)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Include the extracted signal flags for each URL in the report
    #[arg(long)]
    pub trace: bool,

    /// Report format printed to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the JSON report to this file
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Builds the library configuration from the parsed options.
    pub fn config(&self) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            max_concurrency: self.max_concurrency,
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            include_trace: self.trace,
        }
    }

    /// Resolves which URL source the options select.
    pub fn url_source(&self) -> UrlSource {
        if let (Some(shop), Some(handles)) = (&self.shop, &self.handles) {
            return UrlSource::ShopHandles {
                shop: shop.clone(),
                handles: handles.clone(),
            };
        }
        if let Some(path) = &self.urls_file {
            return UrlSource::File(path.clone());
        }
        if !self.urls.is_empty() {
            return UrlSource::List(self.urls.clone());
        }
        UrlSource::File(PathBuf::from("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_concurrency, 10);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(!config.include_trace);
    }

    #[test]
    fn test_cli_positional_urls() {
        let cli = Cli::try_parse_from([
            "product_crawl_check",
            "https://shop.example/products/a",
            "https://shop.example/products/b",
        ])
        .expect("Should parse positional URLs");
        match cli.url_source() {
            UrlSource::List(urls) => assert_eq!(urls.len(), 2),
            other => panic!("Expected list source, got {:?}", other),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_shop_and_handles() {
        let cli = Cli::try_parse_from([
            "product_crawl_check",
            "--shop",
            "shop.example",
            "--handles",
            "handles.txt",
            "--max-concurrency",
            "3",
            "--trace",
        ])
        .expect("Should parse shop source");
        match cli.url_source() {
            UrlSource::ShopHandles { shop, handles } => {
                assert_eq!(shop, "shop.example");
                assert_eq!(handles, PathBuf::from("handles.txt"));
            }
            other => panic!("Expected shop source, got {:?}", other),
        }
        let config = cli.config();
        assert_eq!(config.max_concurrency, 3);
        assert!(config.include_trace);
    }

    #[test]
    fn test_cli_shop_requires_handles() {
        let result = Cli::try_parse_from(["product_crawl_check", "--shop", "shop.example"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_zero_timeout() {
        let result =
            Cli::try_parse_from(["product_crawl_check", "--timeout-seconds", "0", "a.example"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["product_crawl_check", "--timeout-seconds", "1"])
            .expect("Should accept a one second timeout");
        assert_eq!(cli.config().timeout_seconds, 1);
    }

    #[test]
    fn test_cli_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["product_crawl_check"]).expect("Should parse");
        match cli.url_source() {
            UrlSource::File(path) => assert_eq!(path, PathBuf::from("-")),
            other => panic!("Expected stdin source, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_urls_file_with_json_output() {
        let cli = Cli::try_parse_from([
            "product_crawl_check",
            "--urls",
            "urls.txt",
            "--format",
            "json",
            "--output",
            "report.json",
        ])
        .expect("Should parse");
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.output, Some(PathBuf::from("report.json")));
        match cli.url_source() {
            UrlSource::File(path) => assert_eq!(path, PathBuf::from("urls.txt")),
            other => panic!("Expected file source, got {:?}", other),
        }
    }
}
