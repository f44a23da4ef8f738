//! Where the crawl's URL list comes from.
//!
//! URLs can be given directly, read one per line from a file (or stdin), or
//! built from a storefront host plus a file of product handles.

mod normalize;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::PRODUCT_PATH_SEGMENT;

pub use normalize::validate_and_normalize_url;

/// Input for a crawl.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlSource {
    /// URLs given directly.
    List(Vec<String>),
    /// A file with one URL per line; `-` reads stdin.
    File(PathBuf),
    /// A storefront host plus a file with one product handle per line.
    ShopHandles {
        /// Storefront host, e.g. `shop.example`
        shop: String,
        /// File of handles; `-` reads stdin
        handles: PathBuf,
    },
}

impl UrlSource {
    /// Resolves the source to the list of URLs to crawl.
    ///
    /// Invalid URLs are logged and skipped. Input order is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or the shop host is invalid.
    pub async fn load(&self) -> Result<Vec<String>> {
        let urls = match self {
            UrlSource::List(urls) => normalize_all(urls.iter().map(String::as_str)),
            UrlSource::File(path) => {
                let lines = read_url_lines(path).await?;
                normalize_all(lines.iter().map(String::as_str))
            }
            UrlSource::ShopHandles { shop, handles } => {
                let handles = read_url_lines(handles).await?;
                product_urls(shop, &handles)?
            }
        };
        info!("Loaded {} URLs", urls.len());
        Ok(urls)
    }
}

fn normalize_all<'a>(urls: impl Iterator<Item = &'a str>) -> Vec<String> {
    urls.filter_map(validate_and_normalize_url).collect()
}

/// Reads non-empty, non-comment lines from `path`, or from stdin when the
/// path is `-`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub async fn read_url_lines(path: &Path) -> Result<Vec<String>> {
    if path == Path::new("-") {
        info!("Reading URLs from stdin");
        return collect_lines(BufReader::new(tokio::io::stdin())).await;
    }

    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    collect_lines(BufReader::new(file))
        .await
        .with_context(|| format!("Failed to read input file {}", path.display()))
}

async fn collect_lines<R: AsyncBufRead + Unpin>(reader: R) -> Result<Vec<String>> {
    let mut lines = reader.lines();
    let mut out = Vec::new();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        out.push(line.to_string());
    }
    Ok(out)
}

/// Builds `https://{shop}/products/{handle}` for every handle.
///
/// `shop` may carry a scheme and trailing slash; both are dropped. Handles
/// are percent-encoded as a single path segment. Blank handles are skipped.
///
/// # Errors
///
/// Returns an error if `shop` is not a valid host.
pub fn product_urls<S: AsRef<str>>(shop: &str, handles: &[S]) -> Result<Vec<String>> {
    let host = shop
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    let base = url::Url::parse(&format!("https://{host}/"))
        .with_context(|| format!("Invalid shop host: {shop}"))?;
    if !base.host_str().is_some_and(|h| !h.is_empty()) || base.path() != "/" {
        anyhow::bail!("Invalid shop host: {shop}");
    }

    let mut urls = Vec::with_capacity(handles.len());
    for handle in handles {
        let handle = handle.as_ref().trim();
        if handle.is_empty() {
            continue;
        }
        let mut url = base.clone();
        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.clear().push(PRODUCT_PATH_SEGMENT).push(handle);
            }
            Err(_) => {
                warn!("Skipping handle {handle}: shop URL cannot hold a path");
                continue;
            }
        }
        urls.push(url.to_string());
    }
    Ok(urls)
}
