//! Configuration constants.
//!
//! This module defines the constants used throughout the crawler: defaults
//! for the configurable knobs, size limits, and the fixed names the page
//! contract checks for.

/// Default maximum number of pages fetched at the same time (semaphore limit)
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;
/// Default per-request timeout in seconds, enforced by the HTTP client
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum URL length (2048 characters) accepted from a URL source.
/// This matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum HTML preview length in characters (500 chars)
/// Used when logging a failed page's body at debug level
pub const MAX_HTML_PREVIEW_CHARS: usize = 500;

// Open Graph properties every product page must carry
/// Property whose content must be [`OG_TYPE_PRODUCT`]
pub const OG_TYPE_PROPERTY: &str = "og:type";
/// Product title property
pub const OG_TITLE_PROPERTY: &str = "og:title";
/// Product image property
pub const OG_IMAGE_PROPERTY: &str = "og:image";
/// Price amount property (`og:price:currency` alone does not count)
pub const OG_PRICE_AMOUNT_PROPERTY: &str = "og:price:amount";
/// Required `og:type` content value
pub const OG_TYPE_PRODUCT: &str = "product";

// JSON-LD
/// `@type` value identifying a commerce product document
pub const PRODUCT_SCHEMA_TYPE: &str = "Product";
/// Key naming a JSON-LD node's type
pub const JSON_LD_TYPE_KEY: &str = "@type";
/// Key holding a JSON-LD node list
pub const JSON_LD_GRAPH_KEY: &str = "@graph";

/// Path segment under which storefronts serve product pages
pub const PRODUCT_PATH_SEGMENT: &str = "products";
