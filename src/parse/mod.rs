//! HTML parsing and signal extraction.
//!
//! This module extracts the metadata a product page must expose:
//! - Open Graph meta tags (`og:type`, `og:title`, `og:image`, `og:price:amount`)
//! - JSON-LD structured data (`application/ld+json`) typed `Product`
//!
//! Open Graph tags are read with CSS selectors via the `scraper` crate; the
//! JSON-LD block is located with a regex over the raw body.

mod open_graph;
mod signals;
mod structured;

// Re-export public API
pub use open_graph::{extract_open_graph, OpenGraphTags};
pub use signals::{extract_signals, StructuredSignals};
pub use structured::{first_json_ld_block, is_product_document, parse_json_ld};
