//! Product page signal extraction.
//!
//! Turns a page body into the set of presence flags the page validator
//! checks. Extraction is pure: no I/O, and no input can make it fail.

use scraper::Html;
use serde_json::Value;

use crate::config::{
    OG_IMAGE_PROPERTY, OG_PRICE_AMOUNT_PROPERTY, OG_TITLE_PROPERTY, OG_TYPE_PRODUCT,
    OG_TYPE_PROPERTY,
};

use super::open_graph::extract_open_graph;
use super::structured::{first_json_ld_block, is_product_document, parse_json_ld};

/// Signals extracted from one product page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredSignals {
    /// `og:type` is present with content `product`
    pub has_og_type: bool,
    /// `og:title` is present
    pub has_og_title: bool,
    /// `og:image` is present
    pub has_og_image: bool,
    /// `og:price:amount` is present
    pub has_og_price: bool,
    /// At least one JSON-LD script block is present
    pub has_structured_data_block: bool,
    /// The first JSON-LD block parses and describes a `Product`
    pub has_product_schema: bool,
    /// The first JSON-LD block, when it parsed
    pub document: Option<Value>,
    /// Why the first JSON-LD block did not parse
    pub parse_error: Option<String>,
}

/// Extracts the product page signals from a page body.
pub fn extract_signals(body: &str) -> StructuredSignals {
    let document = Html::parse_document(body);
    let open_graph = extract_open_graph(&document);

    let mut signals = StructuredSignals {
        has_og_type: open_graph.has_value(OG_TYPE_PROPERTY, OG_TYPE_PRODUCT),
        has_og_title: open_graph.has(OG_TITLE_PROPERTY),
        has_og_image: open_graph.has(OG_IMAGE_PROPERTY),
        has_og_price: open_graph.has(OG_PRICE_AMOUNT_PROPERTY),
        ..Default::default()
    };

    if let Some(block) = first_json_ld_block(body) {
        signals.has_structured_data_block = true;
        match parse_json_ld(block) {
            Ok(parsed) => {
                signals.has_product_schema = is_product_document(&parsed);
                signals.document = Some(parsed);
            }
            Err(e) => {
                signals.parse_error = Some(e.to_string());
            }
        }
    }

    signals
}
