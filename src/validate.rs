//! Product page validation.
//!
//! A page passes only when it was fetched with a 2xx status and every
//! required signal is present. There is no partial credit.

use crate::error_handling::WarningType;
use crate::fetch::RawPage;
use crate::parse::StructuredSignals;

/// Returns true if the page satisfies the product metadata contract.
pub fn validate_page(page: &RawPage, signals: &StructuredSignals) -> bool {
    page.ok
        && signals.has_og_type
        && signals.has_og_title
        && signals.has_og_image
        && signals.has_og_price
        && signals.has_structured_data_block
        && signals.has_product_schema
}

/// Lists every requirement the page misses, in check order.
///
/// Empty exactly when `validate_page` returns true. A malformed JSON-LD
/// block is reported in addition to the missing Product schema.
pub fn missing_signals(page: &RawPage, signals: &StructuredSignals) -> Vec<WarningType> {
    let checks = [
        (page.ok, WarningType::NonSuccessStatus),
        (signals.has_og_type, WarningType::MissingOgType),
        (signals.has_og_title, WarningType::MissingOgTitle),
        (signals.has_og_image, WarningType::MissingOgImage),
        (signals.has_og_price, WarningType::MissingOgPrice),
        (
            signals.has_structured_data_block,
            WarningType::MissingStructuredData,
        ),
        (
            signals.has_product_schema,
            WarningType::MissingProductSchema,
        ),
    ];

    let mut missing: Vec<WarningType> = checks
        .into_iter()
        .filter(|(present, _)| !present)
        .map(|(_, warning)| warning)
        .collect();
    if signals.parse_error.is_some() {
        missing.push(WarningType::MalformedStructuredData);
    }
    missing
}
