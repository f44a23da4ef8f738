//! Fetch, extract and validate one URL.

use log::debug;

use crate::config::MAX_HTML_PREVIEW_CHARS;
use crate::error_handling::ProcessingStats;
use crate::fetch::PageFetcher;
use crate::parse::extract_signals;
use crate::report::{SignalTrace, ValidationOutcome};
use crate::utils::html_preview;
use crate::validate::{missing_signals, validate_page};

/// Runs the full pipeline for `url` and always produces an outcome.
///
/// A fetch failure becomes a failed outcome carrying the error message and
/// skips extraction entirely.
pub(crate) async fn check_url<F: PageFetcher>(
    fetcher: &F,
    url: &str,
    stats: &ProcessingStats,
    include_trace: bool,
) -> ValidationOutcome {
    let page = match fetcher.fetch(url).await {
        Ok(page) => page,
        Err(e) => {
            log::warn!("Failed to fetch {url}: {e}");
            stats.increment_error(e.kind);
            return ValidationOutcome::failed(url, e.cause);
        }
    };

    let signals = extract_signals(&page.body);
    let success = validate_page(&page, &signals);
    let missing = missing_signals(&page, &signals);

    debug!(
        "Signals for {url}: status={} og_type={} og_title={} og_image={} og_price={} json_ld={} product={}",
        page.status,
        signals.has_og_type,
        signals.has_og_title,
        signals.has_og_image,
        signals.has_og_price,
        signals.has_structured_data_block,
        signals.has_product_schema,
    );

    if let Some(parse_error) = &signals.parse_error {
        debug!("JSON-LD parse error at {url}: {parse_error}");
    }

    for warning in &missing {
        stats.increment_warning(*warning);
    }

    if !success {
        debug!(
            "Validation failed for {url}: {}",
            missing
                .iter()
                .map(|w| w.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        debug!(
            "Body preview for {url}: {}",
            html_preview(&page.body, MAX_HTML_PREVIEW_CHARS)
        );
    }

    let outcome = ValidationOutcome::validated(url, success);
    if include_trace {
        outcome.with_trace(SignalTrace::new(page.status, &signals, &missing))
    } else {
        outcome
    }
}
