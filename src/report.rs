//! Crawl outcomes and the aggregate report.
//!
//! `CrawlReport` is the only value the crawler hands back. Its JSON form is
//! `{ "successRate": f64, "results": [{ "url", "success", "errorMessage"? }] }`.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::error_handling::WarningType;
use crate::parse::StructuredSignals;

/// Signal flags observed for one page, attached to an outcome on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalTrace {
    /// HTTP status code of the response
    pub status: u16,
    /// `og:type` is `product`
    pub has_og_type: bool,
    /// `og:title` is present
    pub has_og_title: bool,
    /// `og:image` is present
    pub has_og_image: bool,
    /// `og:price:amount` is present
    pub has_og_price: bool,
    /// A JSON-LD block is present
    pub has_structured_data_block: bool,
    /// The first JSON-LD block describes a `Product`
    pub has_product_schema: bool,
    /// Parse error of the first JSON-LD block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data_error: Option<String>,
    /// Human-readable names of the failed requirements
    pub missing: Vec<String>,
}

impl SignalTrace {
    /// Captures the flags of `signals` together with the failed requirements.
    pub fn new(status: u16, signals: &StructuredSignals, missing: &[WarningType]) -> Self {
        Self {
            status,
            has_og_type: signals.has_og_type,
            has_og_title: signals.has_og_title,
            has_og_image: signals.has_og_image,
            has_og_price: signals.has_og_price,
            has_structured_data_block: signals.has_structured_data_block,
            has_product_schema: signals.has_product_schema,
            structured_data_error: signals.parse_error.clone(),
            missing: missing.iter().map(|w| w.as_str().to_string()).collect(),
        }
    }
}

/// Result of checking one URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    /// The URL as given to the crawler
    pub url: String,
    /// True when the page was fetched and passed validation
    pub success: bool,
    /// Set only when the page could not be fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Signal flags, present only when tracing was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<SignalTrace>,
}

impl ValidationOutcome {
    /// Outcome for a page that was fetched and validated.
    pub fn validated(url: impl Into<String>, success: bool) -> Self {
        Self {
            url: url.into(),
            success,
            error_message: None,
            trace: None,
        }
    }

    /// Outcome for a URL whose fetch failed.
    pub fn failed(url: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            success: false,
            error_message: Some(error_message.into()),
            trace: None,
        }
    }

    /// Attaches a signal trace.
    pub fn with_trace(mut self, trace: SignalTrace) -> Self {
        self.trace = Some(trace);
        self
    }
}

/// Aggregate result of one crawl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlReport {
    /// Percentage of successful outcomes, in `[0, 100]`
    pub success_rate: f64,
    /// One outcome per input URL, in input order
    pub results: Vec<ValidationOutcome>,
}

impl CrawlReport {
    /// Reduces outcomes into a report. An empty list has a rate of 0.
    pub fn from_outcomes(results: Vec<ValidationOutcome>) -> Self {
        Self {
            success_rate: success_rate(&results),
            results,
        }
    }

    /// The report returned when no URLs could be obtained.
    pub fn empty() -> Self {
        Self::from_outcomes(Vec::new())
    }

    /// Number of outcomes.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of pages that passed.
    pub fn successful(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    /// Number of pages that failed or could not be fetched.
    pub fn failed(&self) -> usize {
        self.total() - self.successful()
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Renders the report as plain text, one line per URL.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:.2}% of products crawled successfully",
            self.success_rate
        );
        for outcome in &self.results {
            let badge = if outcome.success { "Success" } else { "Failed" };
            let _ = writeln!(out, "{badge:<8} {}", outcome.url);
            if let Some(error) = &outcome.error_message {
                let _ = writeln!(out, "         Error: {error}");
            }
        }
        out
    }
}

/// `100 * successes / total`, or 0 for no outcomes.
pub fn success_rate(results: &[ValidationOutcome]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let successes = results.iter().filter(|r| r.success).count();
    100.0 * successes as f64 / results.len() as f64
}
