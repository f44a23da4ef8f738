//! Error handling and processing statistics.
//!
//! This module provides:
//! - Typed errors for initialization, fetching and JSON-LD parsing
//! - Categorization of `reqwest` failures
//! - Thread-safe counters for fetch errors and validation failures
//!
//! Counters are split into:
//! - **Errors**: transport failures that produce a failed outcome with a message
//! - **Warnings**: missing signals on pages that were fetched

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, error_chain_message, fetch_error_from_reqwest};
pub use stats::{print_statistics, ProcessingStats};
pub use types::{ErrorType, FetchError, InitializationError, StructuredDataError, WarningType};
