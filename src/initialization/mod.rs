//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources a crawl
//! needs:
//! - Logger
//! - HTTP client
//! - Concurrency semaphore

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// Each crawl task holds one permit for the duration of its fetch and
/// validation, so `count` is the maximum number of pages in flight.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
