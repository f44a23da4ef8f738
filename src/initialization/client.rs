//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client used for page fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Per-request timeout from the config (also bounds the connect phase)
/// - reqwest's default redirect policy (up to 10 hops)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let timeout = request_timeout(config);
    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Per-request timeout, never shorter than one second.
fn request_timeout(config: &Config) -> Duration {
    Duration::from_secs(config.timeout_seconds.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        let client = init_client(&Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_request_timeout_zero_is_clamped() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert_eq!(request_timeout(&config), Duration::from_secs(1));
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_request_timeout_uses_config() {
        let config = Config {
            timeout_seconds: 7,
            ..Default::default()
        };
        assert_eq!(request_timeout(&config), Duration::from_secs(7));
    }

    #[test]
    fn test_init_client_custom_user_agent() {
        let config = Config {
            user_agent: "product_crawl_check-test/1.0".to_string(),
            timeout_seconds: 1,
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
