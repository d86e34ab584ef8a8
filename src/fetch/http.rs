// src/fetch/http.rs
// =============================================================================
// HTTP implementation of the Fetcher trait.
//
// How it works:
// 1. Concatenate the origin ("https://en.wikipedia.org") and the page
//    identifier ("/wiki/Rust")
// 2. Parse the result with the url crate; reject it if it doesn't parse or if
//    it ends up pointing at a different host than the origin
// 3. GET it and return the body as text
//
// Every failure becomes a CrawlError; the engine's failure policy decides
// whether that ends the crawl.
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::Fetcher;
use crate::config::Config;
use crate::error::{CrawlError, Result};

/// Fetches pages from a single origin over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    origin: String,
    host: Option<String>,
}

impl HttpFetcher {
    // Creates a fetcher for the origin in `config`
    //
    // The client is built once and reused for every page (connection pooling).
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        let origin_url = Url::parse(&config.origin).map_err(|e| CrawlError::MalformedAddress {
            address: config.origin.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            origin: config.origin.clone(),
            host: origin_url.host_str().map(str::to_string),
        })
    }

    /// Builds the address for `page`: origin and identifier, concatenated as-is.
    pub fn address(&self, page: &str) -> Result<Url> {
        let address = format!("{}{}", self.origin, page);

        let url = Url::parse(&address).map_err(|e| CrawlError::MalformedAddress {
            address: address.clone(),
            reason: e.to_string(),
        })?;

        // e.g. "@evil.example/x" would turn the origin host into userinfo
        if url.host_str().map(str::to_string) != self.host {
            return Err(CrawlError::MalformedAddress {
                reason: format!(
                    "host {:?} does not match origin host {:?}",
                    url.host_str(),
                    self.host
                ),
                address,
            });
        }

        Ok(url)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, page: &str) -> Result<String> {
        let url = self.address(page)?;
        debug!(%url, "fetching page");

        let fetch_error = |reason: String| CrawlError::Fetch {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_error(format!("HTTP {}", response.status())));
        }

        response.text().await.map_err(|e| fetch_error(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher(origin: &str) -> HttpFetcher {
        let config = Config {
            origin: origin.to_string(),
            ..Config::default()
        };
        HttpFetcher::new(&config).unwrap()
    }

    #[test]
    fn test_address_is_origin_plus_page() {
        let url = fetcher("https://en.wikipedia.org")
            .address("/wiki/Rust_(programming_language)")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/wiki/Rust_(programming_language)"
        );
    }

    #[test]
    fn test_address_rejects_host_change() {
        let result = fetcher("https://en.wikipedia.org").address("@evil.example/wiki/X");
        assert!(matches!(result, Err(CrawlError::MalformedAddress { .. })));
    }

    #[test]
    fn test_address_rejects_port_garbage() {
        let result = fetcher("https://en.wikipedia.org").address(":notaport/wiki/X");
        assert!(matches!(result, Err(CrawlError::MalformedAddress { .. })));
    }

    #[test]
    fn test_invalid_origin() {
        let config = Config {
            origin: "not a url".to_string(),
            ..Config::default()
        };
        let result = HttpFetcher::new(&config);
        assert!(matches!(result, Err(CrawlError::MalformedAddress { .. })));
    }

    #[tokio::test]
    async fn test_fetch_malformed_address_fails_without_network() {
        let result = fetcher("https://en.wikipedia.org")
            .fetch("@evil.example/wiki/X")
            .await;
        assert!(matches!(result, Err(CrawlError::MalformedAddress { .. })));
    }
}
