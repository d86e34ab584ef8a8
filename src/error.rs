// src/error.rs
// =============================================================================
// Error types for the crawler.
//
// The crawl engine returns a typed error (CrawlError) so callers can tell a
// failed page fetch apart from a bad address or a failed write. The binary
// wraps these in anyhow at the top level.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert io::Error / reqwest::Error for us
// =============================================================================

use thiserror::Error;

/// Everything that can go wrong while crawling or writing the edge list.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The request for a page could not complete, the server answered with a
    /// non-success status, or the body could not be read as text.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Origin + page identifier did not form a usable address.
    #[error("malformed address '{address}': {reason}")]
    MalformedAddress { address: String, reason: String },

    /// The HTTP client could not be built (bad user agent, TLS backend, ...).
    #[error("could not build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An edge-list file being read back is not in the expected format.
    #[error("malformed edge list at line {line}: {reason}")]
    EdgeList { line: usize, reason: String },
}

impl CrawlError {
    /// True for failures tied to a single page (fetch or address), which the
    /// skip policy is allowed to step over.
    pub fn is_page_failure(&self) -> bool {
        matches!(
            self,
            CrawlError::Fetch { .. } | CrawlError::MalformedAddress { .. }
        )
    }
}

pub type Result<T, E = CrawlError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_failures() {
        let fetch = CrawlError::Fetch {
            url: "https://en.wikipedia.org/wiki/Rust".to_string(),
            reason: "HTTP 404 Not Found".to_string(),
        };
        let address = CrawlError::MalformedAddress {
            address: "nope/wiki/Rust".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        let io = CrawlError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));

        assert!(fetch.is_page_failure());
        assert!(address.is_page_failure());
        assert!(!io.is_page_failure());
    }

    #[test]
    fn test_display_includes_url() {
        let err = CrawlError::Fetch {
            url: "https://en.wikipedia.org/wiki/Rust".to_string(),
            reason: "timed out".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch https://en.wikipedia.org/wiki/Rust: timed out"
        );
    }
}
