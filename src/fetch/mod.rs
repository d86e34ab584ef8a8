// src/fetch/mod.rs
// =============================================================================
// This module retrieves raw page markup from the origin server.
//
// The crawl engine only talks to the Fetcher trait, so tests can swap the
// network for an in-memory set of pages.
//
// Submodules:
// - http: the real fetcher, built on reqwest
// =============================================================================

mod http;

use async_trait::async_trait;

use crate::error::Result;

pub use http::HttpFetcher;

/// Retrieves the markup of one page, given its identifier (e.g. "/wiki/Rust").
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, page: &str) -> Result<String>;
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why #[async_trait]?
//    - The engine is generic over "something that can fetch a page"
//    - async_trait rewrites `async fn` in the trait into a method returning a
//      boxed future, which works on every supported Rust version
//
// 2. Why Send + Sync?
//    - The fetcher is shared by reference across .await points inside the
//      tokio runtime, so it must be safe to move and share between threads
// -----------------------------------------------------------------------------
