// src/extract/mod.rs
// =============================================================================
// Link extraction from fetched pages.
//
// Submodules:
// - wiki: finds same-origin "/wiki/..." article links in raw markup
// =============================================================================

mod wiki;

pub use wiki::extract_links;
