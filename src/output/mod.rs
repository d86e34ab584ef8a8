// src/output/mod.rs
// =============================================================================
// The crawl's output artifact: a plain-text edge list.
// =============================================================================

mod edge_list;

pub use edge_list::{load_edge_list, save_edge_list};
