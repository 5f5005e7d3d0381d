//! Renderers and exporters for classification rows.
//!
//! - [`terminal`]: colored summary box and table; respects `--verbose` / `--quiet`.
//! - [`export`]: JSON and CSV row exports, plus flat and per-category evidence dumps.

pub mod export;
pub mod terminal;
