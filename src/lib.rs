//! tagmatter: frontmatter tag autocomplete for markdown notes
//!
//! The `suggest` module is the engine: trigger detection, candidate
//! filtering, and selection insertion. The `host` module defines the
//! traits the engine is driven through, plus concrete document and tag
//! index implementations. `app` and `widgets` are the interactive TUI
//! shell built on top.

pub mod app;
pub mod config;
pub mod error;
pub mod host;
pub mod suggest;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;
