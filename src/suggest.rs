//! Frontmatter tag suggestion engine
//!
//! Detects when the cursor sits on a tag entry inside a document's
//! frontmatter, filters the host's known tags by the partial token being
//! typed, and writes the chosen tag back in the matching syntactic form.

pub mod context;
pub mod filter;
pub mod tag_suggest;

// Re-export public types
pub use context::{ListMode, TriggerMatch, detect_trigger};
pub use filter::{filter_suggestions, flatten_candidates, leaf_name};
pub use tag_suggest::TagSuggest;
