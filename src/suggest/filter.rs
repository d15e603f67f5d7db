//! Candidate flattening and query filtering
//!
//! The host's tag index hands back full hierarchical names
//! (`project/alpha`). Suggestions only ever show the leaf segment, and
//! filtering is plain case-insensitive containment with no scoring, so the
//! index's own ordering survives into the popup.

/// Final segment of a hierarchical tag name. A leading `#` is not part of
/// the name.
pub fn leaf_name(tag: &str) -> &str {
    let tag = tag.strip_prefix('#').unwrap_or(tag);
    tag.rsplit('/').next().unwrap_or(tag)
}

/// Map tags to leaf names, keeping the index's order. The index hands out
/// unique hierarchical names; distinct tags sharing a leaf therefore show
/// up as indistinguishable duplicates here. Accepted simplification.
pub fn flatten_candidates<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| leaf_name(tag.as_ref()).to_string())
        .filter(|leaf| !leaf.is_empty())
        .collect()
}

/// Candidates whose text contains `query` case-insensitively, substring
/// match anywhere, original relative order preserved.
pub fn filter_suggestions(query: &str, candidates: &[String]) -> Vec<String> {
    let needle = query.to_lowercase();
    candidates
        .iter()
        .filter(|c| c.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
