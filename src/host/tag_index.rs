//! Tag index implementations
//!
//! The engine only sees the `TagIndex` trait: the full set of hierarchical
//! tag names the host currently knows about. `StaticTags` backs the tests
//! and the `--tags` flag; `VaultIndex` scans a directory of markdown notes
//! the way a note application's metadata cache would.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use memchr::memchr_iter;

use crate::config::TagsConfig;
use crate::error::TagmatterError;

/// Source of the hierarchical tag names currently known to the host.
pub trait TagIndex {
    /// Every known tag name (e.g. `project/alpha`), stable order, no
    /// leading `#`, deduplicated.
    fn tags(&self) -> Vec<String>;
}

/// A fixed tag list, one name per entry.
#[derive(Debug, Clone, Default)]
pub struct StaticTags {
    tags: Vec<String>,
}

impl StaticTags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let tags = tags
            .into_iter()
            .map(Into::into)
            .map(|t| t.trim().trim_start_matches('#').to_string())
            .filter(|t| !t.is_empty() && seen.insert(t.clone()))
            .collect();
        Self { tags }
    }

    /// One tag per line, `#` prefixes and blank lines tolerated.
    pub fn from_file(path: &Path) -> Result<Self, TagmatterError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::new(text.lines()))
    }
}

impl TagIndex for StaticTags {
    fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }
}

/// Tag index built by scanning every note under a vault directory. Collects
/// `tags:` entries from frontmatter (inline and block form) plus inline
/// `#tag` references from note bodies, hierarchical names intact,
/// first-seen order.
#[derive(Debug, Clone, Default)]
pub struct VaultIndex {
    tags: Vec<String>,
}

impl VaultIndex {
    pub fn scan(root: &Path, config: &TagsConfig) -> Result<Self, TagmatterError> {
        if !root.is_dir() {
            return Err(TagmatterError::VaultNotFound(root.to_path_buf()));
        }
        let mut index = Self::default();
        let mut seen = HashSet::new();
        index.scan_dir(root, config, &mut seen)?;
        debug!("vault scan of {} found {} tags", root.display(), index.tags.len());
        Ok(index)
    }

    fn scan_dir(
        &mut self,
        dir: &Path,
        config: &TagsConfig,
        seen: &mut HashSet<String>,
    ) -> Result<(), TagmatterError> {
        let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();
            let name = entry.file_name();
            if name.to_string_lossy().starts_with('.') {
                continue;
            }
            if path.is_dir() {
                self.scan_dir(&path, config, seen)?;
            } else if config.is_note_file(&path) {
                let text = fs::read_to_string(&path)?;
                self.collect_note(&text, config, seen);
            }
        }
        Ok(())
    }

    fn collect_note(&mut self, text: &str, config: &TagsConfig, seen: &mut HashSet<String>) {
        let (frontmatter, body) = split_frontmatter(text);
        if let Some(frontmatter) = frontmatter {
            for tag in frontmatter_tags(frontmatter) {
                self.record(tag, seen);
            }
        }
        if config.inline_tags {
            for tag in inline_tags(body) {
                self.record(tag, seen);
            }
        }
    }

    fn record(&mut self, tag: String, seen: &mut HashSet<String>) {
        if !tag.is_empty() && seen.insert(tag.clone()) {
            self.tags.push(tag);
        }
    }
}

impl TagIndex for VaultIndex {
    fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }
}

/// Split a note into its frontmatter block (without the `---` fences) and
/// the remaining body.
fn split_frontmatter(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = text.strip_prefix("---\n") else {
        return (None, text);
    };
    for (offset, line) in rest
        .lines()
        .scan(0usize, |pos, line| {
            let start = *pos;
            *pos += line.len() + 1;
            Some((start, line))
        })
    {
        if line == "---" {
            let body_start = (offset + line.len() + 1).min(rest.len());
            return (Some(&rest[..offset]), &rest[body_start..]);
        }
    }
    (None, text)
}

/// Pull tag names out of a frontmatter block: `tags: a, b` inline lists and
/// `- a` items under a `tags:` header.
fn frontmatter_tags(frontmatter: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut in_tag_list = false;

    for line in frontmatter.lines() {
        let lower = line.to_lowercase();
        if lower.starts_with("tags:") || lower.starts_with("tag:") {
            let after_key = &line[line.find(':').map(|i| i + 1).unwrap_or(0)..];
            for item in after_key.split(',') {
                let item = item.trim().trim_start_matches('#');
                if !item.is_empty() {
                    tags.push(item.to_string());
                }
            }
            in_tag_list = true;
        } else if in_tag_list && line.trim_start().starts_with("- ") {
            let item = line.trim_start()[2..].trim().trim_start_matches('#');
            if !item.is_empty() {
                tags.push(item.to_string());
            }
        } else if !line.trim().is_empty() {
            in_tag_list = false;
        }
    }
    tags
}

fn is_tag_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '/')
}

/// Inline `#tag` references in a note body. A `#` only opens a tag at the
/// start of a line or after whitespace, and needs at least one tag
/// character after it.
fn inline_tags(body: &str) -> Vec<String> {
    let bytes = body.as_bytes();
    let mut tags = Vec::new();

    for hash in memchr_iter(b'#', bytes) {
        if hash > 0 {
            // Not a char boundary check issue: '#' is ASCII, but the
            // preceding character may be multi-byte.
            let before = body[..hash].chars().next_back();
            if !before.is_none_or(char::is_whitespace) {
                continue;
            }
        }
        let rest = &body[hash + 1..];
        let end = rest
            .char_indices()
            .find(|(_, c)| !is_tag_char(*c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if end > 0 {
            let candidate = &rest[..end];
            // Headings: "# Title" never reaches here (space fails the tag
            // charset), but "#123" style issue refs do; require at least
            // one non-digit so those stay out.
            if candidate.chars().any(|c| !c.is_ascii_digit()) {
                tags.push(candidate.to_string());
            }
        }
    }
    tags
}

#[cfg(test)]
#[path = "tag_index_tests.rs"]
mod tag_index_tests;
