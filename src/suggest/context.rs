//! Trigger context detection
//!
//! Decides whether the cursor sits in a tag-value position inside a
//! frontmatter block, and if so which syntactic form is in play: the inline
//! `tags: a, b` form or the YAML block list (`tags:` followed by `- item`
//! lines). Two paths can establish a context: a direct walk over the cursor
//! line and its predecessors, and a fallback scan of everything from the
//! document start to the cursor.

use log::debug;

use crate::host::document::{Document, Position, byte_at};

/// Which tag-list syntax the trigger landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// `tags: a, b, c` on a single line.
    Inline,
    /// One `- value` per line under a `tags:` header.
    Block,
}

/// Everything detection learned, threaded by value into selection so no
/// state hides on the component between the two phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMatch {
    /// Start of the partially typed token.
    pub start: Position,
    /// The cursor at detection time.
    pub end: Position,
    /// The partial token text, original case preserved.
    pub query: String,
    pub mode: ListMode,
    /// Leading whitespace before the `-` of the current list item. Empty in
    /// inline mode.
    pub indent: String,
}

struct LineContext {
    mode: ListMode,
    indent: String,
}

/// Keyword detection is case-insensitive throughout; only the extracted
/// query keeps its original case.
fn is_tag_key_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.starts_with("tags:") || lower.starts_with("tag:")
}

/// Direct path: classify the cursor line itself, walking upward through a
/// block list to find its header. The walk is unbounded; frontmatter blocks
/// are expected to be a handful of lines.
fn check_lines(cursor_line: usize, doc: &dyn Document) -> Option<LineContext> {
    let line = doc.line(cursor_line)?;

    if is_tag_key_line(line) {
        return Some(LineContext {
            mode: ListMode::Inline,
            indent: String::new(),
        });
    }

    if line.trim_start().starts_with("- ") {
        // Everything before the first dash is the indent to reproduce when
        // the selection appends the next list item.
        let indent = match line.find('-') {
            Some(dash) => line[..dash].to_string(),
            None => String::new(),
        };
        let mut above = cursor_line;
        loop {
            if above == 0 {
                return None;
            }
            above -= 1;
            let contents = doc.line(above)?;
            if contents.trim_start().starts_with("- ") {
                continue;
            }
            if is_tag_key_line(contents) {
                return Some(LineContext {
                    mode: ListMode::Block,
                    indent,
                });
            }
            return None;
        }
    }

    None
}

/// Where the scan stands relative to the frontmatter delimiters seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RangeState {
    #[default]
    BeforeOpen,
    InFrontmatter,
    PastClose,
}

impl RangeState {
    fn advance(self) -> Self {
        match self {
            RangeState::BeforeOpen => RangeState::InFrontmatter,
            // A second delimiter makes the boundary ambiguous; PastClose is
            // terminal and rejects the range path.
            RangeState::InFrontmatter | RangeState::PastClose => RangeState::PastClose,
        }
    }
}

/// A bare key-declaration line: word characters, an optional colon, nothing
/// but whitespace after. Returns the key and whether the colon was present.
fn key_declaration(line: &str) -> Option<(&str, bool)> {
    let word_end = line
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    if word_end == 0 {
        return None;
    }
    let mut rest = &line[word_end..];
    let has_colon = rest.starts_with(':');
    if has_colon {
        rest = &rest[1..];
    }
    if !rest.trim().is_empty() {
        return None;
    }
    Some((&line[..word_end], has_colon))
}

/// Fallback path: scan every line from the document start to the cursor.
/// Catches cursors on blank or otherwise unclassified lines inside a
/// frontmatter tags block. Requires exactly one `---` delimiter in the
/// range, at least one tag-key line, and `tags:` as the most recent bare
/// key declaration.
fn scan_range(cursor: Position, doc: &dyn Document) -> bool {
    let mut state = RangeState::default();
    let mut saw_tag_key = false;
    let mut on_tags_key = false;

    let last = cursor.line.min(doc.line_count().saturating_sub(1));
    for index in 0..=last {
        let Some(full) = doc.line(index) else { break };
        // The cursor line only participates up to the cursor column, and a
        // truncated line can never be a delimiter.
        let (text, whole_line) = if index == cursor.line {
            (&full[..byte_at(full, cursor.ch)], false)
        } else {
            (full, true)
        };

        if whole_line && text == "---" {
            state = state.advance();
            continue;
        }
        if is_tag_key_line(text) {
            saw_tag_key = true;
        }
        if let Some((key, has_colon)) = key_declaration(text) {
            on_tags_key = has_colon && key.eq_ignore_ascii_case("tags");
        }
    }

    state == RangeState::InFrontmatter && saw_tag_key && on_tags_key
}

/// Detect whether `cursor` is a tag completion point in `doc`.
///
/// Returns `None` when the cursor is outside any tag context or when no
/// partial token has been typed yet. Detection is pure: repeated calls on an
/// unchanged document yield identical matches.
pub fn detect_trigger(cursor: Position, doc: &dyn Document) -> Option<TriggerMatch> {
    let context = check_lines(cursor.line, doc).or_else(|| {
        scan_range(cursor, doc).then(|| LineContext {
            mode: ListMode::Inline,
            indent: String::new(),
        })
    })?;

    let line = doc.line(cursor.line)?;
    let before_cursor = &line[..byte_at(line, cursor.ch)];
    let token_start = before_cursor
        .char_indices()
        .rev()
        .take_while(|(_, c)| !c.is_whitespace())
        .last()
        .map(|(i, _)| i);
    let Some(token_start) = token_start else {
        // Nothing typed yet after the last separator.
        return None;
    };
    let token = &before_cursor[token_start..];

    let end_ch = before_cursor.chars().count();
    let start_ch = end_ch - token.chars().count();
    debug!(
        "trigger at {}:{} mode={:?} query={token:?}",
        cursor.line, end_ch, context.mode
    );

    Some(TriggerMatch {
        start: Position::new(cursor.line, start_ch),
        end: Position::new(cursor.line, end_ch),
        query: token.to_string(),
        mode: context.mode,
        indent: context.indent,
    })
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod context_tests;
