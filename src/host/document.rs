//! Document access traits and the line-based note buffer
//!
//! Positions are (line, character) pairs, matching what terminal editors
//! report. Character offsets count `char`s, not bytes, so multi-byte tags
//! behave the same everywhere.

/// A cursor location inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// Read access to a document's lines.
pub trait Document {
    fn line_count(&self) -> usize;

    /// A single line without its trailing newline. `None` past the end.
    fn line(&self, index: usize) -> Option<&str>;
}

/// Write access. `text` may contain newlines, which split the line at the
/// insertion point.
pub trait DocumentMut: Document {
    fn replace_range(&mut self, start: Position, end: Position, text: &str);
}

/// Byte index of the `ch`-th character of `line`, clamped to the line end.
pub fn byte_at(line: &str, ch: usize) -> usize {
    line.char_indices()
        .nth(ch)
        .map(|(b, _)| b)
        .unwrap_or(line.len())
}

/// A plain `Vec<String>`-backed document. Used by the headless CLI, the
/// tests, and as the mutation target the TUI syncs its textarea with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBuffer {
    lines: Vec<String>,
}

impl NoteBuffer {
    pub fn new(text: &str) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len() - 1);
        let ch = pos.ch.min(self.lines[line].chars().count());
        Position { line, ch }
    }
}

impl Document for NoteBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

impl DocumentMut for NoteBuffer {
    fn replace_range(&mut self, start: Position, end: Position, text: &str) {
        let (start, end) = {
            let (a, b) = (self.clamp(start), self.clamp(end));
            if (b.line, b.ch) < (a.line, a.ch) { (b, a) } else { (a, b) }
        };

        let head = {
            let line = &self.lines[start.line];
            line[..byte_at(line, start.ch)].to_string()
        };
        let tail = {
            let line = &self.lines[end.line];
            line[byte_at(line, end.ch)..].to_string()
        };

        let mut replacement: Vec<String> = format!("{head}{text}{tail}")
            .split('\n')
            .map(str::to_string)
            .collect();
        self.lines
            .splice(start.line..=end.line, replacement.drain(..));
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod document_tests;
