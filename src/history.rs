//! Command History
//!
//! Append-only list of submitted lines with a navigation cursor. The cursor
//! ranges over `0..=len`; `len` is the "past the end" slot that shows an
//! empty input line.

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and park the cursor past the end.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.reset_cursor();
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }

    /// Step towards older entries. Returns what the input line should show,
    /// or `None` when already at the oldest entry.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(|s| s.as_str())
    }

    /// Step towards newer entries. Reaching the end yields an empty line;
    /// `None` when already there.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries.get(self.cursor).map_or("", |s| s.as_str()))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
