//! Rope-backed text storage addressed by char offsets.
//!
//! All offsets in this crate are char (Unicode scalar) offsets, never byte
//! offsets. The buffer clamps out-of-range offsets instead of panicking.

use ropey::Rope;
use std::ops::Range;

/// The text of a text box.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    rope: Rope,
    revision: u64,
}

impl TextBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chars.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Copy a char range out of the buffer. The range is clamped.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.len_chars();
        let end = range.end.min(len);
        let start = range.start.min(end);
        self.rope.slice(start..end).to_string()
    }

    /// Insert text at a char offset (clamped to the end).
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let at = char_idx.min(self.len_chars());
        self.rope.insert(at, text);
        self.bump_revision();
    }

    /// Remove a char range. Empty or out-of-range parts are ignored.
    pub fn remove(&mut self, range: Range<usize>) {
        let len = self.len_chars();
        let end = range.end.min(len);
        let start = range.start.min(end);
        if start == end {
            return;
        }
        self.rope.remove(start..end);
        self.bump_revision();
    }

    /// Replace the entire contents.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.bump_revision();
    }

    /// Drop everything past `max_chars`.
    pub fn truncate(&mut self, max_chars: usize) {
        let len = self.len_chars();
        if max_chars < len {
            self.remove(max_chars..len);
        }
    }

    /// Revision counter, bumped on every change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Convert to string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
