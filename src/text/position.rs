//! Caret positions and selection ranges in the wrapped line model.

use std::cmp::Ordering;

/// A (line, column) position in the wrapped line model.
///
/// Ordering is by line, then column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextPosition {
    /// Wrapped line index (0-indexed).
    pub line: usize,
    /// Column within the line, in chars.
    pub column: usize,
}

impl TextPosition {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl PartialOrd for TextPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TextPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.column.cmp(&other.column))
    }
}

/// Selection between a fixed anchor and the caret.
///
/// The caret is the endpoint that moves while dragging or extending with
/// Shift; it is also where text is inserted. Either endpoint may come first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: TextPosition,
    pub caret: TextPosition,
}

impl Selection {
    /// An empty selection at a position.
    #[must_use]
    pub const fn collapsed(at: TextPosition) -> Self {
        Self {
            anchor: at,
            caret: at,
        }
    }

    #[must_use]
    pub const fn new(anchor: TextPosition, caret: TextPosition) -> Self {
        Self { anchor, caret }
    }

    /// Endpoints ordered as (start, end).
    #[must_use]
    pub fn normalized(&self) -> (TextPosition, TextPosition) {
        if self.anchor <= self.caret {
            (self.anchor, self.caret)
        } else {
            (self.caret, self.anchor)
        }
    }

    /// Whether the caret sits before the anchor.
    #[must_use]
    pub fn is_backward(&self) -> bool {
        self.caret < self.anchor
    }
}
