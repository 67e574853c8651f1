//! Word boundaries in char offsets.
//!
//! Used for double-click word selection and Ctrl+arrow movement. Boundaries
//! come from the Unicode word segmentation rules (UAX #29).

use unicode_segmentation::UnicodeSegmentation;

/// A word-bound segment in char offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Segment {
    start: usize,
    end: usize,
    is_word: bool,
}

fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut char_pos = 0usize;
    for piece in text.split_word_bounds() {
        let len = piece.chars().count();
        out.push(Segment {
            start: char_pos,
            end: char_pos + len,
            is_word: piece.chars().any(char::is_alphanumeric),
        });
        char_pos += len;
    }
    out
}

/// Char range of the word (or non-word run) containing `char_idx`.
///
/// An index at the end of the text selects the last segment. Returns an
/// empty range for empty text.
#[must_use]
pub fn word_range_at(text: &str, char_idx: usize) -> (usize, usize) {
    let segs = segments(text);
    let Some(last) = segs.last() else {
        return (0, 0);
    };
    if char_idx >= last.end {
        return (last.start, last.end);
    }
    // Prefer the word to the left when the index sits right after it.
    if let Some(idx) = segs.iter().position(|s| s.start <= char_idx && char_idx < s.end) {
        let seg = segs[idx];
        if !seg.is_word && seg.start == char_idx && idx > 0 && segs[idx - 1].is_word {
            let prev = segs[idx - 1];
            return (prev.start, prev.end);
        }
        return (seg.start, seg.end);
    }
    (char_idx, char_idx)
}

/// Offset just past the next word end at or after `char_idx`.
#[must_use]
pub fn next_word_boundary(text: &str, char_idx: usize) -> usize {
    let segs = segments(text);
    for seg in &segs {
        if seg.is_word && seg.end > char_idx {
            return seg.end;
        }
    }
    segs.last().map_or(0, |s| s.end)
}

/// Offset of the previous word start strictly before `char_idx`.
#[must_use]
pub fn prev_word_boundary(text: &str, char_idx: usize) -> usize {
    let segs = segments(text);
    for seg in segs.iter().rev() {
        if seg.is_word && seg.start < char_idx {
            return seg.start;
        }
    }
    0
}
