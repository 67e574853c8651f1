//! Word wrapping and the wrapped line model.
//!
//! [`wrap_text`] splits a buffer into display lines that fit a pixel width.
//! Real newlines always break. Inside a paragraph the line is filled
//! greedily; whitespace stays on the line it follows and may hang past the
//! right edge, so soft breaks land after whitespace and every buffer char
//! ends up on exactly one line. A word wider than the whole width is broken
//! at the last character that fits.
//!
//! The resulting [`LineModel`] maps between flat char offsets and
//! `(line, column)` positions. Line starts are buffer offsets, so real
//! newlines are counted while soft breaks consume nothing.

// Index loops over parallel char/advance slices read better than zips here.
#![allow(clippy::needless_range_loop)]

use crate::text::position::TextPosition;

/// Slack for accumulated float error when comparing against the wrap width.
const WIDTH_EPSILON: f32 = 1e-3;

/// One display line of the wrapped buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WrappedLine {
    text: String,
    advances: Vec<f32>,
    start: usize,
    source_line: usize,
    hard_break: bool,
}

impl WrappedLine {
    /// Line text, without the terminating newline.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Flat char offset of the first char.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Flat char offset one past the last char (excluding the newline).
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len_chars()
    }

    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.advances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.advances.is_empty()
    }

    /// Index of the newline-separated paragraph this line belongs to.
    #[must_use]
    pub fn source_line(&self) -> usize {
        self.source_line
    }

    /// True when the line is terminated by a real newline in the buffer.
    #[must_use]
    pub fn has_hard_break(&self) -> bool {
        self.hard_break
    }

    /// Per-char pixel advances.
    #[must_use]
    pub fn advances(&self) -> &[f32] {
        &self.advances
    }

    /// Pixel offset of the boundary before `column` (clamped to the line end).
    #[must_use]
    pub fn column_x(&self, column: usize) -> f32 {
        let col = column.min(self.advances.len());
        self.advances[..col].iter().sum()
    }

    /// Pixel width of the whole line, hanging whitespace included.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.advances.iter().sum()
    }

    /// Pixel width without trailing whitespace.
    #[must_use]
    pub fn visible_width(&self) -> f32 {
        let trailing = self
            .text
            .chars()
            .rev()
            .take_while(|c| c.is_whitespace())
            .count();
        self.column_x(self.len_chars() - trailing)
    }

    /// Text of a column range (clamped).
    #[must_use]
    pub fn slice(&self, from: usize, to: usize) -> String {
        let to = to.min(self.len_chars());
        let from = from.min(to);
        self.text.chars().skip(from).take(to - from).collect()
    }
}

/// The buffer split into display lines.
///
/// There is always at least one line; an empty buffer is one empty line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineModel {
    lines: Vec<WrappedLine>,
    wrap_width: f32,
    len_chars: usize,
}

impl Default for LineModel {
    fn default() -> Self {
        Self {
            lines: vec![WrappedLine::default()],
            wrap_width: 0.0,
            len_chars: 0,
        }
    }
}

/// Wrap `text` into lines no wider than `max_width` pixels.
///
/// `advances` returns one pixel advance per char of the string it is given;
/// it is called once per paragraph. A non-positive `max_width` disables soft
/// wrapping.
pub fn wrap_text<F>(text: &str, max_width: f32, advances: F) -> LineModel
where
    F: Fn(&str) -> Vec<f32>,
{
    let mut lines = Vec::new();
    let mut offset = 0usize;
    let mut paragraphs = text.split('\n').enumerate().peekable();

    while let Some((source_line, paragraph)) = paragraphs.next() {
        let hard_break = paragraphs.peek().is_some();
        let chars: Vec<char> = paragraph.chars().collect();
        let mut adv = advances(paragraph);
        adv.resize(chars.len(), 0.0);

        let mut push = |from: usize, to: usize, hard: bool| {
            lines.push(WrappedLine {
                text: chars[from..to].iter().collect(),
                advances: adv[from..to].to_vec(),
                start: offset + from,
                source_line,
                hard_break: hard,
            });
        };

        if chars.is_empty() || max_width <= 0.0 {
            push(0, chars.len(), hard_break);
        } else {
            let mut start = 0usize;
            while start < chars.len() {
                let end = fill_line(&chars, &adv, start, max_width);
                if end == chars.len() {
                    push(start, end, hard_break);
                    break;
                }
                let cut = break_point(&chars, start, end);
                push(start, cut, cut == chars.len() && hard_break);
                start = cut;
            }
        }

        offset += chars.len() + usize::from(hard_break);
    }

    LineModel {
        lines,
        wrap_width: max_width,
        len_chars: offset,
    }
}

/// Greedy fill: index of the first char that does not fit on a line
/// starting at `start`. Whitespace always fits.
fn fill_line(chars: &[char], adv: &[f32], start: usize, max_width: f32) -> usize {
    let mut width = 0.0f32;
    let mut end = start;
    while end < chars.len() {
        if chars[end].is_whitespace() || width + adv[end] <= max_width + WIDTH_EPSILON {
            width += adv[end];
            end += 1;
        } else {
            break;
        }
    }
    end
}

/// Where to end a line whose char at `overflow` did not fit.
fn break_point(chars: &[char], start: usize, overflow: usize) -> usize {
    let after_space = (start + 1..=overflow)
        .rev()
        .find(|&p| chars[p - 1].is_whitespace());
    match after_space {
        Some(p) => p,
        None if overflow == start => start + 1,
        None => overflow,
    }
}

impl LineModel {
    /// Number of display lines (at least 1).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by index.
    #[must_use]
    pub fn line(&self, idx: usize) -> Option<&WrappedLine> {
        self.lines.get(idx)
    }

    /// All lines in order.
    #[must_use]
    pub fn lines(&self) -> &[WrappedLine] {
        &self.lines
    }

    /// The width the model was wrapped at.
    #[must_use]
    pub fn wrap_width(&self) -> f32 {
        self.wrap_width
    }

    /// Total chars of the wrapped buffer, newlines included.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.len_chars
    }

    fn last_line(&self) -> usize {
        self.lines.len() - 1
    }

    /// Clamp a position to an existing line and column.
    #[must_use]
    pub fn clamp(&self, pos: TextPosition) -> TextPosition {
        let line = pos.line.min(self.last_line());
        let column = pos.column.min(self.lines[line].len_chars());
        TextPosition::new(line, column)
    }

    /// Flat char offset of a (line, column) position.
    #[must_use]
    pub fn to_flat(&self, pos: TextPosition) -> usize {
        let pos = self.clamp(pos);
        self.lines[pos.line].start + pos.column
    }

    /// (line, column) position of a flat char offset.
    ///
    /// An offset on a soft break belongs to the start of the following line;
    /// an offset on a newline belongs to the end of the line it terminates.
    #[must_use]
    pub fn to_position(&self, offset: usize) -> TextPosition {
        let offset = offset.min(self.len_chars);
        let line = self
            .lines
            .partition_point(|l| l.start <= offset)
            .saturating_sub(1);
        let column = (offset - self.lines[line].start).min(self.lines[line].len_chars());
        TextPosition::new(line, column)
    }

    /// Furthest column a click can place the caret on.
    ///
    /// On a soft-wrapped line ending in whitespace the caret stops before
    /// that whitespace; the offset after it already belongs to the next line.
    #[must_use]
    pub fn max_caret_column(&self, line: usize) -> usize {
        let Some(l) = self.lines.get(line) else {
            return 0;
        };
        let soft = !l.hard_break && line < self.last_line();
        if soft && l.text.chars().last().is_some_and(char::is_whitespace) {
            l.len_chars() - 1
        } else {
            l.len_chars()
        }
    }

    /// Column whose boundary is nearest to pixel `x`; ties go to the
    /// earlier column.
    #[must_use]
    pub fn column_at_x(&self, line: usize, x: f32) -> usize {
        let Some(l) = self.lines.get(line) else {
            return 0;
        };
        let limit = self.max_caret_column(line);
        let mut left = 0.0f32;
        for (col, &adv) in l.advances[..limit].iter().enumerate() {
            if x <= left + adv / 2.0 {
                return col;
            }
            left += adv;
        }
        limit
    }

    /// Rebuild the buffer text from the lines.
    #[must_use]
    pub fn joined(&self) -> String {
        let mut out = String::with_capacity(self.len_chars);
        for line in &self.lines {
            out.push_str(&line.text);
            if line.hard_break {
                out.push('\n');
            }
        }
        out
    }
}
