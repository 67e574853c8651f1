//! Editing and layout engine of a multi-line text box.
//!
//! [`TextEditEngine`] owns the buffer, the wrapped [`LineModel`], the
//! selection, and the viewport. Every buffer change rewraps the whole text
//! and re-expresses the caret and anchor through flat offsets, so positions
//! are always valid for the current line model.
//!
//! Coordinates passed to the engine are relative to the text area's top-left
//! corner, i.e. padding is already removed.

use crate::error::Result;
use crate::event::debug_with;
use crate::font::Font;
use crate::options::TextBoxOptions;
use crate::text::buffer::TextBuffer;
use crate::text::layout::{self, DrawCommand, LayoutInput};
use crate::text::position::{Selection, TextPosition};
use crate::text::viewport::ViewportState;
use crate::text::wrap::{LineModel, wrap_text};
use crate::unicode::{next_word_boundary, prev_word_boundary, word_range_at};
use std::borrow::Cow;
use std::time::Duration;

/// Normalize `\r\n` and lone `\r` to `\n`.
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Text editing state with word wrapping, selection and scrolling.
#[derive(Clone, Debug)]
pub struct TextEditEngine {
    buffer: TextBuffer,
    lines: LineModel,
    selection: Selection,
    viewport: ViewportState,
    font: Font,
    text_size: u32,
    line_height: u32,
    width: f32,
    height: f32,
    max_chars: usize,
    read_only: bool,
    caret_width: f32,
    caret_visible: bool,
    blink_elapsed: Duration,
    blink_interval: Duration,
}

impl TextEditEngine {
    /// Create an empty engine with default options.
    #[must_use]
    pub fn new(font: Font) -> Self {
        Self::build(font, &TextBoxOptions::default())
    }

    /// Create an empty engine, validating the options first.
    pub fn with_options(font: Font, options: &TextBoxOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::build(font, options))
    }

    fn build(font: Font, options: &TextBoxOptions) -> Self {
        let mut engine = Self {
            buffer: TextBuffer::new(),
            lines: LineModel::default(),
            selection: Selection::default(),
            viewport: ViewportState::default(),
            font,
            text_size: options.text_size.max(1),
            line_height: options.line_height.max(1),
            width: 0.0,
            height: 0.0,
            max_chars: options.max_chars,
            read_only: options.read_only,
            caret_width: options.caret_width,
            caret_visible: true,
            blink_elapsed: Duration::ZERO,
            blink_interval: options.blink_interval,
        };
        engine.rewrap();
        engine
    }

    // ----- text -----

    /// Whole buffer contents.
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Number of chars in the buffer.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Buffer revision, bumped on every change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.buffer.revision()
    }

    /// Replace the text. The caret and selection go back to the start.
    ///
    /// Works in read-only mode; it is the host setting content, not an edit.
    pub fn set_text(&mut self, text: &str) {
        let text = normalize_newlines(text);
        let text = self.fit_to_capacity(&text, self.max_chars);
        self.buffer.set_text(&text);
        self.relayout(0, 0);
        self.reset_blink();
    }

    /// Append text at the end, keeping the caret and selection where they are.
    pub fn add_text(&mut self, text: &str) {
        let text = normalize_newlines(text);
        let text = self.fit_to_capacity(&text, self.remaining_capacity());
        if text.is_empty() {
            return;
        }
        let anchor = self.anchor_flat();
        let caret = self.caret_flat();
        self.buffer.insert(self.buffer.len_chars(), &text);
        self.relayout(anchor, caret);
    }

    /// Text between the selection endpoints, empty when nothing is selected.
    #[must_use]
    pub fn selected_text(&self) -> String {
        let (start, end) = self.selection_flats();
        self.buffer.slice(start..end)
    }

    // ----- configuration -----

    #[must_use]
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Change the font and rewrap.
    pub fn set_font(&mut self, font: Font) {
        if self.font.same_as(&font) {
            return;
        }
        self.font = font;
        self.rearrange_text(true);
    }

    #[must_use]
    pub fn text_size(&self) -> u32 {
        self.text_size
    }

    /// Change the text size (at least 1) and rewrap.
    pub fn set_text_size(&mut self, size: u32) {
        let size = size.max(1);
        if size != self.text_size {
            self.text_size = size;
            self.rearrange_text(true);
        }
    }

    #[must_use]
    pub fn line_height(&self) -> u32 {
        self.line_height
    }

    /// Change the line height (at least 1).
    pub fn set_line_height(&mut self, height: u32) {
        self.line_height = height.max(1);
        self.update_visible_lines();
        self.scroll_to_caret();
    }

    /// Text area size in pixels.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Resize the text area. A width change rewraps the text.
    pub fn set_size(&mut self, width: f32, height: f32) {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let width = sanitize(width);
        self.height = sanitize(height);
        if (width - self.width).abs() > f32::EPSILON {
            self.width = width;
            self.rearrange_text(true);
        } else {
            self.update_visible_lines();
            self.scroll_to_caret();
        }
    }

    /// Maximum number of chars, 0 for unlimited.
    #[must_use]
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Set the char limit. An over-long buffer is truncated; returns whether
    /// that happened.
    pub fn set_max_chars(&mut self, max_chars: usize) -> bool {
        self.max_chars = max_chars;
        let len = self.buffer.len_chars();
        if max_chars == 0 || len <= max_chars {
            return false;
        }
        let anchor = self.anchor_flat().min(max_chars);
        let caret = self.caret_flat().min(max_chars);
        self.buffer.truncate(max_chars);
        debug_with(|| format!("truncated text from {len} to {max_chars} chars"));
        self.relayout(anchor, caret);
        true
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Block or allow edits from the user.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    #[must_use]
    pub fn caret_width(&self) -> f32 {
        self.caret_width
    }

    pub fn set_caret_width(&mut self, width: f32) {
        self.caret_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    }

    pub fn set_blink_interval(&mut self, interval: Duration) {
        self.blink_interval = interval;
        self.reset_blink();
    }

    // ----- layout -----

    /// The wrapped lines.
    #[must_use]
    pub fn lines(&self) -> &LineModel {
        &self.lines
    }

    /// Number of wrapped lines (at least 1).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Rewrap the buffer at the current width.
    ///
    /// With `keep_selection` the anchor survives; otherwise the selection
    /// collapses onto the caret. The viewport then follows the caret.
    pub fn rearrange_text(&mut self, keep_selection: bool) {
        let caret = self.caret_flat();
        let anchor = if keep_selection {
            self.anchor_flat()
        } else {
            caret
        };
        self.relayout(anchor, caret);
    }

    fn rewrap(&mut self) {
        let text = self.buffer.to_string();
        let font = &self.font;
        let size = self.text_size;
        self.lines = wrap_text(&text, self.width, |s| font.glyph_advances(s, size));
        self.update_visible_lines();
        debug_with(|| {
            format!(
                "rewrapped {} chars into {} lines at width {:.1}",
                self.lines.len_chars(),
                self.lines.line_count(),
                self.width
            )
        });
    }

    fn relayout(&mut self, anchor: usize, caret: usize) {
        self.rewrap();
        self.selection = Selection::new(
            self.lines.to_position(anchor),
            self.lines.to_position(caret),
        );
        self.scroll_to_caret();
    }

    fn update_visible_lines(&mut self) {
        let visible = ViewportState::lines_for_height(self.height, self.line_height);
        self.viewport
            .set_visible_lines(visible, self.lines.line_count());
    }

    fn scroll_to_caret(&mut self) {
        self.viewport
            .scroll_to_line(self.selection.caret.line, self.lines.line_count());
    }

    // ----- scrolling -----

    /// Scroll so that `line` is the first visible line (clamped).
    pub fn set_top_line(&mut self, line: usize) {
        let count = self.lines.line_count();
        self.viewport.set_top_line(line, count);
        if self.viewport.top_line() != line {
            debug_with(|| {
                format!(
                    "top line {line} clamped to {}",
                    self.viewport.top_line()
                )
            });
        }
    }

    /// Scroll by a number of lines; negative scrolls up.
    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.viewport.top_line().saturating_add_signed(delta);
        self.set_top_line(target);
    }

    // ----- positions -----

    /// Caret position.
    #[must_use]
    pub fn caret(&self) -> TextPosition {
        self.selection.caret
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        let (start, end) = self.selection_flats();
        start != end
    }

    /// Flat offset of the caret.
    #[must_use]
    pub fn find_text_caret_position(&self) -> usize {
        self.caret_flat()
    }

    fn caret_flat(&self) -> usize {
        self.lines.to_flat(self.selection.caret)
    }

    fn anchor_flat(&self) -> usize {
        self.lines.to_flat(self.selection.anchor)
    }

    /// Selection as ordered flat offsets.
    #[must_use]
    pub fn selection_flats(&self) -> (usize, usize) {
        let anchor = self.anchor_flat();
        let caret = self.caret_flat();
        (anchor.min(caret), anchor.max(caret))
    }

    /// Caret position for a point in the text area.
    ///
    /// The line is picked among the visible lines; the column is the glyph
    /// boundary nearest to `x`, ties going to the earlier column.
    #[must_use]
    pub fn find_caret_position(&self, x: f32, y: f32) -> TextPosition {
        let row = if y > 0.0 {
            (y / self.line_height as f32).floor() as usize
        } else {
            0
        };
        let bottom = self.viewport.bottom_line(self.lines.line_count());
        let line = self.viewport.top_line().saturating_add(row).min(bottom);
        TextPosition::new(line, self.lines.column_at_x(line, x))
    }

    // ----- selection -----

    /// Put the caret at a point and drop the selection (mouse press).
    pub fn place_caret(&mut self, x: f32, y: f32) {
        let pos = self.find_caret_position(x, y);
        self.move_caret_to(pos, false);
    }

    /// Move the caret to a point, keeping the anchor (mouse drag).
    pub fn select_text(&mut self, x: f32, y: f32) {
        let pos = self.find_caret_position(x, y);
        self.move_caret_to(pos, true);
    }

    /// Select the word under a point (double click).
    pub fn select_word_at(&mut self, x: f32, y: f32) {
        let pos = self.find_caret_position(x, y);
        let offset = self.lines.to_flat(pos);
        let (start, end) = word_range_at(&self.buffer.to_string(), offset);
        self.select_range(start, end);
    }

    /// Select by flat offsets; the caret ends at `caret`.
    pub fn select_range(&mut self, anchor: usize, caret: usize) {
        self.selection = Selection::new(
            self.lines.to_position(anchor),
            self.lines.to_position(caret),
        );
        self.scroll_to_caret();
        self.reset_blink();
    }

    pub fn select_all(&mut self) {
        self.select_range(0, self.buffer.len_chars());
    }

    /// Collapse the selection onto the caret.
    pub fn clear_selection(&mut self) {
        self.selection.anchor = self.selection.caret;
    }

    /// Delete the selected text. Returns false when nothing was selected or
    /// the engine is read-only.
    pub fn delete_selected_characters(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        let removed = self.remove_selection();
        if removed {
            self.reset_blink();
        }
        removed
    }

    fn remove_selection(&mut self) -> bool {
        let (start, end) = self.selection_flats();
        if start == end {
            return false;
        }
        self.buffer.remove(start..end);
        self.relayout(start, start);
        true
    }

    // ----- editing -----

    /// Type one char at the caret, replacing the selection.
    pub fn insert_char(&mut self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_text(c.encode_utf8(&mut buf))
    }

    /// Insert text at the caret, replacing the selection. Text past the char
    /// limit is dropped.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if self.read_only {
            debug_with(|| "insert ignored: read-only".to_string());
            return false;
        }
        let text = normalize_newlines(text);
        let removed = self.remove_selection();
        let text = self.fit_to_capacity(&text, self.remaining_capacity());
        if text.is_empty() {
            return removed;
        }
        let at = self.caret_flat();
        let inserted = text.chars().count();
        self.buffer.insert(at, &text);
        self.relayout(at + inserted, at + inserted);
        self.reset_blink();
        true
    }

    /// Delete the selection, or the char before the caret.
    pub fn backspace(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        if self.remove_selection() {
            self.reset_blink();
            return true;
        }
        let at = self.caret_flat();
        if at == 0 {
            return false;
        }
        self.buffer.remove(at - 1..at);
        self.relayout(at - 1, at - 1);
        self.reset_blink();
        true
    }

    /// Delete the selection, or the char after the caret.
    pub fn delete_forward(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        if self.remove_selection() {
            self.reset_blink();
            return true;
        }
        let at = self.caret_flat();
        if at >= self.buffer.len_chars() {
            return false;
        }
        self.buffer.remove(at..at + 1);
        self.relayout(at, at);
        self.reset_blink();
        true
    }

    fn remaining_capacity(&self) -> usize {
        if self.max_chars == 0 {
            usize::MAX
        } else {
            self.max_chars.saturating_sub(self.buffer.len_chars())
        }
    }

    fn fit_to_capacity<'a>(&self, text: &'a str, room: usize) -> Cow<'a, str> {
        if self.max_chars == 0 {
            return Cow::Borrowed(text);
        }
        match text.char_indices().nth(room) {
            Some((byte, _)) => {
                debug_with(|| {
                    format!(
                        "dropped {} chars over the {} char limit",
                        text[byte..].chars().count(),
                        self.max_chars
                    )
                });
                Cow::Borrowed(&text[..byte])
            }
            None => Cow::Borrowed(text),
        }
    }

    // ----- navigation -----

    fn move_caret_to(&mut self, pos: TextPosition, extend: bool) {
        let pos = self.lines.clamp(pos);
        self.selection.caret = pos;
        if !extend {
            self.selection.anchor = pos;
        }
        self.scroll_to_caret();
        self.reset_blink();
    }

    fn move_caret_to_flat(&mut self, offset: usize, extend: bool) {
        let pos = self.lines.to_position(offset);
        self.move_caret_to(pos, extend);
    }

    pub fn move_left(&mut self, extend: bool) {
        if !extend && self.has_selection() {
            let (start, _) = self.selection_flats();
            self.move_caret_to_flat(start, false);
            return;
        }
        let at = self.caret_flat();
        self.move_caret_to_flat(at.saturating_sub(1), extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        if !extend && self.has_selection() {
            let (_, end) = self.selection_flats();
            self.move_caret_to_flat(end, false);
            return;
        }
        let at = self.caret_flat();
        self.move_caret_to_flat((at + 1).min(self.buffer.len_chars()), extend);
    }

    pub fn move_up(&mut self, extend: bool) {
        self.move_vertical(-1, extend);
    }

    pub fn move_down(&mut self, extend: bool) {
        self.move_vertical(1, extend);
    }

    pub fn move_page_up(&mut self, extend: bool) {
        self.move_vertical(-self.page_lines(), extend);
    }

    pub fn move_page_down(&mut self, extend: bool) {
        self.move_vertical(self.page_lines(), extend);
    }

    fn page_lines(&self) -> isize {
        isize::try_from(self.viewport.visible_lines()).unwrap_or(isize::MAX)
    }

    /// Move by wrapped lines, keeping the caret's pixel x.
    fn move_vertical(&mut self, delta: isize, extend: bool) {
        let caret = self.selection.caret;
        let x = self
            .lines
            .line(caret.line)
            .map_or(0.0, |l| l.column_x(caret.column));
        let last = self.lines.line_count() - 1;
        let target = caret.line.saturating_add_signed(delta).min(last);
        let column = self.lines.column_at_x(target, x);
        self.move_caret_to(TextPosition::new(target, column), extend);
    }

    pub fn move_line_start(&mut self, extend: bool) {
        let line = self.selection.caret.line;
        self.move_caret_to(TextPosition::new(line, 0), extend);
    }

    pub fn move_line_end(&mut self, extend: bool) {
        let line = self.selection.caret.line;
        let column = self.lines.max_caret_column(line);
        self.move_caret_to(TextPosition::new(line, column), extend);
    }

    pub fn move_document_start(&mut self, extend: bool) {
        self.move_caret_to_flat(0, extend);
    }

    pub fn move_document_end(&mut self, extend: bool) {
        self.move_caret_to_flat(self.buffer.len_chars(), extend);
    }

    pub fn move_word_left(&mut self, extend: bool) {
        let target = prev_word_boundary(&self.buffer.to_string(), self.caret_flat());
        self.move_caret_to_flat(target, extend);
    }

    pub fn move_word_right(&mut self, extend: bool) {
        let target = next_word_boundary(&self.buffer.to_string(), self.caret_flat());
        self.move_caret_to_flat(target, extend);
    }

    // ----- caret blink -----

    /// Whether the caret is in the visible half of its blink cycle.
    #[must_use]
    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// Show the caret and restart the blink interval.
    pub fn reset_blink(&mut self) {
        self.caret_visible = true;
        self.blink_elapsed = Duration::ZERO;
    }

    /// Advance the blink timer.
    pub fn update(&mut self, elapsed: Duration) {
        let interval = self.blink_interval.as_nanos();
        if interval == 0 {
            return;
        }
        let total = self.blink_elapsed.as_nanos() + elapsed.as_nanos();
        if (total / interval) % 2 == 1 {
            self.caret_visible = !self.caret_visible;
        }
        self.blink_elapsed = Duration::from_nanos(u64::try_from(total % interval).unwrap_or(0));
    }

    // ----- drawing -----

    /// Draw list for the visible lines, in text-area coordinates.
    #[must_use]
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        layout::build(&LayoutInput {
            lines: &self.lines,
            viewport: self.viewport,
            selection: self.selection_flats(),
            caret: self.selection.caret,
            line_height: self.line_height as f32,
            caret_width: self.caret_width,
            caret_visible: self.caret_visible,
            newline_width: self.font.measure(" ", self.text_size),
        })
    }

    /// Top-left corner of the caret in the text area, `None` when its line
    /// is scrolled out of view.
    #[must_use]
    pub fn caret_pixel_position(&self) -> Option<(f32, f32)> {
        let caret = self.selection.caret;
        if !self.viewport.contains(caret.line) {
            return None;
        }
        let line = self.lines.line(caret.line)?;
        let row = caret.line - self.viewport.top_line();
        Some((
            line.column_x(caret.column),
            row as f32 * self.line_height as f32,
        ))
    }
}
