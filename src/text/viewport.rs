//! Visible window over the wrapped lines.

/// Which wrapped lines are on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportState {
    top_line: usize,
    visible_lines: usize,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            top_line: 0,
            visible_lines: 1,
        }
    }
}

impl ViewportState {
    /// Visible line count for a text area height; never less than one.
    #[must_use]
    pub fn lines_for_height(height: f32, line_height: u32) -> usize {
        if line_height == 0 || height <= 0.0 {
            return 1;
        }
        ((height / line_height as f32).floor() as usize).max(1)
    }

    /// First visible line.
    #[must_use]
    pub fn top_line(&self) -> usize {
        self.top_line
    }

    /// Number of lines that fit in the text area.
    #[must_use]
    pub fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    /// Last visible line index, given the total line count.
    #[must_use]
    pub fn bottom_line(&self, line_count: usize) -> usize {
        self.end_line().min(line_count)
            .saturating_sub(1)
    }

    /// Whether `line` is inside the window.
    #[must_use]
    pub fn contains(&self, line: usize) -> bool {
        line >= self.top_line && line < self.end_line()
    }

    /// Largest valid top line for a line count.
    #[must_use]
    pub fn max_top_line(&self, line_count: usize) -> usize {
        line_count.saturating_sub(self.visible_lines)
    }

    /// One past the last visible line.
    fn end_line(&self) -> usize {
        self.top_line.saturating_add(self.visible_lines)
    }

    pub(crate) fn set_visible_lines(&mut self, visible_lines: usize, line_count: usize) {
        self.visible_lines = visible_lines.max(1);
        self.clamp(line_count);
    }

    /// Set the top line, clamped. Returns whether it changed.
    pub(crate) fn set_top_line(&mut self, top_line: usize, line_count: usize) -> bool {
        let before = self.top_line;
        self.top_line = top_line.min(self.max_top_line(line_count));
        before != self.top_line
    }

    pub(crate) fn clamp(&mut self, line_count: usize) {
        self.top_line = self.top_line.min(self.max_top_line(line_count));
    }

    /// Scroll the minimum amount that makes `line` visible.
    pub(crate) fn scroll_to_line(&mut self, line: usize, line_count: usize) {
        if line < self.top_line {
            self.top_line = line;
        } else if line >= self.end_line() {
            self.top_line = (line + 1).saturating_sub(self.visible_lines);
        }
        self.clamp(line_count);
    }
}
