//! Text measurement collaborator.
//!
//! The engine never rasterizes glyphs. It asks a [`TextMeasure`] for
//! per-character advances and derives every pixel position from their
//! running sums. Hosts implement the trait over their font backend; the
//! crate ships [`CellMeasure`], a monospace measurer based on Unicode
//! display widths.

use crate::unicode::{WidthMethod, display_width_char_with_method};

/// Measures text in pixels for a given text size.
pub trait TextMeasure: Send + Sync {
    /// Per-character pixel advances, one entry per char of `text`.
    fn glyph_advances(&self, text: &str, text_size: u32) -> Vec<f32>;

    /// Total pixel width of `text`.
    fn measure(&self, text: &str, text_size: u32) -> f32 {
        self.glyph_advances(text, text_size).iter().sum()
    }
}

/// Monospace measurement: every cell is `text_size * cell_ratio` pixels wide.
///
/// Wide (CJK) characters take two cells, combining marks and control
/// characters take none, and a tab takes `tab_cells` cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMeasure {
    cell_ratio: f32,
    tab_cells: u8,
    width_method: WidthMethod,
}

impl Default for CellMeasure {
    fn default() -> Self {
        Self {
            cell_ratio: 0.6,
            tab_cells: 4,
            width_method: WidthMethod::WcWidth,
        }
    }
}

impl CellMeasure {
    /// Create a measurer with the given cell width as a fraction of the text size.
    #[must_use]
    pub fn new(cell_ratio: f32) -> Self {
        Self {
            cell_ratio: cell_ratio.max(0.0),
            ..Self::default()
        }
    }

    /// Set the number of cells a tab occupies.
    #[must_use]
    pub fn with_tab_cells(mut self, cells: u8) -> Self {
        self.tab_cells = cells;
        self
    }

    /// Set the width method for ambiguous-width characters.
    #[must_use]
    pub fn with_width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    /// Pixel width of one cell at a text size.
    #[must_use]
    pub fn cell_width(&self, text_size: u32) -> f32 {
        text_size as f32 * self.cell_ratio
    }

    fn cells(&self, c: char) -> usize {
        if c == '\t' {
            usize::from(self.tab_cells)
        } else {
            display_width_char_with_method(c, self.width_method)
        }
    }
}

impl TextMeasure for CellMeasure {
    fn glyph_advances(&self, text: &str, text_size: u32) -> Vec<f32> {
        let cell = self.cell_width(text_size);
        text.chars().map(|c| self.cells(c) as f32 * cell).collect()
    }
}
