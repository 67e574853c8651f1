//! Unicode utilities for display width and word boundaries.

mod width;
mod words;

pub use width::{WidthMethod, display_width_char_with_method, display_width_with_method};
pub use words::{next_word_boundary, prev_word_boundary, word_range_at};
