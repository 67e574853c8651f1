//! Text storage, wrapping, and the editing engine.
//!
//! Key types:
//!
//! - [`TextBuffer`]: rope-backed storage addressed by char offsets
//! - [`LineModel`]: the buffer wrapped into display lines
//! - [`TextEditEngine`]: caret, selection, editing and scrolling on top of both
//! - [`TextMeasure`]: the font measurement seam
//!
//! # Examples
//!
//! ## Wrapping
//!
//! ```
//! use textbox_engine::text::wrap_text;
//!
//! let lines = wrap_text("Hello World", 50.0, |s| s.chars().map(|_| 10.0).collect());
//! assert_eq!(lines.line_count(), 2);
//! assert_eq!(lines.line(0).unwrap().text(), "Hello ");
//! assert_eq!(lines.to_flat(lines.to_position(6)), 6);
//! ```
//!
//! ## Editing
//!
//! ```
//! use textbox_engine::text::{CellMeasure, TextEditEngine};
//! use textbox_engine::Font;
//!
//! let mut engine = TextEditEngine::new(Font::new("mono", CellMeasure::new(1.0)));
//! engine.set_size(200.0, 100.0);
//! engine.set_text("Hello World");
//! engine.select_range(0, 5);
//! assert!(engine.delete_selected_characters());
//! assert_eq!(engine.text(), " World");
//! assert_eq!(engine.find_text_caret_position(), 0);
//! ```

mod buffer;
mod engine;
mod layout;
mod measure;
mod position;
mod viewport;
mod wrap;

pub use buffer::TextBuffer;
pub use engine::TextEditEngine;
pub use layout::{DrawCommand, GlyphRun, Rect, RunKind};
pub use measure::{CellMeasure, TextMeasure};
pub use position::{Selection, TextPosition};
pub use viewport::ViewportState;
pub use wrap::{LineModel, WrappedLine, wrap_text};
