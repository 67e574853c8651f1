//! `textbox_engine` - Editing and layout core of a multi-line text box
//!
//! Word wrapping against a pixel width, pixel-to-caret mapping, selection,
//! char-limited and read-only editing, scrolling, and caret blinking. The
//! engine measures text through a pluggable [`TextMeasure`] and hands draw
//! geometry to the host; it never rasterizes anything itself.
//!
//! # Example
//!
//! ```
//! use textbox_engine::{CellMeasure, Font, KeyCode, KeyEvent, TextBox};
//! use textbox_engine::widget::{Focusable, KeyboardInput};
//!
//! let mut text_box = TextBox::new(Font::new("mono", CellMeasure::new(1.0)));
//! text_box.set_size(120.0, 100.0);
//! text_box.focus();
//! for c in "Hello".chars() {
//!     text_box.text_entered(c);
//! }
//! text_box.key_pressed(KeyEvent::with_shift(KeyCode::Left));
//! assert_eq!(text_box.selected_text(), "o");
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional pixel/line casts
#![allow(clippy::cast_sign_loss)] // Intentional pixel/line casts
#![allow(clippy::cast_precision_loss)] // Line counts fit in f32
#![allow(clippy::cast_possible_wrap)] // Line deltas fit in isize
#![allow(clippy::module_name_repetitions)] // Allow text::TextBuffer etc
#![allow(clippy::struct_excessive_bools)] // Widget state needs multiple flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::float_cmp)] // Exact pixel values in tests

pub mod error;
pub mod event;
pub mod font;
pub mod input;
pub mod options;
pub mod text;
pub mod unicode;
pub mod widget;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{
    LogLevel, TEXT_CHANGED, clear_event_callback, clear_log_callback, emit_event, emit_log,
    set_event_callback, set_log_callback,
};
pub use font::{DEFAULT_FONT_ID, Font, FontRegistry};
pub use options::{Padding, TextBoxOptions};
pub use text::{
    CellMeasure, DrawCommand, GlyphRun, LineModel, Rect, RunKind, Selection, TextBuffer,
    TextEditEngine, TextMeasure, TextPosition, ViewportState, WrappedLine, wrap_text,
};

// Re-export input types
pub use input::{KeyCode, KeyEvent, KeyModifiers};

// Re-export widget types
pub use widget::TextBox;
