//! Keyboard input consumed by [`TextBox`](crate::widget::TextBox).
//!
//! Hosts translate their native key events into [`KeyEvent`]s. Printable
//! text arrives separately through `text_entered`, so [`KeyCode::Char`] is
//! only meaningful together with modifiers (Ctrl+A, Ctrl+C, ...).

mod keyboard;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
