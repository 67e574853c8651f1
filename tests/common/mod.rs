//! Shared helpers for the integration tests.

#![allow(dead_code)]
#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry

use textbox_engine::widget::Focusable;
use textbox_engine::{CellMeasure, Font, LogLevel, Padding, TextBox, TextBoxOptions};
use tracing::Level;

/// Install a test subscriber and forward engine logs into `tracing`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
    textbox_engine::set_log_callback(|level, message| match level {
        LogLevel::Debug => tracing::debug!(target: "textbox_engine", "{message}"),
        LogLevel::Info => tracing::info!(target: "textbox_engine", "{message}"),
        LogLevel::Warn => tracing::warn!(target: "textbox_engine", "{message}"),
        LogLevel::Error => tracing::error!(target: "textbox_engine", "{message}"),
    });
}

/// Font with 10 px wide chars at text size 10.
pub fn mono_font() -> Font {
    Font::new("mono", CellMeasure::new(1.0))
}

/// Focused text box with 10 px chars, 20 px lines and no padding.
pub fn text_box(width: f32, height: f32) -> TextBox {
    let options = TextBoxOptions {
        text_size: 10,
        line_height: 20,
        padding: Padding::uniform(0.0),
        ..TextBoxOptions::default()
    };
    let mut tb = TextBox::with_options(mono_font(), options).expect("valid options");
    tb.set_size(width, height);
    tb.focus();
    tb
}

/// Texts of all wrapped lines.
pub fn line_texts(tb: &TextBox) -> Vec<String> {
    tb.engine()
        .lines()
        .lines()
        .iter()
        .map(|l| l.text().to_string())
        .collect()
}
