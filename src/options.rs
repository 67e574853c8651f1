//! Text box configuration.

use crate::error::{Error, Result};
use std::time::Duration;

/// Space between the widget border and its text area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same padding on every side.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left plus right.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Top plus bottom.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    fn is_valid(&self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(4.0)
    }
}

/// Options for a text box.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBoxOptions {
    /// Character size handed to the font measurer.
    pub text_size: u32,
    /// Vertical distance between wrapped lines, in pixels.
    pub line_height: u32,
    /// Maximum number of chars; 0 means unlimited.
    pub max_chars: usize,
    /// Reject all edits from the user.
    pub read_only: bool,
    /// Width of the caret rectangle, in pixels.
    pub caret_width: f32,
    pub padding: Padding,
    /// Time between caret visibility flips.
    pub blink_interval: Duration,
    /// Maximum gap between two presses that counts as a double click.
    pub double_click_interval: Duration,
}

impl Default for TextBoxOptions {
    fn default() -> Self {
        Self {
            text_size: 18,
            line_height: 24,
            max_chars: 0,
            read_only: false,
            caret_width: 2.0,
            padding: Padding::default(),
            blink_interval: Duration::from_millis(500),
            double_click_interval: Duration::from_millis(500),
        }
    }
}

impl TextBoxOptions {
    /// Check that the options describe something that can be laid out.
    pub fn validate(&self) -> Result<()> {
        if self.text_size == 0 {
            return Err(Error::InvalidOptions(
                "text size must be positive".to_string(),
            ));
        }
        if self.line_height == 0 {
            return Err(Error::InvalidOptions(
                "line height must be positive".to_string(),
            ));
        }
        if !self.caret_width.is_finite() || self.caret_width < 0.0 {
            return Err(Error::InvalidOptions(format!(
                "caret width {} is not a non-negative number",
                self.caret_width
            )));
        }
        if !self.padding.is_valid() {
            return Err(Error::InvalidOptions(format!(
                "padding {:?} has a negative or non-finite side",
                self.padding
            )));
        }
        Ok(())
    }
}
