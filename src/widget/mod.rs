//! Widget capabilities and the text box widget.
//!
//! A widget implements only the capabilities it needs. The host's dispatch
//! code routes input through these traits; nothing here knows about a widget
//! tree or a renderer.

mod textbox;

pub use textbox::TextBox;

use crate::input::KeyEvent;
use std::time::Duration;

/// Reacts to the left mouse button and wheel. Coordinates are widget-local.
pub trait MouseInput {
    /// Whether a point is over the widget.
    fn mouse_on_widget(&self, x: f32, y: f32) -> bool;

    fn left_mouse_pressed(&mut self, x: f32, y: f32);

    fn left_mouse_released(&mut self, x: f32, y: f32);

    fn mouse_moved(&mut self, x: f32, y: f32);

    /// Wheel moved by `delta` notches; positive is away from the user.
    fn mouse_wheel_moved(&mut self, delta: i32, x: f32, y: f32);

    /// The button was released outside the widget.
    fn mouse_no_longer_down(&mut self) {}
}

/// Reacts to key presses and typed text.
pub trait KeyboardInput {
    /// Returns whether the key was handled.
    fn key_pressed(&mut self, event: KeyEvent) -> bool;

    /// Returns whether the text changed.
    fn text_entered(&mut self, c: char) -> bool;
}

/// Can hold keyboard focus.
pub trait Focusable {
    fn focus(&mut self);

    fn unfocus(&mut self);

    fn is_focused(&self) -> bool;
}

/// Advances with time.
pub trait Animated {
    fn update(&mut self, elapsed: Duration);
}
