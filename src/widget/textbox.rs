//! Multi-line text box widget.

use crate::error::Result;
use crate::event::{TEXT_CHANGED, debug_with, emit_event};
use crate::font::Font;
use crate::input::{KeyCode, KeyEvent};
use crate::options::{Padding, TextBoxOptions};
use crate::text::{DrawCommand, TextEditEngine};
use crate::widget::{Animated, Focusable, KeyboardInput, MouseInput};
use std::time::Duration;

/// A text box: the editing engine plus widget state.
///
/// Owns size and padding, focus, mouse tracking, double-click detection and
/// an in-memory clipboard. Every change to the text emits a
/// [`TEXT_CHANGED`] event carrying the new char count.
#[derive(Clone, Debug)]
pub struct TextBox {
    engine: TextEditEngine,
    width: f32,
    height: f32,
    padding: Padding,
    focused: bool,
    mouse_down: bool,
    possible_double_click: bool,
    since_last_click: Duration,
    double_click_interval: Duration,
    clipboard: String,
}

impl TextBox {
    /// Create a text box with default options.
    #[must_use]
    pub fn new(font: Font) -> Self {
        let options = TextBoxOptions::default();
        Self::build(TextEditEngine::new(font), &options)
    }

    /// Create a text box, validating the options.
    pub fn with_options(font: Font, options: TextBoxOptions) -> Result<Self> {
        let engine = TextEditEngine::with_options(font, &options)?;
        Ok(Self::build(engine, &options))
    }

    fn build(engine: TextEditEngine, options: &TextBoxOptions) -> Self {
        Self {
            engine,
            width: 0.0,
            height: 0.0,
            padding: options.padding,
            focused: false,
            mouse_down: false,
            possible_double_click: false,
            since_last_click: Duration::ZERO,
            double_click_interval: options.double_click_interval,
            clipboard: String::new(),
        }
    }

    /// The editing engine.
    #[must_use]
    pub fn engine(&self) -> &TextEditEngine {
        &self.engine
    }

    /// Mutable access to the engine. Changes made here emit no events.
    pub fn engine_mut(&mut self) -> &mut TextEditEngine {
        &mut self.engine
    }

    // ----- geometry -----

    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Resize the widget; the text area is the size minus padding.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.layout_text_area();
    }

    #[must_use]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
        self.layout_text_area();
    }

    fn layout_text_area(&mut self) {
        let width = (self.width - self.padding.horizontal()).max(0.0);
        let height = (self.height - self.padding.vertical()).max(0.0);
        self.engine.set_size(width, height);
    }

    fn to_text_area(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.padding.left, y - self.padding.top)
    }

    // ----- text -----

    #[must_use]
    pub fn text(&self) -> String {
        self.engine.text()
    }

    /// Replace the text and notify.
    pub fn set_text(&mut self, text: &str) {
        self.engine.set_text(text);
        self.notify_text_changed();
    }

    /// Append text and notify if anything was added.
    pub fn add_text(&mut self, text: &str) {
        let revision = self.engine.revision();
        self.engine.add_text(text);
        if self.engine.revision() != revision {
            self.notify_text_changed();
        }
    }

    #[must_use]
    pub fn selected_text(&self) -> String {
        self.engine.selected_text()
    }

    pub fn set_text_size(&mut self, size: u32) {
        self.engine.set_text_size(size);
    }

    pub fn set_font(&mut self, font: Font) {
        self.engine.set_font(font);
    }

    /// Set the char limit, notifying if the text was cut.
    pub fn set_max_chars(&mut self, max_chars: usize) {
        if self.engine.set_max_chars(max_chars) {
            self.notify_text_changed();
        }
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.engine.set_read_only(read_only);
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.engine.is_read_only()
    }

    // ----- clipboard -----

    /// Current clipboard contents.
    #[must_use]
    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    pub fn set_clipboard(&mut self, text: &str) {
        self.clipboard = text.to_string();
    }

    /// Copy the selection. Returns false when nothing is selected.
    pub fn copy(&mut self) -> bool {
        if !self.engine.has_selection() {
            return false;
        }
        self.clipboard = self.engine.selected_text();
        true
    }

    /// Copy and delete the selection.
    pub fn cut(&mut self) -> bool {
        if self.engine.is_read_only() || !self.copy() {
            return false;
        }
        self.apply_edit(TextEditEngine::delete_selected_characters)
    }

    /// Insert the clipboard at the caret.
    pub fn paste(&mut self) -> bool {
        if self.clipboard.is_empty() {
            return false;
        }
        let text = self.clipboard.clone();
        self.apply_edit(|engine| engine.insert_text(&text))
    }

    // ----- drawing -----

    /// Draw list in widget coordinates. The caret is only drawn while focused.
    #[must_use]
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let (dx, dy) = (self.padding.left, self.padding.top);
        self.engine
            .draw_commands()
            .into_iter()
            .filter(|cmd| self.focused || !matches!(cmd, DrawCommand::Caret(_)))
            .map(|cmd| cmd.translated(dx, dy))
            .collect()
    }

    fn apply_edit(&mut self, edit: impl FnOnce(&mut TextEditEngine) -> bool) -> bool {
        let changed = edit(&mut self.engine);
        if changed {
            self.notify_text_changed();
        }
        changed
    }

    fn navigate(&mut self, event: KeyEvent) {
        let extend = event.shift();
        match event.code {
            KeyCode::Left if event.ctrl() => self.engine.move_word_left(extend),
            KeyCode::Left => self.engine.move_left(extend),
            KeyCode::Right if event.ctrl() => self.engine.move_word_right(extend),
            KeyCode::Right => self.engine.move_right(extend),
            KeyCode::Up => self.engine.move_up(extend),
            KeyCode::Down => self.engine.move_down(extend),
            KeyCode::Home if event.ctrl() => self.engine.move_document_start(extend),
            KeyCode::Home => self.engine.move_line_start(extend),
            KeyCode::End if event.ctrl() => self.engine.move_document_end(extend),
            KeyCode::End => self.engine.move_line_end(extend),
            KeyCode::PageUp => self.engine.move_page_up(extend),
            KeyCode::PageDown => self.engine.move_page_down(extend),
            _ => {}
        }
    }

    fn notify_text_changed(&self) {
        let count = self.engine.len_chars();
        emit_event(TEXT_CHANGED, &count.to_string());
    }
}

impl MouseInput for TextBox {
    fn mouse_on_widget(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width && y < self.height
    }

    fn left_mouse_pressed(&mut self, x: f32, y: f32) {
        self.focus();
        let (tx, ty) = self.to_text_area(x, y);
        if self.possible_double_click {
            self.possible_double_click = false;
            self.engine.select_word_at(tx, ty);
            debug_with(|| format!("double click selected {:?}", self.engine.selected_text()));
        } else {
            self.engine.place_caret(tx, ty);
            self.possible_double_click = true;
            self.since_last_click = Duration::ZERO;
        }
        self.mouse_down = true;
    }

    fn left_mouse_released(&mut self, _x: f32, _y: f32) {
        self.mouse_down = false;
    }

    fn mouse_moved(&mut self, x: f32, y: f32) {
        if !self.mouse_down {
            return;
        }
        let (tx, ty) = self.to_text_area(x, y);
        let (_, area_height) = self.engine.size();
        if ty < 0.0 {
            self.engine.scroll_by(-1);
        } else if ty > area_height {
            self.engine.scroll_by(1);
        }
        self.engine.select_text(tx, ty);
    }

    fn mouse_wheel_moved(&mut self, delta: i32, _x: f32, _y: f32) {
        self.engine.scroll_by(-(delta as isize));
    }

    fn mouse_no_longer_down(&mut self) {
        self.mouse_down = false;
    }
}

impl KeyboardInput for TextBox {
    fn key_pressed(&mut self, event: KeyEvent) -> bool {
        if event.code.is_navigation() {
            self.navigate(event);
            return true;
        }
        if event.code.is_editing() {
            match event.code {
                KeyCode::Backspace => self.apply_edit(TextEditEngine::backspace),
                KeyCode::Delete => self.apply_edit(TextEditEngine::delete_forward),
                _ => self.apply_edit(|engine| engine.insert_char('\n')),
            };
            return true;
        }
        if event.is_shortcut('a') {
            self.engine.select_all();
        } else if event.is_shortcut('c') {
            self.copy();
        } else if event.is_shortcut('x') {
            self.cut();
        } else if event.is_shortcut('v') {
            self.paste();
        } else {
            return false;
        }
        true
    }

    /// Typed text. Newlines come through [`KeyCode::Enter`]; other control
    /// characters except tab are ignored.
    fn text_entered(&mut self, c: char) -> bool {
        if c.is_control() && c != '\t' {
            return false;
        }
        self.apply_edit(|engine| engine.insert_char(c))
    }
}

impl Focusable for TextBox {
    fn focus(&mut self) {
        self.focused = true;
        self.engine.reset_blink();
    }

    fn unfocus(&mut self) {
        self.focused = false;
        self.mouse_down = false;
        self.possible_double_click = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Animated for TextBox {
    fn update(&mut self, elapsed: Duration) {
        if self.possible_double_click {
            self.since_last_click += elapsed;
            if self.since_last_click > self.double_click_interval {
                self.possible_double_click = false;
            }
        }
        if self.focused {
            self.engine.update(elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyModifiers;
    use crate::text::CellMeasure;

    /// 10 px chars, 20 px lines, no padding, 100x100 widget.
    fn textbox() -> TextBox {
        let options = TextBoxOptions {
            text_size: 10,
            line_height: 20,
            padding: Padding::uniform(0.0),
            ..TextBoxOptions::default()
        };
        let mut tb =
            TextBox::with_options(Font::new("mono", CellMeasure::new(1.0)), options).unwrap();
        tb.set_size(100.0, 100.0);
        tb
    }

    #[test]
    fn test_padding_shrinks_text_area() {
        let mut tb = TextBox::new(Font::new("mono", CellMeasure::new(1.0)));
        tb.set_size(108.0, 58.0);
        assert_eq!(tb.engine().size(), (100.0, 50.0));
        tb.set_padding(Padding::new(10.0, 0.0, 10.0, 0.0));
        assert_eq!(tb.engine().size(), (88.0, 58.0));
    }

    #[test]
    fn test_click_coordinates_subtract_padding() {
        let options = TextBoxOptions {
            text_size: 10,
            line_height: 20,
            padding: Padding::uniform(5.0),
            ..TextBoxOptions::default()
        };
        let mut tb =
            TextBox::with_options(Font::new("mono", CellMeasure::new(1.0)), options).unwrap();
        tb.set_size(110.0, 110.0);
        tb.set_text("abcdef");
        tb.left_mouse_pressed(35.0, 10.0);
        assert_eq!(tb.engine().find_text_caret_position(), 3);
        assert!(tb.is_focused());
    }

    #[test]
    fn test_double_click_selects_word() {
        let mut tb = textbox();
        tb.set_text("one two");
        tb.left_mouse_pressed(55.0, 5.0);
        tb.left_mouse_released(55.0, 5.0);
        tb.update(Duration::from_millis(100));
        tb.left_mouse_pressed(55.0, 5.0);
        assert_eq!(tb.selected_text(), "two");
    }

    #[test]
    fn test_slow_second_click_is_single_click() {
        let mut tb = textbox();
        tb.set_text("one two");
        tb.left_mouse_pressed(55.0, 5.0);
        tb.left_mouse_released(55.0, 5.0);
        tb.update(Duration::from_millis(600));
        tb.left_mouse_pressed(55.0, 5.0);
        assert_eq!(tb.selected_text(), "");
    }

    #[test]
    fn test_drag_selects() {
        let mut tb = textbox();
        tb.set_text("abcdef");
        tb.left_mouse_pressed(10.0, 5.0);
        tb.mouse_moved(40.0, 5.0);
        assert_eq!(tb.selected_text(), "bcd");
        tb.left_mouse_released(40.0, 5.0);
        tb.mouse_moved(60.0, 5.0);
        assert_eq!(tb.selected_text(), "bcd");
    }

    #[test]
    fn test_clipboard_shortcuts() {
        let mut tb = textbox();
        tb.set_text("hello");
        assert!(tb.key_pressed(KeyEvent::with_ctrl(KeyCode::Char('a'))));
        assert!(tb.key_pressed(KeyEvent::with_ctrl(KeyCode::Char('x'))));
        assert_eq!(tb.clipboard(), "hello");
        assert_eq!(tb.text(), "");
        tb.key_pressed(KeyEvent::with_ctrl(KeyCode::Char('v')));
        tb.key_pressed(KeyEvent::with_ctrl(KeyCode::Char('V')));
        assert_eq!(tb.text(), "hellohello");
    }

    #[test]
    fn test_read_only_blocks_cut_and_paste_but_allows_copy() {
        let mut tb = textbox();
        tb.set_text("hello");
        tb.set_read_only(true);
        tb.key_pressed(KeyEvent::with_ctrl(KeyCode::Char('a')));
        assert!(!tb.cut());
        assert!(tb.copy());
        assert_eq!(tb.clipboard(), "hello");
        assert!(!tb.paste());
        assert!(!tb.text_entered('x'));
        tb.key_pressed(KeyEvent::key(KeyCode::Backspace));
        assert_eq!(tb.text(), "hello");
    }

    #[test]
    fn test_keys_navigate_and_edit() {
        let mut tb = textbox();
        tb.set_text("ab");
        tb.key_pressed(KeyEvent::with_ctrl(KeyCode::End));
        tb.key_pressed(KeyEvent::key(KeyCode::Enter));
        assert!(tb.text_entered('c'));
        assert_eq!(tb.text(), "ab\nc");
        tb.key_pressed(KeyEvent::new(KeyCode::Home, KeyModifiers::CTRL | KeyModifiers::SHIFT));
        assert_eq!(tb.selected_text(), "ab\nc");
        tb.key_pressed(KeyEvent::key(KeyCode::Delete));
        assert_eq!(tb.text(), "");
        assert!(!tb.key_pressed(KeyEvent::key(KeyCode::Esc)));
        assert!(!tb.key_pressed(KeyEvent::key(KeyCode::Tab)));
        assert!(!tb.key_pressed(KeyEvent::with_ctrl(KeyCode::Char('z'))));
    }

    #[test]
    fn test_control_chars_ignored_by_text_entered() {
        let mut tb = textbox();
        assert!(!tb.text_entered('\u{8}'));
        assert!(!tb.text_entered('\r'));
        assert!(tb.text_entered('\t'));
        assert_eq!(tb.text(), "\t");
    }

    #[test]
    fn test_caret_drawn_only_when_focused() {
        let mut tb = textbox();
        tb.set_text("x");
        let has_caret = |tb: &TextBox| {
            tb.draw_commands()
                .iter()
                .any(|c| matches!(c, DrawCommand::Caret(_)))
        };
        assert!(!has_caret(&tb));
        tb.focus();
        assert!(has_caret(&tb));
        tb.update(Duration::from_millis(500));
        assert!(!has_caret(&tb));
        tb.unfocus();
        assert!(!tb.is_focused());
    }

    #[test]
    fn test_wheel_scrolls() {
        let mut tb = textbox();
        tb.set_text("0\n1\n2\n3\n4\n5\n6\n7");
        tb.mouse_wheel_moved(-2, 0.0, 0.0);
        assert_eq!(tb.engine().viewport().top_line(), 2);
        tb.mouse_wheel_moved(1, 0.0, 0.0);
        assert_eq!(tb.engine().viewport().top_line(), 1);
        assert!(tb.mouse_on_widget(50.0, 50.0));
        assert!(!tb.mouse_on_widget(150.0, 50.0));
    }
}
