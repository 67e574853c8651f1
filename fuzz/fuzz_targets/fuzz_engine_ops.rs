//! Fuzz target for editing sequences.
//!
//! Replays arbitrary operations against an engine; nothing may panic and
//! the caret must stay on a valid position.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textbox_engine::{CellMeasure, Font, TextEditEngine};

#[derive(Arbitrary, Debug)]
enum Op {
    Type(char),
    Paste(String),
    Backspace,
    Delete,
    Move { dir: u8, extend: bool },
    Click { x: i16, y: i16, drag: bool },
    DoubleClick { x: i16, y: i16 },
    SelectAll,
    Resize { width: u16, height: u16 },
    Scroll(i8),
    MaxChars(u8),
    ReadOnly(bool),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut engine = TextEditEngine::new(Font::new("mono", CellMeasure::new(1.0)));
    engine.set_size(120.0, 80.0);

    for op in ops.iter().take(256) {
        match op {
            Op::Type(c) => {
                engine.insert_char(*c);
            }
            Op::Paste(s) => {
                engine.insert_text(s);
            }
            Op::Backspace => {
                engine.backspace();
            }
            Op::Delete => {
                engine.delete_forward();
            }
            Op::Move { dir, extend } => match dir % 10 {
                0 => engine.move_left(*extend),
                1 => engine.move_right(*extend),
                2 => engine.move_up(*extend),
                3 => engine.move_down(*extend),
                4 => engine.move_line_start(*extend),
                5 => engine.move_line_end(*extend),
                6 => engine.move_word_left(*extend),
                7 => engine.move_word_right(*extend),
                8 => engine.move_page_up(*extend),
                _ => engine.move_page_down(*extend),
            },
            Op::Click { x, y, drag } => {
                if *drag {
                    engine.select_text(f32::from(*x), f32::from(*y));
                } else {
                    engine.place_caret(f32::from(*x), f32::from(*y));
                }
            }
            Op::DoubleClick { x, y } => engine.select_word_at(f32::from(*x), f32::from(*y)),
            Op::SelectAll => engine.select_all(),
            Op::Resize { width, height } => {
                engine.set_size(f32::from(*width), f32::from(*height));
            }
            Op::Scroll(delta) => engine.scroll_by(isize::from(*delta)),
            Op::MaxChars(n) => {
                engine.set_max_chars(usize::from(*n));
            }
            Op::ReadOnly(flag) => engine.set_read_only(*flag),
        }

        let lines = engine.lines();
        let caret = engine.caret();
        assert_eq!(lines.clamp(caret), caret);
        assert_eq!(lines.joined(), engine.text());
        let _ = engine.draw_commands();
    }
});
