//! Property-based tests for wrapping and position mapping.
//!
//! Uses proptest to verify invariants that must hold across all inputs.

use proptest::prelude::*;
use textbox_engine::text::{CellMeasure, TextEditEngine, TextMeasure, wrap_text};
use textbox_engine::{Font, TextPosition};

// ============================================================================
// Strategies
// ============================================================================

/// Words, spaces and newlines, weighted towards wrap-relevant shapes.
fn wrappable_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => "[a-z]{1,12}",
            2 => Just(" ".to_string()),
            1 => Just("  ".to_string()),
            1 => Just("\n".to_string()),
            1 => Just("\t".to_string()),
            1 => "[漢字éü]{1,3}",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn width() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.0f32), 5.0f32..400.0]
}

fn advances(s: &str) -> Vec<f32> {
    CellMeasure::new(0.6).glyph_advances(s, 18)
}

// ============================================================================
// Wrapping Properties
// ============================================================================

proptest! {
    /// Joining the lines (plus hard breaks) gives back the buffer.
    #[test]
    fn wrap_reconstructs_text(text in wrappable_text(), w in width()) {
        let lines = wrap_text(&text, w, advances);
        prop_assert_eq!(lines.joined(), text.clone());
        prop_assert_eq!(lines.len_chars(), text.chars().count());
    }

    /// Same input, same output.
    #[test]
    fn wrap_is_deterministic(text in wrappable_text(), w in width()) {
        prop_assert_eq!(wrap_text(&text, w, advances), wrap_text(&text, w, advances));
    }

    /// Rewrapping the joined lines is a no-op.
    #[test]
    fn wrap_is_idempotent(text in wrappable_text(), w in width()) {
        let once = wrap_text(&text, w, advances);
        let twice = wrap_text(&once.joined(), w, advances);
        prop_assert_eq!(once, twice);
    }

    /// Visible width fits unless the line is one over-wide char.
    #[test]
    fn wrap_respects_width(text in wrappable_text(), w in 5.0f32..400.0) {
        let lines = wrap_text(&text, w, advances);
        for line in lines.lines() {
            let visible: Vec<char> = line.text().trim_end().chars().collect();
            if visible.len() > 1 {
                prop_assert!(
                    line.visible_width() <= w + 1e-2,
                    "line {:?} is {} wide at width {}", line.text(), line.visible_width(), w
                );
            }
        }
    }

    /// Every line except the last of a paragraph is non-empty.
    #[test]
    fn soft_lines_are_nonempty(text in wrappable_text(), w in width()) {
        let lines = wrap_text(&text, w, advances);
        let all = lines.lines();
        for (i, line) in all.iter().enumerate() {
            let paragraph_end = line.has_hard_break() || i + 1 == all.len();
            if !paragraph_end {
                prop_assert!(!line.is_empty());
            }
        }
    }
}

// ============================================================================
// Position Mapping Properties
// ============================================================================

proptest! {
    /// to_flat(to_position(o)) == o for every offset.
    #[test]
    fn flat_position_round_trip(text in wrappable_text(), w in width()) {
        let lines = wrap_text(&text, w, advances);
        for offset in 0..=lines.len_chars() {
            let pos = lines.to_position(offset);
            prop_assert_eq!(lines.to_flat(pos), offset);
        }
    }

    /// Positions are ordered the same way as their offsets.
    #[test]
    fn to_position_is_monotonic(text in wrappable_text(), w in width()) {
        let lines = wrap_text(&text, w, advances);
        let positions: Vec<TextPosition> =
            (0..=lines.len_chars()).map(|o| lines.to_position(o)).collect();
        for pair in positions.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// Clicks anywhere land on a valid position.
    #[test]
    fn column_at_x_is_valid(
        text in wrappable_text(),
        w in width(),
        line in 0usize..50,
        x in -50.0f32..500.0,
    ) {
        let lines = wrap_text(&text, w, advances);
        let line = line.min(lines.line_count() - 1);
        let column = lines.column_at_x(line, x);
        prop_assert!(column <= lines.max_caret_column(line));
        prop_assert_eq!(
            lines.clamp(TextPosition::new(line, column)),
            TextPosition::new(line, column)
        );
    }
}

// ============================================================================
// Engine Properties
// ============================================================================

#[derive(Clone, Debug)]
enum Op {
    Type(char),
    Paste(String),
    Backspace,
    Delete,
    Left(bool),
    Right(bool),
    Up(bool),
    Down(bool),
    Click(f32, f32),
    Drag(f32, f32),
    SelectAll,
    Resize(f32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => prop::char::range('a', 'z').prop_map(Op::Type),
        1 => Just(Op::Type(' ')),
        1 => Just(Op::Type('\n')),
        1 => "[a-z \n]{0,10}".prop_map(Op::Paste),
        1 => Just(Op::Backspace),
        1 => Just(Op::Delete),
        1 => any::<bool>().prop_map(Op::Left),
        1 => any::<bool>().prop_map(Op::Right),
        1 => any::<bool>().prop_map(Op::Up),
        1 => any::<bool>().prop_map(Op::Down),
        1 => (-20.0f32..200.0, -20.0f32..120.0).prop_map(|(x, y)| Op::Click(x, y)),
        1 => (-20.0f32..200.0, -20.0f32..120.0).prop_map(|(x, y)| Op::Drag(x, y)),
        1 => Just(Op::SelectAll),
        1 => (0.0f32..200.0).prop_map(Op::Resize),
    ]
}

fn apply(engine: &mut TextEditEngine, op: &Op) {
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
        Op::Left(extend) => engine.move_left(*extend),
        Op::Right(extend) => engine.move_right(*extend),
        Op::Up(extend) => engine.move_up(*extend),
        Op::Down(extend) => engine.move_down(*extend),
        Op::Click(x, y) => engine.place_caret(*x, *y),
        Op::Drag(x, y) => engine.select_text(*x, *y),
        Op::SelectAll => engine.select_all(),
        Op::Resize(w) => engine.set_size(*w, 100.0),
    }
}

proptest! {
    /// After any sequence of operations the caret, anchor and viewport are
    /// valid for the current line model, and the limit holds.
    #[test]
    fn engine_state_stays_valid(ops in prop::collection::vec(op(), 0..60), max_chars in 0usize..30) {
        let mut engine = TextEditEngine::new(Font::new("mono", CellMeasure::new(1.0)));
        engine.set_text_size(10);
        engine.set_line_height(20);
        engine.set_size(100.0, 100.0);
        engine.set_max_chars(max_chars);

        for op in &ops {
            apply(&mut engine, op);

            let lines = engine.lines();
            prop_assert_eq!(lines.joined(), engine.text());
            let sel = engine.selection();
            prop_assert_eq!(lines.clamp(sel.caret), sel.caret);
            prop_assert_eq!(lines.clamp(sel.anchor), sel.anchor);
            prop_assert!(
                engine.viewport().contains(sel.caret.line),
                "caret scrolled out after {:?}", op
            );
            if max_chars > 0 {
                prop_assert!(engine.len_chars() <= max_chars);
            }
        }
    }

    /// Read-only engines never change, whatever the input.
    #[test]
    fn read_only_never_changes(text in "[a-z \n]{0,30}", ops in prop::collection::vec(op(), 0..40)) {
        let mut engine = TextEditEngine::new(Font::new("mono", CellMeasure::new(1.0)));
        engine.set_size(100.0, 100.0);
        engine.set_text(&text);
        engine.set_read_only(true);
        for op in ops.iter().filter(|op| !matches!(op, Op::Resize(_))) {
            apply(&mut engine, op);
        }
        prop_assert_eq!(engine.text(), text);
        prop_assert!(!engine.delete_selected_characters());
    }
}
