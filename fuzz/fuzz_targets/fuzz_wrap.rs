//! Fuzz target for word wrapping.
//!
//! Wraps arbitrary text at an arbitrary width and checks that the lines
//! rebuild the text and that every offset survives the position round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textbox_engine::text::{CellMeasure, TextMeasure, wrap_text};

fuzz_target!(|input: (&str, u16)| {
    let (text, width) = input;
    let measure = CellMeasure::default();
    let lines = wrap_text(text, f32::from(width), |s| measure.glyph_advances(s, 18));

    assert_eq!(lines.joined(), text);
    for offset in 0..=lines.len_chars() {
        assert_eq!(lines.to_flat(lines.to_position(offset)), offset);
    }
});
