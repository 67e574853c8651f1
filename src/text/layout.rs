//! Draw geometry for the render collaborator.
//!
//! The engine does not draw. Each frame the host asks for a list of
//! [`DrawCommand`]s in text-area coordinates and paints them in order:
//! selection highlights, then glyph runs, then the caret.

use crate::text::position::TextPosition;
use crate::text::viewport::ViewportState;
use crate::text::wrap::LineModel;

/// Axis-aligned rectangle in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Where a glyph run sits relative to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunKind {
    BeforeSelection,
    Selection,
    AfterSelection,
}

/// A positioned piece of one line drawn in a single style.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphRun {
    pub kind: RunKind,
    /// Wrapped line index.
    pub line: usize,
    /// Column of the first char of the run.
    pub column: usize,
    /// Top-left corner of the run.
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// One thing to paint.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SelectionRect(Rect),
    Text(GlyphRun),
    Caret(Rect),
}

impl DrawCommand {
    /// Move the command by an offset, e.g. from text-area to widget coordinates.
    #[must_use]
    pub fn translated(mut self, dx: f32, dy: f32) -> Self {
        match &mut self {
            Self::SelectionRect(rect) | Self::Caret(rect) => {
                rect.x += dx;
                rect.y += dy;
            }
            Self::Text(run) => {
                run.x += dx;
                run.y += dy;
            }
        }
        self
    }
}

/// Everything the layout pass needs from the engine.
pub(crate) struct LayoutInput<'a> {
    pub lines: &'a LineModel,
    pub viewport: ViewportState,
    /// Normalized selection as flat offsets.
    pub selection: (usize, usize),
    pub caret: TextPosition,
    pub line_height: f32,
    pub caret_width: f32,
    pub caret_visible: bool,
    /// Highlight width for a selected newline.
    pub newline_width: f32,
}

/// Build the draw list for the visible lines.
pub(crate) fn build(input: &LayoutInput<'_>) -> Vec<DrawCommand> {
    let lines = input.lines;
    let (sel_start, sel_end) = input.selection;
    let top = input.viewport.top_line();
    let bottom = input.viewport.bottom_line(lines.line_count());

    let mut highlights = Vec::new();
    let mut runs = Vec::new();

    for (row, idx) in (top..=bottom).enumerate() {
        let Some(line) = lines.line(idx) else {
            break;
        };
        let y = row as f32 * input.line_height;
        let len = line.len_chars();
        let a = sel_start.saturating_sub(line.start()).min(len);
        let b = sel_end.saturating_sub(line.start()).min(len);

        if sel_start < sel_end {
            let newline_selected =
                line.has_hard_break() && sel_start <= line.end() && sel_end > line.end();
            let extra = if newline_selected {
                input.newline_width
            } else {
                0.0
            };
            let x0 = line.column_x(a);
            let width = line.column_x(b) - x0 + extra;
            if width > 0.0 {
                highlights.push(DrawCommand::SelectionRect(Rect::new(
                    x0,
                    y,
                    width,
                    input.line_height,
                )));
            }
        }

        for (kind, from, to) in [
            (RunKind::BeforeSelection, 0, a),
            (RunKind::Selection, a, b),
            (RunKind::AfterSelection, b, len),
        ] {
            if from < to {
                runs.push(DrawCommand::Text(GlyphRun {
                    kind,
                    line: idx,
                    column: from,
                    x: line.column_x(from),
                    y,
                    text: line.slice(from, to),
                }));
            }
        }
    }

    let mut commands = highlights;
    commands.append(&mut runs);

    if input.caret_visible && input.viewport.contains(input.caret.line) {
        if let Some(line) = lines.line(input.caret.line) {
            let row = input.caret.line - top;
            commands.push(DrawCommand::Caret(Rect::new(
                line.column_x(input.caret.column),
                row as f32 * input.line_height,
                input.caret_width,
                input.line_height,
            )));
        }
    }

    commands
}
