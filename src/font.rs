//! Font handles and lookup.
//!
//! A [`Font`] is a cheap cloneable handle around a shared [`TextMeasure`].
//! Hosts register the fonts they load in a [`FontRegistry`] and resolve them
//! by id when building widgets.

use crate::error::{Error, Result};
use crate::text::{CellMeasure, TextMeasure};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Id of the built-in monospace font.
pub const DEFAULT_FONT_ID: &str = "cell";

/// Shared handle to a font's measurement.
#[derive(Clone)]
pub struct Font {
    id: Arc<str>,
    measure: Arc<dyn TextMeasure>,
}

impl Font {
    /// Wrap a measurer under an id.
    pub fn new(id: impl Into<Arc<str>>, measure: impl TextMeasure + 'static) -> Self {
        Self {
            id: id.into(),
            measure: Arc::new(measure),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Per-char advances of `text` at a text size.
    #[must_use]
    pub fn glyph_advances(&self, text: &str, text_size: u32) -> Vec<f32> {
        self.measure.glyph_advances(text, text_size)
    }

    /// Pixel width of `text` at a text size.
    #[must_use]
    pub fn measure(&self, text: &str, text_size: u32) -> f32 {
        self.measure.measure(text, text_size)
    }

    /// Whether two handles share the same measurer.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.measure, &other.measure)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_ID, CellMeasure::default())
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font").field("id", &self.id).finish_non_exhaustive()
    }
}

/// Fonts by id.
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: HashMap<String, Font>,
}

impl FontRegistry {
    /// Create a registry holding only the built-in font.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register(Font::default());
        registry
    }

    /// Add a font, replacing any font with the same id.
    pub fn register(&mut self, font: Font) -> Option<Font> {
        self.fonts.insert(font.id().to_string(), font)
    }

    /// Look up a font by id.
    pub fn get(&self, id: &str) -> Result<Font> {
        self.fonts
            .get(id)
            .cloned()
            .ok_or_else(|| Error::resource_load(format!("font '{id}'"), "not registered"))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.fonts.contains_key(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Font> {
        self.fonts.remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
