//! Emotion label to display glyph lookup

use emotext_core::{Error, Result};
use std::collections::BTreeMap;

/// Glyph shown for labels missing from the table
pub const DEFAULT_GLYPH: &str = "❓";

const BUILTIN_GLYPHS: &[(&str, &str)] = &[
    ("anger", "😠"),
    ("disgust", "🤮"),
    ("fear", "😨😱"),
    ("happy", "🤗"),
    ("joy", "😂"),
    ("love", "😍"),
    ("neutral", "😐"),
    ("sad", "😔"),
    ("sadness", "😔"),
    ("shame", "😳"),
    ("surprise", "😮"),
];

/// Immutable label -> glyph mapping with a default for unmapped labels.
///
/// Labels are matched exactly. Every glyph, including the default, is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: BTreeMap<String, String>,
    default_glyph: String,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self {
            glyphs: BUILTIN_GLYPHS
                .iter()
                .map(|(label, glyph)| (label.to_string(), glyph.to_string()))
                .collect(),
            default_glyph: DEFAULT_GLYPH.to_string(),
        }
    }
}

impl GlyphTable {
    /// Table with no labels; every lookup yields the default glyph
    pub fn empty() -> Self {
        Self {
            glyphs: BTreeMap::new(),
            default_glyph: DEFAULT_GLYPH.to_string(),
        }
    }

    /// Add or replace a label's glyph
    pub fn with_glyph(mut self, label: impl Into<String>, glyph: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let glyph = glyph.into();
        if glyph.trim().is_empty() {
            return Err(Error::config(format!("glyph for label '{}' is empty", label)));
        }
        self.glyphs.insert(label, glyph);
        Ok(self)
    }

    /// Replace the fallback glyph
    pub fn with_default(mut self, glyph: impl Into<String>) -> Result<Self> {
        let glyph = glyph.into();
        if glyph.trim().is_empty() {
            return Err(Error::config("default glyph is empty"));
        }
        self.default_glyph = glyph;
        Ok(self)
    }

    /// Apply several overrides at once
    pub fn with_overrides<I, L, G>(self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, G)>,
        L: Into<String>,
        G: Into<String>,
    {
        overrides
            .into_iter()
            .try_fold(self, |table, (label, glyph)| table.with_glyph(label, glyph))
    }

    /// Glyph for `label`, or the default glyph
    pub fn lookup(&self, label: &str) -> &str {
        self.glyphs
            .get(label)
            .map(String::as_str)
            .unwrap_or(&self.default_glyph)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.glyphs.contains_key(label)
    }

    pub fn default_glyph(&self) -> &str {
        &self.default_glyph
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Report which of `classes` would fall back to the default glyph
    pub fn coverage(&self, classes: &[String]) -> GlyphCoverage {
        let (mapped, unmapped): (Vec<String>, Vec<String>) = classes
            .iter()
            .cloned()
            .partition(|label| self.contains(label));
        GlyphCoverage { mapped, unmapped }
    }
}

/// How a model's class vocabulary lines up with a glyph table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphCoverage {
    pub mapped: Vec<String>,
    pub unmapped: Vec<String>,
}

impl GlyphCoverage {
    pub fn is_complete(&self) -> bool {
        self.unmapped.is_empty()
    }
}
