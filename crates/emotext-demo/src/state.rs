use crate::config::DemoConfig;
use emotext_classifiers::{EmotionClassifier, EmotionPipeline, GlyphTable};
use std::sync::Arc;

/// Shared application state.
///
/// Built once at startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: EmotionPipeline,
}

impl AppState {
    pub fn new(classifier: Arc<dyn EmotionClassifier>, glyphs: GlyphTable) -> Self {
        Self {
            pipeline: EmotionPipeline::new(classifier, glyphs),
        }
    }

    /// Load the classifier named by the config and build the glyph table.
    ///
    /// Any failure here means the demo cannot serve requests.
    pub fn from_config(config: &DemoConfig) -> anyhow::Result<Self> {
        let classifier = config.model_config().load()?;
        let glyphs = config.glyph_table()?;

        let coverage = glyphs.coverage(classifier.classes());
        for label in &coverage.unmapped {
            tracing::warn!(
                label = %label,
                glyph = glyphs.default_glyph(),
                "Model class has no glyph; the default will be shown"
            );
        }

        Ok(Self::new(classifier, glyphs))
    }
}
