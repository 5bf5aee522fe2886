//! Text analysis pipeline
//!
//! Validates submitted text, asks the classifier for a label and a
//! distribution, and attaches the display glyph and confidence.

use crate::classifier::EmotionClassifier;
use crate::glyph::GlyphTable;
use emotext_core::{Distribution, Error, Result};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Result of analyzing one submission
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Text as submitted
    pub text: String,

    /// Predicted label
    pub label: String,

    /// Display glyph for the label
    pub glyph: String,

    /// Maximum class probability
    pub confidence: f64,

    /// Probability per class, in model class order
    pub distribution: Distribution,

    /// Inference time in microseconds
    pub latency_us: u64,
}

impl Analysis {
    /// "label:glyph"
    pub fn prediction_line(&self) -> String {
        format!("{}:{}", self.label, self.glyph)
    }
}

/// Classifier plus glyph table, shared read-only for the process lifetime
#[derive(Clone)]
pub struct EmotionPipeline {
    classifier: Arc<dyn EmotionClassifier>,
    glyphs: GlyphTable,
}

impl EmotionPipeline {
    pub fn new(classifier: Arc<dyn EmotionClassifier>, glyphs: GlyphTable) -> Self {
        Self { classifier, glyphs }
    }

    pub fn classifier(&self) -> &Arc<dyn EmotionClassifier> {
        &self.classifier
    }

    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    pub fn classes(&self) -> &[String] {
        self.classifier.classes()
    }

    /// Analyze a submission.
    ///
    /// Whitespace-only text fails with [`Error::EmptyInput`] before the
    /// classifier is called.
    pub async fn analyze(&self, text: &str) -> Result<Analysis> {
        if text.trim().is_empty() {
            tracing::debug!("Rejected empty submission");
            return Err(Error::EmptyInput);
        }

        let start = Instant::now();
        let label = self.classifier.predict_label(text).await?;
        let distribution = self.classifier.predict_distribution(text).await?;
        let latency_us = start.elapsed().as_micros() as u64;

        if distribution.len() != self.classifier.classes().len() {
            return Err(Error::classifier(format!(
                "{} returned {} probabilities for {} classes",
                self.classifier.name(),
                distribution.len(),
                self.classifier.classes().len()
            )));
        }
        if let Some(entry) = distribution
            .iter()
            .find(|e| !(0.0..=1.0).contains(&e.probability))
        {
            return Err(Error::classifier(format!(
                "{} returned probability {} for '{}'",
                self.classifier.name(),
                entry.probability,
                entry.label
            )));
        }

        let glyph = self.glyphs.lookup(&label).to_string();
        if !self.glyphs.contains(&label) {
            tracing::debug!(label = %label, "No glyph for label, using default");
        }
        let confidence = distribution.confidence();

        tracing::debug!(
            label = %label,
            confidence,
            latency_us,
            "Analyzed submission"
        );

        Ok(Analysis {
            text: text.to_string(),
            label,
            glyph,
            confidence,
            distribution,
            latency_us,
        })
    }
}
