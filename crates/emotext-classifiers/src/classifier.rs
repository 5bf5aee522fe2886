//! Classifier trait

use async_trait::async_trait;
use emotext_core::{Distribution, Result};

/// Trait for emotion classifiers.
///
/// Implementations are loaded once and then shared read-only, so every
/// method takes `&self` and must be deterministic for a given input.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Highest-scoring class for the text
    async fn predict_label(&self, text: &str) -> Result<String>;

    /// One probability per class, in the order returned by [`classes`](Self::classes)
    async fn predict_distribution(&self, text: &str) -> Result<Distribution>;

    /// Ordered class vocabulary
    fn classes(&self) -> &[String];

    /// Get the classifier name
    fn name(&self) -> &str;
}
