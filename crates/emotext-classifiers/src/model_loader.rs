//! Model loading
//!
//! The classifier is loaded once at startup and handed out as a shared,
//! read-only trait object.

use crate::classifier::EmotionClassifier;
use crate::linear::LinearTextClassifier;
use emotext_core::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Default artifact location, relative to the working directory
pub const DEFAULT_MODEL_PATH: &str = "models/text_emotion.json";

/// Source location for the classifier artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Load from local file system
    LocalPath(PathBuf),
}

/// Configuration for loading a classifier
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Source of the model
    pub source: ModelSource,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::from_local(DEFAULT_MODEL_PATH)
    }
}

impl ModelConfig {
    /// Create a new model configuration from local path
    pub fn from_local(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ModelSource::LocalPath(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        match &self.source {
            ModelSource::LocalPath(path) => path,
        }
    }

    /// Load the classifier.
    ///
    /// A missing or malformed artifact is an error the caller should treat as fatal.
    pub fn load(&self) -> Result<Arc<dyn EmotionClassifier>> {
        let start = Instant::now();
        let path = self.path();
        let model = LinearTextClassifier::load(path)?;

        tracing::info!(
            path = %path.display(),
            model = model.name(),
            classes = model.classes().len(),
            features = model.n_features(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Loaded classifier artifact"
        );

        Ok(Arc::new(model))
    }
}
