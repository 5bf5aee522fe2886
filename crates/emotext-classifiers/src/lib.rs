//! Emotext Classifiers
//!
//! Emotion classification for short user-entered text.
//!
//! - [`EmotionClassifier`]: the model adapter trait (label + class distribution)
//! - [`LinearTextClassifier`]: a bag-of-words / tf-idf logistic regression loaded
//!   from a JSON [`ClassifierArtifact`]
//! - [`GlyphTable`]: total label -> emoji lookup with a default glyph
//! - [`EmotionPipeline`]: input validation, inference, and result assembly

pub mod artifact;
pub mod classifier;
pub mod glyph;
pub mod linear;
pub mod model_loader;
pub mod pipeline;
pub mod vectorizer;

pub use artifact::{ClassifierArtifact, Norm, VectorizerSpec};
pub use classifier::EmotionClassifier;
pub use glyph::{GlyphCoverage, GlyphTable, DEFAULT_GLYPH};
pub use linear::LinearTextClassifier;
pub use model_loader::{ModelConfig, ModelSource, DEFAULT_MODEL_PATH};
pub use pipeline::{Analysis, EmotionPipeline};
pub use vectorizer::TextVectorizer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::EmotionClassifier;
    pub use crate::glyph::GlyphTable;
    pub use crate::linear::LinearTextClassifier;
    pub use crate::model_loader::ModelConfig;
    pub use crate::pipeline::{Analysis, EmotionPipeline};
}
