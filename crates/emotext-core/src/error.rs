//! Error types for Emotext

use std::path::PathBuf;

/// Result type alias using Emotext's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown to the user when a submission has no text
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to analyze.";

/// Core error type for Emotext operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Submitted text was empty or whitespace only
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,

    /// Classifier artifact does not exist at the configured path
    #[error("classifier artifact not found: {}", .0.display())]
    ArtifactNotFound(PathBuf),

    /// Classifier artifact was readable but structurally invalid
    #[error("invalid classifier artifact: {0}")]
    Artifact(String),

    /// Classifier execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new artifact validation error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the error can be shown to the user and the session continued.
    ///
    /// Everything else is a startup or internal failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message() {
        assert_eq!(Error::EmptyInput.to_string(), EMPTY_INPUT_MESSAGE);
        assert!(Error::EmptyInput.is_recoverable());
    }

    #[test]
    fn test_artifact_errors_are_fatal() {
        let missing = Error::ArtifactNotFound(PathBuf::from("models/text_emotion.json"));
        assert!(!missing.is_recoverable());
        assert!(missing.to_string().contains("models/text_emotion.json"));

        assert!(!Error::artifact("coef has 3 rows").is_recoverable());
    }
}
