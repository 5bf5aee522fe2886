//! Serialized classifier artifact
//!
//! A trained text classifier is stored as a single JSON document: a
//! bag-of-words vectorizer followed by a (multinomial or binary) logistic
//! regression. Training happens elsewhere; this module only reads and
//! validates the result.

use emotext_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Artifact format versions this build can read
pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

/// A complete classifier artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    /// Artifact format version
    #[serde(default = "default_format_version")]
    pub format_version: u32,

    /// Model name
    #[serde(default = "default_name")]
    pub name: String,

    /// Ordered class labels
    pub classes: Vec<String>,

    /// Text to feature-vector settings
    pub vectorizer: VectorizerSpec,

    /// Coefficient matrix, one row per class (or a single row for binary models)
    pub coef: Vec<Vec<f64>>,

    /// Intercept per coefficient row
    pub intercept: Vec<f64>,
}

/// Vectorizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerSpec {
    #[serde(default = "default_true")]
    pub lowercase: bool,

    /// Regex whose matches are the tokens
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,

    /// Inclusive n-gram range
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),

    /// Term to feature index
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per feature (tf-idf models only)
    #[serde(default)]
    pub idf: Option<Vec<f64>>,

    /// Replace tf with 1 + ln(tf)
    #[serde(default)]
    pub sublinear_tf: bool,

    /// Clamp counts to 1
    #[serde(default)]
    pub binary: bool,

    #[serde(default)]
    pub norm: Option<Norm>,
}

/// Row normalization applied after weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

fn default_format_version() -> u32 {
    SUPPORTED_FORMAT_VERSION
}

fn default_name() -> String {
    "text-emotion".to_string()
}

fn default_true() -> bool {
    true
}

fn default_token_pattern() -> String {
    r"(?u)\b\w\w+\b".to_string()
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

impl ClassifierArtifact {
    /// Read and validate an artifact file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ArtifactNotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse and validate an artifact from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: ClassifierArtifact = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Number of input features
    pub fn n_features(&self) -> usize {
        self.vectorizer.vocabulary.len()
    }

    /// Whether this is a two-class model stored with a single coefficient row
    pub fn is_binary(&self) -> bool {
        self.classes.len() == 2 && self.coef.len() == 1
    }

    /// Check structural consistency
    pub fn validate(&self) -> Result<()> {
        if self.format_version != SUPPORTED_FORMAT_VERSION {
            return Err(Error::artifact(format!(
                "unsupported format_version {} (expected {})",
                self.format_version, SUPPORTED_FORMAT_VERSION
            )));
        }

        self.validate_classes()?;
        self.validate_vectorizer()?;

        let expected_rows = if self.is_binary() { 1 } else { self.classes.len() };
        if self.coef.len() != expected_rows {
            return Err(Error::artifact(format!(
                "coef has {} rows for {} classes",
                self.coef.len(),
                self.classes.len()
            )));
        }
        if self.intercept.len() != expected_rows {
            return Err(Error::artifact(format!(
                "intercept has {} entries, expected {}",
                self.intercept.len(),
                expected_rows
            )));
        }

        let n_features = self.n_features();
        for (i, row) in self.coef.iter().enumerate() {
            if row.len() != n_features {
                return Err(Error::artifact(format!(
                    "coef row {} has {} columns, vocabulary has {} terms",
                    i,
                    row.len(),
                    n_features
                )));
            }
            if row.iter().any(|v| !v.is_finite()) {
                return Err(Error::artifact(format!("coef row {} is not finite", i)));
            }
        }
        if self.intercept.iter().any(|v| !v.is_finite()) {
            return Err(Error::artifact("intercept is not finite"));
        }

        Ok(())
    }

    fn validate_classes(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(Error::artifact("classes is empty"));
        }
        let mut seen = HashSet::with_capacity(self.classes.len());
        for class in &self.classes {
            if class.trim().is_empty() {
                return Err(Error::artifact("class labels must not be blank"));
            }
            if !seen.insert(class.as_str()) {
                return Err(Error::artifact(format!("duplicate class label '{}'", class)));
            }
        }
        Ok(())
    }

    fn validate_vectorizer(&self) -> Result<()> {
        let spec = &self.vectorizer;
        let (min_n, max_n) = spec.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(Error::artifact(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }

        // Feature indices must cover 0..n exactly once.
        let n_features = spec.vocabulary.len();
        let mut covered = vec![false; n_features];
        for (term, &index) in &spec.vocabulary {
            match covered.get_mut(index) {
                Some(slot) => {
                    if *slot {
                        return Err(Error::artifact(format!(
                            "vocabulary index {} is assigned twice",
                            index
                        )));
                    }
                    *slot = true;
                }
                None => {
                    return Err(Error::artifact(format!(
                        "vocabulary term '{}' has index {} outside 0..{}",
                        term, index, n_features
                    )))
                }
            }
        }

        if let Some(idf) = &spec.idf {
            if idf.len() != n_features {
                return Err(Error::artifact(format!(
                    "idf has {} entries, vocabulary has {} terms",
                    idf.len(),
                    n_features
                )));
            }
            if idf.iter().any(|v| !v.is_finite()) {
                return Err(Error::artifact("idf is not finite"));
            }
        }

        regex::Regex::new(&spec.token_pattern)
            .map_err(|e| Error::artifact(format!("invalid token_pattern: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> serde_json::Value {
        json!({
            "classes": ["joy", "sadness", "anger"],
            "vectorizer": { "vocabulary": { "happy": 0, "cry": 1 } },
            "coef": [[2.0, -1.0], [-1.0, 2.0], [0.0, 0.0]],
            "intercept": [0.0, 0.0, 0.1]
        })
    }

    fn parse(value: serde_json::Value) -> Result<ClassifierArtifact> {
        ClassifierArtifact::from_json(&value.to_string())
    }

    #[test]
    fn test_defaults_applied() {
        let artifact = parse(valid()).unwrap();
        assert_eq!(artifact.format_version, SUPPORTED_FORMAT_VERSION);
        assert!(artifact.vectorizer.lowercase);
        assert_eq!(artifact.vectorizer.ngram_range, (1, 1));
        assert_eq!(artifact.vectorizer.token_pattern, r"(?u)\b\w\w+\b");
        assert!(artifact.vectorizer.norm.is_none());
        assert_eq!(artifact.n_features(), 2);
        assert!(!artifact.is_binary());
    }

    #[test]
    fn test_binary_single_row() {
        let mut value = valid();
        value["classes"] = json!(["negative", "positive"]);
        value["coef"] = json!([[1.0, -1.0]]);
        value["intercept"] = json!([0.0]);
        assert!(parse(value).unwrap().is_binary());
    }

    #[test]
    fn test_rejects_row_count_mismatch() {
        let mut value = valid();
        value["coef"] = json!([[1.0, 0.0], [0.0, 1.0]]);
        let err = parse(value).unwrap_err();
        assert!(matches!(err, Error::Artifact(_)));
        assert!(err.to_string().contains("coef has 2 rows"));
    }

    #[test]
    fn test_rejects_column_mismatch() {
        let mut value = valid();
        value["coef"][1] = json!([1.0]);
        assert!(matches!(parse(value), Err(Error::Artifact(_))));
    }

    #[test]
    fn test_rejects_intercept_mismatch() {
        let mut value = valid();
        value["intercept"] = json!([0.0]);
        assert!(matches!(parse(value), Err(Error::Artifact(_))));
    }

    #[test]
    fn test_rejects_duplicate_and_blank_classes() {
        let mut value = valid();
        value["classes"] = json!(["joy", "joy", "anger"]);
        assert!(matches!(parse(value), Err(Error::Artifact(_))));

        let mut value = valid();
        value["classes"] = json!(["joy", " ", "anger"]);
        assert!(matches!(parse(value), Err(Error::Artifact(_))));

        let mut value = valid();
        value["classes"] = json!([]);
        value["coef"] = json!([]);
        value["intercept"] = json!([]);
        assert!(matches!(parse(value), Err(Error::Artifact(_))));
    }

    #[test]
    fn test_rejects_sparse_vocabulary() {
        let mut value = valid();
        value["vectorizer"]["vocabulary"] = json!({ "happy": 0, "cry": 5 });
        assert!(matches!(parse(value), Err(Error::Artifact(_))));

        let mut value = valid();
        value["vectorizer"]["vocabulary"] = json!({ "happy": 0, "cry": 0 });
        assert!(matches!(parse(value), Err(Error::Artifact(_))));
    }

    #[test]
    fn test_rejects_bad_vectorizer_settings() {
        let mut value = valid();
        value["vectorizer"]["idf"] = json!([1.0]);
        assert!(matches!(parse(value), Err(Error::Artifact(_))));

        let mut value = valid();
        value["vectorizer"]["ngram_range"] = json!([2, 1]);
        assert!(matches!(parse(value), Err(Error::Artifact(_))));

        let mut value = valid();
        value["vectorizer"]["token_pattern"] = json!("(unclosed");
        assert!(matches!(parse(value), Err(Error::Artifact(_))));
    }

    #[test]
    fn test_rejects_unknown_version() {
        let mut value = valid();
        value["format_version"] = json!(7);
        assert!(matches!(parse(value), Err(Error::Artifact(_))));
    }

    #[test]
    fn test_corrupt_json_is_serialization_error() {
        let err = ClassifierArtifact::from_json("{\"classes\": [").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ClassifierArtifact::from_file("/nonexistent/text_emotion.json").unwrap_err();
        assert!(matches!(err, Error::ArtifactNotFound(_)));
    }
}
