//! Linear text classifier
//!
//! Vectorizer output is scored by a logistic regression: multinomial softmax
//! over per-class scores, or a sigmoid over a single score for binary
//! artifacts.

use crate::artifact::ClassifierArtifact;
use crate::classifier::EmotionClassifier;
use crate::vectorizer::TextVectorizer;
use async_trait::async_trait;
use emotext_core::{Distribution, Error, Result};
use std::path::Path;

pub struct LinearTextClassifier {
    name: String,
    classes: Vec<String>,
    vectorizer: TextVectorizer,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
    binary: bool,
}

impl LinearTextClassifier {
    /// Load and validate an artifact file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let artifact = ClassifierArtifact::from_file(path)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self> {
        artifact.validate()?;
        let vectorizer = TextVectorizer::from_spec(&artifact.vectorizer)?;
        let binary = artifact.is_binary();

        Ok(Self {
            name: artifact.name,
            classes: artifact.classes,
            vectorizer,
            coef: artifact.coef,
            intercept: artifact.intercept,
            binary,
        })
    }

    pub fn n_features(&self) -> usize {
        self.vectorizer.n_features()
    }

    /// Raw decision scores, one per coefficient row.
    ///
    /// Fails with [`Error::Classifier`] when a score overflows.
    pub fn decision_function(&self, text: &str) -> Result<Vec<f64>> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        let features = self.vectorizer.transform(text);
        let scores: Vec<f64> = self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, bias)| {
                features
                    .iter()
                    .fold(*bias, |acc, &(index, value)| acc + row[index] * value)
            })
            .collect();

        if let Some(i) = scores.iter().position(|s| !s.is_finite()) {
            return Err(Error::classifier(format!(
                "{}: decision score {} is not finite",
                self.name, i
            )));
        }
        Ok(scores)
    }

    /// Class probabilities aligned with `classes`
    pub fn probabilities(&self, text: &str) -> Result<Vec<f64>> {
        let scores = self.decision_function(text)?;
        if self.binary {
            let positive = sigmoid(scores[0]);
            Ok(vec![1.0 - positive, positive])
        } else {
            Ok(softmax(&scores))
        }
    }
}

#[async_trait]
impl EmotionClassifier for LinearTextClassifier {
    async fn predict_label(&self, text: &str) -> Result<String> {
        // Picked from the probabilities so the label matches `Distribution::top`
        let probabilities = self.probabilities(text)?;
        Ok(self.classes[argmax(&probabilities)].clone())
    }

    async fn predict_distribution(&self, text: &str) -> Result<Distribution> {
        let probabilities = self.probabilities(text)?;
        Distribution::from_parts(&self.classes, &probabilities).ok_or_else(|| {
            Error::classifier(format!(
                "model produced {} probabilities for {} classes",
                probabilities.len(),
                self.classes.len()
            ))
        })
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Index of the largest value; the first index wins ties
fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[best] {
            best = i;
        }
    }
    best
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
