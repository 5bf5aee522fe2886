//! Probability distribution types

use serde::{Deserialize, Serialize};

/// Probability assigned to a single class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    /// Class label
    pub label: String,

    /// Probability in [0.0, 1.0]
    pub probability: f64,
}

impl ClassProbability {
    pub fn new(label: impl Into<String>, probability: f64) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }
}

/// Class probabilities in the classifier's fixed class order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution(Vec<ClassProbability>);

impl Distribution {
    pub fn new(entries: Vec<ClassProbability>) -> Self {
        Self(entries)
    }

    /// Zip class labels with their probabilities.
    ///
    /// Returns `None` when the lengths differ.
    pub fn from_parts(classes: &[String], probabilities: &[f64]) -> Option<Self> {
        if classes.len() != probabilities.len() {
            return None;
        }
        Some(Self(
            classes
                .iter()
                .zip(probabilities)
                .map(|(label, p)| ClassProbability::new(label.clone(), *p))
                .collect(),
        ))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassProbability> {
        self.0.iter()
    }

    /// Highest-probability entry; the earliest class wins ties
    pub fn top(&self) -> Option<&ClassProbability> {
        self.0.iter().fold(None, |best, entry| match best {
            Some(b) if b.probability >= entry.probability => Some(b),
            _ => Some(entry),
        })
    }

    /// Maximum probability, or 0.0 for an empty distribution
    pub fn confidence(&self) -> f64 {
        self.top().map(|e| e.probability).unwrap_or(0.0)
    }

    pub fn probability_of(&self, label: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.probability)
    }

    pub fn total(&self) -> f64 {
        self.0.iter().map(|e| e.probability).sum()
    }
}
