//! Text to sparse feature vector

use crate::artifact::{Norm, VectorizerSpec};
use emotext_core::{Error, Result};
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

/// Compiled form of a [`VectorizerSpec`]
#[derive(Debug, Clone)]
pub struct TextVectorizer {
    lowercase: bool,
    token_pattern: Regex,
    ngram_range: (usize, usize),
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    sublinear_tf: bool,
    binary: bool,
    norm: Option<Norm>,
}

impl TextVectorizer {
    pub fn from_spec(spec: &VectorizerSpec) -> Result<Self> {
        let token_pattern = Regex::new(&spec.token_pattern)
            .map_err(|e| Error::artifact(format!("invalid token_pattern: {}", e)))?;

        Ok(Self {
            lowercase: spec.lowercase,
            token_pattern,
            ngram_range: spec.ngram_range,
            vocabulary: spec.vocabulary.clone(),
            idf: spec.idf.clone(),
            sublinear_tf: spec.sublinear_tf,
            binary: spec.binary,
            norm: spec.norm,
        })
    }

    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    /// Split text into terms (n-grams joined by a single space)
    pub fn terms(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        let words: Vec<&str> = self
            .token_pattern
            .find_iter(&text)
            .map(|m| m.as_str())
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n {
            if n > words.len() {
                break;
            }
            for window in words.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }

    /// Weighted, normalized feature vector as (index, value) pairs sorted by index.
    ///
    /// Terms outside the vocabulary are dropped, so the result may be empty.
    pub fn transform(&self, text: &str) -> Vec<(usize, f64)> {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.terms(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut features: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, tf)| {
                let mut value = if self.binary {
                    1.0
                } else if self.sublinear_tf {
                    1.0 + tf.ln()
                } else {
                    tf
                };
                if let Some(idf) = &self.idf {
                    value *= idf[index];
                }
                (index, value)
            })
            .collect();

        if let Some(norm) = self.norm {
            let scale = match norm {
                Norm::L1 => features.iter().map(|(_, v)| v.abs()).sum::<f64>(),
                Norm::L2 => features.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
            };
            if scale > 0.0 {
                for (_, v) in features.iter_mut() {
                    *v /= scale;
                }
            }
        }

        features
    }
}
