//! Emotext Core
//!
//! Types and error handling shared across the Emotext crates.
//!
//! This crate provides:
//! - The error type and `Result` alias used by the classifier and demo crates
//! - Probability distribution types produced by emotion classifiers

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ClassProbability, Distribution};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{ClassProbability, Distribution};
}
