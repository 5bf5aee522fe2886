//! Demo configuration

use crate::cli::CommonArgs;
use emotext_classifiers::{GlyphTable, ModelConfig, DEFAULT_MODEL_PATH};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Classifier artifact path
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Replacement for the built-in fallback glyph
    #[serde(default)]
    pub default_glyph: Option<String>,

    /// Extra or replacement label -> glyph entries
    #[serde(default)]
    pub glyphs: BTreeMap<String, String>,

    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            default_glyph: None,
            glyphs: BTreeMap::new(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(common: &CommonArgs) -> anyhow::Result<Self> {
        let mut config = Self::from_file(&common.config)?;

        if let Some(model) = &common.model {
            config.model_path = model.clone();
        }

        Ok(config)
    }

    /// Read a YAML config file, or defaults when it does not exist
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {}", path.display(), e))?;
        Ok(config)
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::from_local(&self.model_path)
    }

    /// Built-in glyph table with this config's overrides applied
    pub fn glyph_table(&self) -> emotext_core::Result<GlyphTable> {
        let table = GlyphTable::default().with_overrides(self.glyphs.clone())?;
        match &self.default_glyph {
            Some(glyph) => table.with_default(glyph.clone()),
            None => Ok(table),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}
