//! Crate configuration, loaded from JSON.
//!
//! Every field has a default, so `{}` is a valid configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, NumericError};
use crate::numerical::fibonacci::fibonacci;
use crate::numerical::primality::{PrimalityStrategy, is_prime_with};

/// Terms a Fibonacci listing may request; the last term with a `u64` value.
pub const DEFAULT_FIBONACCI_LIMIT: usize = 94;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrimerConfig {
    pub primality: PrimalityStrategy,
    pub fibonacci_limit: usize,
    pub catalog: CatalogConfig,
}

impl Default for PrimerConfig {
    fn default() -> Self {
        Self {
            primality: PrimalityStrategy::default(),
            fibonacci_limit: DEFAULT_FIBONACCI_LIMIT,
            catalog: CatalogConfig::default(),
        }
    }
}

impl PrimerConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.catalog.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::from_json_str(&raw)?;
        debug!(path = %path.display(), primality = ?config.primality, "loaded config");
        Ok(config)
    }

    /// Primality under the configured strategy.
    pub fn is_prime(&self, n: u64) -> bool {
        is_prime_with(n, self.primality)
    }

    /// First `n` Fibonacci terms, refusing listings past `fibonacci_limit`.
    pub fn fibonacci(&self, n: usize) -> Result<Vec<u64>, NumericError> {
        if n > self.fibonacci_limit {
            return Err(NumericError::LimitExceeded { requested: n, limit: self.fibonacci_limit });
        }
        fibonacci(n)
    }
}

/// Naming convention of the exercise tree:
/// `<topic>/<level_prefix>N/<exercise_prefix>slug[<solved_suffix>].ext`,
/// plus snippet templates under `<templates_dir>/[<NN_Category>/]<name>.ext`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub solved_suffix: String,
    pub level_prefix: String,
    pub exercise_prefix: String,
    pub templates_dir: String,
    /// File extension (without the dot) to language name.
    pub languages: BTreeMap<String, String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let languages = [("cpp", "C++"), ("java", "Java"), ("py", "Python")]
            .into_iter()
            .map(|(ext, lang)| (ext.to_string(), lang.to_string()))
            .collect();
        Self {
            solved_suffix: "-solved".into(),
            level_prefix: "level_".into(),
            exercise_prefix: "ex_".into(),
            templates_dir: "templates".into(),
            languages,
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solved_suffix.is_empty() {
            return Err(ConfigError::Empty { field: "catalog.solved_suffix" });
        }
        if self.level_prefix.is_empty() {
            return Err(ConfigError::Empty { field: "catalog.level_prefix" });
        }
        if self.templates_dir.is_empty() {
            return Err(ConfigError::Empty { field: "catalog.templates_dir" });
        }
        if self.languages.is_empty() {
            return Err(ConfigError::Empty { field: "catalog.languages" });
        }
        Ok(())
    }

    pub fn language_for(&self, extension: &str) -> Option<&str> {
        self.languages.get(extension).map(String::as_str)
    }
}
