//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading wage supplement
//! rule sets from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::WageSupplementRule;

use super::types::{SupplementMetadata, SupplementsConfig};

/// Loads and provides access to a wage supplement rule set.
///
/// The `ConfigLoader` reads the YAML configuration from a directory,
/// validates every rule entry at load time (unknown categories or kinds and
/// half-set clock windows fail the load, they are never silently skipped)
/// and hands out the converted domain rules.
///
/// # Directory Structure
///
/// ```text
/// config/crewplan/
/// └── supplements.yaml   # Rule set metadata and supplement rules
/// ```
///
/// # Example
///
/// ```no_run
/// use crewplan_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/crewplan").unwrap();
/// for rule in loader.rules() {
///     println!("{} (priority {})", rule.name, rule.priority);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: SupplementMetadata,
    rules: Vec<WageSupplementRule>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/crewplan")
    ///
    /// # Errors
    ///
    /// Returns an error if `supplements.yaml` is missing, contains invalid
    /// YAML, or contains a rule entry that fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let supplements_path = path.as_ref().join("supplements.yaml");
        let config = Self::load_yaml::<SupplementsConfig>(&supplements_path)?;

        let rules = config
            .supplements
            .into_iter()
            .map(|entry| entry.into_rule())
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self {
            metadata: config.metadata,
            rules,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &SupplementMetadata {
        &self.metadata
    }

    /// Returns the validated supplement rules.
    pub fn rules(&self) -> &[WageSupplementRule] {
        &self.rules
    }
}
