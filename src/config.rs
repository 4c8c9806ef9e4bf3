//! Environment-driven configuration
//!
//! - `HMPI_REFERENCE_TABLE`: optional JSON file merged over the built-in table
//! - `HMPI_CLASSIFICATION`: `standard` (default) or `five_tier`
//! - `PORT`: HTTP port for the API server (default 3000)

use crate::classify::ClassificationScheme;
use crate::reference::ReferenceTable;
use crate::scorer::SampleEvaluator;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub reference_table: Option<PathBuf>,
    pub scheme: ClassificationScheme,
    pub port: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_table: None,
            scheme: ClassificationScheme::default(),
            port: DEFAULT_PORT,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let reference_table = lookup("HMPI_REFERENCE_TABLE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let scheme = match lookup("HMPI_CLASSIFICATION") {
            Some(raw) => raw
                .parse::<ClassificationScheme>()
                .map_err(anyhow::Error::msg)
                .context("Invalid HMPI_CLASSIFICATION")?,
            None => ClassificationScheme::default(),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            reference_table,
            scheme,
            port,
        })
    }

    /// Build the evaluator this configuration describes
    pub fn build_evaluator(&self) -> Result<SampleEvaluator> {
        let table = match &self.reference_table {
            Some(path) => ReferenceTable::with_overrides(path)
                .with_context(|| format!("Failed to load reference table overrides: {:?}", path))?,
            None => ReferenceTable::default(),
        };
        Ok(SampleEvaluator::new(table, self.scheme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("HMPI_REFERENCE_TABLE", "/etc/hmpi/metals.json"),
            ("HMPI_CLASSIFICATION", "five_tier"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.reference_table, Some(PathBuf::from("/etc/hmpi/metals.json")));
        assert_eq!(config.scheme, ClassificationScheme::FiveTier);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_values_fail_readably() {
        let err = EngineConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT"));

        let err = EngineConfig::from_lookup(lookup_from(&[("HMPI_CLASSIFICATION", "seven")])).unwrap_err();
        assert!(err.to_string().contains("HMPI_CLASSIFICATION"));
    }

    #[test]
    fn test_missing_override_file_fails() {
        let config = EngineConfig {
            reference_table: Some(PathBuf::from("/nonexistent/metals.json")),
            ..Default::default()
        };
        assert!(config.build_evaluator().is_err());
    }
}
