//! Reference Tables
//!
//! Per-metal regulatory constants used by every calculator: drinking-water
//! standard limit, HMPI unit weight, oral reference dose and cancer slope factor.
//!
//! The built-in table covers Pb, Cd, Cr, Cu, Zn, Ni, As and Hg. Additional
//! metals (or revised constants) can be merged in from a JSON file, which is
//! validated entry by entry before use.

use crate::error::ReferenceError;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Unit weight used by HMPI when a metal has no explicit weight
pub const DEFAULT_UNIT_WEIGHT: f64 = 0.1;

/// Regulatory constants for a single metal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalReference {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    /// Maximum permissible concentration (mg/L)
    pub standard_limit: f64,
    /// HMPI weight; `None` falls back to [`DEFAULT_UNIT_WEIGHT`]
    #[serde(default)]
    pub unit_weight: Option<f64>,
    /// Oral reference dose; `None` excludes the metal from HQ/HI
    #[serde(default)]
    pub reference_dose: Option<f64>,
    #[serde(default)]
    pub cancer_slope_factor: f64,
}

impl MetalReference {
    fn builtin(
        symbol: &str,
        name: &str,
        standard_limit: f64,
        unit_weight: f64,
        reference_dose: f64,
        cancer_slope_factor: f64,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            standard_limit,
            unit_weight: Some(unit_weight),
            reference_dose: Some(reference_dose),
            cancer_slope_factor,
        }
    }

    /// Weight used in the HMPI weighted mean
    pub fn weight(&self) -> f64 {
        self.unit_weight.unwrap_or(DEFAULT_UNIT_WEIGHT)
    }

    /// True when the standard limit can safely be divided by
    pub fn has_usable_limit(&self) -> bool {
        self.standard_limit.is_finite() && self.standard_limit > 0.0
    }

    /// Reference dose, if present and strictly positive
    pub fn usable_reference_dose(&self) -> Option<f64> {
        self.reference_dose.filter(|rfd| rfd.is_finite() && *rfd > 0.0)
    }

    fn validate(&self) -> Result<(), ReferenceError> {
        if self.symbol.trim().is_empty() {
            return Err(ReferenceError::EmptySymbol);
        }
        let invalid = |field, expected, value| ReferenceError::InvalidEntry {
            symbol: self.symbol.clone(),
            field,
            expected,
            value,
        };

        if !self.has_usable_limit() {
            return Err(invalid("standard_limit", "> 0", self.standard_limit));
        }
        if let Some(w) = self.unit_weight {
            if !(w.is_finite() && w > 0.0) {
                return Err(invalid("unit_weight", "> 0", w));
            }
        }
        if let Some(rfd) = self.reference_dose {
            if !(rfd.is_finite() && rfd > 0.0) {
                return Err(invalid("reference_dose", "> 0", rfd));
            }
        }
        if !(self.cancer_slope_factor.is_finite() && self.cancer_slope_factor >= 0.0) {
            return Err(invalid("cancer_slope_factor", ">= 0", self.cancer_slope_factor));
        }
        Ok(())
    }
}

/// Ordered, validated set of metal references
///
/// Iteration order is the canonical evaluation order: every calculator sums
/// in this order, so results are reproducible bit for bit.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    entries: Vec<MetalReference>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl Default for ReferenceTable {
    /// WHO/BIS-derived limits with the dashboard's unit weights
    fn default() -> Self {
        let entries = vec![
            MetalReference::builtin("Pb", "Lead", 0.01, 0.063, 0.0035, 0.0085),
            MetalReference::builtin("Cd", "Cadmium", 0.003, 0.222, 0.0005, 0.38),
            MetalReference::builtin("Cr", "Chromium", 0.05, 0.013, 0.003, 0.5),
            MetalReference::builtin("Cu", "Copper", 1.3, 0.005, 0.04, 0.0),
            MetalReference::builtin("Zn", "Zinc", 5.0, 0.013, 0.3, 0.0),
            MetalReference::builtin("Ni", "Nickel", 0.02, 0.033, 0.02, 1.7),
            MetalReference::builtin("As", "Arsenic", 0.01, 0.067, 0.0003, 1.5),
            MetalReference::builtin("Hg", "Mercury", 0.002, 0.333, 0.0003, 0.0),
        ];
        let index = build_index(&entries);
        Self { entries, index }
    }
}

fn build_index(entries: &[MetalReference]) -> FxHashMap<String, usize> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.symbol.clone(), i))
        .collect()
}

impl ReferenceTable {
    /// Build a table from explicit entries, validating each one
    pub fn from_entries(entries: Vec<MetalReference>) -> Result<Self, ReferenceError> {
        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if index.insert(entry.symbol.clone(), i).is_some() {
                return Err(ReferenceError::DuplicateSymbol(entry.symbol.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Load a complete table from a JSON array of entries
    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let entries = read_entries(path)?;
        let table = Self::from_entries(entries)?;
        tracing::info!("Loaded {} metal references from {:?}", table.len(), path);
        Ok(table)
    }

    /// Merge entries from a JSON file over the built-in defaults
    ///
    /// Existing symbols are replaced in place (keeping their evaluation
    /// position); new symbols are appended.
    pub fn with_overrides(path: &Path) -> Result<Self, ReferenceError> {
        let overrides = read_entries(path)?;
        let mut table = Self::default();
        table.merge(overrides)?;
        tracing::info!(
            "Reference table: {} metals after merging {:?}",
            table.len(),
            path
        );
        Ok(table)
    }

    /// Replace or append entries, validating each one
    pub fn merge(&mut self, overrides: Vec<MetalReference>) -> Result<(), ReferenceError> {
        let mut seen = FxHashSet::default();
        for entry in overrides {
            entry.validate()?;
            if !seen.insert(entry.symbol.clone()) {
                return Err(ReferenceError::DuplicateSymbol(entry.symbol));
            }
            match self.index.get(&entry.symbol) {
                Some(&i) => self.entries[i] = entry,
                None => {
                    self.index.insert(entry.symbol.clone(), self.entries.len());
                    self.entries.push(entry);
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Option<&MetalReference> {
        self.index.get(symbol).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetalReference> {
        self.entries.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.symbol.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_entries(path: &Path) -> Result<Vec<MetalReference>, ReferenceError> {
    let contents = fs::read_to_string(path).map_err(|source| ReferenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}
