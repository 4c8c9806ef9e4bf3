//! Concentration readings and sample envelopes
//!
//! A `ConcentrationReading` is the only input the engine understands: metal
//! symbol → concentration in mg/L. Strict constructors enforce the
//! non-negative constraint at the ingestion boundary; the lenient `coerce`
//! path turns bad spreadsheet cells into zeros so batch processing never stops
//! on a single bad row.

use crate::error::ReadingError;
use crate::reference::ReferenceTable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metal symbol → non-negative concentration (mg/L)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConcentrationReading {
    values: BTreeMap<String, f64>,
}

impl ConcentrationReading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a concentration, rejecting negative and non-finite values
    ///
    /// Unknown symbols are accepted here; the normalizer ignores them.
    pub fn insert(&mut self, symbol: impl Into<String>, value: f64) -> Result<(), ReadingError> {
        let symbol = symbol.into();
        check_value(&symbol, value)?;
        self.values.insert(symbol, value);
        Ok(())
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with(mut self, symbol: impl Into<String>, value: f64) -> Result<Self, ReadingError> {
        self.insert(symbol, value)?;
        Ok(self)
    }

    /// Build a reading validated against the known metal set
    pub fn strict<I, S>(pairs: I, table: &ReferenceTable) -> Result<Self, ReadingError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut reading = Self::new();
        for (symbol, value) in pairs {
            let symbol = symbol.into();
            if !table.contains(&symbol) {
                return Err(ReadingError::UnknownMetal(symbol));
            }
            reading.insert(symbol, value)?;
        }
        Ok(reading)
    }

    /// Lenient constructor for raw text cells
    ///
    /// Non-numeric, negative, NaN and infinite cells become 0.0. Never fails.
    pub fn coerce<I, S, V>(cells: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: AsRef<str>,
    {
        let values = cells
            .into_iter()
            .map(|(symbol, raw)| {
                let symbol = symbol.into();
                let value = coerce_cell(&symbol, raw.as_ref());
                (symbol, value)
            })
            .collect();
        Self { values }
    }

    /// Validate a deserialized reading (serde bypasses `insert`)
    pub fn validate(&self) -> Result<(), ReadingError> {
        self.values
            .iter()
            .try_for_each(|(symbol, &value)| check_value(symbol, value))
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.values.get(symbol).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(s, &v)| (s.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, f64)> for ConcentrationReading {
    /// Collects without validation; call [`validate`](Self::validate) when the
    /// source is untrusted.
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

fn check_value(symbol: &str, value: f64) -> Result<(), ReadingError> {
    if !value.is_finite() {
        return Err(ReadingError::NotFinite {
            symbol: symbol.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ReadingError::Negative {
            symbol: symbol.to_string(),
            value,
        });
    }
    Ok(())
}

fn coerce_cell(symbol: &str, raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => {
            tracing::warn!("Coercing invalid concentration for {}: '{}' -> 0", symbol, raw);
            0.0
        }
    }
}

/// Pass-through sample metadata (never read by the calculators)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One groundwater sample as handed over by the ingestion layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub sample_id: String,
    #[serde(default)]
    pub metadata: SampleMetadata,
    pub concentrations: ConcentrationReading,
}

impl Sample {
    pub fn new(sample_id: impl Into<String>, concentrations: ConcentrationReading) -> Self {
        Self {
            sample_id: sample_id.into(),
            metadata: SampleMetadata::default(),
            concentrations,
        }
    }

    pub fn with_metadata(mut self, metadata: SampleMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}
