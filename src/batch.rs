//! Batch Aggregator
//!
//! Summary statistics over an ordered sequence of already-evaluated samples.
//! The risk distribution is grouped from each result's stored category, never
//! re-derived from its HMPI, so the summary cannot drift from the per-sample
//! view. Summaries are recomputed from scratch whenever the set changes.

use crate::classify::RiskCategory;
use crate::types::SampleResult;
use crate::utils::round2;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::BTreeMap;

/// Statistics over a batch of sample results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total_samples: usize,
    pub average_hmpi: f64,
    pub min_hmpi: f64,
    pub max_hmpi: f64,
    /// Population standard deviation
    pub std_hmpi: f64,
    pub risk_distribution: BTreeMap<RiskCategory, usize>,
    pub average_hazard_index: f64,
    /// Distinct metals with an evaluated (positive) reading
    pub metals_monitored: usize,
    /// Samples with at least one metal above its standard limit
    pub exceeding_samples: usize,
}

impl BatchSummary {
    fn empty() -> Self {
        Self {
            total_samples: 0,
            average_hmpi: 0.0,
            min_hmpi: 0.0,
            max_hmpi: 0.0,
            std_hmpi: 0.0,
            risk_distribution: BTreeMap::new(),
            average_hazard_index: 0.0,
            metals_monitored: 0,
            exceeding_samples: 0,
        }
    }

    /// Count for one category (0 when absent)
    pub fn count(&self, category: RiskCategory) -> usize {
        self.risk_distribution.get(&category).copied().unwrap_or(0)
    }
}

/// Summarize a batch of results
pub fn summarize(results: &[SampleResult]) -> BatchSummary {
    if results.is_empty() {
        return BatchSummary::empty();
    }

    let n = results.len() as f64;
    let hmpi_values: Vec<f64> = results.iter().map(|r| r.hmpi).collect();

    let mean = hmpi_values.iter().sum::<f64>() / n;
    let min = hmpi_values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = hmpi_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let variance = hmpi_values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

    let mut risk_distribution = BTreeMap::new();
    for result in results {
        *risk_distribution.entry(result.risk_category).or_insert(0) += 1;
    }

    let metals: FxHashSet<&str> = results
        .iter()
        .flat_map(|r| r.metal_evaluations.iter().map(|m| m.symbol.as_str()))
        .collect();

    let average_hazard_index = results.iter().map(|r| r.hazard_index).sum::<f64>() / n;

    BatchSummary {
        total_samples: results.len(),
        average_hmpi: round2(mean),
        min_hmpi: min,
        max_hmpi: max,
        std_hmpi: round2(libm::sqrt(variance)),
        risk_distribution,
        average_hazard_index: round2(average_hazard_index),
        metals_monitored: metals.len(),
        exceeding_samples: results.iter().filter(|r| r.any_exceeded()).count(),
    }
}
