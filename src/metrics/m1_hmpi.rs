//! M1: Heavy Metal Pollution Index (HMPI)
//!
//! Weighted arithmetic mean of per-metal sub-indices:
//!
//! ```text
//! Qi   = (Ci / Si) × 100
//! HMPI = Σ(Qi × Wi) / Σ(Wi)
//! ```
//!
//! Wi is the metal's unit weight (0.1 when the reference entry has none).
//! A sample with no evaluable metal scores 0.
//!
//! `raw` is evaluated as 100 × Σ(ratio × Wi) / ΣWi so a panel sitting exactly
//! at its limits gives exactly 100; classification works on `raw`.

use crate::types::MetalEvaluation;
use crate::utils::round2;
use std::collections::BTreeMap;

/// M1 calculation result
#[derive(Debug, Clone, PartialEq)]
pub struct HmpiResult {
    /// Unrounded weighted mean
    pub raw: f64,
    /// Reported value (2 decimals)
    pub value: f64,
    pub total_weighted_value: f64,
    pub total_weight: f64,
    /// Percentage share of Σ(Qi × Wi) per metal (2 decimals)
    pub contributions: BTreeMap<String, f64>,
}

/// Calculate M1: HMPI over normalized metal evaluations
pub fn calculate_hmpi(evaluations: &[MetalEvaluation]) -> HmpiResult {
    let mut total_weighted_value = 0.0;
    let mut total_weighted_ratio = 0.0;
    let mut total_weight = 0.0;
    for eval in evaluations {
        total_weighted_value += eval.weighted_value;
        total_weighted_ratio += eval.ratio * eval.unit_weight;
        total_weight += eval.unit_weight;
    }

    let raw = if total_weight > 0.0 {
        total_weighted_ratio / total_weight * 100.0
    } else {
        0.0
    };

    let contributions = evaluations
        .iter()
        .map(|eval| {
            let share = contribution_share(eval.weighted_value, total_weighted_value, evaluations);
            (eval.symbol.clone(), round2(share))
        })
        .collect();

    HmpiResult {
        raw,
        value: round2(raw),
        total_weighted_value,
        total_weight,
        contributions,
    }
}

/// Percentage of the weighted total carried by one metal
///
/// When the total overflows, the overflowing metals split 100% evenly.
fn contribution_share(weighted_value: f64, total: f64, evaluations: &[MetalEvaluation]) -> f64 {
    if total.is_infinite() {
        if !weighted_value.is_infinite() {
            return 0.0;
        }
        let overflowing = evaluations.iter().filter(|e| e.weighted_value.is_infinite()).count();
        return 100.0 / overflowing as f64;
    }
    if total > 0.0 {
        weighted_value / total * 100.0
    } else {
        0.0
    }
}
