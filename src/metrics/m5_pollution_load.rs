//! M5: Pollution Load Index (PLI)
//!
//! Geometric mean of contamination ratios over the evaluated metals:
//!
//! ```text
//! PLI = (Π CFi)^(1/n),  CFi = Ci / Si
//! ```
//!
//! Computed as exp(mean(ln CFi)) to avoid overflow/underflow of the product.
//! PLI = 0 when no metal is evaluated.

use crate::types::MetalEvaluation;
use crate::utils::round2;

/// M5 calculation result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutionLoadResult {
    pub raw: f64,
    pub value: f64,
}

/// Geometric mean of positive ratios (0.0 for an empty slice)
pub fn pollution_load_index(ratios: &[f64]) -> f64 {
    if ratios.is_empty() {
        return 0.0;
    }
    let log_sum: f64 = ratios.iter().map(|&r| libm::log(r)).sum();
    libm::exp(log_sum / ratios.len() as f64)
}

/// Calculate M5: PLI over normalized metal evaluations
pub fn calculate_pli(evaluations: &[MetalEvaluation]) -> PollutionLoadResult {
    let ratios: Vec<f64> = evaluations.iter().map(|e| e.ratio).collect();
    let raw = pollution_load_index(&ratios);
    PollutionLoadResult {
        raw,
        value: round2(raw),
    }
}
