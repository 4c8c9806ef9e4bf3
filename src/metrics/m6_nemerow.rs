//! M6: Nemerow Integrated Pollution Index (NIPI)
//!
//! Blends the worst single contamination ratio with the average one:
//!
//! ```text
//! NIPI = sqrt((max(CFi)² + mean(CFi)²) / 2)
//! ```

use crate::types::MetalEvaluation;
use crate::utils::round2;

/// M6 calculation result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NemerowResult {
    pub raw: f64,
    pub value: f64,
    pub max_ratio: f64,
    pub mean_ratio: f64,
}

/// Calculate M6: NIPI over normalized metal evaluations
pub fn calculate_nipi(evaluations: &[MetalEvaluation]) -> NemerowResult {
    if evaluations.is_empty() {
        return NemerowResult {
            raw: 0.0,
            value: 0.0,
            max_ratio: 0.0,
            mean_ratio: 0.0,
        };
    }

    let max_ratio = evaluations.iter().map(|e| e.ratio).fold(0.0, f64::max);
    let mean_ratio = evaluations.iter().map(|e| e.ratio).sum::<f64>() / evaluations.len() as f64;
    let raw = libm::sqrt((max_ratio * max_ratio + mean_ratio * mean_ratio) / 2.0);

    NemerowResult {
        raw,
        value: round2(raw),
        max_ratio,
        mean_ratio,
    }
}
