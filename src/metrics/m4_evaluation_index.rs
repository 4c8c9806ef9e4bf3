//! M4: Heavy-metal Evaluation Index (HEI) and Metal Index (MI)
//!
//! Both are unweighted sums of concentration/limit ratios:
//!
//! ```text
//! HEI = Σ (Ci / Si)
//! MI  = Σ (Ci / Si)
//! ```
//!
//! MI currently uses the same formula as HEI. They are kept as separate
//! outputs because consumers display them separately; do not merge them
//! until the intended MI methodology is confirmed.

use crate::types::MetalEvaluation;
use crate::utils::round2;

/// M4 calculation result (shared shape for HEI and MI)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationIndexResult {
    pub raw: f64,
    pub value: f64,
    pub n_metals: usize,
}

fn ratio_sum(evaluations: &[MetalEvaluation]) -> EvaluationIndexResult {
    let raw: f64 = evaluations.iter().map(|e| e.ratio).sum();
    EvaluationIndexResult {
        raw,
        value: round2(raw),
        n_metals: evaluations.len(),
    }
}

/// Calculate HEI
pub fn calculate_hei(evaluations: &[MetalEvaluation]) -> EvaluationIndexResult {
    ratio_sum(evaluations)
}

/// Calculate MI
pub fn calculate_mi(evaluations: &[MetalEvaluation]) -> EvaluationIndexResult {
    ratio_sum(evaluations)
}
