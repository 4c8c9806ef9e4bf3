//! M3: Incremental Lifetime Cancer Risk (CR)
//!
//! ```text
//! CRi = Ci × CSFi × 0.001
//! ```
//!
//! The 0.001 factor normalizes a 1 L/day intake. Metals with a zero slope
//! factor are listed with CR = 0 so consumers can tell "evaluated, not
//! carcinogenic" apart from "not measured".
//!
//! Values are tiny (1e-4 .. 1e-8), so they are rounded to significant figures
//! rather than decimal places.

use crate::reading::ConcentrationReading;
use crate::reference::ReferenceTable;
use crate::utils::rounding::{round_sig, CANCER_RISK_SIG_FIGS};
use std::collections::BTreeMap;

/// Daily intake normalization (1 L/day)
pub const INTAKE_FACTOR: f64 = 0.001;

/// M3 calculation result
#[derive(Debug, Clone, PartialEq)]
pub struct CancerRiskResult {
    /// Unrounded Σ CR
    pub raw_total: f64,
    /// Reported Σ CR
    pub total: f64,
    /// Per-metal CR
    pub risks: BTreeMap<String, f64>,
}

/// Calculate M3: per-metal and total cancer risk
pub fn calculate_cancer_risk(
    reading: &ConcentrationReading,
    table: &ReferenceTable,
) -> CancerRiskResult {
    let mut raw_total = 0.0;
    let mut risks = BTreeMap::new();

    for reference in table.iter() {
        let Some(concentration) = reading.get(&reference.symbol) else {
            continue;
        };
        if !(concentration.is_finite() && concentration > 0.0) {
            continue;
        }

        let cr = concentration * reference.cancer_slope_factor * INTAKE_FACTOR;
        raw_total += cr;
        risks.insert(reference.symbol.clone(), round_sig(cr, CANCER_RISK_SIG_FIGS));
    }

    CancerRiskResult {
        raw_total,
        total: round_sig(raw_total, CANCER_RISK_SIG_FIGS),
        risks,
    }
}
