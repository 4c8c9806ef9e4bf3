//! M2: Hazard Quotient (HQ) and Hazard Index (HI)
//!
//! Non-carcinogenic risk screening:
//!
//! ```text
//! HQi = Ci / RfDi
//! HI  = Σ HQi
//! ```
//!
//! Every metal with a positive concentration and a reference dose counts,
//! regardless of whether it has a usable standard limit for HMPI.
//! HI > 1 signals cumulative exceedance.

use crate::reading::ConcentrationReading;
use crate::reference::ReferenceTable;
use crate::utils::round2;
use crate::utils::rounding::{round_sig, HAZARD_QUOTIENT_SIG_FIGS};
use std::collections::BTreeMap;

/// M2 calculation result
#[derive(Debug, Clone, PartialEq)]
pub struct HazardIndexResult {
    /// Unrounded Σ HQ
    pub raw: f64,
    /// Reported HI (2 decimals)
    pub value: f64,
    /// Per-metal HQ (4 significant figures)
    pub quotients: BTreeMap<String, f64>,
}

/// Calculate M2: hazard quotients and their sum
pub fn calculate_hazard_index(
    reading: &ConcentrationReading,
    table: &ReferenceTable,
) -> HazardIndexResult {
    let mut raw = 0.0;
    let mut quotients = BTreeMap::new();

    for reference in table.iter() {
        let Some(concentration) = reading.get(&reference.symbol) else {
            continue;
        };
        if !(concentration.is_finite() && concentration > 0.0) {
            continue;
        }
        let Some(rfd) = reference.usable_reference_dose() else {
            continue;
        };

        let hq = concentration / rfd;
        raw += hq;
        quotients.insert(reference.symbol.clone(), round_sig(hq, HAZARD_QUOTIENT_SIG_FIGS));
    }

    HazardIndexResult {
        raw,
        value: round2(raw),
        quotients,
    }
}
