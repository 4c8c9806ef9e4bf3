//! Index calculators
//!
//! Each index is implemented in its own module as a pure function over the
//! normalizer's output (or the raw reading, for the toxicological indices).
//! Every calculator returns both the unrounded `raw` value and the reported,
//! rounded one.

pub mod m1_hmpi;
pub mod m2_hazard_index;
pub mod m3_cancer_risk;
pub mod m4_evaluation_index;
pub mod m5_pollution_load;
pub mod m6_nemerow;

// Re-export metric functions
pub use m1_hmpi::{calculate_hmpi, HmpiResult};
pub use m2_hazard_index::{calculate_hazard_index, HazardIndexResult};
pub use m3_cancer_risk::{calculate_cancer_risk, CancerRiskResult, INTAKE_FACTOR};
pub use m4_evaluation_index::{calculate_hei, calculate_mi, EvaluationIndexResult};
pub use m5_pollution_load::{calculate_pli, pollution_load_index, PollutionLoadResult};
pub use m6_nemerow::{calculate_nipi, NemerowResult};

use crate::reading::ConcentrationReading;
use crate::reference::ReferenceTable;
use crate::types::MetalEvaluations;
use crate::utils::normalize_reading;

/// All index results for one reading, before classification
#[derive(Debug, Clone)]
pub struct IndexScores {
    pub evaluations: MetalEvaluations,
    pub hmpi: HmpiResult,
    pub hazard: HazardIndexResult,
    pub cancer: CancerRiskResult,
    pub hei: EvaluationIndexResult,
    pub mi: EvaluationIndexResult,
    pub pli: PollutionLoadResult,
    pub nipi: NemerowResult,
}

/// Run the normalizer and every calculator over one reading
pub fn compute_index_scores(reading: &ConcentrationReading, table: &ReferenceTable) -> IndexScores {
    let evaluations = normalize_reading(reading, table);

    IndexScores {
        hmpi: calculate_hmpi(&evaluations),
        hazard: calculate_hazard_index(reading, table),
        cancer: calculate_cancer_risk(reading, table),
        hei: calculate_hei(&evaluations),
        mi: calculate_mi(&evaluations),
        pli: calculate_pli(&evaluations),
        nipi: calculate_nipi(&evaluations),
        evaluations,
    }
}
