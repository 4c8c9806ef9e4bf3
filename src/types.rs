//! Result types shared by the evaluator, the aggregator and the API layer.

use crate::classify::{HazardLevel, MetalStatus, RiskAssessment, RiskCategory};
use crate::reading::SampleMetadata;
use crate::utils::round2;
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Inline capacity for per-sample metal lists (the built-in table has 8 metals)
pub const INLINE_METALS: usize = 8;

/// One metal's contribution to a sample, derived from reading + reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetalEvaluation {
    pub symbol: String,
    pub concentration: f64,
    pub standard_limit: f64,
    pub unit_weight: f64,
    /// concentration / standard_limit
    pub ratio: f64,
    /// ratio × 100
    pub sub_index: f64,
    /// sub_index × unit_weight
    pub weighted_value: f64,
    pub exceeded: bool,
    pub status: MetalStatus,
}

impl MetalEvaluation {
    /// Copy for reporting: ratio, sub-index and weighted value at 2 decimals
    ///
    /// Calculators always work on the unrounded evaluation.
    pub fn rounded(&self) -> Self {
        Self {
            ratio: round2(self.ratio),
            sub_index: round2(self.sub_index),
            weighted_value: round2(self.weighted_value),
            ..self.clone()
        }
    }
}

pub type MetalEvaluations = SmallVec<[MetalEvaluation; INLINE_METALS]>;

/// Opaque payload a reporting collaborator may attach (e.g. a chart image)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    /// Free-form tag such as "bar_chart"
    pub kind: String,
    pub media_type: String,
    /// Encoded payload, typically base64
    pub data: String,
}

/// Complete evaluation of one sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleResult {
    pub sample_id: String,
    pub metadata: SampleMetadata,
    pub hmpi: f64,
    pub risk_category: RiskCategory,
    pub risk: RiskAssessment,
    pub hazard_index: f64,
    pub hazard_level: HazardLevel,
    pub hazard_quotients: BTreeMap<String, f64>,
    pub cancer_risks: BTreeMap<String, f64>,
    pub total_cancer_risk: f64,
    pub hei: f64,
    pub mi: f64,
    pub pli: f64,
    pub nipi: f64,
    /// Percentage share of each metal in the HMPI weighted total
    pub contributions: BTreeMap<String, f64>,
    pub metal_evaluations: MetalEvaluations,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl SampleResult {
    /// Return a copy of this result carrying an extra attachment
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// True when at least one metal is above its standard limit
    pub fn any_exceeded(&self) -> bool {
        self.metal_evaluations.iter().any(|m| m.exceeded)
    }

    /// Symbols above their standard limit, in evaluation order
    pub fn exceeded_metals(&self) -> impl Iterator<Item = &str> {
        self.metal_evaluations
            .iter()
            .filter(|m| m.exceeded)
            .map(|m| m.symbol.as_str())
    }
}
