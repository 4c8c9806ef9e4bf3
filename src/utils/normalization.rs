//! Sample Normalizer
//!
//! Joins a concentration reading against the reference table and produces one
//! `MetalEvaluation` per metal that is present on both sides with a positive
//! concentration. Everything else is skipped silently: partial lab panels are
//! the norm, and unknown columns are the ingestion layer's business.
//!
//! Output order follows the reference table, not the reading.

use crate::classify::MetalStatus;
use crate::reading::ConcentrationReading;
use crate::reference::{MetalReference, ReferenceTable};
use crate::types::{MetalEvaluation, MetalEvaluations};

/// Evaluate a single metal against its reference entry
///
/// Returns `None` for non-positive concentrations and unusable limits, so the
/// caller never divides by zero.
pub fn evaluate_metal(reference: &MetalReference, concentration: f64) -> Option<MetalEvaluation> {
    if !(concentration.is_finite() && concentration > 0.0) || !reference.has_usable_limit() {
        return None;
    }

    let ratio = concentration / reference.standard_limit;
    let sub_index = ratio * 100.0;
    let unit_weight = reference.weight();
    let exceeded = concentration > reference.standard_limit;

    Some(MetalEvaluation {
        symbol: reference.symbol.clone(),
        concentration,
        standard_limit: reference.standard_limit,
        unit_weight,
        ratio,
        sub_index,
        weighted_value: sub_index * unit_weight,
        exceeded,
        status: MetalStatus::from_exceeded(exceeded),
    })
}

/// Normalize a reading into ordered per-metal evaluations
pub fn normalize_reading(
    reading: &ConcentrationReading,
    table: &ReferenceTable,
) -> MetalEvaluations {
    let evaluations: MetalEvaluations = table
        .iter()
        .filter_map(|reference| {
            let concentration = reading.get(&reference.symbol)?;
            evaluate_metal(reference, concentration)
        })
        .collect();

    let unknown = reading.iter().filter(|(s, _)| !table.contains(s)).count();
    if unknown > 0 {
        tracing::debug!("Ignored {} symbols with no reference entry", unknown);
    }

    evaluations
}
