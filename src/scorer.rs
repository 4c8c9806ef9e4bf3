//! Sample Evaluator - Main coordinator for scoring groundwater samples
//!
//! Runs the normalizer and all index calculators for one sample and attaches
//! the classifications. Includes both sequential and parallel (Rayon) batch
//! implementations; both return results in input order.
//!
//! Evaluation never fails: an empty or fully unrecognized reading yields an
//! all-zero result in the lowest risk band.

use crate::classify::{classify_hazard_index, classify_hmpi, ClassificationScheme};
use crate::metrics::compute_index_scores;
use crate::reading::{ConcentrationReading, Sample, SampleMetadata};
use crate::reference::ReferenceTable;
use crate::types::{MetalEvaluation, SampleResult};
use rayon::prelude::*;

/// Stateless sample evaluator (reference table + classification scheme)
#[derive(Debug, Clone, Default)]
pub struct SampleEvaluator {
    table: ReferenceTable,
    scheme: ClassificationScheme,
}

impl SampleEvaluator {
    pub fn new(table: ReferenceTable, scheme: ClassificationScheme) -> Self {
        Self { table, scheme }
    }

    /// Same table, different HMPI banding
    pub fn with_scheme(&self, scheme: ClassificationScheme) -> Self {
        Self {
            table: self.table.clone(),
            scheme,
        }
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    pub fn scheme(&self) -> ClassificationScheme {
        self.scheme
    }

    /// Evaluate a bare reading
    pub fn evaluate(&self, sample_id: &str, reading: &ConcentrationReading) -> SampleResult {
        self.evaluate_with_metadata(sample_id, SampleMetadata::default(), reading)
    }

    /// Evaluate a sample, carrying its metadata through to the result
    pub fn evaluate_sample(&self, sample: &Sample) -> SampleResult {
        self.evaluate_with_metadata(
            &sample.sample_id,
            sample.metadata.clone(),
            &sample.concentrations,
        )
    }

    fn evaluate_with_metadata(
        &self,
        sample_id: &str,
        metadata: SampleMetadata,
        reading: &ConcentrationReading,
    ) -> SampleResult {
        let scores = compute_index_scores(reading, &self.table);

        if scores.evaluations.is_empty() {
            tracing::debug!("Sample {}: no evaluable metals", sample_id);
        }

        // Bands apply to the unrounded indices; rounding is for reporting only
        let risk_category = classify_hmpi(scores.hmpi.raw, self.scheme);

        SampleResult {
            sample_id: sample_id.to_string(),
            metadata,
            hmpi: scores.hmpi.value,
            risk_category,
            risk: risk_category.assessment(),
            hazard_index: scores.hazard.value,
            hazard_level: classify_hazard_index(scores.hazard.raw),
            hazard_quotients: scores.hazard.quotients,
            cancer_risks: scores.cancer.risks,
            total_cancer_risk: scores.cancer.total,
            hei: scores.hei.value,
            mi: scores.mi.value,
            pli: scores.pli.value,
            nipi: scores.nipi.value,
            contributions: scores.hmpi.contributions,
            metal_evaluations: scores.evaluations.iter().map(MetalEvaluation::rounded).collect(),
            attachments: Vec::new(),
        }
    }

    /// Evaluate samples one after another
    pub fn evaluate_batch_sequential(&self, samples: &[Sample]) -> Vec<SampleResult> {
        samples.iter().map(|s| self.evaluate_sample(s)).collect()
    }

    /// Evaluate samples IN PARALLEL using Rayon
    ///
    /// Samples are independent, so they are spread across the global pool.
    /// `collect` on an indexed parallel iterator keeps input order.
    pub fn evaluate_batch(&self, samples: &[Sample]) -> Vec<SampleResult> {
        tracing::debug!("Evaluating batch of {} samples", samples.len());
        samples.par_iter().map(|s| self.evaluate_sample(s)).collect()
    }
}

/// Evaluate one reading with the built-in table and standard classification
pub fn evaluate(sample_id: &str, reading: &ConcentrationReading) -> SampleResult {
    SampleEvaluator::default().evaluate(sample_id, reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{HazardLevel, RiskCategory};

    fn reading(pairs: &[(&str, f64)]) -> ConcentrationReading {
        pairs.iter().map(|(s, v)| (s.to_string(), *v)).collect()
    }

    #[test]
    fn test_empty_reading_is_all_zero() {
        let result = evaluate("empty", &ConcentrationReading::new());
        assert_eq!(result.hmpi, 0.0);
        assert_eq!(result.hazard_index, 0.0);
        assert_eq!(result.hei, 0.0);
        assert_eq!(result.mi, 0.0);
        assert_eq!(result.pli, 0.0);
        assert_eq!(result.nipi, 0.0);
        assert_eq!(result.total_cancer_risk, 0.0);
        assert_eq!(result.risk_category, RiskCategory::Excellent);
        assert_eq!(result.hazard_level, HazardLevel::Low);
        assert!(result.metal_evaluations.is_empty());
    }

    #[test]
    fn test_unrecognized_reading_five_tier() {
        let evaluator = SampleEvaluator::default().with_scheme(ClassificationScheme::FiveTier);
        let result = evaluator.evaluate("unknown", &reading(&[("Fe", 0.4), ("Mn", 0.2)]));
        assert_eq!(result.hmpi, 0.0);
        assert_eq!(result.risk_category, RiskCategory::Safe);
        assert_eq!(result.risk.color, "#22c55e");
    }

    #[test]
    fn test_idempotent() {
        let r = reading(&[("Pb", 0.025), ("Cd", 0.008), ("Cr", 0.12), ("Cu", 0.85), ("Zn", 2.3), ("As", 0.015)]);
        let a = evaluate("S1", &r);
        let b = evaluate("S1", &r);
        assert_eq!(a, b);
        assert_eq!(a.hmpi.to_bits(), b.hmpi.to_bits());
        assert_eq!(a.pli.to_bits(), b.pli.to_bits());
    }

    #[test]
    fn test_metadata_passes_through() {
        let metadata = SampleMetadata {
            location: Some("Delhi Yamuna Basin".to_string()),
            latitude: Some(28.7041),
            longitude: Some(77.1025),
            ..Default::default()
        };
        let sample = Sample::new("S2", reading(&[("Pb", 0.018)])).with_metadata(metadata.clone());
        let result = SampleEvaluator::default().evaluate_sample(&sample);
        assert_eq!(result.sample_id, "S2");
        assert_eq!(result.metadata, metadata);
    }

    #[test]
    fn test_parallel_matches_sequential_order() {
        let samples: Vec<Sample> = (0..64)
            .map(|i| Sample::new(format!("S{}", i), reading(&[("Pb", 0.001 * i as f64), ("Hg", 0.0005)])))
            .collect();
        let evaluator = SampleEvaluator::default();
        let parallel = evaluator.evaluate_batch(&samples);
        let sequential = evaluator.evaluate_batch_sequential(&samples);
        assert_eq!(parallel, sequential);
        assert_eq!(parallel[10].sample_id, "S10");
    }

    #[test]
    fn test_category_uses_unrounded_hmpi() {
        // Pb ratio 1.00004: raw HMPI 100.004 reports as 100.00 but is past the Good band
        let result = evaluate("boundary", &reading(&[("Pb", 0.0100004)]));
        assert_eq!(result.hmpi, 100.0);
        assert_eq!(result.risk_category, RiskCategory::Poor);
        assert_eq!(result.exceeded_metals().collect::<Vec<_>>(), vec!["Pb"]);
    }

    #[test]
    fn test_hazard_level_uses_unrounded_index() {
        // Cr: 0.0030012 / 0.003 = 1.0004
        let result = evaluate("hazard", &reading(&[("Cr", 0.0030012)]));
        assert_eq!(result.hazard_index, 1.0);
        assert_eq!(result.hazard_level, HazardLevel::High);
        assert_eq!(result.hazard_level.label(), "High");
    }

    #[test]
    fn test_extreme_concentration_saturates() {
        let low = evaluate("low", &reading(&[("Pb", 1.0)]));
        let high = evaluate("high", &reading(&[("Pb", 1e307)]));

        assert_eq!(low.hmpi, 10000.0);
        assert!(high.hmpi >= low.hmpi);
        assert_eq!(high.hmpi, f64::MAX);
        assert_eq!(high.risk_category, RiskCategory::Poor);
        assert_eq!(high.hazard_level, HazardLevel::High);
        assert!(high.hei >= low.hei && high.nipi >= low.nipi && high.pli >= low.pli);
        assert_eq!(high.metal_evaluations[0].ratio, f64::MAX);

        let json = serde_json::to_value(&high).unwrap();
        assert_eq!(json["hmpi"].as_f64(), Some(f64::MAX));
    }

    #[test]
    fn test_reported_evaluations_are_rounded() {
        // Pb: ratio 1.234, sub-index 123.4, weighted 7.7742
        let result = evaluate("rounded", &reading(&[("Pb", 0.01234)]));
        let pb = &result.metal_evaluations[0];
        assert_eq!(pb.concentration, 0.01234);
        assert_eq!(pb.ratio, 1.23);
        assert_eq!(pb.sub_index, 123.4);
        assert_eq!(pb.weighted_value, 7.77);
        assert_eq!(result.hmpi, 123.4);
    }
}
