//! Risk classification for computed indices.
//!
//! Two HMPI schemes are in use by downstream consumers and both are kept:
//! the three-band dashboard scheme (Excellent/Good/Poor) and the five-band
//! API scheme (Safe through Critical). Every function here is total over the
//! reals: negative or NaN input lands in the lowest band.

use serde::{Deserialize, Serialize};

// ============================================================================
// HMPI Classification
// ============================================================================

/// Upper bound (inclusive) of the "Excellent" band in the standard scheme
pub const STANDARD_EXCELLENT_MAX: f64 = 50.0;
/// Upper bound (inclusive) of the "Good" band in the standard scheme
pub const STANDARD_GOOD_MAX: f64 = 100.0;

/// Lower bounds of the five-tier bands (half-open: `min <= v < next`)
pub const FIVE_TIER_BOUNDS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// Which HMPI banding the caller wants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationScheme {
    /// Excellent ≤ 50 < Good ≤ 100 < Poor
    #[default]
    Standard,
    /// Safe / Moderate / Risky / High Risk / Critical at 25-point steps
    FiveTier,
}

impl std::str::FromStr for ClassificationScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "three_tier" | "3" => Ok(Self::Standard),
            "five_tier" | "five-tier" | "5" => Ok(Self::FiveTier),
            other => Err(format!(
                "unknown classification scheme '{}' (expected 'standard' or 'five_tier')",
                other
            )),
        }
    }
}

/// Ordinal HMPI risk category
///
/// The first three variants belong to the standard scheme, the last five to
/// the five-tier scheme. Ordering is only meaningful within one scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskCategory {
    Excellent,
    Good,
    Poor,
    Safe,
    Moderate,
    Risky,
    #[serde(rename = "High Risk")]
    HighRisk,
    Critical,
}

impl RiskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Excellent => "Excellent",
            RiskCategory::Good => "Good",
            RiskCategory::Poor => "Poor",
            RiskCategory::Safe => "Safe",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::Risky => "Risky",
            RiskCategory::HighRisk => "High Risk",
            RiskCategory::Critical => "Critical",
        }
    }

    /// Display color (named for the standard scheme, hex for five-tier)
    pub fn color(&self) -> &'static str {
        match self {
            RiskCategory::Excellent => "green",
            RiskCategory::Good => "yellow",
            RiskCategory::Poor => "red",
            RiskCategory::Safe => "#22c55e",
            RiskCategory::Moderate => "#eab308",
            RiskCategory::Risky => "#f97316",
            RiskCategory::HighRisk => "#ef4444",
            RiskCategory::Critical => "#dc2626",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskCategory::Excellent => "Heavy metal levels are low; water is suitable for drinking",
            RiskCategory::Good => "Heavy metal levels are elevated but below the critical index",
            RiskCategory::Poor => "Heavy metal pollution exceeds the critical index of 100",
            RiskCategory::Safe => "Water quality is excellent and safe for consumption",
            RiskCategory::Moderate => "Water quality is good with minor concerns",
            RiskCategory::Risky => "Water quality requires attention and monitoring",
            RiskCategory::HighRisk => "Water quality is poor and needs immediate treatment",
            RiskCategory::Critical => "Water quality is extremely poor and poses serious health risks",
        }
    }

    pub fn scheme(&self) -> ClassificationScheme {
        match self {
            RiskCategory::Excellent | RiskCategory::Good | RiskCategory::Poor => {
                ClassificationScheme::Standard
            }
            _ => ClassificationScheme::FiveTier,
        }
    }

    /// Every category of a scheme, lowest risk first
    pub fn all(scheme: ClassificationScheme) -> &'static [RiskCategory] {
        match scheme {
            ClassificationScheme::Standard => {
                &[RiskCategory::Excellent, RiskCategory::Good, RiskCategory::Poor]
            }
            ClassificationScheme::FiveTier => &[
                RiskCategory::Safe,
                RiskCategory::Moderate,
                RiskCategory::Risky,
                RiskCategory::HighRisk,
                RiskCategory::Critical,
            ],
        }
    }

    pub fn assessment(self) -> RiskAssessment {
        RiskAssessment {
            category: self,
            color: self.color(),
            description: self.description(),
        }
    }
}

/// Category plus its display attributes, as handed to presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub category: RiskCategory,
    pub color: &'static str,
    pub description: &'static str,
}

/// Classify an HMPI value under the requested scheme
pub fn classify_hmpi(hmpi: f64, scheme: ClassificationScheme) -> RiskCategory {
    match scheme {
        ClassificationScheme::Standard => classify_standard(hmpi),
        ClassificationScheme::FiveTier => classify_five_tier(hmpi),
    }
}

/// Standard three-band classification
///
/// Boundaries are inclusive on the lower band: exactly 100 is still "Good".
pub fn classify_standard(hmpi: f64) -> RiskCategory {
    if hmpi > STANDARD_GOOD_MAX {
        RiskCategory::Poor
    } else if hmpi > STANDARD_EXCELLENT_MAX {
        RiskCategory::Good
    } else {
        RiskCategory::Excellent
    }
}

/// Five-band classification with half-open bands
pub fn classify_five_tier(hmpi: f64) -> RiskCategory {
    if hmpi >= FIVE_TIER_BOUNDS[4] {
        RiskCategory::Critical
    } else if hmpi >= FIVE_TIER_BOUNDS[3] {
        RiskCategory::HighRisk
    } else if hmpi >= FIVE_TIER_BOUNDS[2] {
        RiskCategory::Risky
    } else if hmpi >= FIVE_TIER_BOUNDS[1] {
        RiskCategory::Moderate
    } else {
        RiskCategory::Safe
    }
}

// ============================================================================
// Hazard Index Classification
// ============================================================================

/// HI below this is negligible
pub const HAZARD_LOW_MAX: f64 = 0.1;
/// HI above this signals cumulative non-carcinogenic exceedance
pub const HAZARD_MODERATE_MAX: f64 = 1.0;

/// Non-carcinogenic risk level derived from the hazard index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HazardLevel {
    Low,
    Moderate,
    High,
}

impl HazardLevel {
    pub fn label(&self) -> &'static str {
        match self {
            HazardLevel::Low => "Low",
            HazardLevel::Moderate => "Moderate",
            HazardLevel::High => "High",
        }
    }
}

/// Low: HI < 0.1, Moderate: 0.1 ≤ HI ≤ 1, High: HI > 1
pub fn classify_hazard_index(hazard_index: f64) -> HazardLevel {
    if hazard_index > HAZARD_MODERATE_MAX {
        HazardLevel::High
    } else if hazard_index >= HAZARD_LOW_MAX {
        HazardLevel::Moderate
    } else {
        HazardLevel::Low
    }
}

// ============================================================================
// Per-metal status
// ============================================================================

/// Whether a single metal is within its standard limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetalStatus {
    WithinLimit,
    Exceeded,
}

impl MetalStatus {
    pub fn from_exceeded(exceeded: bool) -> Self {
        if exceeded {
            MetalStatus::Exceeded
        } else {
            MetalStatus::WithinLimit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_boundaries() {
        assert_eq!(classify_standard(0.0), RiskCategory::Excellent);
        assert_eq!(classify_standard(50.0), RiskCategory::Excellent);
        assert_eq!(classify_standard(50.01), RiskCategory::Good);
        assert_eq!(classify_standard(100.0), RiskCategory::Good);
        assert_eq!(classify_standard(100.01), RiskCategory::Poor);
    }

    #[test]
    fn test_five_tier_boundaries() {
        assert_eq!(classify_five_tier(0.0), RiskCategory::Safe);
        assert_eq!(classify_five_tier(24.99), RiskCategory::Safe);
        assert_eq!(classify_five_tier(25.0), RiskCategory::Moderate);
        assert_eq!(classify_five_tier(50.0), RiskCategory::Risky);
        assert_eq!(classify_five_tier(75.0), RiskCategory::HighRisk);
        assert_eq!(classify_five_tier(99.99), RiskCategory::HighRisk);
        assert_eq!(classify_five_tier(100.0), RiskCategory::Critical);
        assert_eq!(classify_five_tier(1.0e9), RiskCategory::Critical);
    }

    #[test]
    fn test_total_over_odd_inputs() {
        assert_eq!(classify_standard(-5.0), RiskCategory::Excellent);
        assert_eq!(classify_standard(f64::NAN), RiskCategory::Excellent);
        assert_eq!(classify_five_tier(f64::NAN), RiskCategory::Safe);
        assert_eq!(classify_hazard_index(f64::NAN), HazardLevel::Low);
    }

    #[test]
    fn test_hazard_index_bands() {
        assert_eq!(classify_hazard_index(0.05), HazardLevel::Low);
        assert_eq!(classify_hazard_index(0.1), HazardLevel::Moderate);
        assert_eq!(classify_hazard_index(1.0), HazardLevel::Moderate);
        assert_eq!(classify_hazard_index(1.2), HazardLevel::High);
    }

    #[test]
    fn test_schemes_cover_own_categories() {
        for scheme in [ClassificationScheme::Standard, ClassificationScheme::FiveTier] {
            for category in RiskCategory::all(scheme) {
                assert_eq!(category.scheme(), scheme);
            }
        }
    }

    #[test]
    fn test_scheme_parsing() {
        assert_eq!("standard".parse::<ClassificationScheme>(), Ok(ClassificationScheme::Standard));
        assert_eq!("FIVE_TIER".parse::<ClassificationScheme>(), Ok(ClassificationScheme::FiveTier));
        assert!("seven".parse::<ClassificationScheme>().is_err());
    }

    #[test]
    fn test_serialized_labels() {
        let json = serde_json::to_string(&RiskCategory::HighRisk).unwrap();
        assert_eq!(json, "\"High Risk\"");
        assert_eq!(RiskCategory::HighRisk.label(), "High Risk");
    }
}
