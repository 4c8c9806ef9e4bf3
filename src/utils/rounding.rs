//! Deterministic rounding helpers
//!
//! Indices are reported to 2 decimals; cancer risks and hazard quotients are
//! reported to a fixed number of significant figures because they can sit
//! many orders of magnitude below 1.
//!
//! Overflowed values saturate at `f64::MAX` so they stay comparable and
//! serialize as numbers. NaN maps to 0.

/// Significant figures kept for cancer risk values
pub const CANCER_RISK_SIG_FIGS: i32 = 6;

/// Significant figures kept for per-metal hazard quotients
pub const HAZARD_QUOTIENT_SIG_FIGS: i32 = 4;

/// Beyond 2^52 an f64 carries no fractional digits
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Clamp infinities to the largest finite value of the same sign
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-f64::MAX, f64::MAX)
    }
}

/// Round to a fixed number of decimal places (half away from zero)
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return saturate(value);
    }
    let factor = libm::pow(10.0, decimals as f64);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
        return value;
    }
    libm::round(scaled) / factor
}

/// Round to 2 decimals, the reporting precision for every index
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to `sig` significant figures
///
/// Zero and NaN map to 0.0; infinities saturate.
pub fn round_sig(value: f64, sig: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return saturate(value);
    }
    let magnitude = libm::floor(libm::log10(value.abs())) as i32;
    round_to(value, sig - 1 - magnitude)
}
