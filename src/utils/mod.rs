//! Utility modules for sample scoring
//!
//! Contains shared functionality used across multiple calculators:
//! - Normalization: reading → per-metal evaluations
//! - Rounding: deterministic reporting precision

pub mod normalization;
pub mod rounding;

// Re-export commonly used functions
pub use normalization::{evaluate_metal, normalize_reading};
pub use rounding::{round2, round_sig, round_to};
