//! HMPI Scorer Rust Implementation
//!
//! Deterministic heavy-metal scoring for groundwater samples: converts
//! per-metal concentration readings into pollution and toxicological indices
//! (HMPI, HI/HQ, CR, HEI, MI, PLI, NIPI), classifies them, and aggregates
//! batch statistics.
//!
//! - `reference/`: per-metal regulatory constants
//! - `reading/`: concentration readings and sample envelopes
//! - `utils/`: normalization and rounding
//! - `metrics/`: individual index calculators (M1-M6)
//! - `classify/`: risk bands
//! - `scorer/`: per-sample evaluation (sequential and Rayon-parallel batches)
//! - `batch/`: batch statistics
//!
//! Everything is synchronous, pure and free of shared mutable state.

pub mod error;
pub mod reference;
pub mod reading;
pub mod types;
pub mod utils;
pub mod metrics;
pub mod classify;
pub mod scorer;
pub mod batch;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{ReadingError, ReferenceError};
pub use reference::{MetalReference, ReferenceTable, DEFAULT_UNIT_WEIGHT};
pub use reading::{ConcentrationReading, Sample, SampleMetadata};
pub use types::{Attachment, MetalEvaluation, SampleResult};
pub use classify::{ClassificationScheme, HazardLevel, MetalStatus, RiskAssessment, RiskCategory};
pub use scorer::{evaluate, SampleEvaluator};
pub use batch::{summarize, BatchSummary};
pub use config::EngineConfig;
pub use metrics::*;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
