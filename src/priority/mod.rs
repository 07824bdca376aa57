//! Pure dispatch priority scoring.
//!
//! A forward-only pipeline with no shared state: emergency severity, vital
//! risk, and transit risk are computed independently, summed, and clamped
//! into a [`PriorityScore`]. The score buckets into a [`PriorityCategory`],
//! and each category maps to exactly one [`TrafficAction`] advisory.
//!
//! # Design
//!
//! Every function here is total over its input type. Unknown emergency
//! labels fall back to [`EmergencyType::Other`] rather than erroring, and
//! out-of-range vitals (a heart rate of 9999, a negative ETA) produce a
//! well-defined score instead of a rejection; callers wanting strict
//! validation enforce it before scoring. The category and advisory
//! mappings are exhaustive matches, so a category without an advisory
//! cannot compile.
//!
//! # References
//!
//! - WHO (2011), "Pulse Oximetry Training Manual": hypoxemia thresholds
//!   underlying the saturation bands.
//! - START mass-casualty triage uses comparable banded vital cutoffs for
//!   rapid prioritization.

mod engine;
mod risk;
mod types;

pub use engine::{Assessment, PriorityEngine, ScoreBreakdown};
pub use risk::{
    deterioration_risk, heart_rate_risk, spo2_risk, transit_risk, vital_risk, VITAL_RISK_CAP,
};
pub use types::{
    EmergencyType, PatientSnapshot, PriorityCategory, PriorityScore, TrafficAction, VitalsSample,
};
