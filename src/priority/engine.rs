//! Priority composition.

use super::risk::{transit_risk, vital_risk};
use super::types::{PatientSnapshot, PriorityCategory, PriorityScore, TrafficAction};

/// Per-component sub-scores behind one assessment.
///
/// Kept alongside the final score so reports and tests can show where the
/// priority came from without recomputing the bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreBreakdown {
    /// Base severity from the emergency category, 0 to 5.
    pub base_severity: u8,
    /// Aggregated vital risk, 0 to 5.
    pub vital_risk: u8,
    /// Transit-time risk, 0 to 2.
    pub transit_risk: u8,
}

impl ScoreBreakdown {
    /// Unclamped sum of the three sub-scores, at most 12.
    pub fn raw_sum(&self) -> u8 {
        self.base_severity + self.vital_risk + self.transit_risk
    }
}

/// Result of one priority assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Assessment {
    /// Final dispatch priority, clamped to `0..=10`.
    pub score: PriorityScore,
    /// Priority band the score falls in.
    pub category: PriorityCategory,
    /// Traffic-signal advisory for that band.
    pub action: TrafficAction,
    /// The sub-scores the score was composed from.
    pub breakdown: ScoreBreakdown,
}

/// Composes the three sub-scores into a dispatch priority.
///
/// Stateless and side-effect free; assessments for independent patients
/// can run concurrently with no coordination. Scores above 10 are
/// truncated, not rescaled, so a maxed-out patient reads exactly 10.
///
/// # Examples
///
/// ```
/// use greenwave::priority::{
///     EmergencyType, PatientSnapshot, PriorityCategory, PriorityEngine, VitalsSample,
/// };
///
/// let snapshot = PatientSnapshot::new(
///     EmergencyType::Stroke,
///     VitalsSample::new(100, 93, 98),
///     9,
/// );
/// let assessment = PriorityEngine::assess(&snapshot);
/// assert_eq!(assessment.score.value(), 8);
/// assert_eq!(assessment.category, PriorityCategory::VeryHigh);
/// ```
pub struct PriorityEngine;

impl PriorityEngine {
    /// Scores one patient snapshot.
    pub fn assess(snapshot: &PatientSnapshot) -> Assessment {
        let breakdown = ScoreBreakdown {
            base_severity: snapshot.emergency.base_severity(),
            vital_risk: vital_risk(&snapshot.vitals),
            transit_risk: transit_risk(snapshot.eta_minutes),
        };

        let score = PriorityScore::from_raw_sum(breakdown.raw_sum());
        let category = PriorityCategory::from_score(score);

        Assessment {
            score,
            category,
            action: category.traffic_action(),
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::types::{EmergencyType, VitalsSample};
    use proptest::prelude::*;

    fn assess(emergency: &str, hr: i32, spo2: i32, prev: i32, eta: i32) -> Assessment {
        let snapshot = PatientSnapshot::new(
            EmergencyType::from_label(emergency),
            VitalsSample::new(hr, spo2, prev),
            eta,
        );
        PriorityEngine::assess(&snapshot)
    }

    #[test]
    fn test_cardiac_arrest_worst_case_saturates() {
        let a = assess("cardiac_arrest", 150, 80, 90, 20);
        assert_eq!(a.breakdown.base_severity, 5);
        assert_eq!(a.breakdown.vital_risk, 5);
        assert_eq!(a.breakdown.transit_risk, 2);
        assert_eq!(a.breakdown.raw_sum(), 12);
        assert_eq!(a.score.value(), 10);
        assert_eq!(a.category, PriorityCategory::Critical);
        assert_eq!(
            a.action.advisory(),
            "Immediate green corridor (override all signals)"
        );
    }

    #[test]
    fn test_minor_injury_stable_patient() {
        let a = assess("minor_injury", 75, 97, 97, 5);
        assert_eq!(a.breakdown.base_severity, 1);
        assert_eq!(a.breakdown.vital_risk, 0);
        assert_eq!(a.breakdown.transit_risk, 0);
        assert_eq!(a.score.value(), 1);
        assert_eq!(a.category, PriorityCategory::Low);
        assert_eq!(a.action.advisory(), "Normal traffic flow");
    }

    #[test]
    fn test_unknown_label_takes_fallback_severity() {
        let a = assess("unknown_label", 115, 92, 92, 10);
        assert_eq!(a.breakdown.base_severity, 2);
        assert_eq!(a.breakdown.vital_risk, 2);
        assert_eq!(a.breakdown.transit_risk, 1);
        assert_eq!(a.score.value(), 5);
        assert_eq!(a.category, PriorityCategory::High);
    }

    #[test]
    fn test_stroke_with_saturation_drop() {
        let a = assess("stroke", 100, 93, 98, 9);
        assert_eq!(a.breakdown.base_severity, 4);
        assert_eq!(a.breakdown.vital_risk, 3);
        assert_eq!(a.breakdown.transit_risk, 1);
        assert_eq!(a.score.value(), 8);
        assert_eq!(a.category, PriorityCategory::VeryHigh);
        assert_eq!(a.action.advisory(), "Green corridor with maximum preference");
    }

    #[test]
    fn test_extreme_inputs_stay_in_range() {
        let a = assess("cardiac_arrest", 9999, -50, 200, 100_000);
        assert!(a.score.value() <= 10);
        assert_eq!(a.score, crate::priority::PriorityScore::MAX);
    }

    #[test]
    fn test_category_and_action_agree_with_score() {
        let a = assess("trauma", 120, 88, 91, 12);
        assert_eq!(a.category, PriorityCategory::from_score(a.score));
        assert_eq!(a.action, a.category.traffic_action());
    }

    proptest! {
        #[test]
        fn prop_score_always_in_range(
            hr in -100_000..100_000i32,
            spo2 in -100_000..100_000i32,
            prev in -100_000..100_000i32,
            eta in -100_000..100_000i32,
        ) {
            let snapshot = PatientSnapshot::new(
                EmergencyType::CardiacArrest,
                VitalsSample::new(hr, spo2, prev),
                eta,
            );
            let a = PriorityEngine::assess(&snapshot);
            prop_assert!(a.score.value() <= 10);
            prop_assert_eq!(a.category, PriorityCategory::from_score(a.score));
        }

        #[test]
        fn prop_vital_risk_never_exceeds_cap(
            hr in -100_000..100_000i32,
            spo2 in -100_000..100_000i32,
            prev in -100_000..100_000i32,
        ) {
            let vitals = VitalsSample::new(hr, spo2, prev);
            prop_assert!(crate::priority::vital_risk(&vitals) <= crate::priority::VITAL_RISK_CAP);
        }

        #[test]
        fn prop_score_clamped_sum_of_breakdown(
            hr in -1000..1000i32,
            spo2 in -1000..1000i32,
            prev in -1000..1000i32,
            eta in -1000..1000i32,
        ) {
            let snapshot = PatientSnapshot::new(
                EmergencyType::Trauma,
                VitalsSample::new(hr, spo2, prev),
                eta,
            );
            let a = PriorityEngine::assess(&snapshot);
            prop_assert_eq!(a.score.value(), a.breakdown.raw_sum().min(10));
        }
    }
}
