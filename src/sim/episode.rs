//! One patient transport as a sequence of assessments.

use crate::priority::{Assessment, EmergencyType, PatientSnapshot, PriorityEngine, VitalsSample};

use super::source::VitalsReading;

/// Threads the previous SpO2 reading between successive assessments.
///
/// The scoring core is stateless; something has to carry the prior
/// reading forward so deterioration can be detected. An `Episode` owns
/// that one piece of state for a single patient transport. After each
/// [`assess`](Episode::assess) the observed SpO2 becomes the previous
/// reading for the next call.
///
/// # Examples
///
/// ```
/// use greenwave::priority::EmergencyType;
/// use greenwave::sim::{Episode, VitalsReading};
///
/// let mut episode = Episode::new(EmergencyType::Stroke, 98);
/// // First reading drops 5 points: deterioration risk fires.
/// let first = episode.assess(VitalsReading::new(100, 93), 9);
/// assert_eq!(first.breakdown.vital_risk, 3);
/// // Second reading holds steady against the updated previous value.
/// let second = episode.assess(VitalsReading::new(100, 93), 9);
/// assert_eq!(second.breakdown.vital_risk, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Episode {
    emergency: EmergencyType,
    previous_spo2: i32,
}

impl Episode {
    /// Starts an episode from the SpO2 reading taken at dispatch.
    pub fn new(emergency: EmergencyType, initial_spo2: i32) -> Self {
        Self {
            emergency,
            previous_spo2: initial_spo2,
        }
    }

    /// The dispatched emergency category.
    pub fn emergency(&self) -> EmergencyType {
        self.emergency
    }

    /// The SpO2 value the next assessment will diff against.
    pub fn previous_spo2(&self) -> i32 {
        self.previous_spo2
    }

    /// Scores one reading and advances the stored previous SpO2.
    pub fn assess(&mut self, reading: VitalsReading, eta_minutes: i32) -> Assessment {
        let vitals = VitalsSample::new(reading.heart_rate, reading.spo2, self.previous_spo2);
        let snapshot = PatientSnapshot::new(self.emergency, vitals, eta_minutes);
        let assessment = PriorityEngine::assess(&snapshot);
        self.previous_spo2 = reading.spo2;
        assessment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_spo2_advances_after_each_call() {
        let mut episode = Episode::new(EmergencyType::Trauma, 96);
        assert_eq!(episode.previous_spo2(), 96);
        episode.assess(VitalsReading::new(90, 91), 5);
        assert_eq!(episode.previous_spo2(), 91);
        episode.assess(VitalsReading::new(90, 94), 5);
        assert_eq!(episode.previous_spo2(), 94);
    }

    #[test]
    fn test_deterioration_seen_across_ticks() {
        let mut episode = Episode::new(EmergencyType::MinorInjury, 98);
        // Tick 1: drop of 1, no deterioration risk, spo2 97 scores 0.
        let first = episode.assess(VitalsReading::new(75, 97), 5);
        assert_eq!(first.breakdown.vital_risk, 0);
        // Tick 2: drop of 5 against the tick-1 reading.
        let second = episode.assess(VitalsReading::new(75, 92), 5);
        assert_eq!(second.breakdown.vital_risk, 3); // spo2 band 1 + drop 2
    }

    #[test]
    fn test_improvement_earns_no_credit() {
        let mut episode = Episode::new(EmergencyType::Stroke, 88);
        let a = episode.assess(VitalsReading::new(75, 95), 5);
        // Saturation jumped 7 points; deterioration contributes 0, not -2.
        assert_eq!(a.breakdown.vital_risk, 0);
    }

    #[test]
    fn test_emergency_fixed_for_the_episode() {
        let mut episode = Episode::new(EmergencyType::CardiacArrest, 96);
        let a = episode.assess(VitalsReading::new(75, 96), 0);
        assert_eq!(episode.emergency(), EmergencyType::CardiacArrest);
        assert_eq!(a.breakdown.base_severity, 5);
    }
}
