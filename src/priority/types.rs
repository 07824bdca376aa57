//! Value types for the scoring pipeline.
//!
//! Everything here is an immutable value with no identity or lifecycle
//! beyond a single assessment. The caller carries state (for example the
//! previous oxygen reading) between calls; see [`crate::sim::Episode`].

use std::fmt;

/// Category of the dispatched emergency.
///
/// Parsed permissively from the dispatch label: anything outside the known
/// set becomes [`Other`](EmergencyType::Other) and scores the default base
/// severity. This keeps the scorer forward-compatible with dispatch codes
/// it has never seen.
///
/// # Examples
///
/// ```
/// use greenwave::priority::EmergencyType;
///
/// assert_eq!(EmergencyType::from_label("cardiac_arrest"), EmergencyType::CardiacArrest);
/// assert_eq!(EmergencyType::from_label("alien_abduction"), EmergencyType::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmergencyType {
    /// Cardiac arrest, base severity 5.
    CardiacArrest,
    /// Stroke, base severity 4.
    Stroke,
    /// Severe traffic or industrial accident, base severity 4.
    SevereAccident,
    /// Trauma, base severity 3.
    Trauma,
    /// Minor injury, base severity 1.
    MinorInjury,
    /// Unrecognized or unreported emergency, base severity 2.
    #[default]
    Other,
}

impl EmergencyType {
    /// Parses a dispatch label.
    ///
    /// Recognizes the snake_case labels used by the dispatch feed
    /// (`"cardiac_arrest"`, `"stroke"`, `"severe_accident"`, `"trauma"`,
    /// `"minor_injury"`). Any other label, including the empty string,
    /// maps to [`Other`](EmergencyType::Other). Never fails.
    pub fn from_label(label: &str) -> Self {
        match label {
            "cardiac_arrest" => Self::CardiacArrest,
            "stroke" => Self::Stroke,
            "severe_accident" => Self::SevereAccident,
            "trauma" => Self::Trauma,
            "minor_injury" => Self::MinorInjury,
            _ => Self::Other,
        }
    }

    /// The snake_case dispatch label for this emergency type.
    pub fn label(self) -> &'static str {
        match self {
            Self::CardiacArrest => "cardiac_arrest",
            Self::Stroke => "stroke",
            Self::SevereAccident => "severe_accident",
            Self::Trauma => "trauma",
            Self::MinorInjury => "minor_injury",
            Self::Other => "other",
        }
    }

    /// Base medical severity contributed by the emergency category alone.
    ///
    /// Fixed table: cardiac arrest 5, stroke 4, severe accident 4,
    /// trauma 3, minor injury 1, anything else 2. The fallback is a
    /// deliberate middle-ground score for unrecognized dispatch codes,
    /// not an error.
    pub fn base_severity(self) -> u8 {
        match self {
            Self::CardiacArrest => 5,
            Self::Stroke => 4,
            Self::SevereAccident => 4,
            Self::Trauma => 3,
            Self::MinorInjury => 1,
            Self::Other => 2,
        }
    }
}

impl From<&str> for EmergencyType {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl fmt::Display for EmergencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One pulse-oximeter and heart-rate observation, paired with the reading
/// that preceded it.
///
/// No history is persisted anywhere in the crate core; the caller supplies
/// `previous_spo2` on every call. Values are plain integers on purpose:
/// out-of-range input (SpO2 above 100, negative heart rate) is accepted
/// and scored by the same band logic rather than rejected.
///
/// # Examples
///
/// ```
/// use greenwave::priority::VitalsSample;
///
/// let vitals = VitalsSample::new(88, 93, 98);
/// assert_eq!(vitals.spo2_drop(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalsSample {
    /// Heart rate in beats per minute.
    pub heart_rate: i32,
    /// Current blood oxygen saturation, percent.
    pub spo2: i32,
    /// Previous blood oxygen saturation, percent.
    pub previous_spo2: i32,
}

impl VitalsSample {
    /// Creates a sample from the current observation and the prior SpO2.
    pub fn new(heart_rate: i32, spo2: i32, previous_spo2: i32) -> Self {
        Self {
            heart_rate,
            spo2,
            previous_spo2,
        }
    }

    /// Saturation drop since the previous reading.
    ///
    /// Negative when the patient improved; improvement earns no credit
    /// in the deterioration band (it scores the same as no drop).
    pub fn spo2_drop(&self) -> i32 {
        self.previous_spo2 - self.spo2
    }
}

/// Complete input to one priority assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientSnapshot {
    /// Dispatched emergency category.
    pub emergency: EmergencyType,
    /// Current vitals with the previous SpO2 reading.
    pub vitals: VitalsSample,
    /// Estimated minutes to hospital. Negative values are semantically
    /// invalid but accepted; they score zero transit risk.
    pub eta_minutes: i32,
}

impl PatientSnapshot {
    /// Bundles one assessment's inputs.
    pub fn new(emergency: EmergencyType, vitals: VitalsSample, eta_minutes: i32) -> Self {
        Self {
            emergency,
            vitals,
            eta_minutes,
        }
    }
}

/// Final dispatch priority, always in `0..=10`.
///
/// Only the composer produces these: the score is by construction the
/// clamped sum of the three sub-scores, so there is no public constructor
/// and no way to deserialize one. Compare and sort them directly; higher
/// means more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriorityScore(u8);

impl PriorityScore {
    /// The saturation ceiling: raw sums above 10 are truncated, not
    /// rescaled.
    pub const MAX: PriorityScore = PriorityScore(10);

    /// Clamps a raw sub-score sum into the score range.
    pub(crate) fn from_raw_sum(sum: u8) -> Self {
        Self(sum.min(Self::MAX.0))
    }

    /// The numeric score.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PriorityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordinal priority band, ascending urgency.
///
/// Variants are declared lowest-first so the derived ordering matches
/// urgency: `Critical` compares greater than everything else. The mapping
/// from score is total over `0..=10`, evaluated high-to-low with inclusive
/// lower bounds (9+ critical, 7+ very high, 5+ high, 3+ medium, else low).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PriorityCategory {
    /// Score 0 to 2.
    Low,
    /// Score 3 or 4.
    Medium,
    /// Score 5 or 6.
    High,
    /// Score 7 or 8.
    VeryHigh,
    /// Score 9 or 10.
    Critical,
}

impl PriorityCategory {
    /// Buckets a score into its category.
    pub fn from_score(score: PriorityScore) -> Self {
        let value = score.value();
        if value >= 9 {
            Self::Critical
        } else if value >= 7 {
            Self::VeryHigh
        } else if value >= 5 {
            Self::High
        } else if value >= 3 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// The fixed uppercase wire label ("VERY HIGH", not "VeryHigh").
    ///
    /// Downstream consumers match on these exact strings; do not reword.
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::VeryHigh => "VERY HIGH",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// The traffic-signal action advised for this priority band.
    ///
    /// Total and one-to-one: every category has exactly one action, checked
    /// by the compiler through the exhaustive match.
    pub fn traffic_action(self) -> TrafficAction {
        match self {
            Self::Critical => TrafficAction::ImmediateCorridor,
            Self::VeryHigh => TrafficAction::MaxPreferenceCorridor,
            Self::High => TrafficAction::NextCycleGreen,
            Self::Medium => TrafficAction::PartialPriority,
            Self::Low => TrafficAction::NormalFlow,
        }
    }
}

impl fmt::Display for PriorityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advisory for the signal network along the ambulance route.
///
/// Descriptive only. Emitting `ImmediateCorridor` does not flip any light;
/// it tells the (out-of-scope) signal-control integration what the dispatch
/// priority warrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrafficAction {
    /// Override every signal on the route now.
    ImmediateCorridor,
    /// Hold a corridor with maximum preference.
    MaxPreferenceCorridor,
    /// Grant green at the next signal cycle.
    NextCycleGreen,
    /// Partial priority at intersections.
    PartialPriority,
    /// No preemption.
    NormalFlow,
}

impl TrafficAction {
    /// The fixed advisory string for this action.
    ///
    /// These literals are part of the external contract and must match
    /// exactly.
    pub fn advisory(self) -> &'static str {
        match self {
            Self::ImmediateCorridor => "Immediate green corridor (override all signals)",
            Self::MaxPreferenceCorridor => "Green corridor with maximum preference",
            Self::NextCycleGreen => "Green at next signal cycle",
            Self::PartialPriority => "Partial priority at intersections",
            Self::NormalFlow => "Normal traffic flow",
        }
    }
}

impl fmt::Display for TrafficAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.advisory())
    }
}
