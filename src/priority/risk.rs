//! Banded risk sub-scores.
//!
//! Each function maps one clinical signal into a small bounded integer
//! contribution. Bands use inclusive lower bounds and are evaluated
//! highest-risk first. All functions accept any `i32` input; out-of-domain
//! values land in whichever band their magnitude selects rather than
//! erroring.

use super::types::VitalsSample;

/// Ceiling on the aggregated vital risk.
///
/// The three sub-risks can sum to 7 (3 + 2 + 2) but the aggregate is
/// clamped here. Observed behavior of the deployed scorer; do not change
/// without a clinical sign-off.
pub const VITAL_RISK_CAP: u8 = 5;

/// Risk contribution of the current oxygen saturation.
///
/// Below 85% scores 3, 85–89% scores 2, 90–93% scores 1, 94% and above
/// scores 0. Strictly non-increasing as saturation rises.
pub fn spo2_risk(spo2: i32) -> u8 {
    if spo2 < 85 {
        3
    } else if spo2 < 90 {
        2
    } else if spo2 < 94 {
        1
    } else {
        0
    }
}

/// Risk contribution of the heart rate.
///
/// Bradycardia (below 40) and extreme tachycardia (above 130) both score
/// 2. The branch order matters: above 130 is checked first, so the
/// moderate-tachycardia band effectively covers 111..=130 and scores 1.
/// Everything else scores 0.
pub fn heart_rate_risk(hr: i32) -> u8 {
    if hr < 40 || hr > 130 {
        2
    } else if hr > 110 {
        1
    } else {
        0
    }
}

/// Risk contribution of the saturation drop between two readings.
///
/// A drop of 5 points or more scores 2, a drop of 2 to 4 scores 1,
/// anything smaller scores 0. A negative drop (the patient improved) is
/// treated the same as no drop; improvement earns no credit.
pub fn deterioration_risk(previous_spo2: i32, spo2: i32) -> u8 {
    let drop = previous_spo2 - spo2;
    if drop >= 5 {
        2
    } else if drop >= 2 {
        1
    } else {
        0
    }
}

/// Aggregated vital risk: the three sub-risks summed and clamped to
/// [`VITAL_RISK_CAP`].
pub fn vital_risk(vitals: &VitalsSample) -> u8 {
    let raw = spo2_risk(vitals.spo2)
        + heart_rate_risk(vitals.heart_rate)
        + deterioration_risk(vitals.previous_spo2, vitals.spo2);
    raw.min(VITAL_RISK_CAP)
}

/// Risk contribution of the estimated time to hospital.
///
/// More than 15 minutes scores 2, 9 to 15 minutes scores 1, 8 minutes or
/// less (including negative estimates) scores 0.
pub fn transit_risk(eta_minutes: i32) -> u8 {
    if eta_minutes > 15 {
        2
    } else if eta_minutes > 8 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spo2_bands() {
        assert_eq!(spo2_risk(84), 3);
        assert_eq!(spo2_risk(85), 2);
        assert_eq!(spo2_risk(89), 2);
        assert_eq!(spo2_risk(90), 1);
        assert_eq!(spo2_risk(93), 1);
        assert_eq!(spo2_risk(94), 0);
        assert_eq!(spo2_risk(100), 0);
    }

    #[test]
    fn test_spo2_out_of_domain_accepted() {
        // No validation by design; the band logic still applies.
        assert_eq!(spo2_risk(-5), 3);
        assert_eq!(spo2_risk(140), 0);
    }

    #[test]
    fn test_heart_rate_bands() {
        assert_eq!(heart_rate_risk(39), 2);
        assert_eq!(heart_rate_risk(40), 0);
        assert_eq!(heart_rate_risk(110), 0);
        assert_eq!(heart_rate_risk(111), 1);
        assert_eq!(heart_rate_risk(130), 1);
        assert_eq!(heart_rate_risk(131), 2);
    }

    #[test]
    fn test_heart_rate_extreme_short_circuits() {
        // 9999 also satisfies "> 110" but the > 130 branch wins.
        assert_eq!(heart_rate_risk(9999), 2);
    }

    #[test]
    fn test_deterioration_bands() {
        assert_eq!(deterioration_risk(98, 93), 2);
        assert_eq!(deterioration_risk(98, 94), 1);
        assert_eq!(deterioration_risk(98, 96), 1);
        assert_eq!(deterioration_risk(98, 97), 0);
        assert_eq!(deterioration_risk(98, 98), 0);
    }

    #[test]
    fn test_improvement_scores_zero() {
        // Saturation went up; no negative contribution, no credit.
        assert_eq!(deterioration_risk(90, 97), 0);
    }

    #[test]
    fn test_vital_risk_clamped_at_cap() {
        // hr extreme (2) + spo2 < 85 (3) + drop >= 5 (2) = raw 7.
        let worst = VitalsSample::new(150, 80, 90);
        assert_eq!(vital_risk(&worst), VITAL_RISK_CAP);
    }

    #[test]
    fn test_vital_risk_below_cap_unclamped() {
        let mild = VitalsSample::new(115, 92, 92);
        assert_eq!(vital_risk(&mild), 2);
        let calm = VitalsSample::new(75, 97, 97);
        assert_eq!(vital_risk(&calm), 0);
    }

    #[test]
    fn test_transit_bands() {
        assert_eq!(transit_risk(16), 2);
        assert_eq!(transit_risk(15), 1);
        assert_eq!(transit_risk(9), 1);
        assert_eq!(transit_risk(8), 0);
        assert_eq!(transit_risk(0), 0);
        assert_eq!(transit_risk(-3), 0);
    }
}
