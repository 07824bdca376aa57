//! Scenario configuration.

use thiserror::Error;

use crate::priority::EmergencyType;

/// Rejected scenario configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimConfigError {
    /// A run must cover at least one minute.
    #[error("ticks must be at least 1")]
    ZeroTicks,

    /// The starting saturation must be a plausible percentage.
    #[error("initial_spo2 must be in 0..=100, got {0}")]
    InitialSpo2OutOfRange(i32),

    /// The starting ETA cannot be negative.
    #[error("initial_eta_minutes must be non-negative, got {0}")]
    NegativeEta(i32),
}

/// Configuration for one simulated transport.
///
/// The default is the reference scenario: a stroke patient starting at
/// SpO2 96% with 15 minutes to hospital, simulated for 8 minutes.
///
/// # Examples
///
/// ```
/// use greenwave::priority::EmergencyType;
/// use greenwave::sim::SimConfig;
///
/// let config = SimConfig::default()
///     .with_emergency(EmergencyType::CardiacArrest)
///     .with_initial_eta_minutes(22)
///     .with_ticks(12)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Dispatched emergency category.
    pub emergency: EmergencyType,

    /// SpO2 reading taken at dispatch, percent.
    pub initial_spo2: i32,

    /// Minutes to hospital at the start of the run. Decrements each tick,
    /// saturating at zero.
    pub initial_eta_minutes: i32,

    /// Number of simulated minutes.
    pub ticks: u32,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            emergency: EmergencyType::Stroke,
            initial_spo2: 96,
            initial_eta_minutes: 15,
            ticks: 8,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn with_emergency(mut self, emergency: EmergencyType) -> Self {
        self.emergency = emergency;
        self
    }

    pub fn with_initial_spo2(mut self, spo2: i32) -> Self {
        self.initial_spo2 = spo2;
        self
    }

    pub fn with_initial_eta_minutes(mut self, eta_minutes: i32) -> Self {
        self.initial_eta_minutes = eta_minutes;
        self
    }

    pub fn with_ticks(mut self, ticks: u32) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// The scoring core accepts out-of-domain numbers by design; the
    /// harness does not, because a scenario that starts from nonsense
    /// produces a nonsense run.
    pub fn validate(&self) -> Result<(), SimConfigError> {
        if self.ticks == 0 {
            return Err(SimConfigError::ZeroTicks);
        }
        if !(0..=100).contains(&self.initial_spo2) {
            return Err(SimConfigError::InitialSpo2OutOfRange(self.initial_spo2));
        }
        if self.initial_eta_minutes < 0 {
            return Err(SimConfigError::NegativeEta(self.initial_eta_minutes));
        }
        Ok(())
    }
}
