//! Pluggable vitals generation.

use rand::Rng;

/// One heart-rate and SpO2 observation, before the previous reading is
/// attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalsReading {
    /// Heart rate in beats per minute.
    pub heart_rate: i32,
    /// Blood oxygen saturation, percent.
    pub spo2: i32,
}

impl VitalsReading {
    /// Creates a reading.
    pub fn new(heart_rate: i32, spo2: i32) -> Self {
        Self { heart_rate, spo2 }
    }
}

/// Produces one vitals reading per simulation tick.
///
/// The previous SpO2 reading is passed in so a source can model drift;
/// sources that ignore history (a fixed script, a constant) can discard
/// it. The randomness comes through the caller's `Rng` so seeded runs
/// reproduce exactly.
pub trait VitalsSource {
    /// Draws the next reading.
    fn observe<R: Rng>(&mut self, previous_spo2: i32, rng: &mut R) -> VitalsReading;
}

/// Randomized vitals standing in for a real patient monitor.
///
/// Heart rate is drawn uniformly from `heart_rate_min..=heart_rate_max`.
/// SpO2 performs a bounded random walk: the previous reading plus a
/// uniform drift from `spo2_drift_min..=spo2_drift_max`, clamped to
/// `spo2_floor..=spo2_ceiling`. The default drift is skewed downward, so
/// simulated patients tend to deteriorate over a run.
///
/// # Examples
///
/// ```
/// use greenwave::sim::{SimulatedVitals, VitalsSource};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut source = SimulatedVitals::default();
/// let mut rng = StdRng::seed_from_u64(7);
/// let reading = source.observe(96, &mut rng);
/// assert!((80..=150).contains(&reading.heart_rate));
/// assert!((80..=98).contains(&reading.spo2));
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedVitals {
    /// Lowest heart rate the monitor reports.
    pub heart_rate_min: i32,
    /// Highest heart rate the monitor reports.
    pub heart_rate_max: i32,
    /// Most negative per-tick SpO2 change.
    pub spo2_drift_min: i32,
    /// Most positive per-tick SpO2 change.
    pub spo2_drift_max: i32,
    /// SpO2 never drops below this.
    pub spo2_floor: i32,
    /// SpO2 never rises above this.
    pub spo2_ceiling: i32,
}

impl Default for SimulatedVitals {
    fn default() -> Self {
        Self {
            heart_rate_min: 80,
            heart_rate_max: 150,
            spo2_drift_min: -4,
            spo2_drift_max: 2,
            spo2_floor: 80,
            spo2_ceiling: 98,
        }
    }
}

impl VitalsSource for SimulatedVitals {
    fn observe<R: Rng>(&mut self, previous_spo2: i32, rng: &mut R) -> VitalsReading {
        let heart_rate = rng.random_range(self.heart_rate_min..=self.heart_rate_max);
        let drift = rng.random_range(self.spo2_drift_min..=self.spo2_drift_max);
        let spo2 = (previous_spo2 + drift).clamp(self.spo2_floor, self.spo2_ceiling);
        VitalsReading { heart_rate, spo2 }
    }
}

/// Replays a recorded sequence of readings.
///
/// Deterministic by construction; the `Rng` is ignored. Once the script
/// runs out, the final reading repeats, so a short script still drives an
/// arbitrarily long run. An empty script yields a steady 75 bpm at the
/// previous saturation.
#[derive(Debug, Clone)]
pub struct ScriptedVitals {
    script: Vec<VitalsReading>,
    cursor: usize,
}

impl ScriptedVitals {
    /// Wraps a recorded sequence.
    pub fn new(script: Vec<VitalsReading>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Index of the next reading to replay.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl VitalsSource for ScriptedVitals {
    fn observe<R: Rng>(&mut self, previous_spo2: i32, _rng: &mut R) -> VitalsReading {
        match self.script.get(self.cursor) {
            Some(&reading) => {
                if self.cursor + 1 < self.script.len() {
                    self.cursor += 1;
                }
                reading
            }
            None => VitalsReading::new(75, previous_spo2),
        }
    }
}
