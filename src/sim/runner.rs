//! Tick-loop execution.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::priority::Assessment;

use super::config::SimConfig;
use super::episode::Episode;
use super::source::VitalsSource;

/// Snapshot of one simulated minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TickReport {
    /// Minute number, starting at 1.
    pub minute: u32,
    /// Heart rate observed this minute, bpm.
    pub heart_rate: i32,
    /// SpO2 observed this minute, percent.
    pub spo2: i32,
    /// ETA in effect when this minute was scored.
    pub eta_minutes: i32,
    /// The assessment for this minute.
    pub assessment: Assessment,
}

/// All per-minute reports from one run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimResult {
    /// One report per tick, in order.
    pub reports: Vec<TickReport>,
}

impl SimResult {
    /// The highest-priority minute of the run.
    ///
    /// Ties go to the earliest such minute.
    pub fn peak(&self) -> Option<&TickReport> {
        self.reports.iter().reduce(|best, report| {
            if report.assessment.score > best.assessment.score {
                report
            } else {
                best
            }
        })
    }

    /// The final minute of the run.
    pub fn last(&self) -> Option<&TickReport> {
        self.reports.last()
    }
}

/// Replays one patient transport minute by minute.
///
/// Each tick draws a reading from the vitals source, scores it through an
/// [`Episode`], and decrements the ETA, saturating at zero. Seeded runs
/// reproduce exactly. Wall-clock pacing is the caller's concern; the
/// runner never sleeps.
///
/// # Examples
///
/// ```
/// use greenwave::sim::{SimConfig, SimRunner, SimulatedVitals};
///
/// let config = SimConfig::default().with_seed(7);
/// let mut source = SimulatedVitals::default();
/// let result = SimRunner::run(&config, &mut source);
/// assert_eq!(result.reports.len(), 8);
/// ```
pub struct SimRunner;

impl SimRunner {
    /// Runs the scenario to completion.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SimConfig::validate`]. Callers wanting a
    /// `Result` validate first.
    pub fn run<S: VitalsSource>(config: &SimConfig, source: &mut S) -> SimResult {
        Self::run_with_observer(config, source, |_| {})
    }

    /// Runs the scenario, handing each report to `observer` as it is
    /// produced.
    ///
    /// The observer sees every report, in minute order, before the run
    /// advances; a console harness can print live output this way.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SimConfig::validate`].
    pub fn run_with_observer<S, F>(config: &SimConfig, source: &mut S, mut observer: F) -> SimResult
    where
        S: VitalsSource,
        F: FnMut(&TickReport),
    {
        config.validate().expect("invalid SimConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut episode = Episode::new(config.emergency, config.initial_spo2);
        let mut eta_minutes = config.initial_eta_minutes;
        let mut reports = Vec::with_capacity(config.ticks as usize);

        for minute in 1..=config.ticks {
            let reading = source.observe(episode.previous_spo2(), &mut rng);
            let assessment = episode.assess(reading, eta_minutes);

            debug!(
                "minute {minute}: hr={} spo2={} eta={} score={} category={}",
                reading.heart_rate,
                reading.spo2,
                eta_minutes,
                assessment.score,
                assessment.category
            );

            let report = TickReport {
                minute,
                heart_rate: reading.heart_rate,
                spo2: reading.spo2,
                eta_minutes,
                assessment,
            };
            observer(&report);
            reports.push(report);

            eta_minutes = (eta_minutes - 1).max(0);
        }

        let result = SimResult { reports };
        if let Some(peak) = result.peak() {
            info!(
                "run complete: {} ticks, peak score {} ({}) at minute {}",
                config.ticks, peak.assessment.score, peak.assessment.category, peak.minute
            );
        }
        result
    }
}
