//! Simulation harness around the scoring core.
//!
//! Everything stateful lives here: a pluggable [`VitalsSource`]
//! (randomized by default, scriptable for deterministic tests), an
//! [`Episode`] that threads the previous SpO2 reading between successive
//! assessments, and a [`SimRunner`] that replays one transport minute by
//! minute. Callers with real telemetry can skip this module entirely and
//! drive [`crate::priority`] directly.

mod config;
mod episode;
mod runner;
mod source;

pub use config::{SimConfig, SimConfigError};
pub use episode::Episode;
pub use runner::{SimResult, SimRunner, TickReport};
pub use source::{ScriptedVitals, SimulatedVitals, VitalsReading, VitalsSource};
