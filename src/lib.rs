//! Dynamic ambulance dispatch priority scoring.
//!
//! Computes a 0-10 dispatch priority for a single ambulance patient from
//! three independent signals and maps it to a traffic-signal preemption
//! advisory:
//!
//! - **Severity lookup**: the emergency category sets a base score
//!   (cardiac arrest 5 down to minor injury 1, unknown labels 2).
//! - **Vital risk**: oxygen saturation, heart rate, and saturation drop
//!   between successive readings, aggregated and capped at 5.
//! - **Transit risk**: estimated minutes to hospital, 0 to 2.
//!
//! The three sub-scores are summed and clamped to 10, bucketed into one of
//! five priority categories, and each category carries exactly one fixed
//! advisory string (from "Normal traffic flow" up to "Immediate green
//! corridor (override all signals)").
//!
//! # Architecture
//!
//! The [`priority`] module is the scoring core: pure, stateless,
//! deterministic functions with no I/O. Everything stateful lives in
//! [`sim`]: a pluggable vitals source (randomized by default, scriptable
//! for tests), an episode wrapper that threads the previous oxygen reading
//! between assessments, and a tick-loop runner that replays one transport
//! minute by minute. Callers that bring their own telemetry can use the
//! core directly and ignore the simulation layer entirely.
//!
//! The advisory strings describe intent only; this crate does not talk to
//! signal controllers.

pub mod priority;
pub mod sim;
