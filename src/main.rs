//! Console harness: runs the default scenario and prints a per-minute
//! report. The first CLI argument (optional) selects the emergency type
//! by its dispatch label; unknown labels score the fallback severity.

use std::env;
use std::thread;
use std::time::Duration;

use greenwave::priority::EmergencyType;
use greenwave::sim::{SimConfig, SimRunner, SimulatedVitals};

fn main() {
    env_logger::init();

    let mut config = SimConfig::default();
    if let Some(label) = env::args().nth(1) {
        config = config.with_emergency(EmergencyType::from_label(&label));
    }

    println!();
    println!("Dynamic Ambulance Priority Simulation ({})", config.emergency);
    println!();

    let mut source = SimulatedVitals::default();
    let result = SimRunner::run_with_observer(&config, &mut source, |report| {
        println!("Minute {}", report.minute);
        println!("  Heart Rate          : {} bpm", report.heart_rate);
        println!("  Oxygen Level (SpO2) : {}%", report.spo2);
        println!("  ETA to Hospital     : {} minutes", report.eta_minutes);
        println!("  Priority Score      : {}/10", report.assessment.score);
        println!("  Priority Level      : {}", report.assessment.category);
        println!("  Traffic Action      : {}", report.assessment.action);
        println!("{}", "-".repeat(55));
        // Pace the output like a live feed.
        thread::sleep(Duration::from_secs(1));
    });

    if let Some(peak) = result.peak() {
        println!(
            "Peak priority {} ({}) at minute {}",
            peak.assessment.score, peak.assessment.category, peak.minute
        );
    }
}
