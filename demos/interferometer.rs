//! Runs a few interferometer columns and prints what the detector sees.
//!
//! `RUST_LOG=qpath=trace cargo run --example interferometer` shows every step.

use qpath::{
    GateError, MeasurementOutcome, Simulator, SimulatorConfig, State, check_transition_table,
    parse_gate_sequence,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), GateError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qpath=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    check_transition_table(None)?;

    let simulator = Simulator::with_config(SimulatorConfig {
        detector_dwell: true,
        ..Default::default()
    })?;
    let mut rng = rand::rng();

    let columns = [
        (State::Zero, "HZH"),  // interference onto the other path
        (State::Zero, "XX"),   // double flip cancels
        (State::One, "NXHZ"),  // decoherence wins
        (State::Zero, "H"),    // open beam splitter: a coin toss
        (State::One, "h?z!"),  // lenient parsing drops `?` and `!`
    ];

    for (initial, notation) in columns {
        let sequence = parse_gate_sequence(notation, simulator.config().sequence_length);
        let trajectory = simulator.run(initial, &sequence);

        println!("\n--- {:?} from {} ---", sequence, initial);
        println!("Circuit:    {}", sequence);
        println!("Trajectory: {}", trajectory);

        let shots: Vec<MeasurementOutcome> =
            (0..8).map(|_| simulator.measure(&trajectory, &mut rng)).collect();
        let blue = shots.iter().filter(|o| **o == MeasurementOutcome::Blue).count();
        println!(
            "Detector:   {} [{}] (8 shots, {} blue)",
            shots[0],
            shots[0].color(),
            blue
        );
    }

    Ok(())
}
