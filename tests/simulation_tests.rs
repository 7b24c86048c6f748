// tests/simulation_tests.rs

use qpath::{
    Gate, GateError, GateSequence, GateSequenceBuilder, MeasurementOutcome, Simulator,
    SimulatorConfig, State, build_trajectory, measure, validate_trajectory,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Helper to check a full trajectory against the expected states
fn check_trajectory(
    initial: State,
    seq: &GateSequence,
    expected: &[State],
) -> Result<(), GateError> {
    let trajectory = build_trajectory(initial, seq);
    println!("{:?} from {}: {}", seq, initial, trajectory);
    assert_eq!(trajectory.states(), expected, "Trajectory mismatch for {:?}", seq);
    validate_trajectory(&trajectory, seq)
}

#[test]
fn test_scenario_interference() -> Result<(), GateError> {
    // ZERO, [H, Z, H, _] -> |0> -> |+> -> |-> -> |1> -> |1>
    let seq = GateSequenceBuilder::new()
        .gate(Gate::H)
        .gate(Gate::Z)
        .gate(Gate::H)
        .empty()
        .build();
    check_trajectory(
        State::Zero,
        &seq,
        &[State::Zero, State::Plus, State::Minus, State::One, State::One],
    )?;

    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..100 {
        assert_eq!(measure(State::One, &mut rng), MeasurementOutcome::Red);
    }
    Ok(())
}

#[test]
fn test_scenario_double_flip_cancels() -> Result<(), GateError> {
    let seq = GateSequence::from_slots(vec![Some(Gate::X), Some(Gate::X), None, None]);
    check_trajectory(
        State::Zero,
        &seq,
        &[State::Zero, State::One, State::Zero, State::Zero, State::Zero],
    )
}

#[test]
fn test_scenario_noise_decoheres() -> Result<(), GateError> {
    let seq = GateSequence::from_gates([Gate::Noise, Gate::X, Gate::H, Gate::Z]);
    check_trajectory(
        State::One,
        &seq,
        &[State::One, State::Decohered, State::Decohered, State::Decohered, State::Decohered],
    )?;

    let trajectory = build_trajectory(State::One, &seq);
    let final_state = trajectory.final_state().expect("non-empty trajectory");
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(measure(final_state, &mut rng), MeasurementOutcome::Yellow);
    Ok(())
}

#[test]
fn test_empty_column_is_identity() -> Result<(), GateError> {
    let seq = GateSequence::default();
    check_trajectory(
        State::One,
        &seq,
        &[State::One, State::One, State::One, State::One, State::One],
    )
}

#[test]
fn test_measurement_is_deterministic_on_basis_states() {
    let mut rng = rand::rng();
    for _ in 0..1_000 {
        assert_eq!(measure(State::Zero, &mut rng), MeasurementOutcome::Blue);
        assert_eq!(measure(State::One, &mut rng), MeasurementOutcome::Red);
        assert_eq!(measure(State::Decohered, &mut rng), MeasurementOutcome::Yellow);
    }
}

#[test]
fn test_superposition_measurement_distribution() {
    // 20,000 fair coin flips: std dev of the fraction is ~0.0035, so 0.03 is
    // more than eight standard deviations.
    const TRIALS: usize = 20_000;
    const TOLERANCE: f64 = 0.03;

    for state in [State::Plus, State::Minus] {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut blue = 0usize;
        for _ in 0..TRIALS {
            match measure(state, &mut rng) {
                MeasurementOutcome::Blue => blue += 1,
                MeasurementOutcome::Red => {}
                MeasurementOutcome::Yellow => panic!("{} measured as decohered", state),
            }
        }
        let fraction = blue as f64 / TRIALS as f64;
        println!("{}: blue fraction {:.4}", state, fraction);
        assert!(
            (fraction - 0.5).abs() < TOLERANCE,
            "{} blue fraction {} too far from 0.5",
            state,
            fraction
        );
    }
}

#[test]
fn test_remeasuring_is_not_memoized() {
    // The same superposition trajectory should produce both outcomes across calls.
    let simulator = Simulator::new();
    let trajectory = simulator.run_notation(State::Zero, "H");
    assert_eq!(trajectory.final_state(), Some(State::Plus));

    let mut rng = StdRng::seed_from_u64(99);
    let outcomes: Vec<MeasurementOutcome> =
        (0..64).map(|_| simulator.measure(&trajectory, &mut rng)).collect();
    assert!(outcomes.contains(&MeasurementOutcome::Blue));
    assert!(outcomes.contains(&MeasurementOutcome::Red));
}

#[test]
fn test_simulator_with_longer_columns() -> Result<(), GateError> {
    let simulator = Simulator::with_config(SimulatorConfig {
        sequence_length: 6,
        detector_dwell: false,
    })?;
    let trajectory = simulator.run_notation(State::Zero, "h-x-h-z");
    // H X H Z: |0> -> |+> -> |+> -> |0> -> |0>, then two empty slots
    assert_eq!(
        trajectory.states(),
        &[State::Zero, State::Plus, State::Plus, State::Zero, State::Zero, State::Zero, State::Zero]
    );
    Ok(())
}

#[test]
fn test_seed_normalization_through_simulator() {
    let simulator = Simulator::new();
    let seq = GateSequence::from_gates([Gate::H]);
    let from_minus = simulator.run(State::Minus, &seq);
    assert_eq!(from_minus.initial_state(), Some(State::Zero));
    assert_eq!(from_minus.final_state(), Some(State::Plus));
}

#[test]
fn test_trajectory_serializes_as_state_list() {
    let seq = GateSequence::from_gates([Gate::H, Gate::Noise]);
    let trajectory = build_trajectory(State::Zero, &seq);
    let json = serde_json::to_string(&trajectory).unwrap();
    assert_eq!(json, r#"["ZERO","PLUS","DECOHERED"]"#);
}
