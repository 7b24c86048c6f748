// src/lib.rs

//! `qpath` - A five-state gate algebra for two-path interferometer demos
//!
//! A particle enters a circuit column in `|0⟩` or `|1⟩`, passes through a
//! fixed number of slots holding `X`, `H`, `Z`, `NOISE` or nothing, and is
//! measured at the detector. The crate computes the trajectory a UI should
//! animate and the detector outcome it should flash. It is a closed toy
//! algebra, not a state-vector simulator.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod fixtures;
pub mod config;

// Re-export the most common types for easier top-level use
pub use crate::core::{GateError, MeasurementOutcome, State};
pub use operations::{Gate, apply_gate};
pub use circuits::{
    GateSequence,
    GateSequenceBuilder,
    format_gate_sequence,
    parse_gate_sequence,
    parse_gate_sequence_strict,
};
pub use simulation::{Simulator, Trajectory, build_trajectory, measure};
pub use config::{FixtureConfig, SimulatorConfig};
pub use fixtures::{generate_fixture_grid, generate_fixture_grid_seeded, generate_random_sequence};
pub use validation::{check_transition_table, validate_trajectory};

// Example 1: Interference
// H splits the particle, Z flips the relative phase, and the second H
// recombines it onto the other path. The result is deterministic.
/// ```
/// use qpath::{build_trajectory, measure, parse_gate_sequence, MeasurementOutcome, State};
/// use rand::SeedableRng;
///
/// let sequence = parse_gate_sequence("HZH", 4);
/// let trajectory = build_trajectory(State::Zero, &sequence);
/// println!("{}", trajectory);
///
/// assert_eq!(
///     trajectory.states(),
///     &[State::Zero, State::Plus, State::Minus, State::One, State::One]
/// );
///
/// // No randomness is consumed for a basis state, any source will do.
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// assert_eq!(measure(State::One, &mut rng), MeasurementOutcome::Red);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Decoherence
// A NOISE gate leaks which-path information; nothing afterwards brings the
// particle back and the detector reports a classical result.
/// ```
/// use qpath::{Gate, GateSequence, Simulator, MeasurementOutcome, State};
///
/// let sequence = GateSequence::from_gates([Gate::Noise, Gate::X, Gate::H, Gate::Z]);
/// let simulator = Simulator::new();
/// let trajectory = simulator.run(State::One, &sequence);
///
/// assert_eq!(trajectory.decoherence_index(), Some(1));
/// assert_eq!(trajectory.final_state(), Some(State::Decohered));
///
/// let outcome = simulator.measure(&trajectory, &mut rand::rng());
/// assert_eq!(outcome, MeasurementOutcome::Yellow);
/// println!("Detector: {}", outcome);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
