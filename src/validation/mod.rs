// src/validation/mod.rs

//! Checks that the transition table and produced trajectories obey the
//! algebra's invariants.

use num_complex::Complex;

use crate::circuits::GateSequence;
use crate::core::{GateError, State};
use crate::operations::{Gate, apply_gate, apply_matrix};
use crate::simulation::Trajectory;

// Default tolerance for comparing amplitudes up to a global phase
const DEFAULT_PHASE_TOLERANCE: f64 = 1e-9;

/// `|⟨a|b⟩|`, which is 1 exactly when the two normalized states differ only
/// by a global phase.
fn overlap(a: &[Complex<f64>; 2], b: &[Complex<f64>; 2]) -> f64 {
    (a[0].conj() * b[0] + a[1].conj() * b[1]).norm()
}

/// Verifies the lookup table.
///
/// For each reversible gate and pure state this checks that
/// 1. applying the gate twice returns the original state, and
/// 2. the table's answer matches the gate matrix applied to the state's
///    amplitudes, up to a global phase.
///
/// `Noise` is checked to decohere every pure state and every gate is checked
/// to leave `DECOHERED` alone.
///
/// # Errors
/// `GateError::TableMismatch` for the first failing pair.
pub fn check_transition_table(tolerance: Option<f64>) -> Result<(), GateError> {
    let tolerance = tolerance.unwrap_or(DEFAULT_PHASE_TOLERANCE);

    for gate in Gate::ALL {
        if gate.apply(State::Decohered) != State::Decohered {
            return Err(GateError::TableMismatch {
                gate,
                state: State::Decohered,
                message: "decohered state is not absorbing".to_string(),
            });
        }

        for state in State::PURE {
            let mapped = gate.apply(state);

            let Some(matrix) = gate.matrix() else {
                if mapped != State::Decohered {
                    return Err(GateError::TableMismatch {
                        gate,
                        state,
                        message: format!("expected decohered, table gives {}", mapped),
                    });
                }
                continue;
            };

            let back = gate.apply(mapped);
            if back != state {
                return Err(GateError::TableMismatch {
                    gate,
                    state,
                    message: format!("not an involution, returns to {}", back),
                });
            }

            let (Some(input), Some(expected)) = (state.amplitudes(), mapped.amplitudes()) else {
                return Err(GateError::TableMismatch {
                    gate,
                    state,
                    message: format!("reversible gate leaves the pure states ({})", mapped),
                });
            };
            let actual = apply_matrix(&matrix, &input);
            let fidelity = overlap(&expected, &actual);
            if (fidelity - 1.0).abs() > tolerance {
                return Err(GateError::TableMismatch {
                    gate,
                    state,
                    message: format!(
                        "table gives {} but matrix overlap is {:.6}",
                        mapped, fidelity
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Checks a trajectory produced for `sequence`.
///
/// * It holds `sequence.len() + 1` states.
/// * It starts from a normalized seed (`ZERO` or `ONE`).
/// * Each element follows from the previous one through the matching slot.
/// * No state after a `DECOHERED` element is anything but `DECOHERED`.
///
/// # Errors
/// * `GateError::TrajectoryLength` on a length mismatch.
/// * `GateError::BrokenDecoherence` if decoherence is undone.
/// * `GateError::InvalidSeed` if the first state is not `ZERO` or `ONE`.
/// * `GateError::StepMismatch` if a step disagrees with the table.
pub fn validate_trajectory(
    trajectory: &Trajectory,
    sequence: &GateSequence,
) -> Result<(), GateError> {
    let states = trajectory.states();
    let expected = sequence.len() + 1;
    if states.len() != expected {
        return Err(GateError::TrajectoryLength { expected, found: states.len() });
    }

    check_monotone_decoherence(states)?;

    if states[0].seed() != states[0] {
        return Err(GateError::InvalidSeed(states[0]));
    }

    for (step, slot) in sequence.slots().iter().enumerate() {
        let from = states[step];
        let to = states[step + 1];
        let expected = apply_gate(from, *slot);
        if expected != to {
            return Err(GateError::StepMismatch { step, expected, found: to });
        }
    }
    Ok(())
}

/// Fails if any state after the first `DECOHERED` one is not `DECOHERED`.
pub fn check_monotone_decoherence(states: &[State]) -> Result<(), GateError> {
    if let Some(first) = states.iter().position(|s| s.is_decohered()) {
        for (offset, state) in states[first..].iter().enumerate() {
            if !state.is_decohered() {
                return Err(GateError::BrokenDecoherence { index: first + offset, state: *state });
            }
        }
    }
    Ok(())
}
