// src/simulation/engine.rs
use rand::Rng;
use tracing::{debug, trace};

use crate::circuits::GateSequence;
use crate::core::{MeasurementOutcome, State};
use crate::operations::apply_gate;
use crate::simulation::Trajectory;

/// Evolves `initial` through every slot of `sequence`.
///
/// The seed is normalized first: anything other than `ONE` starts as `ZERO`.
/// The result always has `sequence.len() + 1` states. Deterministic and total.
pub fn build_trajectory(initial: State, sequence: &GateSequence) -> Trajectory {
    let seed = initial.seed();
    if seed != initial {
        debug!(%initial, %seed, "normalized trajectory seed");
    }

    let mut states = Vec::with_capacity(sequence.len() + 1);
    states.push(seed);

    let mut current = seed;
    for (step, slot) in sequence.slots().iter().enumerate() {
        let next = apply_gate(current, *slot);
        trace!(step, gate = ?slot, from = %current, to = %next, "applied slot");
        states.push(next);
        current = next;
    }

    Trajectory::new(states)
}

/// Measures `state` at the detector.
///
/// Basis states and `DECOHERED` give fixed outcomes without touching `rng`.
/// `PLUS` and `MINUS` collapse to `Blue` or `Red` with equal probability,
/// drawing exactly one value from `rng` per call; repeated calls are
/// independent.
pub fn measure<R: Rng>(state: State, rng: &mut R) -> MeasurementOutcome {
    match state {
        State::Zero => MeasurementOutcome::Blue,
        State::One => MeasurementOutcome::Red,
        State::Decohered => MeasurementOutcome::Yellow,
        State::Plus | State::Minus => {
            let outcome = if rng.random_bool(0.5) {
                MeasurementOutcome::Blue
            } else {
                MeasurementOutcome::Red
            };
            debug!(%state, %outcome, "superposition collapsed");
            outcome
        }
    }
}
