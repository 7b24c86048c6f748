// src/simulation/mod.rs

//! Runs a particle through a gate column and measures it at the detector.
//!
//! [`build_trajectory`] and [`measure`] are the pure entry points. The
//! `Simulator` wraps them with a [`SimulatorConfig`] so a UI can hand over
//! raw notation text and get back the trajectory it should animate.

mod results;
pub(crate) mod engine;

pub use engine::{build_trajectory, measure};
pub use results::Trajectory;

use rand::Rng;

use crate::circuits::{GateSequence, parse_gate_sequence};
use crate::config::SimulatorConfig;
use crate::core::{GateError, MeasurementOutcome, State};

/// Stateless façade over the gate algebra, configured once.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a Simulator from a validated configuration.
    ///
    /// # Errors
    /// `GateError::InvalidConfig` if `config.validate()` fails.
    pub fn with_config(config: SimulatorConfig) -> Result<Self, GateError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Builds the trajectory for `initial` through `sequence`, adding the
    /// detector dwell element when configured.
    pub fn run(&self, initial: State, sequence: &GateSequence) -> Trajectory {
        let trajectory = build_trajectory(initial, sequence);
        if self.config.detector_dwell {
            trajectory.with_detector_dwell()
        } else {
            trajectory
        }
    }

    /// Parses `notation` leniently to the configured length, then runs it.
    pub fn run_notation(&self, initial: State, notation: &str) -> Trajectory {
        let sequence = parse_gate_sequence(notation, self.config.sequence_length);
        self.run(initial, &sequence)
    }

    /// Measures the final state of `trajectory`.
    ///
    /// An empty trajectory measures as if the particle were in `ZERO`.
    pub fn measure<R: Rng>(&self, trajectory: &Trajectory, rng: &mut R) -> MeasurementOutcome {
        measure(trajectory.final_state().unwrap_or(State::Zero), rng)
    }
}
