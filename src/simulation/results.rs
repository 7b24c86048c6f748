// src/simulation/results.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::State;

/// The ordered states a particle passes through on its way to the detector.
///
/// Element 0 is the seed; element `i` is the state after slot `i - 1`. Once
/// an element is `DECOHERED` every later element is too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    states: Vec<State>,
}

impl Trajectory {
    /// Wraps a list of states. (Internal visibility)
    pub(crate) fn new(states: Vec<State>) -> Self {
        Self { states }
    }

    /// All states in order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The seed state.
    pub fn initial_state(&self) -> Option<State> {
        self.states.first().copied()
    }

    /// The state that reaches the detector.
    pub fn final_state(&self) -> Option<State> {
        self.states.last().copied()
    }

    /// Index of the first `DECOHERED` element, if any.
    pub fn decoherence_index(&self) -> Option<usize> {
        self.states.iter().position(|s| s.is_decohered())
    }

    /// Number of states (sequence length + 1, or + 2 with detector dwell).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// `true` if the trajectory holds no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns a copy with the final state repeated once, for callers that
    /// animate time spent at the detector.
    pub fn with_detector_dwell(&self) -> Trajectory {
        let mut states = self.states.clone();
        if let Some(last) = states.last().copied() {
            states.push(last);
        }
        Trajectory { states }
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, state) in self.states.iter().enumerate() {
            write!(f, "{}{}", if i > 0 { " → " } else { "" }, state)?;
        }
        Ok(())
    }
}
