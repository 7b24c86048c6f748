// src/core/state.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::qpath_constants::FRAC_1_SQRT_2;

/// The condition of the simulated particle at one point of the circuit.
///
/// Four pure states make up a two-path system: the computational basis
/// `ZERO`/`ONE` and the superpositions `PLUS`/`MINUS`. `DECOHERED` is
/// absorbing: once a particle reaches it no gate changes it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    /// `|0⟩`, the particle travels the lower path.
    Zero,
    /// `|1⟩`, the particle travels the upper path.
    One,
    /// `|+⟩ = (|0⟩ + |1⟩)/√2`
    Plus,
    /// `|−⟩ = (|0⟩ − |1⟩)/√2`
    Minus,
    /// Which-path information leaked to the environment.
    Decohered,
}

impl State {
    /// Every state, in declaration order.
    pub const ALL: [State; 5] = [
        State::Zero,
        State::One,
        State::Plus,
        State::Minus,
        State::Decohered,
    ];

    /// The four states the reversible gates act on.
    pub const PURE: [State; 4] = [State::Zero, State::One, State::Plus, State::Minus];

    /// Normalizes a trajectory seed. Only `ONE` survives; anything else becomes `ZERO`.
    pub fn seed(self) -> State {
        match self {
            State::One => State::One,
            _ => State::Zero,
        }
    }

    /// Column index into the transition table, `None` for `DECOHERED`.
    pub(crate) fn pure_index(self) -> Option<usize> {
        match self {
            State::Zero => Some(0),
            State::One => Some(1),
            State::Plus => Some(2),
            State::Minus => Some(3),
            State::Decohered => None,
        }
    }

    /// `true` for `PLUS` and `MINUS`, the states whose measurement is random.
    pub fn is_superposition(self) -> bool {
        matches!(self, State::Plus | State::Minus)
    }

    /// `true` only for `DECOHERED`.
    pub fn is_decohered(self) -> bool {
        self == State::Decohered
    }

    /// Dirac-style label shown next to the particle.
    pub fn label(self) -> &'static str {
        match self {
            State::Zero => "|0⟩",
            State::One => "|1⟩",
            State::Plus => "|+⟩",
            State::Minus => "|−⟩",
            State::Decohered => "decohered",
        }
    }

    /// Color the UI paints the particle with.
    pub fn color(self) -> &'static str {
        match self {
            State::Zero => "blue",
            State::One => "red",
            State::Plus => "purple",
            State::Minus => "green",
            State::Decohered => "yellow",
        }
    }

    /// Amplitudes `[a0, a1]` over the computational basis.
    ///
    /// Returns `None` for `DECOHERED`, which has no pure-state description.
    pub fn amplitudes(self) -> Option<[Complex<f64>; 2]> {
        let h = Complex::new(FRAC_1_SQRT_2, 0.0);
        match self {
            State::Zero => Some([Complex::one(), Complex::zero()]),
            State::One => Some([Complex::zero(), Complex::one()]),
            State::Plus => Some([h, h]),
            State::Minus => Some([h, -h]),
            State::Decohered => None,
        }
    }

    /// Probability of detecting `|0⟩`, i.e. `|a0|²`.
    pub fn zero_probability(self) -> Option<f64> {
        self.amplitudes().map(|[a0, _]| a0.norm_sqr())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classical result of measuring the particle at the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementOutcome {
    /// The `|0⟩` detector clicked.
    Blue,
    /// The `|1⟩` detector clicked.
    Red,
    /// The particle had decohered; a classical, path-less result.
    Yellow,
}

impl MeasurementOutcome {
    /// Semantic label for the outcome.
    pub fn label(self) -> &'static str {
        match self {
            MeasurementOutcome::Blue => "0-detected",
            MeasurementOutcome::Red => "1-detected",
            MeasurementOutcome::Yellow => "classical/decohered",
        }
    }

    /// Color name of the detector flash.
    pub fn color(self) -> &'static str {
        match self {
            MeasurementOutcome::Blue => "blue",
            MeasurementOutcome::Red => "red",
            MeasurementOutcome::Yellow => "yellow",
        }
    }
}

impl fmt::Display for MeasurementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
