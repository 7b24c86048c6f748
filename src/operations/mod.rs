// src/operations/mod.rs

//! Gates and the transition table that defines how each one moves a `State`.
//!
//! The algebra is a closed five-symbol toy: three involutions (`X`, `H`, `Z`)
//! permute the four pure states and `Noise` sends every state to
//! `DECOHERED`. An empty circuit slot is modelled as `Option::<Gate>::None`
//! and acts as the identity.

use num_complex::Complex;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{FRAC_1_SQRT_2, GateError, State};

/// 2×2 complex matrix acting on `[a0, a1]` amplitudes.
pub type Matrix2 = [[Complex<f64>; 2]; 2];

/// A gate that can occupy one slot of a circuit column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gate {
    /// Path flip (mirror). Swaps `ZERO`/`ONE`, fixes `PLUS`/`MINUS`.
    X,
    /// Hadamard (beam splitter). Swaps the computational and superposition bases.
    H,
    /// Phase flip. Fixes `ZERO`/`ONE`, swaps `PLUS`/`MINUS`.
    Z,
    /// Environment interaction. Irreversibly decoheres the particle.
    #[serde(rename = "N")]
    Noise,
}

use crate::core::State::{Decohered as DEC, Minus as MIN, One as ONE, Plus as PLS, Zero as ZRO};

/// Rows follow `Gate::row`, columns follow `State::pure_index`
/// (`ZERO`, `ONE`, `PLUS`, `MINUS`).
const TRANSITIONS: [[State; 4]; 4] = [
    /* X     */ [ONE, ZRO, PLS, MIN],
    /* H     */ [PLS, MIN, ZRO, ONE],
    /* Z     */ [ZRO, ONE, MIN, PLS],
    /* Noise */ [DEC, DEC, DEC, DEC],
];

impl Gate {
    /// Every gate, in table order.
    pub const ALL: [Gate; 4] = [Gate::X, Gate::H, Gate::Z, Gate::Noise];

    /// The gates that are their own inverse on the pure states.
    pub const REVERSIBLE: [Gate; 3] = [Gate::X, Gate::H, Gate::Z];

    fn row(self) -> usize {
        match self {
            Gate::X => 0,
            Gate::H => 1,
            Gate::Z => 2,
            Gate::Noise => 3,
        }
    }

    /// Applies this gate to `state`.
    ///
    /// `DECOHERED` short-circuits to itself before the table is consulted.
    pub fn apply(self, state: State) -> State {
        match state.pure_index() {
            Some(col) => TRANSITIONS[self.row()][col],
            None => State::Decohered,
        }
    }

    /// Single-character symbol used in the textual wire format.
    pub fn symbol(self) -> char {
        match self {
            Gate::X => 'X',
            Gate::H => 'H',
            Gate::Z => 'Z',
            Gate::Noise => 'N',
        }
    }

    /// Case-insensitive inverse of [`Gate::symbol`].
    pub fn from_symbol(symbol: char) -> Option<Gate> {
        match symbol.to_ascii_uppercase() {
            'X' => Some(Gate::X),
            'H' => Some(Gate::H),
            'Z' => Some(Gate::Z),
            'N' => Some(Gate::Noise),
            _ => None,
        }
    }

    /// `true` for `X`, `H` and `Z`.
    pub fn is_reversible(self) -> bool {
        !matches!(self, Gate::Noise)
    }

    /// The unitary this gate stands for, or `None` for `Noise`.
    ///
    /// Only used to label and cross-check the table; trajectories never
    /// multiply matrices.
    pub fn matrix(self) -> Option<Matrix2> {
        let o = Complex::one();
        let z = Complex::zero();
        let h = Complex::new(FRAC_1_SQRT_2, 0.0);
        match self {
            Gate::X => Some([[z, o], [o, z]]),
            Gate::H => Some([[h, h], [h, -h]]),
            Gate::Z => Some([[o, z], [z, -o]]),
            Gate::Noise => None,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Noise => write!(f, "NOISE"),
            other => write!(f, "{}", other.symbol()),
        }
    }
}

impl TryFrom<char> for Gate {
    type Error = GateError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Gate::from_symbol(symbol).ok_or(GateError::InvalidSymbol { symbol, position: 0 })
    }
}

impl FromStr for Gate {
    type Err = GateError;

    /// Accepts a single symbol (`x`, `H`, `n`, ...) or the word `noise`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("noise") {
            return Ok(Gate::Noise);
        }
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Gate::try_from(c),
            (Some(_), Some(_)) => Err(GateError::SequenceTooLong {
                max: 1,
                found: trimmed.chars().count(),
            }),
            (None, _) => Err(GateError::EmptySymbol),
        }
    }
}

/// Applies an optional gate to a state.
///
/// An empty slot (`None`) leaves the state unchanged and `DECOHERED` is
/// returned unchanged whatever the gate.
pub fn apply_gate(state: State, gate: Option<Gate>) -> State {
    match gate {
        None => state,
        Some(g) => g.apply(state),
    }
}

/// Multiplies `matrix` into `amplitudes`.
pub(crate) fn apply_matrix(matrix: &Matrix2, amplitudes: &[Complex<f64>; 2]) -> [Complex<f64>; 2] {
    [
        matrix[0][0] * amplitudes[0] + matrix[0][1] * amplitudes[1],
        matrix[1][0] * amplitudes[0] + matrix[1][1] * amplitudes[1],
    ]
}
