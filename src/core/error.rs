//! Error handling logic

use thiserror::Error;

use super::state::State;
use crate::operations::Gate;

/// Errors raised by the strict and validating surfaces of the crate.
///
/// The algebra itself (`apply_gate`, `build_trajectory`, `measure` and the
/// lenient parser) is total and never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// A character that is not a gate symbol was found by the strict parser.
    #[error("invalid gate symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Character index within the input text.
        position: usize,
    },

    /// A single-gate parse was given no symbol at all.
    #[error("empty gate symbol")]
    EmptySymbol,

    /// The strict parser found more gates than the sequence can hold.
    #[error("sequence holds {max} gates but {found} were given")]
    SequenceTooLong {
        /// Fixed length of the target sequence.
        max: usize,
        /// Number of gate symbols found in the input.
        found: usize,
    },

    /// A trajectory does not have one more state than its gate sequence.
    #[error("trajectory has {found} states, expected {expected}")]
    TrajectoryLength {
        /// `sequence length + 1`
        expected: usize,
        /// Actual number of states.
        found: usize,
    },

    /// A non-decohered state follows a decohered one.
    #[error("trajectory leaves the decohered state at step {index} ({state})")]
    BrokenDecoherence {
        /// Index of the first state after decoherence that is not `DECOHERED`.
        index: usize,
        /// The offending state.
        state: State,
    },

    /// A trajectory does not start from `ZERO` or `ONE`.
    #[error("trajectory starts from {0}, expected a basis state")]
    InvalidSeed(State),

    /// A trajectory element does not follow from its predecessor.
    #[error("step {step} should reach {expected} but the trajectory has {found}")]
    StepMismatch {
        /// Slot index whose output is wrong.
        step: usize,
        /// State the table gives for that slot.
        expected: State,
        /// State the trajectory holds.
        found: State,
    },

    /// The transition table disagrees with the gate's matrix or is not an involution.
    #[error("transition table mismatch for {gate} on {state}: {message}")]
    TableMismatch {
        /// Gate being checked.
        gate: Gate,
        /// Input state being checked.
        state: State,
        /// What went wrong.
        message: String,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
