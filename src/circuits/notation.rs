// src/circuits/notation.rs

//! The short textual wire format the UI exchanges gate columns in.
//!
//! The alphabet is `X`, `H`, `Z` and `N` (for `Noise`), case-insensitive.
//! Empty slots have no symbol: they are dropped when formatting and
//! filled in as trailing padding when parsing.

use tracing::debug;

use super::GateSequence;
use crate::core::GateError;
use crate::operations::Gate;

/// Parses `text` into a sequence of exactly `length` slots.
///
/// Characters are scanned left to right. Gate symbols are collected until
/// `length` gates have been found; any other character is skipped. The
/// remaining slots are left empty. Never fails: malformed input degrades to
/// fewer gates rather than an error. Use [`parse_gate_sequence_strict`] to
/// reject bad input instead.
pub fn parse_gate_sequence(text: &str, length: usize) -> GateSequence {
    let mut seq = GateSequence::new(length);
    let mut filled = 0;
    let mut dropped = 0;

    for symbol in text.chars() {
        if filled == length {
            break;
        }
        match Gate::from_symbol(symbol) {
            Some(gate) => {
                seq.set(filled, Some(gate));
                filled += 1;
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(text, dropped, "ignored characters outside the gate alphabet");
    }
    seq
}

/// Parses `text` into a sequence of `length` slots, rejecting bad input.
///
/// Whitespace is skipped. Any other character outside the gate alphabet is
/// an error, as is finding more than `length` gates.
///
/// # Errors
/// * `GateError::InvalidSymbol` for the first unrecognised character.
/// * `GateError::SequenceTooLong` if the text holds more than `length` gates.
pub fn parse_gate_sequence_strict(text: &str, length: usize) -> Result<GateSequence, GateError> {
    let mut gates = Vec::with_capacity(length);
    for (position, symbol) in text.chars().enumerate() {
        if symbol.is_whitespace() {
            continue;
        }
        let gate =
            Gate::from_symbol(symbol).ok_or(GateError::InvalidSymbol { symbol, position })?;
        gates.push(gate);
    }

    if gates.len() > length {
        return Err(GateError::SequenceTooLong { max: length, found: gates.len() });
    }

    let mut seq = GateSequence::new(length);
    for (index, gate) in gates.into_iter().enumerate() {
        seq.set(index, Some(gate));
    }
    Ok(seq)
}

/// Renders the populated slots of `seq` as symbols, in order.
///
/// Empty slots produce nothing, so `[H, _, Z, _]` and `[H, Z, _, _]` both
/// format as `"HZ"`.
pub fn format_gate_sequence(seq: &GateSequence) -> String {
    seq.gates().map(Gate::symbol).collect()
}
