// src/circuits/mod.rs

//! Fixed-length gate sequences: one circuit column as the UI lays it out.
//!
//! Slots are `Option<Gate>`; `None` is an empty slot that lets the particle
//! pass unchanged. The textual wire format lives in [`notation`].

pub mod notation;

pub use notation::{format_gate_sequence, parse_gate_sequence, parse_gate_sequence_strict};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::DEFAULT_SEQUENCE_LENGTH;
use crate::operations::Gate;

/// An ordered, fixed-length column of optional gates.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GateSequence {
    slots: Vec<Option<Gate>>,
}

impl GateSequence {
    /// Creates a sequence of `length` empty slots.
    pub fn new(length: usize) -> Self {
        Self { slots: vec![None; length] }
    }

    /// Wraps an existing list of slots. The sequence length is `slots.len()`.
    pub fn from_slots(slots: Vec<Option<Gate>>) -> Self {
        Self { slots }
    }

    /// Builds a fully populated sequence from gates, no empty slots.
    pub fn from_gates<I>(gates: I) -> Self
    where
        I: IntoIterator<Item = Gate>,
    {
        Self { slots: gates.into_iter().map(Some).collect() }
    }

    /// The slots in order.
    pub fn slots(&self) -> &[Option<Gate>] {
        &self.slots
    }

    /// The gate in slot `index`, `None` if the slot is empty or out of range.
    pub fn get(&self, index: usize) -> Option<Gate> {
        self.slots.get(index).copied().flatten()
    }

    /// Places `gate` into slot `index`. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, gate: Option<Gate>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = gate;
        }
    }

    /// Iterates over populated slots only, in order.
    pub fn gates(&self) -> impl Iterator<Item = Gate> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    /// Fixed length of the sequence, empty slots included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` if the sequence has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of populated slots.
    pub fn gate_count(&self) -> usize {
        self.gates().count()
    }

    /// `true` if every empty slot comes after the last populated one, which is
    /// when the textual notation round-trips exactly.
    pub fn is_packed(&self) -> bool {
        let populated = self.gate_count();
        self.slots[..populated].iter().all(Option::is_some)
    }

    /// Renders the sequence in the `XHZN` wire format.
    pub fn to_notation(&self) -> String {
        format_gate_sequence(self)
    }
}

impl Default for GateSequence {
    fn default() -> Self {
        Self::new(DEFAULT_SEQUENCE_LENGTH)
    }
}

impl From<Vec<Option<Gate>>> for GateSequence {
    fn from(slots: Vec<Option<Gate>>) -> Self {
        Self::from_slots(slots)
    }
}

//-------------------------------------------------------------------------
// Sequence Builder
//-------------------------------------------------------------------------

/// A helper struct for constructing `GateSequence` instances using method chaining.
#[derive(Default)]
pub struct GateSequenceBuilder {
    slots: Vec<Option<Gate>>,
}

impl GateSequenceBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a populated slot.
    pub fn gate(mut self, gate: Gate) -> Self {
        self.slots.push(Some(gate));
        self
    }

    /// Appends an empty slot.
    pub fn empty(mut self) -> Self {
        self.slots.push(None);
        self
    }

    /// Appends one slot per item.
    pub fn slots<I>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = Option<Gate>>,
    {
        self.slots.extend(slots);
        self
    }

    /// Pads with empty slots up to `length`. Never truncates.
    pub fn pad_to(mut self, length: usize) -> Self {
        if self.slots.len() < length {
            self.slots.resize(length, None);
        }
        self
    }

    /// Finalizes the construction process and returns the built `GateSequence`.
    pub fn build(self) -> GateSequence {
        GateSequence::from_slots(self.slots)
    }
}

impl fmt::Display for GateSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const WIRE: &str = "───────";
        const H_WIRE: &str = "─";

        if self.slots.is_empty() {
            return write!(f, "qpath::GateSequence[0 slots]");
        }

        let cells: Vec<String> = self
            .slots
            .iter()
            .map(|slot| match slot {
                None => WIRE.to_string(),
                Some(gate) => {
                    let pre = (GATE_WIDTH - 1) / 2;
                    let post = GATE_WIDTH - 1 - pre;
                    format!("{}{}{}", H_WIRE.repeat(pre), gate.symbol(), H_WIRE.repeat(post))
                }
            })
            .collect();
        write!(f, "{}", cells.join(""))
    }
}

// Keep the Debug impl delegating to the notation, empty slots shown as `_`
impl fmt::Debug for GateSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self
            .slots
            .iter()
            .map(|slot| slot.map_or('_', Gate::symbol))
            .collect();
        write!(f, "GateSequence[{}]", text)
    }
}
