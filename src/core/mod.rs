// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;

// Re-export public types for convenient access via `qpath::core::TypeName`
pub use error::GateError;
pub use state::{MeasurementOutcome, State};

pub mod constants;
pub use constants::qpath_constants::{
    DEFAULT_EMPTY_SLOT_WEIGHT, DEFAULT_SEQUENCE_LENGTH, FRAC_1_SQRT_2,
};
