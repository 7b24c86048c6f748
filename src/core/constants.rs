//! Constants shared by the algebra, the fixtures and the defaults.

/// Constants for gate sequences and state amplitudes
pub mod qpath_constants {
    /// Number of slots in a circuit column when the caller does not say otherwise.
    pub const DEFAULT_SEQUENCE_LENGTH: usize = 4;
    /// Extra "no gate" entries in the fixture selection pool.
    pub const DEFAULT_EMPTY_SLOT_WEIGHT: usize = 2;
    /// Amplitude of each basis component of `|+⟩` and `|−⟩`.
    pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
}
