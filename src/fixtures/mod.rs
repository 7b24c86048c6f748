// src/fixtures/mod.rs

//! Random gate columns for demo boards and test fixtures.
//!
//! Every slot is drawn independently and uniformly from a selection pool:
//! one entry per eligible gate plus `empty_slot_weight` "no gate" entries,
//! so with the defaults (`X H Z N _ _`) a slot is empty one time in three.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::circuits::GateSequence;
use crate::config::FixtureConfig;
use crate::core::GateError;
use crate::operations::Gate;

/// The slot values a generated sequence draws from, with repetition as weight.
pub fn selection_pool(config: &FixtureConfig) -> Vec<Option<Gate>> {
    let mut pool: Vec<Option<Gate>> = Gate::ALL
        .iter()
        .copied()
        .filter(|g| config.include_noise || g.is_reversible())
        .map(Some)
        .collect();
    pool.extend(std::iter::repeat_n(None, config.empty_slot_weight));
    pool
}

/// Creates the deterministic generator used for reproducible fixtures.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a sequence of `length` slots from the pool described by `config`.
pub fn generate_random_sequence<R: Rng>(
    rng: &mut R,
    length: usize,
    config: &FixtureConfig,
) -> GateSequence {
    let pool = selection_pool(config);
    draw_sequence(rng, &pool, length)
}

fn draw_sequence<R: Rng>(rng: &mut R, pool: &[Option<Gate>], length: usize) -> GateSequence {
    let slots = (0..length)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect();
    GateSequence::from_slots(slots)
}

/// Fills a `rows × cols` grid with independently drawn sequences.
///
/// `config.rows`, `config.cols` and `config.sequence_length` are ignored in
/// favour of the explicit arguments; only the pool settings are read.
pub fn generate_fixture_grid<R: Rng>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    length: usize,
    config: &FixtureConfig,
) -> Vec<Vec<GateSequence>> {
    let pool = selection_pool(config);
    debug!(rows, cols, length, pool_size = pool.len(), "generating fixture grid");
    (0..rows)
        .map(|_| (0..cols).map(|_| draw_sequence(rng, &pool, length)).collect())
        .collect()
}

/// Generates the grid described entirely by `config` from a fixed seed.
///
/// # Errors
/// `GateError::InvalidConfig` if `config.validate()` fails.
pub fn generate_fixture_grid_seeded(
    seed: u64,
    config: &FixtureConfig,
) -> Result<Vec<Vec<GateSequence>>, GateError> {
    config.validate()?;
    let mut rng = seeded_rng(seed);
    Ok(generate_fixture_grid(
        &mut rng,
        config.rows,
        config.cols,
        config.sequence_length,
        config,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_overweights_empty() {
        let pool = selection_pool(&FixtureConfig::default());
        assert_eq!(pool.len(), 6);
        assert_eq!(pool.iter().filter(|s| s.is_none()).count(), 2);
        assert!(pool.contains(&Some(Gate::Noise)));
    }

    #[test]
    fn test_pool_without_noise() {
        let config = FixtureConfig {
            include_noise: false,
            empty_slot_weight: 0,
            ..Default::default()
        };
        let pool = selection_pool(&config);
        assert_eq!(pool, vec![Some(Gate::X), Some(Gate::H), Some(Gate::Z)]);
    }

    #[test]
    fn test_generated_sequence_respects_pool() {
        let config = FixtureConfig { include_noise: false, ..Default::default() };
        let mut rng = seeded_rng(11);
        for _ in 0..200 {
            let seq = generate_random_sequence(&mut rng, 4, &config);
            assert_eq!(seq.len(), 4);
            assert!(seq.gates().all(|g| g != Gate::Noise));
        }
    }

    #[test]
    fn test_grid_shape() {
        let mut rng = seeded_rng(3);
        let grid = generate_fixture_grid(&mut rng, 2, 5, 6, &FixtureConfig::default());
        assert_eq!(grid.len(), 2);
        assert!(grid.iter().all(|row| row.len() == 5));
        assert!(grid.iter().flatten().all(|seq| seq.len() == 6));
    }

    #[test]
    fn test_seeded_grid_is_reproducible() -> Result<(), GateError> {
        let config = FixtureConfig::default();
        let a = generate_fixture_grid_seeded(42, &config)?;
        let b = generate_fixture_grid_seeded(42, &config)?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_seeded_grid_rejects_empty_grid() {
        let config = FixtureConfig { rows: 0, ..Default::default() };
        assert!(generate_fixture_grid_seeded(1, &config).is_err());
    }
}
