//! Prints a reproducible board of random gate columns and where each ends up.

use qpath::{FixtureConfig, GateError, State, build_trajectory, generate_fixture_grid_seeded};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), GateError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qpath=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let seed = std::env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(7);
    let config = FixtureConfig { rows: 3, cols: 4, ..Default::default() };
    let grid = generate_fixture_grid_seeded(seed, &config)?;

    println!("Fixture grid (seed {}):", seed);
    for row in &grid {
        let cells: Vec<String> = row
            .iter()
            .map(|seq| {
                let end = build_trajectory(State::Zero, seq)
                    .final_state()
                    .unwrap_or(State::Zero);
                format!("{:<6} -> {:<9}", seq.to_notation(), end.label())
            })
            .collect();
        println!("  {}", cells.join(" | "));
    }
    Ok(())
}
