//! The `pathviz` application: build a board, run one search and show it.

pub mod config;
pub mod maze;

use std::io;
use std::thread;

use anyhow::{Context as _, Result};
use pathviz_core::Grid;
use pathviz_crossterm::Terminal;
use pathviz_paths::{Cancel, Outcome};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use config::{Cli, Config};

/// Build the board described by `config`: endpoints placed, barriers
/// scattered, neighbor lists fresh.
pub fn build_board(config: &Config) -> Result<Grid> {
    let mut grid = Grid::new(config.rows);
    grid.set_start(config.start)
        .with_context(|| format!("placing start at {}", config.start))?;
    if config.end != config.start {
        grid.set_end(config.end)
            .with_context(|| format!("placing end at {}", config.end))?;
    }
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("barrier layout seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    maze::scatter_barriers(&mut grid, config.barrier_probability, &mut rng);
    grid.update_neighbors();
    Ok(grid)
}

/// Run the configured search without a terminal. Returns the outcome and
/// the number of observer steps.
pub fn run_headless(config: &Config, grid: &mut Grid) -> (Outcome, usize) {
    let mut steps = 0;
    let outcome = config.algorithm.run(
        grid,
        config.start,
        config.end,
        &mut |_: &Grid| steps += 1,
        &Cancel::new(),
    );
    log::info!("{}: {outcome} in {steps} steps", config.algorithm);
    (outcome, steps)
}

/// Animate the configured search in the terminal, then wait for a key.
pub fn run_terminal(config: &Config, grid: &mut Grid) -> Result<Outcome> {
    let mut term = Terminal::open().context("opening terminal")?;
    let title = format!("{} | q: quit", config.algorithm);
    term.draw(grid, &title)?;

    let cancel = Cancel::new();
    let mut failure: Option<io::Error> = None;
    let mut steps = 0usize;
    let outcome = {
        let mut observer = |g: &Grid| {
            steps += 1;
            let status = format!("{title} | step {steps}");
            let drawn = term.draw(g, &status).and_then(|()| term.poll_quit());
            match drawn {
                Ok(true) => cancel.cancel(),
                Ok(false) => {}
                Err(e) => {
                    if failure.is_none() {
                        failure = Some(e);
                    }
                    cancel.cancel();
                }
            }
            if !config.delay.is_zero() {
                thread::sleep(config.delay);
            }
        };
        config
            .algorithm
            .run(grid, config.start, config.end, &mut observer, &cancel)
    };
    if let Some(e) = failure {
        return Err(e).context("drawing the grid");
    }
    log::info!("{}: {outcome} in {steps} steps", config.algorithm);

    if outcome != Outcome::Cancelled {
        term.draw(grid, &format!("{} | {outcome} | any key: exit", config.algorithm))?;
        term.wait_key()?;
    }
    Ok(outcome)
}
