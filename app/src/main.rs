use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pathviz_app::{Cli, Config, build_board, run_headless, run_terminal};

fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.headless {
        builder.with_writer(std::io::stderr).init();
    } else {
        // The terminal owns stdout and stderr while drawing.
        let file = File::create(&config.log_file)
            .with_context(|| format!("creating {}", config.log_file.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    }
    Ok(())
}

fn run() -> Result<bool> {
    let config = Config::from_cli(Cli::parse())?;
    init_logging(&config)?;
    log::info!(
        "{} on a {}x{} grid, {} -> {}",
        config.algorithm,
        config.rows,
        config.rows,
        config.start,
        config.end
    );

    let mut grid = build_board(&config)?;
    let outcome = if config.headless {
        let (outcome, steps) = run_headless(&config, &mut grid);
        print!("{}", grid.to_ascii());
        println!("{}: {outcome} ({steps} steps)", config.algorithm);
        outcome
    } else {
        run_terminal(&config, &mut grid)?
    };
    Ok(outcome.is_found())
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
