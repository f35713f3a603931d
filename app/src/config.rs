//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, ensure};
use clap::Parser;
use pathviz_core::Point;
use pathviz_paths::Algorithm;

use crate::maze::DEFAULT_BARRIER_PROBABILITY;

/// Animate a grid search in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "pathviz", version, about)]
pub struct Cli {
    /// Search to run: astar, dijkstra, bfs, dfs or bidirectional.
    #[arg(short, long, default_value = "astar")]
    pub algorithm: Algorithm,

    /// Rows (and columns) of the square grid.
    #[arg(short, long, default_value_t = 30)]
    pub rows: i32,

    /// Probability that a node becomes a barrier.
    #[arg(short, long, default_value_t = DEFAULT_BARRIER_PROBABILITY)]
    pub barriers: f64,

    /// Seed for the barrier layout; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start node as `row,col` (default: top-left corner).
    #[arg(long, value_parser = parse_cell)]
    pub start: Option<Point>,

    /// End node as `row,col` (default: bottom-right corner).
    #[arg(long, value_parser = parse_cell)]
    pub end: Option<Point>,

    /// Pause after each animation step, in milliseconds.
    #[arg(long, default_value_t = 10)]
    pub delay_ms: u64,

    /// Print the final grid instead of animating it.
    #[arg(long)]
    pub headless: bool,

    /// Where logs go while the terminal is in use.
    #[arg(long, default_value = "pathviz.log")]
    pub log_file: PathBuf,
}

/// Parse `row,col`.
pub fn parse_cell(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col, got {s:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row in {s:?}: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column in {s:?}: {e}"))?;
    Ok(Point::cell(row, col))
}

/// Largest accepted board side. Each node is drawn two columns wide, so the
/// drawn width stays well inside `u16`.
pub const MAX_ROWS: i32 = 256;

/// Validated run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub rows: i32,
    pub barrier_probability: f64,
    pub seed: Option<u64>,
    pub start: Point,
    pub end: Point,
    pub delay: Duration,
    pub headless: bool,
    pub log_file: PathBuf,
}

impl Config {
    /// Validate command-line settings and fill in defaults.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        ensure!(
            (1..=MAX_ROWS).contains(&cli.rows),
            "--rows must be within [1, {MAX_ROWS}], got {}",
            cli.rows
        );
        ensure!(
            (0.0..=1.0).contains(&cli.barriers),
            "--barriers must be within [0, 1], got {}",
            cli.barriers
        );
        let last = cli.rows - 1;
        let start = cli.start.unwrap_or(Point::cell(0, 0));
        let end = cli.end.unwrap_or(Point::cell(last, last));
        for (name, p) in [("start", start), ("end", end)] {
            ensure!(
                (0..cli.rows).contains(&p.row()) && (0..cli.rows).contains(&p.col()),
                "--{name} {p} is outside a {0}x{0} grid",
                cli.rows
            );
        }
        Ok(Self {
            algorithm: cli.algorithm,
            rows: cli.rows,
            barrier_probability: cli.barriers,
            seed: cli.seed,
            start,
            end,
            delay: Duration::from_millis(cli.delay_ms),
            headless: cli.headless,
            log_file: cli.log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config> {
        let cli = Cli::try_parse_from(std::iter::once("pathviz").chain(args.iter().copied()))?;
        Config::from_cli(cli)
    }

    #[test]
    fn defaults() {
        let cfg = parse(&[]).unwrap();
        assert_eq!(cfg.algorithm, Algorithm::AStar);
        assert_eq!(cfg.rows, 30);
        assert_eq!(cfg.start, Point::cell(0, 0));
        assert_eq!(cfg.end, Point::cell(29, 29));
        assert_eq!(cfg.delay, Duration::from_millis(10));
        assert!(!cfg.headless);
    }

    #[test]
    fn explicit_values() {
        let cfg = parse(&[
            "-a", "bidi", "-r", "8", "-b", "0.1", "--seed", "7", "--start", "1,2", "--end",
            "6, 5", "--headless",
        ])
        .unwrap();
        assert_eq!(cfg.algorithm, Algorithm::Bidirectional);
        assert_eq!(cfg.rows, 8);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.start, Point::cell(1, 2));
        assert_eq!(cfg.end, Point::cell(6, 5));
        assert!(cfg.headless);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["-a", "greedy"]).is_err());
        assert!(parse(&["-r", "0"]).is_err());
        assert!(parse(&["-r", "100000"]).is_err());
        let (largest, too_many) = (MAX_ROWS.to_string(), (MAX_ROWS + 1).to_string());
        assert!(parse(&["-r", too_many.as_str()]).is_err());
        assert!(parse(&["-r", largest.as_str()]).is_ok());
        assert!(parse(&["-b", "1.5"]).is_err());
        assert!(parse(&["-r", "5", "--end", "5,5"]).is_err());
        assert!(parse(&["--start", "3"]).is_err());
    }

    #[test]
    fn parse_cell_forms() {
        assert_eq!(parse_cell("3,4"), Ok(Point::cell(3, 4)));
        assert_eq!(parse_cell(" 3 , 4 "), Ok(Point::cell(3, 4)));
        assert!(parse_cell("x,4").is_err());
    }
}
