use pathviz_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::bfs::traverse;
use crate::cancel::Cancel;
use crate::search::{Outcome, Run};
use crate::traits::Observer;

/// Depth-first search from `start` to `end`.
///
/// Uses a stack for the frontier. The path it returns is valid but usually
/// not the shortest one.
pub fn dfs<O: Observer + ?Sized>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    observer: &mut O,
    cancel: &Cancel,
) -> Outcome {
    match Run::begin(Algorithm::Dfs, grid, start, end, observer, cancel) {
        Ok(run) => traverse::<Vec<usize>, O>(run),
        Err(outcome) => outcome,
    }
}
