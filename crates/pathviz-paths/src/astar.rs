use pathviz_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::cancel::Cancel;
use crate::dijkstra::best_first;
use crate::distance::manhattan;
use crate::search::{Outcome, Run};
use crate::traits::Observer;

/// A* search from `start` to `end`, guided by the Manhattan distance to
/// `end`.
///
/// The frontier is keyed by `(g + h, insertion order)`; open-set membership
/// is tracked per node, exactly as in [`dijkstra`](crate::dijkstra).
pub fn astar<O: Observer + ?Sized>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    observer: &mut O,
    cancel: &Cancel,
) -> Outcome {
    match Run::begin(Algorithm::AStar, grid, start, end, observer, cancel) {
        Ok(run) => best_first(run, |p| manhattan(p, end)),
        Err(outcome) => outcome,
    }
}
