use std::collections::VecDeque;

use pathviz_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::cancel::Cancel;
use crate::reconstruct::{PredecessorMap, reconstruct};
use crate::search::{Frontier, Outcome, Run};
use crate::traits::Observer;

/// Breadth-first search from `start` to `end`.
///
/// Expands nodes in FIFO order, so the returned path is shortest in edge
/// count.
pub fn bfs<O: Observer + ?Sized>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    observer: &mut O,
    cancel: &Cancel,
) -> Outcome {
    match Run::begin(Algorithm::Bfs, grid, start, end, observer, cancel) {
        Ok(run) => traverse::<VecDeque<usize>, O>(run),
        Err(outcome) => outcome,
    }
}

/// Uninformed traversal shared by BFS and DFS; `F` decides the removal order.
///
/// A node counts as visited as soon as it is discovered, so every node is
/// pushed at most once.
pub(crate) fn traverse<F: Frontier, O: Observer + ?Sized>(mut run: Run<'_, O>) -> Outcome {
    let mut frontier = F::default();
    let mut visited = vec![false; run.len()];
    let mut came_from = PredecessorMap::new(run.len());

    frontier.push(run.start);
    visited[run.start] = true;

    loop {
        if run.cancelled() {
            return run.finish(Outcome::Cancelled);
        }
        let Some(current) = frontier.pop() else {
            return run.finish(Outcome::NotFound);
        };

        if current == run.end {
            let path = reconstruct(&mut run, &came_from);
            return run.finish(Outcome::Found(path));
        }

        run.expand(current, |run, ni, _| {
            if visited[ni] {
                return;
            }
            visited[ni] = true;
            came_from.set(ni, current);
            run.mark_frontier(ni);
            frontier.push(ni);
        });

        run.step();
        run.mark_visited(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Silent;

    #[test]
    fn open_grid_path_is_manhattan() {
        let mut grid = Grid::new(5);
        grid.update_neighbors();
        let out = bfs(
            &mut grid,
            Point::cell(0, 0),
            Point::cell(4, 4),
            &mut Silent,
            &Cancel::new(),
        );
        assert_eq!(out.steps(), Some(8));
    }

    #[test]
    fn ties_follow_neighbor_order() {
        // Up, right, down, left: the first route discovered goes right first.
        let mut grid = Grid::new(3);
        grid.update_neighbors();
        let out = bfs(
            &mut grid,
            Point::cell(0, 0),
            Point::cell(1, 1),
            &mut Silent,
            &Cancel::new(),
        );
        assert_eq!(
            out.path().unwrap(),
            &[Point::cell(0, 0), Point::cell(0, 1), Point::cell(1, 1)]
        );
    }

    #[test]
    fn observer_runs_once_per_expansion() {
        let mut grid = Grid::from_ascii(
            "
            S..
            ###
            ..E",
        )
        .unwrap();
        let mut steps = 0;
        let out = bfs(
            &mut grid,
            Point::cell(0, 0),
            Point::cell(2, 2),
            &mut |_: &Grid| steps += 1,
            &Cancel::new(),
        );
        assert_eq!(out, Outcome::NotFound);
        // Three reachable nodes, one step each.
        assert_eq!(steps, 3);
        assert_eq!(grid.to_ascii(), "Soo\n###\n..E\n");
    }

    #[test]
    fn cancellation_stops_at_the_next_round() {
        let mut grid = Grid::new(6);
        grid.update_neighbors();
        let cancel = Cancel::new();
        let mut steps = 0;
        let flag = cancel.clone();
        let out = bfs(
            &mut grid,
            Point::cell(0, 0),
            Point::cell(5, 5),
            &mut |_: &Grid| {
                steps += 1;
                if steps == 2 {
                    flag.cancel();
                }
            },
            &cancel,
        );
        assert_eq!(out, Outcome::Cancelled);
        assert_eq!(steps, 2);
        // Partial marks stay behind.
        assert_eq!(grid.state(Point::cell(0, 1)), pathviz_core::NodeState::Visited);
    }
}
