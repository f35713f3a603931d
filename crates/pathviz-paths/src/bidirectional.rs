use std::collections::VecDeque;

use pathviz_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::cancel::Cancel;
use crate::reconstruct::{PredecessorMap, reconstruct_bidirectional};
use crate::search::{Outcome, Run};
use crate::traits::Observer;

/// One half of a bidirectional search: a BFS frontier with its own visited
/// set and predecessor map.
struct Side {
    queue: VecDeque<usize>,
    visited: Vec<bool>,
    came_from: PredecessorMap,
}

impl Side {
    fn new(root: usize, len: usize) -> Self {
        let mut visited = vec![false; len];
        visited[root] = true;
        Self {
            queue: VecDeque::from([root]),
            visited,
            came_from: PredecessorMap::new(len),
        }
    }

    /// Push every unvisited neighbor of `current`.
    fn expand<O: Observer + ?Sized>(&mut self, run: &mut Run<'_, O>, current: usize) {
        run.expand(current, |run, ni, _| {
            if self.visited[ni] {
                return;
            }
            self.came_from.set(ni, current);
            self.queue.push_back(ni);
            self.visited[ni] = true;
            run.mark_frontier(ni);
        });
    }
}

/// Bidirectional breadth-first search.
///
/// Each round pops one node from the forward frontier (rooted at `start`)
/// and then one from the backward frontier (rooted at `end`). The first
/// popped node already seen by the opposite side becomes the meeting point.
/// That join is accepted immediately, so the path is not guaranteed to be
/// the shortest one.
pub fn bidirectional<O: Observer + ?Sized>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    observer: &mut O,
    cancel: &Cancel,
) -> Outcome {
    let mut run = match Run::begin(Algorithm::Bidirectional, grid, start, end, observer, cancel) {
        Ok(run) => run,
        Err(outcome) => return outcome,
    };

    let mut forward = Side::new(run.start, run.len());
    let mut backward = Side::new(run.end, run.len());

    while !forward.queue.is_empty() && !backward.queue.is_empty() {
        if run.cancelled() {
            return run.finish(Outcome::Cancelled);
        }

        let Some(fwd) = forward.queue.pop_front() else {
            break;
        };
        if backward.visited[fwd] {
            let path =
                reconstruct_bidirectional(&mut run, &forward.came_from, &backward.came_from, fwd);
            return run.finish(Outcome::Found(path));
        }
        forward.expand(&mut run, fwd);
        run.step();

        let Some(bwd) = backward.queue.pop_front() else {
            break;
        };
        if forward.visited[bwd] {
            let path =
                reconstruct_bidirectional(&mut run, &forward.came_from, &backward.came_from, bwd);
            return run.finish(Outcome::Found(path));
        }
        backward.expand(&mut run, bwd);
        run.step();

        run.mark_visited(fwd);
        run.mark_visited(bwd);
    }

    run.finish(Outcome::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Silent;
    use pathviz_core::NodeState;

    fn search(grid: &mut Grid) -> Outcome {
        let (s, e) = (grid.start().unwrap(), grid.end().unwrap());
        bidirectional(grid, s, e, &mut Silent, &Cancel::new())
    }

    #[test]
    fn corridor_meets_in_the_middle() {
        let mut grid = Grid::from_ascii(
            "
            #####
            #####
            S...E
            #####
            #####",
        )
        .unwrap();
        let out = search(&mut grid);
        assert_eq!(
            out.path().unwrap(),
            &[
                Point::cell(2, 0),
                Point::cell(2, 1),
                Point::cell(2, 2),
                Point::cell(2, 3),
                Point::cell(2, 4),
            ]
        );
        assert_eq!(grid.state(Point::cell(2, 0)), NodeState::Start);
        assert_eq!(grid.state(Point::cell(2, 4)), NodeState::End);
        for c in 1..4 {
            assert_eq!(grid.state(Point::cell(2, c)), NodeState::Path);
        }
    }

    #[test]
    fn adjacent_endpoints() {
        let mut grid = Grid::from_ascii(
            "
            SE
            ..",
        )
        .unwrap();
        let out = search(&mut grid);
        assert_eq!(out.steps(), Some(1));
    }

    #[test]
    fn fails_when_backward_side_is_walled_in() {
        let mut grid = Grid::from_ascii(
            "
            S...
            ....
            ..##
            ..#E",
        )
        .unwrap();
        let mut steps = 0;
        let out = bidirectional(
            &mut grid,
            Point::cell(0, 0),
            Point::cell(3, 3),
            &mut |_: &Grid| steps += 1,
            &Cancel::new(),
        );
        assert_eq!(out, Outcome::NotFound);
        // One round: forward then backward, then the backward queue is empty.
        assert_eq!(steps, 2);
    }
}
