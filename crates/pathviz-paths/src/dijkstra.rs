use std::collections::BinaryHeap;

use pathviz_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::cancel::Cancel;
use crate::reconstruct::{PredecessorMap, reconstruct};
use crate::search::{Entry, Outcome, Run, UNREACHABLE};
use crate::traits::Observer;

/// Uniform-cost (Dijkstra) search from `start` to `end`.
///
/// Every move costs 1. The frontier is keyed by `(g, insertion order)`.
pub fn dijkstra<O: Observer + ?Sized>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    observer: &mut O,
    cancel: &Cancel,
) -> Outcome {
    match Run::begin(Algorithm::Dijkstra, grid, start, end, observer, cancel) {
        Ok(run) => best_first(run, |_| 0),
        Err(outcome) => outcome,
    }
}

/// Best-first search keyed by `g + estimate(node)`; Dijkstra passes a zero
/// estimate, A* the distance to the end.
///
/// A node enters the open set once. When its g-score improves while it is
/// still open, the score and predecessor are updated but the queued entry
/// keeps its old key (no decrease-key). With unit costs this does not change
/// which path is found.
pub(crate) fn best_first<O: Observer + ?Sized>(
    mut run: Run<'_, O>,
    estimate: impl Fn(Point) -> i32,
) -> Outcome {
    let len = run.len();
    let mut g_score = vec![UNREACHABLE; len];
    let mut f_score = vec![UNREACHABLE; len];
    let mut open = vec![false; len];
    let mut came_from = PredecessorMap::new(len);
    let mut queue = BinaryHeap::new();
    let mut seq: u64 = 0;

    g_score[run.start] = 0;
    f_score[run.start] = estimate(run.point(run.start));
    open[run.start] = true;
    queue.push(Entry {
        score: f_score[run.start],
        seq,
        idx: run.start,
    });

    loop {
        if run.cancelled() {
            return run.finish(Outcome::Cancelled);
        }
        let Some(Entry { idx: current, .. }) = queue.pop() else {
            return run.finish(Outcome::NotFound);
        };
        open[current] = false;

        if current == run.end {
            let path = reconstruct(&mut run, &came_from);
            return run.finish(Outcome::Found(path));
        }

        let tentative = g_score[current] + 1;
        run.expand(current, |run, ni, np| {
            if tentative >= g_score[ni] {
                return;
            }
            came_from.set(ni, current);
            g_score[ni] = tentative;
            f_score[ni] = tentative + estimate(np);
            if !open[ni] {
                seq += 1;
                queue.push(Entry {
                    score: f_score[ni],
                    seq,
                    idx: ni,
                });
                open[ni] = true;
                run.mark_frontier(ni);
            }
        });

        run.step();
        run.mark_visited(current);
    }
}
