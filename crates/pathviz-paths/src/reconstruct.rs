use pathviz_core::Point;

use crate::search::Run;
use crate::traits::Observer;

/// Per-run record of which node each discovered node was reached from,
/// keyed by flat grid index.
#[derive(Clone, Debug)]
pub(crate) struct PredecessorMap {
    from: Vec<Option<usize>>,
}

impl PredecessorMap {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            from: vec![None; len],
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, node: usize, parent: usize) {
        self.from[node] = Some(parent);
    }

    #[inline]
    pub(crate) fn get(&self, node: usize) -> Option<usize> {
        self.from[node]
    }
}

/// Walk `came_from` backwards from `terminal` until a node without a
/// predecessor (the root of the search).
///
/// Every node strictly between `terminal` and the root is marked as path, and
/// the observer runs after each mark. Returns the chain from `terminal` to
/// the root, both included.
pub(crate) fn trace<O: Observer + ?Sized>(
    run: &mut Run<'_, O>,
    came_from: &PredecessorMap,
    terminal: usize,
) -> Vec<usize> {
    let mut chain = vec![terminal];
    let mut current = terminal;
    while let Some(prev) = came_from.get(current) {
        current = prev;
        chain.push(current);
        if came_from.get(current).is_some() {
            run.mark_path(current);
            run.step();
        }
    }
    chain
}

/// Reconstruct the path from the run's start to its end.
pub(crate) fn reconstruct<O: Observer + ?Sized>(
    run: &mut Run<'_, O>,
    came_from: &PredecessorMap,
) -> Vec<Point> {
    let end = run.end;
    let mut chain = trace(run, came_from, end);
    chain.reverse();
    chain.into_iter().map(|i| run.point(i)).collect()
}

/// Reconstruct a path that joins a forward and a backward search at
/// `meet`, which is marked first and appears once in the result. The forward
/// chain is marked next, walking back towards the start, then the backward
/// chain towards the end.
pub(crate) fn reconstruct_bidirectional<O: Observer + ?Sized>(
    run: &mut Run<'_, O>,
    forward: &PredecessorMap,
    backward: &PredecessorMap,
    meet: usize,
) -> Vec<Point> {
    if !run.is_endpoint(meet) {
        run.mark_path(meet);
        run.step();
    }

    let mut chain = trace(run, forward, meet);
    chain.reverse();
    let back = trace(run, backward, meet);
    chain.extend(back.into_iter().skip(1));
    chain.into_iter().map(|i| run.point(i)).collect()
}
