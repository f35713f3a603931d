use std::collections::VecDeque;
use std::fmt;

use log::{debug, warn};
use pathviz_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::cancel::Cancel;
use crate::traits::Observer;

/// Result of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A path from start to end, both included. A single node when start
    /// and end coincide.
    Found(Vec<Point>),
    /// The frontier emptied without reaching the end.
    NotFound,
    /// The run stopped early on request. Visitation marks stay on the grid.
    Cancelled,
}

impl Outcome {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The found path, if any.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    /// Number of moves along the found path.
    pub fn steps(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(p) => write!(f, "found a {}-step path", p.len().saturating_sub(1)),
            Self::NotFound => f.write_str("no path"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

// ---------------------------------------------------------------------------
// Frontier orderings
// ---------------------------------------------------------------------------

/// Removal order for the uninformed traversals.
pub(crate) trait Frontier: Default {
    fn push(&mut self, idx: usize);
    fn pop(&mut self) -> Option<usize>;
}

/// LIFO: depth-first.
impl Frontier for Vec<usize> {
    #[inline]
    fn push(&mut self, idx: usize) {
        Vec::push(self, idx);
    }

    #[inline]
    fn pop(&mut self) -> Option<usize> {
        Vec::pop(self)
    }
}

/// FIFO: breadth-first.
impl Frontier for VecDeque<usize> {
    #[inline]
    fn push(&mut self, idx: usize) {
        self.push_back(idx);
    }

    #[inline]
    fn pop(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// Priority-queue entry for Dijkstra / A*, ordered by `(score, seq)`.
///
/// `seq` grows with every insertion, so among equal scores the entry pushed
/// first is popped first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) score: i32,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel g-score for nodes not reached yet.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// State shared by every algorithm for the duration of one invocation: the
/// borrowed grid, the observer, the cancellation flag and a few counters for
/// the closing log line.
pub(crate) struct Run<'a, O: Observer + ?Sized> {
    pub(crate) grid: &'a mut Grid,
    observer: &'a mut O,
    cancel: &'a Cancel,
    algorithm: Algorithm,
    pub(crate) start: usize,
    pub(crate) end: usize,
    steps: usize,
    expanded: usize,
    // Scratch buffer so neighbor lists can be read while the grid is marked.
    nbuf: Vec<Point>,
}

impl<'a, O: Observer + ?Sized> Run<'a, O> {
    /// Validate the endpoints and set up a run. Returns the outcome directly
    /// when the run is decided before any expansion.
    pub(crate) fn begin(
        algorithm: Algorithm,
        grid: &'a mut Grid,
        start: Point,
        end: Point,
        observer: &'a mut O,
        cancel: &'a Cancel,
    ) -> Result<Self, Outcome> {
        let (Some(si), Some(ei)) = (grid.index(start), grid.index(end)) else {
            warn!("{algorithm}: endpoint outside the grid ({start} -> {end})");
            return Err(Outcome::NotFound);
        };
        if grid.needs_refresh() {
            warn!("{algorithm}: neighbor lists are stale, barriers edited since last refresh");
        }
        if si == ei {
            debug!("{algorithm}: start equals end at {start}");
            return Err(Outcome::Found(vec![start]));
        }
        Ok(Self {
            grid,
            observer,
            cancel,
            algorithm,
            start: si,
            end: ei,
            steps: 0,
            expanded: 0,
            nbuf: Vec::with_capacity(4),
        })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.grid.len()
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.grid.point(idx)
    }

    /// Whether the driver asked to stop.
    #[inline]
    pub(crate) fn cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Hand the grid to the observer.
    #[inline]
    pub(crate) fn step(&mut self) {
        self.steps += 1;
        self.observer.step(&*self.grid);
    }

    /// Call `f` with the flat index and position of each cached neighbor of
    /// `idx`, with mutable access to the run.
    pub(crate) fn expand(&mut self, idx: usize, mut f: impl FnMut(&mut Self, usize, Point)) {
        self.expanded += 1;
        let cp = self.point(idx);
        log::trace!("{}: expanding {cp}", self.algorithm);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        nbuf.extend_from_slice(self.grid.neighbors(cp));
        for &np in &nbuf {
            if let Some(ni) = self.grid.index(np) {
                f(self, ni, np);
            }
        }
        self.nbuf = nbuf;
    }

    /// Whether `idx` is this run's start or end. Those nodes keep their
    /// state whatever they are tagged on the grid.
    #[inline]
    pub(crate) fn is_endpoint(&self, idx: usize) -> bool {
        idx == self.start || idx == self.end
    }

    #[inline]
    pub(crate) fn mark_frontier(&mut self, idx: usize) {
        if !self.is_endpoint(idx) {
            let p = self.point(idx);
            self.grid.mark_frontier(p);
        }
    }

    #[inline]
    pub(crate) fn mark_visited(&mut self, idx: usize) {
        if !self.is_endpoint(idx) {
            let p = self.point(idx);
            self.grid.mark_visited(p);
        }
    }

    #[inline]
    pub(crate) fn mark_path(&mut self, idx: usize) {
        if !self.is_endpoint(idx) {
            let p = self.point(idx);
            self.grid.mark_path(p);
        }
    }

    /// Log a summary and return `outcome`.
    pub(crate) fn finish(self, outcome: Outcome) -> Outcome {
        debug!(
            "{}: {} ({} expanded, {} steps)",
            self.algorithm, outcome, self.expanded, self.steps
        );
        outcome
    }
}
