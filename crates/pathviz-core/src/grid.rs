//! The [`Grid`] type: a square board of [`Node`]s with 4-connectivity.
//!
//! A `Grid` owns every node. Searches borrow it mutably for the duration of a
//! run and renderers borrow it immutably between steps, so there is exactly
//! one copy of node state at any time.

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::node::{Node, NodeState};

/// A square `rows × rows` grid of nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    nodes: Vec<Node>,
    // Set by barrier edits, cleared by `update_neighbors`.
    stale: bool,
}

impl Grid {
    /// Create a grid of open nodes. Adjacency starts out stale.
    pub fn new(rows: i32) -> Self {
        let rows = rows.max(0);
        let nodes = Range::new(0, 0, rows, rows).iter().map(Node::new).collect();
        Self {
            rows,
            nodes,
            stale: true,
        }
    }

    /// Parse a grid from its [`to_ascii`](Self::to_ascii) form.
    ///
    /// Blank lines and surrounding whitespace are ignored. The text must be
    /// square and contain at most one `S` and one `E`. Adjacency is refreshed
    /// before returning.
    pub fn from_ascii(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len();
        let mut grid = Grid::new(rows as i32);
        let (mut start, mut end) = (false, false);
        for (y, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != rows {
                return Err(GridError::NotSquare {
                    lines: rows,
                    line: y,
                    width,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let state = NodeState::from_char(ch).ok_or(GridError::InvalidChar { ch, pos })?;
                let seen = match state {
                    NodeState::Start => &mut start,
                    NodeState::End => &mut end,
                    _ => {
                        grid.nodes[y * rows + x].state = state;
                        continue;
                    }
                };
                if std::mem::replace(seen, true) {
                    return Err(GridError::Duplicate(state));
                }
                grid.nodes[y * rows + x].state = state;
            }
        }
        grid.update_neighbors();
        Ok(grid)
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn range(&self) -> Range {
        Range::new(0, 0, self.rows, self.rows)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range().contains(p)
    }

    /// Flat row-major index of `p`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.rows as usize + p.x as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.rows.max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The node at `p`.
    #[inline]
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.index(p).map(|i| &self.nodes[i])
    }

    /// Mutable access to the node at `p`.
    ///
    /// Changing barrier states through this handle does not mark adjacency
    /// as stale; use the editing methods for that.
    #[inline]
    pub fn node_mut(&mut self, p: Point) -> Option<&mut Node> {
        self.index(p).map(|i| &mut self.nodes[i])
    }

    /// State of the node at `p`; positions outside the grid read as barriers.
    #[inline]
    pub fn state(&self, p: Point) -> NodeState {
        self.node(p).map_or(NodeState::Barrier, Node::state)
    }

    /// Row-major iterator over all nodes.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Position of the start node, if any.
    pub fn start(&self) -> Option<Point> {
        self.find(NodeState::Start)
    }

    /// Position of the end node, if any.
    pub fn end(&self) -> Option<Point> {
        self.find(NodeState::End)
    }

    fn find(&self, state: NodeState) -> Option<Point> {
        self.nodes.iter().find(|n| n.state == state).map(Node::pos)
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Cached adjacency of `p` from the last [`update_neighbors`](Self::update_neighbors).
    #[inline]
    pub fn neighbors(&self, p: Point) -> &[Point] {
        self.node(p).map(Node::neighbors).unwrap_or_default()
    }

    /// Fresh adjacency of `p`: in-bounds, non-barrier orthogonal neighbors in
    /// the order up, right, down, left.
    pub fn compute_neighbors(&self, p: Point) -> Vec<Point> {
        p.neighbors_4()
            .into_iter()
            .filter(|&n| self.node(n).is_some_and(|node| !node.is_barrier()))
            .collect()
    }

    /// Recompute every node's adjacency against the current barrier states.
    pub fn update_neighbors(&mut self) {
        for i in 0..self.nodes.len() {
            let adj = self.compute_neighbors(self.nodes[i].pos());
            self.nodes[i].neighbors = adj;
        }
        self.stale = false;
    }

    /// Whether barriers changed since the last neighbor refresh.
    #[inline]
    pub fn needs_refresh(&self) -> bool {
        self.stale
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    fn checked(&self, p: Point) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            rows: self.rows,
        })
    }

    fn edit(&mut self, i: usize, state: NodeState) {
        if self.nodes[i].is_barrier() != state.is_barrier() {
            self.stale = true;
        }
        self.nodes[i].state = state;
    }

    /// Make `p` the start node. A previous start node becomes open.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        self.place(p, NodeState::Start, NodeState::End)
    }

    /// Make `p` the end node. A previous end node becomes open.
    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        self.place(p, NodeState::End, NodeState::Start)
    }

    fn place(&mut self, p: Point, state: NodeState, other: NodeState) -> Result<(), GridError> {
        let i = self.checked(p)?;
        if self.nodes[i].state == other {
            return Err(GridError::Occupied(p));
        }
        if let Some(old) = self.find(state) {
            let j = self.checked(old)?;
            self.edit(j, NodeState::Open);
        }
        self.edit(i, state);
        Ok(())
    }

    /// Turn `p` into a barrier.
    pub fn set_barrier(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.checked(p)?;
        if matches!(self.nodes[i].state, NodeState::Start | NodeState::End) {
            return Err(GridError::Occupied(p));
        }
        self.edit(i, NodeState::Barrier);
        Ok(())
    }

    /// Reset `p` to open, whatever it was.
    pub fn clear(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.checked(p)?;
        self.edit(i, NodeState::Open);
        Ok(())
    }

    /// Drop the marks left by a previous search, keeping start, end and
    /// barriers.
    pub fn clear_search(&mut self) {
        for n in &mut self.nodes {
            if n.state.is_search_mark() {
                n.reset();
            }
        }
    }

    /// Reset every node to open.
    pub fn reset(&mut self) {
        for n in &mut self.nodes {
            n.reset();
        }
        self.stale = true;
    }

    // -----------------------------------------------------------------------
    // Search marks
    // -----------------------------------------------------------------------
    //
    // Searches never overwrite the start and end nodes, so the at-most-one
    // start/end invariant survives any run.

    fn mark(&mut self, p: Point, f: fn(&mut Node)) {
        if let Some(n) = self.node_mut(p) {
            if !matches!(n.state, NodeState::Start | NodeState::End) {
                f(n);
            }
        }
    }

    /// Mark `p` as discovered.
    pub fn mark_frontier(&mut self, p: Point) {
        self.mark(p, Node::mark_frontier);
    }

    /// Mark `p` as expanded.
    pub fn mark_visited(&mut self, p: Point) {
        self.mark(p, Node::mark_visited);
    }

    /// Mark `p` as part of the found path.
    pub fn mark_path(&mut self, p: Point) {
        self.mark(p, Node::mark_path);
    }

    // -----------------------------------------------------------------------
    // Text form
    // -----------------------------------------------------------------------

    /// One line per row, one character per node.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.nodes.len() + self.rows as usize);
        for y in 0..self.rows {
            for x in 0..self.rows {
                out.push(self.state(Point::new(x, y)).as_char());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_square_and_open() {
        let g = Grid::new(4);
        assert_eq!(g.len(), 16);
        assert_eq!(g.rows(), 4);
        assert!(g.iter().all(|n| n.state() == NodeState::Open));
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
        assert!(g.needs_refresh());
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(5);
        let p = Point::cell(3, 1);
        let i = g.index(p).unwrap();
        assert_eq!(i, 16);
        assert_eq!(g.point(i), p);
        assert_eq!(g.index(Point::cell(5, 0)), None);
        assert_eq!(g.index(Point::cell(0, -1)), None);
    }

    #[test]
    fn corner_has_two_neighbors() {
        let mut g = Grid::new(3);
        g.update_neighbors();
        assert_eq!(
            g.neighbors(Point::cell(0, 0)),
            &[Point::cell(0, 1), Point::cell(1, 0)]
        );
        assert_eq!(g.neighbors(Point::cell(1, 1)).len(), 4);
    }

    #[test]
    fn barriers_are_excluded_after_refresh() {
        let mut g = Grid::new(3);
        g.update_neighbors();
        g.set_barrier(Point::cell(0, 1)).unwrap();
        assert!(g.needs_refresh());
        // Cached adjacency is not touched by edits.
        assert!(g.neighbors(Point::cell(0, 0)).contains(&Point::cell(0, 1)));
        g.update_neighbors();
        assert!(!g.needs_refresh());
        assert_eq!(g.neighbors(Point::cell(0, 0)), &[Point::cell(1, 0)]);
    }

    #[test]
    fn update_neighbors_is_idempotent() {
        let mut g = Grid::from_ascii(
            "
            .#..
            ..#.
            #...
            ..#.",
        )
        .unwrap();
        let before: Vec<Vec<Point>> = g.iter().map(|n| n.neighbors().to_vec()).collect();
        g.update_neighbors();
        let after: Vec<Vec<Point>> = g.iter().map(|n| n.neighbors().to_vec()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn single_start_and_end() {
        let mut g = Grid::new(4);
        g.set_start(Point::cell(0, 0)).unwrap();
        g.set_start(Point::cell(1, 1)).unwrap();
        g.set_end(Point::cell(3, 3)).unwrap();
        g.set_end(Point::cell(2, 2)).unwrap();
        assert_eq!(g.start(), Some(Point::cell(1, 1)));
        assert_eq!(g.end(), Some(Point::cell(2, 2)));
        assert_eq!(g.state(Point::cell(0, 0)), NodeState::Open);
        assert_eq!(g.state(Point::cell(3, 3)), NodeState::Open);
        let starts = g.iter().filter(|n| n.state() == NodeState::Start).count();
        let ends = g.iter().filter(|n| n.state() == NodeState::End).count();
        assert_eq!((starts, ends), (1, 1));
    }

    #[test]
    fn editing_errors() {
        let mut g = Grid::new(3);
        g.set_start(Point::cell(0, 0)).unwrap();
        assert_eq!(
            g.set_barrier(Point::cell(0, 0)),
            Err(GridError::Occupied(Point::cell(0, 0)))
        );
        assert_eq!(
            g.set_end(Point::cell(0, 0)),
            Err(GridError::Occupied(Point::cell(0, 0)))
        );
        assert!(matches!(
            g.set_barrier(Point::cell(3, 0)),
            Err(GridError::OutOfBounds { rows: 3, .. })
        ));
    }

    #[test]
    fn search_marks_skip_endpoints() {
        let mut g = Grid::new(3);
        g.set_start(Point::cell(0, 0)).unwrap();
        g.set_end(Point::cell(2, 2)).unwrap();
        g.mark_visited(Point::cell(0, 0));
        g.mark_frontier(Point::cell(2, 2));
        g.mark_path(Point::cell(1, 1));
        assert_eq!(g.state(Point::cell(0, 0)), NodeState::Start);
        assert_eq!(g.state(Point::cell(2, 2)), NodeState::End);
        assert_eq!(g.state(Point::cell(1, 1)), NodeState::Path);
        g.clear_search();
        assert_eq!(g.state(Point::cell(1, 1)), NodeState::Open);
        assert_eq!(g.state(Point::cell(0, 0)), NodeState::Start);
    }

    #[test]
    fn ascii_round_trip() {
        let text = "S.#\n.o+\n*#E\n";
        let g = Grid::from_ascii(text).unwrap();
        assert_eq!(g.to_ascii(), text);
        assert_eq!(g.start(), Some(Point::cell(0, 0)));
        assert_eq!(g.end(), Some(Point::cell(2, 2)));
    }

    #[test]
    fn ascii_errors() {
        assert!(matches!(
            Grid::from_ascii("..\n..."),
            Err(GridError::NotSquare { line: 1, .. })
        ));
        assert_eq!(
            Grid::from_ascii("..\n.x"),
            Err(GridError::InvalidChar {
                ch: 'x',
                pos: Point::cell(1, 1)
            })
        );
        assert_eq!(
            Grid::from_ascii("S.\n.S"),
            Err(GridError::Duplicate(NodeState::Start))
        );
        assert!(Grid::from_ascii("").unwrap().is_empty());
    }
}
