//! The [`Node`] type: one grid square with a traversal state.

use crate::geom::Point;

/// Traversal state of a grid node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    #[default]
    Open,
    Start,
    End,
    Barrier,
    /// Expanded (closed) by a search.
    Visited,
    /// Discovered but not yet expanded.
    Frontier,
    /// Part of a reconstructed path.
    Path,
}

impl NodeState {
    /// Whether the node blocks movement.
    #[inline]
    pub const fn is_barrier(self) -> bool {
        matches!(self, Self::Barrier)
    }

    /// Whether the state was written by a search run rather than by editing.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Visited | Self::Frontier | Self::Path)
    }

    /// Single-character form used by [`Grid::to_ascii`](crate::Grid::to_ascii).
    pub const fn as_char(self) -> char {
        match self {
            Self::Open => '.',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Barrier => '#',
            Self::Visited => 'o',
            Self::Frontier => '+',
            Self::Path => '*',
        }
    }

    /// Inverse of [`as_char`](Self::as_char).
    pub const fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            '.' => Self::Open,
            'S' => Self::Start,
            'E' => Self::End,
            '#' => Self::Barrier,
            'o' => Self::Visited,
            '+' => Self::Frontier,
            '*' => Self::Path,
            _ => return None,
        })
    }
}

/// A single grid square.
///
/// The position never changes after construction. `neighbors` is derived
/// data: it is only refreshed by [`Grid::update_neighbors`](crate::Grid::update_neighbors)
/// and goes stale as soon as barriers are edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pos: Point,
    pub(crate) state: NodeState,
    pub(crate) neighbors: Vec<Point>,
}

impl Node {
    /// Create an open node at `pos` with no known neighbors.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            state: NodeState::Open,
            neighbors: Vec::new(),
        }
    }

    /// Grid position.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row()
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col()
    }

    #[inline]
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Adjacency as of the last neighbor refresh.
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state.is_barrier()
    }

    #[inline]
    pub fn mark_frontier(&mut self) {
        self.state = NodeState::Frontier;
    }

    #[inline]
    pub fn mark_visited(&mut self) {
        self.state = NodeState::Visited;
    }

    #[inline]
    pub fn mark_path(&mut self) {
        self.state = NodeState::Path;
    }

    #[inline]
    pub fn mark_start(&mut self) {
        self.state = NodeState::Start;
    }

    #[inline]
    pub fn mark_end(&mut self) {
        self.state = NodeState::End;
    }

    #[inline]
    pub fn mark_barrier(&mut self) {
        self.state = NodeState::Barrier;
    }

    /// Back to [`NodeState::Open`].
    #[inline]
    pub fn reset(&mut self) {
        self.state = NodeState::Open;
    }
}
