//! **pathviz-core**: grid and node types for the pathfinding visualizer.
//!
//! A [`Grid`] owns a square board of [`Node`]s. Each node carries a
//! [`NodeState`] and a cached list of its open orthogonal neighbors, which
//! the search engine in `pathviz-paths` walks.

pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use node::{Node, NodeState};
