//! Step-by-step grid search algorithms.
//!
//! Five searches run over a [`pathviz_core::Grid`], marking nodes as they
//! are discovered, expanded and finally put on the path, and handing the grid
//! to an [`Observer`] after every step so a front-end can animate the run:
//!
//! - **Depth-first** ([`dfs`]): stack frontier, some path, not the shortest
//! - **Breadth-first** ([`bfs`]): FIFO frontier, shortest in edge count
//! - **Bidirectional** ([`bidirectional`]): two BFS frontiers, first meeting wins
//! - **Dijkstra** ([`dijkstra`]): priority queue keyed by `(g, insertion order)`
//! - **A\*** ([`astar`]): priority queue keyed by `(g + manhattan, insertion order)`
//!
//! All search-scoped state (frontier, visited set, predecessor map, score
//! maps) lives inside a single call. The only state that outlives a run is
//! the node marks on the grid. Start and end nodes keep their marks.
//!
//! Runs are cooperative: a shared [`Cancel`] flag is checked once per round
//! and a raised flag ends the run with [`Outcome::Cancelled`].

mod algorithm;
mod astar;
mod bfs;
mod bidirectional;
mod cancel;
mod dfs;
mod dijkstra;
mod distance;
mod reconstruct;
mod search;
mod traits;


pub use algorithm::{Algorithm, SearchFn, UnknownAlgorithm};
pub use astar::astar;
pub use bfs::bfs;
pub use bidirectional::bidirectional;
pub use cancel::Cancel;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use search::Outcome;
pub use traits::{Observer, Silent};
