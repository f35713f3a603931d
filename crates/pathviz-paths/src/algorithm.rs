use std::fmt;
use std::str::FromStr;

use pathviz_core::{Grid, Point};
use thiserror::Error;

use crate::cancel::Cancel;
use crate::search::Outcome;
use crate::traits::Observer;

/// The five available searches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
    Bfs,
    Dfs,
    Bidirectional,
}

/// Signature shared by every search function.
pub type SearchFn<O> = fn(&mut Grid, Point, Point, &mut O, &Cancel) -> Outcome;

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 5] = [
        Self::AStar,
        Self::Dijkstra,
        Self::Bfs,
        Self::Dfs,
        Self::Bidirectional,
    ];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "A* Search",
            Self::Dijkstra => "Dijkstra",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Bidirectional => "Bidirectional Search",
        }
    }

    /// The search function implementing this algorithm.
    pub fn search_fn<O: Observer>(self) -> SearchFn<O> {
        match self {
            Self::AStar => crate::astar::astar::<O>,
            Self::Dijkstra => crate::dijkstra::dijkstra::<O>,
            Self::Bfs => crate::bfs::bfs::<O>,
            Self::Dfs => crate::dfs::dfs::<O>,
            Self::Bidirectional => crate::bidirectional::bidirectional::<O>,
        }
    }

    /// Run the search from `start` to `end`.
    ///
    /// Neighbor lists must have been refreshed with
    /// [`Grid::update_neighbors`] after the last barrier edit.
    pub fn run<O: Observer>(
        self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        observer: &mut O,
        cancel: &Cancel,
    ) -> Outcome {
        (self.search_fn::<O>())(grid, start, end, observer, cancel)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?} (expected astar, dijkstra, bfs, dfs or bidirectional)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "astar" | "a*" | "a*search" | "astarsearch" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            "bfs" | "breadthfirst" => Ok(Self::Bfs),
            "dfs" | "depthfirst" => Ok(Self::Dfs),
            "bidirectional" | "bidi" | "bidirectionalsearch" => Ok(Self::Bidirectional),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
