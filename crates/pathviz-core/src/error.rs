use thiserror::Error;

use crate::geom::Point;

/// Errors raised while editing or parsing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The position lies outside the grid.
    #[error("position {pos} is outside a {rows}x{rows} grid")]
    OutOfBounds { pos: Point, rows: i32 },
    /// A barrier cannot replace the start or end node.
    #[error("position {0} holds the start or end node")]
    Occupied(Point),
    /// ASCII input whose line count differs from some line's width.
    #[error("grid text is not square: {lines} lines, line {line} has {width} columns")]
    NotSquare {
        lines: usize,
        line: usize,
        width: usize,
    },
    /// A character outside the node alphabet.
    #[error("invalid grid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    /// More than one start or end node in ASCII input.
    #[error("duplicate {0:?} node in grid text")]
    Duplicate(crate::NodeState),
}
