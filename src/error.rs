use crate::Point;
use thiserror::Error;

/// Errors reported by [`Grid`](crate::Grid) construction and lookups.
///
/// "No path found" is deliberately absent: a failed search returns an
/// incomplete [`Path`](crate::Path), see [`Path::connects`](crate::Path::connects).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside `[0, height) × [0, width)`.
    #[error("coordinate ({row}, {col}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// The free-node walk spent its whole hop budget inside a solid region.
    #[error("no free node reachable near {origin:?} within {hops} hops")]
    NoFreeNode { origin: Point, hops: usize },

    /// A pre-built layout does not hold exactly `width × height` nodes.
    #[error("layout holds {given} nodes, not the {width}x{height} the grid needs")]
    WrongNodeCount {
        given: usize,
        width: usize,
        height: usize,
    },

    /// A pre-built layout puts a node in a slot that disagrees with the
    /// node's own coordinates.
    #[error("slot ({row}, {col}) holds the node for ({node_row}, {node_col})")]
    MisplacedNode {
        row: usize,
        col: usize,
        node_row: usize,
        node_col: usize,
    },
}
