//! A* shortest paths between cells of a 2D occupancy grid.
//!
//! A [`Grid`] owns a fixed `width × height` field of [`Node`]s, each either
//! free or solid. [`Grid::find_path`] runs an A* search between two cells
//! over the Moore (8-connected) neighborhood with unit step cost and returns
//! a [`Path`]: the chain of cell positions from the goal back to the start.
//!
//! Searches keep their working state (costs, predecessors) in a per-call
//! table instead of on the nodes, so repeated searches never contaminate
//! each other and `find_path` borrows the grid immutably.
//!
//! # Example
//!
//! ```
//! use gridpath::{heuristics, Grid};
//!
//! // a 20x10 field with a wall across most of column 6
//! let mut grid = Grid::new(20, 10);
//! for row in 0..8 {
//!     grid.node_mut(row, 6).solid = true;
//! }
//!
//! let path = grid.find_path((0, 0), (19, 9), heuristics::chebyshev);
//!
//! assert!(path.connects((0, 0), (19, 9)));
//! assert_eq!(path.end(), Some((19, 9))); // chains run goal-to-start
//! assert_eq!(path.start(), Some((0, 0)));
//! assert_eq!(path.len(), 22); // forced through the gap at (8..10, 6)
//! ```
//!
//! A search that cannot reach its goal still returns a [`Path`] — an
//! incomplete one — rather than an error; check the outcome with
//! [`Path::connects`]. Random obstacle scatter and free-cell lookup near a
//! blocked coordinate are provided by [`Grid::generate_obstacles`] and
//! [`Grid::find_free_node_near`].

/// A cell position as a `(column, row)` pair.
///
/// This is the identity order produced by [`Node::pos`] — the transpose of
/// the `(row, col)` order taken by [`Grid`] coordinate arguments.
pub type Point = (usize, usize);

/// Path cost: the number of unit steps taken.
pub type Cost = usize;

pub(crate) type PointMap<V> = hashbrown::HashMap<Point, V>;
pub(crate) type PointSet = hashbrown::HashSet<Point>;

mod error;
mod grid;
pub mod heuristics;
mod node;
mod path;

pub use error::GridError;
pub use grid::Grid;
pub use node::Node;
pub use path::Path;

/// The most common imports, glob-ready.
pub mod prelude {
    pub use crate::heuristics::{chebyshev, diagonal, manhattan};
    pub use crate::{Cost, Grid, GridError, Node, Path, Point};
}
