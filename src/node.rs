use crate::Point;
use std::hash::{Hash, Hasher};

/// A single cell of a [`Grid`](crate::Grid).
///
/// Coordinates are fixed at construction; only the occupancy flag is
/// mutable. Equality and hashing use the coordinates alone, so nodes stay
/// reliable map and set keys no matter how often their occupancy changes.
#[derive(Clone, Debug)]
pub struct Node {
    row: usize,
    col: usize,
    /// Whether this cell counts as an obstacle.
    pub solid: bool,
}

impl Node {
    /// A free node at `(row, col)`.
    pub fn new(row: usize, col: usize) -> Node {
        Node {
            row,
            col,
            solid: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// The cell's identity as a [`Point`].
    ///
    /// Note the order: `pos` is `(col, row)`, while [`Node::new`] takes
    /// `(row, col)`.
    pub fn pos(&self) -> Point {
        (self.col, self.row)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        // identity is the coordinate pair, not the occupancy flag
        self.row == other.row && self.col == other.col
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_transposes_row_col() {
        let node = Node::new(1, 3);
        assert_eq!(node.row(), 1);
        assert_eq!(node.col(), 3);
        assert_eq!(node.pos(), (3, 1));
    }

    #[test]
    fn identity_ignores_occupancy() {
        let free = Node::new(2, 5);
        let mut solid = Node::new(2, 5);
        solid.solid = true;
        assert_eq!(free, solid);

        let mut set = hashbrown::HashSet::new();
        set.insert(free);
        assert!(set.contains(&solid));
    }

    #[test]
    fn distinct_coordinates_differ() {
        assert_ne!(Node::new(2, 5), Node::new(5, 2));
    }
}
