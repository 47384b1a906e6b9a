use crate::Point;
use std::ops::Index;

/// The result of a search: a chain of cell positions from the goal back to
/// the start.
///
/// The first element is the search's end (its goal), the last is the
/// search's start. A search that never reached its goal returns an
/// incomplete chain — usually the bare goal — so [`Path::connects`] is the
/// way to tell success from failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<Point>,
}

impl Path {
    /// An empty path.
    pub fn new() -> Path {
        Path::default()
    }

    /// A path over nodes already in goal-to-start order.
    pub fn from_nodes(nodes: Vec<Point>) -> Path {
        Path { nodes }
    }

    /// The search's start node — the last element of the chain.
    pub fn start(&self) -> Option<Point> {
        self.nodes.last().copied()
    }

    /// The search's goal node — the first element of the chain.
    pub fn end(&self) -> Option<Point> {
        self.nodes.first().copied()
    }

    /// The open interior of the chain: everything but the first and last
    /// element. Empty whenever the chain holds two or fewer nodes.
    pub fn interior(&self) -> &[Point] {
        if self.nodes.len() > 2 {
            &self.nodes[1..self.nodes.len() - 1]
        } else {
            &[]
        }
    }

    /// Every node of the chain, goal first.
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Number of nodes in the chain.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of unit steps along the chain; one less than [`Path::len`]
    /// unless the chain is empty.
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Whether the chain actually runs from `goal` back to `start`.
    pub fn connects(&self, start: Point, goal: Point) -> bool {
        self.end() == Some(goal) && self.start() == Some(start)
    }

    /// Append a node to the chain.
    pub fn push(&mut self, node: Point) {
        self.nodes.push(node);
    }

    /// Clear the chain.
    pub fn disband(&mut self) {
        self.nodes.clear();
    }

    /// Replace the chain wholesale.
    ///
    /// Interactive callers reseed with `[path.end(), new_start]` (keeping
    /// the goal-first convention) before asking the grid for a fresh
    /// search.
    pub fn reseed(&mut self, nodes: impl IntoIterator<Item = Point>) {
        self.nodes = nodes.into_iter().collect();
    }

    /// Iterate the chain, goal first.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().copied()
    }
}

impl Index<usize> for Path {
    type Output = Point;

    #[track_caller]
    fn index(&self, index: usize) -> &Point {
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}
