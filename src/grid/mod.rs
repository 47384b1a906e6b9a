mod astar;

use crate::{error::GridError, Cost, Node, Path, Point, PointSet};

use nanorand::{Rng, WyRand};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A fixed `width × height` field of [`Node`]s with obstacle handling and
/// path search.
///
/// Rows index the vertical axis and columns the horizontal one; coordinate
/// arguments are `(row, col)` while node identities ([`Node::pos`], search
/// endpoints, [`Path`] contents) are `(col, row)` [`Point`]s. The grid owns
/// every node exclusively: each in-bounds coordinate maps to exactly one
/// node for the grid's whole lifetime.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major: the node for `(row, col)` sits at `row * width + col`.
    nodes: Vec<Node>,
}

impl Grid {
    /// An all-free grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Grid {
        let mut nodes = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                nodes.push(Node::new(row, col));
            }
        }
        Grid {
            width,
            height,
            nodes,
        }
    }

    /// A grid whose occupancy is decided by `solid(row, col)`.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut solid: impl FnMut(usize, usize) -> bool,
    ) -> Grid {
        let mut grid = Grid::new(width, height);
        for node in &mut grid.nodes {
            node.solid = solid(node.row(), node.col());
        }
        grid
    }

    /// A grid over a pre-built row-major node layout.
    ///
    /// Every slot must hold the node whose coordinates name that slot, so a
    /// well-formed grid can never alias two coordinates to one node; a
    /// layout that is too short, too long, or shuffled is rejected.
    pub fn from_nodes(width: usize, height: usize, nodes: Vec<Node>) -> Result<Grid, GridError> {
        if nodes.len() != width * height {
            return Err(GridError::WrongNodeCount {
                given: nodes.len(),
                width,
                height,
            });
        }
        for (slot, node) in nodes.iter().enumerate() {
            let (row, col) = (slot / width, slot % width);
            if node.row() != row || node.col() != col {
                return Err(GridError::MisplacedNode {
                    row,
                    col,
                    node_row: node.row(),
                    node_col: node.col(),
                });
            }
        }
        Ok(Grid {
            width,
            height,
            nodes,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// The node at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&Node> {
        self.in_bounds(row, col)
            .then(|| &self.nodes[row * self.width + col])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Node> {
        self.in_bounds(row, col)
            .then(|| &mut self.nodes[row * self.width + col])
    }

    /// The node at `(row, col)`.
    ///
    /// Panics outside the grid; [`Grid::get`] is the checked variant.
    #[track_caller]
    pub fn node(&self, row: usize, col: usize) -> &Node {
        match self.get(row, col) {
            Some(node) => node,
            None => panic!(
                "coordinate ({}, {}) lies outside the {}x{} grid",
                row, col, self.width, self.height
            ),
        }
    }

    /// Mutable access to the node at `(row, col)`, e.g. to toggle
    /// [`Node::solid`] by hand.
    ///
    /// Panics outside the grid; [`Grid::get_mut`] is the checked variant.
    #[track_caller]
    pub fn node_mut(&mut self, row: usize, col: usize) -> &mut Node {
        let (width, height) = (self.width, self.height);
        match self.get_mut(row, col) {
            Some(node) => node,
            None => panic!(
                "coordinate ({}, {}) lies outside the {}x{} grid",
                row, col, width, height
            ),
        }
    }

    /// Write the in-bounds Moore neighborhood of `p` into `out`, in
    /// row-major offset order. The order is fixed so that searches break
    /// ties the same way on every run.
    fn fill_neighbors(&self, (col, row): Point, out: &mut Vec<Point>) {
        for dr in -1..=1_isize {
            for dc in -1..=1_isize {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (r, c) = (row as isize + dr, col as isize + dc);
                if r >= 0 && c >= 0 && (r as usize) < self.height && (c as usize) < self.width {
                    out.push((c as usize, r as usize));
                }
            }
        }
    }

    /// All in-bounds Moore neighbors of `(row, col)`, solid or not.
    ///
    /// Panics outside the grid.
    #[track_caller]
    pub fn neighbors(&self, row: usize, col: usize) -> Vec<Point> {
        let pos = self.node(row, col).pos();
        let mut out = Vec::with_capacity(8);
        self.fill_neighbors(pos, &mut out);
        out
    }

    /// The Moore neighbors of `(row, col)` whose nodes satisfy `predicate`.
    ///
    /// Panics outside the grid.
    #[track_caller]
    pub fn neighbors_filtered(
        &self,
        row: usize,
        col: usize,
        mut predicate: impl FnMut(&Node) -> bool,
    ) -> Vec<Point> {
        self.neighbors(row, col)
            .into_iter()
            .filter(|&p| predicate(&self[p]))
            .collect()
    }

    /// Scatter solid clusters over the grid: each cell independently seeds,
    /// with probability `percent`/100, a cluster of itself plus its whole
    /// neighbor set.
    ///
    /// The randomness is plain uniform scatter, nothing cryptographic;
    /// [`Grid::generate_obstacles_with`] accepts a seeded generator when the
    /// layout has to be reproducible.
    pub fn generate_obstacles(&mut self, percent: u32) {
        self.generate_obstacles_with(percent, &mut WyRand::new());
    }

    /// [`Grid::generate_obstacles`] with a caller-owned generator.
    pub fn generate_obstacles_with(&mut self, percent: u32, rng: &mut WyRand) {
        let mut cluster = Vec::with_capacity(8);
        for row in 0..self.height {
            for col in 0..self.width {
                if rng.generate_range(0_u32..100) < percent {
                    cluster.clear();
                    self.fill_neighbors((col, row), &mut cluster);
                    for &p in &cluster {
                        self[p].solid = true;
                    }
                    self.node_mut(row, col).solid = true;
                }
            }
        }
        log::debug!(
            "scattered obstacles at {}%: {} of {} cells solid",
            percent,
            self.nodes.iter().filter(|n| n.solid).count(),
            self.nodes.len()
        );
    }

    /// Resolve `(row, col)` to a free node at or near that coordinate.
    ///
    /// A free origin resolves to itself. A solid origin is escaped by
    /// probing its neighbors for the first free one, and when the whole
    /// neighborhood is solid, hopping to a uniformly random neighbor and
    /// trying again. The walk is capped at `width × height` hops, so a
    /// fully walled-in region reports [`GridError::NoFreeNode`] instead of
    /// spinning forever.
    pub fn find_free_node_near(&self, row: usize, col: usize) -> Result<Point, GridError> {
        self.find_free_node_near_with(row, col, &mut WyRand::new())
    }

    /// [`Grid::find_free_node_near`] with a caller-owned generator.
    pub fn find_free_node_near_with(
        &self,
        row: usize,
        col: usize,
        rng: &mut WyRand,
    ) -> Result<Point, GridError> {
        let origin = self
            .get(row, col)
            .ok_or(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })?
            .pos();

        let hops = self.len();
        let mut current = origin;
        let mut neighbors = Vec::with_capacity(8);
        for _ in 0..hops {
            if !self[current].solid {
                return Ok(current);
            }
            neighbors.clear();
            self.fill_neighbors(current, &mut neighbors);
            if let Some(&free) = neighbors.iter().find(|&&p| !self[p].solid) {
                return Ok(free);
            }
            match neighbors.len() {
                // nowhere to jump on a 1x1 grid
                0 => break,
                n => current = neighbors[rng.generate_range(0..n)],
            }
        }
        log::warn!(
            "free-node walk from ({}, {}) gave up after {} hops",
            row,
            col,
            hops
        );
        Err(GridError::NoFreeNode { origin, hops })
    }

    /// Run an A* search from `start` to `goal` (node identities as returned
    /// by [`Node::pos`]), admitting any non-solid neighbor.
    ///
    /// The returned chain runs goal-to-start. An unreachable goal yields an
    /// incomplete chain rather than an error; gauge the outcome with
    /// [`Path::connects`]. Panics when `start` or `goal` lie outside the
    /// grid.
    #[track_caller]
    pub fn find_path<H>(&self, start: Point, goal: Point, heuristic: H) -> Path
    where
        H: Fn(&Node, &Node) -> Cost,
    {
        self.find_path_with(start, goal, heuristic, |node| !node.solid)
    }

    /// [`Grid::find_path`] with a caller-supplied predicate deciding which
    /// nodes a route may traverse.
    #[track_caller]
    pub fn find_path_with<H, F>(
        &self,
        start: Point,
        goal: Point,
        heuristic: H,
        predicate: F,
    ) -> Path
    where
        H: Fn(&Node, &Node) -> Cost,
        F: Fn(&Node) -> bool,
    {
        // fail fast on endpoints outside the grid
        let goal_node = &self[goal];
        let _ = &self[start];

        astar::a_star_search(
            |p, out| self.fill_neighbors(p, out),
            |p| predicate(&self[p]),
            |p| heuristic(&self[p], goal_node),
            start,
            goal,
            self.len(),
        )
    }

    /// Text dump of the grid with `path` overlaid: `S` start, `E` end
    /// (goal), `•` interior, `#` solid, `.` free.
    pub fn render_path(&self, path: &Path) -> String {
        let interior: PointSet = path.interior().iter().copied().collect();
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                let p = (col, row);
                let cell = if path.start() == Some(p) {
                    'S'
                } else if path.end() == Some(p) {
                    'E'
                } else if interior.contains(&p) {
                    '•'
                } else if self[p].solid {
                    '#'
                } else {
                    '.'
                };
                out.push(cell);
            }
            out.push('\n');
        }
        out
    }
}

impl Index<Point> for Grid {
    type Output = Node;

    /// Index by node identity, `(col, row)`.
    #[track_caller]
    fn index(&self, (col, row): Point) -> &Node {
        self.node(row, col)
    }
}

impl IndexMut<Point> for Grid {
    #[track_caller]
    fn index_mut(&mut self, (col, row): Point) -> &mut Node {
        self.node_mut(row, col)
    }
}

impl fmt::Display for Grid {
    /// One text line per row: `#` solid, `.` free.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let solid = self.nodes[row * self.width + col].solid;
                f.write_str(if solid { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
