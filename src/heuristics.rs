//! Distance estimates that order the A* frontier.
//!
//! Each heuristic is a pure function over two nodes, returning an estimate
//! of the steps remaining between them. [`chebyshev`] never over-estimates
//! the unit-cost Moore-neighborhood distance the search actually pays, so it
//! keeps A* optimal. [`manhattan`] and [`diagonal`] can over-estimate when
//! diagonal moves are available; they tend to expand fewer nodes in exchange
//! for possibly missing the shortest route on obstacle-heavy grids.

use crate::{Cost, Node};

/// `|Δrow| + |Δcol|` — the four-way taxicab distance.
pub fn manhattan(a: &Node, b: &Node) -> Cost {
    a.row().abs_diff(b.row()) + a.col().abs_diff(b.col())
}

/// Weighted eight-way estimate: straight moves cost `D`, diagonal moves
/// `D2`.
///
/// With the constants fixed at `D = 1`, `D2 = 2` the diagonal term cancels
/// and the result is exactly [`manhattan`]'s; the function exists so the two
/// costs can diverge without touching any call site.
pub fn diagonal(a: &Node, b: &Node) -> Cost {
    const D: isize = 1;
    const D2: isize = 2;

    let dx = a.col().abs_diff(b.col()) as isize;
    let dy = a.row().abs_diff(b.row()) as isize;
    (D * (dx + dy) + (D2 - 2 * D) * dx.min(dy)) as Cost
}

/// `max(|Δrow|, |Δcol|)` — the true unit-cost distance on an empty grid
/// with diagonal movement, and therefore admissible and consistent for the
/// search's step cost.
pub fn chebyshev(a: &Node, b: &Node) -> Cost {
    a.row().abs_diff(b.row()).max(a.col().abs_diff(b.col()))
}
