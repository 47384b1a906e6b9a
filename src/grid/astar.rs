use crate::{Cost, Path, Point, PointMap};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

/// A frontier entry, carrying the scores the node had when it was pushed.
///
/// Entries are never updated in place; when a node's cost improves a fresh
/// entry is pushed and the superseded one is skipped on pop by comparing
/// against the live record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Element {
    point: Point,
    f: Cost,
    g: Cost,
    seq: u64,
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap, the frontier wants the lowest
        // fScore first, ties going to the lower gScore, then to the earlier
        // insertion
        (other.f, other.g, other.seq).cmp(&(self.f, self.g, self.seq))
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-search bookkeeping for one node, allocated fresh every call.
/// `prev` doubles as the came-from chain for reconstruction.
#[derive(Debug, Clone, Copy)]
struct SearchRecord {
    g: Cost,
    f: Cost,
    prev: Option<Point>,
}

/// A* over closures: `fill_neighbors` enumerates a node's neighbors into a
/// scratch buffer, `admissible` decides which of them a route may use, and
/// `heuristic` estimates the remaining steps to the goal.
///
/// Returns the chain in goal-to-start order. When the frontier drains
/// without reaching the goal the result is whatever chain the goal
/// accumulated — the bare goal when it was never touched.
pub(crate) fn a_star_search(
    mut fill_neighbors: impl FnMut(Point, &mut Vec<Point>),
    mut admissible: impl FnMut(Point) -> bool,
    mut heuristic: impl FnMut(Point) -> Cost,
    start: Point,
    goal: Point,
    size_hint: usize,
) -> Path {
    let started = Instant::now();

    let mut visited: PointMap<SearchRecord> = PointMap::with_capacity(size_hint);
    let mut frontier = BinaryHeap::with_capacity(size_hint / 2);
    let mut seq = 0_u64;

    let start_f = heuristic(start);
    visited.insert(
        start,
        SearchRecord {
            g: 0,
            f: start_f,
            prev: None,
        },
    );
    frontier.push(Element {
        point: start,
        f: start_f,
        g: 0,
        seq,
    });

    let mut neighbors = vec![];
    let mut expanded = 0_usize;

    while let Some(Element {
        point: current, f, g, ..
    }) = frontier.pop()
    {
        match f.cmp(&visited[&current].f) {
            // superseded by a cheaper route since this entry was pushed
            Ordering::Greater => continue,
            Ordering::Equal => {}
            Ordering::Less => unreachable!("frontier entry cheaper than its record"),
        }

        if current == goal {
            let path = reconstruct(&visited, current);
            log::debug!(
                "path {:?} -> {:?} found: {} nodes after {} expansions in {:?}",
                start,
                goal,
                path.len(),
                expanded,
                started.elapsed()
            );
            return path;
        }

        expanded += 1;
        let tentative = g + 1; // unit step cost, straight or diagonal

        neighbors.clear();
        fill_neighbors(current, &mut neighbors);
        for &next in &neighbors {
            if !admissible(next) {
                continue;
            }
            let mut improved = None;
            if let Some(record) = visited.get_mut(&next) {
                if tentative < record.g {
                    record.g = tentative;
                    record.f = tentative + heuristic(next);
                    record.prev = Some(current);
                    improved = Some(record.f);
                }
            } else {
                let f = tentative + heuristic(next);
                visited.insert(
                    next,
                    SearchRecord {
                        g: tentative,
                        f,
                        prev: Some(current),
                    },
                );
                improved = Some(f);
            }
            if let Some(f) = improved {
                seq += 1;
                frontier.push(Element {
                    point: next,
                    f,
                    g: tentative,
                    seq,
                });
            }
        }
    }

    // Frontier exhausted: hand back whatever chain the goal accumulated.
    let path = reconstruct(&visited, goal);
    log::debug!(
        "no path {:?} -> {:?}: frontier exhausted after {} expansions in {:?}",
        start,
        goal,
        expanded,
        started.elapsed()
    );
    path
}

fn reconstruct(visited: &PointMap<SearchRecord>, last: Point) -> Path {
    let mut path = Path::new();
    path.push(last);
    let mut current = last;
    while let Some(prev) = visited.get(&current).and_then(|record| record.prev) {
        path.push(prev);
        current = prev;
    }
    path
}
