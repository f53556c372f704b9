//! Exhaustive depth-first reference solver.
//!
//! Walks every legal route from the virtual start, backtracking at the
//! destination and pruning branches that can no longer beat the best
//! complete route or the best known arrival at a state. Exact but
//! asymptotically far behind the relaxation engine; its value is being an
//! independent implementation of the same contract for cross-validation.

use std::collections::HashMap;

use trundle_core::{Grid, Point};

use crate::dijkstra::UNREACHABLE;
use crate::state::{Node, legal_moves};

/// Minimum traversal cost by exhaustive enumeration. Same contract as
/// [`minimal_cost`](crate::minimal_cost), including the [`UNREACHABLE`]
/// sentinel.
pub fn minimal_cost_exhaustive(grid: &Grid) -> u32 {
    if grid.is_empty() {
        return UNREACHABLE;
    }
    let mut walk = Walk {
        grid,
        goal: grid.bottom_right(),
        best: UNREACHABLE,
        label: HashMap::new(),
    };
    walk.explore(Node::start(), 0);
    walk.best
}

struct Walk<'a> {
    grid: &'a Grid,
    goal: Point,
    /// Cheapest complete route found so far.
    best: u32,
    /// Cheapest known arrival cost per state; arrivals that do not improve
    /// on it cannot lead anywhere new.
    label: HashMap<Node, u32>,
}

impl Walk<'_> {
    fn explore(&mut self, n: Node, cost: u32) {
        if n.pos == self.goal {
            self.best = self.best.min(cost);
            return;
        }
        if cost >= self.best {
            return;
        }
        let mut successors = Vec::with_capacity(4);
        legal_moves(n, self.grid, |_| true, &mut successors);
        for v in successors {
            let step = match self.grid.get(v.pos) {
                Some(c) => c,
                None => unreachable!("legal move to {} left the grid", v.pos),
            };
            let next = cost.saturating_add(step);
            if next >= self.best {
                continue;
            }
            match self.label.get(&v) {
                Some(&known) if next >= known => continue,
                _ => {}
            }
            self.label.insert(v, next);
            self.explore(v, next);
        }
    }
}
