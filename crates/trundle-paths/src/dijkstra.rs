//! The relaxation engine: single-source shortest path over the augmented
//! state graph, driven by a decrease-key priority queue.

use std::collections::{HashMap, HashSet};

use trundle_core::{Direction, Grid, Point};

use crate::queue::MinQueue;
use crate::state::{MAX_RUN, Moves, Node, RunHistory};

/// Sentinel cost meaning "no known path to this state".
pub const UNREACHABLE: u32 = u32::MAX;

/// Minimum cumulative cost from the top-left cell to the bottom-right one,
/// paying each entered cell's cost, under the no-reversal and
/// [`MAX_RUN`] straight-run rules.
///
/// Returns [`UNREACHABLE`] when no legal path exists (including degenerate
/// empty grids). The start cell's own cost is never paid.
pub fn minimal_cost(grid: &Grid) -> u32 {
    if grid.is_empty() {
        return UNREACHABLE;
    }
    let mut relax = Relaxation::new(grid);
    relax.run();
    relax.goal_cost()
}

/// One solver invocation: the full valid state space with its cost table,
/// visited set, and priority queue. Borrows the grid read-only; everything
/// else is owned and discarded with the run.
struct Relaxation<'a> {
    grid: &'a Grid,
    cost: HashMap<Node, u32>,
    visited: HashSet<Node>,
    queue: MinQueue<Node>,
    moves: Moves,
}

impl<'a> Relaxation<'a> {
    fn new(grid: &'a Grid) -> Self {
        let bound = grid.width() * grid.height() * Direction::CARDINAL.len() * MAX_RUN as usize;
        let mut relax = Self {
            grid,
            cost: HashMap::with_capacity(bound),
            visited: HashSet::with_capacity(bound),
            queue: MinQueue::with_capacity(bound),
            moves: Moves::new(),
        };
        relax.seed();
        relax
    }

    /// Enumerate every valid node: the virtual start at cost 0, everything
    /// else at the sentinel.
    fn seed(&mut self) {
        self.enqueue(Node::start(), 0);
        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.width() as i32 {
                let pos = Point::new(x, y);
                for dir in Direction::CARDINAL {
                    for count in 1..=MAX_RUN {
                        let node = Node::new(pos, RunHistory::new(dir, count));
                        if !node.is_start() && node.is_valid(self.grid) {
                            self.enqueue(node, UNREACHABLE);
                        }
                    }
                }
            }
        }
        log::debug!("seeded {} states", self.queue.len());
    }

    fn enqueue(&mut self, node: Node, weight: u32) {
        self.queue.insert(node, weight);
        self.cost.insert(node, weight);
    }

    /// Drain the queue: pop the cheapest unvisited state, relax its legal
    /// unvisited successors, mark it visited. When the queue empties every
    /// valid state holds its final minimal cost.
    fn run(&mut self) {
        let mut moves = std::mem::take(&mut self.moves);
        while let Some((u, weight)) = self.queue.peek_min() {
            let visited = &self.visited;
            for &v in moves.legal(u, self.grid, |v| !visited.contains(&v)) {
                let step = match self.grid.get(v.pos) {
                    Some(c) => c,
                    None => unreachable!("legal move to {} left the grid", v.pos),
                };
                // Saturating: an UNREACHABLE source can never improve anything.
                let candidate = weight.saturating_add(step);
                let known = match self.cost.get_mut(&v) {
                    Some(k) => k,
                    None => unreachable!("state {v:?} missing from the cost table"),
                };
                if candidate < *known {
                    *known = candidate;
                    self.queue.decrease_weight(v, candidate);
                }
            }
            self.queue.pop_min();
            self.visited.insert(u);
        }
        self.moves = moves;
    }

    /// Minimum final cost over the terminal states: every valid history
    /// combination at the bottom-right cell. On a 1x1 grid the virtual
    /// start is itself terminal at cost 0.
    fn goal_cost(&self) -> u32 {
        let goal = self.grid.bottom_right();
        let mut best = UNREACHABLE;
        for dir in Direction::CARDINAL {
            for count in 1..=MAX_RUN {
                let node = Node::new(goal, RunHistory::new(dir, count));
                if let Some(&c) = self.cost.get(&node) {
                    best = best.min(c);
                }
            }
        }
        log::debug!("minimal cost to {goal}: {best}");
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITY_13: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

    fn parse(text: &str) -> Grid {
        Grid::parse(text).unwrap()
    }

    fn uniform(width: usize, height: usize, k: u32) -> Grid {
        Grid::from_rows(vec![vec![k; width]; height]).unwrap()
    }

    #[test]
    fn reference_city_grid() {
        let grid = parse(CITY_13);
        assert_eq!(grid.width(), 13);
        assert_eq!(grid.height(), 13);
        assert_eq!(minimal_cost(&grid), 102);
    }

    #[test]
    fn single_cell_is_free() {
        // Start and destination coincide; the virtual start is terminal.
        let grid = uniform(1, 1, 9);
        assert_eq!(minimal_cost(&grid), 0);
    }

    #[test]
    fn empty_grid_is_unreachable() {
        assert_eq!(minimal_cost(&Grid::new()), UNREACHABLE);
    }

    #[test]
    fn first_move_south_is_legal() {
        // The cheaper route turns south immediately: 2 + 4 beats 4 + 4.
        let grid = Grid::from_rows(vec![vec![2, 4], vec![2, 4]]).unwrap();
        assert_eq!(minimal_cost(&grid), 6);
    }

    #[test]
    fn uniform_grid_matches_manhattan_bound() {
        // An 8-step route with no straight run over MAX_RUN exists, so the
        // lower bound k * (w + h - 2) is attained.
        let grid = uniform(5, 5, 3);
        assert_eq!(minimal_cost(&grid), 24);
    }

    #[test]
    fn narrow_strip_pays_for_forced_turns() {
        // 8x2, all ones: Manhattan distance is 8, but a straight stretch of
        // 7 cannot be split into runs of at most 3 with a single vertical
        // jog, so the best route zigzags and pays 10.
        let grid = uniform(8, 2, 1);
        assert_eq!(minimal_cost(&grid), 10);
    }

    #[test]
    fn single_row_within_run_limit() {
        let grid = uniform(4, 1, 1);
        assert_eq!(minimal_cost(&grid), 3);
    }

    #[test]
    fn single_row_beyond_run_limit_is_unreachable() {
        // Five cells in a row need four straight eastward steps; with no
        // second row to jog through, the run cap makes that illegal.
        let grid = uniform(5, 1, 1);
        assert_eq!(minimal_cost(&grid), UNREACHABLE);
    }

    #[test]
    fn deterministic_across_runs() {
        let grid = parse(CITY_13);
        assert_eq!(minimal_cost(&grid), minimal_cost(&grid));
    }
}
