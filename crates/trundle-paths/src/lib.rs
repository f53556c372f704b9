//! Shortest-path solvers for weighted grids traversed under run limits.
//!
//! The traversal rule: starting at the top-left cell and heading for the
//! bottom-right one, each step moves to an adjacent cell, pays that cell's
//! cost, may never reverse into the cell it just left, and may not continue
//! in the same direction for more than [`MAX_RUN`] consecutive steps.
//! Because legal moves depend on recent direction history, the search runs
//! over grid cells augmented with a (direction, run-length) memory; see
//! [`Node`].
//!
//! Two strategies satisfy the same contract:
//!
//! - [`minimal_cost`]: state-augmented Dijkstra relaxation over a
//!   decrease-key priority queue. Use this one.
//! - [`minimal_cost_exhaustive`]: depth-first enumeration with pruning.
//!   Asymptotically inferior; kept as an independent reference for
//!   cross-validation.
//!
//! Both return [`UNREACHABLE`] when no legal path exists.

mod dijkstra;
mod exhaustive;
mod queue;
mod state;

pub use dijkstra::{UNREACHABLE, minimal_cost};
pub use exhaustive::minimal_cost_exhaustive;
pub use queue::MinQueue;
pub use state::{MAX_RUN, Moves, Node, RunHistory, legal_moves};
