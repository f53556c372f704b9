//! The augmented search state: a grid position plus the direction/run-length
//! memory needed to decide which moves are legal next.

use trundle_core::{Direction, Grid, Point};

/// Maximum number of consecutive same-direction steps a path may take.
pub const MAX_RUN: u8 = 3;

/// The most recent straight run: its direction and how many consecutive
/// steps it has covered (`1..=MAX_RUN`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunHistory {
    pub dir: Direction,
    pub count: u8,
}

impl RunHistory {
    /// The canonical marker carried by the virtual start node. It records
    /// no real step: the first move out of the start begins a fresh run.
    pub const START: Self = Self {
        dir: Direction::East,
        count: 1,
    };

    /// Create a run history.
    #[inline]
    pub const fn new(dir: Direction, count: u8) -> Self {
        Self { dir, count }
    }
}

/// An expanded search node: where a path is, and how it got there.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos: Point,
    pub history: RunHistory,
}

impl Node {
    /// Create a node.
    #[inline]
    pub const fn new(pos: Point, history: RunHistory) -> Self {
        Self { pos, history }
    }

    /// The virtual start: the origin cell carrying the canonical marker.
    #[inline]
    pub const fn start() -> Self {
        Self::new(Point::ZERO, RunHistory::START)
    }

    /// Whether this node is the virtual start.
    #[inline]
    pub fn is_start(&self) -> bool {
        *self == Self::start()
    }

    /// Whether this (position, history) combination can occur on `grid`.
    ///
    /// The origin admits only the virtual start marker. Everywhere else a
    /// claimed run of `count` steps must fit on the grid behind the
    /// position: a run heading North and ending at row `y` needs
    /// `y + count < height` (its earlier cells lie south of `y`), and the
    /// other three directions mirror that arithmetic.
    pub fn is_valid(&self, grid: &Grid) -> bool {
        if !grid.contains(self.pos) {
            return false;
        }
        let count = self.history.count;
        if count < 1 || count > MAX_RUN {
            return false;
        }
        if self.pos == Point::ZERO {
            return self.history == RunHistory::START;
        }
        let c = i32::from(count);
        match self.history.dir {
            Direction::North => self.pos.y + c < grid.height() as i32,
            Direction::South => self.pos.y >= c,
            Direction::West => self.pos.x + c < grid.width() as i32,
            Direction::East => self.pos.x >= c,
        }
    }
}

/// Append the legal one-step successors of `n` into `buf`, keeping only
/// those for which `keep` returns `true`. The caller clears `buf` first.
///
/// For each direction except the reverse of the node's last one: continuing
/// straight extends the run (skipped entirely once the run has reached
/// [`MAX_RUN`]), turning resets it to 1, and every first move out of the
/// virtual start resets it to 1 since the marker records no real step.
/// Moves that leave the grid or re-enter the start cell are dropped. At
/// most 3 successors result, and every one is a valid state.
pub fn legal_moves(n: Node, grid: &Grid, keep: impl Fn(Node) -> bool, buf: &mut Vec<Node>) {
    let last = n.history;
    for dir in Direction::CARDINAL {
        if dir == last.dir.opposite() {
            continue;
        }
        let history = if n.is_start() {
            RunHistory::new(dir, 1)
        } else if dir == last.dir {
            if last.count == MAX_RUN {
                continue;
            }
            RunHistory::new(dir, last.count + 1)
        } else {
            RunHistory::new(dir, 1)
        };
        let pos = n.pos.step(dir);
        if !grid.contains(pos) {
            continue;
        }
        // The origin admits only the virtual start marker: no travel
        // history re-enters the start cell as a valid state.
        if pos == Point::ZERO {
            continue;
        }
        let node = Node::new(pos, history);
        if keep(node) {
            buf.push(node);
        }
    }
}

/// Cached successor computation helper.
///
/// Owns the scratch buffer so repeated queries reuse one allocation.
#[derive(Default)]
pub struct Moves {
    buf: Vec<Node>,
}

impl Moves {
    /// Create a new `Moves` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the legal successors of `n`, filtered by `keep`.
    pub fn legal(&mut self, n: Node, grid: &Grid, keep: impl Fn(Node) -> bool) -> &[Node] {
        self.buf.clear();
        legal_moves(n, grid, keep, &mut self.buf);
        &self.buf
    }
}
