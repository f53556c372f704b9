//! The [`Grid`] type: a rectangular matrix of per-cell traversal costs.
//!
//! A grid is built row by row (every row must have the width established by
//! the first one) or parsed from digit-line text, and is read-only once
//! handed to a solver.

use std::fmt;

use crate::geom::Point;

/// Errors raised while building or querying a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row was appended whose length differs from the established width.
    DimensionMismatch { expected: usize, found: usize },
    /// A cost lookup outside the grid's extent.
    OutOfBounds {
        pos: Point,
        width: usize,
        height: usize,
    },
    /// A character outside `'0'..='9'` in digit-line input.
    InvalidDigit { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "added row with wrong length: {found} instead of {expected}"
                )
            }
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "position {pos} outside {width}x{height} grid")
            }
            Self::InvalidDigit { ch, pos } => {
                write!(f, "invalid digit \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular matrix of non-negative traversal costs, stored row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    costs: Vec<u32>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create an empty grid; rows are added with [`add_row`](Grid::add_row).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from an iterator of rows.
    pub fn from_rows<I>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Vec<u32>>,
    {
        let mut grid = Self::new();
        for row in rows {
            grid.add_row(row)?;
        }
        Ok(grid)
    }

    /// Parse digit-line text: one row per line, one decimal digit per cell.
    ///
    /// Blank lines are skipped. Any other character fails with
    /// [`GridError::InvalidDigit`]; ragged lines fail with
    /// [`GridError::DimensionMismatch`].
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for line in text.lines() {
            if line.is_empty() {
                continue;
            }
            let y = grid.height as i32;
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                match ch.to_digit(10) {
                    Some(d) => row.push(d),
                    None => {
                        return Err(GridError::InvalidDigit {
                            ch,
                            pos: Point::new(x as i32, y),
                        });
                    }
                }
            }
            grid.add_row(row)?;
        }
        Ok(grid)
    }

    /// Append a row of costs.
    ///
    /// The first row establishes the grid's width; every later row must
    /// match it.
    pub fn add_row(&mut self, row: Vec<u32>) -> Result<(), GridError> {
        if self.height > 0 && row.len() != self.width {
            return Err(GridError::DimensionMismatch {
                expected: self.width,
                found: row.len(),
            });
        }
        self.width = row.len();
        self.height += 1;
        self.costs.extend(row);
        Ok(())
    }

    /// Width in cells; zero while the grid is empty.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells; zero while the grid is empty.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Whether `p` lies inside the grid's extent.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// The bottom-right cell, the destination of a traversal.
    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(
            self.width.saturating_sub(1) as i32,
            self.height.saturating_sub(1) as i32,
        )
    }

    /// Checked cost lookup: fails with [`GridError::OutOfBounds`] rather
    /// than wrapping around.
    pub fn cost(&self, p: Point) -> Result<u32, GridError> {
        self.get(p).ok_or(GridError::OutOfBounds {
            pos: p,
            width: self.width,
            height: self.height,
        })
    }

    /// Cost at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<u32> {
        if !self.contains(p) {
            return None;
        }
        Some(self.costs[(p.y as usize) * self.width + (p.x as usize)])
    }
}
