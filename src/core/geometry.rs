//! Board coordinates and dimensions.
//!
//! ## Coordinate System
//!
//! - `x` is the column index, `y` is the row index, both zero-based.
//! - Boards are stored row-major: row `y` holds the cells `(0, y)..(width, y)`.
//!
//! Dimensions are bounded by the wire format, which stores every coordinate
//! as a signed 32-bit integer.
//!
//! ```
//! use rust_life::core::{Dimensions, Point};
//!
//! let dims = Dimensions::new(4, 3).unwrap();
//! assert_eq!(dims.cell_count(), 12);
//! assert!(dims.contains(Point::new(3, 2)));
//! assert!(!dims.contains(Point::new(4, 0)));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, LifeResult};

/// A cell position on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset this point by `(dx, dy)`.
    ///
    /// Returns `None` if either coordinate would become negative.
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a board.
///
/// Always positive and never larger than `i32::MAX` in either direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// Largest width or height a board may have.
    pub const MAX_SIDE: usize = i32::MAX as usize;

    /// Validate externally supplied dimensions.
    ///
    /// # Errors
    ///
    /// Returns `LifeError::InvalidDimension` if either side is not positive
    /// or does not fit the wire format's 32-bit coordinates.
    pub fn new(width: i64, height: i64) -> LifeResult<Self> {
        let side = |value: i64| {
            usize::try_from(value)
                .ok()
                .filter(|&v| (1..=Self::MAX_SIDE).contains(&v))
        };

        match (side(width), side(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(LifeError::InvalidDimension { width, height }),
        }
    }

    /// Create a square board size.
    ///
    /// # Errors
    ///
    /// Same as [`Dimensions::new`].
    pub fn square(side: i64) -> LifeResult<Self> {
        Self::new(side, side)
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.width * self.height
    }

    /// Check whether a point lies on the board.
    #[must_use]
    pub const fn contains(self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Iterate over every point in row-major order.
    pub fn points(self) -> impl Iterator<Item = Point> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
