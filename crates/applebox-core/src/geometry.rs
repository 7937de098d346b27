//! Screen-space and grid-space rectangles.
//!
//! Hit-testing happens in screen space: the player's drag is a [`Rect`] spanned
//! by two [`Point`]s and every cell has a layout [`Rect`]. Grid-space
//! [`CellRange`]s address whole cells and are what the match finder reports.

/// A point in screen space, relative to the board's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset, growing to the right.
    pub x: f32,
    /// Vertical offset, growing downwards.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in screen space.
///
/// Edges are inclusive: two rectangles that only share an edge still
/// intersect, and a zero-sized rectangle (a click without a drag) intersects
/// the rectangle it lies in.
///
/// # Examples
///
/// ```
/// use applebox_core::{Point, Rect};
///
/// let drag = Rect::from_corners(Point::new(30.0, 40.0), Point::new(10.0, 5.0));
/// assert_eq!(drag.left(), 10.0);
/// assert_eq!(drag.bottom(), 40.0);
///
/// let cell = Rect::new(0.0, 0.0, 10.0, 10.0);
/// assert!(drag.intersects(&cell)); // shares the x = 10 edge
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    ///
    /// Negative sizes are clamped to zero.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width.max(0.0),
            bottom: y + height.max(0.0),
        }
    }

    /// Creates the rectangle spanned by two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    /// Left edge.
    #[must_use]
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.right
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Width of the rectangle.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the rectangle.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            f32::midpoint(self.left, self.right),
            f32::midpoint(self.top, self.bottom),
        )
    }

    /// Returns `true` if `point` lies inside or on the edge of the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (self.left..=self.right).contains(&point.x) && (self.top..=self.bottom).contains(&point.y)
    }

    /// Returns `true` if the two rectangles overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }
}

/// An inclusive rectangle of grid cells.
///
/// `left..=right` are column indices and `top..=bottom` are row indices.
///
/// # Examples
///
/// ```
/// use applebox_core::CellRange;
///
/// let range = CellRange::new(1, 0, 2, 1);
/// assert_eq!(range.len(), 4);
///
/// // Row-major indices on a 4-column board
/// let indices: Vec<_> = range.indices(4).collect();
/// assert_eq!(indices, [1, 2, 5, 6]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
}

impl CellRange {
    /// Creates a range from two opposite corner cells in any order.
    #[must_use]
    pub fn new(col_a: usize, row_a: usize, col_b: usize, row_b: usize) -> Self {
        Self {
            left: col_a.min(col_b),
            top: row_a.min(row_b),
            right: col_a.max(col_b),
            bottom: row_a.max(row_b),
        }
    }

    /// Creates a range covering a single cell.
    #[must_use]
    pub fn single(col: usize, row: usize) -> Self {
        Self::new(col, row, col, row)
    }

    /// First column.
    #[must_use]
    pub fn left(&self) -> usize {
        self.left
    }

    /// First row.
    #[must_use]
    pub fn top(&self) -> usize {
        self.top
    }

    /// Last column (inclusive).
    #[must_use]
    pub fn right(&self) -> usize {
        self.right
    }

    /// Last row (inclusive).
    #[must_use]
    pub fn bottom(&self) -> usize {
        self.bottom
    }

    /// Number of columns covered.
    #[must_use]
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    /// Number of rows covered.
    #[must_use]
    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    /// Number of cells covered. Never zero.
    #[must_use]
    #[expect(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.width() * self.height()
    }

    /// Returns `true` if the cell at (`col`, `row`) is inside the range.
    #[must_use]
    pub fn contains(&self, col: usize, row: usize) -> bool {
        (self.left..=self.right).contains(&col) && (self.top..=self.bottom).contains(&row)
    }

    /// Returns the row-major indices of the covered cells on a board with
    /// `cols` columns.
    pub fn indices(&self, cols: usize) -> impl Iterator<Item = usize> + use<> {
        let Self {
            left,
            top,
            right,
            bottom,
        } = *self;
        (top..=bottom).flat_map(move |row| (left..=right).map(move |col| row * cols + col))
    }
}
