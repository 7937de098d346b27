use applebox_core::{CellRange, GameConfig, Point, Rect};

/// Looks up where each cell is drawn on screen.
///
/// The engine hit-tests drag rectangles against these rectangles and never
/// computes layout itself, so any renderer (or a test with synthetic geometry)
/// can supply its own.
///
/// Returning `None` excludes a cell from hit-testing.
pub trait CellLayout {
    /// Returns the screen rectangle of the cell at row-major `index`.
    fn cell_rect(&self, index: usize) -> Option<Rect>;
}

impl<L> CellLayout for &L
where
    L: CellLayout + ?Sized,
{
    fn cell_rect(&self, index: usize) -> Option<Rect> {
        (**self).cell_rect(index)
    }
}

impl CellLayout for [Rect] {
    fn cell_rect(&self, index: usize) -> Option<Rect> {
        self.get(index).copied()
    }
}

impl CellLayout for Vec<Rect> {
    fn cell_rect(&self, index: usize) -> Option<Rect> {
        self.as_slice().cell_rect(index)
    }
}

/// A uniform grid of equally sized cells separated by a fixed gap.
///
/// Cells fill the board edge to edge: `cols` cells and `cols - 1` gaps make up
/// the width, and likewise for rows.
///
/// # Examples
///
/// ```
/// use applebox_game::{CellLayout, GridLayout};
///
/// // Two 10px cells with a 2px gap between them
/// let layout = GridLayout::new(2, 1, 22.0, 10.0, 2.0);
/// let second = layout.cell_rect(1).unwrap();
/// assert_eq!(second.left(), 12.0);
/// assert_eq!(second.width(), 10.0);
/// assert_eq!(layout.cell_rect(2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    cols: usize,
    rows: usize,
    width: f32,
    height: f32,
    gap: f32,
}

impl GridLayout {
    /// Default board width in pixels.
    pub const DEFAULT_WIDTH: f32 = 680.0;
    /// Default board height in pixels.
    pub const DEFAULT_HEIGHT: f32 = 400.0;
    /// Default gap between cells in pixels.
    pub const DEFAULT_GAP: f32 = 4.0;

    /// Creates a layout for a `cols` x `rows` grid drawn in a `width` x
    /// `height` board.
    #[must_use]
    pub fn new(cols: usize, rows: usize, width: f32, height: f32, gap: f32) -> Self {
        Self {
            cols,
            rows,
            width,
            height,
            gap: gap.max(0.0),
        }
    }

    /// Creates the default-sized layout for `config`'s grid.
    #[must_use]
    pub fn for_config(config: &GameConfig) -> Self {
        Self::new(
            config.cols,
            config.rows,
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
            Self::DEFAULT_GAP,
        )
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Board width in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Board height in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[expect(clippy::cast_precision_loss)]
    fn track(extent: f32, count: usize, gap: f32) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let count = count as f32;
        ((extent - gap * (count - 1.0)) / count).max(0.0)
    }

    /// Width and height of a single cell.
    #[must_use]
    pub fn cell_size(&self) -> (f32, f32) {
        (
            Self::track(self.width, self.cols, self.gap),
            Self::track(self.height, self.rows, self.gap),
        )
    }

    /// Returns the rectangle of the cell at (`col`, `row`).
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn rect_at(&self, col: usize, row: usize) -> Option<Rect> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        let (cell_width, cell_height) = self.cell_size();
        Some(Rect::new(
            col as f32 * (cell_width + self.gap),
            row as f32 * (cell_height + self.gap),
            cell_width,
            cell_height,
        ))
    }

    /// Returns the index of the cell drawn under `point`, if any.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cell_at(&self, point: Point) -> Option<usize> {
        let (cell_width, cell_height) = self.cell_size();
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / (cell_width + self.gap)).floor() as usize;
        let row = (point.y / (cell_height + self.gap)).floor() as usize;
        let rect = self.rect_at(col, row)?;
        rect.contains(point).then(|| row * self.cols + col)
    }

    /// Returns the drag that selects exactly `range`: from the center of its
    /// top-left cell to the center of its bottom-right cell.
    #[must_use]
    pub fn drag_for(&self, range: CellRange) -> Option<(Point, Point)> {
        let start = self.rect_at(range.left(), range.top())?;
        let end = self.rect_at(range.right(), range.bottom())?;
        Some((start.center(), end.center()))
    }
}

impl CellLayout for GridLayout {
    fn cell_rect(&self, index: usize) -> Option<Rect> {
        if self.cols == 0 {
            return None;
        }
        self.rect_at(index % self.cols, index / self.cols)
    }
}
