//! Maze grid geometry: mapping between canvas pixels and cell addresses.
//!
//! Along each axis the grid repeats a fixed pitch: `square_width` pixels
//! of solid cell interior followed by `wall_width` pixels of shared wall
//! band. [`GridMetrics`] captures the pitch; [`MazeGeometry`] pins the
//! grid to a canvas position and resolves pixels to cells and cells back
//! to pixels.
//!
//! Wall pixels sit between two cells, so pixel-to-cell resolution takes
//! a bias flag: a biased query attributes a wall pixel to the near cell
//! (the one whose square precedes the band), an unbiased query to the
//! far cell. An interactive surface picks the flag from the pointer's
//! approach direction; a painter runs both and compares the answers to
//! classify the pixel.

use serde::{Deserialize, Serialize};

use crate::types::{Cell, Dimensions, GridDimensions, Point};

/// Pixel pitch of a maze grid.
///
/// `square_width` must be positive; `wall_width` and `border` may be
/// zero. `border` is an extra margin allowance folded into centering,
/// reserving breathing room around the outermost walls.
///
/// Deserialization enforces the same `square_width` invariant as
/// [`new`](Self::new), so a decoded value is always usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridMetricsData")]
pub struct GridMetrics {
    square_width: u32,
    wall_width: u32,
    border: u32,
}

/// Unvalidated [`GridMetrics`] fields as they appear on the wire.
#[derive(Deserialize)]
struct GridMetricsData {
    square_width: u32,
    wall_width: u32,
    border: u32,
}

impl TryFrom<GridMetricsData> for GridMetrics {
    type Error = String;

    fn try_from(data: GridMetricsData) -> Result<Self, Self::Error> {
        if data.square_width == 0 {
            return Err("square_width must be positive".to_string());
        }
        Ok(Self {
            square_width: data.square_width,
            wall_width: data.wall_width,
            border: data.border,
        })
    }
}

impl GridMetrics {
    /// Create grid metrics.
    ///
    /// # Panics
    ///
    /// Panics if `square_width` is zero.
    #[must_use]
    pub fn new(square_width: u32, wall_width: u32, border: u32) -> Self {
        assert!(square_width > 0, "square_width must be positive");
        Self {
            square_width,
            wall_width,
            border,
        }
    }

    /// Pixel width of a cell's solid interior.
    #[must_use]
    pub const fn square_width(&self) -> u32 {
        self.square_width
    }

    /// Pixel width of the wall band between adjacent cells.
    #[must_use]
    pub const fn wall_width(&self) -> u32 {
        self.wall_width
    }

    /// Margin allowance reserved on each axis when centering.
    #[must_use]
    pub const fn border(&self) -> u32 {
        self.border
    }

    /// Pixel pitch of one full cell-plus-wall unit.
    #[must_use]
    pub const fn grid_width(&self) -> u32 {
        self.square_width + self.wall_width
    }

    /// Pixel bounding box of a maze spanning `cells`.
    ///
    /// Saturates at `u32::MAX` pixels per axis.
    #[must_use]
    pub fn maze_extent(&self, cells: GridDimensions) -> Dimensions {
        let pitch = u64::from(self.grid_width());
        let width = u64::from(cells.columns) * pitch;
        let height = u64::from(cells.rows) * pitch;
        Dimensions {
            width: u32::try_from(width).unwrap_or(u32::MAX),
            height: u32::try_from(height).unwrap_or(u32::MAX),
        }
    }

    /// Grid origin that centers a maze of `cells` within `target`.
    ///
    /// Per axis the leftover space is the target extent minus the maze
    /// extent, plus the border allowance; half of it (floored) lands
    /// before the grid. The offset is negative when the maze overflows
    /// the target.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn centering_offset(&self, target: Dimensions, cells: GridDimensions) -> Point {
        let grid = i64::from(self.grid_width());
        let border = i64::from(self.border);
        let x = (i64::from(target.width) - i64::from(cells.columns) * grid + border).div_euclid(2);
        let y = (i64::from(target.height) - i64::from(cells.rows) * grid + border).div_euclid(2);
        Point::new(x as i32, y as i32)
    }
}

/// Resolve an offset-relative axis coordinate to a cell index.
///
/// `relative` is floor-divided by the pitch so that coordinates before
/// the origin land in negative cells. The remainder (always in
/// `[0, grid_width)`) decides wall-band ownership.
const fn axis_cell(relative: i64, square_width: i64, grid_width: i64, near_biased: bool) -> i64 {
    let unit = relative.div_euclid(grid_width);
    let within = relative.rem_euclid(grid_width);
    if within < square_width {
        // Solid square interior: ownership is unambiguous.
        unit
    } else if near_biased {
        unit
    } else {
        unit + 1
    }
}

/// Mapper between absolute canvas pixels and maze cell addresses.
///
/// Placement is fixed at construction: the mapper is immutable, so a
/// geometry handed to a painter or hit-tester cannot drift mid-frame.
/// Queries are pure and total over the full signed pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeGeometry {
    metrics: GridMetrics,
    offset: Point,
}

impl MazeGeometry {
    /// Geometry for a maze of `cells` centered within `target`.
    #[must_use]
    pub fn centered(metrics: GridMetrics, target: Dimensions, cells: GridDimensions) -> Self {
        let offset = metrics.centering_offset(target, cells);
        Self { metrics, offset }
    }

    /// Geometry with an explicit grid origin.
    #[must_use]
    pub const fn with_offset(metrics: GridMetrics, offset: Point) -> Self {
        Self { metrics, offset }
    }

    /// The pitch parameters.
    #[must_use]
    pub const fn metrics(&self) -> GridMetrics {
        self.metrics
    }

    /// Canvas position of the cell (0, 0) square's top-left pixel.
    #[must_use]
    pub const fn offset(&self) -> Point {
        self.offset
    }

    /// Column index of the cell owning the pixel column at `pixel_x`.
    ///
    /// Interior pixels resolve unambiguously. A wall-band pixel is
    /// shared: with `left_biased` set it attributes to the cell on its
    /// left, otherwise to the cell on its right. Pixels left of the grid
    /// origin resolve to negative columns.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn column_at(&self, pixel_x: i32, left_biased: bool) -> i32 {
        let relative = i64::from(pixel_x) - i64::from(self.offset.x);
        axis_cell(
            relative,
            i64::from(self.metrics.square_width),
            i64::from(self.metrics.grid_width()),
            left_biased,
        ) as i32
    }

    /// Row index of the cell owning the pixel row at `pixel_y`.
    ///
    /// Vertical counterpart of [`column_at`](Self::column_at): with
    /// `top_biased` set a wall-band pixel attributes to the cell above
    /// it, otherwise to the cell below.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn row_at(&self, pixel_y: i32, top_biased: bool) -> i32 {
        let relative = i64::from(pixel_y) - i64::from(self.offset.y);
        axis_cell(
            relative,
            i64::from(self.metrics.square_width),
            i64::from(self.metrics.grid_width()),
            top_biased,
        ) as i32
    }

    /// Canvas position of `cell`'s square's top-left pixel.
    ///
    /// Inverse of the pixel-to-cell mapping: every pixel of the square
    /// starting here resolves back to `cell` under either bias.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn cell_origin(&self, cell: Cell) -> Point {
        let grid = i64::from(self.metrics.grid_width());
        let x = i64::from(self.offset.x) + i64::from(cell.column) * grid;
        let y = i64::from(self.offset.y) + i64::from(cell.row) * grid;
        Point::new(x as i32, y as i32)
    }
}
