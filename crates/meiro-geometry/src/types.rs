//! Shared types for the meiro maze geometry core.

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can reference
/// decoded outline rasters without depending on `image` directly.
pub use image::GrayImage;

/// A 2D point in integer pixel coordinates.
///
/// Used both for absolute canvas positions and for grid placement
/// offsets, which may be negative when a maze overflows its canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from left edge).
    pub x: i32,
    /// Vertical position (pixels from top edge).
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A cell address in the maze grid.
///
/// Indices are signed: pixel-to-cell mapping is defined over the whole
/// canvas, so pixels left of or above the grid origin resolve to
/// negative addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Column index (cells from the grid's left edge).
    pub column: i32,
    /// Row index (cells from the grid's top edge).
    pub row: i32,
}

impl Cell {
    /// Create a new cell address.
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

/// Image or canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Maze dimensions in whole cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Number of columns.
    pub columns: u32,
    /// Number of rows.
    pub rows: u32,
}

/// A maze's cell grid doubles as a coordinate space: one unit per cell.
/// Outline shapes placed over the grid use this conversion.
impl From<GridDimensions> for Dimensions {
    fn from(cells: GridDimensions) -> Self {
        Self {
            width: cells.columns,
            height: cells.rows,
        }
    }
}

/// Errors that can occur while acquiring an outline shape's source raster.
///
/// Shape construction itself cannot fail once a raster is in hand; the
/// whole failure surface is obtaining and decoding the source image.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// Failed to decode an outline source image.
    #[error("failed to decode outline image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The outline image bytes were empty.
    #[error("outline image data is empty")]
    EmptyInput,

    /// No source raster could be supplied.
    #[error("outline raster unavailable: {0}")]
    ResourceUnavailable(String),
}
