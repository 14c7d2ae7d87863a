//! Painters for shape-bounded maze grids.
//!
//! Pure raster functions: in-memory images in, in-memory images out.
//! The painters drive the geometry and shape contracts the way an
//! interactive surface does. Every canvas pixel is resolved to a cell
//! under both bias directions; agreement means cell interior,
//! disagreement means a wall band shared between neighbors.

use image::{Luma, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use meiro_geometry::{Cell, Dimensions, GrayImage, GridDimensions, MazeGeometry, OutlineShape};

/// Colors for grid previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Solid interior of an included cell.
    pub square: Rgba<u8>,
    /// Wall band adjoining at least one included cell.
    pub wall: Rgba<u8>,
    /// Everything else.
    pub backdrop: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            square: Rgba([245, 245, 245, 255]),
            wall: Rgba([40, 44, 68, 255]),
            backdrop: Rgba([216, 216, 216, 255]),
        }
    }
}

/// Whether `cell` lies inside both the maze grid and the outline shape.
///
/// Cell indices double as shape coordinates: the shape's space is the
/// cell grid itself, one unit per cell.
#[must_use]
pub fn cell_included(shape: &dyn OutlineShape, cells: GridDimensions, cell: Cell) -> bool {
    let in_grid = cell.column >= 0
        && cell.row >= 0
        && i64::from(cell.column) < i64::from(cells.columns)
        && i64::from(cell.row) < i64::from(cells.rows);
    in_grid && shape.contains(cell.column, cell.row)
}

/// Paint a maze grid bounded by an outline shape onto a fresh canvas.
///
/// Interior pixels of included cells take the square color. A wall
/// pixel is shared by up to four neighboring cells; it takes the wall
/// color when any of them is included, so walls wrap the outline's
/// boundary. Everything else takes the backdrop color.
#[must_use = "returns the painted canvas"]
#[allow(clippy::cast_possible_wrap)]
pub fn paint_shaped_grid(
    geometry: &MazeGeometry,
    cells: GridDimensions,
    shape: &dyn OutlineShape,
    canvas: Dimensions,
    palette: &Palette,
) -> RgbaImage {
    RgbaImage::from_fn(canvas.width, canvas.height, |px, py| {
        let (x, y) = (px as i32, py as i32);
        let near_column = geometry.column_at(x, true);
        let far_column = geometry.column_at(x, false);
        let near_row = geometry.row_at(y, true);
        let far_row = geometry.row_at(y, false);

        if near_column == far_column && near_row == far_row {
            let cell = Cell::new(near_column, near_row);
            if cell_included(shape, cells, cell) {
                palette.square
            } else {
                palette.backdrop
            }
        } else {
            // Wall band: owned by every cell the two biases reach.
            let owners = [
                Cell::new(near_column, near_row),
                Cell::new(far_column, near_row),
                Cell::new(near_column, far_row),
                Cell::new(far_column, far_row),
            ];
            if owners
                .iter()
                .any(|&cell| cell_included(shape, cells, cell))
            {
                palette.wall
            } else {
                palette.backdrop
            }
        }
    })
}

/// Fill one cell's solid square with `color`.
///
/// Complement of the pixel-to-cell mapping: an interactive surface
/// resolves a pointer pixel to a cell, then marks that cell here. The
/// wall bands around the square are left untouched, and squares partly
/// or fully outside the image are clipped.
pub fn highlight_cell(image: &mut RgbaImage, geometry: &MazeGeometry, cell: Cell, color: Rgba<u8>) {
    let origin = geometry.cell_origin(cell);
    let side = geometry.metrics().square_width();
    draw_filled_rect_mut(image, Rect::at(origin.x, origin.y).of_size(side, side), color);
}

/// Rasterize a shape's membership over its nominal size.
///
/// White pixels are inside the shape. Useful for inspecting what a
/// decoded outline actually resolved to.
#[must_use = "returns the rendered mask"]
#[allow(clippy::cast_possible_wrap)]
pub fn paint_outline_mask(shape: &dyn OutlineShape) -> GrayImage {
    let size = shape.size();
    GrayImage::from_fn(size.width, size.height, |x, y| {
        if shape.contains(x as i32, y as i32) {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}
