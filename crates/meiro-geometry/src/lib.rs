//! meiro-geometry: maze grid coordinate mapping and outline shapes (sans-IO).
//!
//! Two halves:
//!
//! - [`grid`] pins a maze grid to a canvas and resolves pixels to cells
//!   and cells back to pixels, including the shared wall bands between
//!   cells.
//! - [`outline`], [`bitmap`], and [`catalog`] provide boolean membership
//!   masks that bound a maze: procedural shapes, shapes sampled from
//!   decoded images, and the randomized selection of source images.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and integer coordinates. All filesystem and terminal
//! interaction lives in the preview binary.

pub mod bitmap;
pub mod catalog;
pub mod grid;
pub mod outline;
pub mod raster;
pub mod types;

pub use bitmap::BitmapOutlineShape;
pub use catalog::{RasterCatalog, RasterSampler};
pub use grid::{GridMetrics, MazeGeometry};
pub use outline::{EllipseOutlineShape, OutlineShape, ShapeParams};
pub use raster::Raster;
pub use types::{Cell, Dimensions, GrayImage, GridDimensions, Point, ShapeError};

/// Build an outline shape directly from encoded image bytes, centered
/// in `size` at the largest fitting radius.
///
/// Convenience over [`Raster::decode`] plus
/// [`BitmapOutlineShape::fitted`] for callers with a single known
/// source.
///
/// # Errors
///
/// Returns [`ShapeError::EmptyInput`] if `bytes` is empty.
/// Returns [`ShapeError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
pub fn outline_from_bytes(
    size: Dimensions,
    bytes: &[u8],
) -> Result<BitmapOutlineShape, ShapeError> {
    let source = Raster::decode(bytes)?;
    Ok(BitmapOutlineShape::fitted(size, &source))
}
