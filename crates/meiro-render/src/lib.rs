//! meiro-render: raster painters for shape-bounded maze grids (sans-IO).
//!
//! Turns a placed grid geometry and an outline shape into preview
//! images: the shaped grid itself, per-cell highlights, and standalone
//! outline masks. Everything operates on in-memory `image` buffers;
//! encoding and saving belong to the caller.

pub mod paint;

pub use paint::{Palette, cell_included, highlight_cell, paint_outline_mask, paint_shaped_grid};
