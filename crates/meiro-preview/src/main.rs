//! Render a PNG preview of a maze grid bounded by an outline shape.
//!
//! Feeds one or more outline images into a raster catalog, samples one
//! with a seeded random source, and paints the shape-bounded grid the
//! way an interactive renderer would. Without images, a grid-filling
//! ellipse stands in for the outline.

use std::path::PathBuf;

use clap::Parser;
use image::Rgba;
use meiro_geometry::{
    BitmapOutlineShape, Cell, Dimensions, EllipseOutlineShape, GridDimensions, GridMetrics,
    MazeGeometry, OutlineShape, Point, RasterCatalog, ShapeParams,
};
use meiro_render::{Palette, highlight_cell, paint_outline_mask, paint_shaped_grid};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Render a PNG preview of a maze grid bounded by an outline shape.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Outline image path (PNG, JPEG, BMP, WebP). Repeat to build a
    /// catalog from which one source is sampled at random; without any,
    /// a grid-filling ellipse is used.
    #[arg(long = "image", value_name = "PATH")]
    images: Vec<PathBuf>,

    /// Output image path (PNG recommended).
    #[arg(short, long)]
    output: PathBuf,

    /// Also write the resolved outline mask (white = inside) here.
    #[arg(long, value_name = "PATH")]
    mask: Option<PathBuf>,

    /// Maze width in cells.
    #[arg(long, default_value_t = 30)]
    columns: u32,

    /// Maze height in cells.
    #[arg(long, default_value_t = 20)]
    rows: u32,

    /// Pixel width of a cell's solid interior.
    #[arg(long, default_value_t = 8)]
    square_width: u32,

    /// Pixel width of the wall band between cells.
    #[arg(long, default_value_t = 6)]
    wall_width: u32,

    /// Extra margin allowance folded into centering.
    #[arg(long, default_value_t = 2)]
    border: u32,

    /// Canvas size as "WxH". Defaults to the maze extent plus one wall
    /// band and border on each side.
    #[arg(long, value_name = "WxH")]
    canvas: Option<String>,

    /// Mark one cell's square as "COL,ROW" (hover simulation).
    #[arg(long, value_name = "COL,ROW")]
    highlight: Option<String>,

    /// Seed for the outline image pick.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

// ---------------------------------------------------------------------------
// Flag parsing
// ---------------------------------------------------------------------------

/// Parse `--canvas "WxH"` into pixel dimensions.
fn parse_canvas(spec: &str) -> Result<Dimensions, String> {
    let (w_str, h_str) = spec
        .split_once('x')
        .ok_or_else(|| format!("canvas must be 'WxH', got: '{spec}'"))?;

    let width: u32 = w_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid canvas width '{w_str}': {e}"))?;
    let height: u32 = h_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid canvas height '{h_str}': {e}"))?;

    if width == 0 || height == 0 {
        return Err(format!("canvas must be non-empty, got: '{spec}'"));
    }
    Ok(Dimensions { width, height })
}

/// Parse `--highlight "COL,ROW"` into a cell address.
fn parse_cell(spec: &str) -> Result<Cell, String> {
    let (col_str, row_str) = spec
        .split_once(',')
        .ok_or_else(|| format!("highlight must be 'COL,ROW', got: '{spec}'"))?;

    let column: i32 = col_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid highlight column '{col_str}': {e}"))?;
    let row: i32 = row_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid highlight row '{row_str}': {e}"))?;

    Ok(Cell::new(column, row))
}

// ---------------------------------------------------------------------------
// Outline selection
// ---------------------------------------------------------------------------

/// Placement for an outline image over the cell grid.
///
/// The centered radius floors to zero when an axis is a single cell;
/// it is clamped to 1 so such grids still take an image.
fn outline_params(space: Dimensions) -> ShapeParams {
    let mut params = ShapeParams::centered(space);
    params.size = params.size.max(1);
    params
}

/// Fallback outline: an ellipse spanning the whole cell grid.
#[allow(clippy::cast_possible_wrap)]
fn ellipse_outline(space: Dimensions) -> EllipseOutlineShape {
    let center = Point::new((space.width / 2) as i32, (space.height / 2) as i32);
    let radius_x = ((space.width / 2) as i32).max(1);
    let radius_y = ((space.height / 2) as i32).max(1);
    EllipseOutlineShape::new(space, center, radius_x, radius_y)
}

/// Decode the given image files and sample one into a bitmap outline.
fn sampled_outline(
    paths: &[PathBuf],
    space: Dimensions,
    seed: u64,
) -> Result<BitmapOutlineShape, Box<dyn std::error::Error>> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        eprintln!("Reading outline image from {}", path.display());
        sources.push(std::fs::read(path)?);
    }

    let catalog = RasterCatalog::decode_all(sources.iter().map(Vec::as_slice))?;
    eprintln!("Decoded {} outline image(s)", catalog.len());

    let mut rng = StdRng::seed_from_u64(seed);
    let shape = BitmapOutlineShape::sampled(space, outline_params(space), &catalog, &mut rng)?;
    eprintln!(
        "Sampled outline raster {}x{}, {} background",
        shape.raster().width(),
        shape.raster().height(),
        if shape.black_background() { "dark" } else { "light" },
    );
    Ok(shape)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Canvas that fits the maze extent plus one wall band and border on
/// each side. Saturates for grids too large to render.
fn default_canvas(metrics: GridMetrics, cells: GridDimensions) -> Dimensions {
    let extent = metrics.maze_extent(cells);
    let margin = metrics.wall_width().saturating_add(metrics.border()).saturating_mul(2);
    Dimensions {
        width: extent.width.saturating_add(margin),
        height: extent.height.saturating_add(margin),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.columns == 0 || args.rows == 0 {
        return Err("maze must have at least one column and one row".into());
    }
    if args.square_width == 0 {
        return Err("square width must be positive".into());
    }

    let metrics = GridMetrics::new(args.square_width, args.wall_width, args.border);
    let cells = GridDimensions {
        columns: args.columns,
        rows: args.rows,
    };

    let canvas = match &args.canvas {
        Some(spec) => parse_canvas(spec).map_err(|e| format!("--canvas: {e}"))?,
        None => default_canvas(metrics, cells),
    };

    let geometry = MazeGeometry::centered(metrics, canvas, cells);
    eprintln!(
        "Canvas {}x{}, maze {}x{} cells at pitch {}, origin ({}, {})",
        canvas.width,
        canvas.height,
        cells.columns,
        cells.rows,
        metrics.grid_width(),
        geometry.offset().x,
        geometry.offset().y,
    );

    // Outline shapes live in the cell grid's coordinate space.
    let space = Dimensions::from(cells);
    let shape: Box<dyn OutlineShape> = if args.images.is_empty() {
        eprintln!("No outline images given; using a grid-filling ellipse");
        Box::new(ellipse_outline(space))
    } else {
        Box::new(sampled_outline(&args.images, space, args.seed)?)
    };

    eprintln!("Painting shaped grid...");
    let palette = Palette::default();
    let mut preview = paint_shaped_grid(&geometry, cells, shape.as_ref(), canvas, &palette);

    if let Some(spec) = &args.highlight {
        let cell = parse_cell(spec).map_err(|e| format!("--highlight: {e}"))?;
        eprintln!("Highlighting cell ({}, {})", cell.column, cell.row);
        highlight_cell(&mut preview, &geometry, cell, Rgba([255, 64, 64, 255]));
    }

    if let Some(mask_path) = &args.mask {
        eprintln!("Saving outline mask to {}", mask_path.display());
        paint_outline_mask(shape.as_ref()).save(mask_path)?;
    }

    eprintln!("Saving to {}", args.output.display());
    preview.save(&args.output)?;

    eprintln!("Done.");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use meiro_geometry::Raster;

    #[test]
    fn parse_canvas_accepts_wxh() {
        assert_eq!(
            parse_canvas("438x294").unwrap(),
            Dimensions {
                width: 438,
                height: 294
            },
        );
    }

    #[test]
    fn parse_canvas_rejects_malformed_input() {
        assert!(parse_canvas("438").is_err());
        assert!(parse_canvas("ax294").is_err());
        assert!(parse_canvas("0x294").is_err());
    }

    #[test]
    fn parse_cell_accepts_signed_indices() {
        assert_eq!(parse_cell("4,-2").unwrap(), Cell::new(4, -2));
        assert_eq!(parse_cell(" 3 , 1 ").unwrap(), Cell::new(3, 1));
    }

    #[test]
    fn parse_cell_rejects_malformed_input() {
        assert!(parse_cell("4").is_err());
        assert!(parse_cell("4;2").is_err());
        assert!(parse_cell("x,y").is_err());
    }

    #[test]
    fn outline_params_clamp_single_cell_axes() {
        let params = outline_params(Dimensions {
            width: 1,
            height: 5,
        });
        assert_eq!(params.center, Point::new(0, 2));
        assert_eq!(params.size, 1);
    }

    #[test]
    fn outline_params_keep_the_centered_radius_elsewhere() {
        let space = Dimensions {
            width: 30,
            height: 20,
        };
        assert_eq!(outline_params(space), ShapeParams::centered(space));
    }

    #[test]
    fn single_column_grid_still_builds_a_bitmap_outline() {
        let space = Dimensions {
            width: 1,
            height: 5,
        };
        let source = Raster::from_gray(image::GrayImage::from_pixel(4, 4, image::Luma([0])));
        let shape = BitmapOutlineShape::new(space, &source, outline_params(space));
        assert_eq!(shape.size(), space);
        assert!(shape.contains(0, 2), "center cell should sample the raster");
    }

    #[test]
    fn ellipse_outline_spans_the_grid() {
        let space = Dimensions {
            width: 30,
            height: 20,
        };
        let shape = ellipse_outline(space);
        assert!(shape.contains(15, 10));
        assert!(shape.contains(0, 10));
        assert!(shape.contains(15, 0));
        assert!(!shape.contains(0, 0));
    }

    #[test]
    fn ellipse_outline_handles_single_cell_grids() {
        let space = Dimensions {
            width: 1,
            height: 1,
        };
        let shape = ellipse_outline(space);
        assert!(shape.contains(0, 0));
    }

    #[test]
    fn default_canvas_wraps_extent_in_margin() {
        let canvas = default_canvas(
            GridMetrics::new(8, 6, 2),
            GridDimensions {
                columns: 30,
                rows: 20,
            },
        );
        assert_eq!(
            canvas,
            Dimensions {
                width: 436,
                height: 296
            },
        );
    }

    #[test]
    fn default_canvas_saturates_for_huge_grids() {
        let canvas = default_canvas(
            GridMetrics::new(8, 6, 2),
            GridDimensions {
                columns: u32::MAX,
                rows: 20,
            },
        );
        assert_eq!(canvas.width, u32::MAX);
        assert_eq!(canvas.height, 296);
    }
}
