//! Outline shapes: boolean membership masks that bound a maze.
//!
//! This module defines the [`OutlineShape`] trait for pluggable shape
//! sources plus a procedural ellipse implementation. Raster-backed
//! shapes live in [`bitmap`](crate::bitmap).
//!
//! # Strategy pattern
//!
//! A maze builder only ever asks one question of a shape: does this
//! point belong to it? The trait keeps procedural shapes and decoded
//! image shapes interchangeable behind that single query, so callers
//! hold a `&dyn OutlineShape` and never learn where the mask came from.

use serde::{Deserialize, Serialize};

use crate::types::{Dimensions, Point};

/// A boolean membership mask over an integer coordinate space.
///
/// Implementations must be total and pure: `contains` accepts any
/// signed coordinate, including points far outside
/// [`size`](OutlineShape::size), and repeated queries with equal
/// arguments return equal answers. Each implementation defines its own
/// out-of-bounds policy.
pub trait OutlineShape {
    /// Nominal dimensions of the shape's coordinate space.
    fn size(&self) -> Dimensions;

    /// Whether the point at (x, y) belongs to the shape.
    fn contains(&self, x: i32, y: i32) -> bool;
}

/// Placement of a shape within its coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeParams {
    /// Point the shape is positioned around.
    pub center: Point,
    /// Target radius: half the extent of the shape's longer dimension.
    pub size: i32,
}

impl ShapeParams {
    /// Placement that centers a shape in `space`, with the radius
    /// reaching the nearer pair of edges.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn centered(space: Dimensions) -> Self {
        let smaller = if space.width < space.height {
            space.width
        } else {
            space.height
        };
        Self {
            center: Point::new((space.width / 2) as i32, (space.height / 2) as i32),
            size: (smaller / 2) as i32,
        }
    }
}

/// A procedural axis-aligned ellipse.
///
/// Useful as a fallback outline when no source image is available, and
/// as a deterministic shape for exercising grid/shape consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EllipseOutlineShape {
    size: Dimensions,
    center: Point,
    radius_x: i32,
    radius_y: i32,
}

impl EllipseOutlineShape {
    /// An ellipse with independent horizontal and vertical radii.
    ///
    /// # Panics
    ///
    /// Panics if either radius is not positive.
    #[must_use]
    pub fn new(size: Dimensions, center: Point, radius_x: i32, radius_y: i32) -> Self {
        assert!(
            radius_x > 0 && radius_y > 0,
            "ellipse radii must be positive",
        );
        Self {
            size,
            center,
            radius_x,
            radius_y,
        }
    }

    /// A circle placed per `params`.
    ///
    /// # Panics
    ///
    /// Panics if `params.size` is not positive.
    #[must_use]
    pub fn circle(size: Dimensions, params: ShapeParams) -> Self {
        Self::new(size, params.center, params.size, params.size)
    }
}

impl OutlineShape for EllipseOutlineShape {
    fn size(&self) -> Dimensions {
        self.size
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        // Integer ellipse test: (dx*ry)^2 + (dy*rx)^2 <= (rx*ry)^2.
        // Widened so extreme coordinates cannot overflow.
        let dx = i128::from(x) - i128::from(self.center.x);
        let dy = i128::from(y) - i128::from(self.center.y);
        let rx = i128::from(self.radius_x);
        let ry = i128::from(self.radius_y);
        (dx * ry).pow(2) + (dy * rx).pow(2) <= (rx * ry).pow(2)
    }
}
