//! Raster-backed outline shapes.
//!
//! A bitmap outline is built from a grayscale source image. The source
//! is resampled so its longer axis spans the requested shape diameter,
//! placed around the requested center point, and classified per pixel
//! by a fixed brightness threshold: dark pixels are inside the shape.
//!
//! Whether the source draws a dark figure on a light ground or the
//! reverse is inferred from its four corner pixels. That polarity also
//! answers queries outside the placed raster, where the source's
//! background implicitly continues.

use rand::RngCore;

use crate::catalog::RasterSampler;
use crate::outline::{OutlineShape, ShapeParams};
use crate::raster::Raster;
use crate::types::{Dimensions, Point, ShapeError};

/// Brightness at or below which a raster pixel counts as inside the shape.
const FOREGROUND_THRESHOLD: f32 = 0.5;

/// Corner brightness sum below which the source background is dark.
/// Half brightness across all four corners is the tipping point.
const DARK_CORNER_SUM: f32 = 2.0;

/// An outline shape sampled from a grayscale raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapOutlineShape {
    size: Dimensions,
    raster: Raster,
    offset: Point,
    black_background: bool,
}

impl BitmapOutlineShape {
    /// Build a shape from an already-decoded source raster.
    ///
    /// The source is resampled so its longer axis spans
    /// `2 * params.size` pixels (aspect preserved), then placed with its
    /// center at `params.center`; odd extents leave the extra pixel on
    /// the far side. Background polarity is read from the resampled
    /// corners.
    ///
    /// # Panics
    ///
    /// Panics if `params.size` is not positive.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn new(size: Dimensions, source: &Raster, params: ShapeParams) -> Self {
        assert!(params.size > 0, "shape size must be positive");
        let raster = source.scaled_to_radius(params.size.unsigned_abs());
        let offset = Point::new(
            params.center.x - (raster.width() / 2) as i32,
            params.center.y - (raster.height() / 2) as i32,
        );
        let black_background = raster.corner_brightness_sum() < DARK_CORNER_SUM;
        Self {
            size,
            raster,
            offset,
            black_background,
        }
    }

    /// Build a shape from a randomly selected source raster.
    ///
    /// The sampler supplies the source; where it comes from (embedded
    /// assets, files read up-front, a remote fetch) is the sampler's
    /// concern.
    ///
    /// # Errors
    ///
    /// Propagates the sampler's failure to supply a raster, including
    /// [`ShapeError::ResourceUnavailable`] when it has nothing to offer.
    ///
    /// # Panics
    ///
    /// Panics if `params.size` is not positive.
    pub fn sampled(
        size: Dimensions,
        params: ShapeParams,
        sampler: &dyn RasterSampler,
        rng: &mut dyn RngCore,
    ) -> Result<Self, ShapeError> {
        let source = sampler.sample(rng)?;
        Ok(Self::new(size, &source, params))
    }

    /// Build a shape centered in `size` at the largest fitting radius.
    ///
    /// # Panics
    ///
    /// Panics if the smaller extent of `size` is below 2 pixels.
    #[must_use]
    pub fn fitted(size: Dimensions, source: &Raster) -> Self {
        Self::new(size, source, ShapeParams::centered(size))
    }

    /// Whether the source draws on a dark background. Queries outside
    /// the placed raster return this.
    #[must_use]
    pub const fn black_background(&self) -> bool {
        self.black_background
    }

    /// Canvas position of the placed raster's top-left pixel.
    #[must_use]
    pub const fn offset(&self) -> Point {
        self.offset
    }

    /// The resampled raster backing this shape.
    #[must_use]
    pub const fn raster(&self) -> &Raster {
        &self.raster
    }
}

impl OutlineShape for BitmapOutlineShape {
    fn size(&self) -> Dimensions {
        self.size
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn contains(&self, x: i32, y: i32) -> bool {
        let xi = i64::from(x) - i64::from(self.offset.x);
        let yi = i64::from(y) - i64::from(self.offset.y);
        if xi < 0
            || yi < 0
            || xi >= i64::from(self.raster.width())
            || yi >= i64::from(self.raster.height())
        {
            return self.black_background;
        }
        self.raster.brightness(xi as u32, yi as u32) <= FOREGROUND_THRESHOLD
    }
}
