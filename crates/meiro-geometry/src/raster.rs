//! Outline raster decoding and brightness sampling.
//!
//! Outline sources arrive as raw image bytes (PNG, JPEG, BMP, WebP),
//! are decoded to single-channel grayscale, and are sampled as
//! normalized brightness in `[0.0, 1.0]`. Everything downstream of
//! decoding operates on these in-memory rasters only.

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};

use crate::types::{Dimensions, ShapeError};

/// An owned grayscale raster sampled as normalized brightness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    image: GrayImage,
}

impl Raster {
    /// Wrap an already-decoded grayscale image.
    #[must_use]
    pub const fn from_gray(image: GrayImage) -> Self {
        Self { image }
    }

    /// Decode raw image bytes into a grayscale raster.
    ///
    /// Supports PNG, JPEG, BMP, and WebP (whatever the `image` crate can
    /// decode). Color input is converted with the standard luminance
    /// weights: `0.299*R + 0.587*G + 0.114*B`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::EmptyInput`] if `bytes` is empty.
    /// Returns [`ShapeError::ImageDecode`] if the image format is
    /// unrecognized or the data is corrupt.
    pub fn decode(bytes: &[u8]) -> Result<Self, ShapeError> {
        if bytes.is_empty() {
            return Err(ShapeError::EmptyInput);
        }

        let image = image::load_from_memory(bytes)?.to_luma8();
        Ok(Self { image })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Width and height in pixels.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.image.width(),
            height: self.image.height(),
        }
    }

    /// Borrow the underlying grayscale image.
    #[must_use]
    pub const fn as_gray(&self) -> &GrayImage {
        &self.image
    }

    /// Normalized brightness of the pixel at (x, y): 0.0 is black,
    /// 1.0 is white.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the raster bounds.
    #[must_use]
    pub fn brightness(&self, x: u32, y: u32) -> f32 {
        f32::from(self.image.get_pixel(x, y).0[0]) / 255.0
    }

    /// Resample so the longer axis spans `2 * radius` pixels, preserving
    /// aspect ratio (bilinear filter). Upscales as well as downscales.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is zero.
    #[must_use = "returns the resampled raster"]
    pub fn scaled_to_radius(&self, radius: u32) -> Self {
        assert!(radius > 0, "radius must be positive");
        let target = radius * 2;
        let image = DynamicImage::ImageLuma8(self.image.clone())
            .resize(target, target, FilterType::Triangle)
            .into_luma8();
        Self { image }
    }

    /// Sum of the four corner pixels' brightness, in `[0.0, 4.0]`.
    ///
    /// A 1x1 raster samples its only pixel four times.
    ///
    /// # Panics
    ///
    /// Panics if the raster has no pixels.
    #[must_use]
    pub fn corner_brightness_sum(&self) -> f32 {
        let right = self.width() - 1;
        let bottom = self.height() - 1;
        self.brightness(0, 0)
            + self.brightness(right, 0)
            + self.brightness(0, bottom)
            + self.brightness(right, bottom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Helper: encode a grayscale image as a PNG byte buffer.
    fn gray_png(image: &GrayImage) -> Vec<u8> {
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::L8,
        )
        .ok();
        buf
    }

    /// Helper: encode a single 1x1 RGBA pixel as a PNG byte buffer.
    fn encode_rgba_pixel(r: u8, g: u8, b: u8) -> Vec<u8> {
        let img = image::RgbaImage::from_fn(1, 1, |_, _| image::Rgba([r, g, b, 255]));
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .ok();
        buf
    }

    // --- Decoding tests ---

    #[test]
    fn empty_input_returns_error() {
        let result = Raster::decode(&[]);
        assert!(matches!(result, Err(ShapeError::EmptyInput)));
    }

    #[test]
    fn corrupt_bytes_return_image_decode_error() {
        let result = Raster::decode(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(ShapeError::ImageDecode(_))));
    }

    #[test]
    fn valid_png_decodes_with_original_dimensions() {
        let img = GrayImage::from_fn(17, 31, |x, _| image::Luma([u8::try_from(x).unwrap() * 7]));
        let raster = Raster::decode(&gray_png(&img)).unwrap();
        assert_eq!(raster.width(), 17);
        assert_eq!(raster.height(), 31);
        assert_eq!(
            raster.dimensions(),
            Dimensions {
                width: 17,
                height: 31
            },
        );
        assert_eq!(raster.as_gray().get_pixel(3, 0).0[0], 21);
    }

    #[test]
    fn color_input_converts_to_weighted_luminance() {
        let r = Raster::decode(&encode_rgba_pixel(255, 0, 0)).unwrap();
        let g = Raster::decode(&encode_rgba_pixel(0, 255, 0)).unwrap();
        let b = Raster::decode(&encode_rgba_pixel(0, 0, 255)).unwrap();
        let (r, g, b) = (
            r.brightness(0, 0),
            g.brightness(0, 0),
            b.brightness(0, 0),
        );
        assert!(
            g > r && r > b,
            "expected green > red > blue luminance, got R={r} G={g} B={b}",
        );
    }

    // --- Brightness tests ---

    #[test]
    fn brightness_normalizes_to_unit_range() {
        let img = GrayImage::from_fn(3, 1, |x, _| match x {
            0 => image::Luma([0]),
            1 => image::Luma([128]),
            _ => image::Luma([255]),
        });
        let raster = Raster::from_gray(img);
        assert!((raster.brightness(0, 0) - 0.0).abs() < f32::EPSILON);
        assert!((raster.brightness(1, 0) - 128.0 / 255.0).abs() < f32::EPSILON);
        assert!((raster.brightness(2, 0) - 1.0).abs() < f32::EPSILON);
    }

    // --- Resampling tests ---

    #[test]
    fn scaled_landscape_fits_width_to_diameter() {
        let raster = Raster::from_gray(GrayImage::from_pixel(100, 60, image::Luma([90])));
        let scaled = raster.scaled_to_radius(10);
        assert_eq!(scaled.width(), 20);
        // Aspect ratio preserved: 60 * 20 / 100 = 12.
        assert_eq!(scaled.height(), 12);
    }

    #[test]
    fn scaled_portrait_fits_height_to_diameter() {
        let raster = Raster::from_gray(GrayImage::from_pixel(60, 100, image::Luma([90])));
        let scaled = raster.scaled_to_radius(10);
        assert_eq!(scaled.width(), 12);
        assert_eq!(scaled.height(), 20);
    }

    #[test]
    fn scaled_upscales_small_sources() {
        let raster = Raster::from_gray(GrayImage::from_pixel(5, 5, image::Luma([200])));
        let scaled = raster.scaled_to_radius(8);
        assert_eq!(scaled.width(), 16);
        assert_eq!(scaled.height(), 16);
        // Uniform input stays uniform through resampling.
        assert!((scaled.brightness(7, 7) - 200.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn scaled_to_zero_radius_panics() {
        let raster = Raster::from_gray(GrayImage::from_pixel(4, 4, image::Luma([0])));
        let _ = raster.scaled_to_radius(0);
    }

    // --- Corner sum tests ---

    #[test]
    fn corner_sum_samples_true_corners() {
        // Corners: (0,0)=0, (2,0)=255, (0,1)=255, (2,1)=255; the center
        // column is ignored.
        let img = GrayImage::from_fn(3, 2, |x, y| {
            if x == 0 && y == 0 {
                image::Luma([0])
            } else if x == 1 {
                image::Luma([30])
            } else {
                image::Luma([255])
            }
        });
        let raster = Raster::from_gray(img);
        assert!((raster.corner_brightness_sum() - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn corner_sum_of_single_pixel_counts_it_four_times() {
        let raster = Raster::from_gray(GrayImage::from_pixel(1, 1, image::Luma([255])));
        assert!((raster.corner_brightness_sum() - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn corner_sum_of_mixed_corners_is_exact() {
        // Two black and two white corners sum to exactly 2.0.
        let img = GrayImage::from_fn(4, 4, |x, _| {
            if x < 2 {
                image::Luma([0])
            } else {
                image::Luma([255])
            }
        });
        let raster = Raster::from_gray(img);
        assert!((raster.corner_brightness_sum() - 2.0).abs() < f32::EPSILON);
    }
}
