//! Outline raster sources: the sampler contract and an in-memory catalog.
//!
//! Shape construction never performs I/O and never owns a random
//! number generator. A [`RasterSampler`] turns caller-supplied
//! randomness into a decoded raster; callers inject both, which keeps
//! selection reproducible under a seeded generator and testable with a
//! stub sampler.

use rand::RngCore;
use rand::seq::SliceRandom;

use crate::raster::Raster;
use crate::types::ShapeError;

/// Supplies source rasters for bitmap-backed outline shapes.
///
/// Where the rasters come from (embedded assets, files read up-front,
/// a remote fetch completed earlier) is the implementor's concern; by
/// the time `sample` runs, failure means the resource genuinely is not
/// there.
pub trait RasterSampler {
    /// Produce a decoded raster using the supplied randomness.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::ResourceUnavailable`] when no raster can
    /// be supplied.
    fn sample(&self, rng: &mut dyn RngCore) -> Result<Raster, ShapeError>;
}

/// An owned set of pre-decoded rasters, sampled uniformly at random.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterCatalog {
    entries: Vec<Raster>,
}

impl RasterCatalog {
    /// Catalog over already-decoded rasters.
    #[must_use]
    pub const fn new(entries: Vec<Raster>) -> Self {
        Self { entries }
    }

    /// Decode every byte buffer into a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns the first [`ShapeError::EmptyInput`] or
    /// [`ShapeError::ImageDecode`] hit while decoding; no partial
    /// catalog is produced.
    pub fn decode_all<'a, I>(sources: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let entries = sources
            .into_iter()
            .map(Raster::decode)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Number of rasters in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog holds no rasters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RasterSampler for RasterCatalog {
    fn sample(&self, rng: &mut dyn RngCore) -> Result<Raster, ShapeError> {
        self.entries
            .choose(rng)
            .cloned()
            .ok_or_else(|| ShapeError::ResourceUnavailable("catalog is empty".to_string()))
    }
}
