//! Contract between the engine and the external raster storage backend

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::GridShape;

/// A fully decoded raster grid as delivered by a storage backend:
/// dimensions, the six geotransform coefficients, and the band-major
/// sample array.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedGrid {
    pub shape: GridShape,
    pub geotransform: [f64; 6],
    pub samples: Vec<f64>,
}

impl DecodedGrid {
    /// Bundles a decoded grid.
    ///
    /// Dimension and sample-count validation happens when the grid is
    /// turned into a dataset.
    pub fn new(shape: GridShape, geotransform: [f64; 6], samples: Vec<f64>) -> Self {
        Self {
            shape,
            geotransform,
            samples,
        }
    }
}

/// What a dataset is opened from: an already decoded grid, or a path for
/// a loader to decode.
#[derive(Debug)]
pub enum DatasetInput {
    Grid(DecodedGrid),
    Path(PathBuf),
}

/// A raster storage backend that can decode a dataset file.
///
/// Implementations are expected to map their decode failures to
/// `Error::InvalidDataset`; existence of the path has already been checked
/// by the time `load` is called.
pub trait RasterLoader {
    /// Decodes the file at `path` into a grid
    fn load(&self, path: &Path) -> Result<DecodedGrid>;
}
