//! GDAL-backed raster loader

use std::path::Path;

use gdal::Dataset;

use crate::error::{Error, Result};
use crate::source::{DecodedGrid, RasterLoader};
use crate::types::GridShape;

/// Loads raster files through GDAL, reading every band as `f64`.
///
/// Any format GDAL can open is accepted; all backend failures surface as
/// `InvalidDataset`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GdalLoader;

impl RasterLoader for GdalLoader {
    fn load(&self, path: &Path) -> Result<DecodedGrid> {
        let dataset = Dataset::open(path)
            .map_err(|e| Error::InvalidDataset(format!("GDAL could not open the file: {}", e)))?;

        let geotransform = dataset
            .geo_transform()
            .map_err(|e| Error::InvalidDataset(format!("missing geotransform: {}", e)))?;

        let (cols, rows) = dataset.raster_size();
        let bands = dataset.raster_count();
        let shape = GridShape::new(bands, rows, cols);

        let mut samples = Vec::with_capacity(shape.sample_count());
        for band_number in 1..=bands {
            let band = dataset
                .rasterband(band_number)
                .map_err(|e| Error::InvalidDataset(format!("band {}: {}", band_number, e)))?;
            let buffer = band.read_band_as::<f64>().map_err(|e| {
                Error::InvalidDataset(format!("reading band {}: {}", band_number, e))
            })?;
            samples.extend_from_slice(buffer.data());
        }

        Ok(DecodedGrid::new(shape, geotransform, samples))
    }
}
