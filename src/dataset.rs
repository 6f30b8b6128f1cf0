//! Raster dataset facade

use std::path::{Path, PathBuf};

use crate::coverage::Coverage;
use crate::error::{Error, Result};
use crate::grid::RasterGrid;
use crate::series::{self, BandRange};
use crate::source::{DatasetInput, DecodedGrid, RasterLoader};
use crate::transform::GeoTransform;
use crate::types::{GeoPoint, GridShape, PixelIndex};

/// An open raster dataset: the in-memory sample grid plus the validated
/// geotransform placing it on the earth's surface.
///
/// Construction is the only phase that touches the filesystem. Once built,
/// a dataset is immutable and every operation is a pure read.
#[derive(Debug)]
pub struct RasterDataset {
    path: Option<PathBuf>,
    transform: GeoTransform,
    coverage: Coverage,
    grid: RasterGrid,
}

impl RasterDataset {
    /// Opens a dataset from either an already decoded grid or a path.
    ///
    /// For a path, the file must exist (`FileNotFound`) and the loader must
    /// be able to decode it (`InvalidDataset`). In both cases the decoded
    /// geotransform must describe a north-up, axis-aligned grid
    /// (`NotNorthUp`).
    pub fn open(input: DatasetInput, loader: &dyn RasterLoader) -> Result<Self> {
        match input {
            DatasetInput::Grid(grid) => Self::from_grid(grid),
            DatasetInput::Path(path) => {
                if !path.is_file() {
                    return Err(Error::FileNotFound(path));
                }
                let grid = loader.load(&path)?;
                Self::from_parts(Some(path), grid)
            }
        }
    }

    /// Builds a dataset directly from a decoded grid
    pub fn from_grid(grid: DecodedGrid) -> Result<Self> {
        Self::from_parts(None, grid)
    }

    fn from_parts(path: Option<PathBuf>, decoded: DecodedGrid) -> Result<Self> {
        let transform = GeoTransform::from_coefficients(decoded.geotransform)?;
        let grid = RasterGrid::new(decoded.shape, decoded.samples)?;
        let shape = grid.shape();

        Ok(Self {
            path,
            transform,
            coverage: Coverage::new(shape.rows, shape.cols),
            grid,
        })
    }

    /// Returns the path the dataset was opened from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the grid dimensions
    pub fn shape(&self) -> GridShape {
        self.grid.shape()
    }

    /// Returns the number of bands
    pub fn bands(&self) -> usize {
        self.grid.shape().bands
    }

    /// Returns the number of rows of pixels
    pub fn rows(&self) -> usize {
        self.grid.shape().rows
    }

    /// Returns the number of columns of pixels
    pub fn cols(&self) -> usize {
        self.grid.shape().cols
    }

    /// Returns the validated geotransform
    pub fn transform(&self) -> &GeoTransform {
        &self.transform
    }

    /// Returns the six geotransform coefficients
    pub fn geotransform(&self) -> [f64; 6] {
        self.transform.coefficients()
    }

    /// Returns the (longitude, latitude) of the northwest corner
    pub fn origin(&self) -> GeoPoint {
        self.transform.forward(0.0, 0.0)
    }

    /// Returns the northwest (upper left) corner of the coverage
    pub fn northwest_corner(&self) -> GeoPoint {
        self.origin()
    }

    /// Returns the northeast (upper right) corner of the coverage
    pub fn northeast_corner(&self) -> GeoPoint {
        self.transform.forward(self.cols() as f64, 0.0)
    }

    /// Returns the southeast (lower right) corner of the coverage
    pub fn southeast_corner(&self) -> GeoPoint {
        self.transform.forward(self.cols() as f64, self.rows() as f64)
    }

    /// Returns the southwest (lower left) corner of the coverage
    pub fn southwest_corner(&self) -> GeoPoint {
        self.transform.forward(0.0, self.rows() as f64)
    }

    /// Returns the center of the coverage
    pub fn center(&self) -> GeoPoint {
        self.transform
            .forward(self.cols() as f64 / 2.0, self.rows() as f64 / 2.0)
    }

    /// Returns the (longitudinal, latitudinal) size of a pixel as positive
    /// magnitudes
    pub fn pixel_size(&self) -> (f64, f64) {
        (self.transform.pixel_width(), -self.transform.pixel_height())
    }

    /// Returns true if the given indices refer to a pixel inside the grid
    pub fn pixel_in_coverage(&self, row: usize, col: usize) -> bool {
        self.coverage.contains(row, col)
    }

    /// Returns the indices of the pixel covering the given point, or
    /// `None` if the point lies outside the grid
    pub fn pixel_at_point(&self, longitude: f64, latitude: f64) -> Option<PixelIndex> {
        self.coverage
            .pixel_at_point(&self.transform, longitude, latitude)
    }

    /// Returns the value of the pixel with the given indices in one band
    pub fn value_at_pixel(&self, band: usize, row: usize, col: usize) -> Result<f64> {
        self.grid.value_at(band, row, col)
    }

    /// Returns the value at the given geographic point in one band.
    ///
    /// Fails with `OutOfCoverage` when the point lies outside the grid.
    pub fn value_at_point(&self, longitude: f64, latitude: f64, band: usize) -> Result<f64> {
        let pixel = self
            .pixel_at_point(longitude, latitude)
            .ok_or(Error::OutOfCoverage {
                longitude,
                latitude,
            })?;
        self.grid.value_at(band, pixel.row, pixel.col)
    }

    /// Returns the values of one pixel across the given band range, in
    /// band order
    pub fn series_at_pixel(&self, row: usize, col: usize, range: BandRange) -> Result<Vec<f64>> {
        series::series_at_pixel(&self.grid, row, col, range)
    }

    /// Returns the values at the given geographic point across the given
    /// band range.
    ///
    /// Fails with `OutOfCoverage` when the point lies outside the grid.
    pub fn series_at_point(
        &self,
        longitude: f64,
        latitude: f64,
        range: BandRange,
    ) -> Result<Vec<f64>> {
        let pixel = self
            .pixel_at_point(longitude, latitude)
            .ok_or(Error::OutOfCoverage {
                longitude,
                latitude,
            })?;
        self.series_at_pixel(pixel.row, pixel.col, range)
    }
}
