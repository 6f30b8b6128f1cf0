//! Core data types for terraseries

/// A geographic point in the dataset's native coordinate reference system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    /// Creates a new geographic point
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// Zero-based (row, column) indices of a pixel inside the grid coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelIndex {
    pub row: usize,
    pub col: usize,
}

impl PixelIndex {
    /// Creates a new pixel index
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Dimensions of a raster grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Number of bands
    pub bands: usize,
    /// Number of rows of pixels
    pub rows: usize,
    /// Number of columns of pixels
    pub cols: usize,
}

impl GridShape {
    /// Creates a new grid shape
    pub fn new(bands: usize, rows: usize, cols: usize) -> Self {
        Self { bands, rows, cols }
    }

    /// Returns the total number of samples across all bands
    pub fn sample_count(&self) -> usize {
        self.bands * self.rows * self.cols
    }
}
