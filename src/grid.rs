//! In-memory sample storage for a raster grid

use crate::error::{Error, Result};
use crate::types::GridShape;

/// Dense 3-D array of raster samples indexed by (band, row, column).
///
/// Samples are stored band-major: all rows of band 0, then all rows of
/// band 1, and so on, matching the order raster backends deliver full
/// grids in.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterGrid {
    shape: GridShape,
    samples: Vec<f64>,
}

impl RasterGrid {
    /// Creates a grid from its dimensions and band-major samples.
    ///
    /// Fails with `InvalidDataset` when the dimensions are degenerate or
    /// the sample count does not match them.
    pub fn new(shape: GridShape, samples: Vec<f64>) -> Result<Self> {
        if shape.bands < 1 || shape.rows < 1 || shape.cols < 1 {
            return Err(Error::InvalidDataset(format!(
                "degenerate grid dimensions: {} bands, {} rows, {} cols",
                shape.bands, shape.rows, shape.cols
            )));
        }

        if samples.len() != shape.sample_count() {
            return Err(Error::InvalidDataset(format!(
                "expected {} samples for {} bands x {} rows x {} cols, found {}",
                shape.sample_count(),
                shape.bands,
                shape.rows,
                shape.cols,
                samples.len()
            )));
        }

        Ok(Self { shape, samples })
    }

    /// Returns the grid dimensions
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Returns the value of one sample.
    ///
    /// Every index is checked; a flattened index must never silently alias
    /// into a neighboring band or row.
    pub fn value_at(&self, band: usize, row: usize, col: usize) -> Result<f64> {
        if band >= self.shape.bands || row >= self.shape.rows || col >= self.shape.cols {
            return Err(Error::IndexOutOfRange(format!(
                "pixel (band {}, row {}, col {}) outside grid of {} bands x {} rows x {} cols",
                band, row, col, self.shape.bands, self.shape.rows, self.shape.cols
            )));
        }

        let index = (band * self.shape.rows + row) * self.shape.cols + col;
        Ok(self.samples[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> RasterGrid {
        // band 0: [[1,2],[3,4]], band 1: [[11,12],[13,14]]
        RasterGrid::new(
            GridShape::new(2, 2, 2),
            vec![1.0, 2.0, 3.0, 4.0, 11.0, 12.0, 13.0, 14.0],
        )
        .unwrap()
    }

    #[test]
    fn test_value_at_reads_band_major_layout() {
        let grid = grid();
        assert_eq!(grid.value_at(0, 0, 0).unwrap(), 1.0);
        assert_eq!(grid.value_at(0, 0, 1).unwrap(), 2.0);
        assert_eq!(grid.value_at(0, 1, 0).unwrap(), 3.0);
        assert_eq!(grid.value_at(0, 1, 1).unwrap(), 4.0);
        assert_eq!(grid.value_at(1, 0, 0).unwrap(), 11.0);
        assert_eq!(grid.value_at(1, 1, 1).unwrap(), 14.0);
    }

    #[test]
    fn test_value_at_rejects_out_of_range_indices() {
        let grid = grid();
        assert!(matches!(
            grid.value_at(2, 0, 0),
            Err(Error::IndexOutOfRange(_))
        ));
        assert!(matches!(
            grid.value_at(0, 2, 0),
            Err(Error::IndexOutOfRange(_))
        ));
        assert!(matches!(
            grid.value_at(0, 0, 2),
            Err(Error::IndexOutOfRange(_))
        ));
    }

    #[test]
    fn test_new_rejects_sample_count_mismatch() {
        let result = RasterGrid::new(GridShape::new(2, 2, 2), vec![1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(Error::InvalidDataset(_))));
    }

    #[test]
    fn test_new_rejects_degenerate_dimensions() {
        assert!(matches!(
            RasterGrid::new(GridShape::new(0, 2, 2), vec![]),
            Err(Error::InvalidDataset(_))
        ));
        assert!(matches!(
            RasterGrid::new(GridShape::new(1, 0, 2), vec![]),
            Err(Error::InvalidDataset(_))
        ));
        assert!(matches!(
            RasterGrid::new(GridShape::new(1, 2, 0), vec![]),
            Err(Error::InvalidDataset(_))
        ));
    }

    #[test]
    fn test_shape_accessor() {
        assert_eq!(grid().shape(), GridShape::new(2, 2, 2));
    }
}
