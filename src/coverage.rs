//! Mapping of geographic points to pixel indices within grid bounds

use crate::transform::GeoTransform;
use crate::types::PixelIndex;

/// The rectangular pixel-index range for which a raster grid holds data.
///
/// Bounds checks use the strict half-open convention: a point exactly on
/// the south or east edge of the grid maps to row `rows` or column `cols`,
/// one past the last valid pixel, and is out of coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    rows: usize,
    cols: usize,
}

impl Coverage {
    /// Creates the coverage for a grid with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns true if the given indices refer to a pixel inside the grid
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Returns the indices of the pixel covering the given geographic
    /// point, or `None` if the point lies outside the grid.
    ///
    /// Fractional pixel coordinates are floored before the bounds check,
    /// so points just west or north of the origin land on index -1 and are
    /// rejected. Non-finite coordinates are rejected as well.
    pub fn pixel_at_point(
        &self,
        transform: &GeoTransform,
        longitude: f64,
        latitude: f64,
    ) -> Option<PixelIndex> {
        let (fractional_col, fractional_row) = transform.inverse(longitude, latitude);

        // NaN fails both comparisons and falls through to None
        if !(fractional_col >= 0.0 && fractional_row >= 0.0) {
            return None;
        }

        let col = fractional_col.floor() as usize;
        let row = fractional_row.floor() as usize;

        if self.contains(row, col) {
            Some(PixelIndex::new(row, col))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::GeoTransform;

    fn transform() -> GeoTransform {
        GeoTransform::from_coefficients([-123.0, 1.0, 0.0, 45.0, 0.0, -2.0]).unwrap()
    }

    fn coverage() -> Coverage {
        Coverage::new(4, 5)
    }

    #[test]
    fn test_contains_uses_half_open_bounds() {
        let coverage = coverage();
        assert!(coverage.contains(0, 0));
        assert!(coverage.contains(3, 4));
        assert!(!coverage.contains(4, 0));
        assert!(!coverage.contains(0, 5));
        assert!(!coverage.contains(4, 5));
    }

    #[test]
    fn test_pixel_at_origin() {
        let pixel = coverage().pixel_at_point(&transform(), -123.0, 45.0);
        assert_eq!(pixel, Some(PixelIndex::new(0, 0)));
    }

    #[test]
    fn test_pixel_at_center_of_pixel() {
        let pixel = coverage().pixel_at_point(&transform(), -122.5, 44.0);
        assert_eq!(pixel, Some(PixelIndex::new(0, 0)));
    }

    #[test]
    fn test_point_on_southeast_corner_is_outside() {
        assert_eq!(coverage().pixel_at_point(&transform(), -118.0, 37.0), None);
    }

    #[test]
    fn test_point_just_inside_southeast_corner_maps_to_last_pixel() {
        let pixel = coverage().pixel_at_point(&transform(), -118.001, 37.001);
        assert_eq!(pixel, Some(PixelIndex::new(3, 4)));
    }

    #[test]
    fn test_point_just_outside_northwest_corner_is_outside() {
        assert_eq!(
            coverage().pixel_at_point(&transform(), -123.001, 45.001),
            None
        );
    }

    #[test]
    fn test_point_on_east_edge_is_outside() {
        assert_eq!(coverage().pixel_at_point(&transform(), -118.0, 44.0), None);
    }

    #[test]
    fn test_point_on_south_edge_is_outside() {
        assert_eq!(coverage().pixel_at_point(&transform(), -122.0, 37.0), None);
    }

    #[test]
    fn test_non_finite_point_is_outside() {
        let transform = transform();
        let coverage = coverage();
        assert_eq!(coverage.pixel_at_point(&transform, f64::NAN, 44.0), None);
        assert_eq!(
            coverage.pixel_at_point(&transform, -122.0, f64::INFINITY),
            None
        );
    }

    #[test]
    fn test_pixel_center_round_trip() {
        let transform = transform();
        let coverage = coverage();
        for row in 0..4 {
            for col in 0..5 {
                let center = transform.forward(col as f64 + 0.5, row as f64 + 0.5);
                let pixel = coverage.pixel_at_point(&transform, center.longitude, center.latitude);
                assert_eq!(pixel, Some(PixelIndex::new(row, col)));
            }
        }
    }
}
