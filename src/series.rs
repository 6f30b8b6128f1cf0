//! Per-band series extraction at a fixed pixel

use crate::error::{Error, Result};
use crate::grid::RasterGrid;

/// A contiguous sub-range of bands, `[begin, end)`.
///
/// Either bound may be left unset: `begin` defaults to 0 and `end` to the
/// band count of the grid the range is applied to. Defaults are resolved
/// before validation, so `BandRange::full()` is always valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandRange {
    pub begin: Option<usize>,
    pub end: Option<usize>,
}

impl BandRange {
    /// The full band stack
    pub fn full() -> Self {
        Self::default()
    }

    /// An explicit half-open range `[begin, end)`
    pub fn new(begin: usize, end: usize) -> Self {
        Self {
            begin: Some(begin),
            end: Some(end),
        }
    }

    /// Resolves the defaults against a band count and validates the result.
    ///
    /// Fails with `InvalidRange` when `begin > end` or `end > bands`.
    pub fn resolve(&self, bands: usize) -> Result<(usize, usize)> {
        let begin = self.begin.unwrap_or(0);
        let end = self.end.unwrap_or(bands);

        if begin > end || end > bands {
            return Err(Error::InvalidRange { begin, end, bands });
        }

        Ok((begin, end))
    }
}

/// Reads the values of one pixel across the resolved band range, in band
/// order.
pub(crate) fn series_at_pixel(
    grid: &RasterGrid,
    row: usize,
    col: usize,
    range: BandRange,
) -> Result<Vec<f64>> {
    let (begin, end) = range.resolve(grid.shape().bands)?;

    let mut series = Vec::with_capacity(end - begin);
    for band in begin..end {
        series.push(grid.value_at(band, row, col)?);
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridShape;

    fn grid() -> RasterGrid {
        // 4 bands of a single pixel: 1, 2, 3, 4
        RasterGrid::new(GridShape::new(4, 1, 1), vec![1.0, 2.0, 3.0, 4.0]).unwrap()
    }

    #[test]
    fn test_full_range_resolves_to_band_count() {
        assert_eq!(BandRange::full().resolve(6).unwrap(), (0, 6));
    }

    #[test]
    fn test_partial_defaults_resolve() {
        let begin_only = BandRange {
            begin: Some(2),
            end: None,
        };
        assert_eq!(begin_only.resolve(6).unwrap(), (2, 6));

        let end_only = BandRange {
            begin: None,
            end: Some(3),
        };
        assert_eq!(end_only.resolve(6).unwrap(), (0, 3));
    }

    #[test]
    fn test_resolve_rejects_inverted_range() {
        let result = BandRange::new(3, 1).resolve(6);
        assert!(matches!(
            result,
            Err(Error::InvalidRange {
                begin: 3,
                end: 1,
                bands: 6
            })
        ));
    }

    #[test]
    fn test_resolve_rejects_end_past_band_count() {
        let result = BandRange::new(0, 7).resolve(6);
        assert!(matches!(result, Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn test_empty_range_is_valid() {
        assert_eq!(BandRange::new(2, 2).resolve(6).unwrap(), (2, 2));
    }

    #[test]
    fn test_series_at_pixel_full_range() {
        let series = series_at_pixel(&grid(), 0, 0, BandRange::full()).unwrap();
        assert_eq!(series, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_series_at_pixel_sub_range() {
        let series = series_at_pixel(&grid(), 0, 0, BandRange::new(1, 3)).unwrap();
        assert_eq!(series, vec![2.0, 3.0]);
    }

    #[test]
    fn test_series_at_pixel_out_of_range_pixel() {
        let result = series_at_pixel(&grid(), 1, 0, BandRange::full());
        assert!(matches!(result, Err(Error::IndexOutOfRange(_))));
    }
}
