//! terraseries - a raster-coordinate engine for band timeseries extraction
//!
//! terraseries places a rows x columns x bands raster grid on the earth's
//! surface with a 6-coefficient affine geotransform, converts between
//! geographic coordinates and pixel indices, and extracts single values or
//! per-band series at a pixel or point. Decoding raster files is delegated
//! to a [`RasterLoader`]; a GDAL-backed loader is available behind the
//! `gdal` cargo feature.
//!
//! # Examples
//!
//! ## Querying an in-memory grid
//!
//! ```
//! use terraseries::{BandRange, DecodedGrid, GridShape, RasterDataset};
//!
//! // 2 bands of a 2x2 grid with its northwest corner at (-123, 45)
//! let grid = DecodedGrid::new(
//!     GridShape::new(2, 2, 2),
//!     [-123.0, 1.0, 0.0, 45.0, 0.0, -1.0],
//!     vec![1.0, 2.0, 3.0, 4.0, 11.0, 12.0, 13.0, 14.0],
//! );
//!
//! let dataset = RasterDataset::from_grid(grid)?;
//!
//! assert_eq!(dataset.value_at_point(-122.5, 44.5, 0)?, 1.0);
//! assert_eq!(
//!     dataset.series_at_point(-122.0, 44.0, BandRange::full())?,
//!     vec![4.0, 14.0]
//! );
//! # Ok::<(), terraseries::Error>(())
//! ```
//!
//! ## Opening a dataset file
//!
//! ```no_run
//! # #[cfg(feature = "gdal")]
//! # fn open_and_query() -> terraseries::Result<()> {
//! use terraseries::loaders::GdalLoader;
//! use terraseries::{BandRange, DatasetInput, RasterDataset};
//!
//! let dataset = RasterDataset::open(
//!     DatasetInput::Path("climate.tif".into()),
//!     &GdalLoader,
//! )?;
//!
//! if let Some(pixel) = dataset.pixel_at_point(-110.5, 35.5) {
//!     let series = dataset.series_at_pixel(pixel.row, pixel.col, BandRange::full())?;
//!     println!("{} samples at {:?}", series.len(), pixel);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod coverage;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod loaders;
pub mod series;
pub mod source;
pub mod transform;
pub mod types;

pub use cache::DatasetCache;
pub use coverage::Coverage;
pub use dataset::RasterDataset;
pub use error::{Error, Result};
pub use grid::RasterGrid;
pub use series::BandRange;
pub use source::{DatasetInput, DecodedGrid, RasterLoader};
pub use transform::GeoTransform;
pub use types::{GeoPoint, GridShape, PixelIndex};
