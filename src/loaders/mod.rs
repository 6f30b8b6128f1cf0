//! Concrete raster storage backends

#[cfg(feature = "gdal")]
pub mod gdal;

#[cfg(feature = "gdal")]
pub use gdal::GdalLoader;
