//! Error types for terraseries

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for terraseries operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when opening or querying a raster dataset
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// Dataset file does not exist at the given path
    FileNotFound(PathBuf),

    /// The backend could not decode the file, or the decoded grid is unusable
    InvalidDataset(String),

    /// The geotransform is not north-up and axis-aligned
    NotNorthUp(String),

    /// A geographic point maps outside the grid coverage
    OutOfCoverage { longitude: f64, latitude: f64 },

    /// A band, row, or column index is outside the grid bounds
    IndexOutOfRange(String),

    /// A band range with `begin > end` or bounds outside `[0, bands]`
    InvalidRange {
        begin: usize,
        end: usize,
        bands: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::FileNotFound(path) => {
                write!(f, "Dataset file not found at path {}", path.display())
            }
            Error::InvalidDataset(msg) => write!(f, "Invalid dataset: {}", msg),
            Error::NotNorthUp(msg) => write!(f, "Dataset is not north-up: {}", msg),
            Error::OutOfCoverage {
                longitude,
                latitude,
            } => write!(
                f,
                "Point ({}, {}) is outside the dataset coverage",
                longitude, latitude
            ),
            Error::IndexOutOfRange(msg) => write!(f, "Index out of range: {}", msg),
            Error::InvalidRange { begin, end, bands } => write!(
                f,
                "Invalid band range [{}, {}) for {} bands",
                begin, end, bands
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = Error::FileNotFound(PathBuf::from("/data/missing.tif"));
        assert_eq!(
            err.to_string(),
            "Dataset file not found at path /data/missing.tif"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_out_of_coverage_display() {
        let err = Error::OutOfCoverage {
            longitude: -118.0,
            latitude: 37.0,
        };
        assert!(err.to_string().contains("(-118, 37)"));
    }

    #[test]
    fn test_invalid_range_display() {
        let err = Error::InvalidRange {
            begin: 3,
            end: 1,
            bands: 6,
        };
        assert!(err.to_string().contains("[3, 1)"));
        assert!(err.to_string().contains("6 bands"));
    }
}
