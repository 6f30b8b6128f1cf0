use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use axum::extract::multipart::Multipart;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use crate::cache::DatasetCache;
use crate::series::BandRange;
use crate::source::{DatasetInput, RasterLoader};
use crate::{Error, RasterDataset};

use super::models::*;

/// Shared service state: the storage backend plus the dataset cache
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<dyn RasterLoader + Send + Sync>,
    pub cache: DatasetCache,
}

impl AppState {
    pub fn new(loader: Arc<dyn RasterLoader + Send + Sync>) -> Self {
        Self {
            loader,
            cache: DatasetCache::default(),
        }
    }

    /// Resolves a dataset through the cache, opening it on a miss
    fn dataset(&self, path: &str) -> crate::Result<Arc<RasterDataset>> {
        let path = PathBuf::from(path);

        if let Some(dataset) = self.cache.get(&path) {
            return Ok(dataset);
        }

        let dataset = Arc::new(RasterDataset::open(
            DatasetInput::Path(path.clone()),
            self.loader.as_ref(),
        )?);
        self.cache.put(path, Arc::clone(&dataset));
        Ok(dataset)
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(error: &Error) -> ApiError {
    let status = match error {
        Error::FileNotFound(_) => StatusCode::NOT_FOUND,
        Error::InvalidRange { .. } => StatusCode::BAD_REQUEST,
        Error::InvalidDataset(_) | Error::NotNorthUp(_) | Error::OutOfCoverage { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Error::IndexOutOfRange(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub async fn get_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn get_metadata(
    State(state): State<AppState>,
    Query(query): Query<DatasetQuery>,
) -> Result<Json<MetadataResponse>, ApiError> {
    let dataset = state.dataset(&query.path).map_err(|e| api_error(&e))?;

    Ok(Json(MetadataResponse {
        path: query.path,
        bands: dataset.bands(),
        rows: dataset.rows(),
        cols: dataset.cols(),
        northwest_corner: geo_point_array(dataset.northwest_corner()),
        northeast_corner: geo_point_array(dataset.northeast_corner()),
        southeast_corner: geo_point_array(dataset.southeast_corner()),
        southwest_corner: geo_point_array(dataset.southwest_corner()),
        center: geo_point_array(dataset.center()),
        pixel_size: [dataset.pixel_size().0, dataset.pixel_size().1],
    }))
}

pub async fn get_value(
    State(state): State<AppState>,
    Query(req): Query<ValueRequest>,
) -> Result<Json<ValueResponse>, ApiError> {
    let dataset = state.dataset(&req.path).map_err(|e| api_error(&e))?;

    if req.band >= dataset.bands() {
        return Err(bad_request(format!(
            "band {} out of range for {} bands",
            req.band,
            dataset.bands()
        )));
    }

    // out of coverage is an expected outcome, reported in-band as a null value
    let value = match dataset.value_at_point(req.longitude, req.latitude, req.band) {
        Ok(value) => Some(value),
        Err(Error::OutOfCoverage { .. }) => None,
        Err(e) => return Err(api_error(&e)),
    };

    Ok(Json(ValueResponse {
        longitude: req.longitude,
        latitude: req.latitude,
        band: req.band,
        in_coverage: value.is_some(),
        value,
    }))
}

pub async fn get_series(
    State(state): State<AppState>,
    Query(req): Query<SeriesRequest>,
) -> Result<Json<SeriesResponse>, ApiError> {
    let dataset = state.dataset(&req.path).map_err(|e| api_error(&e))?;

    let range = BandRange {
        begin: req.begin,
        end: req.end,
    };
    let (begin, end) = range.resolve(dataset.bands()).map_err(|e| api_error(&e))?;

    let values = dataset
        .series_at_point(req.longitude, req.latitude, range)
        .map_err(|e| api_error(&e))?;

    Ok(Json(SeriesResponse {
        path: req.path,
        boundary_geometry: PointGeometry::new(req.longitude, req.latitude),
        begin,
        end,
        values,
    }))
}

pub async fn upload_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let start = Instant::now();

    let mut csv_data: Option<Vec<u8>> = None;
    let mut dataset_path: Option<String> = None;
    let mut begin: Option<usize> = None;
    let mut end: Option<usize> = None;

    while let Some(field) = multipart.next_field().await.unwrap_or(None) {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "csv" => {
                csv_data = Some(field.bytes().await.unwrap_or_default().to_vec());
            }
            "path" => {
                dataset_path = Some(field.text().await.unwrap_or_default());
            }
            "begin" => {
                if let Ok(text) = field.text().await {
                    begin = text.parse().ok();
                }
            }
            "end" => {
                if let Ok(text) = field.text().await {
                    end = text.parse().ok();
                }
            }
            _ => {}
        }
    }

    let csv_data = csv_data.ok_or_else(|| bad_request("Missing CSV file"))?;
    let dataset_path = dataset_path.ok_or_else(|| bad_request("Missing path parameter"))?;

    let dataset = state.dataset(&dataset_path).map_err(|e| api_error(&e))?;
    let range = BandRange { begin, end };
    let (begin, end) = range.resolve(dataset.bands()).map_err(|e| api_error(&e))?;

    let mut csv_reader = csv::Reader::from_reader(Cursor::new(csv_data));
    let mut points: Vec<CsvPoint> = Vec::new();

    for result in csv_reader.deserialize() {
        if let Ok(point) = result {
            points.push(point);
        }
    }

    // the range is validated and pixel lookups come from the coverage
    // check, so the only per-point failure left is out-of-coverage
    let series: Vec<Option<Vec<f64>>> = points
        .par_iter()
        .map(|point| {
            dataset
                .series_at_point(point.longitude, point.latitude, range)
                .ok()
        })
        .collect();

    let in_coverage = series.iter().filter(|s| s.is_some()).count();
    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let mut csv_output = String::with_capacity(points.len() * 40);

    csv_output.push_str("# Statistics\n");
    csv_output.push_str(&format!("# Total points: {}\n", points.len()));
    csv_output.push_str(&format!("# In coverage: {}\n", in_coverage));
    csv_output.push_str(&format!("# Out of coverage: {}\n", points.len() - in_coverage));
    csv_output.push_str(&format!("# Execution time: {:.2} ms\n", execution_time_ms));

    let has_names = points.iter().any(|p| p.name.is_some());
    csv_output.push_str(if has_names {
        "latitude,longitude,name"
    } else {
        "latitude,longitude"
    });
    for band in begin..end {
        csv_output.push_str(&format!(",band_{}", band));
    }
    csv_output.push('\n');

    for (point, values) in points.iter().zip(&series) {
        csv_output.push_str(&format!("{},{}", point.latitude, point.longitude));
        if has_names {
            csv_output.push(',');
            csv_output.push_str(point.name.as_deref().unwrap_or(""));
        }

        match values {
            Some(values) => {
                for value in values {
                    csv_output.push_str(&format!(",{}", value));
                }
            }
            None => {
                for _ in begin..end {
                    csv_output.push_str(",OUT_OF_COVERAGE");
                }
            }
        }
        csv_output.push('\n');
    }

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"timeseries_results.csv\"",
        )
        .body(Body::from(csv_output))
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to build response: {}", e),
                }),
            )
        })
}
