use serde::{Deserialize, Serialize};

use crate::types::GeoPoint;

pub const SERVICE_NAME: &str = "terraseries timeseries service";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct DatasetQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataResponse {
    pub path: String,
    pub bands: usize,
    pub rows: usize,
    pub cols: usize,
    pub northwest_corner: [f64; 2],
    pub northeast_corner: [f64; 2],
    pub southeast_corner: [f64; 2],
    pub southwest_corner: [f64; 2],
    pub center: [f64; 2],
    pub pixel_size: [f64; 2],
}

#[derive(Debug, Deserialize)]
pub struct ValueRequest {
    pub path: String,
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub band: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueResponse {
    pub longitude: f64,
    pub latitude: f64,
    pub band: usize,
    pub value: Option<f64>,
    pub in_coverage: bool,
}

#[derive(Debug, Deserialize)]
pub struct SeriesRequest {
    pub path: String,
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub begin: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResponse {
    pub path: String,
    pub boundary_geometry: PointGeometry,
    pub begin: usize,
    pub end: usize,
    pub values: Vec<f64>,
}

/// GeoJSON-style point echoing the query location
#[derive(Debug, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            geometry_type: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CsvPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn geo_point_array(point: GeoPoint) -> [f64; 2] {
    [point.longitude, point.latitude]
}
