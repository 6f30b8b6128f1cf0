//! HTTP service layer
//!
//! Thin axum glue over [`RasterDataset`](crate::RasterDataset): every
//! handler resolves a dataset (through the shared cache) and delegates to
//! one engine operation.

pub mod handlers;
pub mod models;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
