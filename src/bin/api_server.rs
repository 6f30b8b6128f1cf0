use std::sync::Arc;

use terraseries::api::{create_router, AppState};
use terraseries::loaders::GdalLoader;

#[tokio::main]
async fn main() {
    let state = AppState::new(Arc::new(GdalLoader));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8001")
        .await
        .expect("Failed to bind port");

    println!("terraseries timeseries service");
    println!("Listening on http://0.0.0.0:8001");
    println!();
    println!("Endpoints:");
    println!("  GET  /api/v1/status");
    println!("  GET  /api/v1/metadata?path=<path>");
    println!("  GET  /api/v1/values?path=<path>&longitude=<lon>&latitude=<lat>&band=<band>");
    println!("  GET  /api/v1/timeseries?path=<path>&longitude=<lon>&latitude=<lat>&begin=<b>&end=<e>");
    println!("  POST /api/v1/timeseries/upload (multipart/form-data: csv file + path)");
    println!();

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
