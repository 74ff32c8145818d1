//! Dashboard HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page
//!
//! ## Data
//! - `GET /api/v1/catalog` - Column and style catalogs
//! - `GET /api/v1/table?page=P` - One page of records
//!
//! ## Charts
//! - `GET /api/v1/charts/histogram?n_clicks=N` - Histogram for the histogram button
//! - `GET /api/v1/charts/map?n_clicks=N` - Scatter map for the map button
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use housing_dashboard::api::{serve, AppState};
//! use housing_dashboard::config::ApiConfig;
//! use housing_dashboard::dashboard::Dashboard;
//! use housing_dashboard::dataset::DatasetLoader;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = DatasetLoader::new().load("data/housing_sample.csv".as_ref())?;
//!     let dashboard = Arc::new(Dashboard::new(Arc::new(report.dataset)));
//!     let config = ApiConfig::default();
//!
//!     serve(AppState::new(dashboard, config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/catalog", get(routes::table::catalog))
        .route("/table", get(routes::table::table_page))
        .route("/charts/histogram", get(routes::charts::histogram))
        .route("/charts/map", get(routes::charts::map));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the configured origins; same-origin only when none are set
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Housing dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Housing dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Dashboard;
    use crate::dataset::DatasetLoader;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    const HOUSING: &str = "\
longitude,latitude,housing_median_age,population,median_house_value,ocean_proximity
-122.23,37.88,41.0,322.0,452600.0,NEAR BAY
-122.22,37.86,21.0,2401.0,358500.0,NEAR BAY
-122.24,37.85,52.0,496.0,352100.0,NEAR BAY
-118.30,34.05,35.0,1200.0,250000.0,<1H OCEAN
-121.50,38.58,18.0,900.0,120000.0,INLAND";

    fn create_test_app(page_size: usize) -> Router {
        let dataset = DatasetLoader::new().load_str(HOUSING).unwrap().dataset;
        let dashboard = Arc::new(Dashboard::new(Arc::new(dataset)));
        let state = AppState::new(dashboard, ApiConfig::default()).with_page_size(page_size);
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = get(create_test_app(12), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("California Housing Prices"));
        // record text is never parsed as markup
        assert!(!html.contains("innerHTML"));
        assert!(html.contains("textContent"));
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        for uri in ["/health/live", "/health/ready", "/health"] {
            let response = get(create_test_app(12), uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }

        let body = json(get(create_test_app(12), "/health").await).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["dataset_rows"], 5);
        assert_eq!(body["numeric_columns"], 5);
    }

    #[tokio::test]
    async fn test_catalog() {
        let body = json(get(create_test_app(12), "/api/v1/catalog").await).await;
        assert_eq!(body["columns"][0], "longitude");
        assert_eq!(body["columns"].as_array().unwrap().len(), 5);
        assert_eq!(body["styles"].as_array().unwrap().len(), 14);
    }

    #[tokio::test]
    async fn test_histogram_default_is_first_column() {
        let response = get(create_test_app(12), "/api/v1/charts/histogram").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["n_clicks"], 0);
        assert_eq!(body["selection"], "longitude");
        assert_eq!(body["chart"]["kind"], "histogram");
    }

    #[tokio::test]
    async fn test_histogram_wraps() {
        let body = json(get(create_test_app(12), "/api/v1/charts/histogram?n_clicks=7").await).await;
        // 7 mod 5 columns
        assert_eq!(body["selection"], "housing_median_age");
    }

    #[tokio::test]
    async fn test_map_title() {
        let body = json(get(create_test_app(12), "/api/v1/charts/map?n_clicks=15").await).await;
        assert_eq!(body["selection"], "carto-darkmatter");
        assert_eq!(body["chart"]["kind"], "scatter_map");
        assert_eq!(body["chart"]["title"], "Map style: carto-darkmatter");
        assert_eq!(body["chart"]["zoom"], 3);
        assert_eq!(body["chart"]["markers"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_invalid_counter_rejected() {
        for uri in [
            "/api/v1/charts/map?n_clicks=-1",
            "/api/v1/charts/histogram?n_clicks=many",
            "/api/v1/table?page=-2",
        ] {
            let response = get(create_test_app(12), uri).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);

            let body = json(response).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR", "{}", uri);
            assert!(body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("query string"));
            assert!(body["request_id"].is_string());
        }
    }

    #[tokio::test]
    async fn test_table_pages() {
        let body = json(get(create_test_app(2), "/api/v1/table?page=2").await).await;
        assert_eq!(body["page_count"], 3);
        assert_eq!(body["rows"].as_array().unwrap().len(), 1);
        assert_eq!(body["rows"][0][5], "INLAND");

        let response = get(create_test_app(2), "/api/v1/table?page=3").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
