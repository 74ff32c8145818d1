//! Chart Routes
//!
//! One endpoint per button. The browser sends the button's click counter and
//! gets back the chart for the option that counter selects.
//!
//! - GET /api/v1/charts/histogram?n_clicks=N - Histogram of the active column
//! - GET /api/v1/charts/map?n_clicks=N - Scatter map in the active style

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartParams, ChartResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/charts/histogram
pub async fn histogram(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ChartParams>, QueryRejection>,
) -> ApiResult<Json<ChartResponse>> {
    let Query(params) = params?;
    let dashboard = &state.dashboard;
    let column = dashboard.active_column(params.n_clicks)?;
    let chart = dashboard.on_histogram_click(params.n_clicks)?;

    tracing::info!(n_clicks = params.n_clicks, column, "Rebuilt histogram");

    Ok(Json(ChartResponse {
        n_clicks: params.n_clicks,
        selection: column.to_string(),
        chart,
    }))
}

/// GET /api/v1/charts/map
pub async fn map(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ChartParams>, QueryRejection>,
) -> ApiResult<Json<ChartResponse>> {
    let Query(params) = params?;
    let dashboard = &state.dashboard;
    let style = dashboard.active_style(params.n_clicks)?;
    let chart = dashboard.on_map_click(params.n_clicks)?;

    tracing::info!(n_clicks = params.n_clicks, style, "Rebuilt map");

    Ok(Json(ChartResponse {
        n_clicks: params.n_clicks,
        selection: style.to_string(),
        chart,
    }))
}
