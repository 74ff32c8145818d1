//! Table Routes
//!
//! Paginated view of the raw records.
//!
//! - GET /api/v1/table?page=P - One page of rows
//! - GET /api/v1/catalog - Options the two buttons cycle through

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CatalogResponse, TableParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/table
pub async fn table_page(
    State(state): State<Arc<AppState>>,
    params: Result<Query<TableParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = params?;
    let page = state
        .dashboard
        .table_page(params.page, state.page_size)
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "Page {} (table has {} pages)",
                params.page,
                state.dashboard.page_count(state.page_size)
            ))
        })?;

    Ok(Json(page).into_response())
}

/// GET /api/v1/catalog
pub async fn catalog(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        columns: state.dashboard.columns().to_vec(),
        styles: state.dashboard.styles().to_vec(),
    })
}
