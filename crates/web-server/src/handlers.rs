use crate::{error::AppError, AppState};
use analytics::{
    CompareRequest, HealthResponse, SectorCompaniesResponse, SectorCompareResponse,
    SectorDetailResponse, SectorsOverviewResponse, SectorsRequest,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use chrono::Utc;
use core_types::CompanySortKey;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct DetailsParams {
    #[serde(default = "default_timeframe")]
    timeframe: String,
}
fn default_timeframe() -> String { "1D".to_string() }

#[derive(Debug, Deserialize)]
pub struct CompaniesParams {
    limit: Option<usize>,
    sort_by: Option<String>,
}

/// # GET /api/v1/sectors
/// Overview of every sector plus the market summary.
pub async fn get_all_sectors(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SectorsRequest>, QueryRejection>,
) -> Result<Json<SectorsOverviewResponse>, AppError> {
    let Query(request) = query?;
    tracing::info!(
        timeframe = %request.timeframe,
        sort_by = %request.sort_by,
        sort_order = %request.sort_order,
        "GetAllSectors called."
    );
    let response = state.engine().all_sectors(&request)?;
    tracing::debug!(sectors = response.sectors.len(), "Sectors overview generated.");
    Ok(Json(response))
}

/// # GET /api/v1/sectors/:sector_id
pub async fn get_sector_details(
    Path(sector_id): Path<String>,
    State(state): State<Arc<AppState>>,
    query: Result<Query<DetailsParams>, QueryRejection>,
) -> Result<Json<SectorDetailResponse>, AppError> {
    let Query(params) = query?;
    tracing::info!(%sector_id, timeframe = %params.timeframe, "GetSectorDetails called.");
    let response = state.engine().sector_details(&sector_id, &params.timeframe)?;
    Ok(Json(response))
}

/// # GET /api/v1/sectors/:sector_id/companies
/// An unknown `sort_by` ranks by market cap rather than failing.
pub async fn get_sector_companies(
    Path(sector_id): Path<String>,
    State(state): State<Arc<AppState>>,
    query: Result<Query<CompaniesParams>, QueryRejection>,
) -> Result<Json<SectorCompaniesResponse>, AppError> {
    let Query(params) = query?;
    let sort_by = params
        .sort_by
        .as_deref()
        .map_or(CompanySortKey::MarketCap, CompanySortKey::parse_lenient);
    tracing::info!(%sector_id, limit = ?params.limit, sort_by = sort_by.as_str(), "GetSectorCompanies called.");
    let response = state
        .engine()
        .sector_companies(&sector_id, params.limit, sort_by)?;
    Ok(Json(response))
}

/// # POST /api/v1/sectors/compare
pub async fn compare_sectors(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<SectorCompareResponse>, AppError> {
    let Json(request) = body?;
    tracing::info!(sector_ids = ?request.sector_ids, timeframe = %request.timeframe, "CompareSectors called.");
    let response = state.engine().compare_sectors(&request)?;
    Ok(Json(response))
}

/// # GET /api/v1/health
pub async fn health_check() -> Json<HealthResponse> {
    tracing::debug!("Health check requested.");
    Json(HealthResponse::healthy(Utc::now()))
}
