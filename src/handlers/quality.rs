use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::entities::material_lot;
use crate::services::quality::{BatchDecision, BatchOutcome};
use crate::{ApiResponse, ApiResult, AppState};

#[derive(Debug, Deserialize, Default)]
pub struct DecisionBody {
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchBody {
    pub decisions: Vec<BatchDecision>,
}

pub async fn pending_inspection(
    State(state): State<AppState>,
) -> ApiResult<Vec<material_lot::Model>> {
    let lots = state.services.quality.pending_inspection().await?;
    Ok(Json(ApiResponse::success(lots)))
}

pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<DecisionBody>,
) -> ApiResult<material_lot::Model> {
    let lot = state.services.quality.approve(id, body.note).await?;
    Ok(Json(ApiResponse::success(lot)))
}

pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<DecisionBody>,
) -> ApiResult<material_lot::Model> {
    let lot = state.services.quality.reject(id, body.note).await?;
    Ok(Json(ApiResponse::success(lot)))
}

pub async fn batch(
    State(state): State<AppState>,
    Json(body): Json<BatchBody>,
) -> ApiResult<BatchOutcome> {
    let outcome = state.services.quality.batch(body.decisions).await?;
    Ok(Json(ApiResponse::success(outcome)))
}
