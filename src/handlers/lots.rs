use axum::extract::{Path, Query, State};
use axum::Json;

use crate::entities::material_lot;
use crate::handlers::validate_input;
use crate::services::lots::{LotFilter, NewLot, StockSummaryRow};
use crate::{ApiResponse, ApiResult, AppState};

pub async fn receive_lot(
    State(state): State<AppState>,
    Json(new_lot): Json<NewLot>,
) -> ApiResult<material_lot::Model> {
    validate_input(&new_lot)?;
    let lot = state.services.lots.receive_lot(new_lot).await?;
    Ok(Json(ApiResponse::success(lot)))
}

pub async fn get_lot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<material_lot::Model> {
    let lot = state.services.lots.get_lot(id).await?;
    Ok(Json(ApiResponse::success(lot)))
}

pub async fn list_lots(
    State(state): State<AppState>,
    Query(filter): Query<LotFilter>,
) -> ApiResult<Vec<material_lot::Model>> {
    let lots = state.services.lots.list_lots(&filter).await?;
    Ok(Json(ApiResponse::success(lots)))
}

pub async fn stock_summary(State(state): State<AppState>) -> ApiResult<Vec<StockSummaryRow>> {
    let summary = state.services.lots.stock_summary().await?;
    Ok(Json(ApiResponse::success(summary)))
}
