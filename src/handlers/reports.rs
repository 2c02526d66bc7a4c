use axum::extract::{Query, State};
use axum::Json;

use crate::services::production::LogFilter;
use crate::services::reports::{
    FaceBackIntakeRow, FinishedGoodsDailyRow, GlueUsageRow, PressDryDailyRow, WarehouseStockRow,
};
use crate::{ApiResponse, ApiResult, AppState};

pub async fn warehouse_stock(State(state): State<AppState>) -> ApiResult<Vec<WarehouseStockRow>> {
    let rows = state.services.reports.warehouse_stock().await?;
    Ok(Json(ApiResponse::success(rows)))
}

pub async fn press_dry_daily(
    State(state): State<AppState>,
    Query(filter): Query<LogFilter>,
) -> ApiResult<Vec<PressDryDailyRow>> {
    let rows = state.services.reports.press_dry_daily(&filter).await?;
    Ok(Json(ApiResponse::success(rows)))
}

pub async fn glue_usage_daily(
    State(state): State<AppState>,
    Query(filter): Query<LogFilter>,
) -> ApiResult<Vec<GlueUsageRow>> {
    let rows = state.services.reports.glue_usage_daily(&filter).await?;
    Ok(Json(ApiResponse::success(rows)))
}

pub async fn face_back_intake_daily(
    State(state): State<AppState>,
    Query(filter): Query<LogFilter>,
) -> ApiResult<Vec<FaceBackIntakeRow>> {
    let rows = state.services.reports.face_back_intake_daily(&filter).await?;
    Ok(Json(ApiResponse::success(rows)))
}

pub async fn finished_goods_daily(
    State(state): State<AppState>,
    Query(filter): Query<LogFilter>,
) -> ApiResult<Vec<FinishedGoodsDailyRow>> {
    let rows = state.services.reports.finished_goods_daily(&filter).await?;
    Ok(Json(ApiResponse::success(rows)))
}
