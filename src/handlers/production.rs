use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::entities::material_lot::{self, MaterialKind};
use crate::entities::plywood_setting;
use crate::entities::{
    core_build_log, hot_press_log, press_dry_log, press_machine, repair_log, scarf_join_log,
};
use crate::services::production::{
    HotPressInput, HotPressOutcome, LogFilter, PressDryInput, ScarfJoinInput, SettingInput,
    StageOutcome, YieldInput,
};
use crate::{ApiResponse, ApiResult, AppState, LimitQuery};

#[derive(Debug, Deserialize, Default)]
pub struct KindQuery {
    pub kind: Option<MaterialKind>,
}

pub async fn press_dry(
    State(state): State<AppState>,
    Json(input): Json<PressDryInput>,
) -> ApiResult<StageOutcome<press_dry_log::Model>> {
    let outcome = state.services.production.press_dry(input).await?;
    Ok(Json(ApiResponse::success(outcome)))
}

pub async fn repair(
    State(state): State<AppState>,
    Json(input): Json<YieldInput>,
) -> ApiResult<StageOutcome<repair_log::Model>> {
    let outcome = state.services.production.repair(input).await?;
    Ok(Json(ApiResponse::success(outcome)))
}

pub async fn core_build(
    State(state): State<AppState>,
    Json(input): Json<YieldInput>,
) -> ApiResult<StageOutcome<core_build_log::Model>> {
    let outcome = state.services.production.core_build(input).await?;
    Ok(Json(ApiResponse::success(outcome)))
}

pub async fn scarf_join(
    State(state): State<AppState>,
    Json(input): Json<ScarfJoinInput>,
) -> ApiResult<StageOutcome<scarf_join_log::Model>> {
    let outcome = state.services.production.scarf_join(input).await?;
    Ok(Json(ApiResponse::success(outcome)))
}

pub async fn record_setting(
    State(state): State<AppState>,
    Json(input): Json<SettingInput>,
) -> ApiResult<plywood_setting::Model> {
    let setting = state.services.production.record_setting(input).await?;
    Ok(Json(ApiResponse::success(setting)))
}

pub async fn hot_press(
    State(state): State<AppState>,
    Json(input): Json<HotPressInput>,
) -> ApiResult<HotPressOutcome> {
    let outcome = state.services.production.hot_press(input).await?;
    Ok(Json(ApiResponse::success(outcome)))
}

pub async fn list_machines(
    State(state): State<AppState>,
) -> ApiResult<Vec<press_machine::Model>> {
    let machines = state.services.production.list_machines().await?;
    Ok(Json(ApiResponse::success(machines)))
}

pub async fn core_available_for_press_dry(
    State(state): State<AppState>,
) -> ApiResult<Vec<material_lot::Model>> {
    let lots = state.services.production.core_available_for_press_dry().await?;
    Ok(Json(ApiResponse::success(lots)))
}

pub async fn available_at_intermediate_one(
    State(state): State<AppState>,
    Query(query): Query<KindQuery>,
) -> ApiResult<Vec<material_lot::Model>> {
    let lots = state
        .services
        .production
        .available_at_intermediate_one(query.kind)
        .await?;
    Ok(Json(ApiResponse::success(lots)))
}

pub async fn available_at_intermediate_two(
    State(state): State<AppState>,
    Query(query): Query<KindQuery>,
) -> ApiResult<Vec<material_lot::Model>> {
    let lots = state
        .services
        .production
        .available_at_intermediate_two(query.kind)
        .await?;
    Ok(Json(ApiResponse::success(lots)))
}

pub async fn recent_settings(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<Vec<plywood_setting::Model>> {
    let settings = state.services.production.recent_settings(query.limit).await?;
    Ok(Json(ApiResponse::success(settings)))
}

pub async fn press_dry_logs(
    State(state): State<AppState>,
    Query(filter): Query<LogFilter>,
) -> ApiResult<Vec<press_dry_log::Model>> {
    let logs = state.services.production.press_dry_logs(&filter).await?;
    Ok(Json(ApiResponse::success(logs)))
}

pub async fn repair_logs(
    State(state): State<AppState>,
    Query(filter): Query<LogFilter>,
) -> ApiResult<Vec<repair_log::Model>> {
    let logs = state.services.production.repair_logs(&filter).await?;
    Ok(Json(ApiResponse::success(logs)))
}

pub async fn core_build_logs(
    State(state): State<AppState>,
    Query(filter): Query<LogFilter>,
) -> ApiResult<Vec<core_build_log::Model>> {
    let logs = state.services.production.core_build_logs(&filter).await?;
    Ok(Json(ApiResponse::success(logs)))
}

pub async fn scarf_join_logs(
    State(state): State<AppState>,
    Query(filter): Query<LogFilter>,
) -> ApiResult<Vec<scarf_join_log::Model>> {
    let logs = state.services.production.scarf_join_logs(&filter).await?;
    Ok(Json(ApiResponse::success(logs)))
}

pub async fn hot_press_logs(
    State(state): State<AppState>,
    Query(filter): Query<LogFilter>,
) -> ApiResult<Vec<hot_press_log::Model>> {
    let logs = state.services.production.hot_press_logs(&filter).await?;
    Ok(Json(ApiResponse::success(logs)))
}
