use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::entities::supplier;
use crate::handlers::validate_input;
use crate::services::suppliers::{NewSupplier, SupplierUpdate};
use crate::{ApiResponse, ApiResult, AppState};

#[derive(Debug, Deserialize, Default)]
pub struct SupplierListQuery {
    #[serde(default)]
    pub active_only: bool,
}

pub async fn create_supplier(
    State(state): State<AppState>,
    Json(new_supplier): Json<NewSupplier>,
) -> ApiResult<supplier::Model> {
    validate_input(&new_supplier)?;
    let created = state.services.suppliers.create(new_supplier).await?;
    Ok(Json(ApiResponse::success(created)))
}

pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<supplier::Model> {
    let found = state.services.suppliers.get(id).await?;
    Ok(Json(ApiResponse::success(found)))
}

pub async fn list_suppliers(
    State(state): State<AppState>,
    Query(query): Query<SupplierListQuery>,
) -> ApiResult<Vec<supplier::Model>> {
    let suppliers = state.services.suppliers.list(query.active_only).await?;
    Ok(Json(ApiResponse::success(suppliers)))
}

pub async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<SupplierUpdate>,
) -> ApiResult<supplier::Model> {
    let updated = state.services.suppliers.update(id, update).await?;
    Ok(Json(ApiResponse::success(updated)))
}

pub async fn deactivate_supplier(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<supplier::Model> {
    let deactivated = state.services.suppliers.deactivate(id).await?;
    Ok(Json(ApiResponse::success(deactivated)))
}
