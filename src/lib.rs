//! Plymill API Library
//!
//! Material flow tracking for a plywood mill: lot ledger, quality gate, and
//! the stage-transition engine that moves material between warehouses.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod services;
pub mod topology;

use axum::{extract::State, response::Json, routing::get, routing::post, Router};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::services::AppServices;
use crate::topology::WarehouseTopology;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub topology: Arc<WarehouseTopology>,
    pub services: AppServices,
}

impl AppState {
    /// Builds the shared state: resolves the warehouse topology (failing
    /// fast on missing reference data) and wires the services.
    pub async fn build(
        db: Arc<DatabaseConnection>,
        config: config::AppConfig,
    ) -> Result<Self, errors::ServiceError> {
        let topology = Arc::new(WarehouseTopology::load(db.as_ref()).await?);
        let services = AppServices::new(db.clone(), topology.clone());
        Ok(Self {
            db,
            config,
            topology,
            services,
        })
    }
}

// Common response wrappers
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            errors: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Standard API result type for JSON responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, errors::ServiceError>;

/// Common query parameters for list endpoints
#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    20
}

/// All `/api/v1` routes. Handlers stay thin; the services own the rules.
pub fn api_v1_routes() -> Router<AppState> {
    let lots = Router::new()
        .route("/lots", post(handlers::lots::receive_lot))
        .route("/lots", get(handlers::lots::list_lots))
        .route("/lots/{id}", get(handlers::lots::get_lot))
        .route("/lots/stock-summary", get(handlers::lots::stock_summary));

    let quality = Router::new()
        .route("/qc/pending", get(handlers::quality::pending_inspection))
        .route("/qc/{id}/approve", post(handlers::quality::approve))
        .route("/qc/{id}/reject", post(handlers::quality::reject))
        .route("/qc/batch", post(handlers::quality::batch));

    let production = Router::new()
        .route("/production/machines", get(handlers::production::list_machines))
        .route("/production/press-dry", post(handlers::production::press_dry))
        .route("/production/repair", post(handlers::production::repair))
        .route("/production/core-build", post(handlers::production::core_build))
        .route("/production/scarf-join", post(handlers::production::scarf_join))
        .route("/production/settings", post(handlers::production::record_setting))
        .route("/production/settings", get(handlers::production::recent_settings))
        .route("/production/hot-press", post(handlers::production::hot_press))
        .route(
            "/production/press-dry/available",
            get(handlers::production::core_available_for_press_dry),
        )
        .route(
            "/production/intermediate-1/available",
            get(handlers::production::available_at_intermediate_one),
        )
        .route(
            "/production/intermediate-2/available",
            get(handlers::production::available_at_intermediate_two),
        )
        .route("/production/press-dry/logs", get(handlers::production::press_dry_logs))
        .route("/production/repair/logs", get(handlers::production::repair_logs))
        .route(
            "/production/core-build/logs",
            get(handlers::production::core_build_logs),
        )
        .route(
            "/production/scarf-join/logs",
            get(handlers::production::scarf_join_logs),
        )
        .route("/production/hot-press/logs", get(handlers::production::hot_press_logs));

    let reports = Router::new()
        .route("/reports/warehouse-stock", get(handlers::reports::warehouse_stock))
        .route("/reports/press-dry-daily", get(handlers::reports::press_dry_daily))
        .route("/reports/glue-usage", get(handlers::reports::glue_usage_daily))
        .route(
            "/reports/face-back-intake",
            get(handlers::reports::face_back_intake_daily),
        )
        .route(
            "/reports/finished-goods-daily",
            get(handlers::reports::finished_goods_daily),
        );

    let suppliers = Router::new()
        .route("/suppliers", post(handlers::suppliers::create_supplier))
        .route("/suppliers", get(handlers::suppliers::list_suppliers))
        .route("/suppliers/{id}", get(handlers::suppliers::get_supplier))
        .route("/suppliers/{id}", axum::routing::put(handlers::suppliers::update_supplier))
        .route(
            "/suppliers/{id}/deactivate",
            post(handlers::suppliers::deactivate_supplier),
        );

    Router::new()
        .merge(lots)
        .merge(quality)
        .merge(production)
        .merge(reports)
        .merge(suppliers)
}

/// Liveness and basic build info.
pub async fn status_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Readiness: checks the database connection.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let db_ok = db::check_connection(state.db.as_ref()).await.is_ok();
    Json(json!({
        "status": if db_ok { "healthy" } else { "degraded" },
        "database": if db_ok { "up" } else { "down" },
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod response_tests {
    use super::*;

    #[test]
    fn success_response_wraps_data() {
        let response = ApiResponse::success("ok");
        assert!(response.success);
        assert_eq!(response.data, Some("ok"));
        assert!(response.message.is_none());
    }

    #[test]
    fn error_response_carries_message() {
        let response = ApiResponse::<()>::error("oops".into());
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.message.as_deref(), Some("oops"));
    }
}
