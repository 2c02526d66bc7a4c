use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request},
    routing::get,
    Router,
};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use plymill_api::config::AppConfig;
use plymill_api::entities::material_lot::{self, LotUnit, MaterialKind};
use plymill_api::services::lots::NewLot;
use plymill_api::{api_v1_routes, db, health_handler, status_handler, AppState};

/// Test harness: application state over a throwaway SQLite database.
///
/// The pool is capped at one connection so every test observes a single
/// serialized database, mirroring how the transactional guarantees are
/// exercised in CI.
pub struct TestApp {
    pub state: AppState,
    router: Router,
    _db_dir: tempfile::TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_dir = tempfile::tempdir().expect("create temp dir for test database");
        let db_path = db_dir.path().join("plymill_test.db");

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::build(Arc::new(pool), cfg)
            .await
            .expect("failed to build test application state");

        let router = Router::new()
            .route("/status", get(status_handler))
            .route("/health", get(health_handler))
            .nest("/api/v1", api_v1_routes())
            .with_state(state.clone());

        Self {
            state,
            router,
            _db_dir: db_dir,
        }
    }

    /// Sends a JSON request against the router.
    #[allow(dead_code)]
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Books a lot of the given kind and quantity into Receiving.
    #[allow(dead_code)]
    pub async fn seed_lot(&self, kind: MaterialKind, quantity: Decimal) -> material_lot::Model {
        self.state
            .services
            .lots
            .receive_lot(NewLot {
                supplier_id: None,
                kind,
                thickness_mm: None,
                quantity,
                unit: LotUnit::Sheet,
                notes: None,
                created_by: "tester".to_string(),
            })
            .await
            .expect("seed lot for tests")
    }

    /// Books and immediately approves a lot, making it stage-visible.
    #[allow(dead_code)]
    pub async fn seed_approved_lot(
        &self,
        kind: MaterialKind,
        quantity: Decimal,
    ) -> material_lot::Model {
        let lot = self.seed_lot(kind, quantity).await;
        self.state
            .services
            .quality
            .approve(lot.id, None)
            .await
            .expect("approve seeded lot")
    }
}

/// Reads a response body as JSON.
#[allow(dead_code)]
pub async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("response body is not valid json")
}
