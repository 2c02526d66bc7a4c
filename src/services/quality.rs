use std::sync::Arc;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::entities::material_lot::{self, LotStatus};
use crate::errors::ServiceError;
use crate::topology::{WarehouseCode, WarehouseTopology};

/// Quality gate: the only path from AWAITING_INSPECTION to a decided status.
///
/// Decisions change status and notes only. Quantity and location are never
/// touched here, and a decided lot can never be re-decided.
#[derive(Clone)]
pub struct QualityGateService {
    db: Arc<DatabaseConnection>,
    topology: Arc<WarehouseTopology>,
}

/// Verdict carried by a batch decision item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Approve,
    Reject,
}

/// One lot decision inside a batch request.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchDecision {
    pub lot_id: i64,
    pub verdict: Verdict,
    pub note: Option<String>,
}

/// Per-item result of a batch run. Skipped items carry the reason so the
/// client can refresh instead of guessing.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum BatchItemOutcome {
    Applied { lot_id: i64, verdict: Verdict },
    Skipped { lot_id: i64, reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub applied: u64,
    pub items: Vec<BatchItemOutcome>,
}

impl QualityGateService {
    pub fn new(db: Arc<DatabaseConnection>, topology: Arc<WarehouseTopology>) -> Self {
        Self { db, topology }
    }

    /// Lots waiting on a decision, oldest first. Inspection works the queue
    /// in arrival order.
    #[instrument(skip(self))]
    pub async fn pending_inspection(&self) -> Result<Vec<material_lot::Model>, ServiceError> {
        let receiving = self.topology.id_of(WarehouseCode::Receiving);
        let lots = material_lot::Entity::find()
            .filter(material_lot::Column::Status.eq(LotStatus::AwaitingInspection))
            .filter(material_lot::Column::WarehouseId.eq(receiving))
            .order_by_asc(material_lot::Column::CreatedAt)
            .order_by_asc(material_lot::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(lots)
    }

    /// Approves a pending lot, making it visible to the stages. An optional
    /// note replaces the intake note; absent, the existing note is kept.
    #[instrument(skip(self, note))]
    pub async fn approve(
        &self,
        lot_id: i64,
        note: Option<String>,
    ) -> Result<material_lot::Model, ServiceError> {
        let decided = self
            .decide(self.db.as_ref(), lot_id, LotStatus::Approved, note)
            .await?;
        if !decided {
            return Err(stale_lot(lot_id));
        }
        info!(lot_id, "lot approved");
        self.fetch(lot_id).await
    }

    /// Rejects a pending lot. Rejection always requires a reason.
    #[instrument(skip(self, note))]
    pub async fn reject(
        &self,
        lot_id: i64,
        note: Option<String>,
    ) -> Result<material_lot::Model, ServiceError> {
        let note = note.filter(|n| !n.trim().is_empty()).ok_or_else(|| {
            ServiceError::ValidationError("a rejection note is required".to_string())
        })?;

        let decided = self
            .decide(self.db.as_ref(), lot_id, LotStatus::Rejected, Some(note))
            .await?;
        if !decided {
            return Err(stale_lot(lot_id));
        }
        info!(lot_id, "lot rejected");
        self.fetch(lot_id).await
    }

    /// Applies a list of decisions in one transaction, best effort: items
    /// that are missing, already decided, or malformed are reported as
    /// skipped while the rest proceed.
    #[instrument(skip(self, decisions), fields(count = decisions.len()))]
    pub async fn batch(&self, decisions: Vec<BatchDecision>) -> Result<BatchOutcome, ServiceError> {
        let txn = self.db.begin().await?;

        let mut applied = 0;
        let mut items = Vec::with_capacity(decisions.len());
        for decision in decisions {
            let (status, note) = match decision.verdict {
                Verdict::Approve => (LotStatus::Approved, decision.note),
                Verdict::Reject => {
                    match decision.note.filter(|n| !n.trim().is_empty()) {
                        Some(note) => (LotStatus::Rejected, Some(note)),
                        None => {
                            items.push(BatchItemOutcome::Skipped {
                                lot_id: decision.lot_id,
                                reason: "a rejection note is required".to_string(),
                            });
                            continue;
                        }
                    }
                }
            };

            if self.decide(&txn, decision.lot_id, status, note).await? {
                applied += 1;
                items.push(BatchItemOutcome::Applied {
                    lot_id: decision.lot_id,
                    verdict: decision.verdict,
                });
            } else {
                warn!(lot_id = decision.lot_id, "stale batch item skipped");
                items.push(BatchItemOutcome::Skipped {
                    lot_id: decision.lot_id,
                    reason: "lot is missing or already decided".to_string(),
                });
            }
        }

        txn.commit().await?;
        Ok(BatchOutcome { applied, items })
    }

    /// Conditional status flip. Returns false when the lot is not currently
    /// awaiting inspection, which covers both "missing" and "already
    /// decided" without a prior read.
    async fn decide<C: ConnectionTrait>(
        &self,
        conn: &C,
        lot_id: i64,
        status: LotStatus,
        note: Option<String>,
    ) -> Result<bool, ServiceError> {
        let mut update = material_lot::Entity::update_many()
            .col_expr(material_lot::Column::Status, Expr::value(status))
            .col_expr(material_lot::Column::UpdatedAt, Expr::value(Utc::now()));
        if let Some(note) = note {
            update = update.col_expr(material_lot::Column::Notes, Expr::value(note));
        }

        let result = update
            .filter(material_lot::Column::Id.eq(lot_id))
            .filter(material_lot::Column::Status.eq(LotStatus::AwaitingInspection))
            .exec(conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn fetch(&self, lot_id: i64) -> Result<material_lot::Model, ServiceError> {
        material_lot::Entity::find_by_id(lot_id)
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("lot {} not found", lot_id)))
    }
}

fn stale_lot(lot_id: i64) -> ServiceError {
    ServiceError::NotFound(format!("lot {} is not awaiting inspection", lot_id))
}
