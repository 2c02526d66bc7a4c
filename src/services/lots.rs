use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::entities::material_lot::{self, LotStatus, LotUnit, MaterialKind};
use crate::entities::supplier;
use crate::errors::ServiceError;
use crate::topology::{WarehouseCode, WarehouseTopology};

/// Lot store: intake and lookup of material lots.
///
/// Every physical quantity in the mill is a lot row. Intake creates lots at
/// the Receiving warehouse awaiting inspection; the quality gate and the
/// transformation engine take it from there.
#[derive(Clone)]
pub struct LotService {
    db: Arc<DatabaseConnection>,
    topology: Arc<WarehouseTopology>,
}

/// Intake request for a raw material delivery.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewLot {
    pub supplier_id: Option<i64>,
    pub kind: MaterialKind,
    pub thickness_mm: Option<Decimal>,
    pub quantity: Decimal,
    pub unit: LotUnit,
    pub notes: Option<String>,
    #[validate(length(min = 1))]
    pub created_by: String,
}

/// Optional filters for lot listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LotFilter {
    pub status: Option<LotStatus>,
    pub kind: Option<MaterialKind>,
    pub warehouse: Option<WarehouseCode>,
}

/// One grouped line of the stock summary projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockSummaryRow {
    pub warehouse_id: i64,
    pub kind: MaterialKind,
    pub thickness_mm: Option<Decimal>,
    pub status: LotStatus,
    pub total_quantity: Decimal,
    pub lot_count: u64,
}

impl LotService {
    pub fn new(db: Arc<DatabaseConnection>, topology: Arc<WarehouseTopology>) -> Self {
        Self { db, topology }
    }

    /// Books a delivery into the Receiving warehouse. The lot starts in
    /// AWAITING_INSPECTION and is invisible to every stage until the quality
    /// gate approves it.
    #[instrument(skip(self, new_lot), fields(kind = ?new_lot.kind))]
    pub async fn receive_lot(&self, new_lot: NewLot) -> Result<material_lot::Model, ServiceError> {
        if new_lot.quantity <= Decimal::ZERO {
            return Err(ServiceError::ValidationError(
                "intake quantity must be positive".to_string(),
            ));
        }

        if let Some(supplier_id) = new_lot.supplier_id {
            let supplier = supplier::Entity::find_by_id(supplier_id)
                .one(self.db.as_ref())
                .await?
                .ok_or_else(|| {
                    ServiceError::NotFound(format!("supplier {} not found", supplier_id))
                })?;
            if !supplier.is_active {
                return Err(ServiceError::ValidationError(format!(
                    "supplier {} is deactivated",
                    supplier_id
                )));
            }
        }

        let now = Utc::now();
        let lot = material_lot::ActiveModel {
            supplier_id: Set(new_lot.supplier_id),
            kind: Set(new_lot.kind),
            thickness_mm: Set(new_lot.thickness_mm),
            quantity: Set(new_lot.quantity),
            unit: Set(new_lot.unit),
            warehouse_id: Set(self.topology.id_of(WarehouseCode::Receiving)),
            status: Set(LotStatus::AwaitingInspection),
            notes: Set(new_lot.notes),
            created_by: Set(new_lot.created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        info!(lot_id = lot.id, "lot received into quality hold");
        Ok(lot)
    }

    pub async fn get_lot(&self, id: i64) -> Result<material_lot::Model, ServiceError> {
        material_lot::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("lot {} not found", id)))
    }

    /// Lists lots newest first, optionally narrowed by status, kind, or
    /// warehouse.
    #[instrument(skip(self))]
    pub async fn list_lots(
        &self,
        filter: &LotFilter,
    ) -> Result<Vec<material_lot::Model>, ServiceError> {
        let mut query = material_lot::Entity::find();

        if let Some(status) = filter.status {
            query = query.filter(material_lot::Column::Status.eq(status));
        }
        if let Some(kind) = filter.kind {
            query = query.filter(material_lot::Column::Kind.eq(kind));
        }
        if let Some(code) = filter.warehouse {
            query = query.filter(material_lot::Column::WarehouseId.eq(self.topology.id_of(code)));
        }

        let lots = query
            .order_by_desc(material_lot::Column::CreatedAt)
            .order_by_desc(material_lot::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(lots)
    }

    /// Live stock grouped by warehouse, kind, thickness and status. Rejected
    /// lots and drained tombstones are excluded; this is the "what can the
    /// floor still use" view.
    #[instrument(skip(self))]
    pub async fn stock_summary(&self) -> Result<Vec<StockSummaryRow>, ServiceError> {
        let lots = material_lot::Entity::find()
            .filter(material_lot::Column::Quantity.gt(Decimal::ZERO))
            .filter(material_lot::Column::Status.ne(LotStatus::Rejected))
            .all(self.db.as_ref())
            .await?;

        let mut grouped: BTreeMap<(i64, MaterialKind, Option<Decimal>, LotStatus), (Decimal, u64)> =
            BTreeMap::new();
        for lot in lots {
            let entry = grouped
                .entry((lot.warehouse_id, lot.kind, lot.thickness_mm, lot.status))
                .or_insert((Decimal::ZERO, 0));
            entry.0 += lot.quantity;
            entry.1 += 1;
        }

        Ok(grouped
            .into_iter()
            .map(
                |((warehouse_id, kind, thickness_mm, status), (total_quantity, lot_count))| {
                    StockSummaryRow {
                        warehouse_id,
                        kind,
                        thickness_mm,
                        status,
                        total_quantity,
                        lot_count,
                    }
                },
            )
            .collect())
    }
}
