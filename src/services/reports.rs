use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Serialize;
use tracing::instrument;

use crate::entities::finished_good::{self, FinishedGoodStatus};
use crate::entities::material_lot::{self, LotStatus, MaterialKind};
use crate::entities::plywood_setting::{self, PlywoodType};
use crate::entities::press_dry_log;
use crate::errors::ServiceError;
use crate::services::production::LogFilter;

/// Reporting projection over the ledgers and the lot store. Read-only; rows
/// are fetched under the report's filters and folded into grouped totals in
/// the service, so the same query works on the SQLite test store and the
/// Postgres production store.
#[derive(Clone)]
pub struct ReportService {
    db: Arc<DatabaseConnection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarehouseStockRow {
    pub warehouse_id: i64,
    pub kind: MaterialKind,
    pub thickness_mm: Option<Decimal>,
    pub status: LotStatus,
    pub total_quantity: Decimal,
    pub lot_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressDryDailyRow {
    pub day: NaiveDate,
    pub machine_id: i64,
    pub total_in: Decimal,
    pub total_accepted: Decimal,
    pub total_rejected: Decimal,
    pub yield_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlueUsageRow {
    pub day: NaiveDate,
    pub plywood_type: PlywoodType,
    pub total_glue: Decimal,
    pub total_accepted: Decimal,
    pub glue_per_accepted: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceBackIntakeRow {
    pub day: NaiveDate,
    pub kind: MaterialKind,
    pub status: LotStatus,
    pub total_quantity: Decimal,
    pub lot_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinishedGoodsDailyRow {
    pub day: NaiveDate,
    pub plywood_type: PlywoodType,
    pub grade: String,
    pub status: FinishedGoodStatus,
    pub total_quantity: Decimal,
}

impl ReportService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Stock on hand per warehouse, kind, thickness and status. Drained
    /// tombstone lots are excluded; rejected stock is shown so the floor can
    /// see what is quarantined.
    #[instrument(skip(self))]
    pub async fn warehouse_stock(&self) -> Result<Vec<WarehouseStockRow>, ServiceError> {
        let lots = material_lot::Entity::find()
            .filter(material_lot::Column::Quantity.gt(Decimal::ZERO))
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
                    WarehouseStockRow {
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

    /// Press-dry throughput per day and machine with the yield percentage.
    #[instrument(skip(self))]
    pub async fn press_dry_daily(
        &self,
        filter: &LogFilter,
    ) -> Result<Vec<PressDryDailyRow>, ServiceError> {
        let (start, end) = filter.bounds();
        let mut query = press_dry_log::Entity::find();
        if let Some(machine_id) = filter.machine_id {
            query = query.filter(press_dry_log::Column::MachineId.eq(machine_id));
        }
        if let Some(start) = start {
            query = query.filter(press_dry_log::Column::CreatedAt.gte(start));
        }
        if let Some(end) = end {
            query = query.filter(press_dry_log::Column::CreatedAt.lt(end));
        }
        let logs = query.all(self.db.as_ref()).await?;

        let mut grouped: BTreeMap<(NaiveDate, i64), (Decimal, Decimal, Decimal)> = BTreeMap::new();
        for log in logs {
            let entry = grouped
                .entry((log.created_at.date_naive(), log.machine_id))
                .or_insert((Decimal::ZERO, Decimal::ZERO, Decimal::ZERO));
            entry.0 += log.quantity_in;
            entry.1 += log.accepted;
            entry.2 += log.rejected;
        }

        Ok(grouped
            .into_iter()
            .map(|((day, machine_id), (total_in, total_accepted, total_rejected))| {
                PressDryDailyRow {
                    day,
                    machine_id,
                    total_in,
                    total_accepted,
                    total_rejected,
                    yield_pct: yield_pct(total_accepted, total_rejected),
                }
            })
            .collect())
    }

    /// Glue consumed per day and plywood type, with glue per accepted unit.
    #[instrument(skip(self))]
    pub async fn glue_usage_daily(
        &self,
        filter: &LogFilter,
    ) -> Result<Vec<GlueUsageRow>, ServiceError> {
        let (start, end) = filter.bounds();
        let mut query = plywood_setting::Entity::find();
        if let Some(start) = start {
            query = query.filter(plywood_setting::Column::CreatedAt.gte(start));
        }
        if let Some(end) = end {
            query = query.filter(plywood_setting::Column::CreatedAt.lt(end));
        }
        let settings = query.all(self.db.as_ref()).await?;

        let mut grouped: BTreeMap<(NaiveDate, PlywoodType), (Decimal, Decimal)> = BTreeMap::new();
        for setting in settings {
            let entry = grouped
                .entry((setting.created_at.date_naive(), setting.plywood_type))
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            entry.0 += setting.glue_qty;
            entry.1 += setting.accepted;
        }

        Ok(grouped
            .into_iter()
            .map(|((day, plywood_type), (total_glue, total_accepted))| GlueUsageRow {
                day,
                plywood_type,
                total_glue,
                total_accepted,
                glue_per_accepted: if total_accepted.is_zero() {
                    Decimal::ZERO
                } else {
                    total_glue / total_accepted
                },
            })
            .collect())
    }

    /// FACE and BACK intake per day, split by the quality gate outcome.
    #[instrument(skip(self))]
    pub async fn face_back_intake_daily(
        &self,
        filter: &LogFilter,
    ) -> Result<Vec<FaceBackIntakeRow>, ServiceError> {
        let (start, end) = filter.bounds();
        let mut query = material_lot::Entity::find().filter(
            material_lot::Column::Kind.is_in([MaterialKind::Face, MaterialKind::Back]),
        );
        if let Some(start) = start {
            query = query.filter(material_lot::Column::CreatedAt.gte(start));
        }
        if let Some(end) = end {
            query = query.filter(material_lot::Column::CreatedAt.lt(end));
        }
        let lots = query.all(self.db.as_ref()).await?;

        let mut grouped: BTreeMap<(NaiveDate, MaterialKind, LotStatus), (Decimal, u64)> =
            BTreeMap::new();
        for lot in lots {
            // Intake volume is what arrived, not what remains after debits;
            // only supplier-delivered lots count.
            if lot.supplier_id.is_none() {
                continue;
            }
            let entry = grouped
                .entry((lot.created_at.date_naive(), lot.kind, lot.status))
                .or_insert((Decimal::ZERO, 0));
            entry.0 += lot.quantity;
            entry.1 += 1;
        }

        Ok(grouped
            .into_iter()
            .map(|((day, kind, status), (total_quantity, lot_count))| FaceBackIntakeRow {
                day,
                kind,
                status,
                total_quantity,
                lot_count,
            })
            .collect())
    }

    /// Finished output per day, type, grade and status.
    #[instrument(skip(self))]
    pub async fn finished_goods_daily(
        &self,
        filter: &LogFilter,
    ) -> Result<Vec<FinishedGoodsDailyRow>, ServiceError> {
        let (start, end) = filter.bounds();
        let mut query = finished_good::Entity::find();
        if let Some(start) = start {
            query = query.filter(finished_good::Column::CreatedAt.gte(start));
        }
        if let Some(end) = end {
            query = query.filter(finished_good::Column::CreatedAt.lt(end));
        }
        let goods = query.all(self.db.as_ref()).await?;

        let mut grouped: BTreeMap<(NaiveDate, PlywoodType, String, FinishedGoodStatus), Decimal> =
            BTreeMap::new();
        for good in goods {
            let entry = grouped
                .entry((
                    good.created_at.date_naive(),
                    good.plywood_type,
                    good.grade,
                    good.status,
                ))
                .or_insert(Decimal::ZERO);
            *entry += good.quantity;
        }

        Ok(grouped
            .into_iter()
            .map(
                |((day, plywood_type, grade, status), total_quantity)| FinishedGoodsDailyRow {
                    day,
                    plywood_type,
                    grade,
                    status,
                    total_quantity,
                },
            )
            .collect())
    }
}

/// Yield percentage of a day's figures. A day with no output reports zero
/// rather than a division failure.
fn yield_pct(accepted: Decimal, rejected: Decimal) -> Decimal {
    let total = accepted + rejected;
    if total.is_zero() {
        Decimal::ZERO
    } else {
        accepted / total * Decimal::ONE_HUNDRED
    }
}
