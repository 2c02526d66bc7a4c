use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::entities::material_lot::{self, LotStatus, MaterialKind};
use crate::entities::plywood_setting::{self, PlywoodType};
use crate::entities::{
    core_build_log, finished_good, hot_press_log, press_dry_log, press_machine, repair_log,
    scarf_join_log,
};
use crate::errors::ServiceError;
use crate::topology::{Stage, WarehouseCode, WarehouseTopology};

const FINISHED_GOOD_DEFAULT_GRADE: &str = "A";

/// Transformation engine: executes the stage transitions that move material
/// between warehouses.
///
/// Each stage call is one transaction: debit the source lot, append the
/// stage ledger row, credit the output. Either all of it lands or none of
/// it does.
#[derive(Clone)]
pub struct ProductionService {
    db: Arc<DatabaseConnection>,
    topology: Arc<WarehouseTopology>,
}

/// Yield figures shared by every consuming stage.
#[derive(Debug, Clone, Deserialize)]
pub struct YieldInput {
    pub lot_id: i64,
    pub quantity_in: Decimal,
    pub accepted: Decimal,
    pub rejected: Decimal,
    pub notes: Option<String>,
    pub created_by: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PressDryInput {
    pub machine_id: i64,
    #[serde(flatten)]
    pub batch: YieldInput,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScarfJoinInput {
    pub grain_direction: Option<String>,
    #[serde(flatten)]
    pub batch: YieldInput,
}

/// Composite bill-of-materials record for the plywood-setting stage.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingInput {
    pub plywood_type: PlywoodType,
    pub short_core_qty: Decimal,
    #[serde(default)]
    pub long_core_qty: Decimal,
    pub face_qty: Decimal,
    pub back_qty: Decimal,
    pub glue_qty: Decimal,
    #[serde(default)]
    pub accepted: Decimal,
    #[serde(default)]
    pub rejected: Decimal,
    pub notes: Option<String>,
    pub created_by: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HotPressInput {
    pub setting_id: i64,
    pub quantity_in: Decimal,
    pub accepted: Decimal,
    pub rejected: Decimal,
    pub notes: Option<String>,
    pub created_by: String,
}

/// Result of a lot-consuming stage: the ledger row plus the credited output
/// lot (absent when the whole batch was rejected).
#[derive(Debug, Clone, Serialize)]
pub struct StageOutcome<L: Serialize> {
    pub log: L,
    pub output_lot: Option<material_lot::Model>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HotPressOutcome {
    pub log: hot_press_log::Model,
    pub finished_good: Option<finished_good::Model>,
}

/// Date-range and machine filters for ledger listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub machine_id: Option<i64>,
}

impl LogFilter {
    /// Half-open UTC bounds: midnight of `from` up to midnight after `to`.
    /// A `to` at the calendar maximum has no successor; the bound clamps to
    /// the latest representable instant rather than silently widening.
    pub(crate) fn bounds(&self) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        let start = self.from.map(|d| d.and_time(NaiveTime::MIN).and_utc());
        let end = self.to.map(|d| match d.succ_opt() {
            Some(next) => next.and_time(NaiveTime::MIN).and_utc(),
            None => DateTime::<Utc>::MAX_UTC,
        });
        (start, end)
    }
}

impl ProductionService {
    pub fn new(db: Arc<DatabaseConnection>, topology: Arc<WarehouseTopology>) -> Self {
        Self { db, topology }
    }

    /// Press-dry: CORE at Receiving into CORE at Intermediate-1, tied to a
    /// specific dryer machine.
    #[instrument(skip(self, input), fields(lot_id = input.batch.lot_id, machine_id = input.machine_id))]
    pub async fn press_dry(
        &self,
        input: PressDryInput,
    ) -> Result<StageOutcome<press_dry_log::Model>, ServiceError> {
        validate_yield(&input.batch)?;

        let machine = press_machine::Entity::find_by_id(input.machine_id)
            .one(self.db.as_ref())
            .await?
            .filter(|m| m.is_active)
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "press machine {} not found or inactive",
                    input.machine_id
                ))
            })?;

        let txn = self.db.begin().await?;
        let source = self
            .debit_source_lot(
                &txn,
                Stage::PressDry,
                input.batch.lot_id,
                Some(MaterialKind::Core),
                input.batch.quantity_in,
            )
            .await?;

        let log = press_dry_log::ActiveModel {
            machine_id: Set(machine.id),
            lot_id: Set(source.id),
            quantity_in: Set(input.batch.quantity_in),
            accepted: Set(input.batch.accepted),
            rejected: Set(input.batch.rejected),
            notes: Set(input.batch.notes.clone()),
            created_by: Set(input.batch.created_by.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let output_lot = self
            .credit_output(
                &txn,
                Stage::PressDry,
                &source,
                input.batch.accepted,
                format!("press-dried from lot {} on machine {}", source.id, machine.id),
                &input.batch.created_by,
            )
            .await?;

        txn.commit().await?;
        info!(log_id = log.id, "press-dry recorded");
        Ok(StageOutcome { log, output_lot })
    }

    /// Repair: any approved kind at Intermediate-1 into the same kind at
    /// Intermediate-2.
    #[instrument(skip(self, input), fields(lot_id = input.lot_id))]
    pub async fn repair(
        &self,
        input: YieldInput,
    ) -> Result<StageOutcome<repair_log::Model>, ServiceError> {
        validate_yield(&input)?;

        let txn = self.db.begin().await?;
        let source = self
            .debit_source_lot(&txn, Stage::Repair, input.lot_id, None, input.quantity_in)
            .await?;

        let log = repair_log::ActiveModel {
            lot_id: Set(source.id),
            quantity_in: Set(input.quantity_in),
            accepted: Set(input.accepted),
            rejected: Set(input.rejected),
            notes: Set(input.notes.clone()),
            created_by: Set(input.created_by.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let output_lot = self
            .credit_output(
                &txn,
                Stage::Repair,
                &source,
                input.accepted,
                format!("repaired from lot {}", source.id),
                &input.created_by,
            )
            .await?;

        txn.commit().await?;
        info!(log_id = log.id, "repair recorded");
        Ok(StageOutcome { log, output_lot })
    }

    /// Core-build: CORE at Intermediate-1 into CORE at Intermediate-2.
    #[instrument(skip(self, input), fields(lot_id = input.lot_id))]
    pub async fn core_build(
        &self,
        input: YieldInput,
    ) -> Result<StageOutcome<core_build_log::Model>, ServiceError> {
        validate_yield(&input)?;

        let txn = self.db.begin().await?;
        let source = self
            .debit_source_lot(
                &txn,
                Stage::CoreBuild,
                input.lot_id,
                Some(MaterialKind::Core),
                input.quantity_in,
            )
            .await?;

        let log = core_build_log::ActiveModel {
            lot_id: Set(source.id),
            quantity_in: Set(input.quantity_in),
            accepted: Set(input.accepted),
            rejected: Set(input.rejected),
            notes: Set(input.notes.clone()),
            created_by: Set(input.created_by.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let output_lot = self
            .credit_output(
                &txn,
                Stage::CoreBuild,
                &source,
                input.accepted,
                format!("core built from lot {}", source.id),
                &input.created_by,
            )
            .await?;

        txn.commit().await?;
        info!(log_id = log.id, "core-build recorded");
        Ok(StageOutcome { log, output_lot })
    }

    /// Scarf-join: CORE at Intermediate-1 into CORE at Intermediate-2,
    /// recording the grain direction of the join.
    #[instrument(skip(self, input), fields(lot_id = input.batch.lot_id))]
    pub async fn scarf_join(
        &self,
        input: ScarfJoinInput,
    ) -> Result<StageOutcome<scarf_join_log::Model>, ServiceError> {
        validate_yield(&input.batch)?;

        let txn = self.db.begin().await?;
        let source = self
            .debit_source_lot(
                &txn,
                Stage::ScarfJoin,
                input.batch.lot_id,
                Some(MaterialKind::Core),
                input.batch.quantity_in,
            )
            .await?;

        let log = scarf_join_log::ActiveModel {
            lot_id: Set(source.id),
            quantity_in: Set(input.batch.quantity_in),
            accepted: Set(input.batch.accepted),
            rejected: Set(input.batch.rejected),
            grain_direction: Set(input.grain_direction),
            notes: Set(input.batch.notes.clone()),
            created_by: Set(input.batch.created_by.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let output_lot = self
            .credit_output(
                &txn,
                Stage::ScarfJoin,
                &source,
                input.batch.accepted,
                format!("scarf-joined from lot {}", source.id),
                &input.batch.created_by,
            )
            .await?;

        txn.commit().await?;
        info!(log_id = log.id, "scarf-join recorded");
        Ok(StageOutcome { log, output_lot })
    }

    /// Records a plywood-setting assembly. Component quantities are the
    /// operator's bill of materials for one pressing batch; they do not
    /// debit any lot.
    #[instrument(skip(self, input), fields(plywood_type = ?input.plywood_type))]
    pub async fn record_setting(
        &self,
        input: SettingInput,
    ) -> Result<plywood_setting::Model, ServiceError> {
        for (name, qty) in [
            ("short_core_qty", input.short_core_qty),
            ("long_core_qty", input.long_core_qty),
            ("face_qty", input.face_qty),
            ("back_qty", input.back_qty),
            ("glue_qty", input.glue_qty),
            ("accepted", input.accepted),
            ("rejected", input.rejected),
        ] {
            if qty < Decimal::ZERO {
                return Err(ServiceError::ValidationError(format!(
                    "{} must not be negative",
                    name
                )));
            }
        }

        let setting = plywood_setting::ActiveModel {
            plywood_type: Set(input.plywood_type),
            short_core_qty: Set(input.short_core_qty),
            long_core_qty: Set(input.long_core_qty),
            face_qty: Set(input.face_qty),
            back_qty: Set(input.back_qty),
            glue_qty: Set(input.glue_qty),
            accepted: Set(input.accepted),
            rejected: Set(input.rejected),
            notes: Set(input.notes),
            created_by: Set(input.created_by),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        info!(setting_id = setting.id, "plywood setting recorded");
        Ok(setting)
    }

    /// Hot-press: consumes a recorded setting, shelving accepted sheets as
    /// finished goods.
    #[instrument(skip(self, input), fields(setting_id = input.setting_id))]
    pub async fn hot_press(&self, input: HotPressInput) -> Result<HotPressOutcome, ServiceError> {
        validate_quantities(input.quantity_in, input.accepted, input.rejected)?;

        let setting = plywood_setting::Entity::find_by_id(input.setting_id)
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("setting {} not found", input.setting_id))
            })?;

        let txn = self.db.begin().await?;
        let log = hot_press_log::ActiveModel {
            setting_id: Set(setting.id),
            quantity_in: Set(input.quantity_in),
            accepted: Set(input.accepted),
            rejected: Set(input.rejected),
            notes: Set(input.notes),
            created_by: Set(input.created_by.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let finished = if input.accepted > Decimal::ZERO {
            let row = finished_good::ActiveModel {
                plywood_type: Set(setting.plywood_type),
                quantity: Set(input.accepted),
                grade: Set(FINISHED_GOOD_DEFAULT_GRADE.to_string()),
                hot_press_log_id: Set(log.id),
                warehouse_id: Set(self.topology.id_of(WarehouseCode::Finished)),
                status: Set(finished_good::FinishedGoodStatus::Available),
                created_by: Set(input.created_by),
                created_at: Set(Utc::now()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            Some(row)
        } else {
            None
        };

        txn.commit().await?;
        info!(log_id = log.id, "hot-press recorded");
        Ok(HotPressOutcome {
            log,
            finished_good: finished,
        })
    }

    /// Active dryer machines, so operators can pick a `machine_id` before
    /// posting a press-dry run.
    pub async fn list_machines(&self) -> Result<Vec<press_machine::Model>, ServiceError> {
        let machines = press_machine::Entity::find()
            .filter(press_machine::Column::IsActive.eq(true))
            .order_by_asc(press_machine::Column::MachineNo)
            .all(self.db.as_ref())
            .await?;
        Ok(machines)
    }

    // Availability queries. All return approved lots with remaining quantity,
    // oldest first, so operators consume in arrival order.

    pub async fn core_available_for_press_dry(
        &self,
    ) -> Result<Vec<material_lot::Model>, ServiceError> {
        self.available(WarehouseCode::Receiving, Some(MaterialKind::Core))
            .await
    }

    pub async fn available_at_intermediate_one(
        &self,
        kind: Option<MaterialKind>,
    ) -> Result<Vec<material_lot::Model>, ServiceError> {
        self.available(WarehouseCode::IntermediateOne, kind).await
    }

    pub async fn available_at_intermediate_two(
        &self,
        kind: Option<MaterialKind>,
    ) -> Result<Vec<material_lot::Model>, ServiceError> {
        self.available(WarehouseCode::IntermediateTwo, kind).await
    }

    async fn available(
        &self,
        code: WarehouseCode,
        kind: Option<MaterialKind>,
    ) -> Result<Vec<material_lot::Model>, ServiceError> {
        let mut query = material_lot::Entity::find()
            .filter(material_lot::Column::WarehouseId.eq(self.topology.id_of(code)))
            .filter(material_lot::Column::Status.eq(LotStatus::Approved))
            .filter(material_lot::Column::Quantity.gt(Decimal::ZERO));
        if let Some(kind) = kind {
            query = query.filter(material_lot::Column::Kind.eq(kind));
        }
        let lots = query
            .order_by_asc(material_lot::Column::CreatedAt)
            .order_by_asc(material_lot::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(lots)
    }

    /// Latest setting records for hot-press operators picking a batch.
    pub async fn recent_settings(
        &self,
        limit: u64,
    ) -> Result<Vec<plywood_setting::Model>, ServiceError> {
        let settings = plywood_setting::Entity::find()
            .order_by_desc(plywood_setting::Column::CreatedAt)
            .order_by_desc(plywood_setting::Column::Id)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;
        Ok(settings)
    }

    // Ledger listings, newest first.

    pub async fn press_dry_logs(
        &self,
        filter: &LogFilter,
    ) -> Result<Vec<press_dry_log::Model>, ServiceError> {
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
        let logs = query
            .order_by_desc(press_dry_log::Column::CreatedAt)
            .order_by_desc(press_dry_log::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(logs)
    }

    pub async fn repair_logs(
        &self,
        filter: &LogFilter,
    ) -> Result<Vec<repair_log::Model>, ServiceError> {
        let (start, end) = filter.bounds();
        let mut query = repair_log::Entity::find();
        if let Some(start) = start {
            query = query.filter(repair_log::Column::CreatedAt.gte(start));
        }
        if let Some(end) = end {
            query = query.filter(repair_log::Column::CreatedAt.lt(end));
        }
        let logs = query
            .order_by_desc(repair_log::Column::CreatedAt)
            .order_by_desc(repair_log::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(logs)
    }

    pub async fn core_build_logs(
        &self,
        filter: &LogFilter,
    ) -> Result<Vec<core_build_log::Model>, ServiceError> {
        let (start, end) = filter.bounds();
        let mut query = core_build_log::Entity::find();
        if let Some(start) = start {
            query = query.filter(core_build_log::Column::CreatedAt.gte(start));
        }
        if let Some(end) = end {
            query = query.filter(core_build_log::Column::CreatedAt.lt(end));
        }
        let logs = query
            .order_by_desc(core_build_log::Column::CreatedAt)
            .order_by_desc(core_build_log::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(logs)
    }

    pub async fn scarf_join_logs(
        &self,
        filter: &LogFilter,
    ) -> Result<Vec<scarf_join_log::Model>, ServiceError> {
        let (start, end) = filter.bounds();
        let mut query = scarf_join_log::Entity::find();
        if let Some(start) = start {
            query = query.filter(scarf_join_log::Column::CreatedAt.gte(start));
        }
        if let Some(end) = end {
            query = query.filter(scarf_join_log::Column::CreatedAt.lt(end));
        }
        let logs = query
            .order_by_desc(scarf_join_log::Column::CreatedAt)
            .order_by_desc(scarf_join_log::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(logs)
    }

    pub async fn hot_press_logs(
        &self,
        filter: &LogFilter,
    ) -> Result<Vec<hot_press_log::Model>, ServiceError> {
        let (start, end) = filter.bounds();
        let mut query = hot_press_log::Entity::find();
        if let Some(start) = start {
            query = query.filter(hot_press_log::Column::CreatedAt.gte(start));
        }
        if let Some(end) = end {
            query = query.filter(hot_press_log::Column::CreatedAt.lt(end));
        }
        let logs = query
            .order_by_desc(hot_press_log::Column::CreatedAt)
            .order_by_desc(hot_press_log::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(logs)
    }

    /// Fetches the source lot under the stage's predicate, then debits it
    /// with a guarded UPDATE. The quantity check in the UPDATE's WHERE is
    /// what serializes concurrent consumers of the same lot: the second
    /// writer matches zero rows and the whole transaction rolls back.
    async fn debit_source_lot(
        &self,
        txn: &DatabaseTransaction,
        stage: Stage,
        lot_id: i64,
        required_kind: Option<MaterialKind>,
        quantity_in: Decimal,
    ) -> Result<material_lot::Model, ServiceError> {
        let source_warehouse = self.topology.source_of(stage).ok_or_else(|| {
            ServiceError::InternalError(format!("stage {} has no source location", stage.as_str()))
        })?;

        let mut query = material_lot::Entity::find()
            .filter(material_lot::Column::Id.eq(lot_id))
            .filter(material_lot::Column::Status.eq(LotStatus::Approved))
            .filter(material_lot::Column::WarehouseId.eq(source_warehouse));
        if let Some(kind) = required_kind {
            query = query.filter(material_lot::Column::Kind.eq(kind));
        }

        let lot = query.one(txn).await?.ok_or_else(|| {
            ServiceError::NotFound(format!(
                "no approved lot {} available to {}",
                lot_id,
                stage.as_str()
            ))
        })?;

        if lot.quantity < quantity_in {
            return Err(ServiceError::InsufficientStock(format!(
                "lot {} holds {} but {} needs {}",
                lot_id,
                lot.quantity,
                stage.as_str(),
                quantity_in
            )));
        }

        let result = material_lot::Entity::update_many()
            .col_expr(
                material_lot::Column::Quantity,
                Expr::col(material_lot::Column::Quantity).sub(quantity_in),
            )
            .col_expr(material_lot::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(material_lot::Column::Id.eq(lot_id))
            .filter(material_lot::Column::Quantity.gte(quantity_in))
            .exec(txn)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::InsufficientStock(format!(
                "lot {} was drained by a concurrent operation",
                lot_id
            )));
        }

        Ok(lot)
    }

    /// Credits the stage's accepted output as a new approved lot at the
    /// destination warehouse. Rejected material is not tracked as a lot; the
    /// ledger row already carries the figure.
    async fn credit_output(
        &self,
        txn: &DatabaseTransaction,
        stage: Stage,
        source: &material_lot::Model,
        accepted: Decimal,
        note: String,
        created_by: &str,
    ) -> Result<Option<material_lot::Model>, ServiceError> {
        if accepted <= Decimal::ZERO {
            return Ok(None);
        }

        let now = Utc::now();
        let lot = material_lot::ActiveModel {
            supplier_id: Set(None),
            kind: Set(source.kind),
            thickness_mm: Set(source.thickness_mm),
            quantity: Set(accepted),
            unit: Set(source.unit),
            warehouse_id: Set(self.topology.destination_of(stage)),
            status: Set(LotStatus::Approved),
            notes: Set(Some(note)),
            created_by: Set(created_by.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        Ok(Some(lot))
    }
}

fn validate_yield(input: &YieldInput) -> Result<(), ServiceError> {
    validate_quantities(input.quantity_in, input.accepted, input.rejected)
}

/// The yield invariant, enforced the same way on every stage: all figures
/// non-negative, a positive input, and the outcome never exceeding it.
fn validate_quantities(
    quantity_in: Decimal,
    accepted: Decimal,
    rejected: Decimal,
) -> Result<(), ServiceError> {
    if quantity_in <= Decimal::ZERO {
        return Err(ServiceError::ValidationError(
            "quantity_in must be positive".to_string(),
        ));
    }
    if accepted < Decimal::ZERO || rejected < Decimal::ZERO {
        return Err(ServiceError::ValidationError(
            "accepted and rejected must not be negative".to_string(),
        ));
    }
    if accepted + rejected > quantity_in {
        return Err(ServiceError::ValidationError(format!(
            "accepted + rejected ({}) exceeds quantity_in ({})",
            accepted + rejected,
            quantity_in
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;

    fn yield_input(quantity_in: Decimal, accepted: Decimal, rejected: Decimal) -> YieldInput {
        YieldInput {
            lot_id: 1,
            quantity_in,
            accepted,
            rejected,
            notes: None,
            created_by: "tester".to_string(),
        }
    }

    #[test]
    fn yield_must_not_exceed_input() {
        let err = validate_yield(&yield_input(dec!(10), dec!(8), dec!(3))).unwrap_err();
        assert_matches!(err, ServiceError::ValidationError(_));
    }

    #[test]
    fn partial_yield_is_accepted() {
        assert!(validate_yield(&yield_input(dec!(10), dec!(8), dec!(1))).is_ok());
        assert!(validate_yield(&yield_input(dec!(10), dec!(10), dec!(0))).is_ok());
        assert!(validate_yield(&yield_input(dec!(10), dec!(0), dec!(0))).is_ok());
    }

    #[test]
    fn negative_figures_are_rejected() {
        assert_matches!(
            validate_yield(&yield_input(dec!(10), dec!(-1), dec!(0))),
            Err(ServiceError::ValidationError(_))
        );
        assert_matches!(
            validate_yield(&yield_input(dec!(0), dec!(0), dec!(0))),
            Err(ServiceError::ValidationError(_))
        );
    }

    #[test]
    fn log_filter_bounds_are_half_open() {
        let filter = LogFilter {
            from: NaiveDate::from_ymd_opt(2024, 3, 1),
            to: NaiveDate::from_ymd_opt(2024, 3, 2),
            machine_id: None,
        };
        let (start, end) = filter.bounds();
        assert_eq!(start.unwrap().to_rfc3339(), "2024-03-01T00:00:00+00:00");
        assert_eq!(end.unwrap().to_rfc3339(), "2024-03-03T00:00:00+00:00");
    }

    #[test]
    fn log_filter_clamps_the_calendar_maximum() {
        let filter = LogFilter {
            from: None,
            to: Some(NaiveDate::MAX),
            machine_id: None,
        };
        let (_, end) = filter.bounds();
        assert_eq!(end, Some(DateTime::<Utc>::MAX_UTC));
    }
}
