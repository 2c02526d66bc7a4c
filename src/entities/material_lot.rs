use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One trackable quantity of material: a kind, a place, a QC status.
///
/// Lots are never physically deleted. Stage debits may decay the quantity to
/// zero, leaving a tombstone row for traceability.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "material_lots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Absent for lots produced by a transformation stage.
    pub supplier_id: Option<i64>,
    pub kind: MaterialKind,
    /// Sheet thickness in millimeters; absent for non-sheet materials (glue).
    #[sea_orm(column_type = "Decimal(Some((12, 3)))", nullable)]
    pub thickness_mm: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub quantity: Decimal,
    pub unit: LotUnit,
    pub warehouse_id: i64,
    pub status: LotStatus,
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id"
    )]
    Supplier,
    #[sea_orm(
        belongs_to = "super::warehouse::Entity",
        from = "Column::WarehouseId",
        to = "super::warehouse::Column::Id"
    )]
    Warehouse,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::warehouse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warehouse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialKind {
    #[sea_orm(string_value = "CORE")]
    Core,
    #[sea_orm(string_value = "FACE")]
    Face,
    #[sea_orm(string_value = "BACK")]
    Back,
    #[sea_orm(string_value = "LONGCORE")]
    LongCore,
    #[sea_orm(string_value = "GLUE")]
    Glue,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LotStatus {
    #[sea_orm(string_value = "AWAITING_INSPECTION")]
    AwaitingInspection,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "snake_case")]
pub enum LotUnit {
    #[sea_orm(string_value = "sheet")]
    Sheet,
    #[sea_orm(string_value = "kg")]
    Kg,
    #[sea_orm(string_value = "liter")]
    Liter,
    #[sea_orm(string_value = "m3")]
    CubicMeter,
}
