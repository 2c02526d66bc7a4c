use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::plywood_setting::PlywoodType;

/// Terminal output of the hot-press stage. Shelved in the Finished warehouse
/// and never consumed by a further stage in this system.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "finished_goods")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub plywood_type: PlywoodType,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub quantity: Decimal,
    pub grade: String,
    pub hot_press_log_id: i64,
    pub warehouse_id: i64,
    pub status: FinishedGoodStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hot_press_log::Entity",
        from = "Column::HotPressLogId",
        to = "super::hot_press_log::Column::Id"
    )]
    HotPressLog,
    #[sea_orm(
        belongs_to = "super::warehouse::Entity",
        from = "Column::WarehouseId",
        to = "super::warehouse::Column::Id"
    )]
    Warehouse,
}

impl Related<super::hot_press_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HotPressLog.def()
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
pub enum FinishedGoodStatus {
    #[sea_orm(string_value = "AVAILABLE")]
    Available,
    #[sea_orm(string_value = "SHIPPED")]
    Shipped,
}
