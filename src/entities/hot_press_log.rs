use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only ledger of hot-press executions, keyed by the plywood-setting
/// record describing what was pressed.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hot_press_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub setting_id: i64,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub quantity_in: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub accepted: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub rejected: Decimal,
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plywood_setting::Entity",
        from = "Column::SettingId",
        to = "super::plywood_setting::Column::Id"
    )]
    PlywoodSetting,
    #[sea_orm(has_many = "super::finished_good::Entity")]
    FinishedGoods,
}

impl Related<super::plywood_setting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlywoodSetting.def()
    }
}

impl Related<super::finished_good::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinishedGoods.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
