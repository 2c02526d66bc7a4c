use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Composite assembly record for the plywood-setting stage: the quantities of
/// each component combined into a pressing batch, plus the recorded yield.
///
/// Component quantities are informational only and do not debit any lot.
/// This is the one deliberate exception to quantity conservation, confined
/// to this stage.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plywood_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub plywood_type: PlywoodType,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub short_core_qty: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub long_core_qty: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub face_qty: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub back_qty: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub glue_qty: Decimal,
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
    #[sea_orm(has_many = "super::hot_press_log::Entity")]
    HotPressLogs,
}

impl Related<super::hot_press_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HotPressLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Thickness classes produced by the mill.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum PlywoodType {
    #[sea_orm(string_value = "3MM")]
    #[serde(rename = "3MM")]
    Mm3,
    #[sea_orm(string_value = "9MM")]
    #[serde(rename = "9MM")]
    Mm9,
    #[sea_orm(string_value = "29MM")]
    #[serde(rename = "29MM")]
    Mm29,
}
