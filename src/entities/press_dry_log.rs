use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only ledger of press-dry executions. Rows are never mutated or
/// deleted after insert.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "press_dry_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub machine_id: i64,
    pub lot_id: i64,
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
        belongs_to = "super::press_machine::Entity",
        from = "Column::MachineId",
        to = "super::press_machine::Column::Id"
    )]
    PressMachine,
    #[sea_orm(
        belongs_to = "super::material_lot::Entity",
        from = "Column::LotId",
        to = "super::material_lot::Column::Id"
    )]
    MaterialLot,
}

impl Related<super::press_machine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PressMachine.def()
    }
}

impl Related<super::material_lot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaterialLot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
