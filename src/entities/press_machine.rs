use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Press-dryer machine registry. Seeded reference data; press-dry ledger
/// entries are keyed against a machine.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "press_machines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub machine_no: i32,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::press_dry_log::Entity")]
    PressDryLogs,
}

impl Related<super::press_dry_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PressDryLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
