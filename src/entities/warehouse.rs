use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Logical warehouse location. Static reference data seeded by the migrator
/// and immutable after provisioning; the topology resolves rows by `code`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warehouses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::material_lot::Entity")]
    MaterialLots,
    #[sea_orm(has_many = "super::finished_good::Entity")]
    FinishedGoods,
}

impl Related<super::material_lot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaterialLots.def()
    }
}

impl Related<super::finished_good::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinishedGoods.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
