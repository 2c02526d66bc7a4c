//! Warehouse topology: the static map of locations and which stages move
//! material between them.
//!
//! Location identity is resolved once at startup from the seeded warehouse
//! rows. A missing location code is fatal misconfiguration, never a
//! per-request error.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::entities::warehouse;
use crate::errors::ServiceError;

/// Logical warehouse roles, keyed by the `code` column of the warehouses
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarehouseCode {
    /// Raw stock arrives here ("Gudang A").
    Receiving,
    /// Press-dried core ("Gudang B").
    IntermediateOne,
    /// Repaired / built / joined material ("Gudang C").
    IntermediateTwo,
    /// Shelved finished goods.
    Finished,
}

impl WarehouseCode {
    pub const ALL: [WarehouseCode; 4] = [
        WarehouseCode::Receiving,
        WarehouseCode::IntermediateOne,
        WarehouseCode::IntermediateTwo,
        WarehouseCode::Finished,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WarehouseCode::Receiving => "RECEIVING",
            WarehouseCode::IntermediateOne => "INTERMEDIATE_1",
            WarehouseCode::IntermediateTwo => "INTERMEDIATE_2",
            WarehouseCode::Finished => "FINISHED",
        }
    }
}

/// The transformation stages, in production order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    PressDry,
    Repair,
    CoreBuild,
    ScarfJoin,
    HotPress,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::PressDry => "press-dry",
            Stage::Repair => "repair",
            Stage::CoreBuild => "core-build",
            Stage::ScarfJoin => "scarf-join",
            Stage::HotPress => "hot-press",
        }
    }

    /// Where this stage consumes from. Hot-press is keyed by a setting
    /// record rather than a lot, so it has no source location.
    pub fn source(&self) -> Option<WarehouseCode> {
        match self {
            Stage::PressDry => Some(WarehouseCode::Receiving),
            Stage::Repair | Stage::CoreBuild | Stage::ScarfJoin => {
                Some(WarehouseCode::IntermediateOne)
            }
            Stage::HotPress => None,
        }
    }

    /// Where this stage's accepted output lands.
    pub fn destination(&self) -> WarehouseCode {
        match self {
            Stage::PressDry => WarehouseCode::IntermediateOne,
            Stage::Repair | Stage::CoreBuild | Stage::ScarfJoin => WarehouseCode::IntermediateTwo,
            Stage::HotPress => WarehouseCode::Finished,
        }
    }
}

/// Resolved location map. Read-only after `load`; requires no locking.
#[derive(Debug, Clone)]
pub struct WarehouseTopology {
    ids: HashMap<WarehouseCode, i64>,
}

impl WarehouseTopology {
    /// Resolves every location code against the warehouses table, failing
    /// fast when any expected row is missing.
    pub async fn load(db: &DatabaseConnection) -> Result<Self, ServiceError> {
        let mut ids = HashMap::with_capacity(WarehouseCode::ALL.len());

        for code in WarehouseCode::ALL {
            let row = warehouse::Entity::find()
                .filter(warehouse::Column::Code.eq(code.as_str()))
                .one(db)
                .await?
                .ok_or_else(|| {
                    ServiceError::ConfigurationError(format!(
                        "warehouse '{}' is not provisioned",
                        code.as_str()
                    ))
                })?;
            ids.insert(code, row.id);
        }

        Ok(Self { ids })
    }

    pub fn id_of(&self, code: WarehouseCode) -> i64 {
        // All codes are resolved in load(); the map is total.
        self.ids[&code]
    }

    pub fn source_of(&self, stage: Stage) -> Option<i64> {
        stage.source().map(|code| self.id_of(code))
    }

    pub fn destination_of(&self, stage: Stage) -> i64 {
        self.id_of(stage.destination())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_transition_table() {
        assert_eq!(Stage::PressDry.source(), Some(WarehouseCode::Receiving));
        assert_eq!(Stage::PressDry.destination(), WarehouseCode::IntermediateOne);

        for stage in [Stage::Repair, Stage::CoreBuild, Stage::ScarfJoin] {
            assert_eq!(stage.source(), Some(WarehouseCode::IntermediateOne));
            assert_eq!(stage.destination(), WarehouseCode::IntermediateTwo);
        }

        assert_eq!(Stage::HotPress.source(), None);
        assert_eq!(Stage::HotPress.destination(), WarehouseCode::Finished);
    }

    #[test]
    fn codes_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for code in WarehouseCode::ALL {
            assert!(seen.insert(code.as_str()));
        }
    }
}
