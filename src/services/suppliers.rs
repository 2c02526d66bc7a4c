use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::entities::supplier;
use crate::errors::ServiceError;

/// Supplier registry. Intake references suppliers; deactivation hides a
/// supplier from new deliveries without touching history.
#[derive(Clone)]
pub struct SupplierService {
    db: Arc<DatabaseConnection>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewSupplier {
    #[validate(length(min = 1))]
    pub name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierUpdate {
    pub name: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

impl SupplierService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self, new_supplier), fields(name = %new_supplier.name))]
    pub async fn create(&self, new_supplier: NewSupplier) -> Result<supplier::Model, ServiceError> {
        if new_supplier.name.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "supplier name must not be empty".to_string(),
            ));
        }

        let now = Utc::now();
        let created = supplier::ActiveModel {
            name: Set(new_supplier.name),
            contact_name: Set(new_supplier.contact_name),
            phone: Set(new_supplier.phone),
            address: Set(new_supplier.address),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        info!(supplier_id = created.id, "supplier created");
        Ok(created)
    }

    #[instrument(skip(self, update))]
    pub async fn update(
        &self,
        id: i64,
        update: SupplierUpdate,
    ) -> Result<supplier::Model, ServiceError> {
        let existing = self.get(id).await?;
        let mut active = existing.into_active_model();

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(ServiceError::ValidationError(
                    "supplier name must not be empty".to_string(),
                ));
            }
            active.name = Set(name);
        }
        if let Some(contact_name) = update.contact_name {
            active.contact_name = Set(Some(contact_name));
        }
        if let Some(phone) = update.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(address) = update.address {
            active.address = Set(Some(address));
        }
        if let Some(is_active) = update.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(self.db.as_ref()).await?;
        Ok(updated)
    }

    /// Hides the supplier from intake. History stays intact.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: i64) -> Result<supplier::Model, ServiceError> {
        self.update(
            id,
            SupplierUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn get(&self, id: i64) -> Result<supplier::Model, ServiceError> {
        supplier::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("supplier {} not found", id)))
    }

    pub async fn list(&self, active_only: bool) -> Result<Vec<supplier::Model>, ServiceError> {
        let mut query = supplier::Entity::find();
        if active_only {
            query = query.filter(supplier::Column::IsActive.eq(true));
        }
        let suppliers = query
            .order_by_asc(supplier::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(suppliers)
    }
}
