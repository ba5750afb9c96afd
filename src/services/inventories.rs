use crate::{
    db::DbPool,
    entities::{inventory, warehouse},
    errors::ServiceError,
    services::warehouses::find_warehouse,
    validation::{validate_inventory_input, InventoryInput},
};
use chrono::{DateTime, Utc};
use metrics::counter;
use sea_orm::{
    ActiveModelTrait, EntityTrait, FromQueryResult, IntoActiveModel, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

/// Inventory item joined with the name of the warehouse stocking it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InventoryView {
    pub id: i32,
    pub warehouse_id: i32,
    pub warehouse_name: String,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryView {
    fn from_joined(item: inventory::Model, owner: Option<warehouse::Model>) -> Self {
        if owner.is_none() {
            warn!(inventory_id = item.id, "Inventory row without a warehouse");
        }
        Self {
            id: item.id,
            warehouse_id: item.warehouse_id,
            warehouse_name: owner.map(|w| w.warehouse_name).unwrap_or_default(),
            item_name: item.item_name,
            description: item.description,
            category: item.category,
            status: item.status,
            quantity: item.quantity,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Row of `GET /warehouses/:id/inventories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct InventorySummary {
    pub id: i32,
    pub item_name: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
}

/// Service for managing inventory items
#[derive(Clone)]
pub struct InventoryService {
    db_pool: Arc<DbPool>,
}

impl InventoryService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Lists every item with its warehouse name, ordered by id
    #[instrument(skip(self))]
    pub async fn list_inventories(&self) -> Result<Vec<InventoryView>, ServiceError> {
        let db = &*self.db_pool;
        let rows = inventory::Entity::find()
            .order_by_asc(inventory::Column::Id)
            .find_also_related(warehouse::Entity)
            .all(db)
            .await
            .map_err(ServiceError::db_error)?;

        Ok(rows
            .into_iter()
            .map(|(item, owner)| InventoryView::from_joined(item, owner))
            .collect())
    }

    /// Gets one item with its warehouse name
    #[instrument(skip(self))]
    pub async fn get_inventory(&self, id: i32) -> Result<InventoryView, ServiceError> {
        let db = &*self.db_pool;
        let (item, owner) = inventory::Entity::find_by_id(id)
            .find_also_related(warehouse::Entity)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::inventory_not_found(id))?;

        Ok(InventoryView::from_joined(item, owner))
    }

    /// Validates and inserts an item once its warehouse is confirmed to exist
    #[instrument(skip(self, input))]
    pub async fn create_inventory(
        &self,
        input: &InventoryInput,
    ) -> Result<InventoryView, ServiceError> {
        let fields = validate_inventory_input(input, None)?;
        let db = &*self.db_pool;
        let now = Utc::now();

        let txn = db.begin().await.map_err(ServiceError::db_error)?;
        find_warehouse(&txn, fields.warehouse_id).await?;

        let row = inventory::ActiveModel {
            warehouse_id: Set(fields.warehouse_id),
            item_name: Set(fields.item_name),
            description: Set(fields.description),
            category: Set(fields.category),
            status: Set(fields.status),
            quantity: Set(fields.quantity),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let inserted = inventory::Entity::insert(row)
            .exec(&txn)
            .await
            .map_err(ServiceError::db_error)?;

        txn.commit().await.map_err(ServiceError::db_error)?;

        counter!("warehouse_api.inventories.created", 1);
        info!(
            inventory_id = inserted.last_insert_id,
            warehouse_id = fields.warehouse_id,
            "Inventory item created"
        );

        self.get_inventory(inserted.last_insert_id).await
    }

    /// Replaces every mutable field of an item, possibly moving it to another warehouse
    #[instrument(skip(self, input))]
    pub async fn update_inventory(
        &self,
        id: i32,
        input: &InventoryInput,
    ) -> Result<InventoryView, ServiceError> {
        let db = &*self.db_pool;
        let existing = inventory::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::inventory_not_found(id))?;

        let fields = validate_inventory_input(input, Some(id))?;

        let txn = db.begin().await.map_err(ServiceError::db_error)?;
        find_warehouse(&txn, fields.warehouse_id).await?;

        let mut row = existing.into_active_model();
        row.warehouse_id = Set(fields.warehouse_id);
        row.item_name = Set(fields.item_name);
        row.description = Set(fields.description);
        row.category = Set(fields.category);
        row.status = Set(fields.status);
        row.quantity = Set(fields.quantity);
        row.updated_at = Set(Utc::now());
        row.update(&txn).await.map_err(ServiceError::db_error)?;

        txn.commit().await.map_err(ServiceError::db_error)?;

        counter!("warehouse_api.inventories.updated", 1);
        info!(inventory_id = id, "Inventory item updated");

        self.get_inventory(id).await
    }

    /// Deletes one item
    #[instrument(skip(self))]
    pub async fn delete_inventory(&self, id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = inventory::Entity::delete_by_id(id)
            .exec(db)
            .await
            .map_err(ServiceError::db_error)?;

        if result.rows_affected == 0 {
            return Err(ServiceError::inventory_not_found(id));
        }

        counter!("warehouse_api.inventories.deleted", 1);
        info!(inventory_id = id, "Inventory item deleted");

        Ok(())
    }
}
