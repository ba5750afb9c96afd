use crate::{
    db::DbPool,
    entities::{inventory, warehouse},
    errors::ServiceError,
    services::inventories::InventorySummary,
    validation::{validate_warehouse_input, WarehouseInput},
};
use chrono::Utc;
use metrics::counter;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Service for managing warehouses
#[derive(Clone)]
pub struct WarehouseService {
    db_pool: Arc<DbPool>,
}

impl WarehouseService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Lists every warehouse ordered by id
    #[instrument(skip(self))]
    pub async fn list_warehouses(&self) -> Result<Vec<warehouse::Model>, ServiceError> {
        let db = &*self.db_pool;
        warehouse::Entity::find()
            .order_by_asc(warehouse::Column::Id)
            .all(db)
            .await
            .map_err(ServiceError::db_error)
    }

    /// Gets a warehouse by ID
    #[instrument(skip(self))]
    pub async fn get_warehouse(&self, id: i32) -> Result<warehouse::Model, ServiceError> {
        find_warehouse(&*self.db_pool, id).await
    }

    /// Validates and inserts a warehouse, returning the stored row
    #[instrument(skip(self, input))]
    pub async fn create_warehouse(
        &self,
        input: &WarehouseInput,
    ) -> Result<warehouse::Model, ServiceError> {
        let fields = validate_warehouse_input(input)?;
        let db = &*self.db_pool;
        let now = Utc::now();

        let row = warehouse::ActiveModel {
            warehouse_name: Set(fields.warehouse_name),
            address: Set(fields.address),
            city: Set(fields.city),
            country: Set(fields.country),
            contact_name: Set(fields.contact_name),
            contact_position: Set(fields.contact_position),
            contact_phone: Set(fields.contact_phone),
            contact_email: Set(fields.contact_email),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = warehouse::Entity::insert(row)
            .exec(db)
            .await
            .map_err(ServiceError::db_error)?;

        let created = find_warehouse(db, inserted.last_insert_id).await?;

        counter!("warehouse_api.warehouses.created", 1);
        info!(warehouse_id = created.id, "Warehouse created");

        Ok(created)
    }

    /// Replaces every business field of an existing warehouse
    #[instrument(skip(self, input))]
    pub async fn update_warehouse(
        &self,
        id: i32,
        input: &WarehouseInput,
    ) -> Result<warehouse::Model, ServiceError> {
        let db = &*self.db_pool;
        let existing = find_warehouse(db, id).await?;
        let fields = validate_warehouse_input(input)?;

        let mut row = existing.into_active_model();
        row.warehouse_name = Set(fields.warehouse_name);
        row.address = Set(fields.address);
        row.city = Set(fields.city);
        row.country = Set(fields.country);
        row.contact_name = Set(fields.contact_name);
        row.contact_position = Set(fields.contact_position);
        row.contact_phone = Set(fields.contact_phone);
        row.contact_email = Set(fields.contact_email);
        row.updated_at = Set(Utc::now());

        let updated = row.update(db).await.map_err(ServiceError::db_error)?;

        counter!("warehouse_api.warehouses.updated", 1);
        info!(warehouse_id = id, "Warehouse updated");

        Ok(updated)
    }

    /// Deletes a warehouse together with every inventory row that references it.
    ///
    /// Both deletes share one transaction; a failure leaves the store untouched.
    #[instrument(skip(self))]
    pub async fn delete_warehouse(&self, id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let txn = db.begin().await.map_err(ServiceError::db_error)?;

        find_warehouse(&txn, id).await?;

        let removed_items = inventory::Entity::delete_many()
            .filter(inventory::Column::WarehouseId.eq(id))
            .exec(&txn)
            .await
            .map_err(ServiceError::db_error)?;

        warehouse::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(ServiceError::db_error)?;

        txn.commit().await.map_err(ServiceError::db_error)?;

        counter!("warehouse_api.warehouses.deleted", 1);
        info!(
            warehouse_id = id,
            removed_items = removed_items.rows_affected,
            "Warehouse deleted"
        );

        Ok(())
    }

    /// Lists the inventory stocked by one warehouse.
    ///
    /// An unknown warehouse is reported as not found; a known one without
    /// stock yields an empty list.
    #[instrument(skip(self))]
    pub async fn list_warehouse_inventories(
        &self,
        id: i32,
    ) -> Result<Vec<InventorySummary>, ServiceError> {
        let db = &*self.db_pool;
        find_warehouse(db, id).await?;

        inventory::Entity::find()
            .select_only()
            .columns([
                inventory::Column::Id,
                inventory::Column::ItemName,
                inventory::Column::Category,
                inventory::Column::Status,
                inventory::Column::Quantity,
            ])
            .filter(inventory::Column::WarehouseId.eq(id))
            .order_by_asc(inventory::Column::Id)
            .into_model::<InventorySummary>()
            .all(db)
            .await
            .map_err(ServiceError::db_error)
    }
}

/// Loads one warehouse on any connection or transaction, or reports it missing.
pub(crate) async fn find_warehouse<C>(conn: &C, id: i32) -> Result<warehouse::Model, ServiceError>
where
    C: ConnectionTrait,
{
    warehouse::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(ServiceError::db_error)?
        .ok_or_else(|| ServiceError::warehouse_not_found(id))
}
