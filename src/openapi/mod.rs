use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warehouse API",
        version = "0.1.0",
        description = r#"
# Warehouse & Inventory API

CRUD over warehouses and the inventory items they stock.

## Validation

- Every warehouse field is required. Contact phone numbers are stored as `+D (DDD) DDD-DDDD`.
- Inventory quantities must be whole, non-negative numbers; numeric strings are accepted.
- Inventory items can only reference existing warehouses.

## Deletes

Deleting a warehouse deletes all of its inventory in the same transaction.

## Error Handling

Every failure returns the same body:

```json
{
  "error": "Not Found",
  "message": "Warehouse with ID 42 not found",
  "request_id": "3f0c8a9e-5d7b-4c1e-9a55-6a2f1b0d9c11",
  "timestamp": "2024-01-01T00:00:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "warehouses", description = "Warehouse endpoints"),
        (name = "inventories", description = "Inventory endpoints")
    ),
    paths(
        crate::handlers::warehouses::list_warehouses,
        crate::handlers::warehouses::get_warehouse,
        crate::handlers::warehouses::create_warehouse,
        crate::handlers::warehouses::update_warehouse,
        crate::handlers::warehouses::delete_warehouse,
        crate::handlers::warehouses::list_warehouse_inventories,

        crate::handlers::inventories::list_inventories,
        crate::handlers::inventories::get_inventory,
        crate::handlers::inventories::create_inventory,
        crate::handlers::inventories::update_inventory,
        crate::handlers::inventories::delete_inventory,
    ),
    components(
        schemas(
            crate::entities::warehouse::Model,
            crate::services::InventoryView,
            crate::services::InventorySummary,
            crate::validation::WarehouseInput,
            crate::validation::InventoryInput,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDoc;

/// Serves the generated document at `/api-docs/openapi.json`
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
