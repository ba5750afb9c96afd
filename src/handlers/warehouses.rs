use super::common::{created_response, json_body, no_content_response, path_id, success_response};
use crate::{
    entities::warehouse,
    errors::{ErrorResponse, ServiceError},
    services::InventorySummary,
    validation::WarehouseInput,
    AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Response,
    routing::get,
    Json, Router,
};

/// Routes mounted at `/warehouses`
pub fn warehouse_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_warehouses).post(create_warehouse))
        .route(
            "/:id",
            get(get_warehouse)
                .put(update_warehouse)
                .delete(delete_warehouse),
        )
        .route("/:id/inventories", get(list_warehouse_inventories))
}

/// List every warehouse
#[utoipa::path(
    get,
    path = "/api/warehouses",
    responses(
        (status = 200, description = "Warehouse list returned", body = [warehouse::Model],
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "warehouses"
)]
pub async fn list_warehouses(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let warehouses = state.warehouses.list_warehouses().await?;
    Ok(success_response(warehouses))
}

/// Get one warehouse
#[utoipa::path(
    get,
    path = "/api/warehouses/{id}",
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse returned", body = warehouse::Model),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "warehouses"
)]
pub async fn get_warehouse(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ServiceError> {
    let id = path_id(id)?;
    let warehouse = state.warehouses.get_warehouse(id).await?;
    Ok(success_response(warehouse))
}

/// Create a warehouse
#[utoipa::path(
    post,
    path = "/api/warehouses",
    request_body = WarehouseInput,
    responses(
        (status = 201, description = "Warehouse created", body = warehouse::Model),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "warehouses"
)]
pub async fn create_warehouse(
    State(state): State<AppState>,
    payload: Result<Json<WarehouseInput>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let payload = json_body(payload)?;
    let warehouse = state.warehouses.create_warehouse(&payload).await?;
    Ok(created_response(warehouse))
}

/// Replace a warehouse's fields
#[utoipa::path(
    put,
    path = "/api/warehouses/{id}",
    params(("id" = i32, Path, description = "Warehouse ID")),
    request_body = WarehouseInput,
    responses(
        (status = 200, description = "Warehouse updated", body = warehouse::Model),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "warehouses"
)]
pub async fn update_warehouse(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<WarehouseInput>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let id = path_id(id)?;
    let payload = json_body(payload)?;
    let warehouse = state.warehouses.update_warehouse(id, &payload).await?;
    Ok(success_response(warehouse))
}

/// Delete a warehouse and its inventory
#[utoipa::path(
    delete,
    path = "/api/warehouses/{id}",
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 204, description = "Warehouse and its inventory deleted"),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "warehouses"
)]
pub async fn delete_warehouse(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ServiceError> {
    let id = path_id(id)?;
    state.warehouses.delete_warehouse(id).await?;
    Ok(no_content_response())
}

/// List the inventory stocked by a warehouse
#[utoipa::path(
    get,
    path = "/api/warehouses/{id}/inventories",
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Inventory of the warehouse, possibly empty", body = [InventorySummary]),
        (status = 404, description = "Warehouse not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "warehouses"
)]
pub async fn list_warehouse_inventories(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ServiceError> {
    let id = path_id(id)?;
    let items = state.warehouses.list_warehouse_inventories(id).await?;
    Ok(success_response(items))
}
