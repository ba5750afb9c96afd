use super::common::{created_response, json_body, no_content_response, path_id, success_response};
use crate::{
    errors::{ErrorResponse, ServiceError},
    services::InventoryView,
    validation::InventoryInput,
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

/// Routes mounted at `/inventories`
pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventories).post(create_inventory))
        .route(
            "/:id",
            get(get_inventory)
                .put(update_inventory)
                .delete(delete_inventory),
        )
}

/// List every inventory item with its warehouse name
#[utoipa::path(
    get,
    path = "/api/inventories",
    responses(
        (status = 200, description = "Inventory list returned", body = [InventoryView],
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "inventories"
)]
pub async fn list_inventories(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let items = state.inventories.list_inventories().await?;
    Ok(success_response(items))
}

/// Get one inventory item
#[utoipa::path(
    get,
    path = "/api/inventories/{id}",
    params(("id" = i32, Path, description = "Inventory item ID")),
    responses(
        (status = 200, description = "Inventory item returned", body = InventoryView),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "inventories"
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ServiceError> {
    let id = path_id(id)?;
    let item = state.inventories.get_inventory(id).await?;
    Ok(success_response(item))
}

/// Create an inventory item in an existing warehouse
#[utoipa::path(
    post,
    path = "/api/inventories",
    request_body = InventoryInput,
    responses(
        (status = 201, description = "Inventory item created", body = InventoryView),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 404, description = "Warehouse not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "inventories"
)]
pub async fn create_inventory(
    State(state): State<AppState>,
    payload: Result<Json<InventoryInput>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let payload = json_body(payload)?;
    let item = state.inventories.create_inventory(&payload).await?;
    Ok(created_response(item))
}

/// Replace an inventory item's fields
#[utoipa::path(
    put,
    path = "/api/inventories/{id}",
    params(("id" = i32, Path, description = "Inventory item ID")),
    request_body = InventoryInput,
    responses(
        (status = 200, description = "Inventory item updated", body = InventoryView),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 404, description = "Item or warehouse not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "inventories"
)]
pub async fn update_inventory(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<InventoryInput>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let id = path_id(id)?;
    let payload = json_body(payload)?;
    let item = state.inventories.update_inventory(id, &payload).await?;
    Ok(success_response(item))
}

/// Delete an inventory item
#[utoipa::path(
    delete,
    path = "/api/inventories/{id}",
    params(("id" = i32, Path, description = "Inventory item ID")),
    responses(
        (status = 204, description = "Inventory item deleted"),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "inventories"
)]
pub async fn delete_inventory(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ServiceError> {
    let id = path_id(id)?;
    state.inventories.delete_inventory(id).await?;
    Ok(no_content_response())
}
