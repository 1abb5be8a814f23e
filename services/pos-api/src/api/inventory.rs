//! 库存接口

use axum::{extract::State, Json};
use pos_errors::AppResult;

use crate::application::{DeleteInventoryItemCommand, UpdateUnitCostCommand};

use super::dto::{MessageResponse, UnitCostUpdated};
use super::{ApiJson, AppState};

pub async fn update_unit_cost(
    State(handler): State<AppState>,
    ApiJson(cmd): ApiJson<UpdateUnitCostCommand>,
) -> AppResult<Json<UnitCostUpdated>> {
    let updated_item = handler.update_unit_cost(cmd).await?;
    Ok(Json(UnitCostUpdated {
        message: "Unit cost updated successfully.".to_string(),
        updated_item,
    }))
}

pub async fn delete_item(
    State(handler): State<AppState>,
    ApiJson(cmd): ApiJson<DeleteInventoryItemCommand>,
) -> AppResult<Json<MessageResponse>> {
    handler.delete_inventory_item(cmd).await?;
    Ok(Json(MessageResponse::new("Item deleted successfully.")))
}
