//! 订单接口

use axum::{extract::State, Json};
use pos_errors::{AppError, AppResult};

use crate::application::{DeleteOrderItemCommand, PlaceOrderCommand, UpdateOrderStatusCommand};
use crate::domain::entities::OrderStatusView;
use crate::domain::enums::OrderStatus;

use super::dto::{
    OrderItemDeleted, OrderItemsResponse, OrderPlaced, OrderStatusUpdated, PendingOrdersResponse,
    UpdateStatusRequest,
};
use super::{ApiJson, ApiPath, AppState};

pub async fn add_order(
    State(handler): State<AppState>,
    ApiJson(cmd): ApiJson<PlaceOrderCommand>,
) -> AppResult<Json<OrderPlaced>> {
    let placed = handler.place_order(cmd).await?;
    Ok(Json(OrderPlaced {
        message: "Order placed successfully".to_string(),
        order_id: placed.order_id,
    }))
}

pub async fn pending_orders(
    State(handler): State<AppState>,
) -> AppResult<Json<PendingOrdersResponse>> {
    let orders = handler.pending_orders().await?;
    Ok(Json(PendingOrdersResponse { orders }))
}

pub async fn update_order_status(
    State(handler): State<AppState>,
    ApiPath(order_id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateStatusRequest>,
) -> AppResult<Json<OrderStatusUpdated>> {
    let new_status: OrderStatus = req
        .new_status
        .ok_or_else(|| AppError::validation("newStatus is required"))?
        .parse()?;

    let updated_order = handler
        .update_order_status(UpdateOrderStatusCommand {
            order_id,
            new_status,
        })
        .await?;
    Ok(Json(OrderStatusUpdated {
        message: "Order status updated successfully".to_string(),
        updated_order,
    }))
}

pub async fn complete_order(
    State(handler): State<AppState>,
    ApiPath(order_id): ApiPath<i32>,
) -> AppResult<Json<OrderStatusUpdated>> {
    let updated_order = handler.complete_order(order_id).await?;
    Ok(Json(OrderStatusUpdated {
        message: "Order status updated successfully".to_string(),
        updated_order,
    }))
}

pub async fn order_statuses(
    State(handler): State<AppState>,
) -> AppResult<Json<Vec<OrderStatusView>>> {
    Ok(Json(handler.order_statuses().await?))
}

pub async fn order_items(
    State(handler): State<AppState>,
    ApiPath(order_id): ApiPath<i32>,
) -> AppResult<Json<OrderItemsResponse>> {
    let menu_items = handler.order_menu_items(order_id).await?;
    Ok(Json(OrderItemsResponse { menu_items }))
}

pub async fn delete_order_item(
    State(handler): State<AppState>,
    ApiJson(cmd): ApiJson<DeleteOrderItemCommand>,
) -> AppResult<Json<OrderItemDeleted>> {
    let deleted_item = handler.delete_order_item(cmd).await?;
    Ok(Json(OrderItemDeleted {
        message: "Order item deleted successfully".to_string(),
        deleted_item,
    }))
}
