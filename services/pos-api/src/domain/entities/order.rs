//! 订单实体

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::enums::OrderStatus;

/// 订单头
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub order_id: i32,
    pub employee_id: Option<i32>,
    pub order_price: Decimal,
    pub order_status: OrderStatus,
    pub order_date: NaiveDate,
    pub order_time: NaiveTime,
}

/// 待写入的订单
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub employee_id: Option<i32>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
}

/// 购物车行（默认值已填充）
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub menu_item_id: i32,
    pub combo: bool,
    pub combo_type: String,
    pub item_size: String,
    pub recorded_quantity: i32,
}

/// 订单行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub order_item_id: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
    pub combo: bool,
    pub combo_type: String,
    pub item_size: String,
    pub recorded_quantity: i32,
}

/// 待制作订单（菜品名按行拼接）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingOrder {
    pub order_id: i32,
    pub order_date: NaiveDate,
    pub order_time: NaiveTime,
    pub order_price: Decimal,
    pub order_status: OrderStatus,
    pub items: Option<String>,
}

/// 订单状态看板
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderStatusView {
    pub order_id: i32,
    pub order_status: OrderStatus,
}

/// 订单中的菜品
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderMenuItem {
    pub menu_item_id: i32,
    pub menu_item_name: String,
}
