//! 用例返回结果

use rust_decimal::Decimal;

use crate::domain::entities::OrderTotal;

/// 价格查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    pub item: String,
    pub size: String,
    /// 两位小数文本
    pub price: String,
}

/// Z 报表
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub orders: Vec<OrderTotal>,
    pub total: Decimal,
}

/// 补货报表行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockLine {
    pub name: String,
    pub quantity: i32,
    pub min_required_quantity: i32,
}

/// 结账结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashoutResult {
    pub final_price: Decimal,
    pub discount_applied: bool,
    pub remaining_points: i32,
}

/// 下单结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: i32,
    pub lines: usize,
    pub decrements: u64,
}
