//! 请求/响应结构

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::{CashoutResult, DailyReport, PriceQuote, RestockLine};
use crate::domain::entities::{
    Employee, HourlySales, InventoryItem, ItemSales, Order, OrderItem,
    OrderMenuItem, PendingOrder, ProductUsage,
};

/// 仅带提示信息的响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ---------- 菜单 ----------

#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub item: String,
    pub size: String,
    pub price: String,
}

impl From<PriceQuote> for PriceResponse {
    fn from(quote: PriceQuote) -> Self {
        Self {
            item: quote.item,
            size: quote.size,
            price: quote.price,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MenuItemCreated {
    pub message: String,
    pub menu_item_id: i32,
}

#[derive(Debug, Serialize)]
pub struct MenuItemIdResponse {
    pub menu_item_id: i32,
}

// ---------- 员工 ----------

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub employee_id: i32,
    pub employee_name: String,
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: LoginUser,
}

impl From<Employee> for LoginResponse {
    fn from(employee: Employee) -> Self {
        Self {
            user: LoginUser {
                employee_id: employee.employee_id,
                employee_name: employee.employee_name,
                job_title: employee.job_title,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmployeeCreated {
    pub message: String,
    pub employee_id: i32,
}

#[derive(Debug, Serialize)]
pub struct GoogleLinked {
    pub message: String,
    pub employee: Employee,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: Employee,
}

// ---------- 订单 ----------

#[derive(Debug, Serialize)]
pub struct OrderPlaced {
    pub message: String,
    pub order_id: i32,
}

#[derive(Debug, Serialize)]
pub struct PendingOrdersResponse {
    pub orders: Vec<PendingOrder>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub new_status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdated {
    pub message: String,
    pub updated_order: Order,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemsResponse {
    pub menu_items: Vec<OrderMenuItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDeleted {
    pub message: String,
    pub deleted_item: OrderItem,
}

// ---------- 报表 ----------

#[derive(Debug, Serialize)]
pub struct OrderTotalView {
    pub order_id: i32,
    pub price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ZReportResponse {
    pub orders: Vec<OrderTotalView>,
    pub total: Decimal,
}

impl From<DailyReport> for ZReportResponse {
    fn from(report: DailyReport) -> Self {
        Self {
            orders: report
                .orders
                .into_iter()
                .map(|o| OrderTotalView {
                    order_id: o.order_id,
                    price: o.price,
                })
                .collect(),
            total: report.total,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySalesView {
    pub hour: String,
    pub total_sales: Decimal,
}

impl From<HourlySales> for HourlySalesView {
    fn from(sales: HourlySales) -> Self {
        Self {
            hour: sales.hour_label(),
            total_sales: sales.total_sales,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XReportResponse {
    pub hourly_sales: Vec<HourlySalesView>,
}

#[derive(Debug, Serialize)]
pub struct ItemSalesView {
    pub name: String,
    pub count: i64,
}

impl From<ItemSales> for ItemSalesView {
    fn from(sales: ItemSales) -> Self {
        Self {
            name: sales.name,
            count: sales.count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportResponse {
    pub menu_items: Vec<ItemSalesView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUsageView {
    pub name: String,
    pub amount_used: i64,
}

impl From<ProductUsage> for ProductUsageView {
    fn from(usage: ProductUsage) -> Self {
        Self {
            name: usage.name,
            amount_used: usage.amount_used,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUsageResponse {
    pub product_usage: Vec<ProductUsageView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockLineView {
    pub name: String,
    pub quantity: i32,
    pub min_required_quantity: i32,
}

impl From<RestockLine> for RestockLineView {
    fn from(line: RestockLine) -> Self {
        Self {
            name: line.name,
            quantity: line.quantity,
            min_required_quantity: line.min_required_quantity,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockReportResponse {
    pub restock_report: Vec<RestockLineView>,
}

// ---------- 库存 ----------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitCostUpdated {
    pub message: String,
    pub updated_item: InventoryItem,
}

// ---------- 会员 ----------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashoutResponse {
    pub success: bool,
    pub final_price: Decimal,
    pub discount_applied: bool,
    pub remaining_points: i32,
}

impl From<CashoutResult> for CashoutResponse {
    fn from(result: CashoutResult) -> Self {
        Self {
            success: true,
            final_price: result.final_price,
            discount_applied: result.discount_applied,
            remaining_points: result.remaining_points,
        }
    }
}
