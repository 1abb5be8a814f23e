//! 数据库行映射结构

use chrono::{NaiveDate, NaiveTime};
use pos_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::domain::entities::{
    Customer, Employee, HourlySales, InventoryItem, InventoryLevel, ItemSales, MenuItem,
    MenuItemInfo, MenuItemSummary, MenuPrices, Order, OrderItem, OrderMenuItem, OrderStatusView,
    OrderTotal, PendingOrder, ProductUsage, Promo,
};
use crate::domain::enums::OrderStatus;

fn parse_status(value: &str) -> AppResult<OrderStatus> {
    value
        .parse()
        .map_err(|_| AppError::database(format!("Unexpected order status in database: {}", value)))
}

/// 菜单项数据库行
#[derive(Debug, FromRow)]
pub struct MenuItemRow {
    pub menu_item_id: i32,
    pub menu_item_name: String,
    pub menu_item_type: String,
    pub menu_item_description: Option<String>,
    pub menu_item_spice: bool,
    pub menu_item_woksmart: bool,
    pub menu_item_calories: Option<i32>,
    pub menu_price_small: Option<Decimal>,
    pub menu_price_medium: Option<Decimal>,
    pub menu_price_large: Option<Decimal>,
    pub menu_price_bowl: Option<Decimal>,
    pub menu_price_plate: Option<Decimal>,
    pub menu_price_bplate: Option<Decimal>,
    pub menu_item_status: bool,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        Self {
            menu_item_id: row.menu_item_id,
            menu_item_name: row.menu_item_name,
            menu_item_type: row.menu_item_type,
            menu_item_description: row.menu_item_description,
            menu_item_spice: row.menu_item_spice,
            menu_item_woksmart: row.menu_item_woksmart,
            menu_item_calories: row.menu_item_calories,
            menu_price_small: row.menu_price_small,
            menu_price_medium: row.menu_price_medium,
            menu_price_large: row.menu_price_large,
            menu_price_bowl: row.menu_price_bowl,
            menu_price_plate: row.menu_price_plate,
            menu_price_bplate: row.menu_price_bplate,
            menu_item_status: row.menu_item_status,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct MenuItemSummaryRow {
    pub menu_item_id: i32,
    pub menu_item_name: String,
    pub menu_item_type: String,
    pub menu_item_spice: bool,
    pub menu_item_woksmart: bool,
    pub menu_item_calories: Option<i32>,
}

impl From<MenuItemSummaryRow> for MenuItemSummary {
    fn from(row: MenuItemSummaryRow) -> Self {
        Self {
            menu_item_id: row.menu_item_id,
            menu_item_name: row.menu_item_name,
            menu_item_type: row.menu_item_type,
            menu_item_spice: row.menu_item_spice,
            menu_item_woksmart: row.menu_item_woksmart,
            menu_item_calories: row.menu_item_calories,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct MenuItemInfoRow {
    pub menu_item_name: String,
    pub menu_item_description: Option<String>,
    pub menu_item_calories: Option<i32>,
    pub allergens: Vec<String>,
}

impl From<MenuItemInfoRow> for MenuItemInfo {
    fn from(row: MenuItemInfoRow) -> Self {
        Self {
            menu_item_name: row.menu_item_name,
            menu_item_description: row.menu_item_description,
            menu_item_calories: row.menu_item_calories,
            allergens: row.allergens,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct MenuPricesRow {
    pub menu_price_small: Option<Decimal>,
    pub menu_price_medium: Option<Decimal>,
    pub menu_price_large: Option<Decimal>,
    pub menu_price_bowl: Option<Decimal>,
    pub menu_price_plate: Option<Decimal>,
    pub menu_price_bplate: Option<Decimal>,
}

impl From<MenuPricesRow> for MenuPrices {
    fn from(row: MenuPricesRow) -> Self {
        Self {
            small: row.menu_price_small,
            medium: row.menu_price_medium,
            large: row.menu_price_large,
            bowl: row.menu_price_bowl,
            plate: row.menu_price_plate,
            bigger_plate: row.menu_price_bplate,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct PromoRow {
    pub promo_id: i32,
    pub menu_item_name: String,
    pub discount_amount: Decimal,
}

impl From<PromoRow> for Promo {
    fn from(row: PromoRow) -> Self {
        Self {
            promo_id: row.promo_id,
            menu_item_name: row.menu_item_name,
            discount_amount: row.discount_amount,
        }
    }
}

/// 订单数据库行
#[derive(Debug, FromRow)]
pub struct OrderRow {
    pub order_id: i32,
    pub employee_id: Option<i32>,
    pub order_price: Decimal,
    pub order_status: String,
    pub order_date: NaiveDate,
    pub order_time: NaiveTime,
}

impl TryFrom<OrderRow> for Order {
    type Error = AppError;

    fn try_from(row: OrderRow) -> AppResult<Self> {
        Ok(Self {
            order_id: row.order_id,
            employee_id: row.employee_id,
            order_price: row.order_price,
            order_status: parse_status(&row.order_status)?,
            order_date: row.order_date,
            order_time: row.order_time,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct PendingOrderRow {
    pub order_id: i32,
    pub order_date: NaiveDate,
    pub order_time: NaiveTime,
    pub order_price: Decimal,
    pub order_status: String,
    pub items: Option<String>,
}

impl TryFrom<PendingOrderRow> for PendingOrder {
    type Error = AppError;

    fn try_from(row: PendingOrderRow) -> AppResult<Self> {
        Ok(Self {
            order_id: row.order_id,
            order_date: row.order_date,
            order_time: row.order_time,
            order_price: row.order_price,
            order_status: parse_status(&row.order_status)?,
            items: row.items,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct OrderStatusRow {
    pub order_id: i32,
    pub order_status: String,
}

impl TryFrom<OrderStatusRow> for OrderStatusView {
    type Error = AppError;

    fn try_from(row: OrderStatusRow) -> AppResult<Self> {
        Ok(Self {
            order_id: row.order_id,
            order_status: parse_status(&row.order_status)?,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct OrderItemRow {
    pub order_item_id: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
    pub combo: bool,
    pub combo_type: String,
    pub item_size: String,
    pub recorded_quantity: i32,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        Self {
            order_item_id: row.order_item_id,
            order_id: row.order_id,
            menu_item_id: row.menu_item_id,
            combo: row.combo,
            combo_type: row.combo_type,
            item_size: row.item_size,
            recorded_quantity: row.recorded_quantity,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct OrderMenuItemRow {
    pub menu_item_id: i32,
    pub menu_item_name: String,
}

impl From<OrderMenuItemRow> for OrderMenuItem {
    fn from(row: OrderMenuItemRow) -> Self {
        Self {
            menu_item_id: row.menu_item_id,
            menu_item_name: row.menu_item_name,
        }
    }
}

/// 员工数据库行
#[derive(Debug, FromRow)]
pub struct EmployeeRow {
    pub employee_id: i32,
    pub employee_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub job_title: String,
    pub wage: Decimal,
    pub hire_date: NaiveDate,
    pub google_id: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            email: row.email,
            phone_number: row.phone_number,
            job_title: row.job_title,
            wage: row.wage,
            hire_date: row.hire_date,
            google_id: row.google_id,
        }
    }
}

/// 会员数据库行
#[derive(Debug, FromRow)]
pub struct CustomerRow {
    pub customer_id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub points: i32,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            customer_id: row.customer_id,
            name: row.name,
            email: row.email,
            phone_number: row.phone_number,
            points: row.points,
        }
    }
}

/// 库存数据库行
#[derive(Debug, FromRow)]
pub struct InventoryRow {
    pub inventory_id: i32,
    pub inventory_item_name: String,
    pub quantity: i32,
    pub fill_level: i32,
    pub unit_cost_to_order: Decimal,
}

impl From<InventoryRow> for InventoryItem {
    fn from(row: InventoryRow) -> Self {
        Self {
            inventory_id: row.inventory_id,
            inventory_item_name: row.inventory_item_name,
            quantity: row.quantity,
            fill_level: row.fill_level,
            unit_cost_to_order: row.unit_cost_to_order,
        }
    }
}

// ---------- 报表行 ----------

#[derive(Debug, FromRow)]
pub struct OrderTotalRow {
    pub order_id: i32,
    pub order_price: Decimal,
}

impl From<OrderTotalRow> for OrderTotal {
    fn from(row: OrderTotalRow) -> Self {
        Self {
            order_id: row.order_id,
            price: row.order_price,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct HourlySalesRow {
    pub hour: i32,
    pub total_sales: Decimal,
}

impl From<HourlySalesRow> for HourlySales {
    fn from(row: HourlySalesRow) -> Self {
        Self {
            hour: row.hour.max(0) as u32,
            total_sales: row.total_sales,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ItemSalesRow {
    pub menu_item_name: String,
    pub menu_item_type: String,
    pub item_count: i64,
}

impl From<ItemSalesRow> for ItemSales {
    fn from(row: ItemSalesRow) -> Self {
        Self {
            name: row.menu_item_name,
            category: row.menu_item_type,
            count: row.item_count,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ProductUsageRow {
    pub inventory_item_name: String,
    pub total_used: i64,
}

impl From<ProductUsageRow> for ProductUsage {
    fn from(row: ProductUsageRow) -> Self {
        Self {
            name: row.inventory_item_name,
            amount_used: row.total_used,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct InventoryLevelRow {
    pub inventory_item_name: String,
    pub quantity: i32,
    pub fill_level: i32,
}

impl From<InventoryLevelRow> for InventoryLevel {
    fn from(row: InventoryLevelRow) -> Self {
        Self {
            name: row.inventory_item_name,
            quantity: row.quantity,
            fill_level: row.fill_level,
        }
    }
}
