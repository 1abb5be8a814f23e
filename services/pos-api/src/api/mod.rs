//! HTTP 接口层
//!
//! 路径与请求/响应结构沿用收银台、自助点餐和后台客户端已有的约定

mod customers;
mod dto;
mod employees;
mod extract;
mod inventory;
mod menu;
mod orders;
mod reports;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::application::ServiceHandler;

pub use dto::*;
pub use extract::{ApiJson, ApiPath, ApiQuery};

pub type AppState = Arc<ServiceHandler>;

/// 构建业务路由
pub fn router(handler: AppState) -> Router {
    Router::new()
        // 菜单
        .route("/api/menu", get(menu::list_menu))
        .route("/api/menu/{id}", get(menu::get_menu_item))
        .route("/api/spice", get(menu::spicy_items))
        .route("/api/wok", get(menu::wok_smart_items))
        .route("/api/premium", get(menu::premium_items))
        .route("/api/info", get(menu::menu_info))
        .route("/api/info/{item}", get(menu::menu_item_info))
        .route("/get-price/{item}/{size}", get(menu::get_price))
        .route("/api/get-item-id-by-name/{name}", get(menu::item_id_by_name))
        .route("/api/add-menu-item", post(menu::add_menu_item))
        .route("/api/remove-menu-item", post(menu::remove_menu_item))
        .route("/api/set-calories", post(menu::set_calories))
        .route("/api/promos", get(menu::promos))
        // 员工
        .route("/api/login", post(employees::login))
        .route("/api/employees", get(employees::list_employees))
        .route("/api/unlinked-employees", get(employees::list_unlinked_employees))
        .route("/api/add-employee", post(employees::add_employee))
        .route("/api/remove-employee/{id}", delete(employees::remove_employee))
        .route("/api/set-wage", post(employees::set_wage))
        .route("/api/link-google", post(employees::link_google))
        .route("/api/get-user-by-google/{google_id}", get(employees::user_by_google))
        // 订单
        .route("/api/add-order", post(orders::add_order))
        .route("/api/pending-orders", get(orders::pending_orders))
        .route("/api/order-status/{order_id}", put(orders::update_order_status))
        .route("/api/orders/{order_id}/complete", put(orders::complete_order))
        .route("/api/orders-status", get(orders::order_statuses))
        .route("/api/order-items/{order_id}", get(orders::order_items))
        .route("/api/delete-order-item", delete(orders::delete_order_item))
        // 报表
        .route("/api/zreport", get(reports::z_report))
        .route("/api/xreport", get(reports::x_report))
        .route("/api/salesreport", get(reports::sales_report))
        .route("/api/inventory/product-usage", get(reports::product_usage))
        .route("/api/inventory/restock-report", get(reports::restock_report))
        .route("/api/inventory/restock", post(reports::restock))
        // 库存
        .route("/api/update-unit-cost", put(inventory::update_unit_cost))
        .route("/api/inventory/delete-item", post(inventory::delete_item))
        // 会员
        .route("/api/cashout", post(customers::cashout))
        .route("/api/customers", post(customers::add_customer))
        .route("/api/customers/{email}", get(customers::customer_by_email))
        .with_state(handler)
}
