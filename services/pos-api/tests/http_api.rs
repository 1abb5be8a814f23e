//! HTTP 路由测试（内存仓储 + oneshot）

mod common;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveTime;
use common::{date, money, MemoryStore};
use pos_api::api;
use pos_api::domain::enums::OrderStatus;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(store: &MemoryStore) -> Router {
    api::router(Arc::new(store.handler()))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// ========== 菜单 ==========

#[tokio::test]
async fn test_menu_lists_entrees_before_sides() {
    let store = MemoryStore::new();
    store.add_menu_item("Chow Mein", "side", Some(money(440)));
    store.add_menu_item("Lemonade", "drink", Some(money(250)));
    store.add_menu_item("Orange Chicken", "entree", Some(money(520)));

    let (status, body) = send(app(&store), Method::GET, "/api/menu", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["menu_item_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Orange Chicken", "Chow Mein", "Lemonade"]);
}

#[tokio::test]
async fn test_menu_item_not_found() {
    let store = MemoryStore::new();
    let (status, body) = send(app(&store), Method::GET, "/api/menu/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item not found");
}

#[tokio::test]
async fn test_get_price_is_case_insensitive() {
    let store = MemoryStore::new();
    store.add_menu_item("Orange Chicken", "entree", Some(money(520)));

    let (status, body) = send(
        app(&store),
        Method::GET,
        "/get-price/orange%20chicken/small",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item"], "orange chicken");
    assert_eq!(body["size"], "small");
    assert_eq!(body["price"], "5.20");
}

#[tokio::test]
async fn test_get_price_rejects_unknown_size() {
    let store = MemoryStore::new();
    store.add_menu_item("Orange Chicken", "entree", Some(money(520)));

    let (status, body) =
        send(app(&store), Method::GET, "/get-price/Orange%20Chicken/huge", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid size");
}

#[tokio::test]
async fn test_add_menu_item_fills_combo_prices() {
    let store = MemoryStore::new();

    let (status, body) = send(
        app(&store),
        Method::POST,
        "/api/add-menu-item",
        Some(json!({
            "name": "Kung Pao Chicken",
            "type": "entree",
            "spice": true,
            "calories": 290,
            "priceSmall": 5.2
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Menu item added successfully");
    let id = body["menu_item_id"].as_i64().unwrap() as i32;

    let state = store.state();
    let item = state.menu.iter().find(|m| m.menu_item_id == id).unwrap();
    assert_eq!(item.menu_price_bowl, Some(money(415)));
    assert_eq!(item.menu_price_plate, Some(money(490)));
    assert_eq!(item.menu_price_bplate, Some(money(565)));
    assert!(item.menu_item_spice);
}

#[tokio::test]
async fn test_add_menu_item_rejects_unknown_category() {
    let store = MemoryStore::new();
    let (status, _) = send(
        app(&store),
        Method::POST,
        "/api/add-menu-item",
        Some(json!({ "name": "Mystery", "type": "soup" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ========== 员工 ==========

#[tokio::test]
async fn test_login_accepts_string_employee_id() {
    let store = MemoryStore::new();
    let id = store.add_employee("Sam", "sam@example.com");

    let (status, body) = send(
        app(&store),
        Method::POST,
        "/api/login",
        Some(json!({ "email": "sam@example.com", "employee_id": id.to_string() })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["employee_id"], id);
    assert_eq!(body["user"]["employee_name"], "Sam");
    assert_eq!(body["user"]["job_title"], "Cashier");
}

#[tokio::test]
async fn test_login_rejects_wrong_credentials() {
    let store = MemoryStore::new();
    let id = store.add_employee("Sam", "sam@example.com");

    let (status, body) = send(
        app(&store),
        Method::POST,
        "/api/login",
        Some(json!({ "email": "someone@example.com", "employee_id": id })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_remove_unknown_employee_is_not_found() {
    let store = MemoryStore::new();
    let (status, body) =
        send(app(&store), Method::DELETE, "/api/remove-employee/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found.");
}

#[tokio::test]
async fn test_set_wage_requires_positive_wage() {
    let store = MemoryStore::new();
    let id = store.add_employee("Sam", "sam@example.com");

    let (status, _) = send(
        app(&store),
        Method::POST,
        "/api/set-wage",
        Some(json!({ "id": id, "wage": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        app(&store),
        Method::POST,
        "/api/set-wage",
        Some(json!({ "id": id, "wage": "17.25" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wage"], "17.25");
}

// ========== 订单 ==========

#[tokio::test]
async fn test_add_order_then_complete() {
    let store = MemoryStore::new();
    let dish = store.add_menu_item("Orange Chicken", "entree", Some(money(520)));
    let rice = store.add_inventory("Rice", 20, 100);
    store.map_ingredient(dish, rice);

    let (status, body) = send(
        app(&store),
        Method::POST,
        "/api/add-order",
        Some(json!({
            "employee_id": null,
            "order_price": 10.4,
            "order_items": [
                { "menu_item_id": dish, "price": 5.2 },
                { "menu_item_id": dish, "price": "5.20", "item_size": "large" }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order placed successfully");
    let order_id = body["order_id"].as_i64().unwrap();
    assert_eq!(store.inventory_quantity(rice), 18);

    let (status, body) = send(
        app(&store),
        Method::PUT,
        &format!("/api/order-status/{}", order_id),
        Some(json!({ "newStatus": "Completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedOrder"]["order_status"], "Completed");

    let (status, body) = send(
        app(&store),
        Method::PUT,
        &format!("/api/orders/{}/complete", order_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedOrder"]["order_status"], "Completed");
}

#[tokio::test]
async fn test_add_order_rejects_malformed_json() {
    let store = MemoryStore::new();
    let response = app(&store)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/add-order")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"order_items\": ["))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_order_status_rejects_unknown_status() {
    let store = MemoryStore::new();
    let order_id = store.add_order(
        OrderStatus::Awaiting,
        money(500),
        date("2024-03-15"),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        &[],
    );

    let (status, _) = send(
        app(&store),
        Method::PUT,
        &format!("/api/order-status/{}", order_id),
        Some(json!({ "newStatus": "Lost" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_orders_status_newest_first() {
    let store = MemoryStore::new();
    let day = date("2024-03-15");
    let at = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    let first = store.add_order(OrderStatus::Completed, money(500), day, at, &[]);
    let second = store.add_order(OrderStatus::Awaiting, money(500), day, at, &[]);

    let (status, body) = send(app(&store), Method::GET, "/api/orders-status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["order_id"], second);
    assert_eq!(body[1]["order_id"], first);
    assert_eq!(body[1]["order_status"], "Completed");
}

#[tokio::test]
async fn test_order_items_of_empty_order_is_not_found() {
    let store = MemoryStore::new();
    let (status, _) = send(app(&store), Method::GET, "/api/order-items/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_order_item_requires_identifiers() {
    let store = MemoryStore::new();
    let (status, body) = send(
        app(&store),
        Method::DELETE,
        "/api/delete-order-item",
        Some(json!({ "orderId": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Both order_id and menu_item_id are required");
}

// ========== 报表 ==========

#[tokio::test]
async fn test_zreport_requires_date() {
    let store = MemoryStore::new();
    let (status, body) = send(app(&store), Method::GET, "/api/zreport", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Date is required");
}

#[tokio::test]
async fn test_xreport_groups_by_hour() {
    let store = MemoryStore::new();
    let day = date("2024-03-15");
    let noon = NaiveTime::from_hms_opt(12, 5, 0).unwrap();
    let later = NaiveTime::from_hms_opt(12, 45, 0).unwrap();
    let evening = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
    store.add_order(OrderStatus::Completed, money(600), day, noon, &[]);
    store.add_order(OrderStatus::Completed, money(400), day, later, &[]);
    store.add_order(OrderStatus::Completed, money(250), day, evening, &[]);

    let (status, body) =
        send(app(&store), Method::GET, "/api/xreport?date=2024-03-15", None).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body["hourlySales"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["hour"], "12:00");
    assert_eq!(rows[0]["totalSales"], "10.00");
    assert_eq!(rows[1]["hour"], "18:00");
}

#[tokio::test]
async fn test_product_usage_sums_recorded_quantities() {
    let store = MemoryStore::new();
    let dish = store.add_menu_item("Orange Chicken", "entree", Some(money(520)));
    let chicken = store.add_inventory("Chicken", 40, 60);
    store.map_ingredient(dish, chicken);
    store.add_order(
        OrderStatus::Completed,
        money(1560),
        date("2024-03-10"),
        NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        &[(dish, 2), (dish, 1)],
    );

    let (status, body) = send(
        app(&store),
        Method::GET,
        "/api/inventory/product-usage?startDate=2024-03-01&endDate=2024-03-31",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["productUsage"][0]["name"], "Chicken");
    assert_eq!(body["productUsage"][0]["amountUsed"], 3);
}

#[tokio::test]
async fn test_restock_reports_updated_count() {
    let store = MemoryStore::new();
    store.add_inventory("Noodles", 5, 100);
    store.add_inventory("Beef", 90, 100);

    let (status, body) =
        send(app(&store), Method::POST, "/api/inventory/restock", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "1 items restocked.");

    let (_, body) =
        send(app(&store), Method::GET, "/api/inventory/restock-report", None).await;
    let rows = body["restockReport"].as_array().unwrap();
    assert_eq!(rows[0]["name"], "Beef");
    assert_eq!(rows[0]["minRequiredQuantity"], 10);
    assert_eq!(rows[1]["name"], "Noodles");
    assert_eq!(rows[1]["quantity"], 100);
}

// ========== 库存 ==========

#[tokio::test]
async fn test_update_unit_cost() {
    let store = MemoryStore::new();
    let rice = store.add_inventory("Rice", 20, 100);

    let (status, body) = send(
        app(&store),
        Method::PUT,
        "/api/update-unit-cost",
        Some(json!({ "inventoryId": rice, "newUnitCost": "2.35" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedItem"]["unit_cost_to_order"], "2.35");

    let (status, _) = send(
        app(&store),
        Method::PUT,
        "/api/update-unit-cost",
        Some(json!({ "inventoryId": 999, "newUnitCost": "2.35" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_inventory_item() {
    let store = MemoryStore::new();
    store.add_inventory("Rice", 20, 100);

    let (status, body) = send(
        app(&store),
        Method::POST,
        "/api/inventory/delete-item",
        Some(json!({ "name": "Rice" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item deleted successfully.");

    let (status, _) = send(
        app(&store),
        Method::POST,
        "/api/inventory/delete-item",
        Some(json!({ "name": "Rice" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ========== 会员 ==========

#[tokio::test]
async fn test_cashout_response_shape() {
    let store = MemoryStore::new();
    store.add_customer("Ada", "ada@example.com", 20);

    let (status, body) = send(
        app(&store),
        Method::POST,
        "/api/cashout",
        Some(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "phone_number": null,
            "totalPrice": 20
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["finalPrice"], "18.00");
    assert_eq!(body["discountApplied"], true);
    assert_eq!(body["remainingPoints"], 0);
}

#[tokio::test]
async fn test_customer_created_then_found() {
    let store = MemoryStore::new();

    let (status, body) = send(
        app(&store),
        Method::POST,
        "/api/customers",
        Some(json!({ "name": "Grace", "email": "grace@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["points"], 5);

    let (status, body) =
        send(app(&store), Method::GET, "/api/customers/grace@example.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Grace");

    let (status, _) =
        send(app(&store), Method::GET, "/api/customers/nobody@example.com", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
