//! 内存仓储：在不依赖数据库的情况下驱动 ServiceHandler 和路由

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Timelike};
use pos_api::application::{Repositories, ServiceHandler};
use pos_api::domain::entities::*;
use pos_api::domain::enums::OrderStatus;
use pos_api::domain::repositories::*;
use pos_api::domain::unit_of_work::{UnitOfWork, UnitOfWorkFactory};
use pos_common::DateRange;
use pos_errors::{AppError, AppResult};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct State {
    pub menu: Vec<MenuItem>,
    pub allergens: HashMap<i32, Vec<String>>,
    pub promos: Vec<(i32, i32, Decimal)>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub ingredients: Vec<(i32, i32)>,
    pub inventory: Vec<InventoryItem>,
    pub employees: Vec<Employee>,
    pub customers: Vec<Customer>,
    pub today: NaiveDate,
    pub now: NaiveTime,
    /// 扣减该库存项时模拟数据库故障
    pub fail_on_inventory: Option<i32>,
    /// 读取订单后模拟另一终端抢先写入的状态
    pub status_after_read: Option<(i32, OrderStatus)>,
    /// 结账建会员前，另一事务已提交的同邮箱会员
    pub enrolled_concurrently: Option<Customer>,
    next_id: i32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            menu: Vec::new(),
            allergens: HashMap::new(),
            promos: Vec::new(),
            orders: Vec::new(),
            order_items: Vec::new(),
            ingredients: Vec::new(),
            inventory: Vec::new(),
            employees: Vec::new(),
            customers: Vec::new(),
            today: date("2024-03-15"),
            now: NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
            fail_on_inventory: None,
            status_after_read: None,
            enrolled_concurrently: None,
            next_id: 0,
        }
    }
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// 所有仓储共享同一份状态
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            menu: Arc::new(self.clone()),
            orders: Arc::new(self.clone()),
            employees: Arc::new(self.clone()),
            customers: Arc::new(self.clone()),
            inventory: Arc::new(self.clone()),
            reports: Arc::new(self.clone()),
            uow_factory: Arc::new(self.clone()),
        }
    }

    pub fn handler(&self) -> ServiceHandler {
        ServiceHandler::new(self.repositories())
    }

    // ---------- 种子数据 ----------

    pub fn add_menu_item(&self, name: &str, category: &str, small: Option<Decimal>) -> i32 {
        let mut state = self.state();
        let id = state.next_id();
        state.menu.push(MenuItem {
            menu_item_id: id,
            menu_item_name: name.to_string(),
            menu_item_type: category.to_string(),
            menu_item_description: None,
            menu_item_spice: false,
            menu_item_woksmart: false,
            menu_item_calories: Some(300),
            menu_price_small: small,
            menu_price_medium: small.map(|p| p + money(150)),
            menu_price_large: small.map(|p| p + money(300)),
            menu_price_bowl: None,
            menu_price_plate: None,
            menu_price_bplate: None,
            menu_item_status: true,
        });
        id
    }

    pub fn add_inventory(&self, name: &str, quantity: i32, fill_level: i32) -> i32 {
        let mut state = self.state();
        let id = state.next_id();
        state.inventory.push(InventoryItem {
            inventory_id: id,
            inventory_item_name: name.to_string(),
            quantity,
            fill_level,
            unit_cost_to_order: money(100),
        });
        id
    }

    pub fn map_ingredient(&self, menu_item_id: i32, inventory_id: i32) {
        self.state().ingredients.push((menu_item_id, inventory_id));
    }

    pub fn add_employee(&self, name: &str, email: &str) -> i32 {
        let mut state = self.state();
        let id = state.next_id();
        state.employees.push(Employee {
            employee_id: id,
            employee_name: name.to_string(),
            email: email.to_string(),
            phone_number: None,
            job_title: "Cashier".to_string(),
            wage: money(1500),
            hire_date: date("2023-01-01"),
            google_id: None,
        });
        id
    }

    pub fn add_customer(&self, name: &str, email: &str, points: i32) -> i32 {
        let mut state = self.state();
        let id = state.next_id();
        state.customers.push(Customer {
            customer_id: id,
            name: name.to_string(),
            email: email.to_string(),
            phone_number: None,
            points,
        });
        id
    }

    /// 直接写入一张历史订单（报表用）
    pub fn add_order(
        &self,
        status: OrderStatus,
        price: Decimal,
        on: NaiveDate,
        at: NaiveTime,
        menu_item_ids: &[(i32, i32)],
    ) -> i32 {
        let mut state = self.state();
        let order_id = state.next_id();
        state.orders.push(Order {
            order_id,
            employee_id: None,
            order_price: price,
            order_status: status,
            order_date: on,
            order_time: at,
        });
        for (menu_item_id, quantity) in menu_item_ids {
            let order_item_id = state.next_id();
            state.order_items.push(OrderItem {
                order_item_id,
                order_id,
                menu_item_id: *menu_item_id,
                combo: false,
                combo_type: "N/A".to_string(),
                item_size: "N/A".to_string(),
                recorded_quantity: *quantity,
            });
        }
        order_id
    }

    // ---------- 断言辅助 ----------

    pub fn inventory_quantity(&self, inventory_id: i32) -> i32 {
        self.state()
            .inventory
            .iter()
            .find(|i| i.inventory_id == inventory_id)
            .map(|i| i.quantity)
            .unwrap()
    }

    pub fn order(&self, order_id: i32) -> Option<Order> {
        self.state()
            .orders
            .iter()
            .find(|o| o.order_id == order_id)
            .cloned()
    }

    pub fn order_lines(&self, order_id: i32) -> Vec<OrderItem> {
        self.state()
            .order_items
            .iter()
            .filter(|i| i.order_id == order_id)
            .cloned()
            .collect()
    }

    pub fn customer(&self, email: &str) -> Option<Customer> {
        self.state()
            .customers
            .iter()
            .find(|c| c.email == email)
            .cloned()
    }
}

fn menu_name(state: &State, menu_item_id: i32) -> Option<(String, String)> {
    state
        .menu
        .iter()
        .find(|m| m.menu_item_id == menu_item_id)
        .map(|m| (m.menu_item_name.clone(), m.menu_item_type.clone()))
}

fn completed_in(order: &Order, range: &DateRange) -> bool {
    order.order_status == OrderStatus::Completed && range.start() <= order.order_date && order.order_date <= range.end()
}

#[async_trait]
impl MenuRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<MenuItem>> {
        Ok(self.state().menu.iter().find(|m| m.menu_item_id == id).cloned())
    }

    async fn list_active(&self) -> AppResult<Vec<MenuItemSummary>> {
        Ok(self
            .state()
            .menu
            .iter()
            .filter(|m| m.menu_item_status)
            .map(MenuItem::summary)
            .collect())
    }

    async fn list_by_category(&self, category: &str) -> AppResult<Vec<MenuItemSummary>> {
        Ok(self
            .state()
            .menu
            .iter()
            .filter(|m| m.menu_item_status && m.menu_item_type == category)
            .map(MenuItem::summary)
            .collect())
    }

    async fn names_with_flag(&self, flag: MenuFlag) -> AppResult<Vec<MenuItemName>> {
        Ok(self
            .state()
            .menu
            .iter()
            .filter(|m| m.menu_item_status && m.has_flag(flag))
            .map(|m| MenuItemName {
                menu_item_name: m.menu_item_name.clone(),
            })
            .collect())
    }

    async fn menu_info(&self, name: Option<&str>) -> AppResult<Vec<MenuItemInfo>> {
        let state = self.state();
        let mut info: Vec<MenuItemInfo> = state
            .menu
            .iter()
            .filter(|m| name.is_none_or(|n| m.menu_item_name == n))
            .map(|m| MenuItemInfo {
                menu_item_name: m.menu_item_name.clone(),
                menu_item_description: m.menu_item_description.clone(),
                menu_item_calories: m.menu_item_calories,
                allergens: state
                    .allergens
                    .get(&m.menu_item_id)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect();
        info.sort_by(|a, b| a.menu_item_name.cmp(&b.menu_item_name));
        Ok(info)
    }

    async fn find_prices_by_name(&self, name: &str) -> AppResult<Option<MenuPrices>> {
        Ok(self
            .state()
            .menu
            .iter()
            .find(|m| m.menu_item_name.eq_ignore_ascii_case(name))
            .map(MenuItem::prices))
    }

    async fn find_id_by_name(&self, name: &str) -> AppResult<Option<i32>> {
        Ok(self
            .state()
            .menu
            .iter()
            .find(|m| m.menu_item_name == name)
            .map(|m| m.menu_item_id))
    }

    async fn insert(&self, item: &NewMenuItem) -> AppResult<i32> {
        let mut state = self.state();
        let id = state.next_id();
        state.menu.push(MenuItem {
            menu_item_id: id,
            menu_item_name: item.name.clone(),
            menu_item_type: item.category.as_str().to_string(),
            menu_item_description: item.description.clone(),
            menu_item_spice: item.spicy,
            menu_item_woksmart: item.wok_smart,
            menu_item_calories: item.calories,
            menu_price_small: item.prices.small,
            menu_price_medium: item.prices.medium,
            menu_price_large: item.prices.large,
            menu_price_bowl: item.prices.bowl,
            menu_price_plate: item.prices.plate,
            menu_price_bplate: item.prices.bigger_plate,
            menu_item_status: item.active,
        });
        Ok(id)
    }

    async fn deactivate_by_name(&self, name: &str) -> AppResult<bool> {
        let mut state = self.state();
        let mut found = false;
        for item in state.menu.iter_mut().filter(|m| m.menu_item_name == name) {
            item.menu_item_status = false;
            found = true;
        }
        Ok(found)
    }

    async fn update_calories(&self, id: i32, calories: i32) -> AppResult<Option<MenuItem>> {
        let mut state = self.state();
        Ok(state
            .menu
            .iter_mut()
            .find(|m| m.menu_item_id == id)
            .map(|m| {
                m.menu_item_calories = Some(calories);
                m.clone()
            }))
    }

    async fn active_promos(&self) -> AppResult<Vec<Promo>> {
        let state = self.state();
        Ok(state
            .promos
            .iter()
            .filter_map(|(promo_id, menu_item_id, discount)| {
                state
                    .menu
                    .iter()
                    .find(|m| m.menu_item_id == *menu_item_id && m.menu_item_status)
                    .map(|m| Promo {
                        promo_id: *promo_id,
                        menu_item_name: m.menu_item_name.clone(),
                        discount_amount: *discount,
                    })
            })
            .collect())
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn find_by_id(&self, order_id: i32) -> AppResult<Option<Order>> {
        let found = self.order(order_id);
        let mut state = self.state();
        if let Some((id, status)) = state.status_after_read {
            if id == order_id {
                state.status_after_read = None;
                if let Some(order) = state.orders.iter_mut().find(|o| o.order_id == id) {
                    order.order_status = status;
                }
            }
        }
        Ok(found)
    }

    async fn list_pending(&self) -> AppResult<Vec<PendingOrder>> {
        let state = self.state();
        Ok(state
            .orders
            .iter()
            .filter(|o| o.order_status == OrderStatus::Awaiting)
            .map(|o| {
                let names: Vec<String> = state
                    .order_items
                    .iter()
                    .filter(|i| i.order_id == o.order_id)
                    .filter_map(|i| menu_name(&state, i.menu_item_id).map(|(n, _)| n))
                    .collect();
                PendingOrder {
                    order_id: o.order_id,
                    order_date: o.order_date,
                    order_time: o.order_time,
                    order_price: o.order_price,
                    order_status: o.order_status,
                    items: (!names.is_empty()).then(|| names.join("\n")),
                }
            })
            .collect())
    }

    async fn update_status(
        &self,
        order_id: i32,
        status: OrderStatus,
        from: &[OrderStatus],
    ) -> AppResult<Option<Order>> {
        let mut state = self.state();
        Ok(state
            .orders
            .iter_mut()
            .find(|o| o.order_id == order_id && from.contains(&o.order_status))
            .map(|o| {
                o.order_status = status;
                o.clone()
            }))
    }

    async fn list_statuses(&self) -> AppResult<Vec<OrderStatusView>> {
        let mut views: Vec<OrderStatusView> = self
            .state()
            .orders
            .iter()
            .map(|o| OrderStatusView {
                order_id: o.order_id,
                order_status: o.order_status,
            })
            .collect();
        views.sort_by(|a, b| b.order_id.cmp(&a.order_id));
        Ok(views)
    }

    async fn menu_items_of_order(&self, order_id: i32) -> AppResult<Vec<OrderMenuItem>> {
        let state = self.state();
        let mut items: Vec<OrderMenuItem> = state
            .order_items
            .iter()
            .filter(|i| i.order_id == order_id)
            .filter_map(|i| {
                menu_name(&state, i.menu_item_id).map(|(name, _)| OrderMenuItem {
                    menu_item_id: i.menu_item_id,
                    menu_item_name: name,
                })
            })
            .collect();
        items.sort_by_key(|i| i.menu_item_id);
        items.dedup();
        Ok(items)
    }

    async fn delete_order_item(
        &self,
        order_id: i32,
        menu_item_id: i32,
    ) -> AppResult<Option<OrderItem>> {
        let mut state = self.state();
        let deleted: Vec<OrderItem> = state
            .order_items
            .iter()
            .filter(|i| i.order_id == order_id && i.menu_item_id == menu_item_id)
            .cloned()
            .collect();
        state
            .order_items
            .retain(|i| !(i.order_id == order_id && i.menu_item_id == menu_item_id));
        Ok(deleted.into_iter().next())
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.state().employees.clone())
    }

    async fn list_unlinked(&self) -> AppResult<Vec<Employee>> {
        Ok(self
            .state()
            .employees
            .iter()
            .filter(|e| e.google_id.is_none())
            .cloned()
            .collect())
    }

    async fn insert(&self, employee: &NewEmployee) -> AppResult<i32> {
        let mut state = self.state();
        let id = state.next_id();
        state.employees.push(Employee {
            employee_id: id,
            employee_name: employee.employee_name.clone(),
            email: employee.email.clone(),
            phone_number: employee.phone_number.clone(),
            job_title: employee.job_title.clone(),
            wage: employee.wage,
            hire_date: employee.hire_date,
            google_id: None,
        });
        Ok(id)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut state = self.state();
        let before = state.employees.len();
        state.employees.retain(|e| e.employee_id != id);
        Ok(state.employees.len() < before)
    }

    async fn update_wage(&self, id: i32, wage: Decimal) -> AppResult<Option<Employee>> {
        let mut state = self.state();
        Ok(state
            .employees
            .iter_mut()
            .find(|e| e.employee_id == id)
            .map(|e| {
                e.wage = wage;
                e.clone()
            }))
    }

    async fn link_google(&self, id: i32, google_id: &str) -> AppResult<Option<Employee>> {
        let mut state = self.state();
        Ok(state
            .employees
            .iter_mut()
            .find(|e| e.employee_id == id)
            .map(|e| {
                e.google_id = Some(google_id.to_string());
                e.clone()
            }))
    }

    async fn find_by_google_id(&self, google_id: &str) -> AppResult<Option<Employee>> {
        Ok(self
            .state()
            .employees
            .iter()
            .find(|e| e.google_id.as_deref() == Some(google_id))
            .cloned())
    }

    async fn find_by_credentials(&self, email: &str, id: i32) -> AppResult<Option<Employee>> {
        Ok(self
            .state()
            .employees
            .iter()
            .find(|e| e.email == email && e.employee_id == id)
            .cloned())
    }
}

#[async_trait]
impl CustomerRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        Ok(self.customer(email))
    }

    async fn insert(&self, customer: &NewCustomer, points: i32) -> AppResult<Customer> {
        insert_customer(&mut self.state(), customer, points)
    }
}

fn insert_customer(state: &mut State, customer: &NewCustomer, points: i32) -> AppResult<Customer> {
    if state.customers.iter().any(|c| c.email == customer.email) {
        return Err(AppError::conflict("Customer already exists"));
    }
    let created = Customer {
        customer_id: state.next_id(),
        name: customer.name.clone(),
        email: customer.email.clone(),
        phone_number: customer.phone_number.clone(),
        points,
    };
    state.customers.push(created.clone());
    Ok(created)
}

#[async_trait]
impl InventoryRepository for MemoryStore {
    async fn update_unit_cost(
        &self,
        id: i32,
        unit_cost: Decimal,
    ) -> AppResult<Option<InventoryItem>> {
        let mut state = self.state();
        Ok(state
            .inventory
            .iter_mut()
            .find(|i| i.inventory_id == id)
            .map(|i| {
                i.unit_cost_to_order = unit_cost;
                i.clone()
            }))
    }

    async fn delete_by_name(&self, name: &str) -> AppResult<bool> {
        let mut state = self.state();
        let before = state.inventory.len();
        state.inventory.retain(|i| i.inventory_item_name != name);
        Ok(state.inventory.len() < before)
    }

    async fn restock_below_threshold(&self) -> AppResult<u64> {
        let mut state = self.state();
        let mut updated = 0;
        for item in state.inventory.iter_mut() {
            if i64::from(item.quantity) * 10 <= i64::from(item.fill_level) {
                item.quantity = item.fill_level;
                updated += 1;
            }
        }
        Ok(updated)
    }
}

#[async_trait]
impl ReportRepository for MemoryStore {
    async fn completed_orders_on(&self, date: NaiveDate) -> AppResult<Vec<OrderTotal>> {
        let range = DateRange::single_day(date);
        Ok(self
            .state()
            .orders
            .iter()
            .filter(|o| completed_in(o, &range))
            .map(|o| OrderTotal {
                order_id: o.order_id,
                price: o.order_price,
            })
            .collect())
    }

    async fn hourly_sales(&self, date: NaiveDate) -> AppResult<Vec<HourlySales>> {
        let range = DateRange::single_day(date);
        let mut by_hour: HashMap<u32, Decimal> = HashMap::new();
        for order in self.state().orders.iter().filter(|o| completed_in(o, &range)) {
            *by_hour.entry(order.order_time.hour()).or_default() += order.order_price;
        }
        let mut rows: Vec<HourlySales> = by_hour
            .into_iter()
            .map(|(hour, total_sales)| HourlySales { hour, total_sales })
            .collect();
        rows.sort_by_key(|r| r.hour);
        Ok(rows)
    }

    async fn sales_by_item(&self, range: DateRange) -> AppResult<Vec<ItemSales>> {
        let state = self.state();
        let mut counts: HashMap<(String, String), i64> = HashMap::new();
        for order in state.orders.iter().filter(|o| completed_in(o, &range)) {
            for line in state.order_items.iter().filter(|i| i.order_id == order.order_id) {
                if let Some(key) = menu_name(&state, line.menu_item_id) {
                    *counts.entry(key).or_default() += 1;
                }
            }
        }
        let mut rows: Vec<ItemSales> = counts
            .into_iter()
            .map(|((name, category), count)| ItemSales {
                name,
                category,
                count,
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn product_usage(&self, range: DateRange) -> AppResult<Vec<ProductUsage>> {
        let state = self.state();
        let mut usage: HashMap<String, i64> = HashMap::new();
        for order in state.orders.iter().filter(|o| completed_in(o, &range)) {
            for line in state.order_items.iter().filter(|i| i.order_id == order.order_id) {
                for (_, inventory_id) in state
                    .ingredients
                    .iter()
                    .filter(|(menu_id, _)| *menu_id == line.menu_item_id)
                {
                    if let Some(item) = state
                        .inventory
                        .iter()
                        .find(|i| i.inventory_id == *inventory_id)
                    {
                        *usage.entry(item.inventory_item_name.clone()).or_default() +=
                            i64::from(line.recorded_quantity);
                    }
                }
            }
        }
        let mut rows: Vec<ProductUsage> = usage
            .into_iter()
            .map(|(name, amount_used)| ProductUsage { name, amount_used })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn inventory_levels(&self) -> AppResult<Vec<InventoryLevel>> {
        let mut levels: Vec<InventoryLevel> = self
            .state()
            .inventory
            .iter()
            .map(|i| InventoryLevel {
                name: i.inventory_item_name.clone(),
                quantity: i.quantity,
                fill_level: i.fill_level,
            })
            .collect();
        levels.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(levels)
    }
}

// ---------- Unit of Work ----------

/// 在状态副本上操作，提交时整体写回
pub struct MemoryUnitOfWork {
    shared: Arc<Mutex<State>>,
    working: State,
}

#[async_trait]
impl UnitOfWorkFactory for MemoryStore {
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>> {
        Ok(Box::new(MemoryUnitOfWork {
            shared: self.state.clone(),
            working: self.state().clone(),
        }))
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn insert_order(&mut self, order: &NewOrder) -> AppResult<i32> {
        if let Some(employee_id) = order.employee_id {
            if !self.working.employees.iter().any(|e| e.employee_id == employee_id) {
                return Err(AppError::validation(format!("Unknown employee {}", employee_id)));
            }
        }
        let order_id = self.working.next_id();
        let (today, now) = (self.working.today, self.working.now);
        self.working.orders.push(Order {
            order_id,
            employee_id: order.employee_id,
            order_price: order.total,
            order_status: order.status,
            order_date: today,
            order_time: now,
        });
        Ok(order_id)
    }

    async fn insert_order_item(&mut self, order_id: i32, line: &OrderLine) -> AppResult<i32> {
        if !self.working.menu.iter().any(|m| m.menu_item_id == line.menu_item_id) {
            return Err(AppError::validation(format!(
                "Unknown menu item {}",
                line.menu_item_id
            )));
        }
        let order_item_id = self.working.next_id();
        self.working.order_items.push(OrderItem {
            order_item_id,
            order_id,
            menu_item_id: line.menu_item_id,
            combo: line.combo,
            combo_type: line.combo_type.clone(),
            item_size: line.item_size.clone(),
            recorded_quantity: line.recorded_quantity,
        });
        Ok(order_item_id)
    }

    async fn ingredients_of(&mut self, menu_item_id: i32) -> AppResult<Vec<i32>> {
        Ok(self
            .working
            .ingredients
            .iter()
            .filter(|(menu_id, _)| *menu_id == menu_item_id)
            .map(|(_, inventory_id)| *inventory_id)
            .collect())
    }

    async fn decrement_inventory(&mut self, inventory_id: i32) -> AppResult<bool> {
        if self.working.fail_on_inventory == Some(inventory_id) {
            return Err(AppError::database("simulated inventory failure"));
        }
        Ok(self
            .working
            .inventory
            .iter_mut()
            .find(|i| i.inventory_id == inventory_id)
            .map(|i| i.quantity -= 1)
            .is_some())
    }

    async fn find_customer_for_update(&mut self, email: &str) -> AppResult<Option<Customer>> {
        Ok(self
            .working
            .customers
            .iter()
            .find(|c| c.email == email)
            .cloned())
    }

    async fn update_customer_points(&mut self, customer_id: i32, points: i32) -> AppResult<()> {
        if let Some(customer) = self
            .working
            .customers
            .iter_mut()
            .find(|c| c.customer_id == customer_id)
        {
            customer.points = points;
        }
        Ok(())
    }

    async fn insert_customer_if_absent(
        &mut self,
        customer: &NewCustomer,
        points: i32,
    ) -> AppResult<Option<Customer>> {
        if let Some(rival) = self.working.enrolled_concurrently.take() {
            self.working.customers.push(rival);
        }
        match insert_customer(&mut self.working, customer, points) {
            Ok(created) => Ok(Some(created)),
            Err(AppError::Conflict(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let MemoryUnitOfWork { shared, working } = *self;
        *shared.lock().unwrap() = working;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        Ok(())
    }
}
