//! PostgreSQL repository implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use pos_common::DateRange;
use pos_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entities::{
    Customer, Employee, HourlySales, InventoryItem, InventoryLevel, ItemSales, MenuFlag, MenuItem,
    MenuItemInfo, MenuItemName, MenuItemSummary, MenuPrices, NewCustomer, NewEmployee,
    NewMenuItem, Order, OrderItem, OrderMenuItem, OrderStatusView, OrderTotal,
    PREMIUM_SMALL_PRICE, PendingOrder, ProductUsage, Promo,
};
use crate::domain::enums::OrderStatus;
use crate::domain::repositories::{
    CustomerRepository, EmployeeRepository, InventoryRepository, MenuRepository, OrderRepository,
    ReportRepository,
};

use super::rows::*;
use super::{Violation, db_error, violation};

const MENU_ITEM_COLUMNS: &str = r#"
    menu_item_id, menu_item_name, menu_item_type, menu_item_description,
    menu_item_spice, menu_item_woksmart, menu_item_calories,
    menu_price_small, menu_price_medium, menu_price_large,
    menu_price_bowl, menu_price_plate, menu_price_bplate, menu_item_status
"#;

const MENU_SUMMARY_COLUMNS: &str = r#"
    menu_item_id, menu_item_name, menu_item_type,
    menu_item_spice, menu_item_woksmart, menu_item_calories
"#;

const ORDER_COLUMNS: &str =
    "order_id, employee_id, order_price, order_status, order_date, order_time";

const EMPLOYEE_COLUMNS: &str = r#"
    employee_id, employee_name, email, phone_number, job_title, wage, hire_date, google_id
"#;

pub(crate) const CUSTOMER_COLUMNS: &str = "customer_id, name, email, phone_number, points";

const INVENTORY_COLUMNS: &str =
    "inventory_id, inventory_item_name, quantity, fill_level, unit_cost_to_order";

// ============================================================================
// MenuRepository 实现
// ============================================================================

pub struct PostgresMenuRepository {
    pool: PgPool,
}

impl PostgresMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn summaries(&self, sql: &str, category: Option<&str>) -> AppResult<Vec<MenuItemSummary>> {
        let mut query = sqlx::query_as::<_, MenuItemSummaryRow>(sql);
        if let Some(category) = category {
            query = query.bind(category);
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("查询菜单", e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl MenuRepository for PostgresMenuRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<MenuItem>> {
        let sql = format!("SELECT {} FROM menu_items WHERE menu_item_id = $1", MENU_ITEM_COLUMNS);
        let row = sqlx::query_as::<_, MenuItemRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("查询菜单项", e))?;

        Ok(row.map(Into::into))
    }

    async fn list_active(&self) -> AppResult<Vec<MenuItemSummary>> {
        let sql = format!(
            "SELECT {} FROM menu_items WHERE menu_item_status = TRUE ORDER BY menu_item_id",
            MENU_SUMMARY_COLUMNS
        );
        self.summaries(&sql, None).await
    }

    async fn list_by_category(&self, category: &str) -> AppResult<Vec<MenuItemSummary>> {
        let sql = format!(
            r#"
            SELECT {} FROM menu_items
            WHERE menu_item_type = $1 AND menu_item_status = TRUE
            ORDER BY menu_item_id
            "#,
            MENU_SUMMARY_COLUMNS
        );
        self.summaries(&sql, Some(category)).await
    }

    async fn names_with_flag(&self, flag: MenuFlag) -> AppResult<Vec<MenuItemName>> {
        let query = match flag {
            MenuFlag::Spicy => sqlx::query_scalar::<_, String>(
                "SELECT menu_item_name FROM menu_items
                 WHERE menu_item_spice = TRUE AND menu_item_status = TRUE
                 ORDER BY menu_item_id",
            ),
            MenuFlag::WokSmart => sqlx::query_scalar::<_, String>(
                "SELECT menu_item_name FROM menu_items
                 WHERE menu_item_woksmart = TRUE AND menu_item_status = TRUE
                 ORDER BY menu_item_id",
            ),
            MenuFlag::Premium => sqlx::query_scalar::<_, String>(
                "SELECT menu_item_name FROM menu_items
                 WHERE menu_price_small = $1 AND menu_item_status = TRUE
                 ORDER BY menu_item_id",
            )
            .bind(PREMIUM_SMALL_PRICE),
        };

        let names = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("查询菜单标记", e))?;

        Ok(names
            .into_iter()
            .map(|menu_item_name| MenuItemName { menu_item_name })
            .collect())
    }

    async fn menu_info(&self, name: Option<&str>) -> AppResult<Vec<MenuItemInfo>> {
        let rows = sqlx::query_as::<_, MenuItemInfoRow>(
            r#"
            SELECT mi.menu_item_name, mi.menu_item_description, mi.menu_item_calories,
                   COALESCE(
                       array_agg(a.allergen_name::TEXT ORDER BY a.allergen_name)
                           FILTER (WHERE a.allergen_name IS NOT NULL),
                       ARRAY[]::TEXT[]
                   ) AS allergens
            FROM menu_items mi
            LEFT JOIN menu_item_allergens mia ON mi.menu_item_id = mia.menu_item_id
            LEFT JOIN allergens a ON mia.allergen_id = a.allergen_id
            WHERE ($1::TEXT IS NULL OR mi.menu_item_name = $1)
            GROUP BY mi.menu_item_name, mi.menu_item_description, mi.menu_item_calories
            ORDER BY mi.menu_item_name
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("查询菜单详情", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_prices_by_name(&self, name: &str) -> AppResult<Option<MenuPrices>> {
        let row = sqlx::query_as::<_, MenuPricesRow>(
            r#"
            SELECT menu_price_small, menu_price_medium, menu_price_large,
                   menu_price_bowl, menu_price_plate, menu_price_bplate
            FROM menu_items
            WHERE LOWER(menu_item_name) = LOWER($1)
            ORDER BY menu_item_status DESC, menu_item_id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("查询菜单价格", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_id_by_name(&self, name: &str) -> AppResult<Option<i32>> {
        sqlx::query_scalar::<_, i32>(
            "SELECT menu_item_id FROM menu_items WHERE menu_item_name = $1
             ORDER BY menu_item_status DESC, menu_item_id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("查询菜单项 ID", e))
    }

    async fn insert(&self, item: &NewMenuItem) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO menu_items (
                menu_item_name, menu_item_type, menu_item_description,
                menu_item_spice, menu_item_woksmart, menu_item_calories,
                menu_price_small, menu_price_medium, menu_price_large,
                menu_price_bowl, menu_price_plate, menu_price_bplate,
                menu_item_status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING menu_item_id
            "#,
        )
        .bind(&item.name)
        .bind(item.category.as_str())
        .bind(&item.description)
        .bind(item.spicy)
        .bind(item.wok_smart)
        .bind(item.calories)
        .bind(item.prices.small)
        .bind(item.prices.medium)
        .bind(item.prices.large)
        .bind(item.prices.bowl)
        .bind(item.prices.plate)
        .bind(item.prices.bigger_plate)
        .bind(item.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("新增菜单项", e))
    }

    async fn deactivate_by_name(&self, name: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE menu_items SET menu_item_status = FALSE WHERE menu_item_name = $1",
        )
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("下架菜单项", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_calories(&self, id: i32, calories: i32) -> AppResult<Option<MenuItem>> {
        let sql = format!(
            "UPDATE menu_items SET menu_item_calories = $1 WHERE menu_item_id = $2 RETURNING {}",
            MENU_ITEM_COLUMNS
        );
        let row = sqlx::query_as::<_, MenuItemRow>(&sql)
            .bind(calories)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("更新菜单热量", e))?;

        Ok(row.map(Into::into))
    }

    async fn active_promos(&self) -> AppResult<Vec<Promo>> {
        let rows = sqlx::query_as::<_, PromoRow>(
            r#"
            SELECT p.promo_id, m.menu_item_name, p.discount_amount
            FROM promos p
            JOIN menu_items m ON p.discounted_item = m.menu_item_id
            WHERE m.menu_item_status = TRUE
            ORDER BY p.promo_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("查询促销", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// OrderRepository 实现
// ============================================================================

pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn find_by_id(&self, order_id: i32) -> AppResult<Option<Order>> {
        let sql = format!("SELECT {} FROM orders WHERE order_id = $1", ORDER_COLUMNS);
        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(order_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("查询订单", e))?;

        row.map(Order::try_from).transpose()
    }

    async fn list_pending(&self) -> AppResult<Vec<PendingOrder>> {
        let rows = sqlx::query_as::<_, PendingOrderRow>(
            r#"
            SELECT o.order_id, o.order_date, o.order_time, o.order_price, o.order_status,
                   STRING_AGG(mi.menu_item_name, E'\n' ORDER BY oi.order_item_id) AS items
            FROM orders o
            LEFT JOIN order_items oi ON o.order_id = oi.order_id
            LEFT JOIN menu_items mi ON oi.menu_item_id = mi.menu_item_id
            WHERE o.order_status = $1
            GROUP BY o.order_id, o.order_date, o.order_time, o.order_price, o.order_status
            ORDER BY o.order_id
            "#,
        )
        .bind(OrderStatus::Awaiting.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("查询待制作订单", e))?;

        rows.into_iter().map(PendingOrder::try_from).collect()
    }

    async fn update_status(
        &self,
        order_id: i32,
        status: OrderStatus,
        from: &[OrderStatus],
    ) -> AppResult<Option<Order>> {
        let sql = format!(
            "UPDATE orders SET order_status = $1
             WHERE order_id = $2 AND order_status = ANY($3)
             RETURNING {}",
            ORDER_COLUMNS
        );
        let from: Vec<String> = from.iter().map(|s| s.as_str().to_string()).collect();
        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(status.as_str())
            .bind(order_id)
            .bind(from)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("更新订单状态", e))?;

        row.map(Order::try_from).transpose()
    }

    async fn list_statuses(&self) -> AppResult<Vec<OrderStatusView>> {
        let rows = sqlx::query_as::<_, OrderStatusRow>(
            "SELECT order_id, order_status FROM orders ORDER BY order_id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("查询订单状态", e))?;

        rows.into_iter().map(OrderStatusView::try_from).collect()
    }

    async fn menu_items_of_order(&self, order_id: i32) -> AppResult<Vec<OrderMenuItem>> {
        let rows = sqlx::query_as::<_, OrderMenuItemRow>(
            r#"
            SELECT DISTINCT mi.menu_item_id, mi.menu_item_name
            FROM order_items oi
            JOIN menu_items mi ON oi.menu_item_id = mi.menu_item_id
            WHERE oi.order_id = $1
            ORDER BY mi.menu_item_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("查询订单菜品", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_order_item(
        &self,
        order_id: i32,
        menu_item_id: i32,
    ) -> AppResult<Option<OrderItem>> {
        let rows = sqlx::query_as::<_, OrderItemRow>(
            r#"
            DELETE FROM order_items
            WHERE order_id = $1 AND menu_item_id = $2
            RETURNING order_item_id, order_id, menu_item_id, combo, combo_type,
                      item_size, recorded_quantity
            "#,
        )
        .bind(order_id)
        .bind(menu_item_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("删除订单行", e))?;

        Ok(rows
            .into_iter()
            .min_by_key(|row| row.order_item_id)
            .map(Into::into))
    }
}

// ============================================================================
// EmployeeRepository 实现
// ============================================================================

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        let sql = format!("SELECT {} FROM employees ORDER BY employee_id", EMPLOYEE_COLUMNS);
        let rows = sqlx::query_as::<_, EmployeeRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("查询员工", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_unlinked(&self) -> AppResult<Vec<Employee>> {
        let sql = format!(
            "SELECT {} FROM employees WHERE google_id IS NULL ORDER BY employee_id",
            EMPLOYEE_COLUMNS
        );
        let rows = sqlx::query_as::<_, EmployeeRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("查询未绑定员工", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, employee: &NewEmployee) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO employees (employee_name, email, phone_number, job_title, wage, hire_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING employee_id
            "#,
        )
        .bind(&employee.employee_name)
        .bind(&employee.email)
        .bind(&employee.phone_number)
        .bind(&employee.job_title)
        .bind(employee.wage)
        .bind(employee.hire_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("新增员工", e))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("删除员工", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_wage(&self, id: i32, wage: Decimal) -> AppResult<Option<Employee>> {
        let sql = format!(
            "UPDATE employees SET wage = $1 WHERE employee_id = $2 RETURNING {}",
            EMPLOYEE_COLUMNS
        );
        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(wage)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("更新员工工资", e))?;

        Ok(row.map(Into::into))
    }

    async fn link_google(&self, id: i32, google_id: &str) -> AppResult<Option<Employee>> {
        let sql = format!(
            "UPDATE employees SET google_id = $1 WHERE employee_id = $2 RETURNING {}",
            EMPLOYEE_COLUMNS
        );
        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(google_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::Unique) => {
                    AppError::conflict("Google account is already linked to another employee")
                }
                _ => db_error("绑定 Google 账号", e),
            })?;

        Ok(row.map(Into::into))
    }

    async fn find_by_google_id(&self, google_id: &str) -> AppResult<Option<Employee>> {
        let sql = format!("SELECT {} FROM employees WHERE google_id = $1", EMPLOYEE_COLUMNS);
        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(google_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("按 Google 账号查询员工", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_credentials(&self, email: &str, id: i32) -> AppResult<Option<Employee>> {
        let sql = format!(
            "SELECT {} FROM employees WHERE email = $1 AND employee_id = $2",
            EMPLOYEE_COLUMNS
        );
        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(email)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("登录查询", e))?;

        Ok(row.map(Into::into))
    }
}

// ============================================================================
// CustomerRepository 实现
// ============================================================================

pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        let sql = format!("SELECT {} FROM customers WHERE email = $1", CUSTOMER_COLUMNS);
        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("查询会员", e))?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, customer: &NewCustomer, points: i32) -> AppResult<Customer> {
        let sql = format!(
            "INSERT INTO customers (name, email, phone_number, points)
             VALUES ($1, $2, $3, $4) RETURNING {}",
            CUSTOMER_COLUMNS
        );
        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.phone_number)
            .bind(points)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::Unique) => AppError::conflict("Customer already exists"),
                _ => db_error("新增会员", e),
            })?;

        Ok(row.into())
    }
}

// ============================================================================
// InventoryRepository 实现
// ============================================================================

pub struct PostgresInventoryRepository {
    pool: PgPool,
}

impl PostgresInventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryRepository for PostgresInventoryRepository {
    async fn update_unit_cost(
        &self,
        id: i32,
        unit_cost: Decimal,
    ) -> AppResult<Option<InventoryItem>> {
        let sql = format!(
            "UPDATE inventory SET unit_cost_to_order = $1 WHERE inventory_id = $2 RETURNING {}",
            INVENTORY_COLUMNS
        );
        let row = sqlx::query_as::<_, InventoryRow>(&sql)
            .bind(unit_cost)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("更新采购单价", e))?;

        Ok(row.map(Into::into))
    }

    async fn delete_by_name(&self, name: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM inventory WHERE inventory_item_name = $1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("删除库存项", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn restock_below_threshold(&self) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE inventory SET quantity = fill_level WHERE quantity <= fill_level * 0.1",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("补货", e))?;

        Ok(result.rows_affected())
    }
}

// ============================================================================
// ReportRepository 实现
// ============================================================================

pub struct PostgresReportRepository {
    pool: PgPool,
}

impl PostgresReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PostgresReportRepository {
    async fn completed_orders_on(&self, date: NaiveDate) -> AppResult<Vec<OrderTotal>> {
        let rows = sqlx::query_as::<_, OrderTotalRow>(
            r#"
            SELECT order_id, order_price
            FROM orders
            WHERE order_date = $1 AND order_status = $2
            ORDER BY order_id
            "#,
        )
        .bind(date)
        .bind(OrderStatus::Completed.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("查询 Z 报表", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn hourly_sales(&self, date: NaiveDate) -> AppResult<Vec<HourlySales>> {
        let rows = sqlx::query_as::<_, HourlySalesRow>(
            r#"
            SELECT EXTRACT(HOUR FROM order_time)::INT AS hour,
                   SUM(order_price) AS total_sales
            FROM orders
            WHERE order_date = $1 AND order_status = $2
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(date)
        .bind(OrderStatus::Completed.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("查询 X 报表", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn sales_by_item(&self, range: DateRange) -> AppResult<Vec<ItemSales>> {
        let rows = sqlx::query_as::<_, ItemSalesRow>(
            r#"
            SELECT mi.menu_item_name, mi.menu_item_type, COUNT(*) AS item_count
            FROM menu_items mi
            JOIN order_items oi ON mi.menu_item_id = oi.menu_item_id
            JOIN orders o ON oi.order_id = o.order_id
            WHERE o.order_date BETWEEN $1 AND $2
              AND o.order_status = $3
            GROUP BY mi.menu_item_name, mi.menu_item_type
            ORDER BY mi.menu_item_name
            "#,
        )
        .bind(range.start())
        .bind(range.end())
        .bind(OrderStatus::Completed.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("查询销售报表", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn product_usage(&self, range: DateRange) -> AppResult<Vec<ProductUsage>> {
        let rows = sqlx::query_as::<_, ProductUsageRow>(
            r#"
            SELECT iv.inventory_item_name, SUM(oi.recorded_quantity)::BIGINT AS total_used
            FROM orders o
            JOIN order_items oi ON o.order_id = oi.order_id
            JOIN ingredients ig ON oi.menu_item_id = ig.menu_item_id
            JOIN inventory iv ON ig.inventory_item_id = iv.inventory_id
            WHERE o.order_date BETWEEN $1 AND $2
              AND o.order_status = $3
            GROUP BY iv.inventory_item_name
            ORDER BY iv.inventory_item_name
            "#,
        )
        .bind(range.start())
        .bind(range.end())
        .bind(OrderStatus::Completed.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("查询库存消耗", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn inventory_levels(&self) -> AppResult<Vec<InventoryLevel>> {
        let rows = sqlx::query_as::<_, InventoryLevelRow>(
            "SELECT inventory_item_name, quantity, fill_level FROM inventory ORDER BY inventory_item_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("查询库存水位", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
