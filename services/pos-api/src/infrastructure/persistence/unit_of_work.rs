//! PostgreSQL Unit of Work 实现

use async_trait::async_trait;
use pos_adapter_postgres::TransactionManager;
use pos_errors::{AppError, AppResult};
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::entities::{Customer, NewCustomer, NewOrder, OrderLine};
use crate::domain::unit_of_work::{UnitOfWork, UnitOfWorkFactory};

use super::postgres::CUSTOMER_COLUMNS;
use super::rows::CustomerRow;
use super::{Violation, db_error, violation};

/// 基于单个数据库事务的 Unit of Work
pub struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl PgUnitOfWork {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn insert_order(&mut self, order: &NewOrder) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO orders (employee_id, order_price, order_status, order_date, order_time)
            VALUES ($1, $2, $3, CURRENT_DATE, LOCALTIME)
            RETURNING order_id
            "#,
        )
        .bind(order.employee_id)
        .bind(order.total)
        .bind(order.status.as_str())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::ForeignKey) => AppError::validation(format!(
                "Unknown employee {}",
                order.employee_id.unwrap_or_default()
            )),
            _ => db_error("写入订单", e),
        })
    }

    async fn insert_order_item(&mut self, order_id: i32, line: &OrderLine) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO order_items (
                order_id, menu_item_id, combo, combo_type, item_size, recorded_quantity
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING order_item_id
            "#,
        )
        .bind(order_id)
        .bind(line.menu_item_id)
        .bind(line.combo)
        .bind(&line.combo_type)
        .bind(&line.item_size)
        .bind(line.recorded_quantity)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::ForeignKey) => {
                AppError::validation(format!("Unknown menu item {}", line.menu_item_id))
            }
            _ => db_error("写入订单行", e),
        })
    }

    async fn ingredients_of(&mut self, menu_item_id: i32) -> AppResult<Vec<i32>> {
        sqlx::query_scalar::<_, i32>(
            "SELECT inventory_item_id FROM ingredients WHERE menu_item_id = $1 ORDER BY ingredient_id",
        )
        .bind(menu_item_id)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| db_error("查询配方", e))
    }

    async fn decrement_inventory(&mut self, inventory_id: i32) -> AppResult<bool> {
        let result = sqlx::query("UPDATE inventory SET quantity = quantity - 1 WHERE inventory_id = $1")
            .bind(inventory_id)
            .execute(&mut *self.tx)
            .await
            .map_err(|e| db_error("扣减库存", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_customer_for_update(&mut self, email: &str) -> AppResult<Option<Customer>> {
        let sql = format!(
            "SELECT {} FROM customers WHERE email = $1 FOR UPDATE",
            CUSTOMER_COLUMNS
        );
        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(email)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(|e| db_error("锁定会员", e))?;

        Ok(row.map(Into::into))
    }

    async fn update_customer_points(&mut self, customer_id: i32, points: i32) -> AppResult<()> {
        sqlx::query("UPDATE customers SET points = $1 WHERE customer_id = $2")
            .bind(points)
            .bind(customer_id)
            .execute(&mut *self.tx)
            .await
            .map_err(|e| db_error("更新会员积分", e))?;

        Ok(())
    }

    async fn insert_customer_if_absent(
        &mut self,
        customer: &NewCustomer,
        points: i32,
    ) -> AppResult<Option<Customer>> {
        let sql = format!(
            "INSERT INTO customers (name, email, phone_number, points)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (email) DO NOTHING
             RETURNING {}",
            CUSTOMER_COLUMNS
        );
        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.phone_number)
            .bind(points)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(|e| db_error("新增会员", e))?;

        Ok(row.map(Into::into))
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        TransactionManager::commit(self.tx).await
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        TransactionManager::rollback(self.tx).await
    }
}

/// PostgreSQL Unit of Work 工厂
#[derive(Clone)]
pub struct PgUnitOfWorkFactory {
    transactions: TransactionManager,
}

impl PgUnitOfWorkFactory {
    pub fn new(pool: PgPool) -> Self {
        Self {
            transactions: TransactionManager::new(pool),
        }
    }
}

#[async_trait]
impl UnitOfWorkFactory for PgUnitOfWorkFactory {
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>> {
        let tx = self.transactions.begin().await?;
        Ok(Box::new(PgUnitOfWork::new(tx)))
    }
}
