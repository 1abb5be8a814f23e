//! Unit of Work 模式
//!
//! 下单（订单头 + 订单行 + 扣减库存）和会员结账的读改写都需要在同一事务中完成。
//!
//! ```ignore
//! let mut uow = uow_factory.begin().await?;
//! let order_id = uow.insert_order(&order).await?;
//! uow.insert_order_item(order_id, &line).await?;
//! uow.commit().await?;
//! ```

use async_trait::async_trait;
use pos_errors::AppResult;

use crate::domain::entities::{Customer, NewCustomer, NewOrder, OrderLine};

/// 单个事务内的操作集合
#[async_trait]
pub trait UnitOfWork: Send {
    /// 写入订单头，返回数据库生成的订单号
    async fn insert_order(&mut self, order: &NewOrder) -> AppResult<i32>;

    /// 写入一条订单行
    async fn insert_order_item(&mut self, order_id: i32, line: &OrderLine) -> AppResult<i32>;

    /// 菜单项配方对应的库存 ID
    async fn ingredients_of(&mut self, menu_item_id: i32) -> AppResult<Vec<i32>>;

    /// 库存数量减 1，库存项不存在时返回 false
    async fn decrement_inventory(&mut self, inventory_id: i32) -> AppResult<bool>;

    /// 按邮箱查找会员并锁定该行
    async fn find_customer_for_update(&mut self, email: &str) -> AppResult<Option<Customer>>;

    async fn update_customer_points(&mut self, customer_id: i32, points: i32) -> AppResult<()>;

    /// 新建会员；邮箱已被其他事务占用时返回 None
    async fn insert_customer_if_absent(
        &mut self,
        customer: &NewCustomer,
        points: i32,
    ) -> AppResult<Option<Customer>>;

    /// 提交事务
    async fn commit(self: Box<Self>) -> AppResult<()>;

    /// 回滚事务
    async fn rollback(self: Box<Self>) -> AppResult<()>;
}

/// Unit of Work 工厂
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    /// 开始新的事务
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>>;
}
