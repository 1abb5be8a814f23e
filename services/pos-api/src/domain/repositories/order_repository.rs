//! 订单仓储接口（事务外的读写）
//!
//! 下单走 `UnitOfWork`

use async_trait::async_trait;
use pos_errors::AppResult;

use crate::domain::entities::{Order, OrderItem, OrderMenuItem, OrderStatusView, PendingOrder};
use crate::domain::enums::OrderStatus;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, order_id: i32) -> AppResult<Option<Order>>;

    /// 指定状态的订单及菜品名
    async fn list_pending(&self) -> AppResult<Vec<PendingOrder>>;

    /// 仅当订单当前状态在 `from` 中时更新；未更新返回 None
    async fn update_status(
        &self,
        order_id: i32,
        status: OrderStatus,
        from: &[OrderStatus],
    ) -> AppResult<Option<Order>>;

    /// 所有订单状态（新订单在前）
    async fn list_statuses(&self) -> AppResult<Vec<OrderStatusView>>;

    async fn menu_items_of_order(&self, order_id: i32) -> AppResult<Vec<OrderMenuItem>>;

    /// 删除订单中指定菜品的行，返回第一条被删除的行
    async fn delete_order_item(
        &self,
        order_id: i32,
        menu_item_id: i32,
    ) -> AppResult<Option<OrderItem>>;
}
