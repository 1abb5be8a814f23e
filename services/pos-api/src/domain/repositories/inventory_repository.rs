//! 库存仓储接口

use async_trait::async_trait;
use pos_errors::AppResult;
use rust_decimal::Decimal;

use crate::domain::entities::InventoryItem;

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn update_unit_cost(&self, id: i32, unit_cost: Decimal)
    -> AppResult<Option<InventoryItem>>;

    async fn delete_by_name(&self, name: &str) -> AppResult<bool>;

    /// 把低于阈值的库存补满，返回更新行数
    async fn restock_below_threshold(&self) -> AppResult<u64>;
}
