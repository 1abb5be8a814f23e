//! 报表查询接口（只读）

use async_trait::async_trait;
use chrono::NaiveDate;
use pos_common::DateRange;
use pos_errors::AppResult;

use crate::domain::entities::{HourlySales, InventoryLevel, ItemSales, OrderTotal, ProductUsage};

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// 指定日期已完成订单
    async fn completed_orders_on(&self, date: NaiveDate) -> AppResult<Vec<OrderTotal>>;

    /// 指定日期已完成订单按小时汇总
    async fn hourly_sales(&self, date: NaiveDate) -> AppResult<Vec<HourlySales>>;

    /// 区间内已完成订单的菜品销量
    async fn sales_by_item(&self, range: DateRange) -> AppResult<Vec<ItemSales>>;

    /// 区间内已完成订单的库存消耗
    async fn product_usage(&self, range: DateRange) -> AppResult<Vec<ProductUsage>>;

    /// 所有库存水位（按名称排序）
    async fn inventory_levels(&self) -> AppResult<Vec<InventoryLevel>>;
}
