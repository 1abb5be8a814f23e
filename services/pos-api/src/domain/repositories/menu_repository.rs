//! 菜单仓储接口

use async_trait::async_trait;
use pos_errors::AppResult;

use crate::domain::entities::{
    MenuFlag, MenuItem, MenuItemInfo, MenuItemName, MenuItemSummary, MenuPrices, NewMenuItem,
    Promo,
};

#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// 根据 ID 查找菜单项
    async fn find_by_id(&self, id: i32) -> AppResult<Option<MenuItem>>;

    /// 在售菜单项（按 ID 升序）
    async fn list_active(&self) -> AppResult<Vec<MenuItemSummary>>;

    /// 指定分类的菜单项
    async fn list_by_category(&self, category: &str) -> AppResult<Vec<MenuItemSummary>>;

    /// 带指定标记的菜品名称
    async fn names_with_flag(&self, flag: MenuFlag) -> AppResult<Vec<MenuItemName>>;

    /// 菜品详情与过敏原，可按名称过滤
    async fn menu_info(&self, name: Option<&str>) -> AppResult<Vec<MenuItemInfo>>;

    /// 按名称（忽略大小写）查找价格
    async fn find_prices_by_name(&self, name: &str) -> AppResult<Option<MenuPrices>>;

    async fn find_id_by_name(&self, name: &str) -> AppResult<Option<i32>>;

    /// 新增菜单项，返回数据库生成的 ID
    async fn insert(&self, item: &NewMenuItem) -> AppResult<i32>;

    /// 按名称下架，返回是否命中
    async fn deactivate_by_name(&self, name: &str) -> AppResult<bool>;

    async fn update_calories(&self, id: i32, calories: i32) -> AppResult<Option<MenuItem>>;

    /// 在售菜品的促销
    async fn active_promos(&self) -> AppResult<Vec<Promo>>;
}
