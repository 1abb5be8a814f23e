//! 菜单项实体

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::enums::{ItemSize, MenuCategory};

/// 套餐规格默认价格（新增菜单项未指定时使用）
pub const DEFAULT_BOWL_PRICE: Decimal = Decimal::from_parts(415, 0, 0, false, 2);
pub const DEFAULT_PLATE_PRICE: Decimal = Decimal::from_parts(490, 0, 0, false, 2);
pub const DEFAULT_BIGGER_PLATE_PRICE: Decimal = Decimal::from_parts(565, 0, 0, false, 2);

/// 高级菜品的小份价格
pub const PREMIUM_SMALL_PRICE: Decimal = Decimal::from_parts(670, 0, 0, false, 2);

/// 菜单项（完整行）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub menu_item_id: i32,
    pub menu_item_name: String,
    pub menu_item_type: String,
    pub menu_item_description: Option<String>,
    pub menu_item_spice: bool,
    pub menu_item_woksmart: bool,
    pub menu_item_calories: Option<i32>,
    pub menu_price_small: Option<Decimal>,
    pub menu_price_medium: Option<Decimal>,
    pub menu_price_large: Option<Decimal>,
    pub menu_price_bowl: Option<Decimal>,
    pub menu_price_plate: Option<Decimal>,
    pub menu_price_bplate: Option<Decimal>,
    pub menu_item_status: bool,
}

impl MenuItem {
    pub fn prices(&self) -> MenuPrices {
        MenuPrices {
            small: self.menu_price_small,
            medium: self.menu_price_medium,
            large: self.menu_price_large,
            bowl: self.menu_price_bowl,
            plate: self.menu_price_plate,
            bigger_plate: self.menu_price_bplate,
        }
    }

    pub fn summary(&self) -> MenuItemSummary {
        MenuItemSummary {
            menu_item_id: self.menu_item_id,
            menu_item_name: self.menu_item_name.clone(),
            menu_item_type: self.menu_item_type.clone(),
            menu_item_spice: self.menu_item_spice,
            menu_item_woksmart: self.menu_item_woksmart,
            menu_item_calories: self.menu_item_calories,
        }
    }

    pub fn has_flag(&self, flag: MenuFlag) -> bool {
        match flag {
            MenuFlag::Spicy => self.menu_item_spice,
            MenuFlag::WokSmart => self.menu_item_woksmart,
            MenuFlag::Premium => self.menu_price_small == Some(PREMIUM_SMALL_PRICE),
        }
    }
}

/// 菜单列表项
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemSummary {
    pub menu_item_id: i32,
    pub menu_item_name: String,
    pub menu_item_type: String,
    pub menu_item_spice: bool,
    pub menu_item_woksmart: bool,
    pub menu_item_calories: Option<i32>,
}

/// 仅名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItemName {
    pub menu_item_name: String,
}

/// 菜单筛选标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFlag {
    /// 辣
    Spicy,
    /// Wok Smart 健康系列
    WokSmart,
    /// 高级菜品（小份价格 6.70）
    Premium,
}

/// 菜单详情（含过敏原）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemInfo {
    pub menu_item_name: String,
    pub menu_item_description: Option<String>,
    pub menu_item_calories: Option<i32>,
    pub allergens: Vec<String>,
}

/// 各规格价格
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MenuPrices {
    pub small: Option<Decimal>,
    pub medium: Option<Decimal>,
    pub large: Option<Decimal>,
    pub bowl: Option<Decimal>,
    pub plate: Option<Decimal>,
    pub bigger_plate: Option<Decimal>,
}

impl MenuPrices {
    pub fn price_for(&self, size: ItemSize) -> Option<Decimal> {
        match size {
            ItemSize::Small => self.small,
            ItemSize::Medium => self.medium,
            ItemSize::Large => self.large,
            ItemSize::Bowl => self.bowl,
            ItemSize::Plate => self.plate,
            ItemSize::BiggerPlate => self.bigger_plate,
        }
    }
}

/// 新菜单项
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
    pub name: String,
    pub category: MenuCategory,
    pub description: Option<String>,
    pub spicy: bool,
    pub wok_smart: bool,
    pub calories: Option<i32>,
    pub prices: MenuPrices,
    pub active: bool,
}
