//! 菜单命令

use pos_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{amount_in_range, non_blank, required_id, required_text};
use crate::domain::entities::{
    DEFAULT_BIGGER_PLATE_PRICE, DEFAULT_BOWL_PRICE, DEFAULT_PLATE_PRICE, MenuPrices, NewMenuItem,
};
use crate::domain::enums::MenuCategory;

/// 新增菜单项命令
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMenuItemCommand {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub description: Option<String>,
    pub spice: Option<bool>,
    pub woksmart: Option<bool>,
    pub calories: Option<i32>,
    pub price_small: Option<Decimal>,
    pub price_medium: Option<Decimal>,
    pub price_large: Option<Decimal>,
    pub price_bowl: Option<Decimal>,
    pub price_plate: Option<Decimal>,
    pub price_bigger_plate: Option<Decimal>,
    pub status: Option<bool>,
}

impl AddMenuItemCommand {
    /// 校验并填充套餐规格默认价格
    pub fn into_new_menu_item(self) -> AppResult<NewMenuItem> {
        let name = required_text(self.name, "name")?;
        let category = required_text(self.item_type, "type")?.parse::<MenuCategory>()?;

        if let Some(calories) = self.calories {
            if calories < 0 {
                return Err(AppError::validation("calories must not be negative"));
            }
        }

        let prices = MenuPrices {
            small: self.price_small,
            medium: self.price_medium,
            large: self.price_large,
            bowl: Some(self.price_bowl.unwrap_or(DEFAULT_BOWL_PRICE)),
            plate: Some(self.price_plate.unwrap_or(DEFAULT_PLATE_PRICE)),
            bigger_plate: Some(self.price_bigger_plate.unwrap_or(DEFAULT_BIGGER_PLATE_PRICE)),
        };
        let all_prices = [
            prices.small,
            prices.medium,
            prices.large,
            prices.bowl,
            prices.plate,
            prices.bigger_plate,
        ];
        for price in all_prices.into_iter().flatten() {
            amount_in_range(price, "prices")?;
        }

        Ok(NewMenuItem {
            name,
            category,
            description: non_blank(self.description),
            spicy: self.spice.unwrap_or(false),
            wok_smart: self.woksmart.unwrap_or(false),
            calories: self.calories,
            prices,
            active: self.status.unwrap_or(true),
        })
    }
}

/// 下架菜单项命令
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoveMenuItemCommand {
    pub name: Option<String>,
}

/// 修改热量命令
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetCaloriesCommand {
    pub id: Option<i32>,
    pub calories: Option<i32>,
}

impl SetCaloriesCommand {
    pub fn validate(&self) -> AppResult<(i32, i32)> {
        let id = required_id(self.id, "id")?;
        match self.calories {
            Some(calories) if calories >= 0 => Ok((id, calories)),
            Some(_) => Err(AppError::validation("calories must not be negative")),
            None => Err(AppError::validation("calories is required")),
        }
    }
}
