//! 菜单分类

use std::str::FromStr;

use pos_errors::AppError;
use serde::{Deserialize, Serialize};

/// 菜单分类（库中以小写文本存储）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Entree,
    Side,
    Appetizer,
    Drink,
    Dessert,
}

impl MenuCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Entree => "entree",
            MenuCategory::Side => "side",
            MenuCategory::Appetizer => "appetizer",
            MenuCategory::Drink => "drink",
            MenuCategory::Dessert => "dessert",
        }
    }

    /// 菜单展示顺序：主菜、配菜、其他
    pub fn menu_rank(category: &str) -> u8 {
        match category.parse::<MenuCategory>() {
            Ok(MenuCategory::Entree) => 1,
            Ok(MenuCategory::Side) => 2,
            _ => 3,
        }
    }

    /// 销售报表顺序：主菜、配菜、小吃、饮品、甜点、其他
    pub fn report_rank(category: &str) -> u8 {
        match category.parse::<MenuCategory>() {
            Ok(MenuCategory::Entree) => 1,
            Ok(MenuCategory::Side) => 2,
            Ok(MenuCategory::Appetizer) => 3,
            Ok(MenuCategory::Drink) => 4,
            Ok(MenuCategory::Dessert) => 5,
            Err(_) => 6,
        }
    }
}

impl FromStr for MenuCategory {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "entree" => Ok(MenuCategory::Entree),
            "side" => Ok(MenuCategory::Side),
            "appetizer" => Ok(MenuCategory::Appetizer),
            "drink" => Ok(MenuCategory::Drink),
            "dessert" => Ok(MenuCategory::Dessert),
            other => Err(AppError::validation(format!("Unknown menu item type: {}", other))),
        }
    }
}
