//! 菜单查询

use serde::Deserialize;

use crate::application::commands::non_blank;

/// 菜单列表查询（`?type=` 可选）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuListQuery {
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

impl MenuListQuery {
    pub fn category(&self) -> Option<String> {
        non_blank(self.item_type.clone())
    }
}
