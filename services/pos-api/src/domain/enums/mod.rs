//! 枚举模块

mod item_size;
mod menu_category;
mod order_status;

pub use item_size::ItemSize;
pub use menu_category::MenuCategory;
pub use order_status::OrderStatus;
