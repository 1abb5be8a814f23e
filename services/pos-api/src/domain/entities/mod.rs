//! 实体模块

mod customer;
mod employee;
mod inventory;
mod menu_item;
mod order;
mod promo;
mod report;

pub use customer::{Customer, NewCustomer};
pub use employee::{Employee, NewEmployee};
pub use inventory::{InventoryItem, InventoryLevel};
pub use menu_item::{
    DEFAULT_BIGGER_PLATE_PRICE, DEFAULT_BOWL_PRICE, DEFAULT_PLATE_PRICE, MenuFlag, MenuItem,
    MenuItemInfo, MenuItemName, MenuItemSummary, MenuPrices, NewMenuItem, PREMIUM_SMALL_PRICE,
};
pub use order::{
    NewOrder, Order, OrderItem, OrderLine, OrderMenuItem, OrderStatusView, PendingOrder,
};
pub use promo::Promo;
pub use report::{HourlySales, ItemSales, OrderTotal, ProductUsage};
