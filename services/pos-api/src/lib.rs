//! pos-api - 餐厅 POS 后端服务
//!
//! 点餐下单、库存扣减、会员积分、员工与菜单维护以及经营报表

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
