//! 领域层
//!
//! 实体、枚举、会员积分规则、仓储接口和工作单元

pub mod entities;
pub mod enums;
pub mod loyalty;
pub mod repositories;
pub mod unit_of_work;

pub use entities::*;
pub use enums::*;
pub use repositories::*;
pub use unit_of_work::*;
