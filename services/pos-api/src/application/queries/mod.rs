//! 查询

mod menu_queries;
mod report_queries;

pub use menu_queries::*;
pub use report_queries::*;
