//! 持久化层

mod migrations;
mod postgres;
mod rows;
mod unit_of_work;

pub use migrations::{run_migrations, schema_migrations};
pub use postgres::{
    PostgresCustomerRepository, PostgresEmployeeRepository, PostgresInventoryRepository,
    PostgresMenuRepository, PostgresOrderRepository, PostgresReportRepository,
};
pub use unit_of_work::{PgUnitOfWork, PgUnitOfWorkFactory};

use pos_errors::AppError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// 约束冲突类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    Unique,
    ForeignKey,
}

/// 识别唯一约束/外键约束冲突
pub(crate) fn violation(e: &sqlx::Error) -> Option<Violation> {
    let code = e.as_database_error()?.code()?;
    match code.as_ref() {
        UNIQUE_VIOLATION => Some(Violation::Unique),
        FOREIGN_KEY_VIOLATION => Some(Violation::ForeignKey),
        _ => None,
    }
}

pub(crate) fn db_error(context: &str, e: sqlx::Error) -> AppError {
    AppError::database(format!("{}失败: {}", context, e))
}
