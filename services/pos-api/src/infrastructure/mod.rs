//! 基础设施层

pub mod persistence;

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::Repositories;
use persistence::*;

/// 基于同一个连接池组装全部 PostgreSQL 仓储
pub fn postgres_repositories(pool: PgPool) -> Repositories {
    Repositories {
        menu: Arc::new(PostgresMenuRepository::new(pool.clone())),
        orders: Arc::new(PostgresOrderRepository::new(pool.clone())),
        employees: Arc::new(PostgresEmployeeRepository::new(pool.clone())),
        customers: Arc::new(PostgresCustomerRepository::new(pool.clone())),
        inventory: Arc::new(PostgresInventoryRepository::new(pool.clone())),
        reports: Arc::new(PostgresReportRepository::new(pool.clone())),
        uow_factory: Arc::new(PgUnitOfWorkFactory::new(pool)),
    }
}
