//! 内嵌的数据库迁移

use pos_adapter_postgres::{Migration, MigrationManager, MigrationResult};
use pos_errors::AppResult;
use sqlx::PgPool;

/// 按版本排列的建表脚本
pub fn schema_migrations() -> Vec<Migration> {
    vec![Migration::new(
        1,
        "create_schema",
        include_str!("../../../migrations/0001_create_schema.sql"),
    )]
}

/// 执行未应用的迁移
pub async fn run_migrations(pool: &PgPool) -> AppResult<MigrationResult> {
    MigrationManager::new(pool.clone())
        .migrate(&schema_migrations())
        .await
}
