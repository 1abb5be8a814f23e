//! PostgreSQL 迁移管理模块
//!
//! 迁移 SQL 由服务内嵌（`include_str!`），启动时按版本顺序执行

use std::collections::HashMap;

use pos_errors::{AppError, AppResult};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use tracing::{info, warn};

/// 迁移记录
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MigrationRecord {
    pub version: i64,
    pub name: String,
    pub applied_at: chrono::DateTime<chrono::Utc>,
    pub checksum: String,
}

/// 迁移定义
#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub name: String,
    pub up_sql: String,
    pub checksum: String,
}

impl Migration {
    pub fn new(version: i64, name: impl Into<String>, up_sql: impl Into<String>) -> Self {
        let up_sql = up_sql.into();
        let checksum = Self::calculate_checksum(&up_sql);
        Self {
            version,
            name: name.into(),
            up_sql,
            checksum,
        }
    }

    /// SHA-256 校验和（跨编译器版本稳定）
    fn calculate_checksum(sql: &str) -> String {
        hex::encode(Sha256::digest(sql.as_bytes()))
    }
}

/// 迁移结果
#[derive(Debug, Clone, Default)]
pub struct MigrationResult {
    pub applied: Vec<i64>,
    pub skipped: Vec<i64>,
}

impl MigrationResult {
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }
}

/// 迁移管理器
pub struct MigrationManager {
    pool: PgPool,
    table_name: String,
}

impl MigrationManager {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            table_name: "_pos_migrations".to_string(),
        }
    }

    /// 初始化迁移表
    pub async fn init(&self) -> AppResult<()> {
        let create_sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                version BIGINT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                checksum VARCHAR(64) NOT NULL
            )
            "#,
            self.table_name
        );

        sqlx::query(&create_sql)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create migration table: {}", e)))?;

        Ok(())
    }

    /// 获取已应用的迁移
    pub async fn applied_migrations(&self) -> AppResult<Vec<MigrationRecord>> {
        let sql = format!(
            "SELECT version, name, applied_at, checksum FROM {} ORDER BY version ASC",
            self.table_name
        );

        sqlx::query_as::<_, MigrationRecord>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get migrations: {}", e)))
    }

    /// 在单个事务中应用一个迁移
    async fn apply(&self, migration: &Migration) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {}", e)))?;

        // 多语句脚本走 simple query 协议
        sqlx::raw_sql(&migration.up_sql)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::database(format!(
                    "Failed to apply migration {} ({}): {}",
                    migration.version, migration.name, e
                ))
            })?;

        let insert_sql = format!(
            "INSERT INTO {} (version, name, checksum) VALUES ($1, $2, $3)",
            self.table_name
        );
        sqlx::query(&insert_sql)
            .bind(migration.version)
            .bind(&migration.name)
            .bind(&migration.checksum)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to record migration: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit migration: {}", e)))?;

        info!(
            version = migration.version,
            name = %migration.name,
            "Migration applied"
        );
        Ok(())
    }

    /// 应用所有待处理的迁移
    ///
    /// 已应用迁移的校验和不一致时直接失败，不再继续
    pub async fn migrate(&self, migrations: &[Migration]) -> AppResult<MigrationResult> {
        self.init().await?;

        let applied: HashMap<i64, String> = self
            .applied_migrations()
            .await?
            .into_iter()
            .map(|record| (record.version, record.checksum))
            .collect();

        let mut result = MigrationResult::default();
        for migration in pending_order(migrations) {
            match applied.get(&migration.version) {
                Some(checksum) if *checksum == migration.checksum => {
                    result.skipped.push(migration.version);
                }
                Some(_) => {
                    warn!(version = migration.version, name = %migration.name, "Checksum mismatch");
                    return Err(AppError::internal(format!(
                        "Migration {} ({}) was modified after being applied",
                        migration.version, migration.name
                    )));
                }
                None => {
                    self.apply(migration).await?;
                    result.applied.push(migration.version);
                }
            }
        }

        info!(
            applied = result.applied_count(),
            skipped = result.skipped.len(),
            "Migrations complete"
        );
        Ok(result)
    }
}

/// 按版本升序排列
fn pending_order(migrations: &[Migration]) -> Vec<&Migration> {
    let mut sorted: Vec<_> = migrations.iter().collect();
    sorted.sort_by_key(|m| m.version);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_sha256_hex() {
        let m = Migration::new(1, "init", "CREATE TABLE t (id INT)");
        assert_eq!(m.checksum.len(), 64);
        assert!(m.checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_checksum_consistency() {
        let sql = "CREATE TABLE test (id INT)";
        assert_eq!(
            Migration::new(1, "a", sql).checksum,
            Migration::new(2, "b", sql).checksum
        );
        assert_ne!(
            Migration::new(1, "a", sql).checksum,
            Migration::new(1, "a", "CREATE TABLE test2 (id INT)").checksum
        );
    }

    #[test]
    fn test_pending_order_sorts_by_version() {
        let migrations = vec![
            Migration::new(3, "c", "SELECT 3"),
            Migration::new(1, "a", "SELECT 1"),
            Migration::new(2, "b", "SELECT 2"),
        ];
        let versions: Vec<i64> = pending_order(&migrations).iter().map(|m| m.version).collect();
        assert_eq!(versions, vec![1, 2, 3]);
    }
}
