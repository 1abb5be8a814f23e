//! 基础设施资源管理
//!
//! 进程启动时创建、关闭时显式释放的共享资源

use std::time::Duration;

use pos_adapter_postgres::{PostgresConfig, SslMode, close_pool, create_pool};
use pos_common::{RetryConfig, is_transient_error, with_retry};
use pos_config::AppConfig;
use pos_errors::AppResult;
use sqlx::PgPool;
use tracing::info;

/// 基础设施资源容器
#[derive(Clone)]
pub struct Infrastructure {
    config: AppConfig,
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（连接失败时带退避重试）
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let pg_config = Self::postgres_config(&config)?;
        let retry_config = RetryConfig::default();

        let postgres_pool = with_retry(
            &retry_config,
            "PostgreSQL connection",
            || {
                let cfg = pg_config.clone();
                async move { create_pool(&cfg).await }
            },
            |e| is_transient_error(&e.to_string()),
        )
        .await?;

        info!(
            max_connections = config.database.max_connections,
            "PostgreSQL connection pool created"
        );

        Ok(Self {
            config,
            postgres_pool,
        })
    }

    /// 根据应用配置构建 PostgreSQL 配置
    pub fn postgres_config(config: &AppConfig) -> AppResult<PostgresConfig> {
        let db = &config.database;
        let mut pg_config = PostgresConfig::from_components(&db.host, db.port, &db.name, &db.user)
            .with_ssl_mode(db.ssl_mode.parse::<SslMode>()?)
            .with_max_connections(db.max_connections)
            .with_acquire_timeout(Duration::from_secs(db.acquire_timeout_secs))
            .with_application_name(&config.app_name);
        if let Some(password) = db.password() {
            pg_config = pg_config.with_password(password);
        }
        Ok(pg_config)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取 PostgreSQL 连接池（内部为 Arc，克隆开销很小）
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    /// 释放资源
    pub async fn shutdown(self) {
        close_pool(&self.postgres_pool).await;
        info!("Infrastructure shut down");
    }
}
