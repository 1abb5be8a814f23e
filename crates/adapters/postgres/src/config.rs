//! PostgreSQL 配置模块
//!
//! 按组件（host/port/user/password/database）描述连接，与 `DB_*` 环境变量对应

use std::str::FromStr;
use std::time::Duration;

use pos_errors::AppError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// SSL 模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SslMode {
    /// 禁用 SSL
    Disable,
    /// 允许 SSL（如果服务器支持）
    #[default]
    Prefer,
    /// 要求 SSL
    Require,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
        }
    }

    fn to_pg(self) -> PgSslMode {
        match self {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
        }
    }
}

impl FromStr for SslMode {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "disable" => Ok(SslMode::Disable),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            other => Err(AppError::internal(format!("Unknown sslmode: {}", other))),
        }
    }
}

/// PostgreSQL 配置
#[derive(Clone)]
pub struct PostgresConfig {
    /// 主机
    pub host: String,
    /// 端口
    pub port: u16,
    /// 数据库名
    pub database: String,
    /// 用户名
    pub username: String,
    /// 密码
    pub password: Option<String>,
    /// SSL 模式
    pub ssl_mode: SslMode,
    /// 最小连接数
    pub pool_min: u32,
    /// 最大连接数
    pub pool_max: u32,
    /// 获取连接超时
    pub acquire_timeout: Duration,
    /// 空闲超时
    pub idle_timeout: Duration,
    /// 连接最大生命周期
    pub max_lifetime: Option<Duration>,
    /// 应用名称（用于连接标识）
    pub application_name: Option<String>,
}

impl std::fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("ssl_mode", &self.ssl_mode)
            .field("pool_min", &self.pool_min)
            .field("pool_max", &self.pool_max)
            .field("application_name", &self.application_name)
            .finish()
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "postgres".to_string(),
            username: "postgres".to_string(),
            password: None,
            ssl_mode: SslMode::default(),
            pool_min: 1,
            pool_max: 10,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Some(Duration::from_secs(1800)),
            application_name: None,
        }
    }
}

impl PostgresConfig {
    /// 从组件创建配置
    pub fn from_components(
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            database: database.into(),
            username: username.into(),
            ..Default::default()
        }
    }

    /// 设置密码
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// 设置 SSL 模式
    pub fn with_ssl_mode(mut self, mode: SslMode) -> Self {
        self.ssl_mode = mode;
        self
    }

    /// 设置连接池配置
    pub fn with_pool(mut self, min: u32, max: u32) -> Self {
        self.pool_min = min.min(max);
        self.pool_max = max;
        self
    }

    /// 设置最大连接数
    pub fn with_max_connections(self, max: u32) -> Self {
        let min = self.pool_min;
        self.with_pool(min, max)
    }

    /// 设置获取连接超时
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// 设置应用名称
    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// 构建 sqlx 连接选项（密码不经过 URL 编码）
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .database(&self.database)
            .ssl_mode(self.ssl_mode.to_pg());

        if let Some(ref password) = self.password {
            options = options.password(password);
        }
        if let Some(ref app_name) = self.application_name {
            options = options.application_name(app_name);
        }

        options
    }

    /// 用于日志的连接描述（不含密码）
    pub fn display_target(&self) -> String {
        format!(
            "postgres://{}@{}:{}/{}?sslmode={}",
            self.username,
            self.host,
            self.port,
            self.database,
            self.ssl_mode.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PostgresConfig::default();
        assert_eq!(config.pool_min, 1);
        assert_eq!(config.pool_max, 10);
        assert_eq!(config.ssl_mode, SslMode::Prefer);
        assert_eq!(config.port, 5432);
    }

    #[test]
    fn test_config_from_components() {
        let config = PostgresConfig::from_components("db.example.com", 5433, "restaurant", "pos")
            .with_password("p@ss/word")
            .with_max_connections(20)
            .with_application_name("pos-api");

        assert_eq!(config.host, "db.example.com");
        assert_eq!(config.port, 5433);
        assert_eq!(config.database, "restaurant");
        assert_eq!(config.pool_max, 20);
        assert_eq!(config.password.as_deref(), Some("p@ss/word"));
        assert_eq!(config.application_name.as_deref(), Some("pos-api"));
    }

    #[test]
    fn test_parse_ssl_mode() {
        assert_eq!("Require".parse::<SslMode>().unwrap(), SslMode::Require);
        assert_eq!("disable".parse::<SslMode>().unwrap(), SslMode::Disable);
        assert!("verify-full".parse::<SslMode>().is_err());
    }

    #[test]
    fn test_pool_min_never_exceeds_max() {
        let config = PostgresConfig::default().with_pool(8, 4);
        assert_eq!(config.pool_min, 4);
        assert_eq!(config.pool_max, 4);
    }

    #[test]
    fn test_debug_and_target_hide_password() {
        let config = PostgresConfig::from_components("localhost", 5432, "pos", "pos")
            .with_password("hunter2")
            .with_ssl_mode(SslMode::Require);

        assert!(!format!("{:?}", config).contains("hunter2"));
        let target = config.display_target();
        assert!(!target.contains("hunter2"));
        assert!(target.ends_with("sslmode=require"));
    }
}
