//! 服务启动器
//!
//! 统一 HTTP 服务的启动流程，业务服务只需提供路由构建函数

use std::future::Future;
use std::time::Duration;

use axum::Router;
use pos_config::AppConfig;
use pos_errors::{AppError, AppResult};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::health::{HealthChecker, health_routes};
use crate::infrastructure::Infrastructure;
use crate::metrics::{MetricsRecorder, metrics_routes, spawn_pool_collector};
use crate::runtime::{init_runtime, shutdown_signal};

const POOL_METRICS_INTERVAL: Duration = Duration::from_secs(15);

/// 组装完整应用：业务路由 + 健康检查 + metrics + 通用中间件
pub fn build_app(routes: Router, infra: &Infrastructure, metrics: Option<MetricsRecorder>) -> Router {
    let mut app = routes.merge(health_routes(HealthChecker::new(infra.postgres_pool())));
    if let Some(recorder) = metrics {
        app = app.merge(metrics_routes(recorder));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// 启动 HTTP 服务
///
/// `build_routes` 接收已初始化的基础设施，返回业务路由
pub async fn run<F, Fut>(config_dir: &str, build_routes: F) -> AppResult<()>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)
        .map_err(|e| AppError::internal(format!("Failed to load config: {}", e)))?;

    // 2. 日志
    init_runtime(&config);

    // 3. Metrics
    let metrics = MetricsRecorder::install()?;

    // 4. 基础设施
    let infra = Infrastructure::from_config(config.clone()).await?;
    let collector = spawn_pool_collector(infra.postgres_pool(), POOL_METRICS_INTERVAL);

    // 5. 业务路由
    let routes = build_routes(infra.clone()).await?;
    let app = build_app(routes, &infra, Some(metrics));

    // 6. 监听
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    info!(app_name = %config.app_name, %addr, "HTTP server listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)));

    // 7. 无论服务如何退出都释放资源
    collector.abort();
    infra.shutdown().await;
    match &served {
        Ok(()) => info!(app_name = %config.app_name, "Server stopped"),
        Err(e) => error!(app_name = %config.app_name, error = %e, "Server exited with error"),
    }

    served
}
