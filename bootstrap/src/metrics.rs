//! Metrics 模块
//!
//! Prometheus 文本格式导出与连接池指标采集

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::State, routing::get};
use metrics::gauge;
use metrics_exporter_prometheus::PrometheusHandle;
use pos_adapter_postgres::PoolStatus;
use pos_errors::{AppError, AppResult};
use sqlx::PgPool;
use tokio::task::JoinHandle;
use tracing::debug;

/// Metrics 记录器
#[derive(Clone)]
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 Prometheus recorder（每个进程只能调用一次）
    pub fn install() -> AppResult<Self> {
        let handle = pos_telemetry::init_metrics()
            .map_err(|e| AppError::internal(format!("Failed to install metrics recorder: {}", e)))?;
        Ok(Self { handle })
    }

    pub fn from_handle(handle: PrometheusHandle) -> Self {
        Self { handle }
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// 记录连接池状态
pub fn record_pool_status(status: PoolStatus) {
    gauge!("pos_db_pool_size").set(status.size as f64);
    gauge!("pos_db_pool_idle").set(status.idle as f64);
    gauge!("pos_db_pool_active").set(status.active as f64);
}

/// 定时采集连接池状态
pub fn spawn_pool_collector(pool: PgPool, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            if pool.is_closed() {
                debug!("Pool closed, stopping metrics collector");
                break;
            }
            record_pool_status(PoolStatus::of(&pool));
        }
    })
}

/// /metrics 路由
pub fn metrics_routes(recorder: MetricsRecorder) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(Arc::new(recorder))
}

async fn metrics_handler(State(recorder): State<Arc<MetricsRecorder>>) -> String {
    recorder.render()
}
