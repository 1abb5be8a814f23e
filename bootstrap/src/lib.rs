//! pos-bootstrap - 统一服务启动骨架
//!
//! 配置 → 日志 → 连接池 → 健康检查/指标 → HTTP 服务 → 优雅关闭 → 关闭连接池

mod health;
mod infrastructure;
mod metrics;
mod runtime;
mod starter;

pub use health::*;
pub use infrastructure::*;
pub use self::metrics::*;
pub use runtime::*;
pub use starter::*;
