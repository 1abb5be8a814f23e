//! pos-api 服务入口

use std::sync::Arc;

use pos_bootstrap::{run, Infrastructure};
use tracing::info;

use pos_api::api;
use pos_api::application::ServiceHandler;
use pos_api::infrastructure::{persistence::run_migrations, postgres_repositories};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 本地开发时从 .env 读取 DB_* 变量
    dotenvy::dotenv().ok();

    run("config", |infra: Infrastructure| async move {
        info!("Initializing pos-api...");

        let pool = infra.postgres_pool();
        if infra.config().database.run_migrations {
            run_migrations(&pool).await?;
        }

        let handler = Arc::new(ServiceHandler::new(postgres_repositories(pool)));
        info!("Repositories initialized");

        Ok(api::router(handler))
    })
    .await?;

    Ok(())
}
