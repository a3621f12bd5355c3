use anyhow::Context;
use std::env;
use std::path::PathBuf;
use tokio::{net::TcpListener, signal};
use tracing::info;

use user_service::{
    create_app,
    infrastructure::{
        config::{self, locate_config},
        database::DatabaseManager,
        logger::Logger,
    },
    UserService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = locate_config(config_path_arg());
    let config = config::load_config(config_path.as_deref()).context("加载配置失败")?;

    Logger::init(&config.logging.level);

    match &config_path {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let database = DatabaseManager::new(&config.database)
        .await
        .context("Failed to connect to database")?;

    let user_service = UserService::new(database.store());
    user_service
        .prepare(config.database.seed_default_user)
        .await
        .context("Failed to prepare users table")?;

    let app = create_app(user_service, &config.cors);

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("🚀 User service running on http://{}", listener.local_addr()?);
    info!("   GET    /user        - List users");
    info!("   GET    /user/:name  - Get user by name");
    info!("   POST   /user        - Create user");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("User service stopped");
    Ok(())
}

/// 解析 `--config <path>` 参数
fn config_path_arg() -> Option<PathBuf> {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    None
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl+c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
