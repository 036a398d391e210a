use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 未设置 `RUST_LOG` 时的默认日志级别
const DEFAULT_LOG_FILTER: &str = "project_hub=debug,web_service=debug,database=debug,github_client=debug,tower_http=info";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    let config = AppConfig::load()?;
    info!("📋 配置加载完成: {:?}", config.github);

    let pool = database::initialize_database(&config.database).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut web = tokio::spawn(web_service::start_web_service(config.clone(), pool, shutdown_rx));

    tokio::select! {
        // Web 服务提前退出（比如端口被占用）时直接返回错误
        result = &mut web => return result?,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("🛑 收到退出信号");
        }
    }

    shutdown_tx.send(true)?;
    web.await??;

    info!("👋 服务已退出");
    Ok(())
}
