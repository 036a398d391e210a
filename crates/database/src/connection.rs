use crate::{DatabaseError, DatabaseResult};
use shared_lib::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;

/// 数据库连接池
pub type DatabasePool = Pool<Postgres>;

/// 获取连接的最长等待时间，超时后请求直接返回500
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// 空闲连接保留时间
const IDLE_TIMEOUT: Duration = Duration::from_secs(3600);

/// 连接最长存活时间
const MAX_LIFETIME: Duration = Duration::from_secs(3600 * 6);

/// 创建连接池，并执行 `migrations/` 下尚未执行的迁移
///
/// 连接池本身是引用计数的，直接 `.clone()` 给各个仓库使用即可。
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<DatabasePool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .test_before_acquire(true)
        .connect(&config.postgresql_conn_str)
        .await
        .map_err(|e| DatabaseError::connection(format!("连接PostgreSQL数据库失败: {e}")))?;

    info!("🗄️ 数据库连接池创建成功，最大连接数 {}", config.max_connections);

    run_migrations(&pool).await?;

    Ok(pool)
}

/// 建表：`projects` / `comments` / `activity_log`
async fn run_migrations(pool: &DatabasePool) -> DatabaseResult<()> {
    info!("🔄 开始执行数据库迁移...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| DatabaseError::migration(format!("数据库迁移失败: {e}")))?;

    info!("✅ 数据库迁移完成");
    Ok(())
}
