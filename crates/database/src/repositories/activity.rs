//! 操作日志仓库

use crate::models::activity::ActivityCreate;
use crate::repositories::traits::ActivityLogRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// 操作日志仓库结构体
#[derive(Debug, Clone)]
pub struct ActivityLogRepository {
    pool: PgPool,
}

impl ActivityLogRepository {
    /// 创建新的操作日志仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ActivityLogRepositoryTrait for ActivityLogRepository {
    async fn record_activity(&self, activity: ActivityCreate) -> DatabaseResult<()> {
        debug!("🧾 记录操作日志: {} {}", activity.action, activity.project_id);

        sqlx::query(
            r#"
            INSERT INTO activity_log (project_id, action, description, user_name)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(activity.project_id)
        .bind(activity.action.as_str())
        .bind(activity.description)
        .bind(activity.user_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
