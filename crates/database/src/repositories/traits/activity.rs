//! 操作日志仓库 trait 定义

use crate::models::activity::ActivityCreate;
use crate::DatabaseResult;

/// 操作日志仓库trait定义
///
/// 只追加，不提供查询
#[async_trait::async_trait]
pub trait ActivityLogRepositoryTrait: Send + Sync + 'static {
    /// 追加一条操作日志
    async fn record_activity(&self, activity: ActivityCreate) -> DatabaseResult<()>;
}
