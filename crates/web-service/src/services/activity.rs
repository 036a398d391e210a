//! 操作日志写入
//!
//! 操作日志只是附带记录：写入失败只打日志，不影响主操作的结果

use database::{ActivityCreate, ActivityLogRepositoryTrait};
use tracing::warn;

/// 写入一条操作日志，失败时只记录 `warn` 日志
pub async fn record_best_effort(repository: &dyn ActivityLogRepositoryTrait, activity: ActivityCreate) {
    let project_id = activity.project_id;
    let action = activity.action;

    if let Err(err) = repository.record_activity(activity).await {
        warn!(%project_id, %action, error = %err, "⚠️ 操作日志写入失败，已忽略");
    }
}
