//! 评论服务

use crate::services::activity::record_best_effort;
use database::{
    ActivityAction, ActivityCreate, ActivityLogRepositoryTrait, CommentCreate, CommentInfo, CommentRepositoryTrait,
    DatabaseResult,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone)]
pub struct CommentService {
    comment_repository: Arc<dyn CommentRepositoryTrait>,
    activity_repository: Arc<dyn ActivityLogRepositoryTrait>,
}

impl CommentService {
    pub fn new(
        comment_repository: Arc<dyn CommentRepositoryTrait>,
        activity_repository: Arc<dyn ActivityLogRepositoryTrait>,
    ) -> Self {
        Self {
            comment_repository,
            activity_repository,
        }
    }

    pub async fn list_comments(&self, project_id: Uuid) -> DatabaseResult<Vec<CommentInfo>> {
        self.comment_repository.list_comments(project_id).await
    }

    /// 创建评论并记录 `COMMENT` 日志，操作人为评论作者
    pub async fn create_comment(&self, comment: CommentCreate) -> DatabaseResult<CommentInfo> {
        let comment = self.comment_repository.create_comment(comment).await?;

        record_best_effort(
            self.activity_repository.as_ref(),
            ActivityCreate {
                project_id: comment.project_id,
                action: ActivityAction::Comment,
                description: format!("{} commented", comment.author),
                user_name: comment.author.clone(),
            },
        )
        .await;

        Ok(comment)
    }

    /// 物理删除评论，不写操作日志
    pub async fn delete_comment(&self, id: Uuid) -> DatabaseResult<()> {
        let affected = self.comment_repository.delete_comment(id).await?;
        if affected == 0 {
            debug!("评论 {} 不存在", id);
        }
        Ok(())
    }
}
