//! 评论仓库
//!
//! 负责评论相关的数据库操作

use crate::models::comment::{CommentCreate, CommentInfo};
use crate::repositories::traits::CommentRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

/// 评论仓库结构体
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// 创建新的评论仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CommentRepositoryTrait for CommentRepository {
    async fn list_comments(&self, project_id: Uuid) -> DatabaseResult<Vec<CommentInfo>> {
        debug!("🔍 查询项目 {} 的评论", project_id);

        let comments = sqlx::query_as::<_, CommentInfo>(
            r#"
            SELECT id, project_id, author, text, created_at
            FROM comments
            WHERE project_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 查询完成 - 找到 {} 条评论", comments.len());
        Ok(comments)
    }

    async fn create_comment(&self, comment: CommentCreate) -> DatabaseResult<CommentInfo> {
        debug!("📝 创建评论: {:#?}", comment);

        let comment = sqlx::query_as::<_, CommentInfo>(
            r#"
            INSERT INTO comments (project_id, author, text)
            VALUES ($1, $2, $3)
            RETURNING id, project_id, author, text, created_at
            "#,
        )
        .bind(comment.project_id)
        .bind(comment.author)
        .bind(comment.text)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 评论创建成功: {}", comment.id);
        Ok(comment)
    }

    async fn delete_comment(&self, id: Uuid) -> DatabaseResult<u64> {
        debug!("🗑️ 删除评论: {}", id);

        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
