//! 评论数据库模型

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 评论信息，对应 `comments` 表的一行
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentInfo {
    pub id: Uuid,
    pub project_id: Uuid,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// 评论创建参数
#[derive(Debug, Clone)]
pub struct CommentCreate {
    pub project_id: Uuid,
    pub author: String,
    pub text: String,
}
