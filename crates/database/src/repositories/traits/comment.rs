//! 评论仓库 trait 定义

use crate::models::comment::{CommentCreate, CommentInfo};
use crate::DatabaseResult;
use uuid::Uuid;

/// 评论仓库trait定义
#[async_trait::async_trait]
pub trait CommentRepositoryTrait: Send + Sync + 'static {
    /// 查询项目下的评论，按创建时间正序
    async fn list_comments(&self, project_id: Uuid) -> DatabaseResult<Vec<CommentInfo>>;

    /// 创建评论
    ///
    /// 项目是否存在由数据库外键保证
    async fn create_comment(&self, comment: CommentCreate) -> DatabaseResult<CommentInfo>;

    /// 物理删除评论，返回受影响的行数
    async fn delete_comment(&self, id: Uuid) -> DatabaseResult<u64>;
}
