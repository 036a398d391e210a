//! 项目仓库 trait 定义
//!
//! 定义项目数据库操作的抽象接口

use crate::models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
use crate::DatabaseResult;
use uuid::Uuid;

/// 项目仓库trait定义
///
/// 定义了项目相关的数据库操作接口，支持：
/// - 有效项目列表
/// - 项目创建
/// - 项目更新
/// - 项目软删除
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 查询所有未被软删除的项目
    ///
    /// # 返回值
    /// 按创建时间倒序排列的项目列表，没有数据时返回空列表
    async fn list_live_projects(&self) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 创建新项目
    ///
    /// # 参数
    /// - `project`: 项目创建信息
    ///
    /// # 返回值
    /// 返回创建的项目信息
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo>;

    /// 更新项目信息
    ///
    /// # 参数
    /// - `id`: 项目 ID
    /// - `update`: 更新信息，`None` 字段保持原值
    ///
    /// # 返回值
    /// 返回更新后的项目信息，项目不存在时返回 [`crate::DatabaseError::NotFound`]
    async fn update_project(&self, id: Uuid, update: ProjectUpdate) -> DatabaseResult<ProjectInfo>;

    /// 软删除项目
    ///
    /// 只写入 `deleted_at`，不会物理删除数据。
    ///
    /// # 返回值
    /// 受影响的行数，重复删除或 ID 不存在时为 0
    async fn soft_delete_project(&self, id: Uuid) -> DatabaseResult<u64>;
}
