//! 项目仓库
//!
//! 负责项目相关的数据库操作

use crate::models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

/// 项目仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    /// 查询所有有效项目
    ///
    /// `deleted_at` 不为空的项目已被软删除，不会出现在结果里。
    async fn list_live_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        debug!("🔍 查询有效项目列表");

        let projects = sqlx::query_as::<_, ProjectInfo>(
            r#"
            SELECT id, name, title, description, project_type, status, category,
                   progress, icon, content, created_at, deleted_at
            FROM projects
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 查询完成 - 找到 {} 个项目", projects.len());
        Ok(projects)
    }

    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        debug!("📝 创建项目: {:#?}", project);

        let project_info = sqlx::query_as::<_, ProjectInfo>(
            r#"
            INSERT INTO projects (name, title, description, project_type, status, category, progress, icon, content)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, title, description, project_type, status, category,
                      progress, icon, content, created_at, deleted_at
            "#,
        )
        .bind(project.name)
        .bind(project.title)
        .bind(project.description)
        .bind(project.project_type)
        .bind(project.status)
        .bind(project.category)
        .bind(project.progress)
        .bind(project.icon)
        .bind(Json(project.content))
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 项目创建成功: {}", project_info.id);
        Ok(project_info)
    }

    /// 更新项目信息
    ///
    /// ## SQL
    ///
    /// 由于更新数据中的字段都是[`Option`]，因此我们使用了`postgresql`中的`coalesce`函数，如果用户输入的值
    /// 为None，那么会被转换为数据库的null，最终被转换为之前值。
    async fn update_project(&self, id: Uuid, update: ProjectUpdate) -> DatabaseResult<ProjectInfo> {
        debug!("🔄 更新项目 {} 信息: {:#?}", id, update);

        let project = sqlx::query_as::<_, ProjectInfo>(
            r#"
            UPDATE projects
            SET name = coalesce($2, name),
                title = coalesce($3, title),
                description = coalesce($4, description),
                project_type = coalesce($5, project_type),
                status = coalesce($6, status),
                category = coalesce($7, category),
                progress = coalesce($8, progress),
                icon = coalesce($9, icon),
                content = coalesce($10, content)
            WHERE id = $1
            RETURNING id, name, title, description, project_type, status, category,
                      progress, icon, content, created_at, deleted_at
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.title)
        .bind(update.description)
        .bind(update.project_type)
        .bind(update.status)
        .bind(update.category)
        .bind(update.progress)
        .bind(update.icon)
        .bind(update.content.map(Json))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Project"))?;

        debug!("✅ 项目更新成功: {}", project.id);
        Ok(project)
    }

    async fn soft_delete_project(&self, id: Uuid) -> DatabaseResult<u64> {
        debug!("🗑️ 软删除项目: {}", id);

        // 已删除的项目保留第一次删除的时间
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET deleted_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        debug!("✅ 项目软删除完成，影响 {} 行", result.rows_affected());
        Ok(result.rows_affected())
    }
}
