//! 项目服务
//!
//! 提供项目相关的业务逻辑操作

use crate::services::activity::record_best_effort;
use database::{
    ActivityAction, ActivityCreate, ActivityLogRepositoryTrait, DatabaseResult, ProjectCreate, ProjectInfo,
    ProjectRepositoryTrait, ProjectUpdate,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// 系统操作的用户名
const SYSTEM_USER: &str = "System";

#[derive(Clone)]
pub struct ProjectService {
    project_repository: Arc<dyn ProjectRepositoryTrait>,
    activity_repository: Arc<dyn ActivityLogRepositoryTrait>,
}

impl ProjectService {
    pub fn new(
        project_repository: Arc<dyn ProjectRepositoryTrait>,
        activity_repository: Arc<dyn ActivityLogRepositoryTrait>,
    ) -> Self {
        Self {
            project_repository,
            activity_repository,
        }
    }

    /// 所有有效项目，按创建时间倒序
    pub async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        self.project_repository.list_live_projects().await
    }

    /// 创建项目并记录 `CREATE` 日志
    pub async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        let project = self.project_repository.create_project(project).await?;

        record_best_effort(
            self.activity_repository.as_ref(),
            ActivityCreate {
                project_id: project.id,
                action: ActivityAction::Create,
                description: format!("Project created: {}", project.title),
                user_name: SYSTEM_USER.to_string(),
            },
        )
        .await;

        Ok(project)
    }

    /// 更新项目并记录 `UPDATE` 日志
    pub async fn update_project(&self, id: Uuid, update: ProjectUpdate) -> DatabaseResult<ProjectInfo> {
        let project = self.project_repository.update_project(id, update).await?;

        record_best_effort(
            self.activity_repository.as_ref(),
            ActivityCreate {
                project_id: id,
                action: ActivityAction::Update,
                description: "Project updated".to_string(),
                user_name: SYSTEM_USER.to_string(),
            },
        )
        .await;

        Ok(project)
    }

    /// 软删除项目
    ///
    /// 删除不写操作日志
    pub async fn delete_project(&self, id: Uuid) -> DatabaseResult<()> {
        let affected = self.project_repository.soft_delete_project(id).await?;
        if affected == 0 {
            debug!("项目 {} 不存在或已删除", id);
        }
        Ok(())
    }
}
