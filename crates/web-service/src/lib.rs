//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use color_eyre::eyre::Context;
use color_eyre::Result;
use database::{
    ActivityLogRepository, ActivityLogRepositoryTrait, CommentRepository, CommentRepositoryTrait, DatabasePool,
    ProjectRepository, ProjectRepositoryTrait,
};
use github_client::{GithubApiTrait, GithubClient};
use services::{CommentService, ProjectService};
use shared_lib::{AppConfig, GithubConfig};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;
pub mod services;

/// 应用共享状态
///
/// 所有外部依赖都在启动时构造好注入进来，handler 之间没有共享的可变状态。
#[derive(Clone)]
pub struct AppState {
    pub projects: ProjectService,
    pub comments: CommentService,

    /// 未配置令牌时为 `None`，GitHub 接口直接返回配置错误
    pub github: Option<Arc<dyn GithubApiTrait>>,
}

impl AppState {
    pub fn new(
        project_repository: Arc<dyn ProjectRepositoryTrait>,
        comment_repository: Arc<dyn CommentRepositoryTrait>,
        activity_repository: Arc<dyn ActivityLogRepositoryTrait>,
        github: Option<Arc<dyn GithubApiTrait>>,
    ) -> Self {
        Self {
            projects: ProjectService::new(project_repository, activity_repository.clone()),
            comments: CommentService::new(comment_repository, activity_repository),
            github,
        }
    }

    /// 使用 PostgreSQL 仓库和真实的 GitHub 客户端创建状态
    pub fn from_pool(pool: DatabasePool, github_config: &GithubConfig) -> Result<Self> {
        let github = match &github_config.token {
            Some(token) => {
                let client = GithubClient::new(github_config.api_url.as_str(), token.as_str())
                    .context("Failed to build GitHub client")?;
                Some(Arc::new(client) as Arc<dyn GithubApiTrait>)
            }
            None => None,
        };

        Ok(Self::new(
            Arc::new(ProjectRepository::new(pool.clone())),
            Arc::new(CommentRepository::new(pool.clone())),
            Arc::new(ActivityLogRepository::new(pool)),
            github,
        ))
    }
}

/// 启动 Web 服务
pub async fn start_web_service(
    config: Arc<AppConfig>,
    pool: DatabasePool,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()> {
    let shared_state = AppState::from_pool(pool, &config.github)?;

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端被丢弃时同样视为关闭信号
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
