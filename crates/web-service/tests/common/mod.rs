//! 集成测试公共代码
//!
//! 使用内存实现替换数据库仓库和 GitHub 客户端，路由和中间件与线上完全一致。

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use database::{
    ActivityCreate, ActivityLogRepositoryTrait, CommentCreate, CommentInfo, CommentRepositoryTrait, DatabaseError,
    DatabaseResult, ProjectCreate, ProjectInfo, ProjectRepositoryTrait, ProjectUpdate,
};
use github_client::{GithubApiTrait, GithubError, GithubResult};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::types::Json;
use tower::ServiceExt;
use uuid::Uuid;
use web_service::routes::create_app_router;
use web_service::AppState;

/// 单调递增的时间，保证排序稳定
#[derive(Default)]
struct TestClock(AtomicI64);

impl TestClock {
    fn tick(&self) -> DateTime<Utc> {
        let seconds = self.0.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
    }
}

// ---------------------------------------------------------------------------
// 项目仓库
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryProjects {
    rows: Mutex<Vec<ProjectInfo>>,
    clock: TestClock,
    writes: AtomicUsize,
}

impl InMemoryProjects {
    /// 所有行，包括已软删除的
    pub fn rows(&self) -> Vec<ProjectInfo> {
        self.rows.lock().unwrap().clone()
    }

    pub fn find(&self, id: Uuid) -> Option<ProjectInfo> {
        self.rows().into_iter().find(|p| p.id == id)
    }

    /// 写操作次数（创建/更新/软删除）
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectRepositoryTrait for InMemoryProjects {
    async fn list_live_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        let mut projects: Vec<_> = self.rows().into_iter().filter(ProjectInfo::is_live).collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let row = ProjectInfo {
            id: Uuid::new_v4(),
            name: project.name,
            title: project.title,
            description: project.description,
            project_type: project.project_type,
            status: project.status,
            category: project.category,
            progress: project.progress,
            icon: project.icon,
            content: Json(project.content),
            created_at: self.clock.tick(),
            deleted_at: None,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_project(&self, id: Uuid, update: ProjectUpdate) -> DatabaseResult<ProjectInfo> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DatabaseError::not_found("Project"))?;

        if let Some(name) = update.name {
            row.name = name;
        }
        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(description) = update.description {
            row.description = description;
        }
        if let Some(project_type) = update.project_type {
            row.project_type = project_type;
        }
        if let Some(status) = update.status {
            row.status = status;
        }
        if let Some(category) = update.category {
            row.category = category;
        }
        if let Some(progress) = update.progress {
            row.progress = progress;
        }
        if let Some(icon) = update.icon {
            row.icon = icon;
        }
        if let Some(content) = update.content {
            row.content = Json(content);
        }
        Ok(row.clone())
    }

    async fn soft_delete_project(&self, id: Uuid) -> DatabaseResult<u64> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let deleted_at = self.clock.tick();
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|p| p.id == id && p.is_live()) {
            Some(row) => {
                row.deleted_at = Some(deleted_at);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

// ---------------------------------------------------------------------------
// 评论仓库
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryComments {
    rows: Mutex<Vec<CommentInfo>>,
    clock: TestClock,
    writes: AtomicUsize,
}

impl InMemoryComments {
    pub fn rows(&self) -> Vec<CommentInfo> {
        self.rows.lock().unwrap().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommentRepositoryTrait for InMemoryComments {
    async fn list_comments(&self, project_id: Uuid) -> DatabaseResult<Vec<CommentInfo>> {
        let mut comments: Vec<_> = self.rows().into_iter().filter(|c| c.project_id == project_id).collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    async fn create_comment(&self, comment: CommentCreate) -> DatabaseResult<CommentInfo> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let row = CommentInfo {
            id: Uuid::new_v4(),
            project_id: comment.project_id,
            author: comment.author,
            text: comment.text,
            created_at: self.clock.tick(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn delete_comment(&self, id: Uuid) -> DatabaseResult<u64> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok((before - rows.len()) as u64)
    }
}

// ---------------------------------------------------------------------------
// 操作日志仓库
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryActivity {
    entries: Mutex<Vec<ActivityCreate>>,
    failing: bool,
}

impl InMemoryActivity {
    /// 每次写入都失败的实现
    pub fn failing() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn entries(&self) -> Vec<ActivityCreate> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActivityLogRepositoryTrait for InMemoryActivity {
    async fn record_activity(&self, activity: ActivityCreate) -> DatabaseResult<()> {
        if self.failing {
            return Err(DatabaseError::connection("activity_log unavailable"));
        }
        self.entries.lock().unwrap().push(activity);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GitHub
// ---------------------------------------------------------------------------

/// 固定返回值的 GitHub 实现
pub struct FakeGithub {
    repos: Value,
    tree: Vec<Value>,
    upstream_status: Option<u16>,
    calls: AtomicUsize,
}

impl FakeGithub {
    /// `repos` 为上游返回的原始 json，不是数组时按格式错误处理
    pub fn new(repos: Value, tree: Vec<Value>) -> Self {
        Self {
            repos,
            tree,
            upstream_status: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// 所有请求都返回指定的上游错误
    pub fn failing(status: u16) -> Self {
        Self {
            repos: Value::Null,
            tree: Vec::new(),
            upstream_status: Some(status),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check_upstream(&self) -> GithubResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.upstream_status {
            Some(status) => Err(GithubError::Upstream {
                status,
                message: "Bad credentials".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GithubApiTrait for FakeGithub {
    async fn list_user_repos(&self) -> GithubResult<Vec<Value>> {
        self.check_upstream()?;
        match &self.repos {
            Value::Array(repos) => Ok(repos.clone()),
            _ => Err(GithubError::InvalidResponse),
        }
    }

    async fn list_repo_tree(&self, _owner: &str, _repo: &str) -> GithubResult<Vec<Value>> {
        self.check_upstream()?;
        Ok(self.tree.clone())
    }
}

// ---------------------------------------------------------------------------
// 应用
// ---------------------------------------------------------------------------

pub struct TestApp {
    pub router: Router,
    pub projects: Arc<InMemoryProjects>,
    pub comments: Arc<InMemoryComments>,
    pub activity: Arc<InMemoryActivity>,
}

/// 默认测试应用：内存仓库，未配置 GitHub
pub fn build_test_app() -> TestApp {
    build_test_app_with(InMemoryActivity::default(), None)
}

pub fn build_test_app_with(activity: InMemoryActivity, github: Option<Arc<FakeGithub>>) -> TestApp {
    let projects = Arc::new(InMemoryProjects::default());
    let comments = Arc::new(InMemoryComments::default());
    let activity = Arc::new(activity);

    let state = AppState::new(
        projects.clone(),
        comments.clone(),
        activity.clone(),
        github.map(|g| g as Arc<dyn GithubApiTrait>),
    );

    TestApp {
        router: create_app_router(state),
        projects,
        comments,
        activity,
    }
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put_json(&self, uri: &str, body: Value) -> Response {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.request(Method::DELETE, uri, None).await
    }
}

/// 读取响应体并解析为json
pub async fn body_json(response: Response) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}
