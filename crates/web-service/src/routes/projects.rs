//! 项目相关接口
//!
//! 同一个路径 `/projects` 下按 method 区分操作，和前端约定一致

use crate::models::common::{Reply, ReplyError, ReplyList, ReplyMessage};
use crate::models::err::AppError;
use crate::models::projects::{ProjectCreate, ProjectIdQuery, ProjectInfo, ProjectUpdate, PROJECT_ID_REQUIRED};
use crate::routes::{cors_headers, with_preflight};
use crate::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use validator::Validate;

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE";

pub(super) fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(with_preflight(routes!(list_projects, create_project, update_project, delete_project)))
        .layer(cors_headers(ALLOWED_METHODS))
}

/// 查询项目列表
///
/// 返回所有未被软删除的项目，按创建时间倒序。
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Live projects", body = ReplyList<ProjectInfo>),
        (status = 500, description = "Database error", body = ReplyError)
    )
)]
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<ReplyList<ProjectInfo>>, AppError> {
    debug!("🔍 查询项目列表");

    let projects = state.projects.list_projects().await?;

    Ok(Json(projects.into_iter().map(ProjectInfo::from).collect::<Vec<_>>().into()))
}

/// 创建项目
///
/// `name` 会被转换为slug保存，其它字段缺省时使用默认值，创建成功后写入一条 `CREATE` 操作日志。
#[utoipa::path(post,
    path = "/projects",
    tag = "projects",
    request_body = ProjectCreate,
    responses(
        (status = 201, description = "Created project", body = Reply<ProjectInfo>),
        (status = 400, description = "Name or title missing", body = ReplyError),
        (status = 500, description = "Database error", body = ReplyError)
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Reply<ProjectInfo>>), AppError> {
    let Json(project) = payload?;
    debug!("Creating project {:#?}", project);

    // 校验失败时不会访问数据库
    project.validate()?;

    let project = state.projects.create_project(project.into_record()).await?;

    Ok((StatusCode::CREATED, Json(Reply::ok(project.into()))))
}

/// 更新项目信息
///
/// 请求体中的 `id` 指定项目，其余字段只允许 [`ProjectUpdate`] 中列出的字段，未传的字段保持原值。
#[utoipa::path(put,
    path = "/projects",
    tag = "projects",
    request_body = ProjectUpdate,
    responses(
        (status = 200, description = "Updated project", body = Reply<ProjectInfo>),
        (status = 400, description = "Missing id or invalid field", body = ReplyError),
        (status = 404, description = "Project not found", body = ReplyError),
        (status = 500, description = "Database error", body = ReplyError)
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectUpdate>, JsonRejection>,
) -> Result<Json<Reply<ProjectInfo>>, AppError> {
    let Json(info) = payload?;
    debug!("Updating project with {:#?}", info);

    let Some(project_id) = info.id else {
        return Err(AppError::bad_request(PROJECT_ID_REQUIRED));
    };
    info.validate()?;

    let project = state.projects.update_project(project_id, info.into_update()).await?;

    Ok(Json(Reply::ok(project.into())))
}

/// 删除指定的项目
///
/// 软删除，只写入删除时间。
#[utoipa::path(delete,
    path = "/projects",
    tag = "projects",
    params(ProjectIdQuery),
    responses(
        (status = 200, description = "Project soft-deleted", body = ReplyMessage),
        (status = 400, description = "Missing id", body = ReplyError),
        (status = 500, description = "Database error", body = ReplyError)
    )
)]
pub async fn delete_project(
    State(state): State<AppState>,
    query: Result<Query<ProjectIdQuery>, QueryRejection>,
) -> Result<Json<ReplyMessage>, AppError> {
    let Query(query) = query?;
    debug!("delete project {:?}", query.id);

    let Some(project_id) = query.id else {
        return Err(AppError::bad_request(PROJECT_ID_REQUIRED));
    };
    state.projects.delete_project(project_id).await?;

    Ok(Json(ReplyMessage::ok("Project deleted successfully")))
}
