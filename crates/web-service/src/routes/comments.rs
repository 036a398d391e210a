//! 评论相关接口

use crate::models::comments::{
    CommentCreate, CommentIdQuery, CommentInfo, CommentListQuery, COMMENT_ID_REQUIRED, PROJECT_ID_REQUIRED,
};
use crate::models::common::{Reply, ReplyError, ReplyList, ReplyMessage};
use crate::models::err::AppError;
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

const ALLOWED_METHODS: &str = "GET, POST, DELETE";

pub(super) fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(with_preflight(routes!(list_comments, create_comment, delete_comment)))
        .layer(cors_headers(ALLOWED_METHODS))
}

/// 查询项目下的评论
///
/// 按创建时间正序返回，没有评论时返回空列表。
#[utoipa::path(get,
    path = "/comments",
    tag = "comments",
    params(CommentListQuery),
    responses(
        (status = 200, description = "Comments of the project", body = ReplyList<CommentInfo>),
        (status = 400, description = "Missing project_id", body = ReplyError),
        (status = 500, description = "Database error", body = ReplyError)
    )
)]
pub async fn list_comments(
    State(state): State<AppState>,
    query: Result<Query<CommentListQuery>, QueryRejection>,
) -> Result<Json<ReplyList<CommentInfo>>, AppError> {
    let Query(query) = query?;

    let Some(project_id) = query.project_id else {
        return Err(AppError::bad_request(PROJECT_ID_REQUIRED));
    };
    debug!("🔍 查询项目 {} 的评论", project_id);

    let comments = state.comments.list_comments(project_id).await?;

    Ok(Json(comments.into_iter().map(CommentInfo::from).collect::<Vec<_>>().into()))
}

/// 创建评论
///
/// 创建成功后写入一条 `COMMENT` 操作日志。
#[utoipa::path(post,
    path = "/comments",
    tag = "comments",
    request_body = CommentCreate,
    responses(
        (status = 201, description = "Created comment", body = Reply<CommentInfo>),
        (status = 400, description = "Missing field", body = ReplyError),
        (status = 500, description = "Database error", body = ReplyError)
    )
)]
pub async fn create_comment(
    State(state): State<AppState>,
    payload: Result<Json<CommentCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Reply<CommentInfo>>), AppError> {
    let Json(comment) = payload?;
    debug!("Creating comment {:#?}", comment);

    comment.validate()?;

    let comment = state.comments.create_comment(comment.into_record()).await?;

    Ok((StatusCode::CREATED, Json(Reply::ok(comment.into()))))
}

/// 删除评论
#[utoipa::path(delete,
    path = "/comments",
    tag = "comments",
    params(CommentIdQuery),
    responses(
        (status = 200, description = "Comment deleted", body = ReplyMessage),
        (status = 400, description = "Missing id", body = ReplyError),
        (status = 500, description = "Database error", body = ReplyError)
    )
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    query: Result<Query<CommentIdQuery>, QueryRejection>,
) -> Result<Json<ReplyMessage>, AppError> {
    let Query(query) = query?;

    let Some(comment_id) = query.id else {
        return Err(AppError::bad_request(COMMENT_ID_REQUIRED));
    };
    debug!("delete comment {}", comment_id);

    state.comments.delete_comment(comment_id).await?;

    Ok(Json(ReplyMessage::ok("Comment deleted successfully")))
}
