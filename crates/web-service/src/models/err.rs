use crate::models::common::ReplyError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_eyre::eyre::Error;
use database::DatabaseError;
use github_client::GithubError;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
///
/// 所有错误最终都会转换为 `{ "success": false, "error": "..." }`
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error("{}", validation_message(.0))]
    ValidationFailed(#[from] ValidationErrors),

    /// 缺少必填参数等简单的参数错误
    #[error("{0}")]
    BadRequest(String),

    /// 请求体不是合法的json，或者包含不允许的字段
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// 查询参数格式错误
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// GitHub 接口错误
    #[error(transparent)]
    GithubError(#[from] GithubError),

    /// 上游返回错误，统一按500处理
    #[error("{0}")]
    UpstreamError(String),

    /// 服务配置缺失
    #[error("{0}")]
    ConfigurationError(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// 错误对应的http状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationFailed(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::JsonRejection(_) | AppError::QueryRejection(_) => StatusCode::BAD_REQUEST,
            AppError::RepositoryError(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::GithubError(GithubError::Upstream { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::RepositoryError(_)
            | AppError::GithubError(_)
            | AppError::UpstreamError(_)
            | AppError::ConfigurationError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::JsonRejection(err) => err.body_text(),
            AppError::QueryRejection(err) => err.body_text(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            error!(error = %message, "❌ 请求处理失败");
        }

        (status, Json(ReplyError::new(message))).into_response()
    }
}

/// 合并所有字段的校验信息，相同的信息只保留一条
fn validation_message(errors: &ValidationErrors) -> String {
    let messages: BTreeSet<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();

    messages.into_iter().collect::<Vec<_>>().join("; ")
}
