use crate::models::common::empty_as_none;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

pub const PROJECT_ID_REQUIRED: &str = "project_id is required";
pub const COMMENT_ID_REQUIRED: &str = "Comment ID is required";

/// 新建评论参数，三个字段都必填
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct CommentCreate {
    #[validate(required(message = "project_id, author, and text are required"))]
    pub project_id: Option<Uuid>,

    #[schema(example = "alice")]
    #[validate(
        required(message = "project_id, author, and text are required"),
        length(min = 1, message = "project_id, author, and text are required")
    )]
    pub author: Option<String>,

    #[schema(example = "Looks good to me")]
    #[validate(
        required(message = "project_id, author, and text are required"),
        length(min = 1, message = "project_id, author, and text are required")
    )]
    pub text: Option<String>,
}

impl CommentCreate {
    /// 转换为落库参数
    ///
    /// 调用前需要先通过 [`Validate::validate`]
    pub fn into_record(self) -> database::CommentCreate {
        database::CommentCreate {
            project_id: self.project_id.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            text: self.text.unwrap_or_default(),
        }
    }
}

/// 查询评论列表的参数
#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListQuery {
    /// 所属项目ID
    #[serde(default, deserialize_with = "empty_as_none")]
    pub project_id: Option<Uuid>,
}

/// 删除评论的参数
#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentIdQuery {
    /// 评论ID
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<Uuid>,
}

/// 评论信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct CommentInfo {
    pub id: Uuid,
    pub project_id: Uuid,

    #[schema(example = "alice")]
    pub author: String,

    #[schema(example = "Looks good to me")]
    pub text: String,

    pub created_at: DateTime<Utc>,
}

impl From<database::CommentInfo> for CommentInfo {
    fn from(comment: database::CommentInfo) -> Self {
        Self {
            id: comment.id,
            project_id: comment.project_id,
            author: comment.author,
            text: comment.text,
            created_at: comment.created_at,
        }
    }
}
