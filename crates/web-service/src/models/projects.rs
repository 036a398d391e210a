use crate::models::common::empty_as_none;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

pub const NAME_AND_TITLE_REQUIRED: &str = "Name and title are required";
pub const PROJECT_ID_REQUIRED: &str = "Project ID is required";

const DEFAULT_PROJECT_TYPE: &str = "mobile";
const DEFAULT_ICON: &str = "📱";
const DEFAULT_CATEGORY: &str = "development";
const DEFAULT_DESCRIPTION: &str = "New project description";
const INITIAL_STATUS: &str = "active";

/// 新建项目参数
///
/// `name` 和 `title` 必填，其它字段都有默认值
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct ProjectCreate {
    #[schema(example = "My Cool App")]
    #[validate(
        required(message = "Name and title are required"),
        length(min = 1, message = "Name and title are required")
    )]
    /// 项目名称，保存前会转换为slug
    pub name: Option<String>,

    #[schema(example = "My Cool App")]
    #[validate(
        required(message = "Name and title are required"),
        length(min = 1, message = "Name and title are required")
    )]
    /// 展示标题，原样保存
    pub title: Option<String>,

    pub description: Option<String>,

    #[schema(example = "mobile")]
    pub project_type: Option<String>,

    #[schema(example = "📱")]
    pub icon: Option<String>,

    #[schema(example = "development")]
    pub category: Option<String>,

    #[schema(value_type = Object)]
    /// 项目内容，默认只有一个 `overview` 小节
    pub content: Option<Value>,
}

impl ProjectCreate {
    /// 填充默认值，转换为落库参数
    ///
    /// 调用前需要先通过 [`Validate::validate`]
    pub fn into_record(self) -> database::ProjectCreate {
        database::ProjectCreate {
            name: slugify(&self.name.unwrap_or_default()),
            title: self.title.unwrap_or_default(),
            description: self
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            project_type: self.project_type.unwrap_or_else(|| DEFAULT_PROJECT_TYPE.to_string()),
            status: INITIAL_STATUS.to_string(),
            category: self.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            progress: 0,
            icon: self.icon.unwrap_or_else(|| DEFAULT_ICON.to_string()),
            content: self.content.unwrap_or_else(default_content),
        }
    }
}

/// 更新项目参数
///
/// 只允许修改下列字段，请求中出现其它字段会直接返回400
#[derive(Deserialize, Debug, ToSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct ProjectUpdate {
    /// 项目ID，必填
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_type: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,

    #[schema(example = 40)]
    #[validate(range(min = 0, max = 100, message = "progress must be between 0 and 100"))]
    pub progress: Option<i32>,

    pub icon: Option<String>,

    #[schema(value_type = Object)]
    pub content: Option<Value>,
}

impl ProjectUpdate {
    /// 需要更新的字段，`id` 由调用方单独处理
    pub fn into_update(self) -> database::ProjectUpdate {
        database::ProjectUpdate {
            name: self.name,
            title: self.title,
            description: self.description,
            project_type: self.project_type,
            status: self.status,
            category: self.category,
            progress: self.progress,
            icon: self.icon,
            content: self.content,
        }
    }
}

/// 删除项目的查询参数
#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectIdQuery {
    /// 项目ID
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<Uuid>,
}

/// 项目信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ProjectInfo {
    pub id: Uuid,

    #[schema(example = "my-cool-app")]
    pub name: String,

    #[schema(example = "My Cool App")]
    pub title: String,

    pub description: String,
    pub project_type: String,

    #[schema(example = "active")]
    pub status: String,

    pub category: String,

    #[schema(example = 0)]
    pub progress: i32,

    pub icon: String,

    #[schema(value_type = Object)]
    pub content: Value,

    pub created_at: DateTime<Utc>,

    /// 软删除时间，有效项目为 `null`
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<database::ProjectInfo> for ProjectInfo {
    fn from(project: database::ProjectInfo) -> Self {
        Self {
            id: project.id,
            name: project.name,
            title: project.title,
            description: project.description,
            project_type: project.project_type,
            status: project.status,
            category: project.category,
            progress: project.progress,
            icon: project.icon,
            content: project.content.0,
            created_at: project.created_at,
            deleted_at: project.deleted_at,
        }
    }
}

/// 名称转换为slug：转小写，连续的空白替换为一个 `-`
///
/// 整串一起转小写，保留希腊字母词尾 `ς` 这类依赖上下文的规则。空白包括 `U+FEFF`。
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_whitespace = false;

    for c in lower.chars() {
        if is_slug_whitespace(c) {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug
}

fn is_slug_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// 新项目的默认内容
pub fn default_content() -> Value {
    json!({
        "kicker": "New Project",
        "sections": [
            {
                "id": "overview",
                "title": "Overview",
                "content": "<p>Project overview will be added here.</p>"
            }
        ]
    })
}
