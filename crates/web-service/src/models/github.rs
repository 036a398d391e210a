use github_client::GithubError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

pub const INVALID_ACTION: &str = "Invalid action";

/// GitHub 代理接口参数
#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GithubQuery {
    /// `repos` 或 `files`
    pub action: Option<String>,

    /// 仓库所有者，`files` 时必填
    pub owner: Option<String>,

    /// 仓库名称，`files` 时必填
    pub repo: Option<String>,
}

/// 解析后的操作
#[derive(Debug, PartialEq, Eq)]
pub enum GithubAction {
    Repos,
    Files { owner: String, repo: String },
}

impl GithubQuery {
    /// 参数不完整或者 action 不认识时返回 `None`
    pub fn action(self) -> Option<GithubAction> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());

        match self.action.as_deref() {
            Some("repos") => Some(GithubAction::Repos),
            Some("files") => Some(GithubAction::Files {
                owner: non_empty(self.owner)?,
                repo: non_empty(self.repo)?,
            }),
            _ => None,
        }
    }
}

/// 仓库概要，只保留这六个字段
#[derive(Deserialize, Debug, ToSchema, Serialize, PartialEq)]
pub struct RepoSummary {
    #[schema(example = "project-hub")]
    pub name: String,

    #[schema(example = "octocat/project-hub")]
    pub full_name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub html_url: String,

    #[serde(default)]
    #[schema(example = "Rust")]
    pub language: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TryFrom<Value> for RepoSummary {
    type Error = GithubError;

    fn try_from(repo: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(repo).map_err(|_| GithubError::InvalidResponse)
    }
}
