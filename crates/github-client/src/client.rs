//! GitHub 客户端实现

use crate::{GithubError, GithubResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use tracing::debug;

/// 仓库列表单页大小，不做多页聚合
pub const REPOS_PER_PAGE: u32 = 100;

/// 文件树固定读取的分支
pub const TREE_BRANCH: &str = "main";

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("project-hub/", env!("CARGO_PKG_VERSION"));

/// GitHub 接口抽象
///
/// Web 层只依赖这个 trait，测试时可以替换成内存实现
#[async_trait::async_trait]
pub trait GithubApiTrait: Send + Sync + 'static {
    /// 当前用户的仓库列表，按更新时间排序，只取第一页
    ///
    /// 返回 GitHub 原始的仓库对象，字段裁剪由调用方决定
    async fn list_user_repos(&self) -> GithubResult<Vec<Value>>;

    /// 仓库 `main` 分支的递归文件树，原样返回 `tree` 数组
    async fn list_repo_tree(&self, owner: &str, repo: &str) -> GithubResult<Vec<Value>>;
}

/// 基于 [`reqwest`] 的 GitHub 客户端
#[derive(Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient").field("api_url", &self.api_url).finish_non_exhaustive()
    }
}

impl GithubClient {
    /// 创建客户端
    ///
    /// * `api_url` - 接口地址，例如 `https://api.github.com`
    /// * `token` - 访问令牌，以 `Bearer` 方式发送
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> GithubResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// 非 2xx 时读取 GitHub 的错误信息，转换为 [`GithubError::Upstream`]
    async fn ensure_success(response: reqwest::Response) -> GithubResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        let message = upstream_message(&body)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| status.to_string());

        Err(GithubError::Upstream {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait::async_trait]
impl GithubApiTrait for GithubClient {
    async fn list_user_repos(&self) -> GithubResult<Vec<Value>> {
        debug!("🐙 获取 GitHub 仓库列表");

        let response = self
            .client
            .get(format!("{}/user/repos", self.api_url))
            .bearer_auth(&self.token)
            .query(&[("sort", "updated".to_string()), ("per_page", REPOS_PER_PAGE.to_string())])
            .send()
            .await?;

        let payload: Value = Self::ensure_success(response).await?.json().await?;
        let repos = into_array(payload)?;

        debug!("✅ 获取到 {} 个仓库", repos.len());
        Ok(repos)
    }

    async fn list_repo_tree(&self, owner: &str, repo: &str) -> GithubResult<Vec<Value>> {
        debug!("🐙 获取仓库 {}/{} 的文件树", owner, repo);

        let response = self
            .client
            .get(format!("{}/repos/{}/{}/git/trees/{}", self.api_url, owner, repo, TREE_BRANCH))
            .bearer_auth(&self.token)
            .query(&[("recursive", "1")])
            .send()
            .await?;

        let payload: Value = Self::ensure_success(response).await?.json().await?;
        Ok(tree_entries(payload))
    }
}

/// 仓库列表必须是数组，否则视为格式错误
fn into_array(payload: Value) -> GithubResult<Vec<Value>> {
    match payload {
        Value::Array(items) => Ok(items),
        _ => Err(GithubError::InvalidResponse),
    }
}

/// 取出 `tree` 字段，缺失时返回空列表
fn tree_entries(payload: Value) -> Vec<Value> {
    match payload {
        Value::Object(mut map) => match map.remove("tree") {
            Some(Value::Array(entries)) => entries,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn upstream_message(body: &Value) -> Option<String> {
    body.get("message").and_then(Value::as_str).map(str::to_string)
}
