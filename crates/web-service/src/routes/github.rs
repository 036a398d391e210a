//! GitHub 代理接口
//!
//! 只读代理，`action` 参数决定调用哪个 GitHub 接口

use crate::models::common::{ReplyError, ReplyList};
use crate::models::err::AppError;
use crate::models::github::{GithubAction, GithubQuery, RepoSummary, INVALID_ACTION};
use crate::routes::{cors_headers, with_preflight};
use crate::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use github_client::GithubError;
use tracing::debug;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

const ALLOWED_METHODS: &str = "GET";

pub(super) fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(with_preflight(routes!(github_proxy)))
        .layer(cors_headers(ALLOWED_METHODS))
}

/// GitHub 代理
///
/// - `action=repos`：当前用户的仓库列表（只取第一页，最多100个），每个仓库只保留六个字段
/// - `action=files&owner=..&repo=..`：仓库 `main` 分支的递归文件树，原样返回
///
/// 未配置 `GITHUB_TOKEN` 时直接返回500，不会发起任何请求。
#[utoipa::path(get,
    path = "/github",
    tag = "github",
    params(GithubQuery),
    responses(
        (status = 200, description = "Repositories or repository tree", body = ReplyList<RepoSummary>),
        (status = 400, description = "Invalid action", body = ReplyError),
        (status = 500, description = "Token missing or upstream failure", body = ReplyError)
    )
)]
pub async fn github_proxy(
    State(state): State<AppState>,
    query: Result<Query<GithubQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    // 令牌检查在参数解析之前，未配置时任何请求都是500
    let Some(github) = state.github.clone() else {
        return Err(AppError::ConfigurationError("GitHub token not configured".to_string()));
    };
    let Query(query) = query?;

    match query.action() {
        Some(GithubAction::Repos) => {
            debug!("🐙 代理 GitHub 仓库列表");

            let repos = github
                .list_user_repos()
                .await?
                .into_iter()
                .map(RepoSummary::try_from)
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Json(ReplyList::from(repos)).into_response())
        }
        Some(GithubAction::Files { owner, repo }) => {
            debug!("🐙 代理 GitHub 文件树 {}/{}", owner, repo);

            // 文件树接口的上游错误统一按500返回
            let tree = github.list_repo_tree(&owner, &repo).await.map_err(|err| match err {
                err @ GithubError::Upstream { .. } => AppError::UpstreamError(err.to_string()),
                other => AppError::from(other),
            })?;

            Ok(Json(ReplyList::from(tree)).into_response())
        }
        None => Err(AppError::bad_request(INVALID_ACTION)),
    }
}
