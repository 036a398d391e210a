//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 每个资源只有一个路径，按 http method 区分操作：
//!
//! | 路径 | 方法 |
//! |---|---|
//! | `/api/projects` | GET / POST / PUT / DELETE |
//! | `/api/comments` | GET / POST / DELETE |
//! | `/api/github` | GET |
//!
//! 所有路径都响应 `OPTIONS` 预检请求，并带上跨域响应头；不支持的方法统一返回405。

use crate::models::err::AppError;
use crate::AppState;
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::{HeaderValue, StatusCode};
use axum::Router;
use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::{OpenApiRouter, UtoipaMethodRouter};
use utoipa_scalar::{Scalar, Servable};

pub mod comments;
pub mod github;
pub mod health;
pub mod projects;

type SetHeader = SetResponseHeaderLayer<HeaderValue>;

/// 三个跨域响应头叠加后的中间件类型
pub(crate) type CorsHeaders = ServiceBuilder<Stack<SetHeader, Stack<SetHeader, Stack<SetHeader, Identity>>>>;

/// 跨域响应头
///
/// 允许任意来源，`methods` 为当前路径支持的方法
pub(crate) fn cors_headers(methods: &'static str) -> CorsHeaders {
    ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(methods),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}

/// 给路由补上 `OPTIONS` 预检和405兜底
///
/// [`routes!`](utoipa_axum::routes) 宏只生成文档里声明的方法，这两个不需要出现在文档里。
pub(crate) fn with_preflight(route: UtoipaMethodRouter<AppState>) -> UtoipaMethodRouter<AppState> {
    let (schemas, paths, method_router) = route;
    (schemas, paths, method_router.options(preflight).fallback(method_not_allowed))
}

/// 预检请求：200，空响应体
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// 导出 `/api` 下的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。存放仓库和GitHub客户端。
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .merge(projects::router())
        .merge(comments::router())
        .merge(github::router())
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "projects", description = "项目增删改查，删除为软删除"),
            (name = "comments", description = "项目评论"),
            (name = "github", description = "GitHub 只读代理"),
        ),
    )]
    struct ApiDoc;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routers(shared_state))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router
        .merge(Scalar::with_url("/docs", api))
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
}
