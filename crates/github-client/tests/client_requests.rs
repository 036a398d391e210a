//! GitHub 客户端请求格式测试
//!
//! 在本地启动一个 axum 服务代替 GitHub，记录收到的请求。

use std::sync::{Arc, Mutex};

use axum::extract::Request;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use axum::http::StatusCode;
use axum::Router;
use github_client::{GithubApiTrait, GithubClient, GithubError};
use serde_json::json;
use tokio::net::TcpListener;

/// 收到的请求
#[derive(Debug, Clone)]
struct Recorded {
    path: String,
    query: Option<String>,
    authorization: Option<String>,
    accept: Option<String>,
    user_agent: Option<String>,
}

type Requests = Arc<Mutex<Vec<Recorded>>>;

fn header(req: &Request, name: axum::http::HeaderName) -> Option<String> {
    req.headers().get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

/// 启动本地服务，所有路径都返回同样的状态码和响应体
async fn start_upstream(status: StatusCode, body: &'static str) -> (String, Requests) {
    let requests = Requests::default();

    let recorder = requests.clone();
    let app = Router::new().fallback(move |req: Request| {
        let recorder = recorder.clone();
        async move {
            recorder.lock().unwrap().push(Recorded {
                path: req.uri().path().to_string(),
                query: req.uri().query().map(str::to_string),
                authorization: header(&req, AUTHORIZATION),
                accept: header(&req, ACCEPT),
                user_agent: header(&req, USER_AGENT),
            });
            (status, [(CONTENT_TYPE, "application/json")], body)
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), requests)
}

fn recorded(requests: &Requests) -> Vec<Recorded> {
    requests.lock().unwrap().clone()
}

#[tokio::test]
async fn repos_request_first_page_sorted_by_update() {
    let (url, requests) = start_upstream(StatusCode::OK, r#"[{"name":"a"},{"name":"b"}]"#).await;
    // 末尾的 `/` 不会产生双斜杠
    let client = GithubClient::new(format!("{url}/"), "secret").unwrap();

    let repos = client.list_user_repos().await.unwrap();
    assert_eq!(repos.len(), 2);

    let requests = recorded(&requests);
    assert_eq!(requests.len(), 1, "only one page is fetched");

    let request = &requests[0];
    assert_eq!(request.path, "/user/repos");
    assert_eq!(request.query.as_deref(), Some("sort=updated&per_page=100"));
    assert_eq!(request.authorization.as_deref(), Some("Bearer secret"));
    assert_eq!(request.accept.as_deref(), Some("application/vnd.github.v3+json"));
    assert!(request.user_agent.as_deref().unwrap().starts_with("project-hub/"));
}

#[tokio::test]
async fn tree_request_reads_main_branch_recursively() {
    let (url, requests) = start_upstream(
        StatusCode::OK,
        r#"{"sha":"abc","tree":[{"path":"README.md","type":"blob"}],"truncated":false}"#,
    )
    .await;
    let client = GithubClient::new(url, "secret").unwrap();

    let entries = client.list_repo_tree("octocat", "hello").await.unwrap();
    assert_eq!(entries, vec![json!({ "path": "README.md", "type": "blob" })]);

    let requests = recorded(&requests);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/repos/octocat/hello/git/trees/main");
    assert_eq!(requests[0].query.as_deref(), Some("recursive=1"));
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer secret"));
}

#[tokio::test]
async fn upstream_error_uses_message_from_body() {
    let (url, _) = start_upstream(StatusCode::UNAUTHORIZED, r#"{"message":"Bad credentials"}"#).await;
    let client = GithubClient::new(url, "wrong").unwrap();

    let err = client.list_user_repos().await.unwrap_err();

    match err {
        GithubError::Upstream { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Bad credentials");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn upstream_error_without_message_uses_reason_phrase() {
    let (url, _) = start_upstream(StatusCode::BAD_GATEWAY, "<html>oops</html>").await;
    let client = GithubClient::new(url, "secret").unwrap();

    let err = client.list_repo_tree("octocat", "hello").await.unwrap_err();

    match err {
        GithubError::Upstream { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
