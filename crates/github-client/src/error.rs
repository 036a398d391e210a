use thiserror::Error;

/// GitHub 接口错误类型
#[derive(Error, Debug)]
pub enum GithubError {
    /// 请求本身失败（网络、DNS、TLS 等）
    #[error("GitHub request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// GitHub 返回了非 2xx 状态码
    #[error("GitHub API error: {message}")]
    Upstream {
        /// HTTP 状态码
        status: u16,
        /// GitHub 返回的 `message` 字段，没有时使用状态码原因短语
        message: String,
    },

    /// 返回内容不符合预期格式
    #[error("Invalid response from GitHub API")]
    InvalidResponse,
}
