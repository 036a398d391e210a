//! GitHub REST 接口客户端
//!
//! 只覆盖两个只读接口：
//! - 当前用户的仓库列表（单页，最多 [`REPOS_PER_PAGE`] 个）
//! - 仓库 `main` 分支的递归文件树

pub mod client;
pub mod error;

pub use client::{GithubApiTrait, GithubClient, REPOS_PER_PAGE, TREE_BRANCH};
pub use error::GithubError;

/// GitHub 操作结果类型
pub type GithubResult<T> = Result<T, GithubError>;
