//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```rust,ignore
//! #[async_trait::async_trait]
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` / `Sync`：同一个仓库实例会被多个并发请求共享
//! - `'static`：仓库作为应用服务长期存活，不依赖短期引用
//!
//! Web 层通过 `Arc<dyn XxxRepositoryTrait>` 持有仓库，启动时注入 PostgreSQL 实现，
//! 测试时注入内存实现：
//!
//! ```rust,ignore
//! let projects: Arc<dyn ProjectRepositoryTrait> = Arc::new(ProjectRepository::new(pool.clone()));
//! let project = projects.create_project(payload).await?;
//! ```
//!
//! 所有方法统一返回 [`crate::DatabaseResult`]。

pub mod activity;
pub mod comment;
pub mod project;

// 重新导出
pub use activity::ActivityLogRepositoryTrait;
pub use comment::CommentRepositoryTrait;
pub use project::ProjectRepositoryTrait;
