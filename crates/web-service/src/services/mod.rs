//! 服务层模块
//!
//! 包含业务逻辑的服务层实现：一次主操作 + 可选的操作日志

pub mod activity;
pub mod comment;
pub mod project;

pub use comment::CommentService;
pub use project::ProjectService;
