//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、迁移、以及 `projects` / `comments` / `activity_log` 三张表的读写

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::activity::{ActivityAction, ActivityCreate};
pub use models::comment::{CommentCreate, CommentInfo};
pub use models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
pub use repositories::{
    ActivityLogRepository, ActivityLogRepositoryTrait, CommentRepository, CommentRepositoryTrait, ProjectRepository,
    ProjectRepositoryTrait,
};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
