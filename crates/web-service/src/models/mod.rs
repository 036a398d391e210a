//! 请求/响应模型
//!
//! 这里的结构体只用于 HTTP 层的序列化和参数校验，落库使用 `database` 中的模型

pub mod comments;
pub mod common;
pub mod err;
pub mod github;
pub mod projects;
