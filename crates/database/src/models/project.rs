//! 项目数据库模型
//!
//! 定义项目相关的数据库模型结构体

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use uuid::Uuid;

/// 项目信息结构体，对应 `projects` 表的一行
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectInfo {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub description: String,
    pub project_type: String,
    pub status: String,
    pub category: String,
    pub progress: i32,
    pub icon: String,
    pub content: Json<Value>,
    pub created_at: DateTime<Utc>,
    /// 软删除时间，为空表示项目仍然有效
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ProjectInfo {
    /// 项目是否仍然有效（未被软删除）
    pub fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// 项目创建参数
///
/// 所有默认值已经在服务层填好，这里只负责落库
#[derive(Debug, Clone)]
pub struct ProjectCreate {
    pub name: String,
    pub title: String,
    pub description: String,
    pub project_type: String,
    pub status: String,
    pub category: String,
    pub progress: i32,
    pub icon: String,
    pub content: Value,
}

/// 项目更新参数
///
/// 为 `None` 的字段保持原值
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_type: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub progress: Option<i32>,
    pub icon: Option<String>,
    pub content: Option<Value>,
}
