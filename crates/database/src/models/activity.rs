//! 操作日志模型
//!
//! 操作日志只写不读，所以这里只有创建参数

use std::fmt;
use uuid::Uuid;

/// 操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityAction {
    Create,
    Update,
    Comment,
}

impl ActivityAction {
    /// 落库时使用的标签
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::Create => "CREATE",
            ActivityAction::Update => "UPDATE",
            ActivityAction::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 操作日志创建参数
#[derive(Debug, Clone)]
pub struct ActivityCreate {
    pub project_id: Uuid,
    pub action: ActivityAction,
    pub description: String,
    pub user_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_tags_are_upper_case() {
        assert_eq!(ActivityAction::Create.to_string(), "CREATE");
        assert_eq!(ActivityAction::Update.to_string(), "UPDATE");
        assert_eq!(ActivityAction::Comment.as_str(), "COMMENT");
    }
}
