use thiserror::Error;

/// 数据库操作错误类型
///
/// 错误信息会原样返回给调用方，因此使用英文描述
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLX 错误
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// 连接错误
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// 迁移错误
    #[error("Database migration error: {0}")]
    MigrationError(String),

    /// 记录不存在
    #[error("{0} not found")]
    NotFound(String),
}

impl DatabaseError {
    /// 创建连接错误
    pub fn connection<T: ToString>(msg: T) -> Self {
        Self::ConnectionError(msg.to_string())
    }

    /// 创建迁移错误
    pub fn migration<T: ToString>(msg: T) -> Self {
        Self::MigrationError(msg.to_string())
    }

    /// 创建记录不存在错误
    pub fn not_found<T: ToString>(entity: T) -> Self {
        Self::NotFound(entity.to_string())
    }
}
