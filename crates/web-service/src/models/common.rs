use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use utoipa::ToSchema;

/// 成功返回的单个对象
///
/// ```json
/// { "success": true, "data": { ... } }
/// ```
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct Reply<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

impl<T> Reply<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}

/// 成功返回的列表对象
///
/// 没有数据时 `data` 为空数组而不是 `null`
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ReplyList<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: Vec<T>,
    #[schema(example = 3)]
    /// 本次返回的条数
    pub count: usize,
}

impl<T> From<Vec<T>> for ReplyList<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// 只有提示信息的成功返回，删除类接口使用
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ReplyMessage {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Project deleted successfully")]
    pub message: String,
}

impl ReplyMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// 失败返回，所有错误都转换为这个格式
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ReplyError {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Name and title are required")]
    pub error: String,
}

impl ReplyError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// 查询参数反序列化：空字符串视为未传
///
/// `?id=` 和不带 `id` 一样返回“缺少参数”，而不是解析失败。需要配合 `#[serde(default)]` 使用。
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.is_empty() => value.parse().map(Some).map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
