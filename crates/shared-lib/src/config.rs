//! 程序配置
//!
//! 所有配置都从环境变量读取，本地开发时可以放在 `.env` 文件里。

use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// GitHub 接口默认地址
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// 服务默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// 连接池最大连接数
    ///
    /// 可通过环境变量 `DATABASE_MAX_CONNECTIONS` 来调整
    pub max_connections: u32,
}

/// GitHub 配置
#[derive(Clone)]
pub struct GithubConfig {
    /// 访问令牌，未配置时 GitHub 相关接口全部返回配置错误
    pub token: Option<String>,

    /// 接口地址，可通过 `GITHUB_API_URL` 指向代理或测试服务
    pub api_url: String,
}

/// 令牌不能出现在日志里
impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Web 服务监听地址
    pub bind_addr: String,

    /// 数据库配置
    pub database: DatabaseConfig,

    /// GitHub配置
    pub github: GithubConfig,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时直接使用环境变量，没有.env文件也不报错
        if dotenvy::dotenv().is_err() {
            info!("未找到 .env 文件，直接使用环境变量");
        }

        // 读取数据库地址信息（仅支持postgresql）
        let db_url = std::env::var("DATABASE_URL")
            .context("Can not load DATABASE_URL in environment")
            .suggestion("设置 DATABASE_URL 环境变量")?;

        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value
                .parse()
                .context("DATABASE_MAX_CONNECTIONS is not a valid number")
                .suggestion("DATABASE_MAX_CONNECTIONS 需要是正整数")?,
            Err(_) => 10,
        };

        let token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        if token.is_none() {
            warn!("⚠️ 未配置 GITHUB_TOKEN，GitHub 接口将不可用");
        }

        let config = AppConfig {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            database: DatabaseConfig {
                postgresql_conn_str: db_url,
                max_connections,
            },
            github: GithubConfig {
                token,
                api_url: std::env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string()),
            },
        };
        Ok(Arc::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_github_token() {
        let config = GithubConfig {
            token: Some("ghp_secret".to_string()),
            api_url: DEFAULT_GITHUB_API_URL.to_string(),
        };

        let output = format!("{config:?}");
        assert!(!output.contains("ghp_secret"));
        assert!(output.contains("***"));
    }
}
