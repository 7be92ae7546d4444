//! # 配置管理模块
//!
//! 处理应用配置加载与验证

mod app_config;
mod database;

pub use app_config::AppConfig;
pub use database::DatabaseConfig;

use std::env;
use std::path::Path;

use crate::error::{AnalyticsError, Result};

/// 加载配置文件
///
/// 路径按 `RUST_ENV` 选择：`config/config.{env}.toml`，默认 `dev`
pub fn load_config() -> Result<AppConfig> {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
    let config_file = format!("config/config.{env}.toml");

    if !Path::new(&config_file).exists() {
        return Err(AnalyticsError::config(format!(
            "配置文件不存在: {config_file}"
        )));
    }

    let config_content = std::fs::read_to_string(&config_file).map_err(|e| {
        AnalyticsError::config_with_source(format!("读取配置文件失败: {config_file}"), e)
    })?;

    let config: AppConfig = toml::from_str(&config_content)?;

    validate_config(&config)?;

    Ok(config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<()> {
    if config.database.url.is_empty() {
        return Err(AnalyticsError::config("数据库 URL 不能为空"));
    }
    if config.database.max_connections == 0 {
        return Err(AnalyticsError::config("数据库最大连接数必须大于 0"));
    }
    Ok(())
}
