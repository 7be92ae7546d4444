//! # 应用配置结构定义

use serde::{Deserialize, Serialize};

use super::DatabaseConfig;

/// 应用主配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,
    /// 日志级别（trace/debug/info/warn/error）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}
