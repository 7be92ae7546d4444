//! # 错误类型定义

use thiserror::Error;

/// 应用主要错误类型
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// 配置相关错误
    #[error("配置错误: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 数据库相关错误
    #[error("数据库错误: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 边界校验错误（枚举取值、必填字段等）
    #[error("校验错误: {message}")]
    Validation { message: String },

    /// 业务逻辑错误
    #[error("业务错误: {message}")]
    Business { message: String },

    /// 带上下文的包装错误
    #[error("{context}")]
    Context {
        context: String,
        #[source]
        source: Box<AnalyticsError>,
    },
}

impl AnalyticsError {
    /// 创建配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// 创建带来源的配置错误
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 创建数据库错误
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// 创建带来源的数据库错误
    pub fn database_with_source(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Database {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 创建校验错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// 创建业务错误
    pub fn business(message: impl Into<String>) -> Self {
        Self::Business {
            message: message.into(),
        }
    }
}

impl From<sea_orm::DbErr> for AnalyticsError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database {
            message: err.to_string(),
            source: Some(err.into()),
        }
    }
}

impl From<entity::InvalidChoice> for AnalyticsError {
    fn from(err: entity::InvalidChoice) -> Self {
        Self::Validation {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AnalyticsError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: "配置文件解析失败".to_string(),
            source: Some(err.into()),
        }
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation {
            message: format!("JSON 载荷非法: {err}"),
        }
    }
}
