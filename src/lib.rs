//! # Site Analytics 核心库
//!
//! 站点分析数据的持久化层：时间窗口、页面分析、访客行为、转化、报表与自定义指标

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AnalyticsError, Result};
