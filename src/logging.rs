//! # 日志模块
//!
//! 基于 tracing 的日志初始化，默认抑制数据库查询噪声

use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志系统
///
/// `RUST_LOG` 优先；未设置时使用传入级别并关闭 sqlx 查询日志
pub fn init(log_level: Option<&str>) {
    let level = log_level.unwrap_or("info");

    // 默认配置：完全禁止数据库查询的详细日志
    let default_filter = format!(
        "{level},site_analytics=debug,sqlx::query=off,sea_orm::query=warn,sqlx=warn"
    );

    let log_filter = env::var("RUST_LOG").unwrap_or(default_filter);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_filter.into()))
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
