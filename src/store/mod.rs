//! # 存储服务模块
//!
//! 各记录类型的读写服务：枚举在边界解析为强类型，默认排序与删除级联
//! 语义由存储层保证

pub mod conversions;
pub mod metrics;
pub mod page_analytics;
pub mod reports;
pub mod time_frames;
pub mod tracking;
pub mod user_behaviors;
