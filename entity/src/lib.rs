//! # Entity 模块
//!
//! 包含站点分析平台所有 Sea-ORM 实体定义

use thiserror::Error;

pub mod users;
pub mod visitors;
pub mod sessions;
pub mod page_views;
pub mod events;
pub mod time_frames;
pub mod page_analytics;
pub mod user_behaviors;
pub mod conversions;
pub mod reports;
pub mod metrics;

pub use users::Entity as Users;
pub use visitors::Entity as Visitors;
pub use sessions::Entity as Sessions;
pub use page_views::Entity as PageViews;
pub use events::Entity as Events;
pub use time_frames::Entity as TimeFrames;
pub use page_analytics::Entity as PageAnalytics;
pub use user_behaviors::Entity as UserBehaviors;
pub use conversions::Entity as Conversions;
pub use reports::Entity as Reports;
pub use metrics::Entity as Metrics;

/// 枚举字段取值非法时的解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("字段 {field} 取值非法: {value}")]
pub struct InvalidChoice {
    pub field: &'static str,
    pub value: String,
}
