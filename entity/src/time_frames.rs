//! # 时间窗口实体定义
//!
//! 分析计算共享的时间窗口锚点，删除时级联清理依赖它的分析、行为与报表记录

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::InvalidChoice;

/// 时间窗口实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "time_frames")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// 窗口粒度，取值见 [`TimeFrameKind`]
    pub time_frame: String,
    pub start_date: DateTime,
    pub end_date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::page_analytics::Entity")]
    PageAnalytics,
    #[sea_orm(has_many = "super::user_behaviors::Entity")]
    UserBehaviors,
    #[sea_orm(has_many = "super::reports::Entity")]
    Reports,
}

impl Related<super::page_analytics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PageAnalytics.def()
    }
}

impl Related<super::user_behaviors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBehaviors.def()
    }
}

impl Related<super::reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// 时间窗口粒度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrameKind {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl TimeFrameKind {
    pub const ALL: [Self; 5] = [
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl FromStr for TimeFrameKind {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(InvalidChoice {
                field: "time_frame",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TimeFrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Model {
    /// 解析窗口粒度，非法取值返回错误
    pub fn kind(&self) -> Result<TimeFrameKind, InvalidChoice> {
        self.time_frame.parse()
    }

    /// 展示名，形如 `本周 (weekly)`
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.time_frame)
    }
}
