//! # 报表实体定义
//!
//! 已生成或按计划生成的报表产物；创建者删除后报表保留（外键置空）

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::InvalidChoice;

/// 报表实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// 报表类型，取值见 [`ReportType`]
    pub report_type: String,
    pub time_frame_id: i32,
    /// 创建者，用户删除后置空
    pub created_by: Option<i32>,
    pub created_at: DateTime,
    /// 报表数据载荷（结构化 JSON，必填）
    pub data: Json,
    pub is_scheduled: bool,
    pub schedule_frequency: Option<String>,
    pub last_generated: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::time_frames::Entity",
        from = "Column::TimeFrameId",
        to = "super::time_frames::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TimeFrame,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::time_frames::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeFrame.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// 插入时落盘 `created_at`，更新时强制剔除该列
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            if self.created_at.is_not_set() {
                self.created_at = Set(chrono::Utc::now().naive_utc());
            }
        } else {
            self.created_at = NotSet;
        }
        Ok(self)
    }
}

/// 报表类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Visitor,
    Page,
    Conversion,
    Custom,
}

impl ReportType {
    pub const ALL: [Self; 4] = [Self::Visitor, Self::Page, Self::Conversion, Self::Custom];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visitor => "visitor",
            Self::Page => "page",
            Self::Conversion => "conversion",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for ReportType {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visitor" => Ok(Self::Visitor),
            "page" => Ok(Self::Page),
            "conversion" => Ok(Self::Conversion),
            "custom" => Ok(Self::Custom),
            other => Err(InvalidChoice {
                field: "report_type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Model {
    /// 解析报表类型，非法取值返回错误
    pub fn report_kind(&self) -> Result<ReportType, InvalidChoice> {
        self.report_type.parse()
    }

    /// 展示名，形如 `月度访客报表 - visitor`
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.name, self.report_type)
    }
}
