//! # 转化事件实体定义
//!
//! 单次转化事件，追加写入：`timestamp` 创建时落盘，后续更新不可变

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::InvalidChoice;

/// 转化事件实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "conversions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub visitor_id: i32,
    pub session_id: i32,
    /// 转化类型，取值见 [`ConversionType`]
    pub conversion_type: String,
    /// 转化金额，DECIMAL(10,2)，可空
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub value: Option<Decimal>,
    pub timestamp: DateTime,
    /// 附加元数据（自由结构 JSON）
    pub metadata: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::visitors::Entity",
        from = "Column::VisitorId",
        to = "super::visitors::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Visitor,
    #[sea_orm(
        belongs_to = "super::sessions::Entity",
        from = "Column::SessionId",
        to = "super::sessions::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Session,
}

impl Related<super::visitors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Visitor.def()
    }
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// 插入时落盘 `timestamp`，更新时强制剔除该列，保证只写一次
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            if self.timestamp.is_not_set() {
                self.timestamp = Set(chrono::Utc::now().naive_utc());
            }
        } else {
            self.timestamp = NotSet;
        }
        Ok(self)
    }
}

/// 转化类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionType {
    Signup,
    Purchase,
    Download,
    Contact,
    Custom,
}

impl ConversionType {
    pub const ALL: [Self; 5] = [
        Self::Signup,
        Self::Purchase,
        Self::Download,
        Self::Contact,
        Self::Custom,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Purchase => "purchase",
            Self::Download => "download",
            Self::Contact => "contact",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for ConversionType {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signup" => Ok(Self::Signup),
            "purchase" => Ok(Self::Purchase),
            "download" => Ok(Self::Download),
            "contact" => Ok(Self::Contact),
            "custom" => Ok(Self::Custom),
            other => Err(InvalidChoice {
                field: "conversion_type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ConversionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Model {
    /// 解析转化类型，非法取值返回错误
    pub fn conversion_kind(&self) -> Result<ConversionType, InvalidChoice> {
        self.conversion_type.parse()
    }

    /// 展示名，形如 `purchase - 9f0c... - 2025-03-01 08:00:00`，关联行由调用方查出后传入
    #[must_use]
    pub fn display_name(&self, visitor: &super::visitors::Model) -> String {
        format!(
            "{} - {} - {}",
            self.conversion_type, visitor.visitor_key, self.timestamp
        )
    }
}
