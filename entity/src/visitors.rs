//! # 访客实体定义
//!
//! 上游访客追踪子系统的访客表，仅保留分析模块外键所需的最小字段

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 访客实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "visitors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 访客唯一标识（UUID 字符串）
    #[sea_orm(unique)]
    pub visitor_key: String,
    pub first_seen: DateTime,
    pub last_seen: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sessions::Entity")]
    Sessions,
    #[sea_orm(has_many = "super::user_behaviors::Entity")]
    UserBehaviors,
    #[sea_orm(has_many = "super::conversions::Entity")]
    Conversions,
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl Related<super::user_behaviors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBehaviors.def()
    }
}

impl Related<super::conversions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conversions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
