//! # 页面浏览实体定义
//!
//! 单次页面加载记录，页面级分析快照的外键锚点

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 页面浏览实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "page_views")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub session_id: i32,
    pub path: String,
    pub viewed_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sessions::Entity",
        from = "Column::SessionId",
        to = "super::sessions::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Session,
    #[sea_orm(has_many = "super::page_analytics::Entity")]
    PageAnalytics,
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::page_analytics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PageAnalytics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
