//! # 访客行为实体定义
//!
//! 单个访客在某时间窗口内的行为汇总，`last_activity` 每次保存自动刷新

use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

/// 访客行为汇总实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_behaviors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub visitor_id: i32,
    pub time_frame_id: i32,
    pub session_count: i32,
    pub average_session_duration: f64,
    pub pages_per_session: f64,
    pub return_rate: f64,
    pub engagement_score: f64,
    pub last_activity: DateTime,
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
        belongs_to = "super::time_frames::Entity",
        from = "Column::TimeFrameId",
        to = "super::time_frames::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TimeFrame,
}

impl Related<super::visitors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Visitor.def()
    }
}

impl Related<super::time_frames::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeFrame.def()
    }
}

impl Model {
    /// 展示名，形如 `Behavior for 9f0c... - 本周 (weekly)`，关联行由调用方查出后传入
    #[must_use]
    pub fn display_name(
        &self,
        visitor: &super::visitors::Model,
        time_frame: &super::time_frames::Model,
    ) -> String {
        format!(
            "Behavior for {} - {}",
            visitor.visitor_key,
            time_frame.display_name()
        )
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// 每次保存都刷新 `last_activity`
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.last_activity = Set(chrono::Utc::now().naive_utc());
        Ok(self)
    }
}
