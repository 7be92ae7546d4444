//! # 页面分析实体定义
//!
//! 单个页面在某时间窗口内的分析快照，数值由外部计算进程写入

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 页面分析快照实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "page_analytics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub page_view_id: i32,
    pub time_frame_id: i32,
    pub unique_visitors: i32,
    pub total_views: i32,
    pub average_time_on_page: f64,
    pub bounce_rate: f64,
    pub exit_rate: f64,
    pub conversion_rate: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::page_views::Entity",
        from = "Column::PageViewId",
        to = "super::page_views::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PageView,
    #[sea_orm(
        belongs_to = "super::time_frames::Entity",
        from = "Column::TimeFrameId",
        to = "super::time_frames::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TimeFrame,
}

impl Related<super::page_views::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PageView.def()
    }
}

impl Related<super::time_frames::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeFrame.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 展示名，形如 `Analytics for /pricing - 本周 (weekly)`，关联行由调用方查出后传入
    #[must_use]
    pub fn display_name(
        &self,
        page_view: &super::page_views::Model,
        time_frame: &super::time_frames::Model,
    ) -> String {
        format!("Analytics for {} - {}", page_view.path, time_frame.display_name())
    }
}
