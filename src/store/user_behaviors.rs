//! # 访客行为服务
//!
//! 每访客每时间窗口一条行为汇总；重复写入更新现有行，
//! `last_activity` 由实体钩子在每次保存时刷新

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;

use crate::error::{AnalyticsError, Context, Result};
use entity::user_behaviors;

/// 行为汇总数值；`None` 字段使用默认值 0
#[derive(Debug, Clone, Default)]
pub struct BehaviorStats {
    pub session_count: Option<i32>,
    pub average_session_duration: Option<f64>,
    pub pages_per_session: Option<f64>,
    pub return_rate: Option<f64>,
    pub engagement_score: Option<f64>,
}

/// 写入或更新某访客在某时间窗口内的行为汇总
pub async fn record(
    db: &DatabaseConnection,
    visitor_id: i32,
    time_frame_id: i32,
    stats: BehaviorStats,
) -> Result<user_behaviors::Model> {
    let existing = user_behaviors::Entity::find()
        .filter(user_behaviors::Column::VisitorId.eq(visitor_id))
        .filter(user_behaviors::Column::TimeFrameId.eq(time_frame_id))
        .one(db)
        .await
        .context("查询访客行为失败")?;

    let model = if let Some(current) = existing {
        let mut row = current.into_active_model();
        if let Some(v) = stats.session_count {
            row.session_count = Set(v);
        }
        if let Some(v) = stats.average_session_duration {
            row.average_session_duration = Set(v);
        }
        if let Some(v) = stats.pages_per_session {
            row.pages_per_session = Set(v);
        }
        if let Some(v) = stats.return_rate {
            row.return_rate = Set(v);
        }
        if let Some(v) = stats.engagement_score {
            row.engagement_score = Set(v);
        }
        row.update(db).await.context("更新访客行为失败")?
    } else {
        let row = user_behaviors::ActiveModel {
            visitor_id: Set(visitor_id),
            time_frame_id: Set(time_frame_id),
            session_count: Set(stats.session_count.unwrap_or(0)),
            average_session_duration: Set(stats.average_session_duration.unwrap_or(0.0)),
            pages_per_session: Set(stats.pages_per_session.unwrap_or(0.0)),
            return_rate: Set(stats.return_rate.unwrap_or(0.0)),
            engagement_score: Set(stats.engagement_score.unwrap_or(0.0)),
            ..Default::default()
        };
        row.insert(db).await.context("写入访客行为失败")?
    };

    debug!(
        "访客行为汇总: visitor={} time_frame={}",
        model.visitor_id, model.time_frame_id
    );
    Ok(model)
}

/// 仅刷新 `last_activity`（证明每次保存都会重新落盘）
pub async fn touch(db: &DatabaseConnection, id: i32) -> Result<user_behaviors::Model> {
    let current = user_behaviors::Entity::find_by_id(id)
        .one(db)
        .await
        .context("查询访客行为失败")?
        .ok_or_else(|| AnalyticsError::business(format!("访客行为记录 {id} 不存在")))?;

    // 不改任何业务字段，before_save 钩子仍会刷新 last_activity
    let mut row = current.into_active_model();
    let count = row.session_count.take().unwrap_or(0);
    row.session_count = Set(count);
    row.update(db).await.context("刷新访客行为失败")
}

/// 列出全部行为汇总，默认按 last_activity 倒序
pub async fn list(db: &DatabaseConnection) -> Result<Vec<user_behaviors::Model>> {
    user_behaviors::Entity::find()
        .order_by_desc(user_behaviors::Column::LastActivity)
        .all(db)
        .await
        .context("列出访客行为失败")
}
