//! # 页面分析服务
//!
//! 页面在某时间窗口内的分析快照写入与查询；数值由外部计算进程提供，
//! 未提供的字段落库为 0

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use crate::error::{Context, Result};
use entity::{page_analytics, time_frames};

/// 页面分析快照写入请求；`None` 字段使用默认值 0
#[derive(Debug, Clone, Default)]
pub struct PageSnapshot {
    pub unique_visitors: Option<i32>,
    pub total_views: Option<i32>,
    pub average_time_on_page: Option<f64>,
    pub bounce_rate: Option<f64>,
    pub exit_rate: Option<f64>,
    pub conversion_rate: Option<f64>,
}

/// 写入页面分析快照
pub async fn record(
    db: &DatabaseConnection,
    page_view_id: i32,
    time_frame_id: i32,
    snapshot: PageSnapshot,
) -> Result<page_analytics::Model> {
    let row = page_analytics::ActiveModel {
        page_view_id: Set(page_view_id),
        time_frame_id: Set(time_frame_id),
        unique_visitors: Set(snapshot.unique_visitors.unwrap_or(0)),
        total_views: Set(snapshot.total_views.unwrap_or(0)),
        average_time_on_page: Set(snapshot.average_time_on_page.unwrap_or(0.0)),
        bounce_rate: Set(snapshot.bounce_rate.unwrap_or(0.0)),
        exit_rate: Set(snapshot.exit_rate.unwrap_or(0.0)),
        conversion_rate: Set(snapshot.conversion_rate.unwrap_or(0.0)),
        ..Default::default()
    };

    let model = row.insert(db).await.context("写入页面分析快照失败")?;
    debug!(
        "页面分析快照: page_view={} time_frame={}",
        model.page_view_id, model.time_frame_id
    );
    Ok(model)
}

/// 列出某时间窗口内的全部页面分析快照
pub async fn list_for_time_frame(
    db: &DatabaseConnection,
    time_frame_id: i32,
) -> Result<Vec<page_analytics::Model>> {
    page_analytics::Entity::find()
        .filter(page_analytics::Column::TimeFrameId.eq(time_frame_id))
        .all(db)
        .await
        .context("查询页面分析快照失败")
}

/// 列出全部页面分析快照，按所属时间窗口的 start_date 倒序
pub async fn list(db: &DatabaseConnection) -> Result<Vec<page_analytics::Model>> {
    let rows = page_analytics::Entity::find()
        .find_also_related(time_frames::Entity)
        .order_by_desc(time_frames::Column::StartDate)
        .all(db)
        .await
        .context("列出页面分析快照失败")?;

    Ok(rows.into_iter().map(|(snapshot, _)| snapshot).collect())
}
