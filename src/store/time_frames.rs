//! # 时间窗口服务
//!
//! 时间窗口的创建、查询与删除；删除依赖外键级联清理页面分析、
//! 访客行为与报表记录

use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::{info, warn};

use crate::error::{AnalyticsError, Context, Result};
use entity::time_frames::{self, TimeFrameKind};

/// 创建时间窗口的请求
#[derive(Debug, Clone)]
pub struct CreateTimeFrame {
    pub name: String,
    pub kind: TimeFrameKind,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

/// 创建时间窗口
///
/// `end_date < start_date` 不拒绝（与上游行为一致），仅记录警告
pub async fn create(db: &DatabaseConnection, req: CreateTimeFrame) -> Result<time_frames::Model> {
    if req.end_date < req.start_date {
        warn!(
            "时间窗口 {} 的 end_date 早于 start_date ({} < {})",
            req.name, req.end_date, req.start_date
        );
    }

    let frame = time_frames::ActiveModel {
        name: Set(req.name),
        time_frame: Set(req.kind.as_str().to_string()),
        start_date: Set(req.start_date),
        end_date: Set(req.end_date),
        ..Default::default()
    };

    let model = frame.insert(db).await.context("创建时间窗口失败")?;
    info!("创建时间窗口: {}", model.display_name());
    Ok(model)
}

/// 按主键获取时间窗口
pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<time_frames::Model>> {
    time_frames::Entity::find_by_id(id)
        .one(db)
        .await
        .context("查询时间窗口失败")
}

/// 列出全部时间窗口，默认按 start_date 倒序
pub async fn list(db: &DatabaseConnection) -> Result<Vec<time_frames::Model>> {
    time_frames::Entity::find()
        .order_by_desc(time_frames::Column::StartDate)
        .all(db)
        .await
        .context("列出时间窗口失败")
}

/// 删除时间窗口
///
/// 外键级联会一并删除引用它的 page_analytics、user_behaviors 与 reports
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64> {
    let result = time_frames::Entity::delete_by_id(id)
        .exec(db)
        .await
        .context("删除时间窗口失败")?;

    if result.rows_affected == 0 {
        return Err(AnalyticsError::business(format!(
            "时间窗口 {id} 不存在"
        )));
    }

    info!("删除时间窗口 {id}（级联清理依赖记录）");
    Ok(result.rows_affected)
}
