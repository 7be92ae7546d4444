//! # 报表服务
//!
//! 报表产物的创建与查询；创建者删除后外键置空，报表保留

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use tracing::info;

use crate::error::{AnalyticsError, Context, Result};
use entity::reports::{self, ReportType};

/// 创建报表的请求
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub name: String,
    pub report_type: ReportType,
    pub time_frame_id: i32,
    /// 创建者；匿名生成进程可为空
    pub created_by: Option<i32>,
    /// 报表数据载荷（必填）
    pub data: serde_json::Value,
    pub is_scheduled: bool,
    /// 计划频率；`is_scheduled` 为 true 时也不强制（与上游行为一致）
    pub schedule_frequency: Option<String>,
}

/// 创建报表
pub async fn create(db: &DatabaseConnection, req: CreateReport) -> Result<reports::Model> {
    let row = reports::ActiveModel {
        name: Set(req.name),
        report_type: Set(req.report_type.as_str().to_string()),
        time_frame_id: Set(req.time_frame_id),
        created_by: Set(req.created_by),
        data: Set(req.data),
        is_scheduled: Set(req.is_scheduled),
        schedule_frequency: Set(req.schedule_frequency),
        ..Default::default()
    };

    let model = row.insert(db).await.context("创建报表失败")?;
    info!("创建报表: {}", model.display_name());
    Ok(model)
}

/// 按主键获取报表
pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<reports::Model>> {
    reports::Entity::find_by_id(id)
        .one(db)
        .await
        .context("查询报表失败")
}

/// 标记报表刚刚生成完成，刷新 `last_generated`
pub async fn mark_generated(db: &DatabaseConnection, id: i32) -> Result<reports::Model> {
    let current = reports::Entity::find_by_id(id)
        .one(db)
        .await
        .context("查询报表失败")?
        .ok_or_else(|| AnalyticsError::business(format!("报表 {id} 不存在")))?;

    let mut row = current.into_active_model();
    row.last_generated = Set(Some(chrono::Utc::now().naive_utc()));
    row.update(db).await.context("更新报表生成时间失败")
}

/// 列出全部报表，默认按 created_at 倒序
pub async fn list(db: &DatabaseConnection) -> Result<Vec<reports::Model>> {
    reports::Entity::find()
        .order_by_desc(reports::Column::CreatedAt)
        .all(db)
        .await
        .context("列出报表失败")
}
