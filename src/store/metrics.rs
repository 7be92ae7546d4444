//! # 自定义指标服务
//!
//! 指标定义的增改查；公式只存文本不求值，`updated_at` 每次保存刷新

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use tracing::info;

use crate::error::{AnalyticsError, Context, Result};
use entity::metrics;

/// 创建指标的请求；`is_active` 默认 true
#[derive(Debug, Clone)]
pub struct CreateMetric {
    pub name: String,
    pub description: String,
    pub formula: String,
    pub unit: String,
}

/// 更新指标的请求；`None` 字段保持不变
#[derive(Debug, Clone, Default)]
pub struct UpdateMetric {
    pub name: Option<String>,
    pub description: Option<String>,
    pub formula: Option<String>,
    pub unit: Option<String>,
    pub is_active: Option<bool>,
}

/// 创建指标
pub async fn create(db: &DatabaseConnection, req: CreateMetric) -> Result<metrics::Model> {
    let row = metrics::ActiveModel {
        name: Set(req.name),
        description: Set(req.description),
        formula: Set(req.formula),
        unit: Set(req.unit),
        is_active: Set(true),
        ..Default::default()
    };

    let model = row.insert(db).await.context("创建指标失败")?;
    info!("创建指标: {}", model.name);
    Ok(model)
}

/// 更新指标定义
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    req: UpdateMetric,
) -> Result<metrics::Model> {
    let current = metrics::Entity::find_by_id(id)
        .one(db)
        .await
        .context("查询指标失败")?
        .ok_or_else(|| AnalyticsError::business(format!("指标 {id} 不存在")))?;

    let mut row = current.into_active_model();
    if let Some(v) = req.name {
        row.name = Set(v);
    }
    if let Some(v) = req.description {
        row.description = Set(v);
    }
    if let Some(v) = req.formula {
        row.formula = Set(v);
    }
    if let Some(v) = req.unit {
        row.unit = Set(v);
    }
    if let Some(v) = req.is_active {
        row.is_active = Set(v);
    }

    row.update(db).await.context("更新指标失败")
}

/// 停用指标
pub async fn deactivate(db: &DatabaseConnection, id: i32) -> Result<metrics::Model> {
    update(
        db,
        id,
        UpdateMetric {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
}

/// 列出全部指标，默认按名称升序
pub async fn list(db: &DatabaseConnection) -> Result<Vec<metrics::Model>> {
    metrics::Entity::find()
        .order_by_asc(metrics::Column::Name)
        .all(db)
        .await
        .context("列出指标失败")
}
