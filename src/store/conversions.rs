//! # 转化事件服务
//!
//! 转化事件的追加写入与查询；不提供更新入口，`timestamp` 由实体钩子
//! 保证只写一次

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::error::{Context, Result};
use entity::conversions::{self, ConversionType};

/// 转化事件写入请求
#[derive(Debug, Clone)]
pub struct RecordConversion {
    pub visitor_id: i32,
    pub session_id: i32,
    pub conversion_type: ConversionType,
    /// 转化金额，DECIMAL(10,2)
    pub value: Option<Decimal>,
    /// 自由结构附加元数据
    pub metadata: Option<serde_json::Value>,
}

/// 写入一次转化事件
pub async fn record(
    db: &DatabaseConnection,
    req: RecordConversion,
) -> Result<conversions::Model> {
    let row = conversions::ActiveModel {
        visitor_id: Set(req.visitor_id),
        session_id: Set(req.session_id),
        conversion_type: Set(req.conversion_type.as_str().to_string()),
        value: Set(req.value),
        metadata: Set(req.metadata),
        ..Default::default()
    };

    let model = row.insert(db).await.context("写入转化事件失败")?;
    info!(
        "转化事件: {} visitor={} session={}",
        model.conversion_type, model.visitor_id, model.session_id
    );
    Ok(model)
}

/// 列出某访客的转化事件，默认按 timestamp 倒序
pub async fn list_for_visitor(
    db: &DatabaseConnection,
    visitor_id: i32,
) -> Result<Vec<conversions::Model>> {
    conversions::Entity::find()
        .filter(conversions::Column::VisitorId.eq(visitor_id))
        .order_by_desc(conversions::Column::Timestamp)
        .all(db)
        .await
        .context("查询转化事件失败")
}

/// 列出全部转化事件，默认按 timestamp 倒序
pub async fn list(db: &DatabaseConnection) -> Result<Vec<conversions::Model>> {
    conversions::Entity::find()
        .order_by_desc(conversions::Column::Timestamp)
        .all(db)
        .await
        .context("列出转化事件失败")
}
