//! # 追踪锚点服务
//!
//! 上游访客追踪子系统的最小写入入口：用户、访客、会话、页面浏览与事件。
//! 分析记录的外键全部锚定在这些表上

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AnalyticsError, Context, Result};
use entity::{events, page_views, sessions, users, visitors};

/// 创建后台用户
pub async fn create_user(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
) -> Result<users::Model> {
    let row = users::ActiveModel {
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        is_active: Set(true),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    row.insert(db).await.context("创建用户失败")
}

/// 登记新访客，访客标识为随机 UUID
pub async fn create_visitor(db: &DatabaseConnection) -> Result<visitors::Model> {
    let now = chrono::Utc::now().naive_utc();
    let row = visitors::ActiveModel {
        visitor_key: Set(Uuid::new_v4().to_string()),
        first_seen: Set(now),
        last_seen: Set(now),
        ..Default::default()
    };
    let model = row.insert(db).await.context("登记访客失败")?;
    debug!("登记访客: {}", model.visitor_key);
    Ok(model)
}

/// 开启浏览会话
pub async fn start_session(db: &DatabaseConnection, visitor_id: i32) -> Result<sessions::Model> {
    let row = sessions::ActiveModel {
        visitor_id: Set(visitor_id),
        started_at: Set(chrono::Utc::now().naive_utc()),
        ended_at: Set(None),
        ..Default::default()
    };
    row.insert(db).await.context("开启会话失败")
}

/// 结束浏览会话
pub async fn end_session(db: &DatabaseConnection, session_id: i32) -> Result<sessions::Model> {
    let current = sessions::Entity::find_by_id(session_id)
        .one(db)
        .await
        .context("查询会话失败")?
        .ok_or_else(|| AnalyticsError::business(format!("会话 {session_id} 不存在")))?;

    let mut row = current.into_active_model();
    row.ended_at = Set(Some(chrono::Utc::now().naive_utc()));
    row.update(db).await.context("结束会话失败")
}

/// 记录一次页面浏览
pub async fn record_page_view(
    db: &DatabaseConnection,
    session_id: i32,
    path: &str,
) -> Result<page_views::Model> {
    let row = page_views::ActiveModel {
        session_id: Set(session_id),
        path: Set(path.to_string()),
        viewed_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    row.insert(db).await.context("记录页面浏览失败")
}

/// 记录一次离散事件
pub async fn record_event(
    db: &DatabaseConnection,
    session_id: i32,
    name: &str,
) -> Result<events::Model> {
    let row = events::ActiveModel {
        session_id: Set(session_id),
        name: Set(name.to_string()),
        occurred_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    row.insert(db).await.context("记录事件失败")
}
