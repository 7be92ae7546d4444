//! 自动时间戳语义的集成测试：只写一次 vs 每次保存刷新

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, Database, DatabaseConnection, EntityTrait, IntoActiveModel, Set,
};

use entity::conversions::ConversionType;
use entity::time_frames::TimeFrameKind;
use site_analytics::store::{conversions, metrics, time_frames, tracking, user_behaviors};

async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect test db");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

async fn seed_visitor_session(db: &DatabaseConnection) -> (i32, i32) {
    let visitor = tracking::create_visitor(db).await.expect("visitor");
    let session = tracking::start_session(db, visitor.id).await.expect("session");
    (visitor.id, session.id)
}

#[tokio::test]
async fn conversion_timestamp_is_write_once() {
    let db = setup_test_db().await;
    let (visitor_id, session_id) = seed_visitor_session(&db).await;

    let conversion = conversions::record(
        &db,
        conversions::RecordConversion {
            visitor_id,
            session_id,
            conversion_type: ConversionType::Purchase,
            value: Some(rust_decimal::Decimal::new(49_90, 2)),
            metadata: Some(serde_json::json!({"sku": "B-2044"})),
        },
    )
    .await
    .expect("conversion");
    let original = conversion.timestamp;

    tokio::time::sleep(Duration::from_millis(10)).await;

    // 直接改金额并尝试强行覆盖 timestamp，钩子应剔除该列
    let mut row = conversion.into_active_model();
    row.value = Set(Some(rust_decimal::Decimal::new(59_90, 2)));
    row.timestamp = Set(chrono::Utc::now().naive_utc());
    let updated = row.update(&db).await.expect("update conversion");

    assert_eq!(updated.value, Some(rust_decimal::Decimal::new(59_90, 2)));
    assert_eq!(updated.timestamp, original);

    let refetched = entity::Conversions::find_by_id(updated.id)
        .one(&db)
        .await
        .expect("query conversion")
        .expect("exists");
    assert_eq!(refetched.timestamp, original);
}

#[tokio::test]
async fn metric_updated_at_moves_created_at_does_not() {
    let db = setup_test_db().await;

    let metric = metrics::create(
        &db,
        metrics::CreateMetric {
            name: "参与度".to_string(),
            description: "会话加权参与度".to_string(),
            formula: "events / sessions".to_string(),
            unit: "score".to_string(),
        },
    )
    .await
    .expect("metric");
    assert!(metric.is_active);
    let created = metric.created_at;
    let first_update = metric.updated_at;

    tokio::time::sleep(Duration::from_millis(10)).await;

    let updated = metrics::update(
        &db,
        metric.id,
        metrics::UpdateMetric {
            formula: Some("weighted_events / sessions".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("update metric");

    assert_eq!(updated.created_at, created);
    assert!(updated.updated_at > first_update);
}

#[tokio::test]
async fn metric_created_at_resists_overwrite() {
    let db = setup_test_db().await;

    let metric = metrics::create(
        &db,
        metrics::CreateMetric {
            name: "回访率".to_string(),
            description: "重复访客占比".to_string(),
            formula: "returning / total".to_string(),
            unit: "%".to_string(),
        },
    )
    .await
    .expect("metric");
    let created = metric.created_at;

    tokio::time::sleep(Duration::from_millis(10)).await;

    let mut row = metric.into_active_model();
    row.created_at = Set(chrono::Utc::now().naive_utc());
    let updated = row.update(&db).await.expect("update metric");

    assert_eq!(updated.created_at, created);
}

#[tokio::test]
async fn behavior_last_activity_refreshes_on_every_save() {
    let db = setup_test_db().await;
    let (visitor_id, _) = seed_visitor_session(&db).await;

    let start = chrono::Utc::now().naive_utc();
    let frame = time_frames::create(
        &db,
        time_frames::CreateTimeFrame {
            name: "今天".to_string(),
            kind: TimeFrameKind::Daily,
            start_date: start,
            end_date: start + chrono::Duration::days(1),
        },
    )
    .await
    .expect("frame");

    let behavior = user_behaviors::record(
        &db,
        visitor_id,
        frame.id,
        user_behaviors::BehaviorStats {
            session_count: Some(1),
            ..Default::default()
        },
    )
    .await
    .expect("behavior");
    let first = behavior.last_activity;

    tokio::time::sleep(Duration::from_millis(10)).await;

    let touched = user_behaviors::touch(&db, behavior.id).await.expect("touch");
    assert!(touched.last_activity > first);

    tokio::time::sleep(Duration::from_millis(10)).await;

    // 二次写入走更新路径，同样刷新 last_activity
    let rerecorded = user_behaviors::record(
        &db,
        visitor_id,
        frame.id,
        user_behaviors::BehaviorStats {
            session_count: Some(2),
            ..Default::default()
        },
    )
    .await
    .expect("rerecord");
    assert_eq!(rerecorded.id, behavior.id);
    assert_eq!(rerecorded.session_count, 2);
    assert!(rerecorded.last_activity > touched.last_activity);
}
