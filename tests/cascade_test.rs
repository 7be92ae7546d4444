//! 删除级联与外键置空的集成测试

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, EntityTrait, PaginatorTrait};

use site_analytics::store::{
    conversions, page_analytics, reports, time_frames, tracking, user_behaviors,
};
use entity::reports::ReportType;
use entity::time_frames::TimeFrameKind;

async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect test db");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

fn week_frame() -> time_frames::CreateTimeFrame {
    let start = chrono::Utc::now().naive_utc();
    time_frames::CreateTimeFrame {
        name: "本周".to_string(),
        kind: TimeFrameKind::Weekly,
        start_date: start,
        end_date: start + chrono::Duration::days(7),
    }
}

#[tokio::test]
async fn deleting_time_frame_cascades_to_dependents() {
    let db = setup_test_db().await;

    let frame = time_frames::create(&db, week_frame()).await.expect("frame");
    let visitor = tracking::create_visitor(&db).await.expect("visitor");
    let session = tracking::start_session(&db, visitor.id).await.expect("session");
    let page_view = tracking::record_page_view(&db, session.id, "/pricing")
        .await
        .expect("page view");

    page_analytics::record(&db, page_view.id, frame.id, Default::default())
        .await
        .expect("snapshot");
    user_behaviors::record(&db, visitor.id, frame.id, Default::default())
        .await
        .expect("behavior");
    reports::create(
        &db,
        reports::CreateReport {
            name: "周报".to_string(),
            report_type: ReportType::Page,
            time_frame_id: frame.id,
            created_by: None,
            data: serde_json::json!({"rows": []}),
            is_scheduled: false,
            schedule_frequency: None,
        },
    )
    .await
    .expect("report");

    time_frames::delete(&db, frame.id).await.expect("delete frame");

    // 依赖该时间窗口的三类记录应全部被级联删除
    assert_eq!(entity::PageAnalytics::find().count(&db).await.unwrap(), 0);
    assert_eq!(entity::UserBehaviors::find().count(&db).await.unwrap(), 0);
    assert_eq!(entity::Reports::find().count(&db).await.unwrap(), 0);

    // 外键锚点本身不受影响
    assert_eq!(entity::Visitors::find().count(&db).await.unwrap(), 1);
    assert_eq!(entity::PageViews::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn deleting_user_nullifies_report_creator() {
    let db = setup_test_db().await;

    let frame = time_frames::create(&db, week_frame()).await.expect("frame");
    let user = tracking::create_user(&db, "alice", "alice@example.com")
        .await
        .expect("user");

    let report = reports::create(
        &db,
        reports::CreateReport {
            name: "访客报表".to_string(),
            report_type: ReportType::Visitor,
            time_frame_id: frame.id,
            created_by: Some(user.id),
            data: serde_json::json!({"total": 7}),
            is_scheduled: false,
            schedule_frequency: None,
        },
    )
    .await
    .expect("report");
    assert_eq!(report.created_by, Some(user.id));

    entity::Users::delete_by_id(user.id)
        .exec(&db)
        .await
        .expect("delete user");

    // 报表保留，创建者引用被置空
    let survivor = reports::get(&db, report.id)
        .await
        .expect("query report")
        .expect("report survives");
    assert_eq!(survivor.created_by, None);
}

#[tokio::test]
async fn deleting_visitor_cascades_tracking_chain() {
    let db = setup_test_db().await;

    let frame = time_frames::create(&db, week_frame()).await.expect("frame");
    let visitor = tracking::create_visitor(&db).await.expect("visitor");
    let session = tracking::start_session(&db, visitor.id).await.expect("session");
    tracking::record_page_view(&db, session.id, "/").await.expect("page view");
    tracking::record_event(&db, session.id, "cta_click").await.expect("event");
    user_behaviors::record(&db, visitor.id, frame.id, Default::default())
        .await
        .expect("behavior");
    conversions::record(
        &db,
        conversions::RecordConversion {
            visitor_id: visitor.id,
            session_id: session.id,
            conversion_type: entity::conversions::ConversionType::Signup,
            value: None,
            metadata: None,
        },
    )
    .await
    .expect("conversion");

    entity::Visitors::delete_by_id(visitor.id)
        .exec(&db)
        .await
        .expect("delete visitor");

    // 会话、页面浏览、事件、行为与转化全部随访客级联删除
    assert_eq!(entity::Sessions::find().count(&db).await.unwrap(), 0);
    assert_eq!(entity::PageViews::find().count(&db).await.unwrap(), 0);
    assert_eq!(entity::Events::find().count(&db).await.unwrap(), 0);
    assert_eq!(entity::UserBehaviors::find().count(&db).await.unwrap(), 0);
    assert_eq!(entity::Conversions::find().count(&db).await.unwrap(), 0);

    // 时间窗口不受影响
    assert_eq!(entity::TimeFrames::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn deleting_missing_time_frame_is_business_error() {
    let db = setup_test_db().await;
    let err = time_frames::delete(&db, 999).await.unwrap_err();
    assert!(matches!(
        err,
        site_analytics::AnalyticsError::Business { .. }
    ));
}
