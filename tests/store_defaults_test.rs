//! 默认值、默认排序与枚举约束的集成测试

use migration::{Migrator, MigratorTrait};
use pretty_assertions::assert_eq;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use entity::reports::ReportType;
use entity::time_frames::TimeFrameKind;
use site_analytics::store::{
    conversions, metrics, page_analytics, reports, time_frames, tracking, user_behaviors,
};

async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect test db");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

fn frame_at(name: &str, days_ago: i64) -> time_frames::CreateTimeFrame {
    let start = chrono::Utc::now().naive_utc() - chrono::Duration::days(days_ago);
    time_frames::CreateTimeFrame {
        name: name.to_string(),
        kind: TimeFrameKind::Daily,
        start_date: start,
        end_date: start + chrono::Duration::days(1),
    }
}

#[tokio::test]
async fn page_analytics_defaults_to_zero() {
    let db = setup_test_db().await;

    let frame = time_frames::create(&db, frame_at("今天", 0)).await.expect("frame");
    let visitor = tracking::create_visitor(&db).await.expect("visitor");
    let session = tracking::start_session(&db, visitor.id).await.expect("session");
    let page_view = tracking::record_page_view(&db, session.id, "/docs")
        .await
        .expect("page view");

    let snapshot = page_analytics::record(&db, page_view.id, frame.id, Default::default())
        .await
        .expect("snapshot");

    assert_eq!(snapshot.unique_visitors, 0);
    assert_eq!(snapshot.total_views, 0);
    assert_eq!(snapshot.average_time_on_page, 0.0);
    assert_eq!(snapshot.bounce_rate, 0.0);
    assert_eq!(snapshot.exit_rate, 0.0);
    assert_eq!(snapshot.conversion_rate, 0.0);
}

#[tokio::test]
async fn time_frames_list_orders_by_start_date_desc() {
    let db = setup_test_db().await;

    time_frames::create(&db, frame_at("前天", 2)).await.expect("frame");
    time_frames::create(&db, frame_at("今天", 0)).await.expect("frame");
    time_frames::create(&db, frame_at("昨天", 1)).await.expect("frame");

    let frames = time_frames::list(&db).await.expect("list");
    let names: Vec<&str> = frames.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["今天", "昨天", "前天"]);
}

#[tokio::test]
async fn inverted_time_frame_range_is_accepted() {
    let db = setup_test_db().await;

    // 上游不强制 end_date >= start_date，这里保持同样的宽松行为
    let start = chrono::Utc::now().naive_utc();
    let frame = time_frames::create(
        &db,
        time_frames::CreateTimeFrame {
            name: "倒置窗口".to_string(),
            kind: TimeFrameKind::Hourly,
            start_date: start,
            end_date: start - chrono::Duration::hours(1),
        },
    )
    .await
    .expect("inverted frame accepted");
    assert!(frame.end_date < frame.start_date);
}

#[tokio::test]
async fn raw_insert_with_unknown_choice_is_rejected() {
    let db = setup_test_db().await;
    let (visitor, session) = {
        let visitor = tracking::create_visitor(&db).await.expect("visitor");
        let session = tracking::start_session(&db, visitor.id).await.expect("session");
        (visitor, session)
    };

    // 绕过强类型入口直接写非法枚举值，应被 CHECK 约束拒绝
    let row = entity::conversions::ActiveModel {
        visitor_id: Set(visitor.id),
        session_id: Set(session.id),
        conversion_type: Set("refund".to_string()),
        value: Set(None),
        metadata: Set(None),
        ..Default::default()
    };
    assert!(row.insert(&db).await.is_err());

    let start = chrono::Utc::now().naive_utc();
    let frame = entity::time_frames::ActiveModel {
        name: Set("双周".to_string()),
        time_frame: Set("biweekly".to_string()),
        start_date: Set(start),
        end_date: Set(start),
        ..Default::default()
    };
    assert!(frame.insert(&db).await.is_err());
}

#[tokio::test]
async fn dangling_foreign_key_is_rejected() {
    let db = setup_test_db().await;

    let row = entity::page_analytics::ActiveModel {
        page_view_id: Set(424_242),
        time_frame_id: Set(424_242),
        ..Default::default()
    };
    assert!(row.insert(&db).await.is_err());
}

#[tokio::test]
async fn scheduled_report_without_frequency_is_accepted() {
    let db = setup_test_db().await;

    let frame = time_frames::create(&db, frame_at("今天", 0)).await.expect("frame");

    // is_scheduled 为 true 时 schedule_frequency 不强制（与上游一致）
    let report = reports::create(
        &db,
        reports::CreateReport {
            name: "定时转化报表".to_string(),
            report_type: ReportType::Conversion,
            time_frame_id: frame.id,
            created_by: None,
            data: serde_json::json!({"conversions": []}),
            is_scheduled: true,
            schedule_frequency: None,
        },
    )
    .await
    .expect("scheduled report");
    assert!(report.is_scheduled);
    assert_eq!(report.schedule_frequency, None);
    assert_eq!(report.last_generated, None);

    let generated = reports::mark_generated(&db, report.id).await.expect("mark");
    assert!(generated.last_generated.is_some());
}

#[tokio::test]
async fn reports_list_orders_by_created_at_desc() {
    let db = setup_test_db().await;
    let frame = time_frames::create(&db, frame_at("今天", 0)).await.expect("frame");

    for (idx, name) in ["第一份", "第二份"].iter().enumerate() {
        reports::create(
            &db,
            reports::CreateReport {
                name: (*name).to_string(),
                report_type: ReportType::Custom,
                time_frame_id: frame.id,
                created_by: None,
                data: serde_json::json!({"seq": idx}),
                is_scheduled: false,
                schedule_frequency: None,
            },
        )
        .await
        .expect("report");
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    let listed = reports::list(&db).await.expect("list");
    assert_eq!(listed[0].name, "第二份");
    assert_eq!(listed[1].name, "第一份");
}

#[tokio::test]
async fn metrics_list_orders_by_name_and_deactivate_works() {
    let db = setup_test_db().await;

    for (name, unit) in [("b-跳出率", "%"), ("a-参与度", "score")] {
        metrics::create(
            &db,
            metrics::CreateMetric {
                name: name.to_string(),
                description: String::new(),
                formula: "x / y".to_string(),
                unit: unit.to_string(),
            },
        )
        .await
        .expect("metric");
    }

    let listed = metrics::list(&db).await.expect("list");
    assert_eq!(listed[0].name, "a-参与度");
    assert_eq!(listed[1].name, "b-跳出率");
    assert!(listed.iter().all(|m| m.is_active));

    let deactivated = metrics::deactivate(&db, listed[0].id).await.expect("deactivate");
    assert!(!deactivated.is_active);
}

#[tokio::test]
async fn page_analytics_lists_follow_time_frame_order() {
    let db = setup_test_db().await;

    let old_frame = time_frames::create(&db, frame_at("上周", 7)).await.expect("frame");
    let new_frame = time_frames::create(&db, frame_at("今天", 0)).await.expect("frame");

    let visitor = tracking::create_visitor(&db).await.expect("visitor");
    let session = tracking::start_session(&db, visitor.id).await.expect("session");
    let page_view = tracking::record_page_view(&db, session.id, "/landing")
        .await
        .expect("page view");

    page_analytics::record(&db, page_view.id, old_frame.id, Default::default())
        .await
        .expect("old snapshot");
    page_analytics::record(&db, page_view.id, new_frame.id, Default::default())
        .await
        .expect("new snapshot");

    // 全量列表按所属时间窗口的 start_date 倒序
    let all = page_analytics::list(&db).await.expect("list all");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].time_frame_id, new_frame.id);
    assert_eq!(all[1].time_frame_id, old_frame.id);

    let scoped = page_analytics::list_for_time_frame(&db, old_frame.id)
        .await
        .expect("list scoped");
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].time_frame_id, old_frame.id);

    let fetched = time_frames::get(&db, new_frame.id)
        .await
        .expect("get frame")
        .expect("frame exists");
    assert_eq!(fetched.display_name(), "今天 (daily)");
}

#[tokio::test]
async fn user_behaviors_list_orders_by_last_activity_desc() {
    let db = setup_test_db().await;
    let frame = time_frames::create(&db, frame_at("今天", 0)).await.expect("frame");

    let first = tracking::create_visitor(&db).await.expect("visitor");
    let second = tracking::create_visitor(&db).await.expect("visitor");

    user_behaviors::record(&db, first.id, frame.id, Default::default())
        .await
        .expect("behavior");
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    user_behaviors::record(&db, second.id, frame.id, Default::default())
        .await
        .expect("behavior");

    let listed = user_behaviors::list(&db).await.expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].visitor_id, second.id);
    assert_eq!(listed[1].visitor_id, first.id);
}

#[tokio::test]
async fn duplicate_behavior_row_is_rejected() {
    let db = setup_test_db().await;
    let frame = time_frames::create(&db, frame_at("今天", 0)).await.expect("frame");
    let visitor = tracking::create_visitor(&db).await.expect("visitor");

    user_behaviors::record(&db, visitor.id, frame.id, Default::default())
        .await
        .expect("behavior");

    // 绕过 upsert 入口直接插入第二条同 (visitor, time_frame) 行，应被唯一索引拒绝
    let duplicate = entity::user_behaviors::ActiveModel {
        visitor_id: Set(visitor.id),
        time_frame_id: Set(frame.id),
        ..Default::default()
    };
    assert!(duplicate.insert(&db).await.is_err());

    let listed = user_behaviors::list(&db).await.expect("list");
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn conversions_list_orders_by_timestamp_desc() {
    let db = setup_test_db().await;
    let visitor = tracking::create_visitor(&db).await.expect("visitor");
    let session = tracking::start_session(&db, visitor.id).await.expect("session");

    for kind in [
        entity::conversions::ConversionType::Signup,
        entity::conversions::ConversionType::Download,
    ] {
        conversions::record(
            &db,
            conversions::RecordConversion {
                visitor_id: visitor.id,
                session_id: session.id,
                conversion_type: kind,
                value: None,
                metadata: None,
            },
        )
        .await
        .expect("conversion");
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    let listed = conversions::list_for_visitor(&db, visitor.id).await.expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].conversion_type, "download");
    assert_eq!(listed[1].conversion_type, "signup");
    assert!(listed[0].timestamp >= listed[1].timestamp);
}
