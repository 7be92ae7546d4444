pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_visitors_table;
mod m20250301_000003_create_sessions_table;
mod m20250301_000004_create_page_views_table;
mod m20250301_000005_create_events_table;
mod m20250301_000006_create_time_frames_table;
mod m20250301_000007_create_page_analytics_table;
mod m20250301_000008_create_user_behaviors_table;
mod m20250301_000009_create_conversions_table;
mod m20250301_000010_create_reports_table;
mod m20250301_000011_create_metrics_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_visitors_table::Migration),
            Box::new(m20250301_000003_create_sessions_table::Migration),
            Box::new(m20250301_000004_create_page_views_table::Migration),
            Box::new(m20250301_000005_create_events_table::Migration),
            Box::new(m20250301_000006_create_time_frames_table::Migration),
            Box::new(m20250301_000007_create_page_analytics_table::Migration),
            Box::new(m20250301_000008_create_user_behaviors_table::Migration),
            Box::new(m20250301_000009_create_conversions_table::Migration),
            Box::new(m20250301_000010_create_reports_table::Migration),
            Box::new(m20250301_000011_create_metrics_table::Migration),
        ]
    }
}
