use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBehaviors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserBehaviors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserBehaviors::VisitorId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserBehaviors::TimeFrameId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserBehaviors::SessionCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserBehaviors::AverageSessionDuration)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(UserBehaviors::PagesPerSession)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(UserBehaviors::ReturnRate)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(UserBehaviors::EngagementScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(UserBehaviors::LastActivity)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_behaviors_visitor_id")
                            .from(UserBehaviors::Table, UserBehaviors::VisitorId)
                            .to(Visitors::Table, Visitors::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_behaviors_time_frame_id")
                            .from(UserBehaviors::Table, UserBehaviors::TimeFrameId)
                            .to(TimeFrames::Table, TimeFrames::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一 (visitor, time_frame) 只允许一条汇总行，record 据此 upsert
        manager
            .create_index(
                Index::create()
                    .name("uk_user_behaviors_visitor_frame")
                    .table(UserBehaviors::Table)
                    .col(UserBehaviors::VisitorId)
                    .col(UserBehaviors::TimeFrameId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 默认排序按 last_activity 倒序
        manager
            .create_index(
                Index::create()
                    .name("idx_user_behaviors_last_activity")
                    .table(UserBehaviors::Table)
                    .col(UserBehaviors::LastActivity)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBehaviors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserBehaviors {
    Table,
    Id,
    VisitorId,
    TimeFrameId,
    SessionCount,
    AverageSessionDuration,
    PagesPerSession,
    ReturnRate,
    EngagementScore,
    LastActivity,
}

#[derive(DeriveIden)]
enum Visitors {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TimeFrames {
    Table,
    Id,
}
