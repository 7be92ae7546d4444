use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PageAnalytics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PageAnalytics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PageAnalytics::PageViewId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PageAnalytics::TimeFrameId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PageAnalytics::UniqueVisitors)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PageAnalytics::TotalViews)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PageAnalytics::AverageTimeOnPage)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(PageAnalytics::BounceRate)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(PageAnalytics::ExitRate)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(PageAnalytics::ConversionRate)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_page_analytics_page_view_id")
                            .from(PageAnalytics::Table, PageAnalytics::PageViewId)
                            .to(PageViews::Table, PageViews::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_page_analytics_time_frame_id")
                            .from(PageAnalytics::Table, PageAnalytics::TimeFrameId)
                            .to(TimeFrames::Table, TimeFrames::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_page_analytics_time_frame")
                    .table(PageAnalytics::Table)
                    .col(PageAnalytics::TimeFrameId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_page_analytics_page_view")
                    .table(PageAnalytics::Table)
                    .col(PageAnalytics::PageViewId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PageAnalytics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PageAnalytics {
    Table,
    Id,
    PageViewId,
    TimeFrameId,
    UniqueVisitors,
    TotalViews,
    AverageTimeOnPage,
    BounceRate,
    ExitRate,
    ConversionRate,
}

#[derive(DeriveIden)]
enum PageViews {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TimeFrames {
    Table,
    Id,
}
