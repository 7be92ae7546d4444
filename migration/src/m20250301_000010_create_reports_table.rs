use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reports::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reports::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Reports::ReportType)
                            .string_len(50)
                            .not_null()
                            .check(Expr::col(Reports::ReportType).is_in([
                                "visitor",
                                "page",
                                "conversion",
                                "custom",
                            ])),
                    )
                    .col(ColumnDef::new(Reports::TimeFrameId).integer().not_null())
                    .col(ColumnDef::new(Reports::CreatedBy).integer())
                    .col(
                        ColumnDef::new(Reports::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Reports::Data).json().not_null())
                    .col(
                        ColumnDef::new(Reports::IsScheduled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Reports::ScheduleFrequency).string_len(50))
                    .col(ColumnDef::new(Reports::LastGenerated).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_time_frame_id")
                            .from(Reports::Table, Reports::TimeFrameId)
                            .to(TimeFrames::Table, TimeFrames::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_created_by")
                            .from(Reports::Table, Reports::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 默认排序按 created_at 倒序
        manager
            .create_index(
                Index::create()
                    .name("idx_reports_created_at")
                    .table(Reports::Table)
                    .col(Reports::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reports_time_frame")
                    .table(Reports::Table)
                    .col(Reports::TimeFrameId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Reports {
    Table,
    Id,
    Name,
    ReportType,
    TimeFrameId,
    CreatedBy,
    CreatedAt,
    Data,
    IsScheduled,
    ScheduleFrequency,
    LastGenerated,
}

#[derive(DeriveIden)]
enum TimeFrames {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
