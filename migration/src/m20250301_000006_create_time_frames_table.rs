use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeFrames::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimeFrames::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TimeFrames::Name).string_len(50).not_null())
                    .col(
                        ColumnDef::new(TimeFrames::TimeFrame)
                            .string_len(20)
                            .not_null()
                            .check(Expr::col(TimeFrames::TimeFrame).is_in([
                                "hourly", "daily", "weekly", "monthly", "yearly",
                            ])),
                    )
                    .col(ColumnDef::new(TimeFrames::StartDate).timestamp().not_null())
                    .col(ColumnDef::new(TimeFrames::EndDate).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // 默认排序按 start_date 倒序，供列表查询使用
        manager
            .create_index(
                Index::create()
                    .name("idx_time_frames_start_date")
                    .table(TimeFrames::Table)
                    .col(TimeFrames::StartDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeFrames::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TimeFrames {
    Table,
    Id,
    Name,
    TimeFrame,
    StartDate,
    EndDate,
}
