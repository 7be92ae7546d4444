use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Metrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Metrics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Metrics::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Metrics::Description).text().not_null())
                    .col(ColumnDef::new(Metrics::Formula).text().not_null())
                    .col(ColumnDef::new(Metrics::Unit).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Metrics::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Metrics::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Metrics::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 默认排序按名称升序
        manager
            .create_index(
                Index::create()
                    .name("idx_metrics_name")
                    .table(Metrics::Table)
                    .col(Metrics::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Metrics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Metrics {
    Table,
    Id,
    Name,
    Description,
    Formula,
    Unit,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
