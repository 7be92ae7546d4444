use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Conversions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Conversions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Conversions::VisitorId).integer().not_null())
                    .col(ColumnDef::new(Conversions::SessionId).integer().not_null())
                    .col(
                        ColumnDef::new(Conversions::ConversionType)
                            .string_len(50)
                            .not_null()
                            .check(Expr::col(Conversions::ConversionType).is_in([
                                "signup", "purchase", "download", "contact", "custom",
                            ])),
                    )
                    .col(ColumnDef::new(Conversions::Value).decimal_len(10, 2))
                    .col(
                        ColumnDef::new(Conversions::Timestamp)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Conversions::Metadata).json())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conversions_visitor_id")
                            .from(Conversions::Table, Conversions::VisitorId)
                            .to(Visitors::Table, Visitors::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conversions_session_id")
                            .from(Conversions::Table, Conversions::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 默认排序按 timestamp 倒序
        manager
            .create_index(
                Index::create()
                    .name("idx_conversions_timestamp")
                    .table(Conversions::Table)
                    .col(Conversions::Timestamp)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_conversions_visitor")
                    .table(Conversions::Table)
                    .col(Conversions::VisitorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Conversions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Conversions {
    Table,
    Id,
    VisitorId,
    SessionId,
    ConversionType,
    Value,
    Timestamp,
    Metadata,
}

#[derive(DeriveIden)]
enum Visitors {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Sessions {
    Table,
    Id,
}
