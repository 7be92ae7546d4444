use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PageViews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PageViews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PageViews::SessionId).integer().not_null())
                    .col(ColumnDef::new(PageViews::Path).string_len(2048).not_null())
                    .col(
                        ColumnDef::new(PageViews::ViewedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_page_views_session_id")
                            .from(PageViews::Table, PageViews::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_page_views_session")
                    .table(PageViews::Table)
                    .col(PageViews::SessionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PageViews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PageViews {
    Table,
    Id,
    SessionId,
    Path,
    ViewedAt,
}

#[derive(DeriveIden)]
enum Sessions {
    Table,
    Id,
}
