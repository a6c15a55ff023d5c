use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_board_table::Board;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(List::Table)
                    .if_not_exists()
                    .col(pk_auto(List::Id))
                    .col(uuid_uniq(List::PublicId))
                    .col(integer(List::BoardId))
                    .col(string(List::Title))
                    .col(text_null(List::Description))
                    .col(
                        timestamp_with_time_zone(List::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(List::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_board_id")
                            .from(List::Table, List::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_list_board_id")
                    .table(List::Table)
                    .col(List::BoardId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_list_board_id")
                    .table(List::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(List::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum List {
    Table,
    Id,
    PublicId,
    BoardId,
    Title,
    Description,
    CreatedAt,
    UpdatedAt,
}
