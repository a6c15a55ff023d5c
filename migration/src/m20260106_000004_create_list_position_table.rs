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
                    .table(ListPosition::Table)
                    .if_not_exists()
                    .col(pk_auto(ListPosition::Id))
                    .col(uuid_uniq(ListPosition::PublicId))
                    // One position record per board
                    .col(integer_uniq(ListPosition::BoardId))
                    .col(text(ListPosition::ListOrder).default("[]"))
                    .col(
                        timestamp_with_time_zone(ListPosition::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ListPosition::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_position_board_id")
                            .from(ListPosition::Table, ListPosition::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListPosition::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ListPosition {
    Table,
    Id,
    PublicId,
    BoardId,
    ListOrder,
    CreatedAt,
    UpdatedAt,
}
