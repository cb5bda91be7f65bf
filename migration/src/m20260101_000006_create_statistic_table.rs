use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_player_table::Player;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Statistic::Table)
                    .if_not_exists()
                    .col(pk_auto(Statistic::Id))
                    .col(integer(Statistic::PlayerId))
                    .col(string(Statistic::MessageId))
                    .col(
                        timestamp(Statistic::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_statistic_player_id")
                            .from(Statistic::Table, Statistic::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One tracked message per player
        manager
            .create_index(
                Index::create()
                    .name("idx_statistic_player_id")
                    .table(Statistic::Table)
                    .col(Statistic::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_statistic_player_id")
                    .table(Statistic::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Statistic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Statistic {
    Table,
    Id,
    PlayerId,
    MessageId,
    CreatedAt,
}
