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
                    .table(Medal::Table)
                    .if_not_exists()
                    .col(pk_auto(Medal::Id))
                    .col(integer(Medal::PlayerId))
                    .col(string(Medal::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_medal_player_id")
                            .from(Medal::Table, Medal::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Medal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Medal {
    Table,
    Id,
    PlayerId,
    Name,
}
