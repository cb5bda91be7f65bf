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
                    .table(Unit::Table)
                    .if_not_exists()
                    .col(pk_auto(Unit::Id))
                    .col(integer(Unit::PlayerId))
                    .col(string(Unit::Name))
                    .col(string(Unit::UnitType))
                    .col(string(Unit::Status))
                    .col(string_null(Unit::Callsign))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_unit_player_id")
                            .from(Unit::Table, Unit::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_unit_player_id")
                    .table(Unit::Table)
                    .col(Unit::PlayerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_unit_player_id")
                    .table(Unit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Unit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Unit {
    Table,
    Id,
    PlayerId,
    Name,
    UnitType,
    Status,
    Callsign,
}
