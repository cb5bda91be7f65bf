use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_unit_table::Unit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerUpgrade::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerUpgrade::Id))
                    .col(integer(PlayerUpgrade::UnitId))
                    .col(string(PlayerUpgrade::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_upgrade_unit_id")
                            .from(PlayerUpgrade::Table, PlayerUpgrade::UnitId)
                            .to(Unit::Table, Unit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_upgrade_unit_id")
                    .table(PlayerUpgrade::Table)
                    .col(PlayerUpgrade::UnitId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_player_upgrade_unit_id")
                    .table(PlayerUpgrade::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerUpgrade::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerUpgrade {
    Table,
    Id,
    UnitId,
    Name,
}
