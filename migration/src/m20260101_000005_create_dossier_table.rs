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
                    .table(Dossier::Table)
                    .if_not_exists()
                    .col(pk_auto(Dossier::Id))
                    .col(integer(Dossier::PlayerId))
                    .col(string(Dossier::MessageId))
                    .col(
                        timestamp(Dossier::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dossier_player_id")
                            .from(Dossier::Table, Dossier::PlayerId)
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
                    .name("idx_dossier_player_id")
                    .table(Dossier::Table)
                    .col(Dossier::PlayerId)
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
                    .name("idx_dossier_player_id")
                    .table(Dossier::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Dossier::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Dossier {
    Table,
    Id,
    PlayerId,
    MessageId,
    CreatedAt,
}
