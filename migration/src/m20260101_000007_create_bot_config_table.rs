use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BotConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(BotConfig::Id))
                    .col(string_uniq(BotConfig::Key))
                    .col(json(BotConfig::Value))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BotConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BotConfig {
    Table,
    Id,
    Key,
    Value,
}
