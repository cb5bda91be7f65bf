pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_player_table;
mod m20260101_000002_create_unit_table;
mod m20260101_000003_create_player_upgrade_table;
mod m20260101_000004_create_medal_table;
mod m20260101_000005_create_dossier_table;
mod m20260101_000006_create_statistic_table;
mod m20260101_000007_create_bot_config_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_player_table::Migration),
            Box::new(m20260101_000002_create_unit_table::Migration),
            Box::new(m20260101_000003_create_player_upgrade_table::Migration),
            Box::new(m20260101_000004_create_medal_table::Migration),
            Box::new(m20260101_000005_create_dossier_table::Migration),
            Box::new(m20260101_000006_create_statistic_table::Migration),
            Box::new(m20260101_000007_create_bot_config_table::Migration),
        ]
    }
}
