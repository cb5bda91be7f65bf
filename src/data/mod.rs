//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table. Repositories use SeaORM entity models internally and return domain models to
//! keep the queue handlers and services independent of the entity layer.

pub mod bot_config;
pub mod dossier;
pub mod medal;
pub mod player;
pub mod player_upgrade;
pub mod statistic;
pub mod unit;

#[cfg(test)]
mod test;

use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr};

/// Bounds how long a statement waits on a locked row before failing.
///
/// Issues the backend-specific session setting so that a contended row surfaces as a
/// `DbErr` instead of stalling the caller indefinitely. The setting binds only the
/// connection the statement runs on, so callers pass the transaction that every
/// following query also uses.
///
/// # Arguments
/// - `db` - Connection or transaction to configure
/// - `seconds` - Maximum lock wait in seconds
///
/// # Returns
/// - `Ok(())` - Timeout applied
/// - `Err(DbErr)` - Statement failed
pub async fn set_lock_timeout<C: ConnectionTrait>(db: &C, seconds: u64) -> Result<(), DbErr> {
    let statement = match db.get_database_backend() {
        DatabaseBackend::MySql => format!("SET SESSION innodb_lock_wait_timeout = {}", seconds),
        DatabaseBackend::Postgres => format!("SET lock_timeout = '{}s'", seconds),
        DatabaseBackend::Sqlite => format!("PRAGMA busy_timeout = {}", seconds * 1000),
        #[allow(unreachable_patterns)]
        _ => return Ok(()),
    };

    db.execute_unprepared(&statement).await?;

    Ok(())
}
