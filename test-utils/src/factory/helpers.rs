//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique names and Discord
/// IDs across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a player owning a single unit.
///
/// # Returns
/// - `Ok((player, unit))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_unit_with_player(
    db: &DatabaseConnection,
) -> Result<(entity::player::Model, entity::unit::Model), DbErr> {
    let player = crate::factory::player::create_player(db).await?;
    let unit = crate::factory::unit::create_unit(db, player.id).await?;

    Ok((player, unit))
}

/// Creates a player, one unit and one upgrade on that unit.
///
/// # Returns
/// - `Ok((player, unit, upgrade))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_upgrade_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::player::Model,
        entity::unit::Model,
        entity::player_upgrade::Model,
    ),
    DbErr,
> {
    let (player, unit) = create_unit_with_player(db).await?;
    let upgrade = crate::factory::player_upgrade::create_player_upgrade(db, unit.id).await?;

    Ok((player, unit, upgrade))
}
