use crate::data::{
    medal::MedalRepository, player_upgrade::PlayerUpgradeRepository, unit::UnitRepository,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests that a player's units come back in creation order and exclude other players.
///
/// Expected: Ok with only the player's units, oldest first
#[tokio::test]
async fn gets_units_for_player_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let player = factory::create_player(db).await?;
    let other = factory::create_player(db).await?;
    let first = factory::create_unit(db, player.id).await?;
    factory::create_unit(db, other.id).await?;
    let second = factory::create_unit(db, player.id).await?;

    let units = UnitRepository::new(db).get_by_player_id(player.id).await?;

    let ids: Vec<i32> = units.iter().map(|unit| unit.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Expected: Ok with the upgrades attached to the unit only
#[tokio::test]
async fn gets_upgrades_for_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (player, unit, upgrade) = factory::helpers::create_upgrade_with_dependencies(db).await?;
    let other_unit = factory::create_unit(db, player.id).await?;
    factory::create_player_upgrade(db, other_unit.id).await?;

    let upgrades = PlayerUpgradeRepository::new(db)
        .get_by_unit_id(unit.id)
        .await?;

    assert_eq!(upgrades.len(), 1);
    assert_eq!(upgrades[0].name, upgrade.name);

    Ok(())
}

/// Tests that repeated awards of the same medal are all returned in award order.
///
/// Expected: Ok with every award, duplicates included
#[tokio::test]
async fn gets_medal_names_in_award_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let player = factory::create_player(db).await?;
    factory::create_medal(db, player.id, "SCM").await?;
    factory::create_medal(db, player.id, "FCM").await?;
    factory::create_medal(db, player.id, "SCM").await?;

    let names = MedalRepository::new(db)
        .get_names_by_player_id(player.id)
        .await?;

    assert_eq!(names, vec!["SCM", "FCM", "SCM"]);

    Ok(())
}
