use super::*;
use crate::{error::AppError, model::unit::UnitStatus};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::factory;

/// Tests a player with a live dossier M and statistics message N.
///
/// Expected: both M and N are edited with fresh content and no rows are created
#[tokio::test]
async fn edits_both_tracked_messages_in_place() -> Result<(), AppError> {
    let mut fixture = Fixture::new().await;
    let db = &fixture.db;
    let player = factory::player::PlayerFactory::new(db)
        .rec_points(40)
        .build()
        .await?;
    let unit = factory::unit::UnitFactory::new(db, player.id)
        .name("Hammer")
        .callsign(Some("Anvil"))
        .status(UnitStatus::Kia)
        .build()
        .await?;
    factory::player_upgrade::create_player_upgrade_named(db, unit.id, "Smoke").await?;
    factory::create_dossier(db, player.id, 11).await?;
    factory::create_statistic(db, player.id, 22).await?;
    fixture.gateway.add_message(DOSSIER_CHANNEL, 11);
    fixture.gateway.add_message(STATISTICS_CHANNEL, 22);

    fixture
        .handler()
        .handle(&task(TaskKind::Update, Subject::Player(player.id)))
        .await?;

    let edits = fixture.gateway.edits();
    assert_eq!(edits.len(), 2);
    assert_eq!((edits[0].0, edits[0].1), (DOSSIER_CHANNEL, 11));
    assert_eq!((edits[1].0, edits[1].1), (STATISTICS_CHANNEL, 22));
    assert!(edits[1].2.contains("**Requisition Points:** 40"));
    assert!(edits[1]
        .2
        .contains("- **Hammer** \"Anvil\" | INFANTRY | KIA | Upgrades: Smoke"));

    assert!(fixture.gateway.sent().is_empty());
    assert!(fixture.pending().is_empty());
    assert_eq!(entity::prelude::Dossier::find().count(&fixture.db).await?, 1);
    assert_eq!(entity::prelude::Statistic::find().count(&fixture.db).await?, 1);

    Ok(())
}

/// Tests a player that was never posted.
///
/// Missing dossier and statistic rows both call for a create; only one is enqueued.
///
/// Expected: exactly one (Create, player) task and no edits
#[tokio::test]
async fn missing_rows_enqueue_single_create() -> Result<(), AppError> {
    let mut fixture = Fixture::new().await;
    let player = factory::create_player(&fixture.db).await?;

    fixture
        .handler()
        .handle(&task(TaskKind::Update, Subject::Player(player.id)))
        .await?;

    assert_eq!(
        fixture.pending(),
        vec![task(TaskKind::Create, Subject::Player(player.id))]
    );
    assert!(fixture.gateway.edits().is_empty());

    Ok(())
}

/// Tests a player with a statistics message but no dossier row.
///
/// Expected: statistics edited and one create enqueued for the dossier
#[tokio::test]
async fn missing_dossier_row_enqueues_create() -> Result<(), AppError> {
    let mut fixture = Fixture::new().await;
    let player = factory::create_player(&fixture.db).await?;
    factory::create_statistic(&fixture.db, player.id, 22).await?;
    fixture.gateway.add_message(STATISTICS_CHANNEL, 22);

    fixture
        .handler()
        .handle(&task(TaskKind::Update, Subject::Player(player.id)))
        .await?;

    assert_eq!(fixture.gateway.edits().len(), 1);
    assert_eq!(
        fixture.pending(),
        vec![task(TaskKind::Create, Subject::Player(player.id))]
    );

    Ok(())
}

/// Tests a tracked message deleted out-of-band.
///
/// Expected: a create is enqueued instead of an edit that would fail
#[tokio::test]
async fn deleted_message_enqueues_create() -> Result<(), AppError> {
    let mut fixture = Fixture::new().await;
    let player = factory::create_player(&fixture.db).await?;
    factory::create_dossier(&fixture.db, player.id, 11).await?;
    factory::create_statistic(&fixture.db, player.id, 22).await?;
    fixture.gateway.add_message(DOSSIER_CHANNEL, 11);

    fixture
        .handler()
        .handle(&task(TaskKind::Update, Subject::Player(player.id)))
        .await?;

    assert_eq!(fixture.gateway.edits().len(), 1);
    assert_eq!(
        fixture.pending(),
        vec![task(TaskKind::Create, Subject::Player(player.id))]
    );

    Ok(())
}

/// Tests a statistics channel removed from the server.
///
/// Expected: dossier edited, statistics skipped without retry or create
#[tokio::test]
async fn unresolvable_statistics_channel_is_skipped() -> Result<(), AppError> {
    let mut fixture = Fixture::new().await;
    fixture
        .settings
        .write()
        .await
        .set_statistics_channel(Some(54321));
    let player = factory::create_player(&fixture.db).await?;
    factory::create_dossier(&fixture.db, player.id, 11).await?;
    factory::create_statistic(&fixture.db, player.id, 22).await?;
    fixture.gateway.add_message(DOSSIER_CHANNEL, 11);

    fixture
        .handler()
        .handle(&task(TaskKind::Update, Subject::Player(player.id)))
        .await?;

    let edits = fixture.gateway.edits();
    assert_eq!(edits.len(), 1);
    assert_eq!(edits[0].0, DOSSIER_CHANNEL);
    assert!(fixture.pending().is_empty());

    Ok(())
}

/// Expected: exactly one (Update, player, 0) task for the unit's owner
#[tokio::test]
async fn unit_update_enqueues_one_player_update() -> Result<(), AppError> {
    let mut fixture = Fixture::new().await;
    let (player, unit) = factory::helpers::create_unit_with_player(&fixture.db).await?;

    fixture
        .handler()
        .handle(&task(TaskKind::Update, Subject::Unit(unit.id)))
        .await?;

    assert_eq!(
        fixture.pending(),
        vec![task(TaskKind::Update, Subject::Player(player.id))]
    );
    assert!(fixture.gateway.calls().is_empty());

    Ok(())
}

/// Expected: exactly one update for the player owning the upgraded unit
#[tokio::test]
async fn upgrade_update_enqueues_one_player_update() -> Result<(), AppError> {
    let mut fixture = Fixture::new().await;
    let (player, _unit, upgrade) =
        factory::helpers::create_upgrade_with_dependencies(&fixture.db).await?;

    fixture
        .handler()
        .handle(&task(TaskKind::Update, Subject::PlayerUpgrade(upgrade.id)))
        .await?;

    assert_eq!(
        fixture.pending(),
        vec![task(TaskKind::Update, Subject::Player(player.id))]
    );

    Ok(())
}

/// Expected: a failing edit surfaces as an error for the retry path
#[tokio::test]
async fn discord_failure_is_returned() -> Result<(), AppError> {
    let fixture = Fixture::new().await;
    let player = factory::create_player(&fixture.db).await?;
    factory::create_dossier(&fixture.db, player.id, 11).await?;
    fixture.gateway.add_message(DOSSIER_CHANNEL, 11);
    fixture.gateway.set_failing(true);

    let result = fixture
        .handler()
        .handle(&task(TaskKind::Update, Subject::Player(player.id)))
        .await;

    assert!(result.is_err());

    Ok(())
}
