use crate::{data::player::PlayerRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

/// Expected: Ok(Some(Player)) with the Discord ID parsed to a number
#[tokio::test]
async fn finds_existing_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::player::PlayerFactory::new(db)
        .discord_id("123456789")
        .name("Kestrel")
        .lore(Some("Ex-navy."))
        .rec_points(7)
        .bonus_pay(150)
        .build()
        .await?;

    let player = PlayerRepository::new(db)
        .find_by_id(created.id)
        .await?
        .unwrap();

    assert_eq!(player.discord_id, 123456789);
    assert_eq!(player.name, "Kestrel");
    assert_eq!(player.lore.as_deref(), Some("Ex-navy."));
    assert_eq!(player.rec_points, 7);
    assert_eq!(player.bonus_pay, 150);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(PlayerRepository::new(db).find_by_id(404).await?.is_none());

    Ok(())
}
