use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents, ShardManager};
use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::oneshot;

use crate::{
    bot::handler::{ConsumerParts, Handler, ShardManagerContainer},
    config::Config,
    error::AppError,
    model::settings::SharedSettings,
    queue::{consumer::ConsumerExit, ConsumerConfig, TaskQueue, TaskReceiver},
};

/// Initializes the Discord bot client.
///
/// The queue consumer is not started here; the event handler spawns it once the bot
/// reports ready, so it never talks to Discord before the gateway is connected.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and owner ID
/// - `db` - Database connection used by the queue handlers
/// - `settings` - Shared bot settings read by the queue handlers
/// - `queue` - Producer handle given to the consumer for requeues and cascades
/// - `receiver` - Receiving half of the task queue
/// - `consumer_config` - Pacing, back-pressure, retry and rate-limit settings
/// - `consumer_exit` - Receives how the consumer loop ended once it stops
///
/// # Returns
/// - `Ok((Client, Arc<Http>, Arc<ShardManager>))` - Client with its HTTP client and
///   shard manager
/// - `Err(AppError)` - Failed to build the client
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    settings: SharedSettings,
    queue: TaskQueue,
    receiver: TaskReceiver,
    consumer_config: ConsumerConfig,
    consumer_exit: oneshot::Sender<ConsumerExit>,
) -> Result<(Client, Arc<Http>, Arc<ShardManager>), AppError> {
    // Tracked messages are posted through the HTTP API, guild events are enough
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(ConsumerParts {
        db,
        settings,
        queue,
        receiver,
        config: consumer_config,
        owner_id: config.owner_id,
        exit: consumer_exit,
    });

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    client
        .data
        .write()
        .await
        .insert::<ShardManagerContainer>(client.shard_manager.clone());

    let http = client.http.clone();
    let shard_manager = client.shard_manager.clone();

    Ok((client, http, shard_manager))
}

/// Starts the Discord bot in a blocking manner
///
/// This function starts the Discord bot client. It should be called from within
/// a tokio::spawn task since it will block until the bot shuts down.
///
/// # Arguments
/// - `client` - Initialized Discord client from `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot runs until its shards are shut down
/// - `Err(AppError)` if connecting to the gateway fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
