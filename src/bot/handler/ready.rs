//! Ready event handler for bot initialization.
//!
//! The ready event fires after every successful gateway handshake, including
//! reconnects. The first one sets the bot's presence and starts the queue consumer;
//! later ones only log.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, Ready};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    bot::{
        gateway::SerenityGateway,
        handler::{ConsumerParts, ShardManagerContainer},
    },
    queue::{consumer::QueueConsumer, handler::TaskHandler},
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `consumer` - Consumer parts, present only until the first ready event
/// - `ctx` - Discord context for the presence, HTTP client and shard manager
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(consumer: &Mutex<Option<ConsumerParts>>, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::playing("Meta Campaign")));

    let Some(parts) = consumer.lock().await.take() else {
        tracing::debug!("Queue consumer already running");
        return;
    };

    let shard_manager = ctx
        .data
        .read()
        .await
        .get::<ShardManagerContainer>()
        .cloned();
    let gateway = Arc::new(SerenityGateway::new(ctx.http.clone(), shard_manager));
    let exit_tx = parts.exit;

    let handler = TaskHandler::new(
        parts.db,
        gateway.clone(),
        parts.settings,
        parts.queue.clone(),
        parts.config.lock_timeout_seconds,
    );
    let consumer = QueueConsumer::new(
        parts.config,
        parts.queue,
        parts.receiver,
        handler,
        gateway,
        parts.owner_id,
    );

    tokio::spawn(async move {
        let exit = consumer.run().await;
        if exit_tx.send(exit).is_err() {
            tracing::warn!("Queue consumer ended ({:?}) after the bot stopped", exit);
        }
    });
}
