use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Ready, ShardManager};
use serenity::async_trait;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};

use crate::{
    model::settings::SharedSettings,
    queue::{consumer::ConsumerExit, ConsumerConfig, TaskQueue, TaskReceiver},
};

pub mod ready;

/// Key for the client's shard manager in the serenity type map.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// Everything the queue consumer needs apart from the Discord connection.
pub struct ConsumerParts {
    pub db: DatabaseConnection,
    pub settings: SharedSettings,
    pub queue: TaskQueue,
    pub receiver: TaskReceiver,
    pub config: ConsumerConfig,
    pub owner_id: u64,
    /// Receives how the consumer loop ended.
    pub exit: oneshot::Sender<ConsumerExit>,
}

/// Discord bot event handler
pub struct Handler {
    /// Taken by the first ready event; reconnects find it empty.
    consumer: Mutex<Option<ConsumerParts>>,
}

impl Handler {
    pub fn new(consumer: ConsumerParts) -> Self {
        Self {
            consumer: Mutex::new(Some(consumer)),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.consumer, ctx, ready).await;
    }
}
