mod bot;
mod config;
mod data;
mod error;
mod model;
mod queue;
mod scheduler;
mod service;
mod startup;
mod util;

use dioxus_logger::tracing;

use crate::{
    config::Config,
    error::AppError,
    queue::{ConsumerConfig, TaskQueue},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logger(config.log_level)?;

    let db = startup::connect_to_database(&config).await?;
    let settings = startup::load_settings(&db).await?;

    tracing::info!("Starting bot");

    let (queue, receiver) = TaskQueue::channel();
    let (exit_tx, exit_rx) = tokio::sync::oneshot::channel();

    let (bot_client, _discord_http, shard_manager) = bot::start::init_bot(
        &config,
        db.clone(),
        settings.clone(),
        queue.clone(),
        receiver,
        ConsumerConfig::default(),
        exit_tx,
    )
    .await?;

    let _keepalive = scheduler::keepalive::start_scheduler(db.clone()).await?;

    let shutdown_queue = queue.clone();
    let shutdown_db = db.clone();
    let shutdown_settings = settings.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        tracing::info!("Shutting down");

        shutdown_queue.terminate();

        if let Err(e) = startup::persist_settings(&shutdown_db, &shutdown_settings).await {
            tracing::error!("Failed to save bot settings: {}", e);
        }

        shard_manager.shutdown_all().await;
    });

    bot::start::start_bot(bot_client).await?;

    // Shards stop before the consumer does; wait for its verdict
    startup::consumer_outcome(exit_rx.await)?;

    tracing::info!("Bot stopped");

    Ok(())
}
