//! Discord messaging operations used by the task queue.
//!
//! The queue handlers only need a handful of Discord operations, so they talk to a
//! [`DiscordGateway`] rather than to serenity directly. [`SerenityGateway`] is the
//! production implementation; tests substitute a recording mock.
//!
//! Lookups that hit a missing channel, message or user answer with `false` / `None`.
//! Writes against a missing channel or message fail with `AppError::NotFound`. Every
//! other Discord failure is returned as `AppError::DiscordErr`. Both go through the
//! queue's retry path.

use dioxus_logger::tracing;
use serenity::{
    all::{ChannelId, CreateMessage, EditMessage, Mentionable, MessageId, ShardManager, UserId},
    async_trait,
    http::{Http, HttpError},
};
use std::sync::Arc;

use crate::error::AppError;

/// Discord operations the queue handlers depend on.
#[async_trait]
pub trait DiscordGateway: Send + Sync {
    /// Posts a message and returns the new message's ID.
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, AppError>;

    /// Replaces the content of an existing message.
    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError>;

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError>;

    /// Whether the message can still be fetched from the channel.
    async fn message_exists(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError>;

    /// Mention string for a Discord user, or `None` if the user cannot be resolved.
    async fn user_mention(&self, user_id: u64) -> Result<Option<String>, AppError>;

    /// Whether the channel can be resolved.
    async fn channel_exists(&self, channel_id: u64) -> Result<bool, AppError>;

    async fn send_direct_message(&self, user_id: u64, content: &str) -> Result<(), AppError>;

    /// Disconnects every shard, ending the bot session.
    async fn shutdown(&self);
}

/// Gateway backed by the bot's shared serenity HTTP client.
pub struct SerenityGateway {
    http: Arc<Http>,
    shard_manager: Option<Arc<ShardManager>>,
}

impl SerenityGateway {
    /// Creates a gateway over the bot's HTTP client.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client shared with the bot client
    /// - `shard_manager` - Shard manager used by `shutdown`; `None` makes shutdown a no-op
    pub fn new(http: Arc<Http>, shard_manager: Option<Arc<ShardManager>>) -> Self {
        Self {
            http,
            shard_manager,
        }
    }
}

/// Converts a failed write, naming the missing resource when Discord answered 404.
fn write_error(error: serenity::Error, resource: impl FnOnce() -> String) -> AppError {
    if is_not_found(&error) {
        AppError::NotFound(format!("{} not found", resource()))
    } else {
        error.into()
    }
}

/// Whether a serenity error is Discord answering 404 for the requested resource.
fn is_not_found(error: &serenity::Error) -> bool {
    match error {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            response.status_code.as_u16() == 404
        }
        _ => false,
    }
}

#[async_trait]
impl DiscordGateway for SerenityGateway {
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, AppError> {
        let message = ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await
            .map_err(|e| write_error(e, || format!("Channel {}", channel_id)))?;

        Ok(message.id.get())
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError> {
        let edit_builder = EditMessage::new().content(content);

        self.http
            .edit_message(
                ChannelId::new(channel_id),
                MessageId::new(message_id),
                &edit_builder,
                vec![],
            )
            .await
            .map_err(|e| write_error(e, || format!("Message {}", message_id)))?;

        Ok(())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        self.http
            .delete_message(ChannelId::new(channel_id), MessageId::new(message_id), None)
            .await
            .map_err(|e| write_error(e, || format!("Message {}", message_id)))?;

        Ok(())
    }

    async fn message_exists(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError> {
        match self
            .http
            .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn user_mention(&self, user_id: u64) -> Result<Option<String>, AppError> {
        match self.http.get_user(UserId::new(user_id)).await {
            Ok(user) => Ok(Some(user.mention().to_string())),
            Err(e) if is_not_found(&e) => {
                tracing::debug!("Discord user {} not found, rendering without mention", user_id);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn channel_exists(&self, channel_id: u64) -> Result<bool, AppError> {
        match self.http.get_channel(ChannelId::new(channel_id)).await {
            Ok(_) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn send_direct_message(&self, user_id: u64, content: &str) -> Result<(), AppError> {
        UserId::new(user_id)
            .direct_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }

    async fn shutdown(&self) {
        match &self.shard_manager {
            Some(shard_manager) => shard_manager.shutdown_all().await,
            None => tracing::warn!("No shard manager attached, skipping shard shutdown"),
        }
    }
}
