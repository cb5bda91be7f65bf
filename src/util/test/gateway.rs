//! Recording [`DiscordGateway`] for tests.
//!
//! `MockGateway` keeps an in-memory picture of which channels and messages exist,
//! records every call made through it, and can be switched into a failing mode to
//! exercise the queue's retry path.

use serenity::async_trait;
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use crate::{bot::gateway::DiscordGateway, error::AppError};

/// A mutating call made through the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Send {
        channel_id: u64,
        message_id: u64,
        content: String,
    },
    Edit {
        channel_id: u64,
        message_id: u64,
        content: String,
    },
    Delete {
        channel_id: u64,
        message_id: u64,
    },
    DirectMessage {
        user_id: u64,
        content: String,
    },
    Shutdown,
}

#[derive(Default)]
struct MockState {
    channels: HashSet<u64>,
    messages: HashSet<(u64, u64)>,
    unknown_users: HashSet<u64>,
    next_message_id: u64,
    failing: bool,
    failing_channels: HashSet<u64>,
    calls: Vec<GatewayCall>,
}

#[derive(Clone, Default)]
pub struct MockGateway {
    state: Arc<Mutex<MockState>>,
}

impl MockGateway {
    pub fn new() -> Self {
        let gateway = Self::default();
        gateway.state.lock().unwrap().next_message_id = 1000;
        gateway
    }

    /// Gateway where the given channels resolve.
    pub fn with_channels(channels: &[u64]) -> Self {
        let gateway = Self::new();
        for channel_id in channels {
            gateway.add_channel(*channel_id);
        }
        gateway
    }

    pub fn add_channel(&self, channel_id: u64) {
        self.state.lock().unwrap().channels.insert(channel_id);
    }

    pub fn add_message(&self, channel_id: u64, message_id: u64) {
        self.state
            .lock()
            .unwrap()
            .messages
            .insert((channel_id, message_id));
    }

    /// Simulates a moderator deleting a message out-of-band.
    pub fn remove_message(&self, channel_id: u64, message_id: u64) {
        self.state
            .lock()
            .unwrap()
            .messages
            .remove(&(channel_id, message_id));
    }

    pub fn has_message(&self, channel_id: u64, message_id: u64) -> bool {
        self.state
            .lock()
            .unwrap()
            .messages
            .contains(&(channel_id, message_id))
    }

    pub fn forget_user(&self, user_id: u64) {
        self.state.lock().unwrap().unknown_users.insert(user_id);
    }

    /// While failing, every channel and message operation returns an error.
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    /// Makes every operation on one channel fail, leaving other channels working.
    pub fn fail_channel(&self, channel_id: u64) {
        self.state
            .lock()
            .unwrap()
            .failing_channels
            .insert(channel_id);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// `(channel_id, message_id, content)` of every sent message.
    pub fn sent(&self) -> Vec<(u64, u64, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::Send {
                    channel_id,
                    message_id,
                    content,
                } => Some((channel_id, message_id, content)),
                _ => None,
            })
            .collect()
    }

    /// `(channel_id, message_id, content)` of every edit.
    pub fn edits(&self) -> Vec<(u64, u64, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::Edit {
                    channel_id,
                    message_id,
                    content,
                } => Some((channel_id, message_id, content)),
                _ => None,
            })
            .collect()
    }

    pub fn deletes(&self) -> Vec<(u64, u64)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::Delete {
                    channel_id,
                    message_id,
                } => Some((channel_id, message_id)),
                _ => None,
            })
            .collect()
    }

    pub fn direct_messages(&self) -> Vec<(u64, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::DirectMessage { user_id, content } => Some((user_id, content)),
                _ => None,
            })
            .collect()
    }

    pub fn shutdown_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| **call == GatewayCall::Shutdown)
            .count()
    }

    fn check_failing(state: &MockState, channel_id: u64) -> Result<(), AppError> {
        if state.failing || state.failing_channels.contains(&channel_id) {
            return Err(AppError::InternalError(
                "Discord request failed".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DiscordGateway for MockGateway {
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, AppError> {
        let mut state = self.state.lock().unwrap();
        Self::check_failing(&state, channel_id)?;
        if !state.channels.contains(&channel_id) {
            return Err(AppError::NotFound(format!("Channel {} not found", channel_id)));
        }

        let message_id = state.next_message_id;
        state.next_message_id += 1;
        state.messages.insert((channel_id, message_id));
        state.calls.push(GatewayCall::Send {
            channel_id,
            message_id,
            content: content.to_string(),
        });

        Ok(message_id)
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        Self::check_failing(&state, channel_id)?;
        if !state.messages.contains(&(channel_id, message_id)) {
            return Err(AppError::NotFound(format!("Message {} not found", message_id)));
        }

        state.calls.push(GatewayCall::Edit {
            channel_id,
            message_id,
            content: content.to_string(),
        });

        Ok(())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        Self::check_failing(&state, channel_id)?;
        if !state.messages.remove(&(channel_id, message_id)) {
            return Err(AppError::NotFound(format!("Message {} not found", message_id)));
        }

        state.calls.push(GatewayCall::Delete {
            channel_id,
            message_id,
        });

        Ok(())
    }

    async fn message_exists(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError> {
        let state = self.state.lock().unwrap();
        Self::check_failing(&state, channel_id)?;

        Ok(state.messages.contains(&(channel_id, message_id)))
    }

    async fn user_mention(&self, user_id: u64) -> Result<Option<String>, AppError> {
        let state = self.state.lock().unwrap();
        if state.unknown_users.contains(&user_id) {
            return Ok(None);
        }

        Ok(Some(format!("<@{}>", user_id)))
    }

    async fn channel_exists(&self, channel_id: u64) -> Result<bool, AppError> {
        let state = self.state.lock().unwrap();
        Self::check_failing(&state, channel_id)?;

        Ok(state.channels.contains(&channel_id))
    }

    async fn send_direct_message(&self, user_id: u64, content: &str) -> Result<(), AppError> {
        self.state
            .lock()
            .unwrap()
            .calls
            .push(GatewayCall::DirectMessage {
                user_id,
                content: content.to_string(),
            });

        Ok(())
    }

    async fn shutdown(&self) {
        self.state.lock().unwrap().calls.push(GatewayCall::Shutdown);
    }
}
