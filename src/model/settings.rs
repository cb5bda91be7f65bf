//! Runtime bot settings.
//!
//! Settings are loaded from the `bot_config` table at startup, shared between the queue
//! consumer and admin operations through [`SharedSettings`], mutated in place, and written
//! back explicitly when the bot shuts down.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::RwLock;

/// Settings shared between the queue consumer and admin operations.
pub type SharedSettings = Arc<RwLock<BotSettings>>;

/// Channel configuration stored under the `BOT_CONFIG` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Channel where dossier messages are posted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dossier_channel_id: Option<u64>,
    /// Channel where statistics messages are posted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics_channel_id: Option<u64>,
    /// Keys this bot does not interpret, kept so they survive a save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Medal name to three-part emoji token mapping, stored under the `MEDAL_EMOTES` key.
///
/// Each medal is drawn from a left, center and right custom emoji placed side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MedalEmotes(BTreeMap<String, [String; 3]>);

impl MedalEmotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered emoji token for a medal, or `None` if the medal has no emotes.
    pub fn token(&self, medal: &str) -> Option<String> {
        self.0.get(medal).map(|parts| parts.concat())
    }

    pub fn contains(&self, medal: &str) -> bool {
        self.0.contains_key(medal)
    }

    pub fn insert(&mut self, medal: impl Into<String>, parts: [String; 3]) {
        self.0.insert(medal.into(), parts);
    }

    pub fn remove(&mut self, medal: &str) -> bool {
        self.0.remove(medal).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, [String; 3])> for MedalEmotes {
    fn from_iter<I: IntoIterator<Item = (String, [String; 3])>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// All persisted bot settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BotSettings {
    pub channels: ChannelConfig,
    pub medal_emotes: MedalEmotes,
}

impl BotSettings {
    pub fn new(channels: ChannelConfig, medal_emotes: MedalEmotes) -> Self {
        Self {
            channels,
            medal_emotes,
        }
    }

    pub fn into_shared(self) -> SharedSettings {
        Arc::new(RwLock::new(self))
    }

    pub fn dossier_channel_id(&self) -> Option<u64> {
        self.channels.dossier_channel_id
    }

    pub fn statistics_channel_id(&self) -> Option<u64> {
        self.channels.statistics_channel_id
    }

    pub fn set_dossier_channel(&mut self, channel_id: Option<u64>) {
        self.channels.dossier_channel_id = channel_id;
    }

    pub fn set_statistics_channel(&mut self, channel_id: Option<u64>) {
        self.channels.statistics_channel_id = channel_id;
    }

    pub fn set_medal_emote(&mut self, medal: impl Into<String>, parts: [String; 3]) {
        self.medal_emotes.insert(medal, parts);
    }

    /// Returns `true` if the medal had emotes configured.
    pub fn remove_medal_emote(&mut self, medal: &str) -> bool {
        self.medal_emotes.remove(medal)
    }
}
