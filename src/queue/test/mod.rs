use sea_orm::DatabaseConnection;
use serde_json::Map;
use std::sync::Arc;
use test_utils::builder::TestBuilder;

use crate::{
    model::{
        settings::{BotSettings, ChannelConfig, MedalEmotes, SharedSettings},
        task::{Subject, Task, TaskKind},
    },
    queue::{
        consumer::QueueConsumer, handler::TaskHandler, ConsumerConfig, TaskQueue, TaskReceiver,
    },
    util::test::gateway::MockGateway,
};

mod update;

const DOSSIER_CHANNEL: u64 = 100;
const STATISTICS_CHANNEL: u64 = 200;
const OWNER_ID: u64 = 999;

/// Database, mock Discord and queue wired the way the bot wires them.
struct Fixture {
    db: DatabaseConnection,
    gateway: MockGateway,
    settings: SharedSettings,
    queue: TaskQueue,
    receiver: TaskReceiver,
}

impl Fixture {
    /// Both channels configured and resolvable, with an emote for the `FCM` medal.
    async fn new() -> Self {
        let test = TestBuilder::new()
            .with_campaign_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let gateway = MockGateway::with_channels(&[DOSSIER_CHANNEL, STATISTICS_CHANNEL]);

        let mut emotes = MedalEmotes::new();
        emotes.insert(
            "FCM",
            [
                "<:FCM_L:1>".to_string(),
                "<:FCM_C:2>".to_string(),
                "<:FCM_R:3>".to_string(),
            ],
        );
        let settings = BotSettings::new(
            ChannelConfig {
                dossier_channel_id: Some(DOSSIER_CHANNEL),
                statistics_channel_id: Some(STATISTICS_CHANNEL),
                extra: Map::new(),
            },
            emotes,
        )
        .into_shared();

        let (queue, receiver) = TaskQueue::channel();

        Self {
            db,
            gateway,
            settings,
            queue,
            receiver,
        }
    }

    fn handler(&self) -> TaskHandler {
        TaskHandler::new(
            self.db.clone(),
            Arc::new(self.gateway.clone()),
            self.settings.clone(),
            self.queue.clone(),
            10,
        )
    }

    /// Consumer with no pacing, draining this fixture's queue.
    fn consumer(self, config: ConsumerConfig) -> QueueConsumer {
        let handler = self.handler();
        QueueConsumer::new(
            config,
            self.queue,
            self.receiver,
            handler,
            Arc::new(self.gateway),
            OWNER_ID,
        )
    }

    /// Drains and decodes every entry currently on the queue.
    fn pending(&mut self) -> Vec<Task> {
        let mut tasks = Vec::new();
        while let Ok(entry) = self.receiver.try_recv() {
            tasks.push(Task::from_entry(&entry).unwrap());
        }
        tasks
    }
}

fn unpaced() -> ConsumerConfig {
    ConsumerConfig {
        pacing_ms: 0,
        ..ConsumerConfig::default()
    }
}

fn task(kind: TaskKind, subject: Subject) -> Task {
    Task::new(kind, subject)
}
