//! The queue consumer loop.
//!
//! A single consumer drains the task queue one entry at a time, so messages for the
//! same player are created and edited in enqueue order. Each iteration:
//!
//! 1. waits the pacing delay, unless this is the first iteration or the previous entry
//!    was discarded
//! 2. aborts the bot if the queue depth reached the high-water mark
//! 3. decodes the next entry, discarding malformed ones
//! 4. discards tasks for a subject seen too often within the rate-limit window
//! 5. discards tasks that already failed more than the retry ceiling
//! 6. dispatches to the handler, requeueing the task with one more failure on error

use dioxus_logger::tracing;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    bot::gateway::DiscordGateway,
    error::task::TaskError,
    model::task::{Task, TaskKind},
    queue::{
        config::ConsumerConfig,
        handler::{HandlerOutcome, TaskHandler},
        rate_limit::RollingCounter,
        TaskQueue, TaskReceiver,
    },
};

const OVERLOAD_NOTICE: &str = "Queue size is too high, terminating";

/// How the consumer loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerExit {
    /// A terminate task was processed.
    Stopped,
    /// The queue reached the high-water mark; the owner was notified and the bot shut down.
    Aborted,
}

/// Why an entry was dropped without being dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscardReason {
    Malformed(TaskError),
    RateLimited,
    RetriesExhausted,
}

/// Result of a single consumer iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    Handled,
    /// The handler failed; the task was put back with this fail count.
    Requeued(Task),
    Discarded(DiscardReason),
    Exit(ConsumerExit),
}

impl Tick {
    /// Whether the loop waits the pacing delay before its next iteration.
    ///
    /// Only work that reached the handler is paced; discarded entries are skipped
    /// straight away.
    pub fn paces_next(&self) -> bool {
        matches!(self, Self::Handled | Self::Requeued(_))
    }
}

pub struct QueueConsumer {
    config: ConsumerConfig,
    queue: TaskQueue,
    receiver: TaskReceiver,
    handler: TaskHandler,
    gateway: Arc<dyn DiscordGateway>,
    owner_id: u64,
    rate_limiter: RollingCounter,
}

impl QueueConsumer {
    /// Creates a new consumer.
    ///
    /// # Arguments
    /// - `config` - Pacing, back-pressure, retry and rate-limit settings
    /// - `queue` - Producer handle used to requeue failed tasks
    /// - `receiver` - Receiving half of the same queue
    /// - `handler` - Dispatches tasks to the create, update, delete and terminate handlers
    /// - `gateway` - Used to notify the owner and shut the bot down on overload
    /// - `owner_id` - Discord user ID of the operator
    pub fn new(
        config: ConsumerConfig,
        queue: TaskQueue,
        receiver: TaskReceiver,
        handler: TaskHandler,
        gateway: Arc<dyn DiscordGateway>,
        owner_id: u64,
    ) -> Self {
        let rate_limiter = RollingCounter::new(config.rate_limit_window());

        Self {
            config,
            queue,
            receiver,
            handler,
            gateway,
            owner_id,
            rate_limiter,
        }
    }

    /// Entries waiting in the queue.
    pub fn depth(&self) -> usize {
        self.receiver.len()
    }

    /// Runs until a terminate task is processed or the queue overloads.
    pub async fn run(mut self) -> ConsumerExit {
        tracing::info!("Queue consumer started");

        let mut pace = false;
        loop {
            if pace {
                tokio::time::sleep(self.config.pacing()).await;
            }

            let tick = self.tick().await;
            if let Tick::Exit(exit) = tick {
                tracing::info!("Queue consumer stopped ({:?})", exit);
                return exit;
            }

            pace = tick.paces_next();
        }
    }

    /// Runs one iteration of the loop without the pacing delay.
    pub async fn tick(&mut self) -> Tick {
        let depth = self.depth();
        tracing::debug!("Queue size: {}", depth);

        if depth >= self.config.high_water_mark {
            self.abort(depth).await;
            return Tick::Exit(ConsumerExit::Aborted);
        }

        let Some(entry) = self.receiver.recv().await else {
            tracing::info!("Task queue closed");
            return Tick::Exit(ConsumerExit::Stopped);
        };

        self.process(entry).await
    }

    async fn process(&mut self, entry: Value) -> Tick {
        let task = match Task::from_entry(&entry) {
            Ok(task) => task,
            Err(e) => {
                tracing::error!("Discarding queue entry {}: {}", entry, e);
                return Tick::Discarded(DiscardReason::Malformed(e));
            }
        };

        if task.kind != TaskKind::Terminate {
            if let Some(subject) = task.subject {
                let key = subject.key();
                self.rate_limiter.record(&key);
                if self.rate_limiter.count(&key) >= self.config.rate_limit_threshold {
                    tracing::warn!("Ratelimit hit for {}, discarding {}", subject, task);
                    return Tick::Discarded(DiscardReason::RateLimited);
                }
            }
        }

        if task.fail_count > self.config.max_retries {
            tracing::error!("Task {} failed too many times, skipping", task);
            return Tick::Discarded(DiscardReason::RetriesExhausted);
        }

        match self.handler.handle(&task).await {
            Ok(HandlerOutcome::Continue) => Tick::Handled,
            Ok(HandlerOutcome::Terminate) => Tick::Exit(ConsumerExit::Stopped),
            Err(e) => {
                tracing::error!("Error processing task {}: {}", task, e);
                let retried = task.retried();
                self.queue.push(&retried);
                Tick::Requeued(retried)
            }
        }
    }

    async fn abort(&self, depth: usize) {
        tracing::error!(
            "Queue size is {}, at or above the limit of {}; notifying owner and shutting down",
            depth,
            self.config.high_water_mark
        );

        if let Err(e) = self
            .gateway
            .send_direct_message(self.owner_id, OVERLOAD_NOTICE)
            .await
        {
            tracing::error!("Failed to notify owner {}: {}", self.owner_id, e);
        }

        self.gateway.shutdown().await;
    }
}
