//! In-process task queue that keeps Discord messages in sync with the database.
//!
//! Producers hold a cloneable [`TaskQueue`] and enqueue tasks whenever they change a
//! player, unit or upgrade. A single [`QueueConsumer`](consumer::QueueConsumer) drains the
//! queue one task at a time, dispatching to the create, update, delete and terminate
//! handlers and applying pacing, rate limiting and retries.
//!
//! Entries travel as JSON values so that the consumer validates every entry it dequeues
//! and can discard malformed ones without stopping.

pub mod config;
pub mod consumer;
pub mod handler;
pub mod rate_limit;

#[cfg(test)]
mod test;

pub use config::ConsumerConfig;

use dioxus_logger::tracing;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::model::task::{Subject, Task, TaskKind};

/// Receiving half of the task queue, owned by the consumer.
pub type TaskReceiver = mpsc::UnboundedReceiver<Value>;

/// Producer handle for the task queue.
///
/// Enqueueing is fire-and-forget: there is no acknowledgement of eventual success, and
/// tasks enqueued after the consumer has stopped are dropped.
#[derive(Clone, Debug)]
pub struct TaskQueue {
    sender: mpsc::UnboundedSender<Value>,
}

impl TaskQueue {
    /// Creates a queue and the receiver its consumer drains.
    pub fn channel() -> (Self, TaskReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn enqueue(&self, kind: TaskKind, subject: Subject) {
        self.push(&Task::new(kind, subject));
    }

    pub fn enqueue_with_fail_count(&self, kind: TaskKind, subject: Subject, fail_count: u32) {
        self.push(&Task::with_fail_count(kind, subject, fail_count));
    }

    /// Asks the consumer to stop once it reaches this entry.
    pub fn terminate(&self) {
        self.push(&Task::terminate());
    }

    pub(crate) fn push(&self, task: &Task) {
        self.push_entry(task.to_entry());
    }

    pub(crate) fn push_entry(&self, entry: Value) {
        if self.sender.send(entry).is_err() {
            tracing::warn!("Task queue consumer has stopped, dropping entry");
        }
    }
}
