use thiserror::Error;

/// Reasons a dequeued entry cannot be turned into a task.
///
/// None of these are retryable: the dispatch loop logs them and moves on to the next
/// entry without pacing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Entry does not have the task shape (not an object, missing kind or subject).
    #[error("Malformed task entry: {0}")]
    Malformed(String),

    /// Entry names a task kind the consumer has no handler for.
    #[error("Unknown task kind: {0}")]
    UnknownKind(String),

    /// Subject has no usable primary key, so it can never be loaded.
    #[error("Task subject has no primary key: {0}")]
    MissingKey(String),
}
