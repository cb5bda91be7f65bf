//! Queue task definitions.
//!
//! A `Task` names what happened (`TaskKind`) to which entity (`Subject`). Tasks carry
//! only primary keys, never loaded rows, so every handler re-reads current state by key
//! before acting. On the queue a task travels as a JSON entry:
//!
//! ```json
//! {"kind": "update", "subject": {"type": "player", "id": 7}, "fail_count": 0}
//! ```
//!
//! Entries are validated when dequeued; see [`Task::from_entry`].

use serde_json::{json, Map, Value};
use std::fmt;

use crate::error::task::TaskError;

/// What a task asks the consumer to reconcile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Create,
    Update,
    Delete,
    /// Stops the consumer loop. Carries no subject.
    Terminate,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Terminate => "terminate",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            "terminate" => Some(Self::Terminate),
            _ => None,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed primary-key reference to the entity a task concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Player(i32),
    Unit(i32),
    PlayerUpgrade(i32),
    /// Dossier tracking row, only meaningful for delete tasks.
    Dossier(i32),
    /// Statistic tracking row, only meaningful for delete tasks.
    Statistic(i32),
}

impl Subject {
    pub fn id(&self) -> i32 {
        match *self {
            Self::Player(id)
            | Self::Unit(id)
            | Self::PlayerUpgrade(id)
            | Self::Dossier(id)
            | Self::Statistic(id) => id,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Player(_) => "player",
            Self::Unit(_) => "unit",
            Self::PlayerUpgrade(_) => "player_upgrade",
            Self::Dossier(_) => "dossier",
            Self::Statistic(_) => "statistic",
        }
    }

    /// Stable key identifying the subject, used for rate limiting.
    pub fn key(&self) -> String {
        format!("{}:{}", self.type_name(), self.id())
    }

    fn to_value(self) -> Value {
        json!({ "type": self.type_name(), "id": self.id() })
    }

    fn from_value(value: &Value) -> Result<Self, TaskError> {
        let Some(object) = value.as_object() else {
            return Err(TaskError::Malformed(format!(
                "subject must be an object, got {}",
                value
            )));
        };

        let Some(type_name) = object.get("type").and_then(Value::as_str) else {
            return Err(TaskError::Malformed(format!(
                "subject is missing its type: {}",
                value
            )));
        };

        let id = object
            .get("id")
            .and_then(Value::as_i64)
            .filter(|id| *id > 0)
            .and_then(|id| i32::try_from(id).ok())
            .ok_or_else(|| TaskError::MissingKey(value.to_string()))?;

        match type_name {
            "player" => Ok(Self::Player(id)),
            "unit" => Ok(Self::Unit(id)),
            "player_upgrade" => Ok(Self::PlayerUpgrade(id)),
            "dossier" => Ok(Self::Dossier(id)),
            "statistic" => Ok(Self::Statistic(id)),
            other => Err(TaskError::Malformed(format!(
                "unknown subject type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name(), self.id())
    }
}

/// A unit of work on the task queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub kind: TaskKind,
    /// Always `Some` for every kind except `Terminate`.
    pub subject: Option<Subject>,
    /// Number of failed processing attempts so far.
    pub fail_count: u32,
}

impl Task {
    pub fn new(kind: TaskKind, subject: Subject) -> Self {
        Self {
            kind,
            subject: Some(subject),
            fail_count: 0,
        }
    }

    pub fn with_fail_count(kind: TaskKind, subject: Subject, fail_count: u32) -> Self {
        Self {
            kind,
            subject: Some(subject),
            fail_count,
        }
    }

    pub fn terminate() -> Self {
        Self {
            kind: TaskKind::Terminate,
            subject: None,
            fail_count: 0,
        }
    }

    /// Same task with one more recorded failure.
    pub fn retried(self) -> Self {
        Self {
            fail_count: self.fail_count + 1,
            ..self
        }
    }

    /// Encodes the task as a queue entry.
    pub fn to_entry(&self) -> Value {
        let mut entry = Map::new();
        entry.insert("kind".to_string(), json!(self.kind.as_str()));
        if let Some(subject) = self.subject {
            entry.insert("subject".to_string(), subject.to_value());
        }
        entry.insert("fail_count".to_string(), json!(self.fail_count));
        Value::Object(entry)
    }

    /// Validates and decodes a queue entry.
    ///
    /// # Returns
    /// - `Ok(Task)` - Well-formed entry; `fail_count` defaults to 0 when absent
    /// - `Err(TaskError::Malformed)` - Not an object, no kind, or no subject on a
    ///   non-terminate kind
    /// - `Err(TaskError::UnknownKind)` - Kind is not one the consumer handles
    /// - `Err(TaskError::MissingKey)` - Subject has no positive primary key
    pub fn from_entry(entry: &Value) -> Result<Self, TaskError> {
        let Some(object) = entry.as_object() else {
            return Err(TaskError::Malformed(format!(
                "expected an object, got {}",
                entry
            )));
        };

        let kind = match object.get("kind") {
            Some(Value::String(name)) => {
                TaskKind::from_name(name).ok_or_else(|| TaskError::UnknownKind(name.clone()))?
            }
            Some(other) => return Err(TaskError::UnknownKind(other.to_string())),
            None => {
                return Err(TaskError::Malformed(format!(
                    "entry has no kind: {}",
                    entry
                )))
            }
        };

        let fail_count = match object.get("fail_count") {
            None | Some(Value::Null) => 0,
            Some(value) => value
                .as_u64()
                .and_then(|count| u32::try_from(count).ok())
                .ok_or_else(|| {
                    TaskError::Malformed(format!("invalid fail_count {}", value))
                })?,
        };

        // Terminate carries no subject, so it skips subject validation entirely
        if kind == TaskKind::Terminate {
            return Ok(Self {
                kind,
                subject: None,
                fail_count,
            });
        }

        let subject = match object.get("subject") {
            None | Some(Value::Null) => {
                return Err(TaskError::Malformed(format!(
                    "{} entry has no subject",
                    kind
                )))
            }
            Some(value) => Subject::from_value(value)?,
        };

        Ok(Self {
            kind,
            subject: Some(subject),
            fail_count,
        })
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.subject {
            Some(subject) => write!(
                f,
                "{} {} (failures: {})",
                self.kind, subject, self.fail_count
            ),
            None => write!(f, "{}", self.kind),
        }
    }
}
