/*
[INPUT]:  Draft title/content captured by the input form
[OUTPUT]: Task, TaskId, TaskStatus and derived TaskCounts
[POS]:    Data model - the items held by the task store
[UPDATE]: When task fields or status values change
*/

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque task identifier, unique within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Mint a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Incomplete,
    Complete,
}

impl TaskStatus {
    /// The opposite status.
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Incomplete => TaskStatus::Complete,
            TaskStatus::Complete => TaskStatus::Incomplete,
        }
    }

    pub fn is_complete(self) -> bool {
        self == TaskStatus::Complete
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Incomplete => write!(f, "incomplete"),
            TaskStatus::Complete => write!(f, "complete"),
        }
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub content: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// New incomplete task with a freshly minted id.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title: title.into(),
            content: content.into(),
            status: TaskStatus::Incomplete,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    pub(crate) fn toggle(&mut self) -> TaskStatus {
        self.status = self.status.toggled();
        self.updated_at = Utc::now();
        self.status
    }

    /// Replace title and content, leaving status untouched.
    /// Returns `true` if either field changed.
    pub(crate) fn rewrite(&mut self, title: &str, content: &str) -> bool {
        if self.title == title && self.content == content {
            return false;
        }
        self.title = title.to_string();
        self.content = content.to_string();
        self.updated_at = Utc::now();
        true
    }
}

/// Completed versus incomplete totals, derived from a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskCounts {
    pub complete: usize,
    pub incomplete: usize,
}

impl TaskCounts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let complete = tasks.iter().filter(|task| task.is_complete()).count();
        Self {
            complete,
            incomplete: tasks.len() - complete,
        }
    }

    pub fn total(&self) -> usize {
        self.complete + self.incomplete
    }
}

impl fmt::Display for TaskCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Completed: {} / Incomplete: {}",
            self.complete, self.incomplete
        )
    }
}
