/*
[INPUT]:  UI events translated by the view layer
[OUTPUT]: Action, Change and Ignored types for reducer transitions
[POS]:    Reducer vocabulary - closed set of state transitions
[UPDATE]: When adding a new transition or no-op reason
*/

use std::fmt;

use thiserror::Error;

use crate::types::{TaskId, TaskStatus};

/// All transitions the store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the draft title
    SetDraftTitle(String),
    /// Replace the draft content
    SetDraftContent(String),
    /// Append a task built from the drafts (create mode only)
    AddTask,
    /// Load a task into the drafts and switch to edit mode
    BeginEdit(TaskId),
    /// Write the drafts back to the task under edit
    CommitEdit,
    /// Leave edit mode without touching the task
    CancelEdit,
    /// Remove a task
    DeleteTask(TaskId),
    /// Flip a task between incomplete and complete
    ToggleStatus(TaskId),
}

impl Action {
    /// Short label used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetDraftTitle(_) => "set_draft_title",
            Action::SetDraftContent(_) => "set_draft_content",
            Action::AddTask => "add_task",
            Action::BeginEdit(_) => "begin_edit",
            Action::CommitEdit => "commit_edit",
            Action::CancelEdit => "cancel_edit",
            Action::DeleteTask(_) => "delete_task",
            Action::ToggleStatus(_) => "toggle_status",
        }
    }
}

/// What an applied action changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    DraftUpdated,
    TaskAdded(TaskId),
    EditStarted(TaskId),
    /// The edit session ended; `updated` is false when the drafts matched
    /// the task or the task no longer exists.
    EditCommitted {
        id: TaskId,
        updated: bool,
    },
    EditCancelled,
    TaskDeleted(TaskId),
    StatusToggled(TaskId, TaskStatus),
}

impl Change {
    /// Whether the task list itself was modified.
    pub fn touches_tasks(&self) -> bool {
        match self {
            Change::TaskAdded(_) | Change::TaskDeleted(_) | Change::StatusToggled(..) => true,
            Change::EditCommitted { updated, .. } => *updated,
            Change::DraftUpdated | Change::EditStarted(_) | Change::EditCancelled => false,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::DraftUpdated => write!(f, "draft updated"),
            Change::TaskAdded(id) => write!(f, "task added: {id}"),
            Change::EditStarted(id) => write!(f, "editing task: {id}"),
            Change::EditCommitted { id, updated: true } => write!(f, "task updated: {id}"),
            Change::EditCommitted { id, updated: false } => write!(f, "task unchanged: {id}"),
            Change::EditCancelled => write!(f, "edit cancelled"),
            Change::TaskDeleted(id) => write!(f, "task deleted: {id}"),
            Change::StatusToggled(id, status) => write!(f, "task {id} marked {status}"),
        }
    }
}

/// Why an action left the state untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    /// AddTask with an empty title or content
    #[error("title and content are both required")]
    EmptyDraft,

    /// The referenced task is not in the list
    #[error("no task with id {0}")]
    UnknownTask(TaskId),

    /// CommitEdit or CancelEdit outside edit mode
    #[error("not editing a task")]
    NotEditing,

    /// AddTask while an edit is open
    #[error("already editing task {0}")]
    AlreadyEditing(TaskId),
}
