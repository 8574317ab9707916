/*
[INPUT]:  Current StoreState and an Action
[OUTPUT]: Next StoreState plus the Change applied or the reason it was ignored
[POS]:    Reducer core - every state transition happens here
[UPDATE]: When adding actions or changing form-mode rules
*/

use serde::{Deserialize, Serialize};

use crate::action::{Action, Change, Ignored};
use crate::types::{Task, TaskCounts, TaskId};

/// Contents of the input form, shared by create and edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    /// Both fields hold text.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }

    fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

/// Which operation the form submits.
///
/// Transitions:
/// - Create -> Editing (BeginEdit)
/// - Editing -> Create (CommitEdit, CancelEdit)
/// - Editing -> Editing (BeginEdit of another task)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum FormMode {
    #[default]
    Create,
    Editing {
        id: TaskId,
        /// Task as it was when the edit began; the form titles itself with it
        /// and it outlives a delete of the task under edit
        original: Task,
    },
}

/// The single state value owned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreState {
    pub tasks: Vec<Task>,
    pub draft: Draft,
    pub mode: FormMode,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts::from_tasks(&self.tasks)
    }

    pub fn editing_id(&self) -> Option<TaskId> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Editing { id, .. } => Some(*id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    /// Snapshot taken by `BeginEdit`, even if the task has since been deleted.
    pub fn editing_original(&self) -> Option<&Task> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Editing { original, .. } => Some(original),
        }
    }

    /// The action the form's submit button dispatches in the current mode.
    pub fn submit_action(&self) -> Action {
        match self.mode {
            FormMode::Create => Action::AddTask,
            FormMode::Editing { .. } => Action::CommitEdit,
        }
    }

    /// Apply `action` in place.
    ///
    /// On `Err` the state is exactly as it was before the call.
    pub fn reduce(&mut self, action: Action) -> Result<Change, Ignored> {
        match action {
            Action::SetDraftTitle(text) => {
                self.draft.title = text;
                Ok(Change::DraftUpdated)
            }
            Action::SetDraftContent(text) => {
                self.draft.content = text;
                Ok(Change::DraftUpdated)
            }
            Action::AddTask => self.add_task(),
            Action::BeginEdit(id) => self.begin_edit(id),
            Action::CommitEdit => self.commit_edit(),
            Action::CancelEdit => self.cancel_edit(),
            Action::DeleteTask(id) => self.delete_task(id),
            Action::ToggleStatus(id) => {
                let task = self.task_mut(id).ok_or(Ignored::UnknownTask(id))?;
                let status = task.toggle();
                Ok(Change::StatusToggled(id, status))
            }
        }
    }

    fn add_task(&mut self) -> Result<Change, Ignored> {
        if let Some(id) = self.editing_id() {
            return Err(Ignored::AlreadyEditing(id));
        }
        if !self.draft.is_complete() {
            return Err(Ignored::EmptyDraft);
        }

        let draft = std::mem::take(&mut self.draft);
        let mut task = Task::new(draft.title, draft.content);
        // ids only need to be unique among the tasks currently held
        while self.task(task.id).is_some() {
            task.id = TaskId::new();
        }
        let id = task.id;
        self.tasks.push(task);
        Ok(Change::TaskAdded(id))
    }

    fn begin_edit(&mut self, id: TaskId) -> Result<Change, Ignored> {
        let task = self.task(id).ok_or(Ignored::UnknownTask(id))?.clone();
        self.draft = Draft {
            title: task.title.clone(),
            content: task.content.clone(),
        };
        self.mode = FormMode::Editing { id, original: task };
        Ok(Change::EditStarted(id))
    }

    fn commit_edit(&mut self) -> Result<Change, Ignored> {
        let FormMode::Editing { id, .. } = std::mem::take(&mut self.mode) else {
            return Err(Ignored::NotEditing);
        };

        let draft = std::mem::take(&mut self.draft);
        // the task may have been deleted mid-edit; the edit still closes
        let updated = match self.task_mut(id) {
            Some(task) => task.rewrite(&draft.title, &draft.content),
            None => false,
        };
        Ok(Change::EditCommitted { id, updated })
    }

    fn cancel_edit(&mut self) -> Result<Change, Ignored> {
        if !self.is_editing() {
            return Err(Ignored::NotEditing);
        }
        self.mode = FormMode::Create;
        self.draft.clear();
        Ok(Change::EditCancelled)
    }

    fn delete_task(&mut self, id: TaskId) -> Result<Change, Ignored> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Ignored::UnknownTask(id))?;
        self.tasks.remove(index);
        Ok(Change::TaskDeleted(id))
    }
}

/// Pure transition: returns the next state and leaves `state` untouched.
///
/// Ignored actions yield a copy of the input.
pub fn apply(state: &StoreState, action: Action) -> StoreState {
    let mut next = state.clone();
    // `reduce` leaves the state as-is when it ignores an action
    let _ = next.reduce(action);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskStatus;

    fn with_drafts(title: &str, content: &str) -> StoreState {
        let mut state = StoreState::new();
        state.draft = Draft {
            title: title.to_string(),
            content: content.to_string(),
        };
        state
    }

    #[test]
    fn test_add_task_appends_and_clears_drafts() {
        let mut state = with_drafts("Buy milk", "2 liters");
        let change = state.reduce(Action::AddTask).expect("task added");

        assert_eq!(state.tasks.len(), 1);
        let task = &state.tasks[0];
        assert_eq!(change, Change::TaskAdded(task.id));
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.content, "2 liters");
        assert_eq!(task.status, TaskStatus::Incomplete);
        assert_eq!(state.draft, Draft::default());
    }

    #[test]
    fn test_add_task_rejected_while_editing() {
        let mut state = with_drafts("a", "b");
        state.reduce(Action::AddTask).expect("task added");
        let id = state.tasks[0].id;
        state.reduce(Action::BeginEdit(id)).expect("edit started");

        let before = state.clone();
        assert_eq!(
            state.reduce(Action::AddTask),
            Err(Ignored::AlreadyEditing(id))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_commit_edit_in_create_mode_is_ignored() {
        let mut state = with_drafts("a", "b");
        assert_eq!(state.reduce(Action::CommitEdit), Err(Ignored::NotEditing));
        assert_eq!(state, with_drafts("a", "b"));
    }

    #[test]
    fn test_begin_edit_records_original() {
        let mut state = with_drafts("a", "b");
        state.reduce(Action::AddTask).expect("task added");
        let original = state.tasks[0].clone();

        state
            .reduce(Action::BeginEdit(original.id))
            .expect("edit started");
        assert_eq!(
            state.mode,
            FormMode::Editing {
                id: original.id,
                original: original.clone(),
            }
        );
        assert_eq!(state.editing_original(), Some(&original));
        assert_eq!(state.submit_action(), Action::CommitEdit);
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let state = with_drafts("a", "b");
        let next = apply(&state, Action::AddTask);
        assert!(state.tasks.is_empty());
        assert_eq!(next.tasks.len(), 1);
    }
}
