/*
[INPUT]:  TaskStore, text inputs, list selection, log buffer
[OUTPUT]: AppState helpers bridging UI events to store actions
[POS]:    TUI app state - owner of the task store while the UI runs
[UPDATE]: When adding view state or new store interactions
*/

use ratatui::widgets::ListState;
use tasklist_store::{Action, TaskId, TaskStore};
use tracing::info;
use tui_input::Input;

use crate::logging::LogBufferHandle;

/// Which widget receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    Title,
    Content,
    List,
}

impl Focus {
    pub(super) fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Content,
            Focus::Content => Focus::List,
            Focus::List => Focus::Title,
        }
    }

    pub(super) fn previous(self) -> Self {
        match self {
            Focus::Title => Focus::List,
            Focus::Content => Focus::Title,
            Focus::List => Focus::Content,
        }
    }
}

pub(super) struct AppState {
    pub(super) store: TaskStore,
    pub(super) title_input: Input,
    pub(super) content_input: Input,
    pub(super) focus: Focus,
    pub(super) list_state: ListState,
    pub(super) status_message: String,
    pub(super) log_buffer: Option<LogBufferHandle>,
}

impl AppState {
    pub(super) fn new(store: TaskStore, log_buffer: Option<LogBufferHandle>) -> Self {
        let mut app = Self {
            store,
            title_input: Input::default(),
            content_input: Input::default(),
            focus: Focus::Title,
            list_state: ListState::default(),
            status_message: "Ready".to_string(),
            log_buffer,
        };
        app.sync_inputs();
        app.clamp_selection();
        app
    }

    /// Send an action to the store and refresh everything derived from it.
    pub(super) fn dispatch(&mut self, action: Action) {
        let quiet = matches!(action, Action::SetDraftTitle(_) | Action::SetDraftContent(_));
        match self.store.dispatch(action) {
            Ok(change) => {
                if !quiet {
                    self.status_message = change.to_string();
                }
            }
            Err(reason) => self.status_message = reason.to_string(),
        }
        self.sync_inputs();
        self.clamp_selection();
    }

    /// Add in create mode, update in edit mode.
    pub(super) fn submit_form(&mut self) {
        let action = self.store.state().submit_action();
        let was_editing = self.store.state().is_editing();
        self.dispatch(action);
        if was_editing && !self.store.state().is_editing() {
            self.focus = Focus::List;
        }
    }

    pub(super) fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            self.status_message = "no task selected".to_string();
            return;
        };
        self.dispatch(Action::BeginEdit(id));
        if self.store.state().editing_id() == Some(id) {
            self.focus = Focus::Title;
        }
    }

    pub(super) fn toggle_selected(&mut self) {
        match self.selected_task_id() {
            Some(id) => self.dispatch(Action::ToggleStatus(id)),
            None => self.status_message = "no task selected".to_string(),
        }
    }

    pub(super) fn delete_selected(&mut self) {
        match self.selected_task_id() {
            Some(id) => self.dispatch(Action::DeleteTask(id)),
            None => self.status_message = "no task selected".to_string(),
        }
    }

    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        let idx = self.list_state.selected()?;
        self.store.state().tasks.get(idx).map(|task| task.id)
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let len = self.store.state().tasks.len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    /// Drafts are owned by the store; the inputs only mirror them.
    fn sync_inputs(&mut self) {
        let draft = &self.store.state().draft;
        if self.title_input.value() != draft.title {
            self.title_input = Input::new(draft.title.clone());
        }
        if self.content_input.value() != draft.content {
            self.content_input = Input::new(draft.content.clone());
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.store.state().tasks.len();
        if len == 0 {
            self.list_state.select(None);
        } else if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= len {
                self.list_state.select(Some(len - 1));
            }
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        let counts = self.store.counts();
        info!(
            complete = counts.complete,
            incomplete = counts.incomplete,
            "task store dropped"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_store::TaskStatus;

    fn app_with_tasks(titles: &[&str]) -> AppState {
        let mut app = AppState::new(TaskStore::new(), None);
        for title in titles {
            app.dispatch(Action::SetDraftTitle(title.to_string()));
            app.dispatch(Action::SetDraftContent(format!("{title} details")));
            app.submit_form();
        }
        app
    }

    #[test]
    fn test_submit_adds_and_clears_inputs() {
        let app = app_with_tasks(&["Buy milk"]);
        assert_eq!(app.store.state().tasks.len(), 1);
        assert_eq!(app.title_input.value(), "");
        assert_eq!(app.content_input.value(), "");
        assert_eq!(app.list_state.selected(), Some(0));
        assert!(app.status_message.starts_with("task added"));
    }

    #[test]
    fn test_submit_with_empty_content_reports_reason() {
        let mut app = AppState::new(TaskStore::new(), None);
        app.dispatch(Action::SetDraftTitle("only title".to_string()));
        app.submit_form();
        assert!(app.store.state().tasks.is_empty());
        assert_eq!(app.status_message, "title and content are both required");
        assert_eq!(app.title_input.value(), "only title");
    }

    #[test]
    fn test_edit_selected_fills_inputs() {
        let mut app = app_with_tasks(&["a", "b"]);
        app.move_selection(1);
        app.begin_edit_selected();
        assert_eq!(app.title_input.value(), "b");
        assert_eq!(app.content_input.value(), "b details");
        assert_eq!(app.focus, Focus::Title);

        app.submit_form();
        assert!(!app.store.state().is_editing());
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_delete_last_clamps_selection() {
        let mut app = app_with_tasks(&["a", "b"]);
        app.move_selection(5);
        assert_eq!(app.list_state.selected(), Some(1));
        app.delete_selected();
        assert_eq!(app.list_state.selected(), Some(0));
        app.delete_selected();
        assert_eq!(app.list_state.selected(), None);
        app.toggle_selected();
        assert_eq!(app.status_message, "no task selected");
    }

    #[test]
    fn test_delete_under_edit_keeps_typed_text() {
        let mut app = app_with_tasks(&["a"]);
        app.begin_edit_selected();
        app.dispatch(Action::SetDraftTitle("typed".to_string()));

        app.delete_selected();
        assert!(app.store.state().tasks.is_empty());
        assert_eq!(app.title_input.value(), "typed");

        app.submit_form();
        assert!(!app.store.state().is_editing());
        assert!(app.status_message.starts_with("task unchanged"));
        assert_eq!(app.title_input.value(), "");
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = app_with_tasks(&["a"]);
        app.toggle_selected();
        assert_eq!(app.store.state().tasks[0].status, TaskStatus::Complete);
    }
}
