/*
[INPUT]:  Actions dispatched by the view layer
[OUTPUT]: Owned StoreState snapshots and dispatch outcomes
[POS]:    Store handle - single owner of the reducer state
[UPDATE]: When changing dispatch logging or store lifecycle
*/

use tracing::{debug, info, warn};

use crate::action::{Action, Change, Ignored};
use crate::state::StoreState;
use crate::types::TaskCounts;

/// Owns the task list state and applies actions to it.
///
/// Not `Sync` by intent of use: keep one instance on the thread or task that
/// handles UI events and send actions to it.
#[derive(Debug, Default)]
pub struct TaskStore {
    state: StoreState,
}

impl TaskStore {
    /// Empty store: no tasks, empty drafts, create mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: StoreState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn counts(&self) -> TaskCounts {
        self.state.counts()
    }

    /// Apply an action, logging what happened.
    pub fn dispatch(&mut self, action: Action) -> Result<Change, Ignored> {
        let name = action.name();
        match self.state.reduce(action) {
            Ok(change) => {
                if change.touches_tasks() {
                    info!(action = name, change = %change, "task list changed");
                    self.log_tasks();
                } else {
                    debug!(action = name, change = %change, "form changed");
                }
                Ok(change)
            }
            Err(reason) => {
                debug!(action = name, reason = %reason, "action ignored");
                Err(reason)
            }
        }
    }

    /// Consume the store and hand back its final state.
    pub fn into_state(self) -> StoreState {
        self.state
    }

    fn log_tasks(&self) {
        match serde_json::to_string(&self.state.tasks) {
            Ok(tasks) => debug!(count = self.state.tasks.len(), %tasks, "tasks"),
            Err(err) => warn!(error = %err, "failed to serialize tasks"),
        }
    }
}
