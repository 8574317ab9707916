/*
[INPUT]:  Public API exports for tasklist-store crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod action;
pub mod state;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use action::{Action, Change, Ignored};
pub use state::{Draft, FormMode, StoreState, apply};
pub use store::TaskStore;
pub use types::{Task, TaskCounts, TaskId, TaskStatus};
