use std::fmt;

use crate::model::{AppState, Group, GroupId, Task, TaskId};

use super::state_ops;

/// A mutation requested by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    UpsertGroup(Group),
    UpsertTask(Task),
    DeleteGroup(GroupId),
    DeleteTask(TaskId),
    ToggleTaskDone(TaskId),
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::UpsertGroup(g) => write!(f, "upsert_group id={}", g.id),
            Intent::UpsertTask(t) => write!(f, "upsert_task id={} group={}", t.id, t.group_id),
            Intent::DeleteGroup(id) => write!(f, "delete_group id={}", id),
            Intent::DeleteTask(id) => write!(f, "delete_task id={}", id),
            Intent::ToggleTaskDone(id) => write!(f, "toggle_task_done id={}", id),
        }
    }
}

/// Compute the next state from the current one. The caller swaps the result
/// in with a single assignment, so a cascading delete is never observed half
/// done.
pub fn reduce(state: &AppState, intent: Intent) -> AppState {
    match intent {
        Intent::UpsertGroup(group) => state_ops::upsert_group(state, group),
        Intent::UpsertTask(task) => state_ops::upsert_task(state, task),
        Intent::DeleteGroup(id) => state_ops::delete_group(state, id),
        Intent::DeleteTask(id) => state_ops::delete_task(state, id),
        Intent::ToggleTaskDone(id) => state_ops::toggle_task_done(state, id),
    }
}
