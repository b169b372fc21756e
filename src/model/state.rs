use serde::{Deserialize, Serialize};

use super::group::{Group, GroupId};
use super::task::{Difficulty, Task, TaskId};

/// Complete in-memory snapshot of groups and tasks.
///
/// Both collections keep insertion order. Transitions never mutate a
/// snapshot in place; see `ops::state_ops` for the operations that
/// produce the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl AppState {
    /// The state every session starts from
    pub fn seed() -> Self {
        AppState {
            groups: vec![
                Group::new(GroupId(1), "Work"),
                Group::new(GroupId(2), "Home"),
            ],
            tasks: vec![
                Task::new(TaskId(1), "Finish report", Difficulty::Hard, GroupId(1))
                    .with_description("Q2 results"),
                Task::new(TaskId(2), "Buy groceries", Difficulty::Easy, GroupId(2)).with_done(true),
            ],
        }
    }
}
