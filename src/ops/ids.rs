use crate::model::{AppState, GroupId, TaskId};

/// Mints identifiers for new records.
///
/// Counters only move forward and start past the highest id already present,
/// so two records created in quick succession never share an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next_group: u64,
    next_task: u64,
}

impl IdAllocator {
    pub fn from_state(state: &AppState) -> Self {
        let max_group = state.groups.iter().map(|g| g.id.0).max().unwrap_or(0);
        let max_task = state.tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
        IdAllocator {
            next_group: max_group + 1,
            next_task: max_task + 1,
        }
    }

    pub fn next_group_id(&mut self) -> GroupId {
        let id = GroupId(self.next_group);
        self.next_group += 1;
        id
    }

    pub fn next_task_id(&mut self) -> TaskId {
        let id = TaskId(self.next_task);
        self.next_task += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        IdAllocator::from_state(&AppState::default())
    }
}
