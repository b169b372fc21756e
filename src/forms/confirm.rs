use crate::model::{GroupId, TaskId};
use crate::ops::intent::Intent;

/// What a delete prompt would remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Group(GroupId),
    Task(TaskId),
}

/// Yes/no prompt shown before a delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub target: DeleteTarget,
    pub title: &'static str,
    pub message: &'static str,
}

impl ConfirmPrompt {
    pub fn for_target(target: DeleteTarget) -> Self {
        let (title, message) = match target {
            DeleteTarget::Group(_) => (
                "Delete Group",
                "Are you sure you want to delete this group? All tasks in this group will also be deleted.",
            ),
            DeleteTarget::Task(_) => ("Delete Task", "Are you sure you want to delete this task?"),
        };
        ConfirmPrompt {
            target,
            title,
            message,
        }
    }

    /// The intent raised when the user answers yes
    pub fn confirm(&self) -> Intent {
        match self.target {
            DeleteTarget::Group(id) => Intent::DeleteGroup(id),
            DeleteTarget::Task(id) => Intent::DeleteTask(id),
        }
    }
}
