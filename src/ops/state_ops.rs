//! Transitions over `AppState`.
//!
//! Every function here takes the current snapshot by reference and returns
//! the next one. Operations that address an id not present in the state
//! return a copy equal to the input: a missing id is a no-op, never an error.

use crate::model::{AppState, Group, GroupId, Task, TaskId};

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

/// Replace the group with the same id, or append it. Names need not be unique.
pub fn upsert_group(state: &AppState, group: Group) -> AppState {
    let mut groups = state.groups.clone();
    match groups.iter_mut().find(|g| g.id == group.id) {
        Some(existing) => *existing = group,
        None => groups.push(group),
    }
    AppState {
        groups,
        tasks: state.tasks.clone(),
    }
}

/// Remove a group together with every task that references it.
pub fn delete_group(state: &AppState, group_id: GroupId) -> AppState {
    AppState {
        groups: state
            .groups
            .iter()
            .filter(|g| g.id != group_id)
            .cloned()
            .collect(),
        tasks: state
            .tasks
            .iter()
            .filter(|t| t.group_id != group_id)
            .cloned()
            .collect(),
    }
}

pub fn find_group(state: &AppState, group_id: GroupId) -> Option<&Group> {
    state.groups.iter().find(|g| g.id == group_id)
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Replace the task with the same id, or append it.
pub fn upsert_task(state: &AppState, task: Task) -> AppState {
    let mut tasks = state.tasks.clone();
    match tasks.iter_mut().find(|t| t.id == task.id) {
        Some(existing) => *existing = task,
        None => tasks.push(task),
    }
    AppState {
        groups: state.groups.clone(),
        tasks,
    }
}

/// Remove a single task. Never touches groups.
pub fn delete_task(state: &AppState, task_id: TaskId) -> AppState {
    AppState {
        groups: state.groups.clone(),
        tasks: state
            .tasks
            .iter()
            .filter(|t| t.id != task_id)
            .cloned()
            .collect(),
    }
}

/// Flip the `done` flag of one task, leaving every other field as it was.
pub fn toggle_task_done(state: &AppState, task_id: TaskId) -> AppState {
    AppState {
        groups: state.groups.clone(),
        tasks: state
            .tasks
            .iter()
            .map(|t| {
                if t.id == task_id {
                    Task {
                        done: !t.done,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect(),
    }
}

pub fn find_task(state: &AppState, task_id: TaskId) -> Option<&Task> {
    state.tasks.iter().find(|t| t.id == task_id)
}

// ---------------------------------------------------------------------------
// Derived reads
// ---------------------------------------------------------------------------

/// Tasks belonging to a group, in insertion order
pub fn tasks_for_group(state: &AppState, group_id: GroupId) -> impl Iterator<Item = &Task> {
    state.tasks.iter().filter(move |t| t.group_id == group_id)
}

/// Completion counts for a group's badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupProgress {
    pub done: usize,
    pub total: usize,
}

pub fn group_progress(state: &AppState, group_id: GroupId) -> GroupProgress {
    tasks_for_group(state, group_id).fold(GroupProgress::default(), |mut p, t| {
        p.total += 1;
        if t.done {
            p.done += 1;
        }
        p
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use pretty_assertions::assert_eq;

    fn two_groups_two_tasks() -> AppState {
        AppState {
            groups: vec![Group::new(GroupId(1), "One"), Group::new(GroupId(2), "Two")],
            tasks: vec![
                Task::new(TaskId(1), "t1", Difficulty::Easy, GroupId(1)),
                Task::new(TaskId(2), "t2", Difficulty::Hard, GroupId(2)),
            ],
        }
    }

    // --- Groups ---

    #[test]
    fn test_upsert_group_appends_new() {
        let state = AppState::seed();
        let next = upsert_group(&state, Group::new(GroupId(3), "Personal"));
        assert_eq!(next.groups.len(), 3);
        assert_eq!(next.groups[2], Group::new(GroupId(3), "Personal"));
        // Input untouched
        assert_eq!(state.groups.len(), 2);
    }

    #[test]
    fn test_upsert_group_replaces_in_place() {
        let state = AppState::seed();
        let next = upsert_group(&state, Group::new(GroupId(1), "Office"));
        assert_eq!(next.groups.len(), 2);
        assert_eq!(next.groups[0].name, "Office");
        assert_eq!(next.groups[1].name, "Home");
        assert_eq!(next.tasks, state.tasks);
    }

    #[test]
    fn test_upsert_group_then_lookup_returns_it() {
        let state = AppState::seed();
        for group in [Group::new(GroupId(2), "Chores"), Group::new(GroupId(40), "New")] {
            let next = upsert_group(&state, group.clone());
            assert_eq!(find_group(&next, group.id), Some(&group));
        }
    }

    #[test]
    fn test_upsert_group_allows_duplicate_names() {
        let state = AppState::seed();
        let next = upsert_group(&state, Group::new(GroupId(9), "Work"));
        assert_eq!(next.groups.iter().filter(|g| g.name == "Work").count(), 2);
    }

    #[test]
    fn test_delete_group_cascades() {
        let state = two_groups_two_tasks();
        let next = delete_group(&state, GroupId(1));
        assert_eq!(next.groups, vec![Group::new(GroupId(2), "Two")]);
        assert_eq!(next.tasks.len(), 1);
        assert_eq!(next.tasks[0].id, TaskId(2));
    }

    #[test]
    fn test_delete_group_leaves_no_orphans() {
        let mut state = two_groups_two_tasks();
        state.tasks.push(Task::new(TaskId(3), "t3", Difficulty::Medium, GroupId(1)));
        state.tasks.push(Task::new(TaskId(4), "t4", Difficulty::Medium, GroupId(2)));
        let next = delete_group(&state, GroupId(1));
        assert!(next.tasks.iter().all(|t| t.group_id != GroupId(1)));
        let ids: Vec<TaskId> = next.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(2), TaskId(4)]);
    }

    #[test]
    fn test_delete_missing_group_is_noop() {
        let state = two_groups_two_tasks();
        assert_eq!(delete_group(&state, GroupId(99)), state);
    }

    // --- Tasks ---

    #[test]
    fn test_upsert_task_appends_and_replaces() {
        let state = two_groups_two_tasks();
        let added = upsert_task(
            &state,
            Task::new(TaskId(3), "t3", Difficulty::Medium, GroupId(2)),
        );
        assert_eq!(added.tasks.len(), 3);
        assert_eq!(added.tasks[2].name, "t3");

        let renamed = upsert_task(
            &added,
            Task::new(TaskId(1), "renamed", Difficulty::Hard, GroupId(2)),
        );
        assert_eq!(renamed.tasks.len(), 3);
        assert_eq!(renamed.tasks[0].name, "renamed");
        assert_eq!(renamed.tasks[0].group_id, GroupId(2));
        assert_eq!(renamed.groups, state.groups);
    }

    #[test]
    fn test_delete_task_no_cascade() {
        let state = two_groups_two_tasks();
        let next = delete_task(&state, TaskId(1));
        assert_eq!(next.groups, state.groups);
        assert_eq!(next.tasks.len(), 1);
        assert_eq!(next.tasks[0].id, TaskId(2));
    }

    #[test]
    fn test_delete_missing_task_is_noop() {
        let state = two_groups_two_tasks();
        assert_eq!(delete_task(&state, TaskId(42)), state);
    }

    #[test]
    fn test_toggle_task_done_only_flips_done() {
        let state = AppState::seed();
        let next = toggle_task_done(&state, TaskId(1));
        let before = find_task(&state, TaskId(1)).unwrap();
        let after = find_task(&next, TaskId(1)).unwrap();
        assert!(after.done);
        assert_eq!(
            Task {
                done: before.done,
                ..after.clone()
            },
            *before
        );
        assert_eq!(next.tasks[1], state.tasks[1]);
    }

    #[test]
    fn test_toggle_task_done_twice_restores() {
        let state = AppState::seed();
        for id in [TaskId(1), TaskId(2)] {
            let twice = toggle_task_done(&toggle_task_done(&state, id), id);
            assert_eq!(twice, state);
        }
    }

    #[test]
    fn test_toggle_missing_task_is_noop() {
        let state = AppState::seed();
        assert_eq!(toggle_task_done(&state, TaskId(77)), state);
    }

    // --- Derived reads ---

    #[test]
    fn test_tasks_for_group_filters_in_order() {
        let mut state = two_groups_two_tasks();
        state.tasks.push(Task::new(TaskId(5), "t5", Difficulty::Easy, GroupId(1)));
        state.tasks.push(Task::new(TaskId(3), "t3", Difficulty::Easy, GroupId(1)));
        let ids: Vec<TaskId> = tasks_for_group(&state, GroupId(1)).map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(1), TaskId(5), TaskId(3)]);
        assert!(tasks_for_group(&state, GroupId(1)).all(|t| t.group_id == GroupId(1)));
        assert_eq!(tasks_for_group(&state, GroupId(99)).count(), 0);
    }

    #[test]
    fn test_group_progress() {
        let mut state = AppState::seed();
        state.tasks.push(Task::new(TaskId(3), "x", Difficulty::Easy, GroupId(2)));
        assert_eq!(
            group_progress(&state, GroupId(2)),
            GroupProgress { done: 1, total: 2 }
        );
        assert_eq!(
            group_progress(&state, GroupId(1)),
            GroupProgress { done: 0, total: 1 }
        );
        assert_eq!(group_progress(&state, GroupId(9)), GroupProgress::default());
    }
}
