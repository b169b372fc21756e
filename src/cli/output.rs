use serde::Serialize;

use crate::model::{AppState, Difficulty, Group, Task};
use crate::ops::state_ops::{group_progress, tasks_for_group};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub difficulty: Difficulty,
    pub done: bool,
}

#[derive(Serialize)]
pub struct GroupTreeJson {
    pub id: u64,
    pub name: String,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct GroupSummaryJson {
    pub id: u64,
    pub name: String,
    pub done: usize,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id.0,
        name: task.name.clone(),
        description: task.description.clone(),
        difficulty: task.difficulty,
        done: task.done,
    }
}

pub fn group_tree_to_json(state: &AppState, group: &Group) -> GroupTreeJson {
    GroupTreeJson {
        id: group.id.0,
        name: group.name.clone(),
        tasks: tasks_for_group(state, group.id).map(task_to_json).collect(),
    }
}

pub fn group_summary_to_json(state: &AppState, group: &Group) -> GroupSummaryJson {
    let progress = group_progress(state, group.id);
    GroupSummaryJson {
        id: group.id.0,
        name: group.name.clone(),
        done: progress.done,
        total: progress.total,
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `[x] Buy groceries (easy) #2`, with the description on its own line
pub fn format_task_line(task: &Task, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let check = if task.done { "[x]" } else { "[ ]" };
    let mut out = format!(
        "{}{} {} ({}) #{}",
        pad, check, task.name, task.difficulty, task.id
    );
    if !task.description.is_empty() {
        out.push_str(&format!("\n{}    {}", pad, task.description));
    }
    out
}

/// A group heading followed by its tasks
pub fn format_group_tree(state: &AppState, group: &Group) -> String {
    let progress = group_progress(state, group.id);
    let mut lines = vec![format!(
        "{} #{} [{}/{}]",
        group.name, group.id, progress.done, progress.total
    )];
    let mut any = false;
    for task in tasks_for_group(state, group.id) {
        lines.push(format_task_line(task, 2));
        any = true;
    }
    if !any {
        lines.push("  (no tasks)".to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupId, TaskId};
    use pretty_assertions::assert_eq;

    #[test]
    fn task_line_with_description() {
        let task = Task::new(TaskId(1), "Finish report", Difficulty::Hard, GroupId(1))
            .with_description("Q2 results");
        assert_eq!(
            format_task_line(&task, 2),
            "  [ ] Finish report (hard) #1\n      Q2 results"
        );
    }

    #[test]
    fn group_tree_for_seed() {
        let state = AppState::seed();
        assert_eq!(
            format_group_tree(&state, &state.groups[1]),
            "Home #2 [1/1]\n  [x] Buy groceries (easy) #2"
        );
    }

    #[test]
    fn empty_group_tree() {
        let state = AppState::default();
        let group = Group::new(GroupId(7), "Empty");
        assert_eq!(format_group_tree(&state, &group), "Empty #7 [0/0]\n  (no tasks)");
    }

    #[test]
    fn json_skips_empty_description() {
        let state = AppState::seed();
        let tree = group_tree_to_json(&state, &state.groups[1]);
        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 2,
                "name": "Home",
                "tasks": [
                    {"id": 2, "name": "Buy groceries", "difficulty": "easy", "done": true}
                ]
            })
        );
    }
}
