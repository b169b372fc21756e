use crate::model::{Difficulty, Group, GroupId, Task, TaskId};
use crate::ops::ids::IdAllocator;

use super::error::FormError;
use super::text_field::TextField;

/// Focusable inputs of the task form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Name,
    Description,
    Difficulty,
    Group,
    /// Only reachable in edit mode
    Done,
}

/// Create/edit form for a task, with a picker over the current groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    editing: Option<TaskId>,
    /// Groups available in the picker, in display order
    groups: Vec<Group>,
    pub focus: TaskField,
    pub name: TextField,
    pub description: TextField,
    pub difficulty: Difficulty,
    pub group_id: Option<GroupId>,
    pub done: bool,
    pub name_error: Option<FormError>,
    pub group_error: Option<FormError>,
}

impl TaskForm {
    /// Blank form: easy, not done, first group preselected (if any)
    pub fn create(groups: &[Group]) -> Self {
        TaskForm {
            editing: None,
            groups: groups.to_vec(),
            focus: TaskField::Name,
            name: TextField::default(),
            description: TextField::default(),
            difficulty: Difficulty::default(),
            group_id: groups.first().map(|g| g.id),
            done: false,
            name_error: None,
            group_error: None,
        }
    }

    pub fn edit(task: &Task, groups: &[Group]) -> Self {
        TaskForm {
            editing: Some(task.id),
            groups: groups.to_vec(),
            focus: TaskField::Name,
            name: TextField::new(&task.name),
            description: TextField::new(&task.description),
            difficulty: task.difficulty,
            group_id: Some(task.group_id),
            done: task.done,
            name_error: None,
            group_error: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Task"
        } else {
            "Create Task"
        }
    }

    /// Name of the selected group, if it is still in the picker
    pub fn selected_group_name(&self) -> Option<&str> {
        let id = self.group_id?;
        self.groups
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.as_str())
    }

    fn fields(&self) -> &'static [TaskField] {
        if self.is_edit() {
            &[
                TaskField::Name,
                TaskField::Description,
                TaskField::Difficulty,
                TaskField::Group,
                TaskField::Done,
            ]
        } else {
            &[
                TaskField::Name,
                TaskField::Description,
                TaskField::Difficulty,
                TaskField::Group,
            ]
        }
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + fields.len() - 1) % fields.len()];
    }

    /// The text input under focus, if the focused field is textual
    pub fn focused_text_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            TaskField::Name => Some(&mut self.name),
            TaskField::Description => Some(&mut self.description),
            _ => None,
        }
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(field) = self.focused_text_mut() {
            field.insert_char(c);
        }
        self.clear_name_error_if_filled();
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_text_mut() {
            field.backspace();
        }
        self.clear_name_error_if_filled();
    }

    /// Insert pasted text into the focused text field
    pub fn paste(&mut self, text: &str) {
        if let Some(field) = self.focused_text_mut() {
            field.insert_str(text);
        }
        self.clear_name_error_if_filled();
    }

    fn clear_name_error_if_filled(&mut self) {
        if self.focus == TaskField::Name && !self.name.is_blank() {
            self.name_error = None;
        }
    }

    /// Step the focused picker forward (difficulty or group)
    pub fn cycle_next(&mut self) {
        match self.focus {
            TaskField::Difficulty => self.difficulty = self.difficulty.next(),
            TaskField::Group => self.step_group(1),
            _ => {}
        }
    }

    pub fn cycle_prev(&mut self) {
        match self.focus {
            TaskField::Difficulty => self.difficulty = self.difficulty.prev(),
            TaskField::Group => self.step_group(-1),
            _ => {}
        }
    }

    fn step_group(&mut self, delta: isize) {
        if self.groups.is_empty() {
            return;
        }
        let len = self.groups.len() as isize;
        let current = self
            .group_id
            .and_then(|id| self.groups.iter().position(|g| g.id == id));
        let idx = match current {
            Some(i) => (i as isize + delta).rem_euclid(len) as usize,
            None => 0,
        };
        self.select_group(self.groups[idx].id);
    }

    pub fn select_group(&mut self, group_id: GroupId) {
        self.group_id = Some(group_id);
        self.group_error = None;
    }

    /// Flip the done switch. Create mode has no switch, so this is ignored there.
    pub fn toggle_done(&mut self) {
        if self.is_edit() {
            self.done = !self.done;
        }
    }

    /// Validate and build the completed record. Name is checked before group.
    pub fn submit(&mut self, ids: &mut IdAllocator) -> Result<Task, FormError> {
        if self.name.is_blank() {
            self.name_error = Some(FormError::EmptyTaskName);
            return Err(FormError::EmptyTaskName);
        }
        let group_id = match self.group_id {
            Some(id) if self.groups.iter().any(|g| g.id == id) => id,
            _ => {
                self.group_error = Some(FormError::MissingGroup);
                return Err(FormError::MissingGroup);
            }
        };
        let id = match self.editing {
            Some(id) => id,
            None => ids.next_task_id(),
        };
        Ok(Task {
            id,
            name: self.name.value().trim().to_string(),
            description: self.description.value().trim().to_string(),
            difficulty: self.difficulty,
            done: self.done,
            group_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn groups() -> Vec<Group> {
        vec![
            Group::new(GroupId(1), "Work"),
            Group::new(GroupId(2), "Home"),
            Group::new(GroupId(3), "Personal"),
        ]
    }

    fn type_str(form: &mut TaskForm, s: &str) {
        for c in s.chars() {
            form.type_char(c);
        }
    }

    #[test]
    fn test_create_defaults() {
        let form = TaskForm::create(&groups());
        assert_eq!(form.difficulty, Difficulty::Easy);
        assert_eq!(form.group_id, Some(GroupId(1)));
        assert!(!form.done);
        assert_eq!(form.title(), "Create Task");
        assert_eq!(form.selected_group_name(), Some("Work"));
    }

    #[test]
    fn test_create_full_task() {
        let mut ids = IdAllocator::from_state(&crate::model::AppState::seed());
        let mut form = TaskForm::create(&groups());
        type_str(&mut form, " Call dentist ");
        form.focus_next();
        type_str(&mut form, " before noon ");
        form.focus_next();
        form.cycle_next();
        form.focus_next();
        form.cycle_prev(); // wraps from Work to Personal

        let task = form.submit(&mut ids).unwrap();
        assert_eq!(
            task,
            Task {
                id: TaskId(3),
                name: "Call dentist".into(),
                description: "before noon".into(),
                difficulty: Difficulty::Medium,
                done: false,
                group_id: GroupId(3),
            }
        );
    }

    #[test]
    fn test_edit_prefills_and_keeps_id() {
        let mut ids = IdAllocator::default();
        let task = Task::new(TaskId(9), "Old", Difficulty::Hard, GroupId(2))
            .with_description("desc")
            .with_done(true);
        let mut form = TaskForm::edit(&task, &groups());
        assert_eq!(form.title(), "Edit Task");
        assert_eq!(form.name.value(), "Old");
        assert_eq!(form.description.value(), "desc");
        assert_eq!(form.group_id, Some(GroupId(2)));

        form.toggle_done();
        let saved = form.submit(&mut ids).unwrap();
        assert_eq!(saved, task.clone().with_done(false));
    }

    #[test]
    fn test_done_switch_only_in_edit_mode() {
        let mut form = TaskForm::create(&groups());
        form.toggle_done();
        assert!(!form.done);
        // Tab order never reaches Done in create mode
        for _ in 0..8 {
            form.focus_next();
            assert_ne!(form.focus, TaskField::Done);
        }

        let task = Task::new(TaskId(1), "x", Difficulty::Easy, GroupId(1));
        let mut edit = TaskForm::edit(&task, &groups());
        edit.focus_prev();
        assert_eq!(edit.focus, TaskField::Done);
    }

    #[test]
    fn test_empty_name_reported_first() {
        let mut ids = IdAllocator::default();
        let mut form = TaskForm::create(&[]);
        assert_eq!(form.submit(&mut ids), Err(FormError::EmptyTaskName));
        assert_eq!(form.name_error, Some(FormError::EmptyTaskName));
        assert_eq!(form.group_error, None);
    }

    #[test]
    fn test_missing_group_blocks_submit() {
        let mut ids = IdAllocator::default();
        let mut form = TaskForm::create(&[]);
        type_str(&mut form, "Task");
        assert_eq!(form.name_error, None);
        assert_eq!(form.submit(&mut ids), Err(FormError::MissingGroup));
        assert_eq!(form.group_error, Some(FormError::MissingGroup));
        assert_eq!(ids.next_task_id(), TaskId(1));
    }

    #[test]
    fn test_selecting_group_clears_error() {
        let mut ids = IdAllocator::default();
        let mut form = TaskForm::create(&groups());
        type_str(&mut form, "Task");
        form.group_id = None;
        let _ = form.submit(&mut ids);
        assert!(form.group_error.is_some());
        form.focus = TaskField::Group;
        form.cycle_next();
        assert_eq!(form.group_id, Some(GroupId(1)));
        assert!(form.group_error.is_none());
    }

    #[test]
    fn test_typing_in_description_keeps_name_error() {
        let mut ids = IdAllocator::default();
        let mut form = TaskForm::create(&groups());
        let _ = form.submit(&mut ids);
        form.focus_next();
        type_str(&mut form, "details");
        assert_eq!(form.name_error, Some(FormError::EmptyTaskName));
        assert_eq!(form.description.value(), "details");
    }

    #[test]
    fn test_paste_into_name_clears_error() {
        let mut form = TaskForm::create(&groups());
        assert!(form.submit(&mut IdAllocator::default()).is_err());
        form.paste("Call\ndentist");
        assert_eq!(form.name.value(), "Call dentist");
        assert_eq!(form.name_error, None);
    }
}
