use crate::model::{Group, GroupId};
use crate::ops::ids::IdAllocator;

use super::error::FormError;
use super::text_field::TextField;

/// Create/edit form for a single group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupForm {
    /// `Some` in edit mode
    editing: Option<GroupId>,
    pub name: TextField,
    pub name_error: Option<FormError>,
}

impl GroupForm {
    pub fn create() -> Self {
        GroupForm {
            editing: None,
            name: TextField::default(),
            name_error: None,
        }
    }

    pub fn edit(group: &Group) -> Self {
        GroupForm {
            editing: Some(group.id),
            name: TextField::new(&group.name),
            name_error: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Group"
        } else {
            "Create Group"
        }
    }

    pub fn type_char(&mut self, c: char) {
        self.name.insert_char(c);
        self.clear_error_if_filled();
    }

    pub fn backspace(&mut self) {
        self.name.backspace();
        self.clear_error_if_filled();
    }

    pub fn paste(&mut self, text: &str) {
        self.name.insert_str(text);
        self.clear_error_if_filled();
    }

    fn clear_error_if_filled(&mut self) {
        if !self.name.is_blank() {
            self.name_error = None;
        }
    }

    /// Validate and build the completed record. A new id is minted only when
    /// a create-mode form validates.
    pub fn submit(&mut self, ids: &mut IdAllocator) -> Result<Group, FormError> {
        if self.name.is_blank() {
            self.name_error = Some(FormError::EmptyGroupName);
            return Err(FormError::EmptyGroupName);
        }
        let id = match self.editing {
            Some(id) => id,
            None => ids.next_group_id(),
        };
        Ok(Group::new(id, self.name.value().trim()))
    }
}
