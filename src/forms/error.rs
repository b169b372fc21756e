/// Which input a validation error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Group,
}

/// Input validation failures. Shown inline under the offending field and
/// never escalated past the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Group name cannot be empty")]
    EmptyGroupName,
    #[error("Task name cannot be empty")]
    EmptyTaskName,
    #[error("Please select a group")]
    MissingGroup,
}

impl FormError {
    pub fn field(self) -> FormField {
        match self {
            FormError::EmptyGroupName | FormError::EmptyTaskName => FormField::Name,
            FormError::MissingGroup => FormField::Group,
        }
    }
}
