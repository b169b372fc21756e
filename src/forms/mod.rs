//! Dialog models: controlled forms that validate their own input and hand a
//! completed record (or an intent) back to the caller. None of them touch
//! `AppState`.

pub mod confirm;
pub mod error;
pub mod group_form;
pub mod task_form;
pub mod text_field;

pub use confirm::{ConfirmPrompt, DeleteTarget};
pub use error::{FormError, FormField};
pub use group_form::GroupForm;
pub use task_form::{TaskField, TaskForm};
pub use text_field::TextField;
