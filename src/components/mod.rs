//! UI Components
//!
//! Leptos components of the to-do page.

mod delete_all_dialog;
mod error_banner;
mod new_todo_input;
mod todo_footer;
mod todo_row;

pub use delete_all_dialog::DeleteAllDialog;
pub use error_banner::ErrorBanner;
pub use new_todo_input::NewTodoInput;
pub use todo_footer::TodoFooter;
pub use todo_row::TodoRow;
