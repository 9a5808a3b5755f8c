//! Todo Sync
//!
//! Keeps a local mirror of a remote to-do collection in step with the
//! REST service that owns it. Front ends plug in through [`TodoView`].

pub mod actions;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod view;

pub use actions::TodoActions;
pub use api::{RestClient, TodoApi};
pub use config::ApiConfig;
pub use error::{ActionError, ApiError, Failure};
pub use models::{NewTodo, TodoId, TodoItem, UserTodos};
pub use view::{BusyGuard, MemoryView, TodoState, TodoView};
