//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{TodoId, TodoItem, TodoView};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Mirror of the remote collection, in server order
    pub items: Vec<TodoItem>,
    /// Text being typed for the next todo
    pub draft_label: String,
    /// A request is in flight; mutating controls are disabled
    pub is_busy: bool,
    /// Banner text of the last failed operation
    pub last_error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// The store as seen by the sync operations.
///
/// Reads are untracked: operations run outside any reactive scope and
/// must not subscribe to the fields they touch.
#[derive(Clone, Copy)]
pub struct StoreView(pub AppStore);

impl TodoView for StoreView {
    fn items(&self) -> Vec<TodoItem> {
        self.0.items().get_untracked()
    }

    fn replace_items(&self, items: Vec<TodoItem>) {
        self.0.items().set(items);
    }

    fn push_item(&self, item: TodoItem) {
        self.0.items().write().push(item);
    }

    fn remove_item(&self, id: TodoId) {
        self.0.items().write().retain(|item| item.id != id);
    }

    fn draft_label(&self) -> String {
        self.0.draft_label().get_untracked()
    }

    fn set_draft_label(&self, label: String) {
        self.0.draft_label().set(label);
    }

    fn is_busy(&self) -> bool {
        self.0.is_busy().get_untracked()
    }

    fn set_busy(&self, busy: bool) {
        self.0.is_busy().set(busy);
    }

    fn last_error(&self) -> Option<String> {
        self.0.last_error().get_untracked()
    }

    fn set_error(&self, message: Option<String>) {
        self.0.last_error().set(message);
    }
}
