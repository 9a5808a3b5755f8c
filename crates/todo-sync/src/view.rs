//! View State
//!
//! The state a to-do list view renders from, behind a trait so the
//! operations work against a reactive store or a plain in-memory copy.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{TodoId, TodoItem};

/// State container the operations read and write.
///
/// Methods take `&self`: implementors are handles with interior
/// mutability (reactive stores, `Rc<RefCell<_>>`). Reads must not
/// subscribe the caller to changes.
pub trait TodoView {
    fn items(&self) -> Vec<TodoItem>;
    fn replace_items(&self, items: Vec<TodoItem>);
    fn push_item(&self, item: TodoItem);
    /// Drop every item carrying `id`
    fn remove_item(&self, id: TodoId);

    fn draft_label(&self) -> String;
    fn set_draft_label(&self, label: String);

    fn is_busy(&self) -> bool;
    fn set_busy(&self, busy: bool);

    fn last_error(&self) -> Option<String>;
    fn set_error(&self, message: Option<String>);
}

/// Holds the busy gate for the lifetime of one operation.
///
/// Acquiring sets `is_busy` and clears the last error; dropping clears
/// `is_busy` again on every exit path.
#[must_use = "the gate is released as soon as the guard is dropped"]
pub struct BusyGuard<'a, V: TodoView + ?Sized> {
    view: &'a V,
}

impl<'a, V: TodoView + ?Sized> BusyGuard<'a, V> {
    /// `None` if another operation already holds the gate
    pub fn acquire(view: &'a V) -> Option<Self> {
        if view.is_busy() {
            return None;
        }
        view.set_busy(true);
        view.set_error(None);
        Some(Self { view })
    }
}

impl<V: TodoView + ?Sized> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false);
    }
}

/// Snapshot of everything a to-do list view shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    pub items: Vec<TodoItem>,
    pub draft_label: String,
    pub is_busy: bool,
    pub last_error: Option<String>,
}

/// In-memory view, for headless use and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    state: Rc<RefCell<TodoState>>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<TodoItem>) -> Self {
        let view = Self::new();
        view.state.borrow_mut().items = items;
        view
    }

    pub fn snapshot(&self) -> TodoState {
        self.state.borrow().clone()
    }
}

impl TodoView for MemoryView {
    fn items(&self) -> Vec<TodoItem> {
        self.state.borrow().items.clone()
    }

    fn replace_items(&self, items: Vec<TodoItem>) {
        self.state.borrow_mut().items = items;
    }

    fn push_item(&self, item: TodoItem) {
        self.state.borrow_mut().items.push(item);
    }

    fn remove_item(&self, id: TodoId) {
        self.state.borrow_mut().items.retain(|item| item.id != id);
    }

    fn draft_label(&self) -> String {
        self.state.borrow().draft_label.clone()
    }

    fn set_draft_label(&self, label: String) {
        self.state.borrow_mut().draft_label = label;
    }

    fn is_busy(&self) -> bool {
        self.state.borrow().is_busy
    }

    fn set_busy(&self, busy: bool) {
        self.state.borrow_mut().is_busy = busy;
    }

    fn last_error(&self) -> Option<String> {
        self.state.borrow().last_error.clone()
    }

    fn set_error(&self, message: Option<String>) {
        self.state.borrow_mut().last_error = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: TodoId, label: &str) -> TodoItem {
        TodoItem {
            id,
            label: label.to_string(),
            is_done: false,
        }
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let view = MemoryView::new();
        view.set_error(Some("old".to_string()));
        {
            let _busy = BusyGuard::acquire(&view).expect("gate is free");
            assert!(view.is_busy());
            assert_eq!(view.last_error(), None);
        }
        assert!(!view.is_busy());
    }

    #[test]
    fn test_guard_refuses_when_held() {
        let view = MemoryView::new();
        let _busy = BusyGuard::acquire(&view).expect("gate is free");
        assert!(BusyGuard::acquire(&view).is_none());
        assert!(view.is_busy());
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let view = MemoryView::with_items(vec![item(1, "a"), item(2, "b"), item(3, "c")]);
        view.remove_item(2);
        assert_eq!(view.items(), vec![item(1, "a"), item(3, "c")]);
    }

    #[test]
    fn test_clones_share_state() {
        let view = MemoryView::new();
        let other = view.clone();
        other.push_item(item(5, "shared"));
        assert_eq!(view.items().len(), 1);
    }
}
