//! Data structures exchanged with the remote collection.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a todo
pub type TodoId = u64;

/// A todo as stored by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub label: String,
    #[serde(default)]
    pub is_done: bool,
}

/// Body of the create call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub label: String,
    pub is_done: bool,
}

impl NewTodo {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_done: false,
        }
    }
}

/// Envelope returned by `GET /users/{owner}`.
///
/// The service sends more fields (the user name, for one); only the
/// collection is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserTodos {
    #[serde(default)]
    pub todos: Vec<TodoItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_envelope_ignores_extra_fields() {
        let body = json!({
            "name": "tester25",
            "todos": [
                {"id": 1, "label": "buy milk", "is_done": false},
                {"id": 7, "label": "call mom", "is_done": true}
            ]
        });
        let parsed: UserTodos = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.todos.len(), 2);
        assert_eq!(parsed.todos[1].id, 7);
        assert!(parsed.todos[1].is_done);
    }

    #[test]
    fn test_user_envelope_without_todos_is_empty() {
        let parsed: UserTodos = serde_json::from_value(json!({"name": "x"})).unwrap();
        assert!(parsed.todos.is_empty());
    }

    #[test]
    fn test_new_todo_is_never_done() {
        let draft = NewTodo::new("  water plants ");
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({"label": "  water plants ", "is_done": false})
        );
    }
}
