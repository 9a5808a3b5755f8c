//! API Configuration
//!
//! Where the remote collection lives and whose collection it is.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::models::TodoId;

pub const DEFAULT_BASE_URL: &str = "https://playground.4geeks.com/todo";
pub const DEFAULT_OWNER: &str = "tester25";

/// Characters that cannot appear raw inside one path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Service root, without trailing slash
    pub base_url: String,
    /// Owner key selecting the collection
    pub owner: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_OWNER)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, owner: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            owner: owner.into(),
        }
    }

    /// Configuration baked in at build time.
    ///
    /// A browser bundle has no process environment, so `TODO_API_BASE` and
    /// `TODO_OWNER` are read when the crate is compiled. Unset or empty
    /// values fall back to the defaults.
    pub fn from_build_env() -> Self {
        let base = option_env!("TODO_API_BASE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        let owner = option_env!("TODO_OWNER")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_OWNER);
        Self::new(base, owner)
    }

    fn owner_segment(&self) -> String {
        utf8_percent_encode(&self.owner, PATH_SEGMENT).to_string()
    }

    /// `GET` target listing the owner's collection
    pub fn user_url(&self) -> String {
        format!("{}/users/{}", self.base_url, self.owner_segment())
    }

    /// `POST` target creating a todo for the owner
    pub fn create_url(&self) -> String {
        format!("{}/todos/{}", self.base_url, self.owner_segment())
    }

    /// `DELETE` target for a single todo
    pub fn todo_url(&self, id: TodoId) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_playground() {
        let config = ApiConfig::default();
        assert_eq!(
            config.user_url(),
            "https://playground.4geeks.com/todo/users/tester25"
        );
        assert_eq!(
            config.create_url(),
            "https://playground.4geeks.com/todo/todos/tester25"
        );
        assert_eq!(
            config.todo_url(42),
            "https://playground.4geeks.com/todo/todos/42"
        );
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ApiConfig::new("http://127.0.0.1:8080/", "alice");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.user_url(), "http://127.0.0.1:8080/users/alice");
    }

    #[test]
    fn test_owner_is_a_single_segment() {
        let config = ApiConfig::new("http://host", "team a/b");
        assert_eq!(config.user_url(), "http://host/users/team%20a%2Fb");
        assert_eq!(config.create_url(), "http://host/todos/team%20a%2Fb");
    }
}
