//! Remote Collection API
//!
//! `TodoApi` is the seam between the operations and the network;
//! `RestClient` is the reqwest implementation used by the app.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{NewTodo, TodoId, TodoItem, UserTodos};

/// The three calls the view needs from the service.
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait TodoApi {
    /// List the owner's collection in server order
    async fn list(&self) -> Result<Vec<TodoItem>, ApiError>;

    /// Create a todo; the returned record carries the assigned id
    async fn create(&self, todo: &NewTodo) -> Result<TodoItem, ApiError>;

    async fn delete(&self, id: TodoId) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    config: ApiConfig,
}

impl RestClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send and reject any non-2xx status
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait(?Send)]
impl TodoApi for RestClient {
    async fn list(&self) -> Result<Vec<TodoItem>, ApiError> {
        let url = self.config.user_url();
        log::debug!("[API] GET {}", url);
        let response = self.send(self.http.get(&url), &url).await?;
        let user: UserTodos = Self::decode(response, &url).await?;
        Ok(user.todos)
    }

    async fn create(&self, todo: &NewTodo) -> Result<TodoItem, ApiError> {
        let url = self.config.create_url();
        log::debug!("[API] POST {} label={:?}", url, todo.label);
        // .json() sets Content-Type: application/json
        let response = self.send(self.http.post(&url).json(todo), &url).await?;
        Self::decode(response, &url).await
    }

    async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
        let url = self.config.todo_url(id);
        log::debug!("[API] DELETE {}", url);
        self.send(self.http.delete(&url), &url).await?;
        Ok(())
    }
}
