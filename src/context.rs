//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use todo_sync::{ApiConfig, RestClient, TodoActions};

use crate::store::{AppStore, StoreView};

pub type Actions = TodoActions<RestClient, StoreView>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// View state the components render from
    pub store: AppStore,
    /// Where the remote collection lives
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: ApiConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Operations bound to the remote collection and the store
    pub fn actions(&self) -> Actions {
        let client = RestClient::new(self.config.get_value());
        TodoActions::new(client, StoreView(self.store))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
