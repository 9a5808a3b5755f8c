//! To-do List Operations
//!
//! The four user-triggered operations: load, submit, delete one and
//! delete all. Each holds the busy gate while its requests are in flight
//! and only touches the mirror after the server confirmed the change.

use log::{debug, error, info, warn};

use crate::api::TodoApi;
use crate::error::{ActionError, ApiError, Failure};
use crate::models::{NewTodo, TodoId, TodoItem};
use crate::view::{BusyGuard, TodoView};

pub struct TodoActions<A, V> {
    api: A,
    view: V,
}

impl<A: TodoApi, V: TodoView> TodoActions<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn acquire(&self, op: &str) -> Result<BusyGuard<'_, V>, ActionError> {
        BusyGuard::acquire(&self.view).ok_or_else(|| {
            warn!("[TODO] {} refused: another operation is in flight", op);
            ActionError::Busy
        })
    }

    /// Log the cause, show the generic banner
    fn fail(&self, failure: Failure, source: ApiError) -> ActionError {
        error!("[TODO] {}: {}", failure, source);
        self.view.set_error(Some(failure.to_string()));
        ActionError::Request { failure, source }
    }

    /// Replace the mirror with the owner's collection.
    ///
    /// Returns the number of items loaded. On failure the mirror is left
    /// as it was.
    pub async fn load_all(&self) -> Result<usize, ActionError> {
        let _busy = self.acquire("load")?;
        match self.api.list().await {
            Ok(items) => {
                debug!("[TODO] Loaded {} items", items.len());
                let count = items.len();
                self.view.replace_items(items);
                Ok(count)
            }
            Err(err) => Err(self.fail(Failure::Load, err)),
        }
    }

    /// Create a todo from the draft and append the server's record.
    ///
    /// A draft that is blank after trimming is ignored: `Ok(None)`, no
    /// request, no state change.
    pub async fn submit_draft(&self) -> Result<Option<TodoItem>, ActionError> {
        let label = self.view.draft_label();
        if label.trim().is_empty() {
            return Ok(None);
        }

        let _busy = self.acquire("submit")?;
        let todo = NewTodo::new(label);
        match self.api.create(&todo).await {
            Ok(created) => {
                info!("[TODO] Created #{} {:?}", created.id, created.label);
                self.view.push_item(created.clone());
                self.view.set_draft_label(String::new());
                Ok(Some(created))
            }
            Err(err) => Err(self.fail(Failure::Create, err)),
        }
    }

    pub async fn delete_one(&self, id: TodoId) -> Result<(), ActionError> {
        let _busy = self.acquire("delete")?;
        match self.api.delete(id).await {
            Ok(()) => {
                info!("[TODO] Deleted #{}", id);
                self.view.remove_item(id);
                Ok(())
            }
            Err(err) => Err(self.fail(Failure::Delete, err)),
        }
    }

    /// Delete every item, one request at a time, in list order.
    ///
    /// Stops at the first failed delete. Items deleted before it are gone
    /// from the mirror, the failed one and everything after it stay. No
    /// re-fetch follows. Returns the number of items deleted.
    pub async fn delete_all(&self) -> Result<usize, ActionError> {
        let _busy = self.acquire("delete all")?;
        let items = self.view.items();
        let total = items.len();

        for (deleted, item) in items.iter().enumerate() {
            if let Err(source) = self.api.delete(item.id).await {
                error!(
                    "[TODO] Delete all stopped at #{} after {} of {}: {}",
                    item.id, deleted, total, source
                );
                self.view.set_error(Some(Failure::Delete.to_string()));
                return Err(ActionError::BulkDelete {
                    deleted,
                    total,
                    failed_id: item.id,
                    source,
                });
            }
            self.view.remove_item(item.id);
        }

        info!("[TODO] Deleted all {} items", total);
        self.view.replace_items(Vec::new());
        Ok(total)
    }
}
