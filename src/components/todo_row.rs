//! Todo Row Component
//!
//! One todo: its label and a delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::TodoItem;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// A single todo row
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let id = item.id;

    let on_delete = move |_: web_sys::MouseEvent| {
        let actions = ctx.actions();
        spawn_local(async move {
            let _ = actions.delete_one(id).await;
        });
    };

    view! {
        <div class="todo-row">
            <p class="todo-label">{item.label}</p>
            <button
                class="delete-btn"
                title="Delete task"
                prop:disabled=move || store.is_busy().get()
                on:click=on_delete
            >
                "×"
            </button>
        </div>
    }
}
