//! New Todo Input Component
//!
//! Draft input; Enter submits the draft to the remote collection.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn NewTodoInput() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let actions = ctx.actions();
        spawn_local(async move {
            let _ = actions.submit_draft().await;
        });
    };

    view! {
        <input
            type="text"
            class="todo-input"
            placeholder="Add a new task..."
            prop:value=move || store.draft_label().get()
            on:input=move |ev| store.draft_label().set(event_target_value(&ev))
            on:keydown=on_keydown
        />
    }
}
