//! To-Do Frontend App
//!
//! Single column: error banner, draft input, rows, footer, and the
//! delete-all confirmation dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_sync::{ApiConfig, TodoItem};

use crate::components::{DeleteAllDialog, ErrorBanner, NewTodoInput, TodoFooter, TodoRow};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let config = ApiConfig::from_build_env();
    log::info!("[APP] Remote collection {} (owner {})", config.base_url, config.owner);

    let ctx = AppContext::new(store, config);
    provide_context(store);
    provide_context(ctx);

    let (confirm_open, set_confirm_open) = signal(false);

    // Load once on mount; the operation reads the store untracked
    Effect::new(move |_| {
        let actions = ctx.actions();
        spawn_local(async move {
            let _ = actions.load_all().await;
        });
    });

    view! {
        <div class="todo-page">
            <h1 class="todo-title">"TODOS"</h1>
            <div class="todo-column">
                <ErrorBanner />
                <NewTodoInput />

                <For
                    each=move || store.items().get()
                    key=|item| item.id
                    children=move |item: TodoItem| view! { <TodoRow item=item /> }
                />

                <TodoFooter set_confirm_open=set_confirm_open />
            </div>

            <DeleteAllDialog open=confirm_open set_open=set_confirm_open />
        </div>
    }
}
