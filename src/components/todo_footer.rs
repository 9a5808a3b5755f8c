//! Todo Footer Component
//!
//! Item counter and the button opening the delete-all dialog.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Counter text under the list
pub fn count_label(count: usize) -> String {
    format!("{} tareas", count)
}

#[component]
pub fn TodoFooter(set_confirm_open: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();

    let count = move || store.items().with(|items| items.len());
    let busy = move || store.is_busy().get();

    view! {
        <div class="todo-footer">
            <p class="todo-count">{move || count_label(count())}</p>
            <button
                class=move || if count() == 0 { "delete-all-btn invisible" } else { "delete-all-btn" }
                prop:disabled=move || busy() || count() == 0
                on:click=move |_| set_confirm_open.set(true)
            >
                {move || if busy() { "Loading..." } else { "Delete All" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 tareas");
        assert_eq!(count_label(1), "1 tareas");
        assert_eq!(count_label(2), "2 tareas");
    }
}
