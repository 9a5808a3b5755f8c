//! Delete All Dialog Component
//!
//! Second step of the delete-all confirmation. Confirming closes the
//! dialog and deletes every todo one by one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn DeleteAllDialog(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_confirm = move |_: web_sys::MouseEvent| {
        set_open.set(false);
        let actions = ctx.actions();
        spawn_local(async move {
            let _ = actions.delete_all().await;
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| set_open.set(false)></div>
            <div class="modal-dialog" role="dialog" aria-labelledby="confirm-title">
                <div class="modal-header">
                    <h2 id="confirm-title" class="modal-title">"Attention"</h2>
                    <button
                        type="button"
                        class="btn-close"
                        aria-label="Close"
                        on:click=move |_| set_open.set(false)
                    >
                        "×"
                    </button>
                </div>
                <div class="modal-body">
                    <p>"Are you sure you want to delete all tasks? This action cannot be undone."</p>
                    {move || store.last_error().get().map(|msg| view! {
                        <p class="text-danger">{msg}</p>
                    })}
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn-secondary" on:click=move |_| set_open.set(false)>
                        "Close"
                    </button>
                    <button
                        type="button"
                        class="btn-danger"
                        prop:disabled=move || store.is_busy().get()
                        on:click=on_confirm
                    >
                        "Delete All"
                    </button>
                </div>
            </div>
        </Show>
    }
}
