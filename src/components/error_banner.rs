//! Error Banner Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Shows the last failure's message, if any
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.last_error().get().is_some()>
            <div class="alert alert-danger" role="alert">
                {move || store.last_error().get().unwrap_or_default()}
            </div>
        </Show>
    }
}
