//! Theme Toggle Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Header button switching between light and dark theme
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    view! {
        <button
            class="btn theme-toggle"
            title=move || if store.dark_mode().get() { "Tema chiaro" } else { "Tema scuro" }
            on:click=move |_| store.dark_mode().update(|dark| *dark = !*dark)
        >
            {move || if store.dark_mode().get() { "☀️" } else { "🌙" }}
        </button>
    }
}
