//! Libreria Frontend App
//!
//! Header with theme toggle, form and filter bar, book list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use libreria_core::ops;

use crate::api::HttpBookApi;
use crate::components::{BookForm, BookList, FilterBar, ThemeToggle};
use crate::config::AppConfig;
use crate::store::{store_apply, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let api = HttpBookApi::new(config.api);

    // Provide store and client to all children
    provide_context(store);
    provide_context(api.clone());

    // Load books on mount
    Effect::new(move |_| {
        log::info!("[APP] Loading books");
        store.catalog().write().start_loading();
        let api = api.clone();
        spawn_local(async move {
            match ops::fetch_books(&api).await {
                Ok(outcome) => store_apply(&store, outcome),
                Err(_) => store.catalog().write().loading_failed(),
            }
        });
    });

    let app_class = move || {
        if store.dark_mode().get() {
            "app dark"
        } else {
            "app"
        }
    };

    view! {
        <div class=app_class>
            <header class="app-header">
                <h1>"📚 Gestione Libreria"</h1>
                <ThemeToggle />
            </header>

            <section class="controls">
                <BookForm />
                <FilterBar />
            </section>

            <main>
                <BookList />
            </main>

            <footer class="footer">"📖 Progetto Libreria • Rust + Leptos"</footer>
        </div>
    }
}
