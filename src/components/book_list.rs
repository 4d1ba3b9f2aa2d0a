//! Book List Component
//!
//! Filtered, sorted list of book cards with per-item edit/delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use libreria_core::{ops, Book};

use crate::api::HttpBookApi;
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

/// One record with its actions
#[component]
fn BookCard(book: Book) -> impl IntoView {
    let store = use_app_store();
    let api = expect_context::<HttpBookApi>();
    let id = book.id;

    let is_edited = move || {
        store
            .catalog()
            .with(|catalog| catalog.editing().map(|session| session.id) == Some(id))
    };

    let on_edit = move |_| {
        if !store.catalog().write().begin_edit(id) {
            log::warn!("[LIST] Book {} is no longer listed", id);
        }
    };

    let on_delete = move |_| {
        let api = api.clone();
        spawn_local(async move {
            if let Ok(outcome) = ops::delete_book(&api, id).await {
                store_apply(&store, outcome);
            }
        });
    };

    view! {
        <article class=move || if is_edited() { "book-card card editing" } else { "book-card card" }>
            <div class="book-info">
                <h3 class="book-title">{book.title}</h3>
                <p class="book-meta">
                    "👤 " {book.author} " · 📅 " {book.year} " • 🎭 " <em>{book.genre}</em>
                </p>
            </div>
            <div class="book-actions">
                <button class="btn edit" on:click=on_edit>"✏️ Modifica"</button>
                <button class="btn delete" on:click=on_delete>"🗑️ Elimina"</button>
            </div>
        </article>
    }
}

#[component]
pub fn BookList() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let query = store.query().get();
        store.catalog().with(|catalog| query.apply(catalog.books()))
    });
    let is_loading = move || store.catalog().with(|catalog| catalog.is_loading());

    view! {
        <Show
            when=move || !is_loading()
            fallback=|| view! {
                <div class="loading">
                    <div class="spinner"></div>
                    <p>"Caricamento libri..."</p>
                </div>
            }
        >
            <p class="count">{move || format!("📊 Libri trovati: {}", visible.with(|books| books.len()))}</p>
            <div class="book-list">
                // Keyed on the whole record, so an edited book gets a fresh card
                <For
                    each=move || visible.get()
                    key=|book| book.clone()
                    children=|book| view! { <BookCard book=book /> }
                />
                <Show when=move || visible.with(|books| books.is_empty())>
                    <p class="empty">"📭 Nessun libro trovato con i filtri applicati."</p>
                </Show>
            </div>
        </Show>
    }
}
