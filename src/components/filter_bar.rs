//! Filter Bar Component
//!
//! Author/title search, genre selector, sort order and reset.

use leptos::prelude::*;

use libreria_core::SortKey;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    // Genres present in the list, for the dropdown
    let genres = Memo::new(move |_| store.catalog().with(|catalog| catalog.genres()));

    view! {
        <div class="filters card">
            <input
                class="input"
                placeholder="🔍 Cerca autore..."
                prop:value=move || store.query().with(|query| query.author.clone())
                on:input=move |ev| {
                    store.query().write().author = event_target_value(&ev);
                }
            />
            <input
                class="input"
                placeholder="🔍 Cerca titolo..."
                prop:value=move || store.query().with(|query| query.title.clone())
                on:input=move |ev| {
                    store.query().write().title = event_target_value(&ev);
                }
            />

            <select
                class="select"
                prop:value=move || store.query().with(|query| query.genre.clone().unwrap_or_default())
                on:change=move |ev| store.query().write().set_genre(event_target_value(&ev))
            >
                <option value="">"📚 Tutti i generi"</option>
                <For
                    each=move || genres.get()
                    key=|genre| genre.clone()
                    children=move |genre| {
                        let label = genre.clone();
                        view! { <option value=genre>{label}</option> }
                    }
                />
            </select>

            <select
                class="select"
                prop:value=move || store.query().with(|query| query.sort.as_str().to_string())
                on:change=move |ev| {
                    store.query().write().sort = SortKey::from_value(&event_target_value(&ev));
                }
            >
                <option value={SortKey::None.as_str()}>"🔀 Nessun ordinamento"</option>
                <option value={SortKey::Title.as_str()}>"📝 Ordina per titolo"</option>
                <option value={SortKey::Year.as_str()}>"📅 Ordina per anno"</option>
            </select>

            <button class="btn reset" on:click=move |_| store.query().write().reset()>
                "🔄 Reset Filtri"
            </button>
        </div>
    }
}
