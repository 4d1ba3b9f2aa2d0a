//! Book Form Component
//!
//! One form for both create and edit. In edit mode the inputs show the
//! edit buffer; the create draft is kept aside until edit mode ends.

use leptos::prelude::*;
use leptos::task::spawn_local;

use libreria_core::{ops, BookField};

use crate::api::HttpBookApi;
use crate::components::DeleteConfirmButton;
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

#[component]
pub fn BookForm() -> impl IntoView {
    let store = use_app_store();
    let api = expect_context::<HttpBookApi>();

    let is_editing = move || store.catalog().with(|catalog| catalog.is_editing());

    let submit_api = api.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submission = match store.catalog().with_untracked(|catalog| catalog.submission()) {
            Ok(submission) => submission,
            Err(err) => {
                log::warn!("[FORM] Not submitted: {}", err);
                return;
            }
        };
        let api = submit_api.clone();
        spawn_local(async move {
            // On failure the form keeps its contents (and edit mode)
            if let Ok(outcome) = ops::submit(&api, submission).await {
                store_apply(&store, outcome);
            }
        });
    };

    let on_clear = Callback::new(move |_: ()| {
        let api = api.clone();
        spawn_local(async move {
            if let Ok(Some(outcome)) = ops::clear_books(&api, true).await {
                store_apply(&store, outcome);
            }
        });
    });

    view! {
        <form class="form card" on:submit=on_submit>
            {BookField::ALL.into_iter().map(|field| view! {
                <input
                    class="input"
                    type={field.input_type()}
                    placeholder={field.placeholder()}
                    prop:value=move || store.catalog().with(|catalog| catalog.form().field(field).to_string())
                    on:input=move |ev| store.catalog().write().set_field(field, event_target_value(&ev))
                    required=true
                />
            }).collect_view()}

            <button type="submit" class="btn primary">
                {move || if is_editing() { "✨ Aggiorna" } else { "➕ Aggiungi" }}
            </button>

            <Show when=is_editing>
                <button
                    type="button"
                    class="btn secondary"
                    on:click=move |_| store.catalog().write().cancel_edit()
                >
                    "❌ Annulla"
                </button>
            </Show>

            <DeleteConfirmButton
                button_class="btn danger"
                label="🗑️ Svuota Libreria"
                prompt="Eliminare tutti i libri?"
                on_confirm=on_clear
            />
        </form>
    }
}
