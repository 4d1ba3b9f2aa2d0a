//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Catalog mutations go through `Catalog` methods so the reconciliation
//! rules stay in `libreria-core`.

use leptos::prelude::*;
use reactive_stores::Store;

use libreria_core::{BookQuery, Catalog, Outcome};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Book list, loading flag and form buffers
    pub catalog: Catalog,
    /// Filter bar (not persisted)
    pub query: BookQuery,
    /// Dark theme flag (not persisted)
    pub dark_mode: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply a successful round trip to the catalog
pub fn store_apply(store: &AppStore, outcome: Outcome) {
    store.catalog().write().apply(outcome);
}
