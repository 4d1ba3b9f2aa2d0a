//! Libreria Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    _ = console_log::init_with_level(config.log_level);
    log::info!("[APP] Books endpoint: {}", config.api.collection_url());

    mount_to_body(move || view! { <App config=config /> });
}
