//! Wedderburn Intake Frontend Entry Point

mod app;
mod assistant;
mod commands;
mod components;
mod config;
mod context;
mod draft;
mod export;
mod markdown;
mod models;
mod router;
mod store;
mod wizard;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = AppConfig::from_window();
    tracing::info!(api_base = %config.api_base, "starting intake app");
    mount_to_body(move || view! { <App config=config.clone() /> });
}
